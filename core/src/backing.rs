use alloc::rc::Rc;
use alloc::sync::Arc;
use core::cell::RefCell;
use core::fmt;

use crate::Guard;

/// A container the caller keeps ownership of and may keep mutating while
/// views observe it.
pub type Shared<C> = Rc<RefCell<C>>;

/// Wraps `container` so it can be observed by views.
pub fn shared<C>(container: C) -> Shared<C> {
    Rc::new(RefCell::new(container))
}

mod sealed {
    pub trait Sealed {}
}

/// Where a view reads from. Implemented only by [`Live`] and [`Owned`].
///
/// The handle type decides the thread-safety of the view: a live view holds
/// an `Rc` and stays on its thread, an owned one holds an `Arc` and is
/// `Send + Sync` whenever the store is.
pub trait Backing<C>: sealed::Sealed {
    type Handle: Clone;

    /// Whether reads observe a caller's container.
    const LIVE: bool;

    /// # Panics
    ///
    /// Panics if the container is live and currently mutably borrowed.
    fn read(handle: &Self::Handle) -> Guard<'_, C>;

    /// Like [`Backing::read`], but `None` while the container is mutably
    /// borrowed.
    fn try_read(handle: &Self::Handle) -> Option<Guard<'_, C>>;
}

/// The caller's container. Every read sees its current state.
#[derive(Debug)]
pub enum Live {}

/// A private store nothing can mutate.
#[derive(Debug)]
pub enum Owned {}

impl sealed::Sealed for Live {}
impl sealed::Sealed for Owned {}

impl<C> Backing<C> for Live {
    type Handle = Shared<C>;

    const LIVE: bool = true;

    fn read(handle: &Shared<C>) -> Guard<'_, C> {
        Guard::Live(handle.borrow())
    }

    fn try_read(handle: &Shared<C>) -> Option<Guard<'_, C>> {
        handle.try_borrow().ok().map(Guard::Live)
    }
}

impl<C> Backing<C> for Owned {
    type Handle = Arc<C>;

    const LIVE: bool = false;

    fn read(handle: &Arc<C>) -> Guard<'_, C> {
        Guard::Owned(&**handle)
    }

    fn try_read(handle: &Arc<C>) -> Option<Guard<'_, C>> {
        Some(Guard::Owned(&**handle))
    }
}

/// Formats `name(<store>)` the same way for live and owned stores.
pub(crate) fn debug_store<C, B>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    handle: &B::Handle,
) -> fmt::Result
where
    C: fmt::Debug,
    B: Backing<C>,
{
    let mut tuple = f.debug_tuple(name);
    match B::try_read(handle) {
        Some(store) => tuple.field(&*store),
        None => tuple.field(&format_args!("<borrowed>")),
    };
    tuple.finish()
}
