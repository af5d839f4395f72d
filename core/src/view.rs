//! Read-only views over collections.
//!
//! A [`View`] forwards every read to its backing store and offers nothing
//! that could change it. Built with [`View::over`], it observes a
//! caller-owned [`Shared`] container and reflects each later mutation:
//!
//! ```
//! use vitrine_core::{CollectionView, ListView, shared};
//!
//! let names = shared(vec!["Bob".to_string()]);
//! let view = ListView::over(&names);
//! assert_eq!(view.len(), 1);
//!
//! names.borrow_mut().push("Nancy".to_string());
//! assert_eq!(view.len(), 2);
//! assert!(view.contains(&"Nancy".to_string()));
//! ```
//!
//! Views have no mutators, so this does not compile:
//!
//! ```compile_fail
//! use vitrine_core::{ListView, shared};
//!
//! let names = shared(vec![1, 2, 3]);
//! let view = ListView::over(&names);
//! view.push(4);
//! ```
//!
//! Iteration goes through [`View::elements`], which holds a read borrow for
//! as long as it lives. The element sequence has no removal operation.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::backing::{Backing, Live, Shared, debug_store};
use crate::container::{Container, Sequence, SetLike};
use crate::{Copied, Error, Guard, Result};

/// The read surface shared by collection views, key-set views and value views.
pub trait CollectionView {
    type Item;

    fn len(&self) -> usize;

    /// True iff the backing store currently holds an element equal to `item`.
    fn contains(&self, item: &Self::Item) -> bool;

    /// Calls `f` on each current element in the store's native order.
    fn for_each_item(&self, f: impl FnMut(&Self::Item));

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True iff every element of `items` is present.
    fn contains_all<'i, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'i Self::Item>,
        Self::Item: 'i,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    /// A newly allocated snapshot of the current elements.
    fn to_vec(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        let mut items = Vec::with_capacity(self.len());
        self.for_each_item(|item| items.push(item.clone()));
        items
    }
}

/// Read-only view over a [`Container`].
///
/// `B` selects the store. [`Live`] follows a caller's [`Shared`] container;
/// [`Owned`](crate::Owned) reads a private copy (see [`Copied`]).
///
/// Cloning a view is cheap: the clone reads from the same backing store.
pub struct View<C, B: Backing<C> = Live> {
    handle: B::Handle,
}

pub type ListView<T, B = Live> = View<Vec<T>, B>;
pub type SetView<T, B = Live> = View<hashbrown::HashSet<T>, B>;

impl<C> View<C, Live> {
    /// A view over a caller-owned container. Reads observe every later
    /// mutation of `source`.
    pub fn over(source: &Shared<C>) -> Self {
        Self::from_handle(Rc::clone(source))
    }
}

impl<C, B: Backing<C>> View<C, B> {
    pub(crate) fn from_handle(handle: B::Handle) -> Self {
        Self { handle }
    }

    /// Whether this view tracks a caller's container rather than a private copy.
    pub fn is_live(&self) -> bool {
        B::LIVE
    }

    pub(crate) fn read(&self) -> Guard<'_, C> {
        B::read(&self.handle)
    }
}

impl<C: Container, B: Backing<C>> View<C, B> {
    /// Borrows the current elements for iteration.
    ///
    /// Every call observes the state of the store at that moment.
    ///
    /// # Panics
    ///
    /// Panics if the view is live and the source is mutably borrowed. The
    /// source cannot be mutated while the returned guard is alive.
    pub fn elements(&self) -> Elements<'_, C> {
        Elements { store: self.read() }
    }
}

impl<C: Clone, B: Backing<C>> View<C, B> {
    /// Copies the current contents into a [`Copied`] that no longer follows
    /// the source.
    pub fn detach(&self) -> Copied<C> {
        Copied::from_store(self.read().clone())
    }
}

impl<C: Sequence, B: Backing<C>> View<C, B> {
    /// The element at `index`.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] exactly when the backing
    /// sequence has no element there.
    pub fn get(&self, index: usize) -> Result<Guard<'_, C::Item>> {
        let store = self.read();
        let len = store.len();
        store.filter_map(|store| Sequence::get(store, index)).ok_or_else(|| {
            tracing::debug!(index, len, "index out of range");
            Error::IndexOutOfBounds { index, len }
        })
    }

    /// Index of the first element equal to `item`.
    pub fn index_of(&self, item: &C::Item) -> Option<usize>
    where
        C::Item: PartialEq,
    {
        self.read().position(item)
    }

    /// Index of the last element equal to `item`.
    pub fn last_index_of(&self, item: &C::Item) -> Option<usize>
    where
        C::Item: PartialEq,
    {
        self.read().rposition(item)
    }
}

impl<C: Sequence + Clone, B: Backing<C>> View<C, B> {
    /// A new list with the current elements. Changing it leaves the view alone.
    pub fn to_list(&self) -> C {
        self.read().clone()
    }
}

impl<C: SetLike + Clone, B: Backing<C>> View<C, B> {
    /// A new set with the current elements. Changing it leaves the view alone.
    pub fn to_set(&self) -> C {
        self.read().clone()
    }
}

impl<C: Container, B: Backing<C>> CollectionView for View<C, B> {
    type Item = C::Item;

    fn len(&self) -> usize {
        self.read().len()
    }

    fn contains(&self, item: &C::Item) -> bool {
        self.read().contains(item)
    }

    fn for_each_item(&self, f: impl FnMut(&C::Item)) {
        self.read().iter().for_each(f);
    }
}

impl<C, B: Backing<C>> Clone for View<C, B> {
    fn clone(&self) -> Self {
        Self::from_handle(self.handle.clone())
    }
}

/// Prints `View(<contents>)`, or `View(<borrowed>)` while a live source is
/// mutably borrowed.
impl<C: fmt::Debug, B: Backing<C>> fmt::Debug for View<C, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_store::<C, B>(f, "View", &self.handle)
    }
}

/// The current elements of a [`View`], borrowed for iteration.
pub struct Elements<'a, C> {
    store: Guard<'a, C>,
}

impl<C: Container> Elements<'_, C> {
    pub fn iter(&self) -> C::Iter<'_> {
        self.store.iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl<'g, C: Container> IntoIterator for &'g Elements<'_, C> {
    type Item = &'g C::Item;
    type IntoIter = C::Iter<'g>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C: Container> fmt::Debug for Elements<'_, C>
where
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
