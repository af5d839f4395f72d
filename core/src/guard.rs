use core::cell::Ref;
use core::fmt;
use core::ops::Deref;

/// Shared read access to data behind a view.
///
/// For a view over a caller's container this wraps a [`Ref`] into its
/// `RefCell`: the borrow is held until the guard is dropped, so the caller
/// cannot mutate the source meanwhile. For a copy it is a plain reference.
pub enum Guard<'a, T: ?Sized> {
    Live(Ref<'a, T>),
    Owned(&'a T),
}

impl<'a, T: ?Sized> Guard<'a, T> {
    /// Narrows the guard to a component of the borrowed data.
    pub fn map<U: ?Sized>(self, f: impl FnOnce(&T) -> &U) -> Guard<'a, U> {
        match self {
            Guard::Live(borrow) => Guard::Live(Ref::map(borrow, f)),
            Guard::Owned(value) => Guard::Owned(f(value)),
        }
    }

    /// Like [`Guard::map`], for lookups that can miss.
    pub fn filter_map<U: ?Sized>(self, f: impl FnOnce(&T) -> Option<&U>) -> Option<Guard<'a, U>> {
        match self {
            Guard::Live(borrow) => Ref::filter_map(borrow, f).ok().map(Guard::Live),
            Guard::Owned(value) => f(value).map(Guard::Owned),
        }
    }
}

impl<T: ?Sized> Deref for Guard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Guard::Live(borrow) => borrow,
            Guard::Owned(value) => value,
        }
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Guard<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt(f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Guard<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt(f)
    }
}

impl<T: ?Sized + PartialEq<U>, U: ?Sized> PartialEq<U> for Guard<'_, T> {
    fn eq(&self, other: &U) -> bool {
        **self == *other
    }
}
