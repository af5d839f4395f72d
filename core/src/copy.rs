//! Copies: views over a private snapshot.
//!
//! A copy enumerates its source once, at construction, into a container that
//! nothing else can reach. Afterwards it reads like any [`View`] (it derefs
//! to one) but never sees another change to the source.
//!
//! The copy is shallow. Elements are cloned, so for value types the copy is
//! fully independent, while for handle types such as `Rc<RefCell<_>>` the
//! copy shares the element objects with the source:
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use vitrine_core::{CollectionView, ListCopy, shared};
//!
//! let row = Rc::new(RefCell::new(vec![1, 2, 3]));
//! let matrix = shared(vec![row.clone()]);
//! let frozen = ListCopy::of(&matrix);
//!
//! // New rows are not seen by the copy...
//! matrix.borrow_mut().push(Rc::new(RefCell::new(vec![])));
//! assert_eq!(frozen.len(), 1);
//!
//! // ...but edits inside a shared row are.
//! row.borrow_mut().remove(0);
//! assert_eq!(*frozen.get(0).unwrap().borrow(), vec![2, 3]);
//! ```

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

use crate::backing::{Owned, Shared};
use crate::container::{Container, Mapping};
use crate::{CollectionView, MapView, View};

/// A [`View`] over a privately owned copy of a container.
///
/// The store is held in an `Arc` that nothing can mutate, so a copy is
/// `Send + Sync` whenever `C` is and may be read from several threads.
pub struct Copied<C> {
    view: View<C, Owned>,
}

pub type ListCopy<T> = Copied<Vec<T>>;
pub type SetCopy<T> = Copied<hashbrown::HashSet<T>>;

impl<C> Copied<C> {
    /// Adopts `store` as the private backing store.
    pub fn from_store(store: C) -> Self {
        Self {
            view: View::from_handle(Arc::new(store)),
        }
    }

    pub fn view(&self) -> &View<C, Owned> {
        &self.view
    }
}

impl<C: Container + Clone> Copied<C> {
    /// Copies the current contents of `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is mutably borrowed.
    pub fn of(source: &Shared<C>) -> Self {
        let store = source.borrow().clone();
        tracing::trace!(len = store.len(), "copied shared container");
        Self::from_store(store)
    }
}

impl<C> Copied<C> {
    /// Copies the current elements of any view into a new `C`.
    ///
    /// The source view may hold a different container kind, e.g. a set copy
    /// built from a list view.
    pub fn from_view<V>(source: &V) -> Self
    where
        V: CollectionView,
        V::Item: Clone,
        C: FromIterator<V::Item>,
    {
        let items = source.to_vec();
        tracing::trace!(len = items.len(), "copied view");
        Self::from_store(items.into_iter().collect())
    }
}

impl<C: FromIterator<T>, T> FromIterator<T> for Copied<C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_store(iter.into_iter().collect())
    }
}

impl<C> Deref for Copied<C> {
    type Target = View<C, Owned>;

    fn deref(&self) -> &View<C, Owned> {
        &self.view
    }
}

/// Sharing the frozen store is indistinguishable from duplicating it.
impl<C> Clone for Copied<C> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for Copied<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Copied").field(&*self.view.read()).finish()
    }
}

impl<C: PartialEq> PartialEq for Copied<C> {
    fn eq(&self, other: &Self) -> bool {
        *self.view.read() == *other.view.read()
    }
}

impl<C: Eq> Eq for Copied<C> {}

// =============================================================================
// Maps
// =============================================================================

/// A [`MapView`] over a privately owned copy of a map.
pub struct CopiedMap<M> {
    view: MapView<M, Owned>,
}

pub type MapCopy<K, V> = CopiedMap<hashbrown::HashMap<K, V>>;

impl<M> CopiedMap<M> {
    /// Adopts `store` as the private backing store.
    pub fn from_store(store: M) -> Self {
        Self {
            view: MapView::from_handle(Arc::new(store)),
        }
    }

    pub fn view(&self) -> &MapView<M, Owned> {
        &self.view
    }
}

impl<M: Mapping + Clone> CopiedMap<M> {
    /// Copies the current entries of `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is mutably borrowed.
    pub fn of(source: &Shared<M>) -> Self {
        let store = source.borrow().clone();
        tracing::trace!(len = store.len(), "copied shared map");
        Self::from_store(store)
    }
}

impl<M: FromIterator<(K, V)>, K, V> FromIterator<(K, V)> for CopiedMap<M> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_store(iter.into_iter().collect())
    }
}

impl<M> Deref for CopiedMap<M> {
    type Target = MapView<M, Owned>;

    fn deref(&self) -> &MapView<M, Owned> {
        &self.view
    }
}

impl<M> Clone for CopiedMap<M> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
        }
    }
}

impl<M: fmt::Debug> fmt::Debug for CopiedMap<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CopiedMap").field(&self.view).finish()
    }
}

#[cfg(test)]
#[path = "copy_test.rs"]
mod tests;
