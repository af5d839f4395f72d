//! Read-only views over key-value maps.
//!
//! A [`MapView`] is not iterable itself. Its keys and values are reached
//! through [`MapView::keys`] and [`MapView::values`], which are built once,
//! together with the map view, and read from the same backing store. They
//! follow later mutation of the source exactly as the map view does:
//!
//! ```
//! use vitrine_core::{CollectionView, MapView, shared};
//! use hashbrown::HashMap;
//!
//! let ages = shared(HashMap::from([("Bob", 1), ("Nancy", 2)]));
//! let view = MapView::over(&ages);
//! let keys = view.keys();
//!
//! ages.borrow_mut().insert("Tim", 3);
//! assert_eq!(keys.len(), 3);
//! assert!(keys.contains(&"Tim"));
//! ```

use alloc::rc::Rc;
use core::fmt;

use crate::backing::{Backing, Live, Shared, debug_store};
use crate::container::Mapping;
use crate::{CollectionView, CopiedMap, Guard};

/// Read-only view over a [`Mapping`].
///
/// Like [`View`](crate::View), `B` selects between a caller's map and a
/// private copy.
pub struct MapView<M, B: Backing<M> = Live> {
    handle: B::Handle,
    keys: KeysView<M, B>,
    values: ValuesView<M, B>,
}

impl<M> MapView<M, Live> {
    /// A view over a caller-owned map. Reads observe every later mutation
    /// of `source`.
    pub fn over(source: &Shared<M>) -> Self {
        Self::from_handle(Rc::clone(source))
    }
}

impl<M, B: Backing<M>> MapView<M, B> {
    pub(crate) fn from_handle(handle: B::Handle) -> Self {
        Self {
            keys: KeysView {
                handle: handle.clone(),
            },
            values: ValuesView {
                handle: handle.clone(),
            },
            handle,
        }
    }

    /// Whether this view tracks a caller's map rather than a private copy.
    pub fn is_live(&self) -> bool {
        B::LIVE
    }

    pub(crate) fn read(&self) -> Guard<'_, M> {
        B::read(&self.handle)
    }

    /// The set of keys, as a view over the same store.
    pub fn keys(&self) -> &KeysView<M, B> {
        &self.keys
    }

    /// The values, as a view over the same store.
    pub fn values(&self) -> &ValuesView<M, B> {
        &self.values
    }
}

impl<M: Mapping, B: Backing<M>> MapView<M, B> {
    pub fn contains_key(&self, key: &M::Key) -> bool {
        self.read().contains_key(key)
    }

    pub fn contains_value(&self, value: &M::Value) -> bool
    where
        M::Value: PartialEq,
    {
        self.values.contains(value)
    }

    /// The value stored under `key`, borrowed for as long as the guard lives.
    pub fn get(&self, key: &M::Key) -> Option<Guard<'_, M::Value>> {
        self.read().filter_map(|map| map.get(key))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl<M: Clone, B: Backing<M>> MapView<M, B> {
    /// A new map with the current entries. Changing it leaves the view alone.
    pub fn to_map(&self) -> M {
        self.read().clone()
    }

    /// Copies the current entries into a [`CopiedMap`] that no longer follows
    /// the source.
    pub fn detach(&self) -> CopiedMap<M> {
        CopiedMap::from_store(self.to_map())
    }
}

impl<M, B: Backing<M>> Clone for MapView<M, B> {
    fn clone(&self) -> Self {
        Self::from_handle(self.handle.clone())
    }
}

impl<M: fmt::Debug, B: Backing<M>> fmt::Debug for MapView<M, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_store::<M, B>(f, "MapView", &self.handle)
    }
}

// =============================================================================
// Keys
// =============================================================================

/// Read-only set view over the keys of a map.
pub struct KeysView<M, B: Backing<M> = Live> {
    handle: B::Handle,
}

impl<M: Mapping, B: Backing<M>> KeysView<M, B> {
    /// Borrows the current keys for iteration.
    ///
    /// # Panics
    ///
    /// Panics if the map is live and mutably borrowed.
    pub fn elements(&self) -> Keys<'_, M> {
        Keys {
            map: B::read(&self.handle),
        }
    }

    /// A new set with the current keys.
    pub fn to_set(&self) -> M::KeySet
    where
        M::Key: Clone,
    {
        B::read(&self.handle).keys().cloned().collect()
    }
}

impl<M: Mapping, B: Backing<M>> CollectionView for KeysView<M, B> {
    type Item = M::Key;

    fn len(&self) -> usize {
        B::read(&self.handle).len()
    }

    fn contains(&self, key: &M::Key) -> bool {
        B::read(&self.handle).contains_key(key)
    }

    fn for_each_item(&self, f: impl FnMut(&M::Key)) {
        B::read(&self.handle).keys().for_each(f);
    }
}

impl<M: Mapping, B: Backing<M>> fmt::Debug for KeysView<M, B>
where
    M::Key: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(B::read(&self.handle).keys()).finish()
    }
}

/// The current keys of a map, borrowed for iteration.
pub struct Keys<'a, M> {
    map: Guard<'a, M>,
}

impl<M: Mapping> Keys<'_, M> {
    pub fn iter(&self) -> M::Keys<'_> {
        self.map.keys()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<'g, M: Mapping> IntoIterator for &'g Keys<'_, M> {
    type Item = &'g M::Key;
    type IntoIter = M::Keys<'g>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Values
// =============================================================================

/// Read-only view over the values of a map.
pub struct ValuesView<M, B: Backing<M> = Live> {
    handle: B::Handle,
}

impl<M: Mapping, B: Backing<M>> ValuesView<M, B> {
    /// Borrows the current values for iteration.
    ///
    /// # Panics
    ///
    /// Panics if the map is live and mutably borrowed.
    pub fn elements(&self) -> Values<'_, M> {
        Values {
            map: B::read(&self.handle),
        }
    }
}

impl<M, B> CollectionView for ValuesView<M, B>
where
    M: Mapping,
    M::Value: PartialEq,
    B: Backing<M>,
{
    type Item = M::Value;

    fn len(&self) -> usize {
        B::read(&self.handle).len()
    }

    fn contains(&self, value: &M::Value) -> bool {
        B::read(&self.handle).values().any(|candidate| candidate == value)
    }

    fn for_each_item(&self, f: impl FnMut(&M::Value)) {
        B::read(&self.handle).values().for_each(f);
    }
}

impl<M: Mapping, B: Backing<M>> fmt::Debug for ValuesView<M, B>
where
    M::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(B::read(&self.handle).values()).finish()
    }
}

/// The current values of a map, borrowed for iteration.
pub struct Values<'a, M> {
    map: Guard<'a, M>,
}

impl<M: Mapping> Values<'_, M> {
    pub fn iter(&self) -> M::Values<'_> {
        self.map.values()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<'g, M: Mapping> IntoIterator for &'g Values<'_, M> {
    type Item = &'g M::Value;
    type IntoIter = M::Values<'g>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "map_test.rs"]
mod tests;
