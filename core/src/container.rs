//! Read-only access to the standard containers.
//!
//! Views never talk to `Vec`, `BTreeSet` and friends directly. They go through
//! the traits in this module, which only expose the read half of each
//! container's API. Implementations are provided for:
//!
//! | Trait       | Containers |
//! |-------------|------------|
//! | [`Sequence`] | `Vec<T>`, `VecDeque<T>` |
//! | [`SetLike`]  | `BTreeSet<T>`, `hashbrown::HashSet<T, S>`, `std::collections::HashSet<T, S>` (`std`) |
//! | [`Mapping`]  | `BTreeMap<K, V>`, `hashbrown::HashMap<K, V, S>`, `std::collections::HashMap<K, V, S>` (`std`) |

use alloc::collections::{BTreeMap, BTreeSet, VecDeque, btree_map, btree_set, vec_deque};
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};
use core::slice;

/// A container of `Item`s that can be inspected without being changed.
pub trait Container {
    type Item;

    /// Borrowing iterator in the container's native order.
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    fn len(&self) -> usize;

    fn contains(&self, item: &Self::Item) -> bool;

    fn iter(&self) -> Self::Iter<'_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ordered, index-addressable container.
pub trait Sequence: Container {
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Index of the first element equal to `item`.
    fn position(&self, item: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.iter().position(|candidate| candidate == item)
    }

    /// Index of the last element equal to `item`.
    fn rposition(&self, item: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.iter()
            .enumerate()
            .filter(|(_, candidate)| *candidate == item)
            .map(|(index, _)| index)
            .last()
    }
}

/// A container holding each element at most once.
pub trait SetLike: Container {}

/// A key-value container.
///
/// Not a [`Container`] itself: maps are inspected by key, or through their
/// key and value projections.
pub trait Mapping {
    type Key;
    type Value;

    /// The set type a snapshot of the keys is collected into.
    type KeySet: SetLike<Item = Self::Key> + FromIterator<Self::Key>;

    type Keys<'a>: Iterator<Item = &'a Self::Key>
    where
        Self: 'a;

    type Values<'a>: Iterator<Item = &'a Self::Value>
    where
        Self: 'a;

    fn len(&self) -> usize;

    fn contains_key(&self, key: &Self::Key) -> bool;

    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn keys(&self) -> Self::Keys<'_>;

    fn values(&self) -> Self::Values<'_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Sequences
// =============================================================================

impl<T: PartialEq> Container for Vec<T> {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

impl<T: PartialEq> Sequence for Vec<T> {
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn rposition(&self, item: &T) -> Option<usize> {
        self.as_slice().iter().rposition(|candidate| candidate == item)
    }
}

impl<T: PartialEq> Container for VecDeque<T> {
    type Item = T;
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        VecDeque::contains(self, item)
    }

    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }
}

impl<T: PartialEq> Sequence for VecDeque<T> {
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn rposition(&self, item: &T) -> Option<usize> {
        VecDeque::iter(self).rposition(|candidate| candidate == item)
    }
}

// =============================================================================
// Sets
// =============================================================================

impl<T: Ord> Container for BTreeSet<T> {
    type Item = T;
    type Iter<'a>
        = btree_set::Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        BTreeSet::contains(self, item)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeSet::iter(self)
    }
}

impl<T: Ord> SetLike for BTreeSet<T> {}

impl<T: Eq + Hash, S: BuildHasher> Container for hashbrown::HashSet<T, S> {
    type Item = T;
    type Iter<'a>
        = hashbrown::hash_set::Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        hashbrown::HashSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        hashbrown::HashSet::contains(self, item)
    }

    fn iter(&self) -> Self::Iter<'_> {
        hashbrown::HashSet::iter(self)
    }
}

impl<T: Eq + Hash, S: BuildHasher> SetLike for hashbrown::HashSet<T, S> {}

#[cfg(feature = "std")]
impl<T: Eq + Hash, S: BuildHasher> Container for std::collections::HashSet<T, S> {
    type Item = T;
    type Iter<'a>
        = std::collections::hash_set::Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        std::collections::HashSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        std::collections::HashSet::contains(self, item)
    }

    fn iter(&self) -> Self::Iter<'_> {
        std::collections::HashSet::iter(self)
    }
}

#[cfg(feature = "std")]
impl<T: Eq + Hash, S: BuildHasher> SetLike for std::collections::HashSet<T, S> {}

// =============================================================================
// Maps
// =============================================================================

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type KeySet = BTreeSet<K>;
    type Keys<'a>
        = btree_map::Keys<'a, K, V>
    where
        Self: 'a;
    type Values<'a>
        = btree_map::Values<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn keys(&self) -> Self::Keys<'_> {
        BTreeMap::keys(self)
    }

    fn values(&self) -> Self::Values<'_> {
        BTreeMap::values(self)
    }
}

impl<K, V, S> Mapping for hashbrown::HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Key = K;
    type Value = V;
    type KeySet = hashbrown::HashSet<K, S>;
    type Keys<'a>
        = hashbrown::hash_map::Keys<'a, K, V>
    where
        Self: 'a;
    type Values<'a>
        = hashbrown::hash_map::Values<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        hashbrown::HashMap::len(self)
    }

    fn contains_key(&self, key: &K) -> bool {
        hashbrown::HashMap::contains_key(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        hashbrown::HashMap::get(self, key)
    }

    fn keys(&self) -> Self::Keys<'_> {
        hashbrown::HashMap::keys(self)
    }

    fn values(&self) -> Self::Values<'_> {
        hashbrown::HashMap::values(self)
    }
}

#[cfg(feature = "std")]
impl<K, V, S> Mapping for std::collections::HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Key = K;
    type Value = V;
    type KeySet = std::collections::HashSet<K, S>;
    type Keys<'a>
        = std::collections::hash_map::Keys<'a, K, V>
    where
        Self: 'a;
    type Values<'a>
        = std::collections::hash_map::Values<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        std::collections::HashMap::len(self)
    }

    fn contains_key(&self, key: &K) -> bool {
        std::collections::HashMap::contains_key(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        std::collections::HashMap::get(self, key)
    }

    fn keys(&self) -> Self::Keys<'_> {
        std::collections::HashMap::keys(self)
    }

    fn values(&self) -> Self::Values<'_> {
        std::collections::HashMap::values(self)
    }
}

#[cfg(test)]
#[path = "container_test.rs"]
mod tests;
