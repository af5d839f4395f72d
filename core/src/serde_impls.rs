//! `serde` support, behind the `serde` feature.
//!
//! Views serialize the current contents of their store exactly as the
//! container itself would. Copies deserialize into a fresh private store.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Backing, Copied, CopiedMap, MapView, View};

impl<C: Serialize, B: Backing<C>> Serialize for View<C, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.read().serialize(serializer)
    }
}

impl<M: Serialize, B: Backing<M>> Serialize for MapView<M, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.read().serialize(serializer)
    }
}

impl<C: Serialize> Serialize for Copied<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.view().serialize(serializer)
    }
}

impl<'de, C: Deserialize<'de>> Deserialize<'de> for Copied<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        C::deserialize(deserializer).map(Copied::from_store)
    }
}

impl<M: Serialize> Serialize for CopiedMap<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.view().serialize(serializer)
    }
}

impl<'de, M: Deserialize<'de>> Deserialize<'de> for CopiedMap<M> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        M::deserialize(deserializer).map(CopiedMap::from_store)
    }
}
