//! Vitrine - read-only views and defensive copies of collections
//!
//! # Overview
//!
//! Handing a `&mut Vec<T>` around gives the receiver every mutator there is.
//! Vitrine hands out wrappers that can only read:
//!
//! - [`View`]s and [`MapView`]s forward reads to a container the caller still
//!   owns, and see every change the caller makes to it.
//! - [`Copied`] and [`CopiedMap`] take a shallow copy when they are built and
//!   never change afterwards.
//!
//! Neither offers `push`, `insert`, `remove` or any other way to change the
//! data, and their element iterators cannot remove either.
//!
//! # Quick Start
//!
//! ```
//! use std::collections::HashMap;
//! use vitrine::prelude::*;
//!
//! let ids = shared(HashMap::from([("Bob", 1), ("Nancy", 2), ("Tim", 3)]));
//! let view = MapView::over(&ids);
//! let copy = CopiedMap::of(&ids);
//!
//! ids.borrow_mut().remove("Bob");
//!
//! assert_eq!(view.len(), 2);
//! assert!(!view.contains_key(&"Bob"));
//! assert_eq!(copy.len(), 3);
//! assert!(copy.contains_key(&"Bob"));
//! ```
//!
//! # Shallow Copies
//!
//! A copy clones its elements. For handle types such as `Rc<RefCell<T>>` that
//! clone is another handle to the same object, so in-place edits of an element
//! are visible through the copy. Keep elements immutable (or themselves
//! copies) when the copy must be frozen all the way down.

pub use vitrine_core::{
    Backing, CollectionView, Container, Copied, CopiedMap, Elements, Error, Guard, Keys,
    KeysView, ListCopy, ListView, Live, MapCopy, MapView, Mapping, Owned, Result, Sequence,
    SetCopy, SetLike, SetView, Shared, Values, ValuesView, View, container, prelude, shared,
};
