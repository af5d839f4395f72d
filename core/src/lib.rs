//! Read-only views and defensive copies of standard collections.
//!
//! Two families of wrappers, neither of which exposes a single mutating
//! method:
//!
//! - A **view** ([`View`], [`MapView`]) forwards reads to a container the
//!   caller still owns and mutates. It reflects every change made to that
//!   container.
//! - A **copy** ([`Copied`], [`CopiedMap`]) takes a one-time shallow copy of
//!   its source at construction and is unaffected by anything the caller does
//!   to the source afterwards. It reads exactly like a view over the copy.
//!
//! ```
//! use vitrine_core::{CollectionView, ListCopy, ListView, shared};
//!
//! let names = shared(vec!["Bob", "Nancy"]);
//! let view = ListView::over(&names);
//! let copy = ListCopy::of(&names);
//!
//! names.borrow_mut().clear();
//! assert!(view.is_empty());
//! assert_eq!(copy.len(), 2);
//! assert!(copy.contains(&"Bob"));
//! ```
//!
//! # Features
//!
//! - `std`: implements the container traits for `std::collections::HashSet`
//!   and `HashMap`. Without it the crate is `no_std` and relies on `alloc`
//!   and `hashbrown`.
//! - `serde`: `Serialize` for views and copies, `Deserialize` for copies.
//!
//! # Threads
//!
//! A view over a caller's container holds the same `Rc<RefCell<_>>` the
//! caller mutates through, so it stays on the thread that created it:
//!
//! ```compile_fail
//! use vitrine_core::{CollectionView, ListView, shared};
//!
//! let view = ListView::over(&shared(vec![1, 2, 3]));
//! std::thread::spawn(move || view.len());
//! ```
//!
//! A copy owns its store behind an `Arc` that nothing can mutate. It is
//! `Send + Sync` whenever the elements are, so it can be shared between
//! reader threads:
//!
//! ```
//! use std::sync::Arc;
//! use vitrine_core::{CollectionView, ListCopy, shared};
//!
//! let copy = Arc::new(ListCopy::of(&shared(vec![1, 2, 3])));
//! let reader = Arc::clone(&copy);
//! let len = std::thread::spawn(move || reader.len()).join().unwrap();
//! assert_eq!(len, 3);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

mod backing;
pub mod container;
mod copy;
mod error;
mod guard;
mod map;
#[cfg(feature = "serde")]
mod serde_impls;
mod view;

pub use backing::{Backing, Live, Owned, Shared, shared};
pub use container::{Container, Mapping, Sequence, SetLike};
pub use copy::{Copied, CopiedMap, ListCopy, MapCopy, SetCopy};
pub use error::{Error, Result};
pub use guard::Guard;
pub use map::{Keys, KeysView, MapView, Values, ValuesView};
pub use view::{CollectionView, Elements, ListView, SetView, View};

/// Everything needed to read views and copies.
pub mod prelude {
    pub use crate::{
        CollectionView, Copied, CopiedMap, ListCopy, ListView, MapCopy, MapView, SetCopy,
        SetView, View, shared,
    };
}

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
