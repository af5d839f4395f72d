//! Error types for read operations.
//!
//! Views never fail on their own. The only error is one the backing store
//! would report itself: an index past the end of an ordered container.

use thiserror::Error;

/// Errors surfaced by view and copy reads.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `get` was called with an index the backing sequence does not have.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
