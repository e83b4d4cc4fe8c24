#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

//! A growable array of fixed-width elements kept in one untyped byte buffer.
//!
//! [`ErasedVec`] is the engine: it owns a single contiguous allocation and
//! moves elements around as raw bytes, with every operation available both as
//! a fallible `try_*` method and as a fatal method that aborts the process
//! with a diagnostic on violation. [`TypedVec`] layers compile-time type
//! safety on top of it for plain-value (`Copy`) element types.
//!
//! Any operation that can grow the buffer may move it; the borrow checker
//! makes retaining a reference across such a call impossible, which is the
//! whole contract around reallocation here.

mod abort;
mod erasedvec;
mod error;
mod typed;

pub use erasedvec::{ErasedVec, DEFAULT_CAPACITY};
pub use error::Error;
pub use typed::TypedVec;
