use thiserror::Error;

/// Errors surfaced by the `try_*` operations.
///
/// The fatal forms of the same operations report these conditions through the
/// process-aborting diagnostic channel instead of returning them.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Element width of zero at construction.
    #[error("element size must be non-zero")]
    InvalidSize,

    /// Index at or past the occupied region.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The allocator returned null.
    #[error("unable to allocate {bytes} bytes")]
    AllocationFailure { bytes: usize },

    /// A raw value whose byte width does not match the element width.
    #[error("value is {given} bytes but elements are {expected} bytes wide")]
    WidthMismatch { expected: usize, given: usize },
}
