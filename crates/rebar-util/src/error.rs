//! Error types shared by the string engine.

/// Failure kinds that can escape a [`crate::Engine`] operation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The only failure kind the string engine itself can produce (§4.1:
    /// "allocation failure is the only failure kind and is fatal to the
    /// operation"). Rust's global allocator already aborts on allocation
    /// failure, so this variant exists to keep the error enum exhaustive
    /// against the design rather than to be raised in practice.
    #[error("out of memory while interning a string")]
    OutOfMemory,
}

/// Result alias for string-engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
