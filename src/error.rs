//! Error types for rebind resolution operations.

use thiserror::Error;

use crate::types::SourceRef;

/// Result type alias using [`RebindError`].
pub type Result<T> = std::result::Result<T, RebindError>;

/// Error types for rebind resolution operations.
#[derive(Debug, Clone, Error)]
pub enum RebindError {
    // ==================== Shape Errors ====================
    /// Declared wrapper carries the wrong number of type arguments.
    #[error("Shape error: wrapper '{wrapper}' expects {expected} type argument(s), found {actual}")]
    ShapeMismatch {
        wrapper: String,
        expected: usize,
        actual: usize,
    },

    /// Declared return type matches no known observable wrapper.
    #[error("Shape error: '{declared}' is not a supported observable wrapper")]
    UnsupportedWrapper { declared: String },

    // ==================== Resolution Errors ====================
    /// Observable query with an empty dependency set; nothing can ever
    /// invalidate or refresh it.
    #[error("Unobservable query in {source_ref}: observable query has nothing to observe")]
    UnobservableQuery { source_ref: SourceRef },

    // ==================== Adapter Registry Errors ====================
    /// Malformed element type handed to an adapter lookup.
    #[error("Malformed element type: {0}")]
    MalformedType(String),

    /// Adapter registered twice for the same element type.
    #[error("Adapter for element type '{0}' is already registered")]
    DuplicateAdapter(String),
}
