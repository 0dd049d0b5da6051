//! Error types for linkdex-index.

use thiserror::Error;

/// Result type alias for index operations.
pub type Result<T> = std::result::Result<T, IndexError>;

/// A structural violation in the index buffer.
///
/// Any of these means the buffer is corrupted or was compiled for an
/// incompatible format; the whole lookup fails and nothing partial is
/// returned. "No match" is not an error and is reported as `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// A header or section implied a read past the end of the buffer.
    #[error("read of {len} bytes at offset {offset} exceeds index length {index_len}")]
    OutOfBounds {
        offset: usize,
        len: usize,
        index_len: usize,
    },

    /// A node's boundary overshoots its parent's boundary.
    #[error("node at offset {offset} overruns its parent boundary {boundary}")]
    NodeOverrun { offset: usize, boundary: usize },

    /// A match record's fields overrun the record extent.
    #[error("match record at offset {offset} overruns its {len} byte extent")]
    RecordOverrun { offset: usize, len: usize },

    /// A match record string is not valid UTF-8.
    #[error("invalid UTF-8 in match record at offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// Traversal recursed past [`MAX_TRAVERSAL_DEPTH`](crate::layout::MAX_TRAVERSAL_DEPTH).
    #[error("traversal depth exceeded {limit}; the index may chain empty configurable segments")]
    DepthExceeded { limit: usize },
}
