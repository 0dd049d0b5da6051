//! Owned match-index buffer and lookups rooted at its origin.

use bytes::Bytes;
use linkdex_index::{lookup, ResolvedRoute, Result, SegmentReplacements, UriComponent};

/// A loaded match index.
///
/// Wraps the raw buffer in [`Bytes`] so clones share one allocation and any
/// number of threads can look up concurrently; the engine never mutates the
/// buffer. How the bytes were loaded is the caller's concern.
#[derive(Debug, Clone)]
pub struct MatchIndex {
    bytes: Bytes,
}

impl MatchIndex {
    /// Wrap a loaded index buffer.
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Total size of the index in bytes, for loader diagnostics.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The raw index bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Resolve a component list against the whole index.
    ///
    /// The list must be in compiled order: root, scheme, host, then path
    /// segments. [`uri_components`](crate::uri_components) builds it.
    pub fn lookup(
        &self,
        components: &[UriComponent],
        replacements: &SegmentReplacements,
    ) -> Result<Option<ResolvedRoute>> {
        lookup(&self.bytes, components, 0, self.bytes.len(), replacements)
    }
}

/// Conventional on-disk filename for a module's compiled index.
///
/// Performs no I/O; where the file lives is up to the loader.
pub fn match_index_file_name(module_name: &str) -> String {
    format!("linkdex_match_{}.idx", module_name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_is_lowercased() {
        assert_eq!(match_index_file_name("MainModule"), "linkdex_match_mainmodule.idx");
        assert_eq!(match_index_file_name("app"), "linkdex_match_app.idx");
    }

    #[test]
    fn test_len_reports_buffer_size() {
        let index = MatchIndex::new(vec![0u8; 24]);
        assert_eq!(index.len(), 24);
        assert!(!index.is_empty());
        assert!(MatchIndex::new(Bytes::new()).is_empty());
    }

    #[test]
    fn test_clones_share_the_buffer() {
        let index = MatchIndex::new(vec![1u8, 2, 3]);
        let clone = index.clone();
        assert_eq!(index.as_bytes().as_ptr(), clone.as_bytes().as_ptr());
    }
}
