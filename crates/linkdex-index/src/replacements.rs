//! Caller-supplied replacement table for configurable path segments.

use bytes::Bytes;

/// Insertion-ordered table of configurable-path-segment replacements.
///
/// Keys are the segment identifiers compiled into the index; values are what
/// an inbound path segment must equal for such a node to match. An empty
/// value makes the segment match while consuming no inbound component.
///
/// The table is scanned in insertion order and the last entry with a matching
/// key wins, so later inserts override earlier ones.
#[derive(Debug, Clone, Default)]
pub struct SegmentReplacements {
    entries: Vec<(Bytes, Bytes)>,
}

impl SegmentReplacements {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key to value entry.
    pub fn insert(&mut self, key: impl Into<Bytes>, value: impl Into<Bytes>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Number of entries, counting overridden ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }
}

impl<K: Into<Bytes>, V: Into<Bytes>> FromIterator<(K, V)> for SegmentReplacements {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}
