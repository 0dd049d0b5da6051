//! Node comparison: decides whether one trie node matches one inbound
//! component, and captures placeholder text when it does.

use crate::error::Result;
use crate::layout::PARAM_DIVIDER;
use crate::node;
use crate::replacements::SegmentReplacements;

/// Outcome of comparing one node against one inbound component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompareOutcome {
    /// Captured placeholder as `name 0x1E value`; empty when the node matched
    /// without capturing anything.
    placeholder: String,
    /// The node matched through an empty configurable-segment replacement and
    /// consumed no inbound text.
    empty_configurable_segment: bool,
}

impl CompareOutcome {
    fn plain() -> Self {
        Self {
            placeholder: String::new(),
            empty_configurable_segment: false,
        }
    }

    fn empty_configurable() -> Self {
        Self {
            placeholder: String::new(),
            empty_configurable_segment: true,
        }
    }

    fn capture(name: &[u8], value: &[u8]) -> Self {
        let mut placeholder = String::with_capacity(name.len() + value.len() + 1);
        placeholder.push_str(&String::from_utf8_lossy(name));
        placeholder.push(PARAM_DIVIDER as char);
        placeholder.push_str(&String::from_utf8_lossy(value));
        Self {
            placeholder,
            empty_configurable_segment: false,
        }
    }

    /// The captured placeholder name and value, if any. The captured value
    /// may be empty; the divider cannot occur in names, so the first one
    /// always splits correctly.
    pub(crate) fn placeholder(&self) -> Option<(&str, &str)> {
        if self.placeholder.is_empty() {
            return None;
        }
        self.placeholder.split_once(PARAM_DIVIDER as char)
    }

    pub(crate) fn is_empty_configurable_segment(&self) -> bool {
        self.empty_configurable_segment
    }
}

/// Compare the node at `node_pos` against an inbound component.
///
/// `Ok(None)` is a plain mismatch; only structural problems with the buffer
/// are errors. Pruning happens before any value bytes are touched: first on
/// the component-type bits, then on length for literal nodes.
pub(crate) fn compare_value(
    index: &[u8],
    node_pos: usize,
    inbound_type: u8,
    inbound_value: &[u8],
    replacements: &SegmentReplacements,
) -> Result<Option<CompareOutcome>> {
    let metadata = node::metadata(index, node_pos)?;

    if metadata.is_component_type_mismatch(inbound_type) {
        return Ok(None);
    }

    let value = node::value(index, node_pos)?;

    if metadata.is_literal_value() && value.len() != inbound_value.len() {
        return Ok(None);
    }

    if metadata.is_component_param() {
        Ok(compare_component_param(value, inbound_value))
    } else if metadata.is_configurable_path_segment() {
        Ok(compare_configurable_path_segment(
            value,
            inbound_value,
            replacements,
        ))
    } else {
        Ok((value == inbound_value).then(CompareOutcome::plain))
    }
}

/// Match a `prefix{name}suffix` pattern and capture the inbound text between.
///
/// The forward scan consumes the stored prefix byte by byte. At the stored
/// `{` the scan flips: pattern and inbound value are walked backward in
/// lockstep until the stored `}` closes the capture. The inbound bytes
/// strictly between the two scans are the captured value, which may be empty.
fn compare_component_param(pattern: &[u8], inbound: &[u8]) -> Option<CompareOutcome> {
    // An empty placeholder never matches, and neither does an empty inbound
    // value.
    if pattern.starts_with(b"{}") || inbound.is_empty() {
        return None;
    }

    for i in 0..inbound.len() {
        let Some(&p) = pattern.get(i) else {
            // Pattern exhausted with inbound bytes left over.
            return None;
        };
        if p == b'{' {
            // `end` is one past the end of the capture; it shrinks as the
            // backward scan consumes the suffix.
            let mut end = inbound.len();
            for j in (0..pattern.len()).rev() {
                if pattern[j] == b'}' {
                    if j <= i || end < i {
                        return None;
                    }
                    return Some(CompareOutcome::capture(&pattern[i + 1..j], &inbound[i..end]));
                }
                if end == 0 {
                    // Inbound exhausted before the closing brace.
                    return None;
                }
                end -= 1;
                if pattern[j] != inbound[end] {
                    return None;
                }
            }
        }
        if p != inbound[i] {
            return None;
        }
    }

    // The whole inbound value equals the pattern's leading literal bytes
    // without reaching a placeholder.
    Some(CompareOutcome::plain())
}

/// Match a configurable path segment through the caller-supplied replacement
/// table. The stored value is a key into the table and is never compared
/// against the inbound value directly.
fn compare_configurable_path_segment(
    key: &[u8],
    inbound: &[u8],
    replacements: &SegmentReplacements,
) -> Option<CompareOutcome> {
    let mut replacement = None;
    for (candidate, value) in replacements.iter() {
        if candidate == key {
            // Later entries override earlier ones.
            replacement = Some(value);
        }
    }
    match replacement? {
        [] => Some(CompareOutcome::empty_configurable()),
        value if value == inbound => Some(CompareOutcome::plain()),
        _ => None,
    }
}
