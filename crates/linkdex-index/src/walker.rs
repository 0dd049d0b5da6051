//! Trie traversal: siblings first, then children, first terminal match wins.

use crate::compare;
use crate::entry::{self, ResolvedRoute};
use crate::error::{IndexError, Result};
use crate::layout::MAX_TRAVERSAL_DEPTH;
use crate::node;
use crate::replacements::SegmentReplacements;
use crate::uri::UriComponent;
use std::collections::HashMap;

/// Resolve `components` against the sibling run starting at `root_pos` and
/// bounded by `root_boundary` (the whole buffer, for a full index).
///
/// Sibling order in the buffer is match priority: the compiler writes
/// higher-priority nodes first and the first terminal match is returned,
/// with its accumulated placeholder bindings. `Ok(None)` means no registered
/// route matches; `Err` means the buffer is structurally invalid and the
/// whole lookup is abandoned.
pub fn lookup(
    index: &[u8],
    components: &[UriComponent],
    root_pos: usize,
    root_boundary: usize,
    replacements: &SegmentReplacements,
) -> Result<Option<ResolvedRoute>> {
    if components.is_empty() || root_pos >= root_boundary {
        return Ok(None);
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(
        components = components.len(),
        root_pos,
        "matching components against index"
    );

    let bindings = HashMap::new();
    let found = match_components(
        index,
        components,
        0,
        root_pos,
        root_boundary,
        &bindings,
        replacements,
        0,
    )?;
    #[cfg(feature = "tracing")]
    if let Some(route) = &found {
        tracing::trace!(template = %route.entry.template, "matched");
    }
    Ok(found)
}

/// One level of the search: try every sibling in `[start_pos,
/// parent_boundary)` against the component at `component_idx`, descending
/// into children on a match. Returning `Ok(None)` backtracks into the
/// caller's own sibling loop.
#[allow(clippy::too_many_arguments)]
fn match_components(
    index: &[u8],
    components: &[UriComponent],
    component_idx: usize,
    start_pos: usize,
    parent_boundary: usize,
    bindings: &HashMap<String, String>,
    replacements: &SegmentReplacements,
    depth: usize,
) -> Result<Option<ResolvedRoute>> {
    if depth > MAX_TRAVERSAL_DEPTH {
        return Err(IndexError::DepthExceeded {
            limit: MAX_TRAVERSAL_DEPTH,
        });
    }
    let component = &components[component_idx];
    let mut node_pos = start_pos;
    loop {
        let outcome = compare::compare_value(
            index,
            node_pos,
            component.type_flag(),
            component.value(),
            replacements,
        )?;
        if let Some(outcome) = outcome {
            // A capture forks a private copy of the bindings, so sibling
            // branches never observe each other's speculative values.
            let forked;
            let branch_bindings = match outcome.placeholder() {
                Some((name, value)) => {
                    let mut map = bindings.clone();
                    map.insert(name.to_owned(), value.to_owned());
                    forked = map;
                    &forked
                }
                None => bindings,
            };

            let last_component = component_idx == components.len() - 1;
            if !last_component || outcome.is_empty_configurable_segment() {
                if let Some(children_pos) = node::children_pos(index, node_pos)? {
                    // An empty configurable segment consumed nothing: the
                    // same component is retried one level deeper.
                    let next_idx = if outcome.is_empty_configurable_segment() {
                        component_idx
                    } else {
                        component_idx + 1
                    };
                    let found = match_components(
                        index,
                        components,
                        next_idx,
                        children_pos,
                        node::boundary_pos(index, node_pos)?,
                        branch_bindings,
                        replacements,
                        depth + 1,
                    )?;
                    if found.is_some() {
                        return Ok(found);
                    }
                }
            } else {
                let match_len = node::match_len(index, node_pos)?;
                if match_len > 0 {
                    let match_pos = node::match_data_pos(index, node_pos)?;
                    if let Some(entry) = entry::decode_entry(index, match_pos, match_len)? {
                        return Ok(Some(ResolvedRoute {
                            entry,
                            bindings: branch_bindings.clone(),
                        }));
                    }
                }
            }
        }
        match node::next_sibling_pos(index, node_pos, parent_boundary)? {
            Some(next) => node_pos = next,
            None => return Ok(None),
        }
    }
}
