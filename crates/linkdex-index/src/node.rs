//! Node accessors: derived offsets and lengths for a node at a given start
//! offset.
//!
//! Nodes are never materialized; every question about one is answered by
//! reading its fixed-width headers. The defining invariant, exercised by the
//! tests below:
//!
//! `boundary_pos(n) == match_data_pos(n) + match_len(n) + children_len(n)`

use crate::error::{IndexError, Result};
use crate::layout::{
    HEADER_LENGTH, HEADER_MATCH_LENGTH, HEADER_NODE_METADATA_LENGTH, HEADER_VALUE_LENGTH,
    NodeMetadata,
};
use crate::reader;

/// Metadata flag byte of the node at `node_pos`.
#[inline]
pub fn metadata(index: &[u8], node_pos: usize) -> Result<NodeMetadata> {
    Ok(NodeMetadata(reader::read_u8(index, node_pos)? as u8))
}

/// Length of the node's value section.
#[inline]
pub fn value_len(index: &[u8], node_pos: usize) -> Result<usize> {
    reader::read_u8(index, node_pos + HEADER_NODE_METADATA_LENGTH)
}

/// Length of the node's match record. Zero on purely internal nodes.
#[inline]
pub fn match_len(index: &[u8], node_pos: usize) -> Result<usize> {
    reader::read_u16(index, node_pos + HEADER_NODE_METADATA_LENGTH + HEADER_VALUE_LENGTH)
}

/// Length of the node's children section.
#[inline]
pub fn children_len(index: &[u8], node_pos: usize) -> Result<usize> {
    reader::read_u32(
        index,
        node_pos + HEADER_NODE_METADATA_LENGTH + HEADER_VALUE_LENGTH + HEADER_MATCH_LENGTH,
    )
}

/// Start of the node's value section.
#[inline]
pub fn value_pos(node_pos: usize) -> usize {
    node_pos + HEADER_LENGTH
}

/// Borrow the node's value bytes.
pub fn value(index: &[u8], node_pos: usize) -> Result<&[u8]> {
    reader::read_bytes(index, value_pos(node_pos), value_len(index, node_pos)?)
}

/// Start of the node's match record. With a zero match length this equals
/// [`children_pos`].
pub fn match_data_pos(index: &[u8], node_pos: usize) -> Result<usize> {
    Ok(value_pos(node_pos) + value_len(index, node_pos)?)
}

/// Start of the node's children section, or `None` when it has none.
pub fn children_pos(index: &[u8], node_pos: usize) -> Result<Option<usize>> {
    if children_len(index, node_pos)? == 0 {
        return Ok(None);
    }
    Ok(Some(match_data_pos(index, node_pos)? + match_len(index, node_pos)?))
}

/// First offset past the node and all of its children; equally, the start of
/// its next sibling.
pub fn boundary_pos(index: &[u8], node_pos: usize) -> Result<usize> {
    Ok(match_data_pos(index, node_pos)?
        + match_len(index, node_pos)?
        + children_len(index, node_pos)?)
}

/// Start of the next sibling, or `None` when this node is the last one inside
/// `parent_boundary`. A boundary past `parent_boundary` means the node
/// overruns its parent and the index is malformed.
pub fn next_sibling_pos(index: &[u8], node_pos: usize, parent_boundary: usize) -> Result<Option<usize>> {
    let next = boundary_pos(index, node_pos)?;
    if next == parent_boundary {
        Ok(None)
    } else if next > parent_boundary {
        Err(IndexError::NodeOverrun {
            offset: node_pos,
            boundary: parent_boundary,
        })
    } else {
        Ok(Some(next))
    }
}
