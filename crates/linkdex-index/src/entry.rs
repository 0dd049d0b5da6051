//! Terminal match records: the payload a successful lookup decodes.

use crate::error::{IndexError, Result};
use crate::layout::{
    MATCH_DATA_HANDLER_LENGTH, MATCH_DATA_METHOD_LENGTH, MATCH_DATA_TEMPLATE_LENGTH,
};
use crate::reader;
use std::collections::HashMap;

/// A registered route decoded from a terminal node's match record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// The URL template the route was registered under.
    pub template: String,
    /// Identifier of the handler, resolved by an external registry.
    pub handler: String,
    /// Optional handler method name.
    pub method: Option<String>,
}

/// A successful lookup: the decoded route plus captured placeholder values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// The decoded route entry.
    pub entry: RouteEntry,
    /// Placeholder name to captured text for this match.
    pub bindings: HashMap<String, String>,
}

impl ResolvedRoute {
    /// Captured text for one placeholder.
    pub fn binding(&self, name: &str) -> Option<&str> {
        self.bindings.get(name).map(String::as_str)
    }
}

/// Decode the match record at `match_pos` spanning `match_len` bytes.
///
/// A zero-length record means the node terminates no route: `Ok(None)`.
/// Every read is bounded by the record extent; the method section exists only
/// when bytes remain after the handler identifier.
pub fn decode_entry(index: &[u8], match_pos: usize, match_len: usize) -> Result<Option<RouteEntry>> {
    if match_len == 0 {
        return Ok(None);
    }
    reader::read_bytes(index, match_pos, match_len)?;
    let mut record = Record {
        index,
        pos: match_pos,
        start: match_pos,
        end: match_pos + match_len,
    };

    let template_len = reader::read_u16(index, record.take(MATCH_DATA_TEMPLATE_LENGTH)?)?;
    let template = record.read_str(template_len)?;
    let handler_len = reader::read_u16(index, record.take(MATCH_DATA_HANDLER_LENGTH)?)?;
    let handler = record.read_str(handler_len)?;

    let method = if record.remaining() > 0 {
        let method_len = reader::read_u8(index, record.take(MATCH_DATA_METHOD_LENGTH)?)?;
        if method_len > 0 {
            Some(record.read_str(method_len)?)
        } else {
            None
        }
    } else {
        None
    };

    Ok(Some(RouteEntry {
        template,
        handler,
        method,
    }))
}

/// Cursor over one match record, refusing reads past the record extent.
struct Record<'a> {
    index: &'a [u8],
    pos: usize,
    start: usize,
    end: usize,
}

impl Record<'_> {
    fn remaining(&self) -> usize {
        self.end - self.pos
    }

    fn take(&mut self, len: usize) -> Result<usize> {
        if len > self.remaining() {
            return Err(IndexError::RecordOverrun {
                offset: self.start,
                len: self.end - self.start,
            });
        }
        let at = self.pos;
        self.pos += len;
        Ok(at)
    }

    fn read_str(&mut self, len: usize) -> Result<String> {
        let at = self.take(len)?;
        Ok(reader::read_utf8(self.index, at, len)?.to_owned())
    }
}
