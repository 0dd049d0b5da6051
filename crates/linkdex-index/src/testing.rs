//! Test fixtures: build serialized indices without the offline compiler.
//!
//! [`IndexNode`] assembles a node tree in memory and [`IndexNode::encode`]
//! serializes it into the exact binary layout the engine matches against.
//! Values are raw bytes; nothing here parses URL pattern strings. Used by the
//! test suites and benches across the workspace.

use crate::layout::{
    COMPONENT_HOST, COMPONENT_PARAM, COMPONENT_PATH_SEGMENT, COMPONENT_ROOT, COMPONENT_SCHEME,
    CONFIGURABLE_PATH_SEGMENT, ROOT_VALUE,
};

/// One node of an index under construction.
#[derive(Debug, Clone)]
pub struct IndexNode {
    metadata: u8,
    value: Vec<u8>,
    match_record: Vec<u8>,
    children: Vec<IndexNode>,
}

impl IndexNode {
    /// A node with explicit metadata flags and value bytes.
    pub fn new(metadata: u8, value: impl Into<Vec<u8>>) -> Self {
        Self {
            metadata,
            value: value.into(),
            match_record: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The synthetic root node.
    pub fn root() -> Self {
        Self::new(COMPONENT_ROOT, ROOT_VALUE)
    }

    /// A literal scheme node.
    pub fn scheme(value: impl Into<Vec<u8>>) -> Self {
        Self::new(COMPONENT_SCHEME, value)
    }

    /// A literal host node.
    pub fn host(value: impl Into<Vec<u8>>) -> Self {
        Self::new(COMPONENT_HOST, value)
    }

    /// A literal path segment node.
    pub fn path_segment(value: impl Into<Vec<u8>>) -> Self {
        Self::new(COMPONENT_PATH_SEGMENT, value)
    }

    /// A path segment node holding a `prefix{name}suffix` placeholder
    /// pattern.
    pub fn path_param(pattern: impl Into<Vec<u8>>) -> Self {
        Self::new(COMPONENT_PATH_SEGMENT | COMPONENT_PARAM, pattern)
    }

    /// A host node holding a placeholder pattern.
    pub fn host_param(pattern: impl Into<Vec<u8>>) -> Self {
        Self::new(COMPONENT_HOST | COMPONENT_PARAM, pattern)
    }

    /// A configurable path segment node keyed into the replacement table.
    pub fn configurable_segment(key: impl Into<Vec<u8>>) -> Self {
        Self::new(COMPONENT_PATH_SEGMENT | CONFIGURABLE_PATH_SEGMENT, key)
    }

    /// Attach a match record, making this node terminate a route.
    pub fn with_route(mut self, template: &str, handler: &str, method: Option<&str>) -> Self {
        self.match_record = encode_match_record(template, handler, method);
        self
    }

    /// Attach raw match-record bytes, valid or not.
    pub fn with_raw_record(mut self, record: impl Into<Vec<u8>>) -> Self {
        self.match_record = record.into();
        self
    }

    /// Append a child node. Order matters: earlier children win ties.
    pub fn child(mut self, node: IndexNode) -> Self {
        self.children.push(node);
        self
    }

    /// Serialize this node and its children depth-first.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_into(&mut out);
        out
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        let mut children = Vec::new();
        for child in &self.children {
            child.encode_into(&mut children);
        }
        out.push(self.metadata);
        out.push(self.value.len() as u8);
        out.extend_from_slice(&(self.match_record.len() as u16).to_be_bytes());
        out.extend_from_slice(&(children.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.value);
        out.extend_from_slice(&self.match_record);
        out.extend_from_slice(&children);
    }
}

/// Serialize a match record: template, handler identifier, optional method.
pub fn encode_match_record(template: &str, handler: &str, method: Option<&str>) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&(template.len() as u16).to_be_bytes());
    out.extend_from_slice(template.as_bytes());
    out.extend_from_slice(&(handler.len() as u16).to_be_bytes());
    out.extend_from_slice(handler.as_bytes());
    if let Some(method) = method {
        out.push(method.len() as u8);
        out.extend_from_slice(method.as_bytes());
    }
    out
}
