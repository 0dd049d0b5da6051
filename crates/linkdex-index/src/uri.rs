//! Inbound URI components.
//!
//! The engine receives a URI already tokenized into ordered components: the
//! synthetic root every compiled index starts with, then scheme, host, and
//! path segments.

use crate::layout::{
    COMPONENT_HOST, COMPONENT_PATH_SEGMENT, COMPONENT_ROOT, COMPONENT_SCHEME, ROOT_VALUE,
};
use bytes::Bytes;

/// The URI component types a node can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// The synthetic root component.
    Root,
    /// URI scheme.
    Scheme,
    /// URI host (authority).
    Host,
    /// One path segment.
    PathSegment,
}

impl ComponentKind {
    /// The metadata bit a node must carry to match this component type.
    #[inline]
    pub fn type_flag(self) -> u8 {
        match self {
            ComponentKind::Root => COMPONENT_ROOT,
            ComponentKind::Scheme => COMPONENT_SCHEME,
            ComponentKind::Host => COMPONENT_HOST,
            ComponentKind::PathSegment => COMPONENT_PATH_SEGMENT,
        }
    }
}

/// One tokenized component of an inbound URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriComponent {
    kind: ComponentKind,
    value: Bytes,
}

impl UriComponent {
    /// A component of the given kind with raw value bytes.
    pub fn new(kind: ComponentKind, value: impl Into<Bytes>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// The synthetic root component matching an index's root node.
    pub fn root() -> Self {
        Self::new(ComponentKind::Root, ROOT_VALUE)
    }

    /// A scheme component.
    pub fn scheme(value: impl Into<Bytes>) -> Self {
        Self::new(ComponentKind::Scheme, value)
    }

    /// A host component.
    pub fn host(value: impl Into<Bytes>) -> Self {
        Self::new(ComponentKind::Host, value)
    }

    /// A path segment component.
    pub fn path_segment(value: impl Into<Bytes>) -> Self {
        Self::new(ComponentKind::PathSegment, value)
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// The raw component bytes.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    #[inline]
    pub(crate) fn type_flag(&self) -> u8 {
        self.kind.type_flag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::NodeMetadata;

    #[test]
    fn test_root_component() {
        let root = UriComponent::root();
        assert_eq!(root.kind(), ComponentKind::Root);
        assert_eq!(root.value(), ROOT_VALUE);
    }

    #[test]
    fn test_type_flags_match_metadata_bits() {
        let node = NodeMetadata(COMPONENT_PATH_SEGMENT);
        assert!(!node.is_component_type_mismatch(ComponentKind::PathSegment.type_flag()));
        assert!(node.is_component_type_mismatch(ComponentKind::Scheme.type_flag()));
        assert!(node.is_component_type_mismatch(ComponentKind::Host.type_flag()));
        assert!(node.is_component_type_mismatch(ComponentKind::Root.type_flag()));
    }

    #[test]
    fn test_component_values() {
        let host = UriComponent::host("example.com");
        assert_eq!(host.value(), b"example.com");
        let owned = UriComponent::path_segment(String::from("users"));
        assert_eq!(owned.value(), b"users");
    }
}
