//! Binary layout of the serialized match index.
//!
//! A compiled index is a flat byte buffer holding a forest of trie nodes laid
//! out depth-first. Each node is:
//!
//! | metadata | value length | match length | children length | value | match record | children |
//! |----------|--------------|--------------|-----------------|-------|--------------|----------|
//! | 1 byte   | 1 byte       | 2 bytes BE   | 4 bytes BE      | `value length` bytes | `match length` bytes | `children length` bytes |
//!
//! The value section is encoded one byte per character (ISO-8859-1) so node
//! comparisons are plain byte comparisons. Match records carry UTF-8 strings.

/// Width of the metadata flags header field.
pub const HEADER_NODE_METADATA_LENGTH: usize = 1;
/// Width of the value-length header field.
pub const HEADER_VALUE_LENGTH: usize = 1;
/// Width of the match-record-length header field.
pub const HEADER_MATCH_LENGTH: usize = 2;
/// Width of the children-length header field.
pub const HEADER_CHILDREN_LENGTH: usize = 4;
/// Total node header width.
pub const HEADER_LENGTH: usize =
    HEADER_NODE_METADATA_LENGTH + HEADER_VALUE_LENGTH + HEADER_MATCH_LENGTH + HEADER_CHILDREN_LENGTH;

/// Width of the template-length field inside a match record.
pub const MATCH_DATA_TEMPLATE_LENGTH: usize = 2;
/// Width of the handler-identifier-length field inside a match record.
pub const MATCH_DATA_HANDLER_LENGTH: usize = 2;
/// Width of the method-name-length field inside a match record.
pub const MATCH_DATA_METHOD_LENGTH: usize = 1;

/// Encoding of the value section. Lookups never decode values (comparisons
/// are byte-wise); this names what index compilers must emit.
pub const MATCH_INDEX_ENCODING: &str = "ISO-8859-1";

/// Value of the synthetic root node every compiled index starts with.
pub const ROOT_VALUE: &[u8] = b"r";

/// Divider between a captured placeholder name and its value (the ASCII
/// record separator). Reserved: it never occurs in ordinary names or values.
pub const PARAM_DIVIDER: u8 = 0x1e;

/// Upper bound on traversal recursion. Empty configurable segments descend
/// without consuming a component, so a malformed index could chain them
/// without bound; exceeding the cap is reported as a structural error.
pub const MAX_TRAVERSAL_DEPTH: usize = 128;

/// Metadata bit: node matches the synthetic root component.
pub const COMPONENT_ROOT: u8 = 1;
/// Metadata bit: node matches the scheme component.
pub const COMPONENT_SCHEME: u8 = 1 << 1;
/// Metadata bit: node matches the host component.
pub const COMPONENT_HOST: u8 = 1 << 2;
/// Metadata bit: node matches a path segment component.
pub const COMPONENT_PATH_SEGMENT: u8 = 1 << 3;
/// Metadata bit: the value is a `{name}` placeholder pattern.
pub const COMPONENT_PARAM: u8 = 1 << 4;
/// Metadata bit: the value is a configurable path segment key.
pub const CONFIGURABLE_PATH_SEGMENT: u8 = 1 << 5;

/// A node's metadata flag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeMetadata(pub u8);

impl NodeMetadata {
    /// True when this node cannot match a component of the given type,
    /// whatever its value bytes.
    #[inline]
    pub fn is_component_type_mismatch(self, inbound_type: u8) -> bool {
        self.0 & inbound_type == 0
    }

    /// True when the value is a `{name}` placeholder pattern.
    #[inline]
    pub fn is_component_param(self) -> bool {
        self.0 & COMPONENT_PARAM != 0
    }

    /// True when the value is a configurable path segment key.
    #[inline]
    pub fn is_configurable_path_segment(self) -> bool {
        self.0 & CONFIGURABLE_PATH_SEGMENT != 0
    }

    /// True when the value is matched by exact byte equality.
    #[inline]
    pub fn is_literal_value(self) -> bool {
        !self.is_component_param() && !self.is_configurable_path_segment()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_length() {
        assert_eq!(HEADER_LENGTH, 8);
    }

    #[test]
    fn test_component_type_pruning() {
        let meta = NodeMetadata(COMPONENT_PATH_SEGMENT | COMPONENT_PARAM);
        assert!(!meta.is_component_type_mismatch(COMPONENT_PATH_SEGMENT));
        assert!(meta.is_component_type_mismatch(COMPONENT_SCHEME));
        assert!(meta.is_component_type_mismatch(COMPONENT_HOST));
    }

    #[test]
    fn test_node_kinds() {
        let literal = NodeMetadata(COMPONENT_HOST);
        assert!(literal.is_literal_value());
        assert!(!literal.is_component_param());
        assert!(!literal.is_configurable_path_segment());

        let param = NodeMetadata(COMPONENT_PATH_SEGMENT | COMPONENT_PARAM);
        assert!(param.is_component_param());
        assert!(!param.is_literal_value());

        let configurable = NodeMetadata(COMPONENT_PATH_SEGMENT | CONFIGURABLE_PATH_SEGMENT);
        assert!(configurable.is_configurable_path_segment());
        assert!(!configurable.is_literal_value());
    }
}
