//! linkdex-index: serialized match-index engine for deep link routing.
//!
//! A compiled index is a flat byte buffer holding a trie of registered URL
//! patterns. Lookups walk the buffer directly, sibling by sibling and then
//! into children, comparing raw bytes; no pattern strings are parsed at
//! request time.
//!
//! ## Node kinds
//! - Literal: exact byte equality
//! - Placeholder: `prefix{name}suffix`, capturing the inbound text between
//! - Configurable segment: indirected through a caller-supplied replacement
//!   table, optionally consuming no input at all
//!
//! ## Priority
//! Sibling order in the buffer is priority order and the first terminal
//! match wins. Compilers write literal siblings before placeholder siblings
//! when exact matches should take precedence; the walker never re-ranks.
//!
//! ## Example
//! ```
//! use linkdex_index::testing::IndexNode;
//! use linkdex_index::{lookup, SegmentReplacements, UriComponent};
//!
//! let index = IndexNode::root()
//!     .child(IndexNode::scheme("app").child(IndexNode::host("example.com").child(
//!         IndexNode::path_segment("users").child(IndexNode::path_param("{id}").with_route(
//!             "app://example.com/users/{id}",
//!             "UsersHandler",
//!             None,
//!         )),
//!     )))
//!     .encode();
//!
//! let components = [
//!     UriComponent::root(),
//!     UriComponent::scheme("app"),
//!     UriComponent::host("example.com"),
//!     UriComponent::path_segment("users"),
//!     UriComponent::path_segment("42"),
//! ];
//! let replacements = SegmentReplacements::new();
//! let found = lookup(&index, &components, 0, index.len(), &replacements)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(found.entry.handler, "UsersHandler");
//! assert_eq!(found.binding("id"), Some("42"));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

mod compare;
mod entry;
mod error;
pub mod layout;
pub mod node;
pub mod reader;
mod replacements;
pub mod testing;
mod uri;
mod walker;

// Re-exports
pub use entry::{decode_entry, ResolvedRoute, RouteEntry};
pub use error::{IndexError, Result};
pub use replacements::SegmentReplacements;
pub use uri::{ComponentKind, UriComponent};
pub use walker::lookup;
