//! linkdex-core: deep link resolution over a compiled match index.
//!
//! This crate is the caller-facing layer around the
//! [`linkdex-index`](linkdex_index) engine: it owns the loaded index buffer,
//! assembles ordered component lists from already-tokenized URI pieces, and
//! bridges decoded handler identifiers to concrete handlers through a
//! registry.
//!
//! ## Example
//! ```
//! use linkdex_core::{uri_components, MapRegistry, MatchIndex, ResolveOutcome, Resolver, SegmentReplacements};
//! use linkdex_index::testing::IndexNode;
//!
//! let buffer = IndexNode::root()
//!     .child(IndexNode::scheme("app").child(IndexNode::host("h").child(
//!         IndexNode::path_segment("home").with_route("app://h/home", "HomeHandler", None),
//!     )))
//!     .encode();
//!
//! let mut registry = MapRegistry::new();
//! registry.insert("HomeHandler", "home-screen");
//! let resolver = Resolver::new(MatchIndex::new(buffer), registry);
//!
//! let components = uri_components("app", "h", &["home"]);
//! let outcome = resolver
//!     .resolve(&components, &SegmentReplacements::new())
//!     .unwrap();
//! match outcome {
//!     ResolveOutcome::Dispatched { handler, route } => {
//!         assert_eq!(handler, "home-screen");
//!         assert_eq!(route.entry.template, "app://h/home");
//!     }
//!     _ => panic!("expected a dispatch"),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod components;
pub mod index;
pub mod registry;

// Re-exports
pub use components::{uri_components, UriComponents};
pub use index::{match_index_file_name, MatchIndex};
pub use registry::{HandlerRegistry, MapRegistry, ResolveOutcome, Resolver};

// Engine surface re-exported so most callers need only this crate.
pub use linkdex_index::{
    ComponentKind, IndexError, ResolvedRoute, Result, RouteEntry, SegmentReplacements,
    UriComponent,
};
