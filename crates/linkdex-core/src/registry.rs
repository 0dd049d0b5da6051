//! The seam between decoded route entries and executable handlers.
//!
//! The engine only ever returns handler identifiers as strings; turning one
//! into something callable is the caller's business, abstracted behind
//! [`HandlerRegistry`].

use crate::index::MatchIndex;
use linkdex_index::{ResolvedRoute, Result, SegmentReplacements, UriComponent};
use std::collections::HashMap;

/// Resolves decoded handler identifiers to concrete handlers.
pub trait HandlerRegistry {
    type Handler;

    /// The handler registered under `identifier`, optionally narrowed by the
    /// decoded method name. `None` when the identifier is unknown.
    fn resolve(&self, identifier: &str, method: Option<&str>) -> Option<Self::Handler>;
}

/// A HashMap-backed registry keyed by handler identifier.
///
/// Method names are not part of the key; a handler that distinguishes
/// methods receives the decoded name through the resolved route.
#[derive(Debug, Clone)]
pub struct MapRegistry<H> {
    handlers: HashMap<String, H>,
}

impl<H> MapRegistry<H> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under an identifier, replacing any previous one.
    pub fn insert(&mut self, identifier: impl Into<String>, handler: H) {
        self.handlers.insert(identifier.into(), handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<H> Default for MapRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Clone> HandlerRegistry for MapRegistry<H> {
    type Handler = H;

    fn resolve(&self, identifier: &str, _method: Option<&str>) -> Option<H> {
        self.handlers.get(identifier).cloned()
    }
}

/// Outcome of a full resolution: index lookup plus handler resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome<H> {
    /// A route matched and its handler is known to the registry.
    Dispatched { handler: H, route: ResolvedRoute },
    /// A route matched but the registry knows no handler for its identifier.
    /// The decoded route is kept so callers can report what was asked for.
    UnknownHandler(ResolvedRoute),
    /// No registered route matches.
    NoMatch,
}

/// A match index paired with a handler registry.
#[derive(Debug, Clone)]
pub struct Resolver<R> {
    index: MatchIndex,
    registry: R,
}

impl<R: HandlerRegistry> Resolver<R> {
    pub fn new(index: MatchIndex, registry: R) -> Self {
        Self { index, registry }
    }

    pub fn index(&self) -> &MatchIndex {
        &self.index
    }

    /// Look up a component list and resolve the matched handler.
    ///
    /// An unknown handler identifier is a distinct outcome, not an error;
    /// only structural index violations produce `Err`.
    pub fn resolve(
        &self,
        components: &[UriComponent],
        replacements: &SegmentReplacements,
    ) -> Result<ResolveOutcome<R::Handler>> {
        let Some(route) = self.index.lookup(components, replacements)? else {
            return Ok(ResolveOutcome::NoMatch);
        };
        match self
            .registry
            .resolve(&route.entry.handler, route.entry.method.as_deref())
        {
            Some(handler) => Ok(ResolveOutcome::Dispatched { handler, route }),
            None => Ok(ResolveOutcome::UnknownHandler(route)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_registry_resolution() {
        let mut registry = MapRegistry::new();
        registry.insert("UsersHandler", 7u32);
        assert_eq!(registry.resolve("UsersHandler", None), Some(7));
        assert_eq!(registry.resolve("UsersHandler", Some("show")), Some(7));
        assert_eq!(registry.resolve("Missing", None), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_insert_replaces() {
        let mut registry = MapRegistry::new();
        registry.insert("H", 1u32);
        registry.insert("H", 2u32);
        assert_eq!(registry.resolve("H", None), Some(2));
        assert_eq!(registry.len(), 1);
    }
}
