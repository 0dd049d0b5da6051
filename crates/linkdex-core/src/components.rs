//! Assembly of ordered component lists from already-tokenized URI pieces.

use bytes::Bytes;
use linkdex_index::UriComponent;
use smallvec::SmallVec;

/// Ordered inbound components. URIs rarely carry more than a handful of path
/// segments, so the list stays inline.
pub type UriComponents = SmallVec<[UriComponent; 8]>;

/// Build the component list a compiled index expects: synthetic root, scheme,
/// host, then each path segment in order.
///
/// The pieces are already tokenized; this performs no URI parsing.
pub fn uri_components<S: AsRef<str>>(scheme: &str, host: &str, path_segments: &[S]) -> UriComponents {
    let mut components = UriComponents::new();
    components.push(UriComponent::root());
    components.push(UriComponent::scheme(Bytes::copy_from_slice(scheme.as_bytes())));
    components.push(UriComponent::host(Bytes::copy_from_slice(host.as_bytes())));
    for segment in path_segments {
        components.push(UriComponent::path_segment(Bytes::copy_from_slice(
            segment.as_ref().as_bytes(),
        )));
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkdex_index::ComponentKind;

    #[test]
    fn test_component_order() {
        let components = uri_components("app", "example.com", &["users", "42"]);
        let kinds: Vec<_> = components.iter().map(UriComponent::kind).collect();
        assert_eq!(
            kinds,
            [
                ComponentKind::Root,
                ComponentKind::Scheme,
                ComponentKind::Host,
                ComponentKind::PathSegment,
                ComponentKind::PathSegment,
            ]
        );
        assert_eq!(components[1].value(), b"app");
        assert_eq!(components[4].value(), b"42");
    }

    #[test]
    fn test_stays_inline_for_typical_uris() {
        let components = uri_components("app", "example.com", &["a", "b", "c", "d", "e"]);
        assert_eq!(components.len(), 8);
        assert!(!components.spilled());
    }

    #[test]
    fn test_no_path_segments() {
        let components = uri_components("app", "example.com", &[] as &[&str]);
        assert_eq!(components.len(), 3);
    }
}
