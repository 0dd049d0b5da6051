//! Full resolution paths: index lookup through handler registry.

use linkdex_core::{
    match_index_file_name, uri_components, MapRegistry, MatchIndex, ResolveOutcome, Resolver,
    SegmentReplacements,
};
use linkdex_index::testing::IndexNode;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Screen(&'static str);

fn sample_index() -> MatchIndex {
    MatchIndex::new(
        IndexNode::root()
            .child(
                IndexNode::scheme("app").child(
                    IndexNode::host("example.com")
                        .child(
                            IndexNode::path_segment("users").child(
                                IndexNode::path_param("{id}").with_route(
                                    "app://example.com/users/{id}",
                                    "UserDetailHandler",
                                    Some("show"),
                                ),
                            ),
                        )
                        .child(IndexNode::path_segment("legacy").with_route(
                            "app://example.com/legacy",
                            "RetiredHandler",
                            None,
                        )),
                ),
            )
            .encode(),
    )
}

#[test]
fn test_dispatched_with_bindings() {
    let mut registry = MapRegistry::new();
    registry.insert("UserDetailHandler", Screen("user-detail"));
    let resolver = Resolver::new(sample_index(), registry);

    let components = uri_components("app", "example.com", &["users", "42"]);
    let outcome = resolver
        .resolve(&components, &SegmentReplacements::new())
        .unwrap();

    match outcome {
        ResolveOutcome::Dispatched { handler, route } => {
            assert_eq!(handler, Screen("user-detail"));
            assert_eq!(route.entry.method.as_deref(), Some("show"));
            assert_eq!(route.binding("id"), Some("42"));
        }
        other => panic!("expected dispatch, got {other:?}"),
    }
}

#[test]
fn test_unknown_handler_is_not_an_error() {
    let resolver = Resolver::new(sample_index(), MapRegistry::<Screen>::new());

    let components = uri_components("app", "example.com", &["legacy"]);
    let outcome = resolver
        .resolve(&components, &SegmentReplacements::new())
        .unwrap();

    match outcome {
        ResolveOutcome::UnknownHandler(route) => {
            assert_eq!(route.entry.handler, "RetiredHandler");
        }
        other => panic!("expected unknown handler, got {other:?}"),
    }
}

#[test]
fn test_no_match_outcome() {
    let mut registry = MapRegistry::new();
    registry.insert("UserDetailHandler", Screen("user-detail"));
    let resolver = Resolver::new(sample_index(), registry);

    let components = uri_components("app", "example.com", &["nothing"]);
    let outcome = resolver
        .resolve(&components, &SegmentReplacements::new())
        .unwrap();
    assert_eq!(outcome, ResolveOutcome::NoMatch);
}

#[test]
fn test_structural_violation_propagates() {
    // The cut lands inside the "legacy" route's match record.
    let mut buffer = sample_index().as_bytes().to_vec();
    buffer.truncate(buffer.len() - 6);
    let resolver = Resolver::new(MatchIndex::new(buffer), MapRegistry::<Screen>::new());

    let components = uri_components("app", "example.com", &["legacy"]);
    assert!(resolver
        .resolve(&components, &SegmentReplacements::new())
        .is_err());
}

#[test]
fn test_concurrent_lookups_share_one_buffer() {
    let index = sample_index();
    let threads: Vec<_> = (0..4)
        .map(|i| {
            let index = index.clone();
            std::thread::spawn(move || {
                let id = i.to_string();
                let components = uri_components("app", "example.com", &["users", id.as_str()]);
                let found = index
                    .lookup(&components, &SegmentReplacements::new())
                    .unwrap()
                    .unwrap();
                assert_eq!(found.binding("id"), Some(id.as_str()));
            })
        })
        .collect();
    for thread in threads {
        thread.join().unwrap();
    }
}

#[test]
fn test_loader_file_name_convention() {
    assert_eq!(match_index_file_name("Main"), "linkdex_match_main.idx");
}
