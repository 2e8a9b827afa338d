use crate::query_validator::normalize_cycle;
use crate::Argument;
use crate::Fragment;
use crate::FragmentSpread;
use crate::IdentifierKind;
use crate::NodePath;
use crate::Query;
use crate::QueryBuildError;
use crate::Request;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn undeclared_spread_from_root_is_unresolved() {
    let user_fields = Fragment::new("userFields", "User").add_field("id");
    let query = Query::with_request(
        Request::with_alias("me", "viewer").add_field(&user_fields),
    );

    let errors = query.create().unwrap_err();
    assert_eq!(errors, vec![QueryBuildError::UnresolvedFragmentReference {
        alias: "userFields".to_string(),
        path: NodePath::query().child("me"),
    }]);
}

#[test]
fn undeclared_spread_from_fragment_is_unresolved() {
    let inner = Fragment::new("inner", "Image").add_field("url");
    let outer = Fragment::new("outer", "Image")
        .add_field("id")
        .add_field(Request::new("thumbnail").add_field(&inner));
    let query = Query::new(
        Request::new("image").add_argument(Argument::new("id", 1)).add_field(&outer),
        [outer],
    );

    let errors = query.validate().unwrap_err();
    assert_eq!(errors, vec![QueryBuildError::UnresolvedFragmentReference {
        alias: "inner".to_string(),
        path: NodePath::fragment("outer").child("thumbnail"),
    }]);
}

#[test]
fn duplicate_fragment_alias_is_rejected() {
    let first = Fragment::new("userFields", "User").add_field("id");
    let second = Fragment::new("userFields", "User").add_field("name");
    let query = Query::new(Request::new("viewer").add_field(&first), [first, second]);

    let errors = query.create().unwrap_err();
    assert_eq!(errors, vec![QueryBuildError::DuplicateFragmentAlias {
        alias: "userFields".to_string(),
        first_index: 0,
        second_index: 1,
    }]);
}

#[test]
fn self_referencing_fragment_is_a_cycle() {
    let looping = Fragment::new("looping", "User")
        .add_field("id")
        .add_field(FragmentSpread::new("looping"));
    let query = Query::new(Request::new("viewer").add_field(&looping), [looping]);

    let errors = query.create().unwrap_err();
    assert_eq!(errors, vec![QueryBuildError::FragmentCycleDetected {
        cycle_path: strings(&["looping", "looping"]),
    }]);
}

#[test]
fn three_fragment_cycle_is_reported_once() {
    let a = Fragment::new("fragA", "User").add_field("id").add_field(FragmentSpread::new("fragB"));
    let b = Fragment::new("fragB", "User")
        .add_field(Request::new("friend").add_field(FragmentSpread::new("fragC")));
    let c = Fragment::new("fragC", "User").add_field("name").add_field(FragmentSpread::new("fragA"));
    let query = Query::new(Request::new("viewer").add_field(&a), [a, b, c]);

    let errors = query.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        QueryBuildError::FragmentCycleDetected { cycle_path } => {
            assert_eq!(cycle_path, &strings(&["fragA", "fragB", "fragC", "fragA"]));
        },
        other => panic!("Expected a fragment cycle, got {other:?}"),
    }
    assert_eq!(
        errors[0].to_string(),
        "Fragment cycle detected: fragA → fragB → fragC → fragA",
    );
}

#[test]
fn cycle_path_excludes_the_lead_in() {
    let entry = Fragment::new("entry", "User").add_field(FragmentSpread::new("ping"));
    let ping = Fragment::new("ping", "User").add_field(FragmentSpread::new("pong"));
    let pong = Fragment::new("pong", "User").add_field(FragmentSpread::new("ping"));
    let query = Query::new(Request::new("viewer").add_field(&entry), [entry, ping, pong]);

    let errors = query.validate().unwrap_err();
    assert_eq!(errors, vec![QueryBuildError::FragmentCycleDetected {
        cycle_path: strings(&["ping", "pong", "ping"]),
    }]);
}

#[test]
fn empty_root_request_is_malformed() {
    let errors = Query::with_request(Request::new("viewer")).create().unwrap_err();
    assert_eq!(errors, vec![QueryBuildError::MalformedSelection {
        path: NodePath::query().child("viewer"),
    }]);
}

#[test]
fn empty_declared_fragment_is_malformed() {
    let empty = Fragment::new("empty", "User");
    let query = Query::new(Request::new("viewer").add_field(&empty), [empty]);
    assert_eq!(query.validate().unwrap_err(), vec![QueryBuildError::MalformedSelection {
        path: NodePath::fragment("empty"),
    }]);
}

#[test]
fn argument_without_values_is_rejected() {
    let query = Query::with_request(
        Request::new("users")
            .add_argument(Argument::with_values("ids", Vec::<u32>::new()))
            .add_field("id"),
    );
    assert_eq!(query.validate().unwrap_err(), vec![QueryBuildError::ArgumentWithoutValues {
        key: "ids".to_string(),
        path: NodePath::query().child("users"),
    }]);
}

#[test]
fn invalid_identifiers_are_reported_with_their_kind() {
    let query = Query::with_request(
        Request::with_alias("my alias", "content")
            .add_argument(Argument::new("page-size", 10))
            .add_field("")
            .add_field(Request::new("2x").add_field("id")),
    );

    let errors = query.validate().unwrap_err();
    let kinds: Vec<_> = errors.iter()
        .map(|error| match error {
            QueryBuildError::InvalidIdentifier { identifier, kind, .. } =>
                (identifier.as_str(), *kind),
            other => panic!("Unexpected error: {other:?}"),
        })
        .collect();
    assert_eq!(kinds, vec![
        ("my alias", IdentifierKind::RequestAlias),
        ("page-size", IdentifierKind::ArgumentKey),
        ("", IdentifierKind::FieldName),
        ("2x", IdentifierKind::FieldName),
    ]);
}

#[test]
fn all_errors_are_reported_together() {
    let dup_a = Fragment::new("dup", "User").add_field("id");
    let dup_b = Fragment::new("dup", "User").add_field("name");
    let query = Query::new(
        Request::new("viewer")
            .add_field(FragmentSpread::new("missing"))
            .add_field(&dup_a)
            .add_field(Request::new("empty")),
        [dup_a, dup_b],
    );

    let errors = query.create().unwrap_err();
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().any(|e| matches!(e, QueryBuildError::DuplicateFragmentAlias { .. })));
    assert!(errors.iter().any(|e| matches!(
        e,
        QueryBuildError::UnresolvedFragmentReference { alias, .. } if alias == "missing",
    )));
    assert!(errors.iter().any(|e| matches!(e, QueryBuildError::MalformedSelection { .. })));
}

#[test]
fn malformed_trees_fail_without_partial_output() {
    let query = Query::with_request(Request::new("viewer").add_field(Request::new("empty")));
    assert!(query.create().is_err());
    assert!(query.validate().is_err());
}

#[test]
fn normalize_cycle_rotates_to_smallest_alias() {
    assert_eq!(
        normalize_cycle(&strings(&["b", "c", "a", "b"])),
        strings(&["a", "b", "c", "a"]),
    );
    assert_eq!(
        normalize_cycle(&strings(&["c", "a", "b", "c"])),
        strings(&["a", "b", "c", "a"]),
    );
    assert_eq!(normalize_cycle(&[]), Vec::<String>::new());
}

fn fragment_ladder(depth: usize) -> Vec<Fragment> {
    (0..depth)
        .map(|i| {
            let rung = Fragment::new(format!("rung{i}"), "Node").add_field("id");
            if i + 1 == depth {
                return rung;
            }
            let next = FragmentSpread::new(format!("rung{}", i + 1));
            rung.add_field(next.clone())
                .add_field(Request::new("again").add_field(next))
        })
        .collect()
}

#[test]
fn shared_fragments_are_expanded_once_per_validation() {
    // Each rung spreads the next one twice, so a walk that re-expands shared
    // fragments would visit the last rung 2^39 times.
    let depth = 40;
    let query = Query::new(
        Request::new("viewer").add_field(FragmentSpread::new("rung0")),
        fragment_ladder(depth),
    );

    let document = query.create().unwrap();
    assert_eq!(document.lines().count(), depth + 1);
    assert!(document.ends_with("fragment rung39 on Node { id }"));
}

#[test]
fn cycle_behind_an_explored_fragment_is_still_reported() {
    let shared = Fragment::new("shared", "User").add_field(FragmentSpread::new("loopStart"));
    let first = Fragment::new("first", "User").add_field(FragmentSpread::new("shared"));
    let second = Fragment::new("second", "User").add_field(FragmentSpread::new("shared"));
    let loop_start = Fragment::new("loopStart", "User")
        .add_field(Request::new("friend").add_field(FragmentSpread::new("loopEnd")));
    let loop_end = Fragment::new("loopEnd", "User").add_field(FragmentSpread::new("loopStart"));
    let query = Query::new(
        Request::new("viewer").add_field(&first).add_field(&second),
        [first, second, shared, loop_start, loop_end],
    );

    let errors = query.validate().unwrap_err();
    assert_eq!(errors, vec![QueryBuildError::FragmentCycleDetected {
        cycle_path: strings(&["loopStart", "loopEnd", "loopStart"]),
    }]);
}
