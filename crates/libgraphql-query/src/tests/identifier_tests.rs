use crate::identifier::is_valid_fragment_name;
use crate::identifier::is_valid_name;

#[test]
fn accepts_graphql_names() {
    assert!(is_valid_name("id"));
    assert!(is_valid_name("_private"));
    assert!(is_valid_name("imageContent2"));
    assert!(is_valid_name("__typename"));
}

#[test]
fn rejects_non_names() {
    assert!(!is_valid_name(""));
    assert!(!is_valid_name("2fast"));
    assert!(!is_valid_name("with space"));
    assert!(!is_valid_name("dashed-name"));
    assert!(!is_valid_name("ünicode"));
}

#[test]
fn on_is_not_a_fragment_name() {
    assert!(is_valid_name("on"));
    assert!(!is_valid_fragment_name("on"));
    assert!(is_valid_fragment_name("online"));
}
