use crate::Argument;
use crate::FieldReference;
use crate::Fragment;
use crate::IdentifierKind;
use crate::NodePath;
use crate::QueryBuildError;
use crate::Request;

#[test]
fn definition_renders_alias_type_and_fields() {
    let fragment = Fragment::new("urlFragment", "Image").add_field(
        Request::new("url")
            .add_argument(Argument::new("ratio", 1))
            .add_argument(Argument::new("size", 200)),
    );
    assert_eq!(
        fragment.render_definition().unwrap(),
        "fragment urlFragment on Image { url(ratio: 1, size: 200) }",
    );
    assert_eq!(fragment.alias(), "urlFragment");
    assert_eq!(fragment.type_condition(), "Image");
}

#[test]
fn spread_renders_alias_only() {
    let fragment = Fragment::new("imageContent", "Image").add_field("id");
    assert_eq!(fragment.render_spread(), "...imageContent");
    assert_eq!(fragment.spread().alias(), "imageContent");
}

#[test]
fn fragments_spread_other_fragments() {
    let url_fragment = Fragment::new("urlFragment", "Image").add_field("url");
    let image_content = Fragment::new("imageContent", "Image")
        .add_fields([FieldReference::from("id"), FieldReference::from(&url_fragment)]);
    assert_eq!(
        image_content.render_definition().unwrap(),
        "fragment imageContent on Image { id ...urlFragment }",
    );
}

#[test]
fn spreading_by_value_keeps_only_the_alias() {
    let fragment = Fragment::new("owned", "Thing").add_field("id");
    let field = FieldReference::from(fragment);
    assert!(matches!(field, FieldReference::Spread(spread) if spread.alias() == "owned"));
}

#[test]
fn empty_fragment_is_a_malformed_selection() {
    let errors = Fragment::new("nothing", "Image").render_definition().unwrap_err();
    assert_eq!(errors, vec![QueryBuildError::MalformedSelection {
        path: NodePath::fragment("nothing"),
    }]);
}

#[test]
fn fragment_named_on_is_rejected() {
    let errors = Fragment::new("on", "Image")
        .add_field("id")
        .render_definition()
        .unwrap_err();
    assert_eq!(errors, vec![QueryBuildError::InvalidIdentifier {
        identifier: "on".to_string(),
        kind: IdentifierKind::FragmentAlias,
        path: NodePath::fragment("on"),
    }]);
}

#[test]
fn invalid_type_condition_is_rejected() {
    let errors = Fragment::new("imageFields", "Image Type")
        .add_field("id")
        .render_definition()
        .unwrap_err();
    assert!(matches!(
        &errors[..],
        [QueryBuildError::InvalidIdentifier { kind: IdentifierKind::TypeCondition, .. }],
    ));
}
