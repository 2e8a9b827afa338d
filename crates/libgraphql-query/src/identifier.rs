/// What an identifier names within the tree. Carried by
/// [`QueryBuildError::InvalidIdentifier`](crate::QueryBuildError::InvalidIdentifier).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IdentifierKind {
    ArgumentKey,
    FieldName,
    FragmentAlias,
    RequestAlias,
    TypeCondition,
}

/// `Name :: /[_A-Za-z][_0-9A-Za-z]*/`
///
/// https://spec.graphql.org/September2025/#Name
pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => (),
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// `FragmentName :: Name but not "on"`
///
/// https://spec.graphql.org/September2025/#FragmentName
pub(crate) fn is_valid_fragment_name(name: &str) -> bool {
    name != "on" && is_valid_name(name)
}
