use crate::Fragment;
use crate::Request;

/// One entry in the field list of a [`Request`] or [`Fragment`].
#[derive(Clone, Debug)]
pub enum FieldReference {
    /// A bare (scalar) field name.
    Leaf(String),
    /// A field with its own arguments and/or nested selection.
    Nested(Request),
    /// A `...alias` spread of a [`Fragment`] declared on the enclosing
    /// [`Query`](crate::Query).
    Spread(FragmentSpread),
}
impl From<&str> for FieldReference {
    fn from(name: &str) -> Self {
        Self::Leaf(name.to_string())
    }
}
impl From<String> for FieldReference {
    fn from(name: String) -> Self {
        Self::Leaf(name)
    }
}
impl From<Request> for FieldReference {
    fn from(request: Request) -> Self {
        Self::Nested(request)
    }
}
impl From<&Fragment> for FieldReference {
    fn from(fragment: &Fragment) -> Self {
        Self::Spread(fragment.spread())
    }
}
impl From<Fragment> for FieldReference {
    fn from(fragment: Fragment) -> Self {
        Self::Spread(fragment.spread())
    }
}
impl From<FragmentSpread> for FieldReference {
    fn from(spread: FragmentSpread) -> Self {
        Self::Spread(spread)
    }
}

/// A non-owning reference to a [`Fragment`], by alias.
///
/// The referenced definition is owned by the [`Query`](crate::Query) and is
/// looked up by alias when the query is validated.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FragmentSpread {
    alias: String,
}
impl FragmentSpread {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
        }
    }

    pub fn alias(&self) -> &str {
        self.alias.as_str()
    }

    /// Renders `...alias`.
    pub fn render(&self) -> String {
        format!("...{}", self.alias)
    }
}
