use crate::query_validator::SelectionValidator;
use crate::serializer;
use crate::FieldReference;
use crate::FragmentSpread;
use crate::QueryBuildError;

type Result<T> = std::result::Result<T, Vec<QueryBuildError>>;

/// A named fragment definition: `fragment <alias> on <name> { ... }`.
///
/// A `Fragment` is declared once on a [`Query`](crate::Query) and can be
/// spread (`...alias`) from any number of [`Request`](crate::Request)s or
/// other `Fragment`s. Passing a `&Fragment` to `add_field()` adds a spread
/// that refers to the fragment by its alias.
#[derive(Clone, Debug)]
pub struct Fragment {
    pub(crate) alias: String,
    pub(crate) fields: Vec<FieldReference>,
    pub(crate) type_condition: String,
}
impl Fragment {
    /// `alias` is the fragment's own name, `type_condition` is the GraphQL
    /// type it applies to.
    pub fn new(alias: impl Into<String>, type_condition: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            fields: vec![],
            type_condition: type_condition.into(),
        }
    }

    pub fn add_field(mut self, field: impl Into<FieldReference>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn add_fields<F: Into<FieldReference>>(
        mut self,
        fields: impl IntoIterator<Item = F>,
    ) -> Self {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn alias(&self) -> &str {
        self.alias.as_str()
    }

    pub fn fields(&self) -> &[FieldReference] {
        &self.fields
    }

    /// The name of the GraphQL type this fragment applies to.
    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }

    pub fn spread(&self) -> FragmentSpread {
        FragmentSpread::new(self.alias.as_str())
    }

    /// Render `fragment <alias> on <name> { ... }`.
    ///
    /// As with [`Request::render()`](crate::Request::render), spreads inside
    /// the fragment are not resolved here.
    pub fn render_definition(&self) -> Result<String> {
        let mut validator = SelectionValidator::default();
        validator.check_fragment(self);
        validator.into_result()?;
        Ok(serializer::render_fragment_definition(self))
    }

    /// Render `...<alias>`.
    pub fn render_spread(&self) -> String {
        self.spread().render()
    }
}
