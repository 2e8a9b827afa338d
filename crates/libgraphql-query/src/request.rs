use crate::query_validator::SelectionValidator;
use crate::serializer;
use crate::Argument;
use crate::FieldReference;
use crate::NodePath;
use crate::QueryBuildError;

type Result<T> = std::result::Result<T, Vec<QueryBuildError>>;

/// A single field selection: an optionally aliased field name with its
/// arguments and nested fields.
///
/// ```
/// use libgraphql_query::Argument;
/// use libgraphql_query::Request;
///
/// let request = Request::with_alias("opener", "images")
///     .add_argument(Argument::new("role", "opener"))
///     .add_field("id")
///     .add_field(Request::new("url").add_argument(Argument::new("size", 200)));
///
/// assert_eq!(
///     request.render().unwrap(),
///     r#"opener: images(role: "opener") { id url(size: 200) }"#,
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Request {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: Vec<Argument>,
    pub(crate) fields: Vec<FieldReference>,
    pub(crate) name: String,
}
impl Request {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: vec![],
            fields: vec![],
            name: name.into(),
        }
    }

    pub fn with_alias(alias: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(name).set_alias(alias)
    }

    /// Add an [`Argument`] after any previously added `Argument`s.
    ///
    /// Keys are not deduplicated: adding the same key twice renders it twice.
    pub fn add_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn add_arguments(mut self, arguments: impl IntoIterator<Item = Argument>) -> Self {
        self.arguments.extend(arguments);
        self
    }

    /// Add a field (a leaf name, a nested [`Request`], or a
    /// [`Fragment`](crate::Fragment) spread) after any previously added
    /// fields.
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

    pub fn set_alias(mut self, alias: impl Into<String>) -> Self {
        let _ = self.alias.insert(alias.into());
        self
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn fields(&self) -> &[FieldReference] {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /**
     * If an alias was specified for this request, return the alias.
     * Otherwise return the name of the field.
     */
    pub fn selected_name(&self) -> &str {
        self.alias().unwrap_or_else(|| self.name())
    }

    /// Render this request (and everything nested under it) as GraphQL
    /// selection text.
    ///
    /// Fragment spreads are rendered as `...alias` but are not resolved
    /// here; use [`Query::create()`](crate::Query::create) to check that
    /// every spread targets a declared fragment.
    pub fn render(&self) -> Result<String> {
        let mut validator = SelectionValidator::default();
        validator.check_request(self, &NodePath::query());
        validator.into_result()?;
        Ok(serializer::render_request(self))
    }
}
