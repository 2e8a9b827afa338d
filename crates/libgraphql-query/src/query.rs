use crate::debug_dump;
use crate::query_validator::QueryValidator;
use crate::serializer;
use crate::Fragment;
use crate::QueryBuildError;
use crate::Request;

type Result<T> = std::result::Result<T, Vec<QueryBuildError>>;

/// A complete query document: one root [`Request`] plus the [`Fragment`]s
/// spread anywhere within it.
///
/// The `Query` owns every fragment definition. Spreads elsewhere in the tree
/// refer to those definitions by alias, so each definition is emitted exactly
/// once no matter how many times it is spread.
///
/// ```
/// use libgraphql_query::Argument;
/// use libgraphql_query::Fragment;
/// use libgraphql_query::Query;
/// use libgraphql_query::Request;
///
/// let user_fields = Fragment::new("userFields", "User")
///     .add_field("id")
///     .add_field("name");
///
/// let query = Query::new(
///     Request::new("user")
///         .add_argument(Argument::new("id", 42))
///         .add_field(&user_fields),
///     [user_fields],
/// );
///
/// assert_eq!(
///     query.create().unwrap(),
///     "{ user(id: 42) { ...userFields } }\n\
///      fragment userFields on User { id name }",
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Query {
    fragments: Vec<Fragment>,
    root: Request,
}
impl Query {
    pub fn new(root: Request, fragments: impl IntoIterator<Item = Fragment>) -> Self {
        Self {
            fragments: fragments.into_iter().collect(),
            root,
        }
    }

    pub fn with_request(root: Request) -> Self {
        Self {
            fragments: vec![],
            root,
        }
    }

    /// Declare a [`Fragment`] after any previously declared `Fragment`s.
    pub fn add_fragment(mut self, fragment: Fragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    /// Declared fragments, in declaration order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn root(&self) -> &Request {
        &self.root
    }

    /// Run every structural check [`Query::create()`] performs, without
    /// rendering.
    pub fn validate(&self) -> Result<()> {
        QueryValidator::new(self).validate()
    }

    /// Validate this query and render it as GraphQL document text.
    ///
    /// The root request is wrapped in `{ ... }` and followed by each
    /// declared fragment definition, one per line, in declaration order.
    /// Nothing is rendered if any check fails; every error found is
    /// returned.
    pub fn create(&self) -> Result<String> {
        self.validate()?;
        let document = serializer::render_query(self);
        log::debug!(
            "Rendered query `{}` with {} fragment definition(s) ({} bytes).",
            self.root.selected_name(),
            self.fragments.len(),
            document.len(),
        );
        Ok(document)
    }

    /// An indented, human-readable dump of the whole tree.
    ///
    /// This never fails, so a tree that [`Query::create()`] rejects can still
    /// be inspected.
    pub fn debug_dump(&self) -> String {
        debug_dump::dump_query(self)
    }
}
