//! JSON query-description files.
//!
//! ```json
//! {
//!   "request": {
//!     "alias": "test",
//!     "name": "content",
//!     "arguments": [{ "key": "ids", "value": [153082687] }],
//!     "fields": ["...contentFields"]
//!   },
//!   "fragments": [
//!     { "alias": "contentFields", "on": "Content", "fields": ["headline", "body"] }
//!   ]
//! }
//! ```
//!
//! A field is either a string (a leaf name, or `...alias` for a fragment
//! spread) or a nested request object. An argument carries either a single
//! `value` or a list of `values`. `{ "$enum": "NAME" }` is an enum literal;
//! any other JSON object is a GraphQL input object.

use indexmap::IndexMap;
use libgraphql_query::Argument;
use libgraphql_query::ArgumentValue;
use libgraphql_query::EnumLiteral;
use libgraphql_query::FieldReference;
use libgraphql_query::Fragment;
use libgraphql_query::FragmentSpread;
use libgraphql_query::Query;
use libgraphql_query::Request;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const ENUM_LITERAL_KEY: &str = "$enum";
const SPREAD_PREFIX: &str = "...";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct QueryFile {
    request: RequestDef,
    #[serde(default)]
    fragments: Vec<FragmentDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RequestDef {
    alias: Option<String>,
    name: String,
    #[serde(default)]
    arguments: Vec<ArgumentDef>,
    #[serde(default)]
    fields: Vec<FieldDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FragmentDef {
    alias: String,
    on: String,
    #[serde(default)]
    fields: Vec<FieldDef>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FieldDef {
    Name(String),
    Request(RequestDef),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ArgumentDef {
    Single(SingleArgumentDef),
    Multiple(MultipleArgumentDef),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SingleArgumentDef {
    key: String,
    value: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MultipleArgumentDef {
    key: String,
    values: Vec<serde_json::Value>,
}

impl QueryFile {
    pub(crate) fn from_file(file_path: &Path) -> Result<Self, QueryFileError> {
        let content = std::fs::read_to_string(file_path).map_err(|err| {
            QueryFileError::Read {
                file_path: file_path.display().to_string(),
                err: err.to_string(),
            }
        })?;

        Self::from_json_str(&content).map_err(|err| QueryFileError::Parse {
            file_path: file_path.display().to_string(),
            err: err.to_string(),
        })
    }

    pub(crate) fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Assemble the described [`Query`]. Structural problems are left for
    /// [`Query::create()`] to report.
    pub(crate) fn into_query(self) -> Query {
        Query::new(
            self.request.into_request(),
            self.fragments.into_iter().map(FragmentDef::into_fragment),
        )
    }
}

impl RequestDef {
    fn into_request(self) -> Request {
        let request = Request::new(self.name)
            .add_arguments(self.arguments.into_iter().map(ArgumentDef::into_argument))
            .add_fields(self.fields.into_iter().map(FieldDef::into_field_reference));

        match self.alias {
            Some(alias) => request.set_alias(alias),
            None => request,
        }
    }
}

impl FragmentDef {
    fn into_fragment(self) -> Fragment {
        Fragment::new(self.alias, self.on)
            .add_fields(self.fields.into_iter().map(FieldDef::into_field_reference))
    }
}

impl FieldDef {
    fn into_field_reference(self) -> FieldReference {
        match self {
            Self::Name(name) => {
                if let Some(alias) = name.strip_prefix(SPREAD_PREFIX) {
                    return FragmentSpread::new(alias).into();
                }
                name.into()
            },
            Self::Request(request) => request.into_request().into(),
        }
    }
}

impl ArgumentDef {
    fn into_argument(self) -> Argument {
        match self {
            Self::Single(SingleArgumentDef { key, value }) =>
                Argument::new(key, json_to_argument_value(value)),

            Self::Multiple(MultipleArgumentDef { key, values }) =>
                Argument::with_values(
                    key,
                    values.into_iter().map(json_to_argument_value),
                ),
        }
    }
}

fn json_to_argument_value(value: serde_json::Value) -> Box<dyn ArgumentValue> {
    match value {
        serde_json::Value::Null => Box::new(None::<bool>),

        serde_json::Value::Bool(value) => Box::new(value),

        serde_json::Value::Number(number) => {
            if let Some(value) = number.as_i64() {
                Box::new(value)
            } else if let Some(value) = number.as_u64() {
                Box::new(value)
            } else {
                // Without `arbitrary_precision` every JSON number fits one of
                // i64, u64 or f64.
                Box::new(number.as_f64().unwrap_or(f64::NAN))
            }
        },

        serde_json::Value::String(value) => Box::new(value),

        serde_json::Value::Array(values) =>
            Box::new(values.into_iter().map(json_to_argument_value).collect::<Vec<_>>()),

        serde_json::Value::Object(entries) => {
            if entries.len() == 1
                && let Some(serde_json::Value::String(name)) = entries.get(ENUM_LITERAL_KEY) {
                return Box::new(EnumLiteral::new(name.as_str()));
            }

            Box::new(
                entries.into_iter()
                    .map(|(key, value)| (key, json_to_argument_value(value)))
                    .collect::<IndexMap<String, Box<dyn ArgumentValue>>>(),
            )
        },
    }
}

#[derive(Clone, Debug, Error)]
pub(crate) enum QueryFileError {
    #[error("Failure reading query file {file_path}: {err}")]
    Read {
        file_path: String,
        err: String,
    },

    #[error("Failure parsing query file {file_path}: {err}")]
    Parse {
        file_path: String,
        err: String,
    },
}
