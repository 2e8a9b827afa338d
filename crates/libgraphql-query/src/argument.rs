use crate::argument_value::format_list;
use crate::ArgumentValue;
use std::sync::Arc;

/// A GraphQL argument: a key bound to one or more [`ArgumentValue`]s.
///
/// An `Argument` with exactly one value renders as `key: value`. With more
/// than one value it renders as a list, `key: [v1, v2]`, so a variadic set of
/// values can be passed for a single key without first wrapping them in a
/// `Vec`.
#[derive(Clone, Debug)]
pub struct Argument {
    key: String,
    values: Vec<Arc<dyn ArgumentValue>>,
}
impl Argument {
    /// Bind a single value to `key`.
    pub fn new(key: impl Into<String>, value: impl ArgumentValue + 'static) -> Self {
        Self {
            key: key.into(),
            values: vec![Arc::new(value) as Arc<dyn ArgumentValue>],
        }
    }

    /// Bind a sequence of values to `key`.
    ///
    /// Values of different types can be mixed by boxing them:
    ///
    /// ```
    /// use libgraphql_query::Argument;
    /// use libgraphql_query::ArgumentValue;
    /// use libgraphql_query::EnumLiteral;
    ///
    /// let arg = Argument::with_values("mixed", [
    ///     Box::new(1) as Box<dyn ArgumentValue>,
    ///     Box::new("two") as Box<dyn ArgumentValue>,
    ///     Box::new(EnumLiteral::new("THREE")) as Box<dyn ArgumentValue>,
    /// ]);
    /// assert_eq!(arg.to_string(), r#"mixed: [1, "two", THREE]"#);
    /// ```
    pub fn with_values<V: ArgumentValue + 'static>(
        key: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            key: key.into(),
            values: values.into_iter()
                .map(|value| Arc::new(value) as Arc<dyn ArgumentValue>)
                .collect(),
        }
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    pub fn values(&self) -> &[Arc<dyn ArgumentValue>] {
        &self.values
    }

    /// The rendered value portion (everything after `key: `).
    pub fn value_text(&self) -> String {
        match self.values.as_slice() {
            [single] => single.as_graphql_argument(),
            values => format_list(values.iter()),
        }
    }
}
impl std::fmt::Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.key, self.value_text())
    }
}
