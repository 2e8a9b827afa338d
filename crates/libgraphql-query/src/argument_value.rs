use indexmap::IndexMap;
use std::sync::Arc;

/// Any value that can be passed as a GraphQL argument.
///
/// Implementors decide how they are written as a GraphQL literal. Built-in
/// scalars follow the GraphQL literal grammar: strings are double-quoted,
/// numbers and booleans are written bare, and sequences are written as
/// bracketed lists.
///
/// Implementing this trait for your own type is how GraphQL enum literals
/// are expressed. An enum value is written as its raw name without quotes:
///
/// ```
/// use libgraphql_query::Argument;
/// use libgraphql_query::ArgumentValue;
///
/// #[derive(Debug)]
/// enum Role {
///     Opener,
///     Teaser,
/// }
///
/// impl ArgumentValue for Role {
///     fn as_graphql_argument(&self) -> String {
///         let name = match self {
///             Role::Opener => "OPENER",
///             Role::Teaser => "TEASER",
///         };
///         name.to_string()
///     }
/// }
///
/// let arg = Argument::with_values("roles", [Role::Opener, Role::Teaser]);
/// assert_eq!(arg.to_string(), "roles: [OPENER, TEASER]");
/// ```
pub trait ArgumentValue: std::fmt::Debug + Send + Sync {
    /// Render this value as GraphQL argument text.
    fn as_graphql_argument(&self) -> String;
}

/// A GraphQL enum literal given by its raw name (rendered without quotes).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct EnumLiteral(String);
impl EnumLiteral {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        self.0.as_str()
    }
}
impl ArgumentValue for EnumLiteral {
    fn as_graphql_argument(&self) -> String {
        self.0.to_owned()
    }
}

macro_rules! impl_integer_argument_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ArgumentValue for $ty {
                fn as_graphql_argument(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}
impl_integer_argument_value!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
);

macro_rules! impl_float_argument_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ArgumentValue for $ty {
                fn as_graphql_argument(&self) -> String {
                    if !self.is_finite() {
                        return "null".to_string();
                    }
                    format_float_text(self.to_string())
                }
            }
        )*
    };
}
impl_float_argument_value!(f32, f64);

/// Rust prints whole floats without a fractional part (`1`), which GraphQL
/// would read back as an Int.
fn format_float_text(text: String) -> String {
    if text.contains(['.', 'e', 'E']) {
        text
    } else {
        format!("{text}.0")
    }
}

impl ArgumentValue for bool {
    fn as_graphql_argument(&self) -> String {
        self.to_string()
    }
}

// NOTE: The string is not escaped. Values containing `"`, `\` or control
//       characters must be escaped by the caller.
impl ArgumentValue for str {
    fn as_graphql_argument(&self) -> String {
        format!("\"{self}\"")
    }
}

impl ArgumentValue for String {
    fn as_graphql_argument(&self) -> String {
        self.as_str().as_graphql_argument()
    }
}

impl<T: ArgumentValue + ?Sized> ArgumentValue for &T {
    fn as_graphql_argument(&self) -> String {
        (**self).as_graphql_argument()
    }
}

impl<T: ArgumentValue + ?Sized> ArgumentValue for Box<T> {
    fn as_graphql_argument(&self) -> String {
        (**self).as_graphql_argument()
    }
}

impl<T: ArgumentValue + ?Sized> ArgumentValue for Arc<T> {
    fn as_graphql_argument(&self) -> String {
        (**self).as_graphql_argument()
    }
}

impl<T: ArgumentValue> ArgumentValue for Option<T> {
    fn as_graphql_argument(&self) -> String {
        match self {
            Some(value) => value.as_graphql_argument(),
            None => "null".to_string(),
        }
    }
}

impl<T: ArgumentValue> ArgumentValue for [T] {
    fn as_graphql_argument(&self) -> String {
        format_list(self.iter())
    }
}

impl<T: ArgumentValue, const N: usize> ArgumentValue for [T; N] {
    fn as_graphql_argument(&self) -> String {
        format_list(self.iter())
    }
}

impl<T: ArgumentValue> ArgumentValue for Vec<T> {
    fn as_graphql_argument(&self) -> String {
        format_list(self.iter())
    }
}

/// Input-object literal. Entries are written in insertion order.
impl<T: ArgumentValue> ArgumentValue for IndexMap<String, T> {
    fn as_graphql_argument(&self) -> String {
        let entries = self.iter()
            .map(|(key, value)| format!("{key}: {}", value.as_graphql_argument()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{{entries}}}")
    }
}

pub(crate) fn format_list<'a, T: ArgumentValue + ?Sized + 'a>(
    values: impl Iterator<Item = &'a T>,
) -> String {
    let elements = values
        .map(|value| value.as_graphql_argument())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{elements}]")
}
