//! Build GraphQL query documents out of typed values instead of
//! hand-assembled strings.
//!
//! A document is described bottom-up with [`Argument`]s, [`Request`]s and
//! [`Fragment`]s, assembled into a [`Query`], and rendered once with
//! [`Query::create()`]. Rendering validates the whole tree first (empty
//! selections, invalid identifiers, undeclared/duplicate/cyclic fragments)
//! and reports every problem found as a [`QueryBuildError`].
//!
//! This crate only produces document text. It does not know about any
//! schema, and sending the document to a server is left to the caller.

mod argument;
mod argument_value;
mod debug_dump;
mod field_reference;
mod fragment;
mod identifier;
mod node_path;
mod query;
mod query_build_error;
mod query_validator;
mod request;
mod serializer;

pub use argument::Argument;
pub use argument_value::ArgumentValue;
pub use argument_value::EnumLiteral;
pub use field_reference::FieldReference;
pub use field_reference::FragmentSpread;
pub use fragment::Fragment;
pub use identifier::IdentifierKind;
pub use node_path::NodePath;
pub use node_path::NodePathRoot;
pub use query::Query;
pub use query_build_error::QueryBuildError;
pub use request::Request;

#[cfg(test)]
mod tests;
