//! Lowers the document model into GraphQL text.
//!
//! Output is single-line per definition: the root selection wrapped in
//! `{ ... }`, followed by one line per fragment definition in declaration
//! order. Nothing here validates; callers run the validators first.

use crate::FieldReference;
use crate::Fragment;
use crate::Query;
use crate::Request;

const DEFINITION_SEPARATOR: &str = "\n";

pub(crate) fn render_query(query: &Query) -> String {
    let mut out = String::new();
    out.push_str("{ ");
    write_request(&mut out, query.root());
    out.push_str(" }");

    for fragment in query.fragments() {
        out.push_str(DEFINITION_SEPARATOR);
        write_fragment_definition(&mut out, fragment);
    }

    out
}

pub(crate) fn render_request(request: &Request) -> String {
    let mut out = String::new();
    write_request(&mut out, request);
    out
}

pub(crate) fn render_fragment_definition(fragment: &Fragment) -> String {
    let mut out = String::new();
    write_fragment_definition(&mut out, fragment);
    out
}

fn write_fragment_definition(out: &mut String, fragment: &Fragment) {
    out.push_str("fragment ");
    out.push_str(fragment.alias());
    out.push_str(" on ");
    out.push_str(fragment.type_condition());
    write_fields(out, fragment.fields());
}

fn write_request(out: &mut String, request: &Request) {
    if let Some(alias) = request.alias() {
        out.push_str(alias);
        out.push_str(": ");
    }
    out.push_str(request.name());

    if !request.arguments().is_empty() {
        let arguments = request.arguments()
            .iter()
            .map(|argument| argument.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        out.push('(');
        out.push_str(&arguments);
        out.push(')');
    }

    write_fields(out, request.fields());
}

fn write_fields(out: &mut String, fields: &[FieldReference]) {
    if fields.is_empty() {
        return;
    }

    out.push_str(" {");
    for field in fields {
        out.push(' ');
        match field {
            FieldReference::Leaf(name) => out.push_str(name),
            FieldReference::Nested(request) => write_request(out, request),
            FieldReference::Spread(spread) => out.push_str(&spread.render()),
        }
    }
    out.push_str(" }");
}
