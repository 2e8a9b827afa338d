use crate::FieldReference;
use crate::Fragment;
use crate::Query;
use crate::Request;

const INDENT: &str = "  ";

pub(crate) fn dump_query(query: &Query) -> String {
    let mut lines = vec!["Query".to_string()];
    dump_request(&mut lines, query.root(), 1);

    for fragment in query.fragments() {
        dump_fragment(&mut lines, fragment, 1);
    }

    lines.join("\n")
}

fn dump_fragment(lines: &mut Vec<String>, fragment: &Fragment, depth: usize) {
    push_line(
        lines,
        depth,
        format!("Fragment {} on {}", fragment.alias(), fragment.type_condition()),
    );
    dump_fields(lines, fragment.fields(), depth + 1);
}

fn dump_request(lines: &mut Vec<String>, request: &Request, depth: usize) {
    let header = match request.alias() {
        Some(alias) => format!("Request {} (alias: {alias})", request.name()),
        None => format!("Request {}", request.name()),
    };
    push_line(lines, depth, header);

    for argument in request.arguments() {
        push_line(
            lines,
            depth + 1,
            format!(
                "Argument {} = {} ({} value(s))",
                argument.key(),
                argument.value_text(),
                argument.values().len(),
            ),
        );
    }
    dump_fields(lines, request.fields(), depth + 1);
}

fn dump_fields(lines: &mut Vec<String>, fields: &[FieldReference], depth: usize) {
    for field in fields {
        match field {
            FieldReference::Leaf(name) =>
                push_line(lines, depth, format!("Field {name}")),

            FieldReference::Nested(request) =>
                dump_request(lines, request, depth),

            FieldReference::Spread(spread) =>
                push_line(lines, depth, format!("Spread {}", spread.render())),
        }
    }
}

fn push_line(lines: &mut Vec<String>, depth: usize, text: String) {
    lines.push(format!("{}{text}", INDENT.repeat(depth)));
}
