use crate::IdentifierKind;
use crate::NodePath;
use thiserror::Error;

/// A structural problem found while validating a [`Query`](crate::Query)
/// (or a single [`Request`](crate::Request)/[`Fragment`](crate::Fragment))
/// for serialization.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum QueryBuildError {
    #[error("The `{key}` argument at {path} has no values")]
    ArgumentWithoutValues {
        key: String,
        path: NodePath,
    },

    #[error(
        "Duplicate fragment alias: `{alias}` is declared at positions \
        {first_index} and {second_index}"
    )]
    DuplicateFragmentAlias {
        alias: String,
        first_index: usize,
        second_index: usize,
    },

    #[error("Fragment cycle detected: {}", format_cycle_path(.cycle_path))]
    FragmentCycleDetected {
        cycle_path: Vec<String>,
    },

    #[error("Invalid GraphQL identifier `{identifier}` ({kind:?}) at {path}")]
    InvalidIdentifier {
        identifier: String,
        kind: IdentifierKind,
        path: NodePath,
    },

    #[error(
        "The selection at {path} is empty: a request needs at least one \
        argument or field, and a fragment needs at least one field"
    )]
    MalformedSelection {
        path: NodePath,
    },

    #[error(
        "The selection at {path} spreads `...{alias}`, but no fragment with \
        that alias was declared on the query"
    )]
    UnresolvedFragmentReference {
        alias: String,
        path: NodePath,
    },
}

fn format_cycle_path(cycle: &[String]) -> String {
    cycle.join(" → ")
}
