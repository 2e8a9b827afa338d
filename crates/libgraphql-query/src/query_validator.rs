use crate::identifier::is_valid_fragment_name;
use crate::identifier::is_valid_name;
use crate::Argument;
use crate::FieldReference;
use crate::Fragment;
use crate::IdentifierKind;
use crate::NodePath;
use crate::Query;
use crate::QueryBuildError;
use crate::Request;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, Vec<QueryBuildError>>;

/// Structural checks that only need the node itself: identifiers, empty
/// selections and empty arguments. Every spread encountered along the way
/// is recorded so that [`QueryValidator`] can resolve it afterward.
#[derive(Debug, Default)]
pub(crate) struct SelectionValidator<'a> {
    errors: Vec<QueryBuildError>,
    spreads: Vec<(&'a str, NodePath)>,
}

impl<'a> SelectionValidator<'a> {
    pub(crate) fn check_fragment(&mut self, fragment: &'a Fragment) {
        let path = NodePath::fragment(fragment.alias());

        if !is_valid_fragment_name(fragment.alias()) {
            self.errors.push(QueryBuildError::InvalidIdentifier {
                identifier: fragment.alias().to_string(),
                kind: IdentifierKind::FragmentAlias,
                path: path.to_owned(),
            });
        }
        self.check_identifier(
            fragment.type_condition(),
            IdentifierKind::TypeCondition,
            &path,
        );

        if fragment.fields().is_empty() {
            self.errors.push(QueryBuildError::MalformedSelection {
                path: path.to_owned(),
            });
        }
        self.check_fields(fragment.fields(), &path);
    }

    pub(crate) fn check_request(&mut self, request: &'a Request, parent_path: &NodePath) {
        let path = parent_path.child(request.selected_name());

        if let Some(alias) = request.alias() {
            self.check_identifier(alias, IdentifierKind::RequestAlias, &path);
        }
        self.check_identifier(request.name(), IdentifierKind::FieldName, &path);

        // GraphQL forbids empty selection sets, so a request must carry
        // arguments or fields to be anything more than a bare leaf.
        if request.arguments().is_empty() && request.fields().is_empty() {
            self.errors.push(QueryBuildError::MalformedSelection {
                path: path.to_owned(),
            });
        }

        for argument in request.arguments() {
            self.check_argument(argument, &path);
        }
        self.check_fields(request.fields(), &path);
    }

    pub(crate) fn into_result(self) -> Result<()> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        Ok(())
    }

    fn check_argument(&mut self, argument: &Argument, path: &NodePath) {
        self.check_identifier(argument.key(), IdentifierKind::ArgumentKey, path);
        if argument.values().is_empty() {
            self.errors.push(QueryBuildError::ArgumentWithoutValues {
                key: argument.key().to_string(),
                path: path.to_owned(),
            });
        }
    }

    fn check_fields(&mut self, fields: &'a [FieldReference], path: &NodePath) {
        for field in fields {
            match field {
                FieldReference::Leaf(name) => self.check_identifier(
                    name,
                    IdentifierKind::FieldName,
                    &path.child(name.as_str()),
                ),

                FieldReference::Nested(request) =>
                    self.check_request(request, path),

                FieldReference::Spread(spread) =>
                    self.spreads.push((spread.alias(), path.to_owned())),
            }
        }
    }

    fn check_identifier(&mut self, identifier: &str, kind: IdentifierKind, path: &NodePath) {
        if !is_valid_name(identifier) {
            self.errors.push(QueryBuildError::InvalidIdentifier {
                identifier: identifier.to_string(),
                kind,
                path: path.to_owned(),
            });
        }
    }
}

/// Validates a whole [`Query`] before it is serialized.
///
/// In addition to the per-node checks of [`SelectionValidator`], this
/// performs the following validations across the query's fragment set:
/// - Every fragment alias is declared at most once
/// - Every spread (from the root request or from any declared fragment)
///   targets a declared fragment
/// - Fragment spreads do not form cycles
///
/// All errors are returned at once rather than failing on the first one.
pub(crate) struct QueryValidator<'a> {
    fragments: IndexMap<&'a str, &'a Fragment>,
    query: &'a Query,
}

impl<'a> QueryValidator<'a> {
    pub(crate) fn new(query: &'a Query) -> Self {
        Self {
            fragments: IndexMap::new(),
            query,
        }
    }

    pub(crate) fn validate(mut self) -> Result<()> {
        let mut errors = vec![];

        errors.extend(self.index_fragments());

        let mut selection_validator = SelectionValidator::default();
        selection_validator.check_request(self.query.root(), &NodePath::query());
        for fragment in self.query.fragments() {
            selection_validator.check_fragment(fragment);
        }

        let mut used_aliases = HashSet::new();
        for (alias, path) in &selection_validator.spreads {
            used_aliases.insert(*alias);
            if !self.fragments.contains_key(alias) {
                errors.push(QueryBuildError::UnresolvedFragmentReference {
                    alias: alias.to_string(),
                    path: path.to_owned(),
                });
            }
        }

        for alias in self.fragments.keys() {
            if !used_aliases.contains(alias) {
                log::warn!(
                    "Fragment `{alias}` is declared on the query but never \
                    spread. It will still be emitted.",
                );
            }
        }

        errors.extend(self.validate_no_cycles());
        errors.extend(selection_validator.errors);

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(())
    }

    /// Index declared fragments by alias, keeping the first declaration of
    /// any alias that is declared more than once.
    fn index_fragments(&mut self) -> Vec<QueryBuildError> {
        let mut errors = vec![];
        let mut first_indices: IndexMap<&'a str, usize> = IndexMap::new();

        for (index, fragment) in self.query.fragments().iter().enumerate() {
            let alias = fragment.alias();
            if let Some(first_index) = first_indices.get(alias) {
                errors.push(QueryBuildError::DuplicateFragmentAlias {
                    alias: alias.to_string(),
                    first_index: *first_index,
                    second_index: index,
                });
                continue;
            }
            first_indices.insert(alias, index);
            self.fragments.insert(alias, fragment);
        }

        errors
    }

    /// Uses DFS traversal with cycle normalization to detect and deduplicate
    /// cycles. Phase-shifted cycles (rotations of the same cycle) are
    /// reported once.
    ///
    /// A fragment is expanded at most once across all start points. Once its
    /// spreads have been fully explored it is marked done and skipped.
    fn validate_no_cycles(&self) -> Vec<QueryBuildError> {
        let mut all_cycles = vec![];
        let mut seen_normalized_cycles = HashSet::new();
        let mut done = HashSet::new();

        for alias in self.fragments.keys() {
            let mut path = vec![];
            let mut visiting = HashSet::new();

            self.check_fragment_cycles(
                *alias,
                &mut path,
                &mut visiting,
                &mut done,
                &mut all_cycles,
                &mut seen_normalized_cycles,
            );
        }

        all_cycles
    }

    fn check_fragment_cycles(
        &self,
        alias: &'a str,
        path: &mut Vec<&'a str>,
        visiting: &mut HashSet<&'a str>,
        done: &mut HashSet<&'a str>,
        errors: &mut Vec<QueryBuildError>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        if visiting.contains(alias) {
            // Drop the part of the DFS path that leads into the cycle.
            let cycle_start = path.iter()
                .position(|visited| *visited == alias)
                .unwrap_or(0);
            let mut cycle_path = path[cycle_start..].iter()
                .map(|visited| visited.to_string())
                .collect::<Vec<_>>();
            cycle_path.push(alias.to_string());

            if seen_normalized.insert(normalize_cycle(&cycle_path)) {
                errors.push(QueryBuildError::FragmentCycleDetected { cycle_path });
            }
            return;
        }

        if done.contains(alias) {
            return;
        }

        // Undeclared fragments are reported as unresolved references.
        let Some(&fragment) = self.fragments.get(alias) else {
            return;
        };

        path.push(alias);
        visiting.insert(alias);

        self.check_fields_cycles(
            fragment.fields(),
            path,
            visiting,
            done,
            errors,
            seen_normalized,
        );

        path.pop();
        visiting.remove(alias);
        done.insert(alias);
    }

    fn check_fields_cycles(
        &self,
        fields: &'a [FieldReference],
        path: &mut Vec<&'a str>,
        visiting: &mut HashSet<&'a str>,
        done: &mut HashSet<&'a str>,
        errors: &mut Vec<QueryBuildError>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        for field in fields {
            match field {
                FieldReference::Leaf(_) => (),

                FieldReference::Nested(request) => self.check_fields_cycles(
                    request.fields(),
                    path,
                    visiting,
                    done,
                    errors,
                    seen_normalized,
                ),

                FieldReference::Spread(spread) => self.check_fragment_cycles(
                    spread.alias(),
                    path,
                    visiting,
                    done,
                    errors,
                    seen_normalized,
                ),
            }
        }
    }
}

/// Normalize a cycle to canonical form for deduplication.
///
/// `[A, B, C, A]`, `[B, C, A, B]`, and `[C, A, B, C]` all normalize to
/// `[A, B, C, A]`: the cycle is rotated to start with the lexicographically
/// smallest alias.
pub(crate) fn normalize_cycle(cycle: &[String]) -> Vec<String> {
    if cycle.is_empty() {
        return vec![];
    }

    // [A, B, C, A] → [A, B, C]
    let cycle_without_repeat = &cycle[..cycle.len() - 1];
    let min_idx = cycle_without_repeat
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    let mut normalized = vec![];
    normalized.extend_from_slice(&cycle_without_repeat[min_idx..]);
    normalized.extend_from_slice(&cycle_without_repeat[..min_idx]);
    if let Some(first) = normalized.first().cloned() {
        normalized.push(first);
    }

    normalized
}
