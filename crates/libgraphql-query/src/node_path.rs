/// Identifies a node within a [`Query`](crate::Query) tree, for use in
/// error reporting.
///
/// A path starts at either the query's root request or at one of its
/// declared fragment definitions, followed by the selected names (alias if
/// present, otherwise field name) of each nested request down to the node.
///
/// Displayed as e.g. `query.test.images` or `fragment contentFields.images`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct NodePath {
    root: NodePathRoot,
    segments: Vec<String>,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum NodePathRoot {
    Query,
    Fragment(String),
}

impl NodePath {
    pub fn query() -> Self {
        Self {
            root: NodePathRoot::Query,
            segments: vec![],
        }
    }

    pub fn fragment(alias: impl Into<String>) -> Self {
        Self {
            root: NodePathRoot::Fragment(alias.into()),
            segments: vec![],
        }
    }

    pub fn root(&self) -> &NodePathRoot {
        &self.root
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub(crate) fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self {
            root: self.root.clone(),
            segments,
        }
    }
}
impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.root {
            NodePathRoot::Query => write!(f, "query")?,
            NodePathRoot::Fragment(alias) => write!(f, "fragment {alias}")?,
        }
        for segment in &self.segments {
            write!(f, ".{segment}")?;
        }
        Ok(())
    }
}
