use crate::parser::{error::Error, Parser};
use std::str::FromStr;
use super::node::Node;

/// An expression tree, owning exactly one root [`Node`].
///
/// A tree is never modified after it is built. Operations such as differentiation produce a new
/// tree, leaving this one usable.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionTree {
    root: Node,
}

impl ExpressionTree {
    /// Creates a tree with the given root.
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Parses a tree from the given source.
    pub fn parse(source: &str) -> Result<Self, Error> {
        Parser::new(source).try_parse_full()
    }

    /// Returns the root node of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Consumes the tree, returning its root node.
    pub fn into_root(self) -> Node {
        self.root
    }

    /// Returns an indented rendering of the tree. See [`Node::dump`].
    pub fn dump(&self) -> String {
        self.root.dump()
    }
}

impl FromStr for ExpressionTree {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::parse(source)
    }
}
