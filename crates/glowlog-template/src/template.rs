//! The compiled [`Template`] type.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::parser::Tokenizer;
use crate::token::{Node, PropertyToken};

/// A template compiled into literal text and property nodes.
///
/// Compilation happens once; the result is immutable and can be shared
/// across threads and reused for any number of renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
    nodes: Vec<Node>,
}

impl Template {
    /// Compiles a template. Malformed tokens are kept as literal text.
    pub fn parse(text: &str) -> Self {
        let mut nodes: Vec<Node> = Vec::new();
        for node in Tokenizer::new(text) {
            match (nodes.last_mut(), node) {
                (Some(Node::Text(prev)), Node::Text(next)) => prev.push_str(&next),
                (_, node) => nodes.push(node),
            }
        }
        Self {
            text: text.to_string(),
            nodes,
        }
    }

    /// The source text the template was compiled from.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterates over the property tokens in template order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyToken> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Property(token) => Some(token),
            Node::Text(_) => None,
        })
    }

    /// Returns true if any token refers to `name`.
    pub fn references(&self, name: &str) -> bool {
        self.properties().any(|p| p.name() == name)
    }

    /// Returns true if the template contains no property tokens.
    pub fn is_literal(&self) -> bool {
        self.properties().next().is_none()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Template {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Template {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
