//! Variable blocks: `[name AS] var (func: ...)`.

use crate::attribute::Attribute;
use crate::layout::{Layout, Segment};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `var` block. Its results are not returned; it exists to bind
/// variables for the query blocks that follow it.
///
/// Unlike [`QueryBlock`](crate::QueryBlock) it takes exactly one criteria
/// string, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarBlock {
    /// Variable bound with `name AS var(...)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub criteria: String,
    #[serde(default)]
    pub directives: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl VarBlock {
    pub fn new(criteria: impl Into<String>) -> Self {
        Self {
            name: None,
            criteria: criteria.into(),
            directives: Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directives.push(directive.into());
        self
    }

    pub fn with_directives<I, S>(mut self, directives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.directives.extend(directives.into_iter().map(Into::into));
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<Attribute>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    pub fn with_attributes<I, A>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Attribute>,
    {
        self.attributes.extend(attributes.into_iter().map(Into::into));
        self
    }
}

impl Layout for VarBlock {
    fn layout(&self, out: &mut Vec<Segment>) {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            out.push(Segment::word(name));
            out.push(Segment::word("AS"));
        }
        out.push(Segment::word("var"));
        out.push(Segment::Word(format!("(func: {})", self.criteria)));
        out.extend(self.directives.iter().map(|d| Segment::word(d.as_str())));
        out.push(Segment::block(&self.attributes));
    }
}

impl fmt::Display for VarBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compact())
    }
}
