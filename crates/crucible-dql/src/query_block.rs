//! Query blocks: the named root selections of a query.

use crate::attribute::Attribute;
use crate::layout::{Layout, Segment};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named query block: `name (func: criteria, ...) [directives] { ... }`.
///
/// The first criterion is the root function; later ones (ordering,
/// pagination) are appended to the same `func:` clause.
///
/// ```rust
/// use crucible_dql::QueryBlock;
///
/// let block = QueryBlock::new("me", "allofterms(name@en, \"Steven\")")
///     .with_criterion("first: 10")
///     .with_attributes(["name@en"]);
///
/// assert_eq!(
///     block.to_string(),
///     "me (func: allofterms(name@en, \"Steven\"), first: 10) { name@en }"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryBlock {
    pub name: String,
    /// Never empty when built through [`QueryBlock::new`]
    pub criteria: Vec<String>,
    #[serde(default)]
    pub directives: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl QueryBlock {
    pub fn new(name: impl Into<String>, criteria: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            criteria: vec![criteria.into()],
            directives: Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub fn with_criterion(mut self, criterion: impl Into<String>) -> Self {
        self.criteria.push(criterion.into());
        self
    }

    /// Append criteria to the `func:` clause, in order
    pub fn with_criteria<I, S>(mut self, criteria: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.criteria.extend(criteria.into_iter().map(Into::into));
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

impl Layout for QueryBlock {
    fn layout(&self, out: &mut Vec<Segment>) {
        out.push(Segment::word(self.name.as_str()));
        out.push(Segment::Word(format!("(func: {})", self.criteria.join(", "))));
        out.extend(self.directives.iter().map(|d| Segment::word(d.as_str())));
        out.push(Segment::block(&self.attributes));
    }
}

impl fmt::Display for QueryBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compact())
    }
}
