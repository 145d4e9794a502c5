//! Attributes: the predicates selected inside a block.

use crate::layout::{Layout, Segment};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix that marks an attribute as a fragment spread (`...Name`)
pub const SPREAD_PREFIX: &str = "...";

/// A selected predicate, optionally aliased, with directives and nested
/// attributes.
///
/// Fragment spreads are plain attributes whose name starts with `...`:
///
/// ```rust
/// use crucible_dql::Attribute;
///
/// let attr = Attribute::new("director.film")
///     .with_directive("(first: 2)")
///     .with_attributes(["name@en", "...FilmFields"]);
///
/// assert_eq!(
///     attr.to_string(),
///     "director.film (first: 2) { name@en ...FilmFields }"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Alias emitted as `alias : name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub name: String,
    #[serde(default)]
    pub directives: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            name: name.into(),
            directives: Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directives.push(directive.into());
        self
    }

    /// Append directives in order, e.g. `@filter(...)` or `(first: 3)`
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

    /// Append nested attributes in order
    pub fn with_attributes<I, A>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Attribute>,
    {
        self.attributes.extend(attributes.into_iter().map(Into::into));
        self
    }

    /// Fragment name if this attribute is a `...Name` spread
    pub fn spread_target(&self) -> Option<&str> {
        self.name.strip_prefix(SPREAD_PREFIX)
    }

    /// Names of all fragments spread anywhere in this subtree, in order
    pub fn fragment_spreads(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_spreads(&mut names);
        names
    }

    pub(crate) fn collect_spreads<'a>(&'a self, names: &mut Vec<&'a str>) {
        if let Some(target) = self.spread_target() {
            names.push(target);
        }
        for child in &self.attributes {
            child.collect_spreads(names);
        }
    }
}

impl From<&str> for Attribute {
    fn from(name: &str) -> Self {
        Attribute::new(name)
    }
}

impl From<String> for Attribute {
    fn from(name: String) -> Self {
        Attribute::new(name)
    }
}

impl Layout for Attribute {
    fn layout(&self, out: &mut Vec<Segment>) {
        if let Some(alias) = self.alias.as_deref().filter(|a| !a.is_empty()) {
            out.push(Segment::word(alias));
            out.push(Segment::word(":"));
        }
        out.push(Segment::word(self.name.as_str()));
        out.extend(self.directives.iter().map(|d| Segment::word(d.as_str())));
        if !self.attributes.is_empty() {
            out.push(Segment::block(&self.attributes));
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compact())
    }
}
