//! Reusable attribute groups.

use crate::attribute::Attribute;
use crate::layout::{Layout, Segment};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named fragment, rendered after the query body and referenced from
/// blocks with a `...Name` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Fragment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
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

    /// The `...Name` attribute that spreads this fragment
    pub fn spread(&self) -> Attribute {
        Attribute::new(format!("{}{}", crate::attribute::SPREAD_PREFIX, self.name))
    }
}

impl Layout for Fragment {
    fn layout(&self, out: &mut Vec<Segment>) {
        out.push(Segment::word("fragment"));
        out.push(Segment::word(self.name.as_str()));
        out.push(Segment::block(&self.attributes));
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compact())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fragment_keeps_braces() {
        assert_eq!(
            Fragment::new("userFragment").to_string(),
            "fragment userFragment { }"
        );
    }

    #[test]
    fn test_fragment_with_attributes() {
        let fragment = Fragment::new("userFragment").with_attributes(["name", "age"]);
        assert_eq!(fragment.to_string(), "fragment userFragment { name age }");
    }

    #[test]
    fn test_spread() {
        let fragment = Fragment::new("TestFrag");
        let spread = fragment.spread();

        assert_eq!(spread.name, "...TestFrag");
        assert_eq!(spread.spread_target(), Some("TestFrag"));
    }

    #[test]
    fn test_pretty() {
        let fragment = Fragment::new("TestFragB").with_attribute("country");
        assert_eq!(fragment.pretty(), "fragment TestFragB {\n  country\n}");
    }
}
