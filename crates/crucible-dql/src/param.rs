//! Query parameters: `$name: type = default`.

use crate::layout::{Layout, Segment};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A query parameter declaration.
///
/// The name is emitted verbatim, so DQL variables keep their `$` prefix:
/// `Param::new("$id", "string")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default: None,
        }
    }

    /// Set the default value. Last call wins; an empty value counts as unset.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Default value, if one is set and non-empty
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref().filter(|d| !d.is_empty())
    }
}

impl Layout for Param {
    fn layout(&self, out: &mut Vec<Segment>) {
        out.push(Segment::Word(self.to_string()));
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)?;
        if let Some(default) = self.default_value() {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}
