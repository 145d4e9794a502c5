//! Validation error types

use thiserror::Error;

/// Problems found when checking a finished [`Query`](crate::Query).
///
/// Building and rendering never fail; these only come out of
/// [`Query::validate`](crate::Query::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A `...Name` spread refers to a fragment that is not attached
    #[error("Unknown fragment referenced: {name}")]
    UnknownFragment {
        /// Fragment name without the leading `...`
        name: String,
    },

    /// Two attached fragments share a name
    #[error("Duplicate fragment definition: {name}")]
    DuplicateFragment {
        /// Repeated fragment name
        name: String,
    },

    /// Two query parameters share a name
    #[error("Duplicate query parameter: {name}")]
    DuplicateParam {
        /// Repeated parameter name
        name: String,
    },

    /// More than one problem was found
    #[error("{} validation errors: {}", .0.len(), join_messages(.0))]
    Multiple(Vec<ValidationError>),
}

/// Specialized Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

impl ValidationError {
    /// Collapse a list of problems into a single error.
    ///
    /// Returns `None` for an empty list.
    pub fn from_problems(mut problems: Vec<ValidationError>) -> Option<Self> {
        match problems.len() {
            0 => None,
            1 => problems.pop(),
            _ => Some(Self::Multiple(problems)),
        }
    }

    /// Flattened view of every individual problem
    pub fn problems(&self) -> Vec<&ValidationError> {
        match self {
            Self::Multiple(errors) => errors.iter().flat_map(|e| e.problems()).collect(),
            other => vec![other],
        }
    }

    /// Check if this error involves fragment definitions or references
    pub fn is_fragment_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownFragment { .. } | Self::DuplicateFragment { .. }
        )
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
