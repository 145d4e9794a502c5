//! Consistency checks for a finished query.
//!
//! Criteria and directive strings stay opaque; only the structure the
//! builder itself knows about is checked: fragment spreads must resolve,
//! and fragment and parameter names must be unique.

use crate::error::{ValidationError, ValidationResult};
use crate::query::Query;
use std::collections::HashSet;

/// Collects every problem in a [`Query`] instead of stopping at the first.
pub struct QueryValidator<'q> {
    query: &'q Query,
}

impl<'q> QueryValidator<'q> {
    pub fn new(query: &'q Query) -> Self {
        Self { query }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        let mut problems = Vec::new();
        self.check_params(&mut problems);
        let defined = self.check_fragment_definitions(&mut problems);
        self.check_spreads(&defined, &mut problems);

        tracing::debug!(
            params = self.query.params.len(),
            fragments = defined.len(),
            problems = problems.len(),
            "validated query"
        );

        match ValidationError::from_problems(problems) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Every fragment name spread anywhere in the query, in document order
    pub fn fragment_spreads(&self) -> Vec<&'q str> {
        let query = self.query;
        let attributes = query
            .var_blocks
            .iter()
            .flat_map(|block| &block.attributes)
            .chain(query.query_blocks.iter().flat_map(|block| &block.attributes))
            .chain(query.fragments.iter().flat_map(|fragment| &fragment.attributes));

        let mut names = Vec::new();
        for attr in attributes {
            attr.collect_spreads(&mut names);
        }
        names
    }

    fn check_params(&self, problems: &mut Vec<ValidationError>) {
        let mut seen = HashSet::new();
        for param in &self.query.params {
            if !seen.insert(param.name.as_str()) {
                problems.push(ValidationError::DuplicateParam {
                    name: param.name.clone(),
                });
            }
        }
    }

    fn check_fragment_definitions(
        &self,
        problems: &mut Vec<ValidationError>,
    ) -> HashSet<&'q str> {
        let query = self.query;
        let mut defined = HashSet::new();
        for fragment in &query.fragments {
            if !defined.insert(fragment.name.as_str()) {
                problems.push(ValidationError::DuplicateFragment {
                    name: fragment.name.clone(),
                });
            }
        }
        defined
    }

    fn check_spreads(&self, defined: &HashSet<&str>, problems: &mut Vec<ValidationError>) {
        let mut reported = HashSet::new();
        for name in self.fragment_spreads() {
            if !defined.contains(name) && reported.insert(name) {
                problems.push(ValidationError::UnknownFragment {
                    name: name.to_string(),
                });
            }
        }
    }
}
