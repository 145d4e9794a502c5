//! The query document root.

use crate::config::RenderConfig;
use crate::error::ValidationResult;
use crate::fragment::Fragment;
use crate::layout::{Layout, Segment};
use crate::param::Param;
use crate::query_block::QueryBlock;
use crate::render::{PrettyRenderer, QueryRenderer};
use crate::validate::QueryValidator;
use crate::var_block::VarBlock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete DQL query document.
///
/// Layout of the rendered text:
///
/// ```text
/// query <name> ( <param>, ... ) { <var block>* <query block>* } <fragment>*
/// ```
///
/// Variable blocks always come before query blocks inside the body, and
/// fragments follow the closing brace. Each group keeps append order.
///
/// ```rust
/// use crucible_dql::{Query, QueryBlock};
///
/// let query = Query::named(
///     "GetUserQuery",
///     QueryBlock::new("getUser", "has(user)").with_attributes(["name", "age"]),
/// );
///
/// assert_eq!(
///     query.to_string(),
///     "query GetUserQuery { getUser (func: has(user)) { name age } }"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub params: Vec<Param>,
    /// Never empty when built through the constructors
    pub query_blocks: Vec<QueryBlock>,
    #[serde(default)]
    pub var_blocks: Vec<VarBlock>,
    #[serde(default)]
    pub fragments: Vec<Fragment>,
}

impl Query {
    /// Anonymous query: the body is rendered without a `query` header
    pub fn new(query_block: QueryBlock) -> Self {
        Self {
            name: None,
            params: Vec::new(),
            query_blocks: vec![query_block],
            var_blocks: Vec::new(),
            fragments: Vec::new(),
        }
    }

    pub fn named(name: impl Into<String>, query_block: QueryBlock) -> Self {
        Self::new(query_block).with_name(name)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn with_var_block(mut self, var_block: VarBlock) -> Self {
        self.var_blocks.push(var_block);
        self
    }

    pub fn with_var_blocks(mut self, var_blocks: impl IntoIterator<Item = VarBlock>) -> Self {
        self.var_blocks.extend(var_blocks);
        self
    }

    pub fn with_query_block(mut self, query_block: QueryBlock) -> Self {
        self.query_blocks.push(query_block);
        self
    }

    pub fn with_query_blocks(mut self, query_blocks: impl IntoIterator<Item = QueryBlock>) -> Self {
        self.query_blocks.extend(query_blocks);
        self
    }

    pub fn with_fragment(mut self, fragment: Fragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    pub fn with_fragments(mut self, fragments: impl IntoIterator<Item = Fragment>) -> Self {
        self.fragments.extend(fragments);
        self
    }

    /// Indented rendering, two spaces per level
    pub fn pretty_print(&self) -> String {
        self.render_with(&PrettyRenderer::default())
    }

    pub fn pretty_print_with(&self, config: &RenderConfig) -> String {
        self.render_with(&PrettyRenderer::new(config))
    }

    /// Check fragment spreads and name uniqueness.
    ///
    /// Rendering never calls this; an invalid query still renders.
    pub fn validate(&self) -> ValidationResult<()> {
        QueryValidator::new(self).validate()
    }
}

impl Layout for Query {
    fn layout(&self, out: &mut Vec<Segment>) {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            out.push(Segment::word("query"));
            out.push(Segment::word(name));
        }
        if !self.params.is_empty() {
            let params: Vec<String> = self.params.iter().map(Param::to_string).collect();
            out.push(Segment::word("("));
            out.push(Segment::Word(params.join(", ")));
            out.push(Segment::word(")"));
        }

        let mut body = Vec::new();
        for var_block in &self.var_blocks {
            var_block.layout(&mut body);
        }
        for query_block in &self.query_blocks {
            query_block.layout(&mut body);
        }
        out.push(Segment::Block(body));

        for fragment in &self.fragments {
            fragment.layout(out);
        }
    }

    fn render_with(&self, renderer: &dyn QueryRenderer) -> String {
        let segments = self.segments();
        tracing::debug!(
            renderer = renderer.name(),
            query_blocks = self.query_blocks.len(),
            var_blocks = self.var_blocks.len(),
            fragments = self.fragments.len(),
            "rendering query"
        );
        renderer.render(&segments)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compact())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Attribute;

    fn get_user_block() -> QueryBlock {
        QueryBlock::new("getUser", "has(user)")
    }

    #[test]
    fn test_named_query() {
        let query = Query::named("GetUserQuery", get_user_block());
        assert_eq!(
            query.to_string(),
            "query GetUserQuery { getUser (func: has(user)) { } }"
        );
    }

    #[test]
    fn test_anonymous_query() {
        let query = Query::new(get_user_block());
        assert_eq!(query.to_string(), "{ getUser (func: has(user)) { } }");
    }

    #[test]
    fn test_empty_name_is_anonymous() {
        let query = Query::named("", get_user_block());
        assert_eq!(query.to_string(), "{ getUser (func: has(user)) { } }");
    }

    #[test]
    fn test_params() {
        let query = Query::named("GetUserQuery", get_user_block())
            .with_param(Param::new("$id", "string").with_default("123"))
            .with_param(Param::new("$first", "int"));

        assert_eq!(
            query.to_string(),
            "query GetUserQuery ( $id: string = 123, $first: int ) { getUser (func: has(user)) { } }"
        );
    }

    #[test]
    fn test_var_blocks_before_query_blocks() {
        let query = Query::named("GetUserQuery", get_user_block())
            .with_var_block(VarBlock::new("has(user)").with_name("userVar"));

        assert_eq!(
            query.to_string(),
            "query GetUserQuery { userVar AS var (func: has(user)) { } getUser (func: has(user)) { } }"
        );
    }

    #[test]
    fn test_query_blocks_in_append_order() {
        let query = Query::named("GetUserQuery", get_user_block())
            .with_query_block(QueryBlock::new("getPosts", "has(post)"));

        assert_eq!(
            query.to_string(),
            "query GetUserQuery { getUser (func: has(user)) { } getPosts (func: has(post)) { } }"
        );
    }

    #[test]
    fn test_fragments_after_body() {
        let fragment = Fragment::new("userFragment").with_attributes(["name", "age"]);
        let query = Query::named(
            "GetUserQuery",
            get_user_block().with_attribute(fragment.spread()),
        )
        .with_fragment(fragment);

        assert_eq!(
            query.to_string(),
            "query GetUserQuery { getUser (func: has(user)) { ...userFragment } } fragment userFragment { name age }"
        );
    }

    #[test]
    fn test_pretty_print_single_empty_block() {
        let query = Query::new(QueryBlock::new("q", "true"));
        assert_eq!(query.pretty_print(), "{\n  q (func: true) {\n  }\n}");
    }

    #[test]
    fn test_pretty_print_with_config() {
        let query = Query::named("Q", QueryBlock::new("q", "true").with_attribute("name"));
        let config = RenderConfig::new().with_indent_width(4);

        assert_eq!(
            query.pretty_print_with(&config),
            "query Q {\n    q (func: true) {\n        name\n    }\n}"
        );
    }

    #[test]
    fn test_render_is_stable() {
        let query = Query::named(
            "Q",
            QueryBlock::new("q", "has(name)")
                .with_attribute(Attribute::new("friend").with_attribute("name")),
        )
        .with_fragment(Fragment::new("F").with_attribute("age"));

        assert_eq!(query.to_string(), query.to_string());
        assert_eq!(query.pretty_print(), query.pretty_print());
    }
}
