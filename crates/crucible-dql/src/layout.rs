//! Renderer-neutral layout of query entities.
//!
//! Every entity lowers itself into a flat run of [`Segment`]s: plain words
//! and brace-delimited blocks. Renderers only ever see segments, so the
//! compact and indented output are two folds over the same tree.

use crate::render::{CompactRenderer, PrettyRenderer, QueryRenderer};

/// A single layout unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Opaque text, emitted verbatim
    Word(String),
    /// `{ ... }` group around nested segments
    Block(Vec<Segment>),
}

impl Segment {
    pub fn word(text: impl Into<String>) -> Self {
        Segment::Word(text.into())
    }

    /// Block from anything that lays itself out
    pub fn block<'a, L>(items: impl IntoIterator<Item = &'a L>) -> Self
    where
        L: Layout + 'a,
    {
        let mut inner = Vec::new();
        for item in items {
            item.layout(&mut inner);
        }
        Segment::Block(inner)
    }
}

/// Lowering of an entity into segments.
pub trait Layout {
    /// Append this entity's segments to `out`
    fn layout(&self, out: &mut Vec<Segment>);

    fn segments(&self) -> Vec<Segment> {
        let mut out = Vec::new();
        self.layout(&mut out);
        out
    }

    /// Render with an arbitrary renderer
    fn render_with(&self, renderer: &dyn QueryRenderer) -> String {
        renderer.render(&self.segments())
    }

    /// Single-line rendering
    fn compact(&self) -> String {
        self.render_with(&CompactRenderer)
    }

    /// Indented rendering with the default configuration
    fn pretty(&self) -> String {
        self.render_with(&PrettyRenderer::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf(&'static str);

    impl Layout for Leaf {
        fn layout(&self, out: &mut Vec<Segment>) {
            out.push(Segment::word(self.0));
        }
    }

    #[test]
    fn test_block_collects_item_segments() {
        let leaves = [Leaf("a"), Leaf("b")];
        let block = Segment::block(&leaves);

        assert_eq!(
            block,
            Segment::Block(vec![Segment::word("a"), Segment::word("b")])
        );
    }

    #[test]
    fn test_default_methods() {
        let leaf = Leaf("name");
        assert_eq!(leaf.segments(), vec![Segment::word("name")]);
        assert_eq!(leaf.compact(), "name");
        assert_eq!(leaf.pretty(), "name");
    }
}
