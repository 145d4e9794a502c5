//! Single-line renderer.
//!
//! Every word and brace becomes one token; tokens are joined by a single
//! space. Empty blocks still render as `{ }`.

use crate::layout::Segment;
use crate::render::QueryRenderer;

/// Renders the whole document on one line
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactRenderer;

impl CompactRenderer {
    fn collect<'a>(&self, segments: &'a [Segment], tokens: &mut Vec<&'a str>) {
        for segment in segments {
            match segment {
                Segment::Word(word) => tokens.push(word),
                Segment::Block(inner) => {
                    tokens.push("{");
                    self.collect(inner, tokens);
                    tokens.push("}");
                }
            }
        }
    }
}

impl QueryRenderer for CompactRenderer {
    fn name(&self) -> &str {
        "compact"
    }

    fn render(&self, segments: &[Segment]) -> String {
        let mut tokens = Vec::new();
        self.collect(segments, &mut tokens);

        let text = tokens.join(" ");
        tracing::trace!(
            renderer = self.name(),
            tokens = tokens.len(),
            len = text.len(),
            "rendered segments"
        );
        text
    }
}
