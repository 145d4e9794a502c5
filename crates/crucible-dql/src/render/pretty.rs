//! Indented renderer.
//!
//! Walks the segment tree and breaks lines at block boundaries:
//!
//! ```text
//! me (func: uid(0x1)) {
//!   name friends @filter(has(age)) {
//!     name
//!   }
//!   age
//! }
//! ```
//!
//! Words stay on the current line until a block opens or closes. A `{`
//! ends its line, the block's contents start one level deeper, and the
//! closing `}` gets a line of its own at the block's level. Lines never
//! carry trailing whitespace and whitespace-only lines are dropped, so an
//! empty block renders as `{` directly followed by `}`.

use crate::config::RenderConfig;
use crate::layout::Segment;
use crate::render::QueryRenderer;

/// Renders one block boundary per line
#[derive(Debug, Clone)]
pub struct PrettyRenderer {
    indent: String,
}

impl Default for PrettyRenderer {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

/// Line accumulator for the tree walk
struct Lines<'r> {
    indent: &'r str,
    done: Vec<String>,
}

impl Lines<'_> {
    /// Finish the pending words as one line at `depth`
    fn flush(&mut self, depth: usize, pending: &mut Vec<&str>) {
        if pending.is_empty() {
            return;
        }
        let text = pending.join(" ");
        pending.clear();

        let text = text.trim_end();
        if text.is_empty() {
            return;
        }
        self.done.push(format!("{}{}", self.indent.repeat(depth), text));
    }

    fn push_close(&mut self, depth: usize) {
        self.done.push(format!("{}}}", self.indent.repeat(depth)));
    }
}

impl PrettyRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            indent: config.indent_unit(),
        }
    }

    fn walk<'a>(
        &self,
        segments: &'a [Segment],
        depth: usize,
        pending: &mut Vec<&'a str>,
        lines: &mut Lines<'_>,
    ) {
        for segment in segments {
            match segment {
                Segment::Word(word) => pending.push(word),
                Segment::Block(inner) => {
                    pending.push("{");
                    lines.flush(depth, pending);
                    self.walk(inner, depth + 1, pending, lines);
                    lines.flush(depth + 1, pending);
                    lines.push_close(depth);
                }
            }
        }
    }
}

impl QueryRenderer for PrettyRenderer {
    fn name(&self) -> &str {
        "pretty"
    }

    fn render(&self, segments: &[Segment]) -> String {
        let mut lines = Lines {
            indent: &self.indent,
            done: Vec::new(),
        };
        let mut pending = Vec::new();

        self.walk(segments, 0, &mut pending, &mut lines);
        lines.flush(0, &mut pending);

        tracing::trace!(
            renderer = self.name(),
            lines = lines.done.len(),
            "rendered segments"
        );
        lines.done.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Segment {
        Segment::word(text)
    }

    #[test]
    fn test_empty_block_has_no_blank_line() {
        let segments = vec![word("q"), word("(func: true)"), Segment::Block(vec![])];

        assert_eq!(
            PrettyRenderer::default().render(&segments),
            "q (func: true) {\n}"
        );
    }

    #[test]
    fn test_siblings_share_a_line_until_a_block() {
        let segments = vec![
            word("me"),
            Segment::Block(vec![
                word("name"),
                word("friends"),
                Segment::Block(vec![word("name")]),
                word("age"),
            ]),
        ];

        let expected = "me {\n  name friends {\n    name\n  }\n  age\n}";
        assert_eq!(PrettyRenderer::default().render(&segments), expected);
    }

    #[test]
    fn test_consecutive_closing_braces() {
        let segments = vec![Segment::Block(vec![
            word("a"),
            Segment::Block(vec![word("b"), Segment::Block(vec![word("c")])]),
        ])];

        let expected = "{\n  a {\n    b {\n      c\n    }\n  }\n}";
        assert_eq!(PrettyRenderer::default().render(&segments), expected);
    }

    #[test]
    fn test_words_after_top_level_block() {
        let segments = vec![
            Segment::Block(vec![word("a")]),
            word("fragment"),
            word("F"),
            Segment::Block(vec![word("b")]),
        ];

        let expected = "{\n  a\n}\nfragment F {\n  b\n}";
        assert_eq!(PrettyRenderer::default().render(&segments), expected);
    }

    #[test]
    fn test_custom_indent_width() {
        let renderer = PrettyRenderer::new(&RenderConfig::new().with_indent_width(4));
        let segments = vec![word("me"), Segment::Block(vec![word("name")])];

        assert_eq!(renderer.render(&segments), "me {\n    name\n}");
    }

    #[test]
    fn test_huge_indent_width_is_clamped() {
        let config = RenderConfig::new().with_indent_width(usize::MAX);
        let renderer = PrettyRenderer::new(&config);
        let segments = vec![word("me"), Segment::Block(vec![word("name")])];

        let rendered = renderer.render(&segments);
        let indent = " ".repeat(crate::config::MAX_INDENT_WIDTH);
        let expected = format!("me {{\n{}name\n}}", indent);
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_braces_inside_words_do_not_indent() {
        let segments = vec![word("me"), Segment::Block(vec![word("val(x{1})")])];

        assert_eq!(
            PrettyRenderer::default().render(&segments),
            "me {\n  val(x{1})\n}"
        );
    }

    #[test]
    fn test_blank_words_do_not_produce_blank_lines() {
        let segments = vec![word("me"), Segment::Block(vec![word("")])];

        assert_eq!(PrettyRenderer::default().render(&segments), "me {\n}");
    }

    #[test]
    fn test_no_segments() {
        assert_eq!(PrettyRenderer::default().render(&[]), "");
    }
}
