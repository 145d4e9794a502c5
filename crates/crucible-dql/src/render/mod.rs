//! Text renderers for laid-out queries.
//!
//! Renderers turn the [`Segment`] tree produced by [`Layout`](crate::Layout)
//! into DQL text. Two are provided: a single-line one and an indented one.

mod compact;
mod pretty;

pub use compact::CompactRenderer;
pub use pretty::PrettyRenderer;

use crate::layout::Segment;

/// Trait for rendering segments to query text.
pub trait QueryRenderer {
    /// Unique name for this renderer
    fn name(&self) -> &str;

    /// Render segments to text. Never fails.
    fn render(&self, segments: &[Segment]) -> String;
}
