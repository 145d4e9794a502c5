//! Renderer configuration
//!
//! Settings for the indented renderer. The compact renderer has no knobs.

use serde::{Deserialize, Serialize};

/// Widest indent unit the renderer will emit; larger values are clamped
pub const MAX_INDENT_WIDTH: usize = 16;

/// Configuration for [`PrettyRenderer`](crate::render::PrettyRenderer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Spaces per nesting level, clamped to [`MAX_INDENT_WIDTH`]
    pub indent_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of spaces per nesting level
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Indent width actually used when rendering
    pub fn effective_indent_width(&self) -> usize {
        self.indent_width.min(MAX_INDENT_WIDTH)
    }

    /// One indentation unit
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.effective_indent_width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_indent_is_two_spaces() {
        let config = RenderConfig::default();
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.indent_unit(), "  ");
    }

    #[test]
    fn test_with_indent_width() {
        let config = RenderConfig::new().with_indent_width(4);
        assert_eq!(config.indent_unit(), "    ");
    }

    #[test]
    fn test_oversized_indent_is_clamped() {
        let config: RenderConfig =
            serde_json::from_str(r#"{"indent_width": 1000000000}"#).unwrap();

        assert_eq!(config.effective_indent_width(), MAX_INDENT_WIDTH);
        assert_eq!(config.indent_unit().len(), MAX_INDENT_WIDTH);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: RenderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RenderConfig::default());

        let config: RenderConfig = serde_json::from_str(r#"{"indent_width": 3}"#).unwrap();
        assert_eq!(config.indent_width, 3);
    }
}
