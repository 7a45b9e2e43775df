//! Render configuration.

/// Options shared by [`HtmlRenderer`](crate::HtmlRenderer) and
/// [`HtmlWriter`](crate::HtmlWriter).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RenderOptions {
    /// Emit block-level wrapper markup (`<div>`, `<img>`, `<p>`).
    ///
    /// When disabled, only content is written.
    pub enable_html_for_block: bool,
    /// Enable GitHub Flavored Markdown in markdown child blocks
    /// (tables, strikethrough, task lists).
    pub gfm: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            enable_html_for_block: true,
            gfm: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(options.enable_html_for_block);
        assert!(options.gfm);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"enableHtmlForBlock": false}"#).unwrap();
        assert!(!options.enable_html_for_block);
        assert!(options.gfm);
    }
}
