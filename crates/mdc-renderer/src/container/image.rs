//! Parameters of the `:::image` shorthand.

use super::scanner::extract_value;

/// Key for the image alt text.
pub const ALT_TEXT_KEY: &str = "alt-text=";
/// Key for the image source URL.
pub const SOURCE_KEY: &str = "source=";
/// Key for the image border flag.
pub const BORDER_KEY: &str = "border=";
/// Border value used when the arguments do not set one.
pub const DEFAULT_BORDER: &str = "\"true\"";

/// Image parameters extracted from a container's argument string.
///
/// Every value keeps its surrounding quotes exactly as scanned, so it can be
/// placed directly after `name=` in the output.
///
/// # Example
///
/// ```
/// use mdc_renderer::ImageParams;
///
/// let params = ImageParams::extract(r#"source="cat.png""#);
/// assert_eq!(params.alt, "");
/// assert_eq!(params.src, r#""cat.png""#);
/// assert_eq!(params.border, r#""true""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageParams {
    /// Quoted alt text, or empty when not given.
    pub alt: String,
    /// Quoted source, or empty when not given.
    pub src: String,
    /// Quoted border flag; never empty.
    pub border: String,
}

impl ImageParams {
    /// Extract `alt-text=`, `source=` and `border=` from free-form arguments.
    ///
    /// Missing or unreadable values fall back to `""` for alt and source and
    /// to `"true"` (with quotes) for the border.
    #[must_use]
    pub fn extract(arguments: &str) -> Self {
        let alt = quoted_value(arguments, ALT_TEXT_KEY);
        let src = quoted_value(arguments, SOURCE_KEY);
        let border = quoted_value(arguments, BORDER_KEY);

        if border.is_none() {
            tracing::debug!(arguments, "image container without border, using default");
        }

        Self {
            alt: alt.unwrap_or_default(),
            src: src.unwrap_or_default(),
            border: border.unwrap_or_else(|| DEFAULT_BORDER.to_owned()),
        }
    }
}

fn quoted_value(arguments: &str, key: &str) -> Option<String> {
    if !arguments.contains(key) {
        return None;
    }
    extract_value(arguments, key, "\"", "\"", true)
}
