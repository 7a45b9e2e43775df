//! HTML output sink.
//!
//! [`HtmlWriter`] is the buffer every renderer in this crate writes into. It
//! tracks nothing beyond the output itself and whether block-level wrapper
//! markup should be emitted.

use std::borrow::Cow;

use crate::{HtmlAttributes, RenderOptions};

/// Escape HTML special characters in text content and attribute values.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
///
/// # Example
///
/// ```
/// use mdc_renderer::escape_html;
///
/// assert_eq!(escape_html("a < b"), "a &lt; b");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Buffered HTML output with line tracking.
///
/// Write methods return `&mut Self` so calls can be chained:
///
/// ```
/// use mdc_renderer::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.write("<p>").write("text").write_line("</p>");
/// writer.ensure_line();
/// assert_eq!(writer.as_str(), "<p>text</p>\n");
/// ```
#[derive(Clone, Debug)]
pub struct HtmlWriter {
    output: String,
    enable_html_for_block: bool,
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlWriter {
    /// Create an empty writer with block-level HTML enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(1024),
            enable_html_for_block: true,
        }
    }

    /// Create an empty writer configured from render options.
    #[must_use]
    pub fn with_options(options: &RenderOptions) -> Self {
        Self::new().with_html_for_block(options.enable_html_for_block)
    }

    /// Enable or disable block-level wrapper markup (`<div>`, `<img>`, `<p>`).
    ///
    /// Content is still written when disabled; only the wrapping tags are
    /// suppressed by renderers that honor the flag.
    #[must_use]
    pub fn with_html_for_block(mut self, enabled: bool) -> Self {
        self.enable_html_for_block = enabled;
        self
    }

    /// Whether block-level wrapper markup should be emitted.
    pub fn enable_html_for_block(&self) -> bool {
        self.enable_html_for_block
    }

    /// Append text verbatim.
    pub fn write(&mut self, text: &str) -> &mut Self {
        self.output.push_str(text);
        self
    }

    /// Append text followed by a newline.
    pub fn write_line(&mut self, text: &str) -> &mut Self {
        self.output.push_str(text);
        self.output.push('\n');
        self
    }

    /// Make sure the next write starts at column 0.
    ///
    /// Appends a newline only when the buffer is non-empty and does not
    /// already end with one.
    pub fn ensure_line(&mut self) -> &mut Self {
        if !self.output.is_empty() && !self.output.ends_with('\n') {
            self.output.push('\n');
        }
        self
    }

    /// Serialize generic HTML attributes, each prefixed with a space.
    ///
    /// Order: `id`, then `class` (space-joined), then properties in declared
    /// order. Values are escaped; an empty set writes nothing.
    pub fn write_attributes(&mut self, attributes: &HtmlAttributes) -> &mut Self {
        if let Some(id) = &attributes.id {
            self.write_attribute("id", id);
        }

        if !attributes.classes.is_empty() {
            let classes = attributes.classes.join(" ");
            self.write_attribute("class", &classes);
        }

        for (name, value) in &attributes.properties {
            self.write_attribute(name, value);
        }

        self
    }

    fn write_attribute(&mut self, name: &str, value: &str) {
        self.output.push(' ');
        self.output.push_str(name);
        self.output.push_str("=\"");
        self.output.push_str(&escape_html(value));
        self.output.push('"');
    }

    /// Rendered output so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Consume the writer and return the rendered output.
    #[must_use]
    pub fn into_string(self) -> String {
        self.output
    }
}
