//! Block tree rendering.
//!
//! [`HtmlRenderer`] walks a block tree depth-first and dispatches custom
//! containers to [`write_custom_container`], which calls back into the
//! renderer (through [`ChildRenderer`]) for the container's children.

use pulldown_cmark::{Event, Options, Parser, TagEnd};

use crate::container::write_custom_container;
use crate::{CustomContainer, HtmlWriter, RenderOptions, escape_html};

/// A renderable child node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Block {
    /// Already rendered HTML (or plain text), written verbatim.
    Html(String),
    /// Markdown source, rendered with pulldown-cmark.
    Markdown(String),
    /// Nested custom container.
    Container(CustomContainer),
}

impl Block {
    /// Create a raw HTML block.
    #[must_use]
    pub fn html(html: impl Into<String>) -> Self {
        Self::Html(html.into())
    }

    /// Create a markdown block.
    #[must_use]
    pub fn markdown(source: impl Into<String>) -> Self {
        Self::Markdown(source.into())
    }
}

impl From<CustomContainer> for Block {
    fn from(container: CustomContainer) -> Self {
        Self::Container(container)
    }
}

/// Renders the children of a container into a writer.
///
/// [`write_custom_container`] only knows about this trait, so callers can
/// plug in their own dispatch for child nodes.
pub trait ChildRenderer {
    /// Render `children` in order.
    fn write_children(&self, writer: &mut HtmlWriter, children: &[Block]);
}

/// Default block renderer.
///
/// # Example
///
/// ```
/// use mdc_renderer::{Block, CustomContainer, HtmlAttributes, HtmlRenderer};
///
/// let blocks = vec![
///     Block::markdown("Intro"),
///     CustomContainer::new("tip")
///         .with_attributes(HtmlAttributes::new().with_class("tip"))
///         .with_child(Block::markdown("**Bold** advice"))
///         .into(),
///     CustomContainer::new("image")
///         .with_arguments(r#"alt-text="Logo" source="logo.png""#)
///         .into(),
/// ];
///
/// let html = HtmlRenderer::new().render(&blocks);
/// assert_eq!(
///     html,
///     "<p>Intro</p>\n\
///      <div class=\"tip\"><p><strong>Bold</strong> advice</p>\n</div>\n\
///      <p><img alt=\"Logo\" src=\"logo.png\" border=\"true\"/></p>"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a renderer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with the given options.
    #[must_use]
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Enable or disable block-level wrapper markup.
    #[must_use]
    pub fn with_html_for_block(mut self, enabled: bool) -> Self {
        self.options.enable_html_for_block = enabled;
        self
    }

    /// Enable or disable GitHub Flavored Markdown features.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.options.gfm = enabled;
        self
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.options.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Render a sequence of blocks into a fresh buffer.
    #[must_use]
    pub fn render(&self, blocks: &[Block]) -> String {
        let mut writer = HtmlWriter::with_options(&self.options);
        self.write_children(&mut writer, blocks);
        writer.into_string()
    }

    /// Render a single custom container into a fresh buffer.
    #[must_use]
    pub fn render_container(&self, container: &CustomContainer) -> String {
        let mut writer = HtmlWriter::with_options(&self.options);
        write_custom_container(&mut writer, container, self);
        writer.into_string()
    }

    /// Render one block.
    pub fn write_block(&self, writer: &mut HtmlWriter, block: &Block) {
        match block {
            Block::Html(html) => {
                writer.write(html);
            }
            Block::Markdown(source) => self.write_markdown(writer, source),
            Block::Container(container) => write_custom_container(writer, container, self),
        }
    }

    fn write_markdown(&self, writer: &mut HtmlWriter, source: &str) {
        let parser = Parser::new_ext(source, self.parser_options());

        if writer.enable_html_for_block() {
            let mut html = String::with_capacity(source.len() * 3 / 2);
            pulldown_cmark::html::push_html(&mut html, parser);
            writer.write(&html);
            return;
        }

        // Without block markup only the text content is kept.
        for event in parser {
            match event {
                Event::Text(text) | Event::Code(text) => {
                    writer.write(&escape_html(&text));
                }
                Event::SoftBreak | Event::HardBreak => {
                    writer.write("\n");
                }
                Event::End(
                    TagEnd::Paragraph
                    | TagEnd::Heading(_)
                    | TagEnd::CodeBlock
                    | TagEnd::Item
                    | TagEnd::TableHead
                    | TagEnd::TableRow,
                ) => {
                    writer.ensure_line();
                }
                _ => {}
            }
        }
    }
}

impl ChildRenderer for HtmlRenderer {
    fn write_children(&self, writer: &mut HtmlWriter, children: &[Block]) {
        for child in children {
            self.write_block(writer, child);
        }
    }
}
