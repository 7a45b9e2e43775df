//! HTML rendering for markdown custom containers.
//!
//! A custom container is a fenced block (`:::classifier arguments`) that has
//! already been split out of the document by an upstream parser. This crate
//! turns it into HTML:
//!
//! - `:::image` containers become `<p><img .../></p>`, with `alt-text=`,
//!   `source=` and `border=` values scanned out of the free-form arguments.
//! - Every other classifier wraps its rendered children in a `<div>` carrying
//!   the container's generic attributes.
//!
//! # Architecture
//!
//! - [`extract_value`]: bound-delimited value scanner, returns `None` instead
//!   of failing.
//! - [`ImageParams`]: applies the image defaults on top of the scanner.
//! - [`write_custom_container`]: picks a [`ContainerKind`] and writes the
//!   markup into an [`HtmlWriter`], delegating children to a
//!   [`ChildRenderer`].
//! - [`HtmlRenderer`]: default [`ChildRenderer`] for [`Block`] trees, using
//!   pulldown-cmark for markdown children.
//!
//! # Example
//!
//! ```
//! use mdc_renderer::{Block, CustomContainer, HtmlAttributes, HtmlRenderer};
//!
//! let renderer = HtmlRenderer::new();
//!
//! let image = CustomContainer::new("image").with_arguments(r#"source="cat.png""#);
//! assert_eq!(
//!     renderer.render_container(&image),
//!     r#"<p><img src="cat.png" border="true"/></p>"#
//! );
//!
//! let note = CustomContainer::new("note")
//!     .with_attributes(HtmlAttributes::parse(".note"))
//!     .with_child(Block::html("Hello<b>"));
//! assert_eq!(renderer.render_container(&note), "<div class=\"note\">Hello<b></div>\n");
//! ```

mod attributes;
mod container;
mod options;
mod renderer;
mod writer;

pub use attributes::HtmlAttributes;
pub use container::{
    ALT_TEXT_KEY, BORDER_KEY, ContainerKind, CustomContainer, DEFAULT_BORDER, IMAGE_CLASSIFIER,
    ImageParams, SOURCE_KEY, extract_value, write_custom_container,
};
pub use options::RenderOptions;
pub use renderer::{Block, ChildRenderer, HtmlRenderer};
pub use writer::{HtmlWriter, escape_html};
