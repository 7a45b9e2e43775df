//! Custom container blocks: `:::classifier arguments` ... `:::`
//!
//! A custom container carries a classifier tag, the raw argument text that
//! follows it, generic HTML attributes and child blocks. The classifier picks
//! a [`ContainerKind`]:
//!
//! - `image` renders an `<img>` built from `alt-text=`, `source=` and
//!   `border=` values found in the arguments ([`ImageParams`]).
//! - anything else wraps the rendered children in a `<div>` carrying the
//!   container's attributes.

mod image;
mod render;
mod scanner;

pub use image::{ALT_TEXT_KEY, BORDER_KEY, DEFAULT_BORDER, ImageParams, SOURCE_KEY};
pub use render::write_custom_container;
pub use scanner::extract_value;

use crate::{Block, HtmlAttributes};

/// Classifier that selects image rendering.
pub const IMAGE_CLASSIFIER: &str = "image";

/// Rendering mode of a custom container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    /// `<p><img .../></p>` built from the argument string.
    Image,
    /// `<div {attributes}>children</div>`.
    Generic,
}

impl ContainerKind {
    /// Select the mode for a classifier tag.
    ///
    /// Matching is exact: no trimming and no case folding.
    #[must_use]
    pub fn from_classifier(classifier: &str) -> Self {
        if classifier == IMAGE_CLASSIFIER {
            Self::Image
        } else {
            Self::Generic
        }
    }
}

/// A parsed custom container block.
///
/// # Example
///
/// ```
/// use mdc_renderer::{Block, ContainerKind, CustomContainer, HtmlAttributes};
///
/// let note = CustomContainer::new("note")
///     .with_attributes(HtmlAttributes::new().with_class("note"))
///     .with_child(Block::html("Hello"));
/// assert_eq!(note.kind(), ContainerKind::Generic);
///
/// let image = CustomContainer::new("image").with_arguments(r#"source="cat.png""#);
/// assert_eq!(image.kind(), ContainerKind::Image);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CustomContainer {
    /// Tag following the opening fence (may be empty).
    pub classifier: String,
    /// Raw text following the classifier (empty when there is none).
    #[cfg_attr(feature = "serde", serde(default))]
    pub arguments: String,
    /// Generic attributes, only rendered in [`ContainerKind::Generic`] mode.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: HtmlAttributes,
    /// Child blocks in document order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Block>,
}

impl CustomContainer {
    /// Create an empty container with the given classifier.
    #[must_use]
    pub fn new(classifier: impl Into<String>) -> Self {
        Self {
            classifier: classifier.into(),
            ..Self::default()
        }
    }

    /// Set the raw argument text.
    #[must_use]
    pub fn with_arguments(mut self, arguments: impl Into<String>) -> Self {
        self.arguments = arguments.into();
        self
    }

    /// Set the generic attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: HtmlAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Append a child block.
    #[must_use]
    pub fn with_child(mut self, child: Block) -> Self {
        self.children.push(child);
        self
    }

    /// Rendering mode derived from the classifier.
    #[must_use]
    pub fn kind(&self) -> ContainerKind {
        ContainerKind::from_classifier(&self.classifier)
    }
}

#[cfg(test)]
mod tests {
    static_assertions::assert_impl_all!(super::CustomContainer: Send, Sync);
    static_assertions::assert_impl_all!(super::ImageParams: Send, Sync);

    use super::*;

    #[test]
    fn test_image_classifier() {
        assert_eq!(ContainerKind::from_classifier("image"), ContainerKind::Image);
    }

    #[test]
    fn test_classifier_is_case_sensitive() {
        assert_eq!(ContainerKind::from_classifier("Image"), ContainerKind::Generic);
        assert_eq!(ContainerKind::from_classifier("IMAGE"), ContainerKind::Generic);
    }

    #[test]
    fn test_classifier_is_not_trimmed() {
        assert_eq!(ContainerKind::from_classifier(" image"), ContainerKind::Generic);
        assert_eq!(ContainerKind::from_classifier("image "), ContainerKind::Generic);
    }

    #[test]
    fn test_other_classifiers_are_generic() {
        for classifier in ["", "note", "images", "warning"] {
            assert_eq!(
                ContainerKind::from_classifier(classifier),
                ContainerKind::Generic
            );
        }
    }

    #[test]
    fn test_builders() {
        let container = CustomContainer::new("note")
            .with_arguments("anything")
            .with_attributes(HtmlAttributes::new().with_id("n"))
            .with_child(Block::html("a"))
            .with_child(Block::markdown("b"));

        assert_eq!(container.classifier, "note");
        assert_eq!(container.arguments, "anything");
        assert_eq!(container.attributes.id.as_deref(), Some("n"));
        assert_eq!(container.children.len(), 2);
    }
}
