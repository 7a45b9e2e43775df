//! HTML emission for custom containers.

use super::{ContainerKind, CustomContainer, ImageParams};
use crate::{ChildRenderer, HtmlWriter};

/// Write a custom container and its children.
///
/// Output always starts on a fresh line. Wrapper markup is only written when
/// [`HtmlWriter::enable_html_for_block`] is set; children are handed to
/// `children` in every mode, including image containers.
///
/// - Image: `<p><img alt=.. src=.. border=../></p>`, with the `alt=` segment
///   left out when no alt text was given. Values are written as scanned,
///   quotes included, without escaping.
/// - Generic: `<div{attributes}>`, children, then `</div>` and a newline.
///   Children are not escaped.
pub fn write_custom_container<R>(
    writer: &mut HtmlWriter,
    container: &CustomContainer,
    children: &R,
) where
    R: ChildRenderer + ?Sized,
{
    let kind = container.kind();
    tracing::trace!(classifier = %container.classifier, ?kind, "rendering custom container");

    writer.ensure_line();

    match kind {
        ContainerKind::Image => {
            if writer.enable_html_for_block() {
                write_image(writer, &ImageParams::extract(&container.arguments));
            }
            children.write_children(writer, &container.children);
        }
        ContainerKind::Generic => {
            if writer.enable_html_for_block() {
                writer
                    .write("<div")
                    .write_attributes(&container.attributes)
                    .write(">");
            }
            children.write_children(writer, &container.children);
            if writer.enable_html_for_block() {
                writer.write_line("</div>");
            }
        }
    }
}

fn write_image(writer: &mut HtmlWriter, params: &ImageParams) {
    writer.write("<p><img ");
    if !params.alt.is_empty() {
        writer.write("alt=").write(&params.alt).write(" ");
    }
    writer
        .write("src=")
        .write(&params.src)
        .write(" border=")
        .write(&params.border)
        .write("/></p>");
}
