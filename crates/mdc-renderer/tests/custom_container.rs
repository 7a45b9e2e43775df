use mdc_renderer::{
    Block, ChildRenderer, CustomContainer, HtmlAttributes, HtmlRenderer, HtmlWriter,
    write_custom_container,
};
use pretty_assertions::assert_eq;

#[test]
fn test_image_with_source_only() {
    let container = CustomContainer::new("image").with_arguments(r#"source="cat.png""#);
    assert_eq!(
        HtmlRenderer::new().render_container(&container),
        r#"<p><img src="cat.png" border="true"/></p>"#
    );
}

#[test]
fn test_image_with_every_parameter() {
    let container = CustomContainer::new("image")
        .with_arguments(r#"alt-text="Cat" source="cat.png" border="false""#);
    assert_eq!(
        HtmlRenderer::new().render_container(&container),
        r#"<p><img alt="Cat" src="cat.png" border="false"/></p>"#
    );
}

#[test]
fn test_image_arguments_spanning_lines() {
    let container = CustomContainer::new("image")
        .with_arguments("alt-text=\"A very\nlong caption\"\nsource=\"cat.png\"");
    assert_eq!(
        HtmlRenderer::new().render_container(&container),
        r#"<p><img alt="A verylong caption" src="cat.png" border="true"/></p>"#
    );
}

#[test]
fn test_image_unterminated_source() {
    let container = CustomContainer::new("image").with_arguments(r#"source="cat.png"#);
    assert_eq!(
        HtmlRenderer::new().render_container(&container),
        r#"<p><img src="cat.png border="true"/></p>"#
    );
}

#[test]
fn test_generic_content_is_not_escaped() {
    let container = CustomContainer::new("note")
        .with_attributes(HtmlAttributes::new().with_class("note"))
        .with_child(Block::html("Hello<b>"));
    assert_eq!(
        HtmlRenderer::new().render_container(&container),
        "<div class=\"note\">Hello<b></div>\n"
    );
}

#[test]
fn test_generic_attributes_from_shorthand() {
    let container = CustomContainer::new("warning")
        .with_attributes(HtmlAttributes::parse(r#"#careful .alert .alert-warning role=alert"#))
        .with_child(Block::markdown("Mind the gap."));
    assert_eq!(
        HtmlRenderer::new().render_container(&container),
        "<div id=\"careful\" class=\"alert alert-warning\" role=\"alert\"><p>Mind the gap.</p>\n</div>\n"
    );
}

#[test]
fn test_classifier_match_is_exact() {
    let container = CustomContainer::new("Image").with_arguments(r#"source="cat.png""#);
    assert_eq!(HtmlRenderer::new().render_container(&container), "<div></div>\n");
}

#[test]
fn test_rendering_twice_is_identical() {
    let renderer = HtmlRenderer::new();
    let containers = [
        CustomContainer::new("image").with_arguments(r#"alt-text="Cat" source="cat.png""#),
        CustomContainer::new("note")
            .with_attributes(HtmlAttributes::parse(".note"))
            .with_child(Block::markdown("Some **text**")),
    ];

    for container in &containers {
        let first = renderer.render_container(container);
        let second = renderer.render_container(container);
        assert_eq!(first, second);
    }
}

#[test]
fn test_html_for_block_disabled() {
    let renderer = HtmlRenderer::new().with_html_for_block(false);

    let image = CustomContainer::new("image")
        .with_arguments(r#"source="cat.png""#)
        .with_child(Block::html("caption"));
    assert_eq!(renderer.render_container(&image), "caption");

    let note = CustomContainer::new("note")
        .with_attributes(HtmlAttributes::parse(".note"))
        .with_child(Block::html("Hello<b>"));
    assert_eq!(renderer.render_container(&note), "Hello<b>");
}

#[test]
fn test_document_with_mixed_blocks() {
    let blocks = vec![
        Block::markdown("# Gallery"),
        CustomContainer::new("image")
            .with_arguments(r#"alt-text="One" source="1.png" border="0""#)
            .into(),
        CustomContainer::new("details")
            .with_attributes(HtmlAttributes::parse(".details"))
            .with_child(Block::markdown("More text."))
            .with_child(
                CustomContainer::new("image")
                    .with_arguments(r#"source="2.png""#)
                    .into(),
            )
            .into(),
    ];

    assert_eq!(
        HtmlRenderer::new().render(&blocks),
        "<h1>Gallery</h1>\n\
         <p><img alt=\"One\" src=\"1.png\" border=\"0\"/></p>\n\
         <div class=\"details\"><p>More text.</p>\n\
         <p><img src=\"2.png\" border=\"true\"/></p></div>\n"
    );
}

/// Child renderer that records every child it was asked to render.
#[derive(Default)]
struct Recorder {
    seen: std::sync::Mutex<Vec<Block>>,
}

impl ChildRenderer for Recorder {
    fn write_children(&self, _writer: &mut HtmlWriter, children: &[Block]) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.extend(children.iter().cloned());
        }
    }
}

#[test]
fn test_children_reach_custom_renderer() {
    let recorder = Recorder::default();
    let container = CustomContainer::new("image")
        .with_arguments(r#"source="cat.png""#)
        .with_child(Block::html("a"))
        .with_child(Block::markdown("b"));

    let mut writer = HtmlWriter::new().with_html_for_block(false);
    write_custom_container(&mut writer, &container, &recorder);

    assert!(writer.is_empty());
    let seen = recorder.seen.lock().unwrap();
    assert_eq!(*seen, container.children);
}
