//! End-to-end layouts checked against their exact wire form and the schema.

use serde_json::json;
use siloxane_core::{
    wire_schema, ActionRow, Button, ButtonStyle, Component, Container, File, LayoutMessage,
    MediaGallery, MediaGalleryItem, Node, Section, Separator, SeparatorSpacing, TextDisplay,
    Thumbnail, ValidationError,
};

fn section(content: &str) -> Section {
    Section::new(vec![TextDisplay::new(content)]).unwrap()
}

#[test]
fn container_with_section_matches_reference_payload() {
    let container = Container::new(vec![section("hi").into()])
        .unwrap()
        .with_accent_color(0x5865F2)
        .unwrap();

    assert_eq!(
        serde_json::to_string(&Component::from(container)).unwrap(),
        r#"{"type":17,"components":[{"type":9,"components":[{"type":10,"content":"hi"}]}],"accent_color":5793266}"#
    );
}

#[test]
fn container_preserves_child_order() {
    let container = Container::new(vec![
        section("A").into(),
        Separator::new().into(),
        section("B").into(),
    ])
    .unwrap();

    let json = container.to_json();
    let components = json["components"].as_array().unwrap();
    assert_eq!(components.len(), 3);
    assert_eq!(components[0]["components"][0]["content"], "A");
    assert_eq!(components[1], json!({"type": 14}));
    assert_eq!(components[2]["components"][0]["content"], "B");
}

#[test]
fn serializing_twice_is_identical() {
    let gallery = MediaGallery::new(vec![
        MediaGalleryItem::new("https://example.com/1.png"),
        MediaGalleryItem::new("https://example.com/2.png").with_description("two"),
    ])
    .unwrap()
    .with_id(5);
    let container = Container::new(vec![gallery.into(), File::new("doc.pdf").into()]).unwrap();

    let first = container.to_json();
    let second = container.to_json();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn basic_layout_sample() {
    let title = TextDisplay::new("# Welcome to Components V2!");
    let description =
        TextDisplay::new("This is a demonstration of Discord's new message layout system.");
    let thumbnail =
        Thumbnail::new("https://example.com/image.png").with_description("Example thumbnail");
    let button = Button::new(ButtonStyle::Primary, "demo_button")
        .unwrap()
        .with_label("Click me!");

    let container = Container::new(vec![
        Section::new(vec![title]).unwrap().into(),
        Section::new(vec![description])
            .unwrap()
            .with_accessory(thumbnail)
            .into(),
        Section::new(vec![TextDisplay::new("Try the button:")])
            .unwrap()
            .with_accessory(button)
            .into(),
    ])
    .unwrap()
    .with_accent_color(0x5865F2)
    .unwrap();

    let message = LayoutMessage::new(vec![container.into()]).unwrap();
    let body = message.to_json();

    assert_eq!(body["flags"], json!(1 << 15));
    let sections = body["components"][0]["components"].as_array().unwrap();
    assert_eq!(sections.len(), 3);
    assert_eq!(
        sections[1]["accessory"],
        json!({
            "type": 11,
            "media": {"url": "https://example.com/image.png"},
            "description": "Example thumbnail"
        })
    );
    assert_eq!(sections[2]["accessory"]["custom_id"], "demo_button");

    for component in body["components"].as_array().unwrap() {
        wire_schema().check(component).unwrap();
    }
}

#[test]
fn media_and_files_sample() {
    let gallery = MediaGallery::new(
        (1..=3)
            .map(|i| MediaGalleryItem::new(format!("https://example.com/image{i}.png")))
            .collect(),
    )
    .unwrap();

    let container = Container::new(vec![
        section("# Media Gallery Example").into(),
        section("Here's a gallery of images:").into(),
        gallery.into(),
        Separator::new().with_spacing(SeparatorSpacing::Large).into(),
        section("Here's an attached document:").into(),
        File::new("document.pdf").into(),
    ])
    .unwrap()
    .with_accent_color(0x5865F2)
    .unwrap();

    let message = LayoutMessage::new(vec![container.into()]).unwrap();
    assert_eq!(message.attachments(), vec!["document.pdf"]);

    let body = message.to_json();
    let children = body["components"][0]["components"].as_array().unwrap();
    assert_eq!(children[2]["items"].as_array().unwrap().len(), 3);
    assert_eq!(children[3], json!({"type": 14, "spacing": 2}));
    assert_eq!(
        children[5],
        json!({"type": 13, "file": {"url": "attachment://document.pdf"}})
    );
    wire_schema().check(&body["components"][0]).unwrap();
}

#[test]
fn action_rows_sit_inside_containers() {
    let row = ActionRow::new(vec![
        Button::new(ButtonStyle::Success, "accept").unwrap().with_label("Accept"),
        Button::new(ButtonStyle::Danger, "reject").unwrap().with_label("Reject"),
    ])
    .unwrap();
    let container = Container::new(vec![TextDisplay::new("Proceed?").into(), row.into()]).unwrap();

    let json = container.to_json();
    assert_eq!(json["components"][1]["type"], 1);
    assert_eq!(json["components"][1]["components"][1]["style"], 4);
    Container::shape().check(&json).unwrap();
}

#[test]
fn dynamic_construction_reports_each_error_kind() {
    let arity = Section::from_components(vec![], None).unwrap_err();
    assert!(matches!(arity, ValidationError::Arity { .. }));

    let texts: Vec<Component> = (0..4)
        .map(|i| Component::from(TextDisplay::new(format!("{i}"))))
        .collect();
    assert!(Section::from_components(texts, None).unwrap_err().is_arity());

    let mismatch = Section::from_components(
        vec![TextDisplay::new("ok").into(), Thumbnail::new("https://x/y.png").into()],
        None,
    )
    .unwrap_err();
    assert!(mismatch.is_type_mismatch());

    let accessory = Section::from_components(
        vec![TextDisplay::new("ok").into()],
        Some(TextDisplay::new("not an accessory").into()),
    )
    .unwrap_err();
    assert!(accessory.is_type_mismatch());

    let nested_button = Container::from_components(vec![
        Button::new(ButtonStyle::Primary, "loose").unwrap().into(),
    ])
    .unwrap_err();
    assert!(nested_button.is_type_mismatch());

    let range = Container::new(vec![TextDisplay::new("x").into()])
        .unwrap()
        .with_accent_color(0x1000000)
        .unwrap_err();
    assert!(range.is_range());
}

#[test]
fn schema_rejects_tampered_payloads() {
    let container = Container::new(vec![section("x").into()]).unwrap();
    let mut json = container.to_json();

    json["accent_color"] = json!(0x1000000);
    let err = Container::shape().check(&json).unwrap_err();
    assert_eq!(err.path, "$.accent_color");

    let mut json = container.to_json();
    json["components"][0]["components"] = json!([]);
    let err = Container::shape().check(&json).unwrap_err();
    assert_eq!(err.path, "$.components[0].components");

    let mut json = container.to_json();
    json["colour"] = json!(1);
    assert!(Container::shape().check(&json).is_err());
}

#[test]
fn nodes_are_shareable_across_threads() {
    fn assert_shareable<T: Send + Sync + Clone>() {}
    assert_shareable::<Component>();
    assert_shareable::<Container>();
    assert_shareable::<LayoutMessage>();
}
