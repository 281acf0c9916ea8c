//! Property tests over generated layout trees.

use proptest::prelude::*;
use serde_json::Value;
use siloxane_core::{
    wire_schema, ActionRow, Button, ButtonStyle, Component, Container, ContainerChild, File,
    MediaGallery, MediaGalleryItem, Node, Section, SectionAccessory, Separator, SeparatorSpacing,
    TextDisplay, Thumbnail, MAX_ACCENT_COLOR,
};

fn id() -> impl Strategy<Value = Option<u32>> {
    proptest::option::of(any::<u32>())
}

fn url() -> impl Strategy<Value = String> {
    "[a-z]{1,8}".prop_map(|s| format!("https://example.com/{s}.png"))
}

fn with_id<T>(node: T, id: Option<u32>, set: fn(T, u32) -> T) -> T {
    match id {
        Some(id) => set(node, id),
        None => node,
    }
}

fn text_display() -> impl Strategy<Value = TextDisplay> {
    (".{0,40}", id())
        .prop_map(|(content, id)| with_id(TextDisplay::new(content), id, TextDisplay::with_id))
}

fn thumbnail() -> impl Strategy<Value = Thumbnail> {
    (url(), proptest::option::of("[ -~]{0,20}"), any::<bool>(), id()).prop_map(
        |(url, description, spoiler, id)| {
            let mut thumb = Thumbnail::new(url).with_spoiler(spoiler);
            if let Some(description) = description {
                thumb = thumb.with_description(description);
            }
            with_id(thumb, id, Thumbnail::with_id)
        },
    )
}

fn button() -> impl Strategy<Value = Button> {
    prop_oneof![
        (1i64..=4, "[a-z_]{1,12}").prop_map(|(style, custom_id)| {
            let style = ButtonStyle::try_from(style).unwrap();
            Button::new(style, custom_id).unwrap()
        }),
        url().prop_map(Button::link),
    ]
}

fn gallery() -> impl Strategy<Value = MediaGallery> {
    prop::collection::vec((url(), any::<bool>()), 1..=10).prop_map(|items| {
        let items = items
            .into_iter()
            .map(|(url, spoiler)| MediaGalleryItem::new(url).with_spoiler(spoiler))
            .collect();
        MediaGallery::new(items).unwrap()
    })
}

fn separator() -> impl Strategy<Value = Separator> {
    (any::<bool>(), 1i64..=2, id()).prop_map(|(divider, spacing, id)| {
        with_id(Separator::try_new(divider, spacing).unwrap(), id, Separator::with_id)
    })
}

fn file() -> impl Strategy<Value = File> {
    ("[a-z]{1,8}\\.(pdf|txt|png)", any::<bool>())
        .prop_map(|(name, spoiler)| File::new(name).with_spoiler(spoiler))
}

fn accessory() -> impl Strategy<Value = SectionAccessory> {
    prop_oneof![
        button().prop_map(SectionAccessory::from),
        thumbnail().prop_map(SectionAccessory::from),
    ]
}

fn section() -> impl Strategy<Value = Section> {
    (
        prop::collection::vec(text_display(), 1..=3),
        proptest::option::of(accessory()),
        id(),
    )
        .prop_map(|(texts, accessory, id)| {
            let mut section = Section::new(texts).unwrap();
            if let Some(accessory) = accessory {
                section = section.with_accessory(accessory);
            }
            with_id(section, id, Section::with_id)
        })
}

fn container_child() -> impl Strategy<Value = ContainerChild> {
    prop_oneof![
        prop::collection::vec(button(), 1..=5)
            .prop_map(|buttons| ContainerChild::from(ActionRow::new(buttons).unwrap())),
        text_display().prop_map(ContainerChild::from),
        section().prop_map(ContainerChild::from),
        gallery().prop_map(ContainerChild::from),
        separator().prop_map(ContainerChild::from),
        file().prop_map(ContainerChild::from),
    ]
}

fn container() -> impl Strategy<Value = Container> {
    (
        prop::collection::vec(container_child(), 1..8),
        proptest::option::of(0i64..=i64::from(MAX_ACCENT_COLOR)),
        any::<bool>(),
    )
        .prop_map(|(children, accent, spoiler)| {
            let mut container = Container::new(children).unwrap().with_spoiler(spoiler);
            container.set_accent_color(accent).unwrap();
            container
        })
}

fn component() -> impl Strategy<Value = Component> {
    prop_oneof![
        text_display().prop_map(Component::from),
        thumbnail().prop_map(Component::from),
        gallery().prop_map(Component::from),
        separator().prop_map(Component::from),
        file().prop_map(Component::from),
        section().prop_map(Component::from),
        container().prop_map(Component::from),
    ]
}

fn has_key(value: &Value, key: &str) -> bool {
    value.as_object().is_some_and(|o| o.contains_key(key))
}

proptest! {
    #[test]
    fn every_component_matches_the_wire_schema(component in component()) {
        let json = component.to_json();
        prop_assert!(wire_schema().check(&json).is_ok(), "{:?}", wire_schema().check(&json));
    }

    #[test]
    fn type_is_always_the_first_key(component in component()) {
        let json = component.to_json();
        let first = json.as_object().and_then(|o| o.keys().next().cloned());
        prop_assert_eq!(first.as_deref(), Some("type"));
        prop_assert_eq!(json["type"].as_u64(), Some(u64::from(component.kind().tag())));
    }

    #[test]
    fn serialization_is_idempotent(component in component()) {
        prop_assert_eq!(component.to_json(), component.to_json());
    }

    #[test]
    fn id_present_exactly_when_set(component in component()) {
        let json = component.to_json();
        prop_assert_eq!(has_key(&json, "id"), component.id().is_some());
        if let Some(id) = component.id() {
            prop_assert_eq!(json["id"].as_u64(), Some(u64::from(id)));
        }
    }

    #[test]
    fn separator_defaults_are_omitted(separator in separator()) {
        let json = separator.to_json();
        prop_assert_eq!(has_key(&json, "divider"), !separator.has_divider());
        prop_assert_eq!(
            has_key(&json, "spacing"),
            separator.spacing() != SeparatorSpacing::Small
        );
        if !separator.has_divider() {
            prop_assert_eq!(&json["divider"], &Value::Bool(false));
        }
    }

    #[test]
    fn thumbnail_defaults_are_omitted(thumbnail in thumbnail()) {
        let json = thumbnail.to_json();
        prop_assert_eq!(has_key(&json, "spoiler"), thumbnail.is_spoiler());
        prop_assert_eq!(has_key(&json, "description"), thumbnail.description().is_some());
    }

    #[test]
    fn container_defaults_are_omitted(container in container()) {
        let json = container.to_json();
        prop_assert_eq!(has_key(&json, "spoiler"), container.is_spoiler());
        prop_assert_eq!(has_key(&json, "accent_color"), container.accent_color().is_some());
    }

    #[test]
    fn container_keeps_child_order(container in container()) {
        let json = container.to_json();
        let tags: Vec<u64> = json["components"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["type"].as_u64().unwrap())
            .collect();
        let expected: Vec<u64> = container
            .components()
            .iter()
            .map(|c| u64::from(c.kind().tag()))
            .collect();
        prop_assert_eq!(tags, expected);
    }

    #[test]
    fn accent_color_outside_range_is_rejected(
        color in prop_oneof![i64::MIN..0i64, (i64::from(MAX_ACCENT_COLOR) + 1)..i64::MAX]
    ) {
        let container = Container::new(vec![TextDisplay::new("x").into()]).unwrap();
        prop_assert!(container.with_accent_color(color).unwrap_err().is_range());
    }

    #[test]
    fn spacing_outside_set_is_rejected(
        spacing in any::<i64>().prop_filter("valid spacing", |s| *s != 1 && *s != 2)
    ) {
        prop_assert!(Separator::try_new(true, spacing).unwrap_err().is_range());
    }

    #[test]
    fn oversized_sections_are_rejected(count in 4usize..12) {
        let texts = (0..count).map(|i| TextDisplay::new(i.to_string())).collect();
        prop_assert!(Section::new(texts).unwrap_err().is_arity());
    }
}
