//! TOML layout documents.
//!
//! A document is an authoring format, not the wire format: nodes are named by
//! kind, and every node goes through the validating constructors, so a bad
//! document fails with the same errors a program building the tree would get.

use std::path::Path;

use serde::Deserialize;
use siloxane_core::{
    ActionRow, Button, ButtonStyle, Component, Container, File, LayoutMessage, MediaGallery,
    MediaGalleryItem, Section, Separator, TextDisplay, Thumbnail,
};
use tracing::debug;

use crate::error::SxlError;

#[derive(Debug, Deserialize)]
pub struct LayoutDocument {
    #[serde(default)]
    pub components: Vec<NodeDef>,
}

#[derive(Debug, Deserialize)]
pub struct ItemDef {
    pub media_url: String,
    pub description: Option<String>,
    #[serde(default)]
    pub spoiler: bool,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeDef {
    TextDisplay {
        content: String,
        id: Option<u32>,
    },
    Thumbnail {
        media_url: String,
        description: Option<String>,
        #[serde(default)]
        spoiler: bool,
        id: Option<u32>,
    },
    MediaGallery {
        #[serde(default)]
        items: Vec<ItemDef>,
        id: Option<u32>,
    },
    File {
        filename: String,
        #[serde(default)]
        spoiler: bool,
        id: Option<u32>,
    },
    Separator {
        #[serde(default = "default_divider")]
        divider: bool,
        #[serde(default = "default_spacing")]
        spacing: i64,
        id: Option<u32>,
    },
    Section {
        #[serde(default)]
        components: Vec<NodeDef>,
        accessory: Option<Box<NodeDef>>,
        id: Option<u32>,
    },
    Container {
        #[serde(default)]
        components: Vec<NodeDef>,
        accent_color: Option<i64>,
        #[serde(default)]
        spoiler: bool,
        id: Option<u32>,
    },
    Button {
        style: String,
        label: Option<String>,
        custom_id: Option<String>,
        url: Option<String>,
        #[serde(default)]
        disabled: bool,
        id: Option<u32>,
    },
    ActionRow {
        #[serde(default)]
        components: Vec<NodeDef>,
        id: Option<u32>,
    },
}

fn default_divider() -> bool {
    true
}

fn default_spacing() -> i64 {
    1
}

fn apply_id<T>(node: T, id: Option<u32>, set: fn(T, u32) -> T) -> T {
    match id {
        Some(id) => set(node, id),
        None => node,
    }
}

fn parse_style(name: &str) -> Result<ButtonStyle, SxlError> {
    match name.to_ascii_lowercase().as_str() {
        "primary" => Ok(ButtonStyle::Primary),
        "secondary" => Ok(ButtonStyle::Secondary),
        "success" => Ok(ButtonStyle::Success),
        "danger" => Ok(ButtonStyle::Danger),
        "link" => Ok(ButtonStyle::Link),
        _ => Err(SxlError::UnknownButtonStyle(name.to_string())),
    }
}

fn build_button(
    style: &str,
    label: Option<String>,
    custom_id: Option<String>,
    url: Option<String>,
) -> Result<Button, SxlError> {
    let button = match (parse_style(style)?, custom_id, url) {
        (ButtonStyle::Link, Some(_), _) => {
            return Err(SxlError::ConflictingField {
                kind: "link button",
                field: "custom_id",
            });
        }
        (ButtonStyle::Link, None, url) => Button::link(url.ok_or(SxlError::MissingField {
            kind: "button",
            field: "url",
        })?),
        (_, _, Some(_)) => {
            return Err(SxlError::ConflictingField {
                kind: "interactive button",
                field: "url",
            });
        }
        (style, custom_id, None) => Button::new(
            style,
            custom_id.ok_or(SxlError::MissingField {
                kind: "button",
                field: "custom_id",
            })?,
        )?,
    };
    Ok(match label {
        Some(label) => button.with_label(label),
        None => button,
    })
}

fn build_all(defs: Vec<NodeDef>, accent: Option<i64>) -> Result<Vec<Component>, SxlError> {
    defs.into_iter().map(|def| build(def, accent)).collect()
}

/// Builds one node and its children.
///
/// `accent` is applied to containers that do not set their own color.
pub fn build(def: NodeDef, accent: Option<i64>) -> Result<Component, SxlError> {
    let component: Component = match def {
        NodeDef::TextDisplay { content, id } => {
            apply_id(TextDisplay::new(content), id, TextDisplay::with_id).into()
        }
        NodeDef::Thumbnail {
            media_url,
            description,
            spoiler,
            id,
        } => {
            let mut thumbnail = Thumbnail::new(media_url).with_spoiler(spoiler);
            if let Some(description) = description {
                thumbnail = thumbnail.with_description(description);
            }
            apply_id(thumbnail, id, Thumbnail::with_id).into()
        }
        NodeDef::MediaGallery { items, id } => {
            let items = items
                .into_iter()
                .map(|item| {
                    let mut built =
                        MediaGalleryItem::new(item.media_url).with_spoiler(item.spoiler);
                    if let Some(description) = item.description {
                        built = built.with_description(description);
                    }
                    built
                })
                .collect();
            apply_id(MediaGallery::new(items)?, id, MediaGallery::with_id).into()
        }
        NodeDef::File {
            filename,
            spoiler,
            id,
        } => apply_id(File::new(filename).with_spoiler(spoiler), id, File::with_id).into(),
        NodeDef::Separator {
            divider,
            spacing,
            id,
        } => apply_id(Separator::try_new(divider, spacing)?, id, Separator::with_id).into(),
        NodeDef::Section {
            components,
            accessory,
            id,
        } => {
            let components = build_all(components, accent)?;
            let accessory = accessory.map(|def| build(*def, accent)).transpose()?;
            apply_id(
                Section::from_components(components, accessory)?,
                id,
                Section::with_id,
            )
            .into()
        }
        NodeDef::Container {
            components,
            accent_color,
            spoiler,
            id,
        } => {
            let components = build_all(components, accent)?;
            let mut container = Container::from_components(components)?.with_spoiler(spoiler);
            container.set_accent_color(accent_color.or(accent))?;
            apply_id(container, id, Container::with_id).into()
        }
        NodeDef::Button {
            style,
            label,
            custom_id,
            url,
            disabled,
            id,
        } => {
            let button = build_button(&style, label, custom_id, url)?.with_disabled(disabled);
            apply_id(button, id, Button::with_id).into()
        }
        NodeDef::ActionRow { components, id } => {
            let components = build_all(components, accent)?;
            apply_id(ActionRow::from_components(components)?, id, ActionRow::with_id).into()
        }
    };
    Ok(component)
}

impl LayoutDocument {
    pub fn parse(content: &str, path: &Path) -> Result<Self, SxlError> {
        toml::from_str(content).map_err(|source| SxlError::Document {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, SxlError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Validates every node and wraps the result in a message body.
    pub fn into_message(self, accent: Option<i64>) -> Result<LayoutMessage, SxlError> {
        debug!(components = self.components.len(), "building layout document");
        let components = build_all(self.components, accent)?;
        Ok(LayoutMessage::new(components)?)
    }
}
