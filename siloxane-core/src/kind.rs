use std::fmt;

use serde::{Serialize, Serializer};

/// Wire discriminant of a component kind.
///
/// Tags 1-8 belong to the legacy single-row format; only the two legacy kinds
/// that may appear inside a layout tree (action rows and buttons) are modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    ActionRow,
    Button,
    Section,
    TextDisplay,
    Thumbnail,
    MediaGallery,
    File,
    Separator,
    Container,
}

impl ComponentType {
    /// Returns all kinds in tag order.
    pub fn all() -> &'static [ComponentType] {
        &[
            ComponentType::ActionRow,
            ComponentType::Button,
            ComponentType::Section,
            ComponentType::TextDisplay,
            ComponentType::Thumbnail,
            ComponentType::MediaGallery,
            ComponentType::File,
            ComponentType::Separator,
            ComponentType::Container,
        ]
    }

    /// The integer tag written as `type` on the wire.
    pub fn tag(self) -> u8 {
        match self {
            ComponentType::ActionRow => 1,
            ComponentType::Button => 2,
            ComponentType::Section => 9,
            ComponentType::TextDisplay => 10,
            ComponentType::Thumbnail => 11,
            ComponentType::MediaGallery => 12,
            ComponentType::File => 13,
            ComponentType::Separator => 14,
            ComponentType::Container => 17,
        }
    }

    /// Looks up a kind by its wire tag.
    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.tag() == tag)
    }

    pub fn name(self) -> &'static str {
        match self {
            ComponentType::ActionRow => "ActionRow",
            ComponentType::Button => "Button",
            ComponentType::Section => "Section",
            ComponentType::TextDisplay => "TextDisplay",
            ComponentType::Thumbnail => "Thumbnail",
            ComponentType::MediaGallery => "MediaGallery",
            ComponentType::File => "File",
            ComponentType::Separator => "Separator",
            ComponentType::Container => "Container",
        }
    }

    /// Whether the kind belongs to the layout (v2) format.
    pub fn is_layout(self) -> bool {
        !matches!(self, ComponentType::ActionRow | ComponentType::Button)
    }

    /// Whether the kind may sit directly in a message body. Thumbnails only
    /// appear as section accessories and buttons only inside a row or section.
    pub fn is_top_level(self) -> bool {
        !matches!(self, ComponentType::Thumbnail | ComponentType::Button)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ComponentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.tag())
    }
}
