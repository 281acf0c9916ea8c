//! Layout (v2) node kinds.
//!
//! Each kind validates in its constructor and keeps its fields private, so a
//! value of any of these types always satisfies its kind's constraints.
//! Setters that could break a constraint re-run the same check and leave the
//! node untouched when it fails.

use serde_json::Value;

use crate::component::Component;
use crate::error::ValidationError;
use crate::interactive::{ActionRow, Button};
use crate::kind::ComponentType;
use crate::node::Node;
use crate::schema::{Field, Shape};
use crate::validate::{check_count, check_range, mismatch};
use crate::wire::{self, Payload};

pub const MAX_SECTION_TEXTS: usize = 3;
pub const MAX_GALLERY_ITEMS: usize = 10;
pub const MAX_ACCENT_COLOR: u32 = 0xFF_FFFF;

const SECTION_CHILDREN: &[&str] = &["TextDisplay"];
const SECTION_ACCESSORIES: &[&str] = &["Button", "Thumbnail"];
const CONTAINER_CHILDREN: &[&str] = &[
    "ActionRow",
    "TextDisplay",
    "Section",
    "MediaGallery",
    "Separator",
    "File",
];

/// Markdown text (tag 10).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDisplay {
    content: String,
    id: Option<u32>,
}

impl TextDisplay {
    pub fn new(content: impl Into<String>) -> Self {
        TextDisplay {
            content: content.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Node for TextDisplay {
    const KIND: ComponentType = ComponentType::TextDisplay;

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn to_json(&self) -> Value {
        Payload::new(Self::KIND)
            .field("content", self.content.as_str())
            .optional("id", self.id)
            .finish()
    }

    fn shape() -> Shape {
        Shape::record([
            ("type", Shape::tag_of(Self::KIND)),
            ("content", Field::required(Shape::Unicode)),
            ("id", Shape::id()),
        ])
    }
}

/// A small image, only valid as a section accessory (tag 11).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    media_url: String,
    description: Option<String>,
    spoiler: bool,
    id: Option<u32>,
}

impl Thumbnail {
    pub fn new(media_url: impl Into<String>) -> Self {
        Thumbnail {
            media_url: media_url.into(),
            description: None,
            spoiler: false,
            id: None,
        }
    }

    /// Sets the alt text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_spoiler(mut self, spoiler: bool) -> Self {
        self.spoiler = spoiler;
        self
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn media_url(&self) -> &str {
        &self.media_url
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_spoiler(&self) -> bool {
        self.spoiler
    }
}

impl Node for Thumbnail {
    const KIND: ComponentType = ComponentType::Thumbnail;

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn to_json(&self) -> Value {
        Payload::new(Self::KIND)
            .field("media", wire::media(&self.media_url))
            .optional("description", self.description.as_deref())
            .unless_default("spoiler", self.spoiler, false)
            .optional("id", self.id)
            .finish()
    }

    fn shape() -> Shape {
        Shape::record([
            ("type", Shape::tag_of(Self::KIND)),
            ("media", Field::required(Shape::media())),
            ("description", Field::optional(Shape::Unicode)),
            ("spoiler", Field::optional(Shape::Bool)),
            ("id", Shape::id()),
        ])
    }
}

/// One entry of a [`MediaGallery`]. Not a node: it has no tag or id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaGalleryItem {
    media_url: String,
    description: Option<String>,
    spoiler: bool,
}

impl MediaGalleryItem {
    pub fn new(media_url: impl Into<String>) -> Self {
        MediaGalleryItem {
            media_url: media_url.into(),
            description: None,
            spoiler: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_spoiler(mut self, spoiler: bool) -> Self {
        self.spoiler = spoiler;
        self
    }

    pub fn media_url(&self) -> &str {
        &self.media_url
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_spoiler(&self) -> bool {
        self.spoiler
    }

    pub fn to_json(&self) -> Value {
        Payload::untagged()
            .field("media", wire::media(&self.media_url))
            .optional("description", self.description.as_deref())
            .unless_default("spoiler", self.spoiler, false)
            .finish()
    }

    pub fn shape() -> Shape {
        Shape::record([
            ("media", Field::required(Shape::media())),
            ("description", Field::optional(Shape::Unicode)),
            ("spoiler", Field::optional(Shape::Bool)),
        ])
    }
}

/// A grid of one to ten images (tag 12).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaGallery {
    items: Vec<MediaGalleryItem>,
    id: Option<u32>,
}

impl MediaGallery {
    pub fn new(items: Vec<MediaGalleryItem>) -> Result<Self, ValidationError> {
        check_count(
            "MediaGallery",
            "items",
            items.len(),
            1,
            Some(MAX_GALLERY_ITEMS),
        )?;
        Ok(MediaGallery { items, id: None })
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn push(&mut self, item: MediaGalleryItem) -> Result<(), ValidationError> {
        check_count(
            "MediaGallery",
            "items",
            self.items.len() + 1,
            1,
            Some(MAX_GALLERY_ITEMS),
        )?;
        self.items.push(item);
        Ok(())
    }

    pub fn items(&self) -> &[MediaGalleryItem] {
        &self.items
    }
}

impl Node for MediaGallery {
    const KIND: ComponentType = ComponentType::MediaGallery;

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn to_json(&self) -> Value {
        let items: Vec<Value> = self.items.iter().map(MediaGalleryItem::to_json).collect();
        Payload::new(Self::KIND)
            .field("items", items)
            .optional("id", self.id)
            .finish()
    }

    fn shape() -> Shape {
        Shape::record([
            ("type", Shape::tag_of(Self::KIND)),
            (
                "items",
                Field::required(Shape::sequence(
                    MediaGalleryItem::shape(),
                    1,
                    Some(MAX_GALLERY_ITEMS),
                )),
            ),
            ("id", Shape::id()),
        ])
    }
}

/// An uploaded attachment shown inline (tag 13).
///
/// Only the filename is kept; the transport uploads the file and resolves the
/// `attachment://` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    filename: String,
    spoiler: bool,
    id: Option<u32>,
}

impl File {
    pub fn new(filename: impl Into<String>) -> Self {
        File {
            filename: filename.into(),
            spoiler: false,
            id: None,
        }
    }

    pub fn with_spoiler(mut self, spoiler: bool) -> Self {
        self.spoiler = spoiler;
        self
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The `attachment://` reference written on the wire.
    pub fn url(&self) -> String {
        wire::attachment_url(&self.filename)
    }

    pub fn is_spoiler(&self) -> bool {
        self.spoiler
    }
}

impl Node for File {
    const KIND: ComponentType = ComponentType::File;

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn to_json(&self) -> Value {
        Payload::new(Self::KIND)
            .field("file", wire::media(&self.url()))
            .unless_default("spoiler", self.spoiler, false)
            .optional("id", self.id)
            .finish()
    }

    fn shape() -> Shape {
        Shape::record([
            ("type", Shape::tag_of(Self::KIND)),
            ("file", Field::required(Shape::media())),
            ("spoiler", Field::optional(Shape::Bool)),
            ("id", Shape::id()),
        ])
    }
}

/// Vertical padding around a [`Separator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeparatorSpacing {
    #[default]
    Small,
    Large,
}

impl SeparatorSpacing {
    pub fn value(self) -> u8 {
        match self {
            SeparatorSpacing::Small => 1,
            SeparatorSpacing::Large => 2,
        }
    }
}

impl TryFrom<i64> for SeparatorSpacing {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        check_range("spacing", "1 (small) or 2 (large)", 1..=2, value)?;
        Ok(if value == 1 {
            SeparatorSpacing::Small
        } else {
            SeparatorSpacing::Large
        })
    }
}

impl From<SeparatorSpacing> for Value {
    fn from(spacing: SeparatorSpacing) -> Self {
        Value::from(spacing.value())
    }
}

/// Padding between components, optionally drawn as a line (tag 14).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator {
    divider: bool,
    spacing: SeparatorSpacing,
    id: Option<u32>,
}

impl Default for Separator {
    fn default() -> Self {
        Separator {
            divider: true,
            spacing: SeparatorSpacing::Small,
            id: None,
        }
    }
}

impl Separator {
    /// A small separator with a visible divider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a separator from an untyped spacing value.
    pub fn try_new(divider: bool, spacing: i64) -> Result<Self, ValidationError> {
        let spacing = SeparatorSpacing::try_from(spacing)?;
        Ok(Separator {
            divider,
            spacing,
            id: None,
        })
    }

    pub fn with_divider(mut self, divider: bool) -> Self {
        self.divider = divider;
        self
    }

    pub fn with_spacing(mut self, spacing: SeparatorSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn has_divider(&self) -> bool {
        self.divider
    }

    pub fn spacing(&self) -> SeparatorSpacing {
        self.spacing
    }
}

impl Node for Separator {
    const KIND: ComponentType = ComponentType::Separator;

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn to_json(&self) -> Value {
        Payload::new(Self::KIND)
            .unless_default("divider", self.divider, true)
            .unless_default("spacing", self.spacing, SeparatorSpacing::Small)
            .optional("id", self.id)
            .finish()
    }

    fn shape() -> Shape {
        Shape::record([
            ("type", Shape::tag_of(Self::KIND)),
            ("divider", Field::optional(Shape::Bool)),
            ("spacing", Field::optional(Shape::Int { min: 1, max: 2 })),
            ("id", Shape::id()),
        ])
    }
}

/// What may sit beside a section's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionAccessory {
    Button(Button),
    Thumbnail(Thumbnail),
}

impl SectionAccessory {
    pub fn kind(&self) -> ComponentType {
        match self {
            SectionAccessory::Button(button) => button.kind(),
            SectionAccessory::Thumbnail(thumbnail) => thumbnail.kind(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            SectionAccessory::Button(button) => button.to_json(),
            SectionAccessory::Thumbnail(thumbnail) => thumbnail.to_json(),
        }
    }

    pub fn shape() -> Shape {
        Shape::tagged([
            (ComponentType::Button, Button::shape()),
            (ComponentType::Thumbnail, Thumbnail::shape()),
        ])
    }
}

impl From<Button> for SectionAccessory {
    fn from(button: Button) -> Self {
        SectionAccessory::Button(button)
    }
}

impl From<Thumbnail> for SectionAccessory {
    fn from(thumbnail: Thumbnail) -> Self {
        SectionAccessory::Thumbnail(thumbnail)
    }
}

impl TryFrom<Component> for SectionAccessory {
    type Error = ValidationError;

    fn try_from(component: Component) -> Result<Self, Self::Error> {
        match component {
            Component::Button(button) => Ok(SectionAccessory::Button(button)),
            Component::Thumbnail(thumbnail) => Ok(SectionAccessory::Thumbnail(thumbnail)),
            other => Err(mismatch(
                "Section",
                "accessory",
                other.kind().name(),
                SECTION_ACCESSORIES,
            )),
        }
    }
}

/// One to three text blocks with an optional accessory (tag 9).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    components: Vec<TextDisplay>,
    accessory: Option<SectionAccessory>,
    id: Option<u32>,
}

impl Section {
    pub fn new(components: Vec<TextDisplay>) -> Result<Self, ValidationError> {
        check_count(
            "Section",
            "components",
            components.len(),
            1,
            Some(MAX_SECTION_TEXTS),
        )?;
        Ok(Section {
            components,
            accessory: None,
            id: None,
        })
    }

    /// Builds a section from arbitrary components, rejecting any child that
    /// is not a text display and any accessory that is neither a button nor a
    /// thumbnail.
    pub fn from_components(
        components: Vec<Component>,
        accessory: Option<Component>,
    ) -> Result<Self, ValidationError> {
        check_count(
            "Section",
            "components",
            components.len(),
            1,
            Some(MAX_SECTION_TEXTS),
        )?;
        let texts = components
            .into_iter()
            .map(|component| match component {
                Component::TextDisplay(text) => Ok(text),
                other => Err(mismatch(
                    "Section",
                    "component",
                    other.kind().name(),
                    SECTION_CHILDREN,
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let accessory = accessory.map(SectionAccessory::try_from).transpose()?;

        Ok(Section {
            components: texts,
            accessory,
            id: None,
        })
    }

    pub fn with_accessory(mut self, accessory: impl Into<SectionAccessory>) -> Self {
        self.accessory = Some(accessory.into());
        self
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn push(&mut self, text: TextDisplay) -> Result<(), ValidationError> {
        check_count(
            "Section",
            "components",
            self.components.len() + 1,
            1,
            Some(MAX_SECTION_TEXTS),
        )?;
        self.components.push(text);
        Ok(())
    }

    pub fn components(&self) -> &[TextDisplay] {
        &self.components
    }

    pub fn accessory(&self) -> Option<&SectionAccessory> {
        self.accessory.as_ref()
    }
}

impl Node for Section {
    const KIND: ComponentType = ComponentType::Section;

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn to_json(&self) -> Value {
        let components: Vec<Value> = self.components.iter().map(TextDisplay::to_json).collect();
        Payload::new(Self::KIND)
            .field("components", components)
            .optional("accessory", self.accessory.as_ref().map(SectionAccessory::to_json))
            .optional("id", self.id)
            .finish()
    }

    fn shape() -> Shape {
        Shape::record([
            ("type", Shape::tag_of(Self::KIND)),
            (
                "components",
                Field::required(Shape::sequence(
                    Shape::tagged([(ComponentType::TextDisplay, TextDisplay::shape())]),
                    1,
                    Some(MAX_SECTION_TEXTS),
                )),
            ),
            ("accessory", Field::optional(SectionAccessory::shape())),
            ("id", Shape::id()),
        ])
    }
}

/// What a container may hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerChild {
    ActionRow(ActionRow),
    TextDisplay(TextDisplay),
    Section(Section),
    MediaGallery(MediaGallery),
    Separator(Separator),
    File(File),
}

impl ContainerChild {
    pub fn kind(&self) -> ComponentType {
        match self {
            ContainerChild::ActionRow(_) => ComponentType::ActionRow,
            ContainerChild::TextDisplay(_) => ComponentType::TextDisplay,
            ContainerChild::Section(_) => ComponentType::Section,
            ContainerChild::MediaGallery(_) => ComponentType::MediaGallery,
            ContainerChild::Separator(_) => ComponentType::Separator,
            ContainerChild::File(_) => ComponentType::File,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ContainerChild::ActionRow(row) => row.to_json(),
            ContainerChild::TextDisplay(text) => text.to_json(),
            ContainerChild::Section(section) => section.to_json(),
            ContainerChild::MediaGallery(gallery) => gallery.to_json(),
            ContainerChild::Separator(separator) => separator.to_json(),
            ContainerChild::File(file) => file.to_json(),
        }
    }

    pub fn shape() -> Shape {
        Shape::tagged([
            (ComponentType::ActionRow, ActionRow::shape()),
            (ComponentType::TextDisplay, TextDisplay::shape()),
            (ComponentType::Section, Section::shape()),
            (ComponentType::MediaGallery, MediaGallery::shape()),
            (ComponentType::Separator, Separator::shape()),
            (ComponentType::File, File::shape()),
        ])
    }
}

impl From<ActionRow> for ContainerChild {
    fn from(row: ActionRow) -> Self {
        ContainerChild::ActionRow(row)
    }
}

impl From<TextDisplay> for ContainerChild {
    fn from(text: TextDisplay) -> Self {
        ContainerChild::TextDisplay(text)
    }
}

impl From<Section> for ContainerChild {
    fn from(section: Section) -> Self {
        ContainerChild::Section(section)
    }
}

impl From<MediaGallery> for ContainerChild {
    fn from(gallery: MediaGallery) -> Self {
        ContainerChild::MediaGallery(gallery)
    }
}

impl From<Separator> for ContainerChild {
    fn from(separator: Separator) -> Self {
        ContainerChild::Separator(separator)
    }
}

impl From<File> for ContainerChild {
    fn from(file: File) -> Self {
        ContainerChild::File(file)
    }
}

impl TryFrom<Component> for ContainerChild {
    type Error = ValidationError;

    fn try_from(component: Component) -> Result<Self, Self::Error> {
        match component {
            Component::ActionRow(row) => Ok(ContainerChild::ActionRow(row)),
            Component::TextDisplay(text) => Ok(ContainerChild::TextDisplay(text)),
            Component::Section(section) => Ok(ContainerChild::Section(section)),
            Component::MediaGallery(gallery) => Ok(ContainerChild::MediaGallery(gallery)),
            Component::Separator(separator) => Ok(ContainerChild::Separator(separator)),
            Component::File(file) => Ok(ContainerChild::File(file)),
            other => Err(mismatch(
                "Container",
                "component",
                other.kind().name(),
                CONTAINER_CHILDREN,
            )),
        }
    }
}

fn check_accent_color(color: i64) -> Result<u32, ValidationError> {
    check_range(
        "accent_color",
        "within 0x000000..=0xFFFFFF",
        0..=i64::from(MAX_ACCENT_COLOR),
        color,
    )?;
    // The range check above guarantees the value fits.
    Ok(color as u32)
}

/// A visually grouped block with an optional colored bar (tag 17).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    components: Vec<ContainerChild>,
    accent_color: Option<u32>,
    spoiler: bool,
    id: Option<u32>,
}

impl Container {
    pub fn new(components: Vec<ContainerChild>) -> Result<Self, ValidationError> {
        check_count("Container", "components", components.len(), 1, None)?;
        Ok(Container {
            components,
            accent_color: None,
            spoiler: false,
            id: None,
        })
    }

    /// Builds a container from arbitrary components, rejecting kinds outside
    /// the container whitelist.
    pub fn from_components(components: Vec<Component>) -> Result<Self, ValidationError> {
        check_count("Container", "components", components.len(), 1, None)?;
        let children = components
            .into_iter()
            .map(ContainerChild::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(children)
    }

    /// Sets the accent color, given as `0xRRGGBB`.
    pub fn with_accent_color(mut self, color: i64) -> Result<Self, ValidationError> {
        self.accent_color = Some(check_accent_color(color)?);
        Ok(self)
    }

    /// Replaces or clears the accent color in place.
    pub fn set_accent_color(&mut self, color: Option<i64>) -> Result<(), ValidationError> {
        self.accent_color = color.map(check_accent_color).transpose()?;
        Ok(())
    }

    pub fn with_spoiler(mut self, spoiler: bool) -> Self {
        self.spoiler = spoiler;
        self
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn push(&mut self, child: impl Into<ContainerChild>) {
        self.components.push(child.into());
    }

    /// Appends an arbitrary component, rejecting kinds outside the whitelist.
    pub fn push_component(&mut self, component: Component) -> Result<(), ValidationError> {
        let child = ContainerChild::try_from(component)?;
        self.components.push(child);
        Ok(())
    }

    pub fn components(&self) -> &[ContainerChild] {
        &self.components
    }

    pub fn accent_color(&self) -> Option<u32> {
        self.accent_color
    }

    pub fn is_spoiler(&self) -> bool {
        self.spoiler
    }
}

impl Node for Container {
    const KIND: ComponentType = ComponentType::Container;

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn to_json(&self) -> Value {
        let components: Vec<Value> = self.components.iter().map(ContainerChild::to_json).collect();
        Payload::new(Self::KIND)
            .field("components", components)
            .optional("accent_color", self.accent_color)
            .unless_default("spoiler", self.spoiler, false)
            .optional("id", self.id)
            .finish()
    }

    fn shape() -> Shape {
        Shape::record([
            ("type", Shape::tag_of(Self::KIND)),
            (
                "components",
                Field::required(Shape::sequence(ContainerChild::shape(), 1, None)),
            ),
            (
                "accent_color",
                Field::optional(Shape::Int {
                    min: 0,
                    max: i64::from(MAX_ACCENT_COLOR),
                }),
            ),
            ("spoiler", Field::optional(Shape::Bool)),
            ("id", Shape::id()),
        ])
    }
}
