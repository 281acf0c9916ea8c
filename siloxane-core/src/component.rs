use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::interactive::{ActionRow, Button};
use crate::kind::ComponentType;
use crate::layout::{
    Container, ContainerChild, File, MediaGallery, Section, SectionAccessory, Separator,
    TextDisplay, Thumbnail,
};
use crate::node::Node;
use crate::schema::Shape;

/// Any component that may appear in a layout tree.
///
/// Composite kinds hold their children through narrower enums
/// ([`ContainerChild`], [`SectionAccessory`]); this type is what callers pass
/// around before the tree is assembled and what sits at the top level of a
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    ActionRow(ActionRow),
    Button(Button),
    Section(Section),
    TextDisplay(TextDisplay),
    Thumbnail(Thumbnail),
    MediaGallery(MediaGallery),
    File(File),
    Separator(Separator),
    Container(Container),
}

impl Component {
    pub fn kind(&self) -> ComponentType {
        match self {
            Component::ActionRow(node) => node.kind(),
            Component::Button(node) => node.kind(),
            Component::Section(node) => node.kind(),
            Component::TextDisplay(node) => node.kind(),
            Component::Thumbnail(node) => node.kind(),
            Component::MediaGallery(node) => node.kind(),
            Component::File(node) => node.kind(),
            Component::Separator(node) => node.kind(),
            Component::Container(node) => node.kind(),
        }
    }

    pub fn id(&self) -> Option<u32> {
        match self {
            Component::ActionRow(node) => node.id(),
            Component::Button(node) => node.id(),
            Component::Section(node) => node.id(),
            Component::TextDisplay(node) => node.id(),
            Component::Thumbnail(node) => node.id(),
            Component::MediaGallery(node) => node.id(),
            Component::File(node) => node.id(),
            Component::Separator(node) => node.id(),
            Component::Container(node) => node.id(),
        }
    }

    /// Serializes the component to its wire form.
    pub fn to_json(&self) -> Value {
        match self {
            Component::ActionRow(node) => node.to_json(),
            Component::Button(node) => node.to_json(),
            Component::Section(node) => node.to_json(),
            Component::TextDisplay(node) => node.to_json(),
            Component::Thumbnail(node) => node.to_json(),
            Component::MediaGallery(node) => node.to_json(),
            Component::File(node) => node.to_json(),
            Component::Separator(node) => node.to_json(),
            Component::Container(node) => node.to_json(),
        }
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl From<ContainerChild> for Component {
    fn from(child: ContainerChild) -> Self {
        match child {
            ContainerChild::ActionRow(row) => Component::ActionRow(row),
            ContainerChild::TextDisplay(text) => Component::TextDisplay(text),
            ContainerChild::Section(section) => Component::Section(section),
            ContainerChild::MediaGallery(gallery) => Component::MediaGallery(gallery),
            ContainerChild::Separator(separator) => Component::Separator(separator),
            ContainerChild::File(file) => Component::File(file),
        }
    }
}

impl From<SectionAccessory> for Component {
    fn from(accessory: SectionAccessory) -> Self {
        match accessory {
            SectionAccessory::Button(button) => Component::Button(button),
            SectionAccessory::Thumbnail(thumbnail) => Component::Thumbnail(thumbnail),
        }
    }
}

macro_rules! impl_from_node {
    ($($kind:ident),* $(,)?) => {
        $(
            impl From<$kind> for Component {
                fn from(node: $kind) -> Self {
                    Component::$kind(node)
                }
            }
        )*
    };
}

impl_from_node!(
    ActionRow,
    Button,
    Section,
    TextDisplay,
    Thumbnail,
    MediaGallery,
    File,
    Separator,
    Container,
);

fn shape_of(kind: ComponentType) -> Shape {
    match kind {
        ComponentType::ActionRow => ActionRow::shape(),
        ComponentType::Button => Button::shape(),
        ComponentType::Section => Section::shape(),
        ComponentType::TextDisplay => TextDisplay::shape(),
        ComponentType::Thumbnail => Thumbnail::shape(),
        ComponentType::MediaGallery => MediaGallery::shape(),
        ComponentType::File => File::shape(),
        ComponentType::Separator => Separator::shape(),
        ComponentType::Container => Container::shape(),
    }
}

/// The full wire schema: every kind, discriminated by `type`.
pub fn wire_schema() -> Shape {
    Shape::tagged(ComponentType::all().iter().map(|&kind| (kind, shape_of(kind))))
}

/// The kinds a message body may hold directly.
pub(crate) fn top_level_schema() -> Shape {
    Shape::tagged(
        ComponentType::all()
            .iter()
            .filter(|kind| kind.is_top_level())
            .map(|&kind| (kind, shape_of(kind))),
    )
}
