//! The message body a layout tree is sent in.
//!
//! The transport embeds this payload in its request and uploads the files
//! named by [`LayoutMessage::attachments`] alongside it.

use bitflags::bitflags;
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::trace;

use crate::component::{top_level_schema, Component};
use crate::error::ValidationError;
use crate::layout::File;
use crate::schema::{Field, Shape};
use crate::validate::{check_count, mismatch};
use crate::visit::{Visitable, Visitor};
use crate::wire::Payload;

const TOP_LEVEL_KINDS: &[&str] = &[
    "ActionRow",
    "Section",
    "TextDisplay",
    "MediaGallery",
    "File",
    "Separator",
    "Container",
];

bitflags! {
    /// Message flag bits relevant to layout messages.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MessageFlags: u64 {
        const SUPPRESS_EMBEDS = 1 << 2;
        const EPHEMERAL = 1 << 6;
        const SUPPRESS_NOTIFICATIONS = 1 << 12;
        /// Marks the body as a layout tree rather than legacy rows.
        const IS_COMPONENTS_V2 = 1 << 15;
    }
}

/// Top-level components of a message whose body is a layout tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutMessage {
    components: Vec<Component>,
    flags: MessageFlags,
}

impl LayoutMessage {
    pub fn new(components: Vec<Component>) -> Result<Self, ValidationError> {
        check_count("message", "components", components.len(), 1, None)?;
        if let Some(misplaced) = components.iter().find(|c| !c.kind().is_top_level()) {
            return Err(mismatch(
                "message",
                "component",
                misplaced.kind().name(),
                TOP_LEVEL_KINDS,
            ));
        }
        Ok(LayoutMessage {
            components,
            flags: MessageFlags::IS_COMPONENTS_V2,
        })
    }

    /// Adds extra flags. The layout flag is always kept.
    pub fn with_flags(mut self, flags: MessageFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn flags(&self) -> MessageFlags {
        self.flags
    }

    /// Filenames referenced by `File` nodes, in tree order.
    pub fn attachments(&self) -> Vec<String> {
        let mut collector = AttachmentCollector::default();
        for component in &self.components {
            component.accept(&mut collector);
        }
        collector.0
    }

    /// Serializes the body as `{"flags": ..., "components": [...]}`.
    pub fn to_json(&self) -> Value {
        trace!(
            components = self.components.len(),
            flags = self.flags.bits(),
            "serializing layout message"
        );
        let components: Vec<Value> = self.components.iter().map(Component::to_json).collect();
        Payload::untagged()
            .field("flags", self.flags.bits())
            .field("components", components)
            .finish()
    }
}

/// Wire schema of a whole message body.
pub fn message_schema() -> Shape {
    Shape::record([
        (
            "flags",
            Field::required(Shape::Int {
                min: 0,
                max: i64::MAX,
            }),
        ),
        (
            "components",
            Field::required(Shape::sequence(top_level_schema(), 1, None)),
        ),
    ])
}

impl Serialize for LayoutMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

#[derive(Default)]
struct AttachmentCollector(Vec<String>);

impl Visitor for AttachmentCollector {
    fn visit_file(&mut self, file: &File) {
        self.0.push(file.filename().to_string());
    }
}
