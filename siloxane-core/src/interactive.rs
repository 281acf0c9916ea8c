//! The legacy interactive kinds a layout tree may embed.
//!
//! Only buttons and the rows that hold them are modeled; select menus and
//! text inputs stay with the legacy single-row format.

use serde_json::Value;

use crate::component::Component;
use crate::error::ValidationError;
use crate::kind::ComponentType;
use crate::node::Node;
use crate::schema::{Field, Shape};
use crate::validate::{check_count, check_range, mismatch};
use crate::wire::Payload;

/// Most buttons an action row holds.
pub const MAX_ROW_BUTTONS: usize = 5;

const ROW_CHILDREN: &[&str] = &["Button"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Success,
    Danger,
    Link,
}

impl ButtonStyle {
    pub fn value(self) -> u8 {
        match self {
            ButtonStyle::Primary => 1,
            ButtonStyle::Secondary => 2,
            ButtonStyle::Success => 3,
            ButtonStyle::Danger => 4,
            ButtonStyle::Link => 5,
        }
    }
}

impl TryFrom<i64> for ButtonStyle {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        check_range("style", "within 1..=5", 1..=5, value)?;
        Ok(match value {
            1 => ButtonStyle::Primary,
            2 => ButtonStyle::Secondary,
            3 => ButtonStyle::Success,
            4 => ButtonStyle::Danger,
            _ => ButtonStyle::Link,
        })
    }
}

/// What pressing the button does: report back or open a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ButtonTarget {
    CustomId(String),
    Url(String),
}

/// A clickable button (tag 2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    style: ButtonStyle,
    label: Option<String>,
    target: ButtonTarget,
    disabled: bool,
    id: Option<u32>,
}

impl Button {
    /// Creates an interactive button that reports `custom_id` when pressed.
    ///
    /// Link buttons carry a URL instead; use [`Button::link`] for those.
    pub fn new(style: ButtonStyle, custom_id: impl Into<String>) -> Result<Self, ValidationError> {
        if style == ButtonStyle::Link {
            check_range(
                "style",
                "within 1..=4 for buttons with a custom_id",
                1..=4,
                i64::from(style.value()),
            )?;
        }
        Ok(Button {
            style,
            label: None,
            target: ButtonTarget::CustomId(custom_id.into()),
            disabled: false,
            id: None,
        })
    }

    /// Creates a link button that opens `url`.
    pub fn link(url: impl Into<String>) -> Self {
        Button {
            style: ButtonStyle::Link,
            label: None,
            target: ButtonTarget::Url(url.into()),
            disabled: false,
            id: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn style(&self) -> ButtonStyle {
        self.style
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn custom_id(&self) -> Option<&str> {
        match &self.target {
            ButtonTarget::CustomId(custom_id) => Some(custom_id),
            ButtonTarget::Url(_) => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match &self.target {
            ButtonTarget::Url(url) => Some(url),
            ButtonTarget::CustomId(_) => None,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl Node for Button {
    const KIND: ComponentType = ComponentType::Button;

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn to_json(&self) -> Value {
        Payload::new(Self::KIND)
            .field("style", self.style.value())
            .optional("label", self.label.as_deref())
            .optional("custom_id", self.custom_id())
            .optional("url", self.url())
            .unless_default("disabled", self.disabled, false)
            .optional("id", self.id)
            .finish()
    }

    fn shape() -> Shape {
        Shape::record([
            ("type", Shape::tag_of(Self::KIND)),
            ("style", Field::required(Shape::Int { min: 1, max: 5 })),
            ("label", Field::optional(Shape::Unicode)),
            ("custom_id", Field::optional(Shape::Unicode)),
            ("url", Field::optional(Shape::Unicode)),
            ("disabled", Field::optional(Shape::Bool)),
            ("id", Shape::id()),
        ])
    }
}

/// A horizontal row of buttons (tag 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRow {
    components: Vec<Button>,
    id: Option<u32>,
}

impl ActionRow {
    pub fn new(components: Vec<Button>) -> Result<Self, ValidationError> {
        check_count(
            "ActionRow",
            "components",
            components.len(),
            1,
            Some(MAX_ROW_BUTTONS),
        )?;
        Ok(ActionRow {
            components,
            id: None,
        })
    }

    /// Builds a row from arbitrary components, rejecting anything but buttons.
    pub fn from_components(components: Vec<Component>) -> Result<Self, ValidationError> {
        check_count(
            "ActionRow",
            "components",
            components.len(),
            1,
            Some(MAX_ROW_BUTTONS),
        )?;
        let buttons = components
            .into_iter()
            .map(|component| match component {
                Component::Button(button) => Ok(button),
                other => Err(mismatch(
                    "ActionRow",
                    "component",
                    other.kind().name(),
                    ROW_CHILDREN,
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(buttons)
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    /// Appends a button, refusing to grow past the row limit.
    pub fn push(&mut self, button: Button) -> Result<(), ValidationError> {
        check_count(
            "ActionRow",
            "components",
            self.components.len() + 1,
            1,
            Some(MAX_ROW_BUTTONS),
        )?;
        self.components.push(button);
        Ok(())
    }

    pub fn components(&self) -> &[Button] {
        &self.components
    }
}

impl Node for ActionRow {
    const KIND: ComponentType = ComponentType::ActionRow;

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn to_json(&self) -> Value {
        let components: Vec<Value> = self.components.iter().map(Button::to_json).collect();
        Payload::new(Self::KIND)
            .field("components", components)
            .optional("id", self.id)
            .finish()
    }

    fn shape() -> Shape {
        Shape::record([
            ("type", Shape::tag_of(Self::KIND)),
            (
                "components",
                Field::required(Shape::sequence(
                    Shape::tagged([(ComponentType::Button, Button::shape())]),
                    1,
                    Some(MAX_ROW_BUTTONS),
                )),
            ),
            ("id", Shape::id()),
        ])
    }
}
