//! Siloxane builds layout message bodies: trees of text, media and grouping
//! nodes that a chat platform renders as a rich message.
//!
//! Core concepts:
//! - **Node**: one component kind with a fixed wire `type` tag
//! - **Component**: the sum of every kind a tree may contain
//! - **Shape**: a description of the JSON each kind serializes to
//! - **LayoutMessage**: the top-level body carrying the layout flag
//!
//! Every constructor validates its input, so any tree that could be built
//! serializes without error.
//!
//! # Example
//!
//! ```
//! use siloxane_core::{Container, Node, Section, TextDisplay};
//!
//! let section = Section::new(vec![TextDisplay::new("hi")]).unwrap();
//! let container = Container::new(vec![section.into()])
//!     .unwrap()
//!     .with_accent_color(0x5865F2)
//!     .unwrap();
//!
//! assert_eq!(
//!     container.to_json().to_string(),
//!     r#"{"type":17,"components":[{"type":9,"components":[{"type":10,"content":"hi"}]}],"accent_color":5793266}"#
//! );
//! ```

mod component;
mod error;
mod interactive;
mod kind;
mod layout;
mod message;
mod node;
mod schema;
mod validate;
mod visit;
mod wire;

pub use component::{wire_schema, Component};
pub use error::{Bound, ValidationError};
pub use interactive::{ActionRow, Button, ButtonStyle, MAX_ROW_BUTTONS};
pub use kind::ComponentType;
pub use layout::{
    Container, ContainerChild, File, MediaGallery, MediaGalleryItem, Section, SectionAccessory,
    Separator, SeparatorSpacing, TextDisplay, Thumbnail, MAX_ACCENT_COLOR, MAX_GALLERY_ITEMS,
    MAX_SECTION_TEXTS,
};
pub use message::{message_schema, LayoutMessage, MessageFlags};
pub use node::Node;
pub use schema::{Field, Shape, ShapeError};
pub use visit::{Visitable, Visitor};
pub use wire::{attachment_url, ATTACHMENT_SCHEME};
