use serde_json::Value;

use crate::kind::ComponentType;
use crate::schema::Shape;

/// A validated component that knows its wire representation.
///
/// Implementors are only obtainable through their validating constructors,
/// so `to_json` has no failure path.
pub trait Node {
    /// The fixed discriminant of this kind.
    const KIND: ComponentType;

    /// The caller-supplied identifier, if any.
    fn id(&self) -> Option<u32>;

    /// Serializes this node (and its children, in order) to its wire form.
    fn to_json(&self) -> Value;

    /// Describes the JSON `to_json` produces for this kind.
    fn shape() -> Shape;

    fn kind(&self) -> ComponentType {
        Self::KIND
    }
}
