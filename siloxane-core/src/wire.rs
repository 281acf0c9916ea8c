//! Wire payload assembly.
//!
//! Every kind serializes through the same chain of `field` / `optional` /
//! `unless_default` calls, so default suppression reads as one table per kind.
//! The map preserves insertion order, so `type` is always the first key.

use serde_json::{Map, Value};

use crate::kind::ComponentType;

/// Prefix the transport resolves to an uploaded attachment.
pub const ATTACHMENT_SCHEME: &str = "attachment://";

/// Returns the attachment reference for an uploaded filename.
pub fn attachment_url(filename: &str) -> String {
    format!("{ATTACHMENT_SCHEME}{filename}")
}

pub(crate) struct Payload(Map<String, Value>);

impl Payload {
    /// Starts a node payload with its `type` discriminant.
    pub(crate) fn new(kind: ComponentType) -> Self {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::from(kind.tag()));
        Payload(map)
    }

    /// Starts a payload for a value object that carries no discriminant.
    pub(crate) fn untagged() -> Self {
        Payload(Map::new())
    }

    pub(crate) fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Emits `key` only when a value is present.
    pub(crate) fn optional<T: Into<Value>>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    /// Emits `key` only when `value` differs from the documented default.
    pub(crate) fn unless_default<T: PartialEq + Into<Value>>(
        self,
        key: &str,
        value: T,
        default: T,
    ) -> Self {
        if value == default {
            self
        } else {
            self.field(key, value)
        }
    }

    pub(crate) fn finish(self) -> Value {
        Value::Object(self.0)
    }
}

/// `{"url": ...}`, the unfurled media object nested under `media` or `file`.
pub(crate) fn media(url: &str) -> Value {
    Payload::untagged().field("url", url).finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_is_first_key() {
        let value = Payload::new(ComponentType::Separator)
            .field("divider", false)
            .finish();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["type", "divider"]);
    }

    #[test]
    fn optional_and_default_fields_are_suppressed() {
        let value = Payload::new(ComponentType::Thumbnail)
            .optional::<&str>("description", None)
            .unless_default("spoiler", false, false)
            .finish();
        assert_eq!(value, json!({"type": 11}));
    }

    #[test]
    fn non_default_fields_are_emitted() {
        let value = Payload::new(ComponentType::Thumbnail)
            .optional("description", Some("alt"))
            .unless_default("spoiler", true, false)
            .finish();
        assert_eq!(value, json!({"type": 11, "description": "alt", "spoiler": true}));
    }

    #[test]
    fn attachment_url_uses_scheme() {
        assert_eq!(attachment_url("report.pdf"), "attachment://report.pdf");
        assert_eq!(media("https://x/y.png"), json!({"url": "https://x/y.png"}));
    }
}
