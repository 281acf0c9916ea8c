use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::kind::ComponentType;

/// A point where a JSON value departs from its expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {message}")]
pub struct ShapeError {
    pub path: String,
    pub message: String,
}

impl ShapeError {
    fn new(path: &str, message: impl Into<String>) -> Self {
        ShapeError {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

/// A named member of a record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub shape: Shape,
    pub required: bool,
}

impl Field {
    pub fn required(shape: Shape) -> Self {
        Field {
            shape,
            required: true,
        }
    }

    pub fn optional(shape: Shape) -> Self {
        Field {
            shape,
            required: false,
        }
    }
}

/// Description of the JSON a serialized node must take on the wire.
///
/// Records are closed: a key not listed in the record is a violation. Field
/// order is kept for readability only and is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Shape {
    Bool,
    /// UTF-8 string.
    Unicode,
    /// Integer within an inclusive range.
    Int { min: i64, max: i64 },
    /// Exactly this integer.
    Literal(i64),
    /// Homogeneous array with an inclusive length range.
    Sequence {
        item: Box<Shape>,
        min: usize,
        max: Option<usize>,
    },
    /// Object with known keys.
    Record(IndexMap<String, Field>),
    /// Union of object shapes keyed by their integer `type` member.
    Tagged(IndexMap<u8, Shape>),
}

impl Shape {
    /// Creates a record shape from field definitions.
    pub fn record(fields: impl IntoIterator<Item = (&'static str, Field)>) -> Self {
        Shape::Record(
            fields
                .into_iter()
                .map(|(name, field)| (name.to_string(), field))
                .collect(),
        )
    }

    /// Creates a bounded sequence shape.
    pub fn sequence(item: Shape, min: usize, max: Option<usize>) -> Self {
        Shape::Sequence {
            item: Box::new(item),
            min,
            max,
        }
    }

    /// Creates a union discriminated by the `type` tag of each kind.
    pub fn tagged(variants: impl IntoIterator<Item = (ComponentType, Shape)>) -> Self {
        Shape::Tagged(
            variants
                .into_iter()
                .map(|(kind, shape)| (kind.tag(), shape))
                .collect(),
        )
    }

    /// The `type` member every node record starts with.
    pub fn tag_of(kind: ComponentType) -> Field {
        Field::required(Shape::Literal(i64::from(kind.tag())))
    }

    /// The optional `id` member shared by every node.
    pub fn id() -> Field {
        Field::optional(Shape::Int {
            min: 0,
            max: i64::from(u32::MAX),
        })
    }

    /// `{"url": string}`, the unfurled media object.
    pub fn media() -> Shape {
        Shape::record([("url", Field::required(Shape::Unicode))])
    }

    /// Checks `value` against this shape, reporting the first violation.
    pub fn check(&self, value: &Value) -> Result<(), ShapeError> {
        self.check_at(value, "$")
    }

    fn check_at(&self, value: &Value, path: &str) -> Result<(), ShapeError> {
        match self {
            Shape::Bool => {
                if value.is_boolean() {
                    Ok(())
                } else {
                    Err(ShapeError::new(path, format!("expected boolean, got {value}")))
                }
            }
            Shape::Unicode => {
                if value.is_string() {
                    Ok(())
                } else {
                    Err(ShapeError::new(path, format!("expected string, got {value}")))
                }
            }
            Shape::Int { min, max } => match value.as_i64() {
                Some(n) if (*min..=*max).contains(&n) => Ok(()),
                Some(n) => Err(ShapeError::new(
                    path,
                    format!("integer {n} outside {min}..={max}"),
                )),
                None => Err(ShapeError::new(path, format!("expected integer, got {value}"))),
            },
            Shape::Literal(expected) => match value.as_i64() {
                Some(n) if n == *expected => Ok(()),
                _ => Err(ShapeError::new(
                    path,
                    format!("expected {expected}, got {value}"),
                )),
            },
            Shape::Sequence { item, min, max } => {
                let Some(elements) = value.as_array() else {
                    return Err(ShapeError::new(path, format!("expected array, got {value}")));
                };
                if elements.len() < *min || max.is_some_and(|max| elements.len() > max) {
                    let upper = max.map_or_else(|| "n".to_string(), |m| m.to_string());
                    return Err(ShapeError::new(
                        path,
                        format!("expected {min}..={upper} elements, got {}", elements.len()),
                    ));
                }
                for (i, element) in elements.iter().enumerate() {
                    item.check_at(element, &format!("{path}[{i}]"))?;
                }
                Ok(())
            }
            Shape::Record(fields) => {
                let Some(object) = value.as_object() else {
                    return Err(ShapeError::new(path, format!("expected object, got {value}")));
                };
                for (name, field) in fields {
                    match object.get(name) {
                        Some(member) => field.shape.check_at(member, &format!("{path}.{name}"))?,
                        None if field.required => {
                            return Err(ShapeError::new(path, format!("missing field `{name}`")));
                        }
                        None => {}
                    }
                }
                if let Some(extra) = object.keys().find(|key| !fields.contains_key(*key)) {
                    return Err(ShapeError::new(path, format!("unexpected field `{extra}`")));
                }
                Ok(())
            }
            Shape::Tagged(variants) => {
                let tag = value
                    .get("type")
                    .and_then(Value::as_u64)
                    .and_then(|t| u8::try_from(t).ok());
                let Some(tag) = tag else {
                    return Err(ShapeError::new(path, "missing integer `type` discriminant"));
                };
                match variants.get(&tag) {
                    Some(shape) => shape.check_at(value, path),
                    None => Err(ShapeError::new(
                        path,
                        format!("`type` {tag} is not allowed here"),
                    )),
                }
            }
        }
    }
}
