use std::fmt;

use thiserror::Error;

/// A count bound that a node's children or items must respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    AtLeast(usize),
    AtMost(usize),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::AtLeast(n) => write!(f, "at least {n}"),
            Bound::AtMost(n) => write!(f, "at most {n}"),
        }
    }
}

/// Why a node could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{kind} must contain {bound} {what}, got {actual}")]
    Arity {
        kind: &'static str,
        what: &'static str,
        bound: Bound,
        actual: usize,
    },

    #[error("{found} is not allowed as {slot} of {kind}; expected one of: {}", .allowed.join(", "))]
    TypeMismatch {
        kind: &'static str,
        slot: &'static str,
        found: &'static str,
        allowed: &'static [&'static str],
    },

    #[error("{field} must be {allowed}, got {actual}")]
    Range {
        field: &'static str,
        allowed: &'static str,
        actual: i64,
    },
}

impl ValidationError {
    pub fn is_arity(&self) -> bool {
        matches!(self, ValidationError::Arity { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ValidationError::TypeMismatch { .. })
    }

    pub fn is_range(&self) -> bool {
        matches!(self, ValidationError::Range { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_message_names_kind_bound_and_count() {
        let err = ValidationError::Arity {
            kind: "Section",
            what: "components",
            bound: Bound::AtMost(3),
            actual: 4,
        };
        assert_eq!(err.to_string(), "Section must contain at most 3 components, got 4");
    }

    #[test]
    fn type_mismatch_message_lists_allowed_kinds() {
        let err = ValidationError::TypeMismatch {
            kind: "Section",
            slot: "accessory",
            found: "File",
            allowed: &["Button", "Thumbnail"],
        };
        assert_eq!(
            err.to_string(),
            "File is not allowed as accessory of Section; expected one of: Button, Thumbnail"
        );
    }

    #[test]
    fn range_message_names_field() {
        let err = ValidationError::Range {
            field: "accent_color",
            allowed: "within 0x000000..=0xFFFFFF",
            actual: -1,
        };
        assert_eq!(
            err.to_string(),
            "accent_color must be within 0x000000..=0xFFFFFF, got -1"
        );
        assert!(err.is_range());
        assert!(!err.is_arity());
    }
}
