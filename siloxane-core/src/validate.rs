//! Construction-time checks shared by every node kind.
//!
//! Each check either passes or yields the error the constructor returns
//! unchanged, so a rejected node is never produced.

use std::ops::RangeInclusive;

use tracing::debug;

use crate::error::{Bound, ValidationError};

fn reject(err: ValidationError) -> ValidationError {
    debug!(error = %err, "rejected layout node");
    err
}

/// Checks that `actual` lies within `min..=max` (no upper bound when `max` is `None`).
pub(crate) fn check_count(
    kind: &'static str,
    what: &'static str,
    actual: usize,
    min: usize,
    max: Option<usize>,
) -> Result<(), ValidationError> {
    if actual < min {
        return Err(reject(ValidationError::Arity {
            kind,
            what,
            bound: Bound::AtLeast(min),
            actual,
        }));
    }
    if let Some(max) = max {
        if actual > max {
            return Err(reject(ValidationError::Arity {
                kind,
                what,
                bound: Bound::AtMost(max),
                actual,
            }));
        }
    }
    Ok(())
}

pub(crate) fn check_range(
    field: &'static str,
    allowed: &'static str,
    range: RangeInclusive<i64>,
    actual: i64,
) -> Result<(), ValidationError> {
    if range.contains(&actual) {
        Ok(())
    } else {
        Err(reject(ValidationError::Range {
            field,
            allowed,
            actual,
        }))
    }
}

pub(crate) fn mismatch(
    kind: &'static str,
    slot: &'static str,
    found: &'static str,
    allowed: &'static [&'static str],
) -> ValidationError {
    reject(ValidationError::TypeMismatch {
        kind,
        slot,
        found,
        allowed,
    })
}
