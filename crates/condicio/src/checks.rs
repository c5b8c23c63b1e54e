//! Precondition checks.
//!
//! Each check returns `Ok(())` when its condition holds and otherwise an
//! `Err(Failure)` of the kind listed below. The trailing [`Message`]
//! replaces the default text; see [`generate_failure`] for how templates
//! and arguments resolve.
//!
//! | Check                           | Kind on failure       |
//! |---------------------------------|-----------------------|
//! | `check_argument`                | `IllegalArgument`     |
//! | `check_state`                   | `IllegalState`        |
//! | `check_not_null`                | `NullReference`       |
//! | `check_not_undefined`           | `UndefinedReference`  |
//! | `check_element_index` and both position checks | `IndexOutOfBounds` |
//! | `check_object_property`, `check_object_direct_property` | `PropertyNotFound` |
//! | `check_is_*`                    | `InvalidType`         |
//!
//! Checks that take bounds, properties or constructors validate those
//! parameters first (see [`crate::predicates`]); a malformed call fails
//! with the pre-validation failure no matter what message was supplied.

use crate::predicates::{
    are_position_indexes_invalid, is_array, is_boolean, is_element_index_invalid, is_function,
    is_null, is_number, is_object, is_object_direct_property, is_object_property,
    is_position_index_invalid, is_string, is_type, is_undefined,
};
use crate::{generate_failure, CheckResult, FailureKind, Message, Value};

/// Fail with `kind` unless `holds`. The default message is only built on
/// failure.
#[inline]
fn ensure<D: Into<String>>(
    holds: bool,
    message: Message<'_>,
    kind: FailureKind,
    default_message: impl FnOnce() -> D,
) -> CheckResult {
    if holds {
        Ok(())
    } else {
        Err(generate_failure(default_message(), message, kind))
    }
}

// Expressions

/// Check a condition on the caller's arguments.
pub fn check_argument(expression: bool, message: Message<'_>) -> CheckResult {
    ensure(expression, message, FailureKind::IllegalArgument, || {
        "Argument does not satisfy expression"
    })
}

/// Check a condition on the state of the receiver.
pub fn check_state(expression: bool, message: Message<'_>) -> CheckResult {
    ensure(expression, message, FailureKind::IllegalState, || {
        "State does not satisfy expression"
    })
}

// References

/// Fails only for `null`; `undefined` passes.
pub fn check_not_null(reference: &Value, message: Message<'_>) -> CheckResult {
    ensure(!is_null(reference), message, FailureKind::NullReference, || {
        "Argument cannot be null"
    })
}

/// Fails only for `undefined`; `null` passes.
pub fn check_not_undefined(reference: &Value, message: Message<'_>) -> CheckResult {
    ensure(
        !is_undefined(reference),
        message,
        FailureKind::UndefinedReference,
        || "Argument cannot be undefined",
    )
}

// Bounds

pub fn check_element_index(index: &Value, size: &Value, message: Message<'_>) -> CheckResult {
    let invalid = is_element_index_invalid(index, size)?;
    ensure(!invalid, message, FailureKind::IndexOutOfBounds, || {
        format!("Index {index} is not a valid index in array of size {size}")
    })
}

/// Like [`check_element_index`], except `index == size` is accepted.
pub fn check_position_index(index: &Value, size: &Value, message: Message<'_>) -> CheckResult {
    let invalid = is_position_index_invalid(index, size)?;
    ensure(!invalid, message, FailureKind::IndexOutOfBounds, || {
        format!("Index {index} is not a valid position in array of size {size}")
    })
}

pub fn check_position_indexes(
    start: &Value,
    end: &Value,
    size: &Value,
    message: Message<'_>,
) -> CheckResult {
    let invalid = are_position_indexes_invalid(start, end, size)?;
    ensure(!invalid, message, FailureKind::IndexOutOfBounds, || {
        format!(
            "Positions between indexes {start} and {end} are not valid positions in array of size {size}"
        )
    })
}

// Properties

pub fn check_object_direct_property(
    object: &Value,
    property: &Value,
    message: Message<'_>,
) -> CheckResult {
    let found = is_object_direct_property(object, property)?;
    ensure(found, message, FailureKind::PropertyNotFound, || {
        format!("Property '{property}' is not a valid, direct property")
    })
}

/// Inherited properties count.
pub fn check_object_property(object: &Value, property: &Value, message: Message<'_>) -> CheckResult {
    let found = is_object_property(object, property)?;
    ensure(found, message, FailureKind::PropertyNotFound, || {
        format!("Property '{property}' is not a valid property")
    })
}

// Types

/// Generates one `check_is_*` function per type predicate.
macro_rules! define_type_checks {
    ($($(#[$meta:meta])* $name:ident => $predicate:ident, $default:literal;)*) => {
        $(
            $(#[$meta])*
            pub fn $name(value: &Value, message: Message<'_>) -> CheckResult {
                ensure($predicate(value), message, FailureKind::InvalidType, || $default)
            }
        )*
    };
}

define_type_checks! {
    check_is_boolean => is_boolean, "Argument is not a boolean";
    /// `NaN` passes.
    check_is_number => is_number, "Argument is not a number";
    check_is_string => is_string, "Argument is not a string";
    check_is_array => is_array, "Argument is not an array";
    /// Arrays, functions and `null` fail.
    check_is_object => is_object, "Argument is not an object";
    check_is_function => is_function, "Argument is not a function";
}

/// Check that `object` is an instance of the constructor `ty`.
pub fn check_is_type(object: &Value, ty: &Value, message: Message<'_>) -> CheckResult {
    let instance = is_type(object, ty)?;
    ensure(instance, message, FailureKind::InvalidType, || {
        let name = ty.as_function().map(|constructor| constructor.name());
        format!("Argument is not an instance of {}", name.unwrap_or_default())
    })
}
