//! Boolean questions about values.
//!
//! Type predicates (`is_number`, `is_object`, ...) are total. The bounds,
//! property and instance-of predicates first validate their own
//! parameters with the same checks callers use, so a malformed call fails
//! with `InvalidType` (or `IllegalArgument` for a negative size, or a
//! null/undefined failure for a missing object) before any answer is
//! computed.

use std::slice;

use condicio_value::ObjectValue;

use crate::checks::{
    check_argument, check_is_function, check_is_number, check_is_object, check_is_string,
    check_not_null, check_not_undefined,
};
use crate::{Failure, Message, Value};

const INDEX_NOT_NUMBER: &str = "Index must be a number";
const START_NOT_NUMBER: &str = "Starting index must be a number";
const END_NOT_NUMBER: &str = "Ending index must be a number";
const SIZE_NOT_NUMBER: &str = "Size must be a number";
const SIZE_NEGATIVE: &str = "Size must be positive; received {0} instead";
const OBJECT_NULL: &str = "Object parameter cannot be null";
const OBJECT_UNDEFINED: &str = "Object parameter cannot be undefined";
const OBJECT_NOT_RECORD: &str = "Object parameter must actually be an object";
const PROPERTY_NOT_STRING: &str = "Property parameter must be a string";
const TYPE_NULL: &str = "Type parameter cannot be null";
const TYPE_UNDEFINED: &str = "Type parameter cannot be undefined";
const TYPE_NOT_CONSTRUCTOR: &str = "Type parameter must be a constructor function";

// References

/// Whether `reference` is exactly `null` (not `undefined`).
#[inline]
pub fn is_null(reference: &Value) -> bool {
    reference.is_null()
}

/// Whether `reference` is exactly `undefined` (not `null`).
#[inline]
pub fn is_undefined(reference: &Value) -> bool {
    reference.is_undefined()
}

// Bounds

/// Whether `index` does not address an element of a sequence of `size`
/// elements: `index < 0 || index >= size`.
pub fn is_element_index_invalid(index: &Value, size: &Value) -> Result<bool, Failure> {
    let index = number_param(index, INDEX_NOT_NUMBER)?;
    let size = size_param(size)?;
    Ok(index < 0.0 || index >= size)
}

/// Whether `index` is not a position (gap) in a sequence of `size`
/// elements: `index < 0 || index > size`. Unlike an element index,
/// `index == size` is valid.
pub fn is_position_index_invalid(index: &Value, size: &Value) -> Result<bool, Failure> {
    let index = number_param(index, INDEX_NOT_NUMBER)?;
    let size = size_param(size)?;
    Ok(index < 0.0 || index > size)
}

/// Whether `[start, end]` is not a valid range of positions in a sequence
/// of `size` elements: `start < 0 || end > size || start > end`.
pub fn are_position_indexes_invalid(
    start: &Value,
    end: &Value,
    size: &Value,
) -> Result<bool, Failure> {
    let start = number_param(start, START_NOT_NUMBER)?;
    let end = number_param(end, END_NOT_NUMBER)?;
    let size = size_param(size)?;
    Ok(start < 0.0 || end > size || start > end)
}

fn number_param(value: &Value, message: &'static str) -> Result<f64, Failure> {
    check_is_number(value, Message::new(message))?;
    Ok(value.as_number().unwrap_or(f64::NAN))
}

fn size_param(size: &Value) -> Result<f64, Failure> {
    let n = number_param(size, SIZE_NOT_NUMBER)?;
    check_argument(
        n >= 0.0,
        Message::new(SIZE_NEGATIVE).with_args(slice::from_ref(size)),
    )?;
    Ok(n)
}

// Properties

/// Whether `property` is declared on `object` itself.
pub fn is_object_direct_property(object: &Value, property: &Value) -> Result<bool, Failure> {
    validate_record_and_property(object, property)?;
    Ok(lookup(object, property, ObjectValue::has_own_property))
}

/// Whether `property` is declared on `object` or anywhere on its
/// prototype chain.
pub fn is_object_property(object: &Value, property: &Value) -> Result<bool, Failure> {
    validate_record_and_property(object, property)?;
    Ok(lookup(object, property, ObjectValue::has_property))
}

fn validate_record_and_property(object: &Value, property: &Value) -> Result<(), Failure> {
    check_not_null(object, Message::new(OBJECT_NULL))?;
    check_not_undefined(object, Message::new(OBJECT_UNDEFINED))?;
    check_is_object(object, Message::new(OBJECT_NOT_RECORD))?;
    check_is_string(property, Message::new(PROPERTY_NOT_STRING))
}

fn lookup(object: &Value, property: &Value, found: fn(&ObjectValue, &str) -> bool) -> bool {
    match (object.as_object(), property.as_str()) {
        (Some(record), Some(name)) => found(record, name),
        _ => false,
    }
}

// Types

pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

/// `NaN` and the infinities are numbers too.
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::Str(_))
}

pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Only key/value records qualify: arrays, functions and `null` do not.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

/// Whether `object` is an instance of the constructor `ty`.
///
/// Neither parameter may be `null` or `undefined`, and `ty` must be a
/// function. Values other than records are never instances.
pub fn is_type(object: &Value, ty: &Value) -> Result<bool, Failure> {
    check_not_null(object, Message::new(OBJECT_NULL))?;
    check_not_undefined(object, Message::new(OBJECT_UNDEFINED))?;
    check_not_null(ty, Message::new(TYPE_NULL))?;
    check_not_undefined(ty, Message::new(TYPE_UNDEFINED))?;
    check_is_function(ty, Message::new(TYPE_NOT_CONSTRUCTOR))?;
    Ok(ty
        .as_function()
        .is_some_and(|constructor| object.instance_of(constructor)))
}

#[cfg(test)]
mod tests;
