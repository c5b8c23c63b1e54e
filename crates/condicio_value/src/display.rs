//! Conventional string form of values.
//!
//! This is the text substituted into failure messages: numbers without a
//! trailing `.0`, strings without quotes, arrays flattened with commas,
//! records as `[object Object]`.

use std::fmt;

use crate::Value;

/// Minimum stack space to keep available before descending into a nested
/// array (100KB red zone).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

pub(crate) fn fmt_value(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Undefined => f.write_str("undefined"),
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Number(n) => fmt_number(*n, f),
        Value::Str(s) => f.write_str(s),
        Value::Array(items) => fmt_array(items, f),
        Value::Object(_) => f.write_str("[object Object]"),
        Value::Function(func) => write!(f, "function {}() {{ [native code] }}", func.name()),
    }
}

/// Write a number the way it reads in source text.
///
/// Integral values drop the fractional part, negative zero prints as `0`,
/// and very large or very small magnitudes switch to exponent notation
/// with an explicit sign.
pub(crate) fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n == 0.0 {
        return f.write_str("0");
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{n}");
    }

    let exponent_form = format!("{n:e}");
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{mantissa}e+{exponent}")
        }
        _ => f.write_str(&exponent_form),
    }
}

fn fmt_array(items: &[Value], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        // null and undefined join as empty text
        if !item.is_nullish() {
            ensure_sufficient_stack(|| fmt_value(item, f))?;
        }
    }
    Ok(())
}
