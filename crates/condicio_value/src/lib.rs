//! Condicio Value - runtime values classified by precondition checks.
//!
//! Checks answer questions such as "is this a number?" or "does this
//! record have that property?", so they operate on a small dynamic value
//! model rather than on static Rust types:
//!
//! - `undefined` and `null` are distinct values
//! - numbers are `f64`
//! - records carry their own properties plus a prototype chain
//! - functions double as constructors for instance-of tests
//!
//! # Construction
//!
//! All heap allocations go through `Value::` factory methods or the
//! `From` conversions; `Heap<T>` has no public constructor.
//!
//! ```text
//! let s = Value::string("hello");
//! let list = Value::array(vec![Value::from(1), Value::from(2)]);
//! let point = Value::object(ObjectValue::new().with_property("x", 0));
//! ```
//!
//! # Thread Safety
//!
//! Heap values are `Arc`-backed and immutable, so `Value` is `Send + Sync`.

mod display;
mod heap;
mod object;

use std::fmt;

pub use heap::Heap;
pub use object::{Ancestors, FunctionValue, ObjectValue};

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    /// The absent value.
    Undefined,
    /// The explicit "no object" value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// String value.
    Str(Heap<String>),
    /// Ordered sequence of values.
    Array(Heap<Vec<Value>>),
    /// Key/value record with a prototype chain.
    Object(Heap<ObjectValue>),
    /// Named function, usable as a constructor.
    Function(Heap<FunctionValue>),
}

// Factory Methods

impl Value {
    /// Create a numeric value.
    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create an array value.
    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(items))
    }

    /// Create a record value.
    #[inline]
    pub fn object(object: ObjectValue) -> Self {
        Value::Object(Heap::new(object))
    }

    /// Create a function value.
    #[inline]
    pub fn function(function: FunctionValue) -> Self {
        Value::Function(Heap::new(function))
    }
}

// Value Methods

impl Value {
    /// Whether this is exactly `null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether this is exactly `undefined`.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Whether this is `null` or `undefined`.
    #[inline]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionValue> {
        match self {
            Value::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Instance-of: only records can be instances, and only when the
    /// constructor's prototype sits on their chain.
    pub fn instance_of(&self, constructor: &FunctionValue) -> bool {
        self.as_object()
            .is_some_and(|object| constructor.is_instance(object))
    }

    /// Elements of an array this value solely owns.
    fn unique_array_items(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Heap::get_mut(items),
            _ => None,
        }
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => {
                write!(f, "Number(")?;
                display::fmt_number(*n, f)?;
                write!(f, ")")
            }
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Array(items) => {
                display::ensure_sufficient_stack(|| write!(f, "Array({:?})", &**items))
            }
            Value::Object(object) => {
                display::ensure_sufficient_stack(|| write!(f, "Object({:?})", &**object))
            }
            Value::Function(func) => write!(f, "Function({})", func.name()),
        }
    }
}

/// The conventional string form: `undefined`, `null`, `10`, `1.5`,
/// unquoted strings, comma-joined arrays, `[object Object]`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_value(self, f)
    }
}

/// Primitives compare by value (so `NaN != NaN`), arrays element-wise,
/// records and functions by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => display::ensure_sufficient_stack(|| a == b),
            (Value::Object(a), Value::Object(b)) => Heap::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Nested arrays are released with an explicit work list, so dropping a
/// deeply nested array cannot overflow the stack. Elements still shared
/// with another handle only lose a reference.
impl Drop for Value {
    fn drop(&mut self) {
        let Some(items) = self.unique_array_items() else {
            return;
        };
        let mut pending = std::mem::take(items);
        while let Some(mut value) = pending.pop() {
            if let Some(items) = value.unique_array_items() {
                pending.append(items);
            }
        }
    }
}

// Conversions

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "numbers are f64; magnitudes past 2^53 round like any other f64"
)]
impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "numbers are f64; magnitudes past 2^53 round like any other f64"
)]
impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "numbers are f64; sizes past 2^53 round like any other f64"
)]
impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}

impl From<ObjectValue> for Value {
    fn from(object: ObjectValue) -> Self {
        Value::object(object)
    }
}

impl From<FunctionValue> for Value {
    fn from(function: FunctionValue) -> Self {
        Value::function(function)
    }
}
