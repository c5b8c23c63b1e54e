//! Records and constructors.
//!
//! An [`ObjectValue`] owns a table of properties and may point at a
//! prototype record. Lookups that are not satisfied by the object's own
//! table continue along that prototype chain. A [`FunctionValue`] doubles
//! as a constructor: every object it builds shares its prototype record,
//! which is what instance-of tests against.
//!
//! Records are immutable once wrapped in a `Value`, so a chain can never
//! loop back on itself.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{Heap, Value};

// ObjectValue

/// A key/value record with an optional prototype.
#[derive(Clone, Default)]
pub struct ObjectValue {
    properties: FxHashMap<String, Value>,
    prototype: Option<Heap<ObjectValue>>,
}

impl ObjectValue {
    /// Create an empty record with no prototype.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an own property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Set the prototype this record inherits from.
    #[must_use]
    pub fn with_prototype(self, prototype: ObjectValue) -> Self {
        self.with_shared_prototype(Heap::new(prototype))
    }

    pub(crate) fn with_shared_prototype(mut self, prototype: Heap<ObjectValue>) -> Self {
        self.prototype = Some(prototype);
        self
    }

    /// The immediate prototype, if any.
    pub fn prototype(&self) -> Option<&ObjectValue> {
        self.prototype.as_deref()
    }

    /// Look up a property declared on this record itself.
    pub fn own_property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Whether `name` is declared on this record itself.
    pub fn has_own_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Whether `name` is declared on this record or any of its ancestors.
    pub fn has_property(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Resolve `name`, preferring the nearest declaration along the chain.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.own_property(name).or_else(|| {
            self.ancestors()
                .find_map(|ancestor| ancestor.own_property(name))
        })
    }

    /// Walk the prototype chain, nearest ancestor first.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: self.prototype.as_ref(),
        }
    }

    /// Own property names in sorted order.
    pub fn property_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.properties.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of own properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the record declares no own properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for name in self.property_names() {
            if let Some(value) = self.properties.get(name) {
                map.entry(&name, value);
            }
        }
        map.finish()
    }
}

/// Iterator over a record's prototype chain.
///
/// Yields the shared heap cells so callers can compare by identity.
pub struct Ancestors<'a> {
    next: Option<&'a Heap<ObjectValue>>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Heap<ObjectValue>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.prototype.as_ref();
        Some(current)
    }
}

// FunctionValue

/// A named function that can construct records.
#[derive(Clone)]
pub struct FunctionValue {
    name: String,
    prototype: Heap<ObjectValue>,
}

impl FunctionValue {
    /// A constructor with an empty prototype.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_prototype(name, ObjectValue::new())
    }

    /// A constructor whose instances inherit the properties of `prototype`.
    pub fn with_prototype(name: impl Into<String>, prototype: ObjectValue) -> Self {
        FunctionValue {
            name: name.into(),
            prototype: Heap::new(prototype),
        }
    }

    /// A constructor whose prototype inherits from `parent`'s prototype.
    ///
    /// Instances of the new constructor are also instances of `parent`.
    pub fn extending(name: impl Into<String>, parent: &FunctionValue, prototype: ObjectValue) -> Self {
        FunctionValue {
            name: name.into(),
            prototype: Heap::new(prototype.with_shared_prototype(parent.prototype.clone())),
        }
    }

    /// The function's name (empty for anonymous functions).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The record shared by every instance this constructor builds.
    pub fn prototype(&self) -> &ObjectValue {
        &self.prototype
    }

    /// Build an instance: `fields` become own properties and the
    /// constructor's prototype replaces any prototype `fields` carried.
    pub fn construct(&self, fields: ObjectValue) -> ObjectValue {
        fields.with_shared_prototype(self.prototype.clone())
    }

    /// Instance-of: whether this constructor's prototype appears anywhere
    /// on `object`'s chain.
    pub fn is_instance(&self, object: &ObjectValue) -> bool {
        object
            .ancestors()
            .any(|ancestor| Heap::ptr_eq(ancestor, &self.prototype))
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
