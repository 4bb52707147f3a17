//! The JSON value model.
//!
//! A parsed document is an owned tree of [`Value`]s: the parent exclusively
//! owns its children, so the tree is acyclic by construction and needs no
//! shared ownership. Object members keep their insertion order; duplicate
//! keys resolved during parsing keep the first occurrence's position with
//! the last occurrence's value.

use indexmap::IndexMap;

use std::fmt;

use crate::error::TypeMismatch;
use crate::number::Number;

/// Ordered JSON object map.
///
/// Insertion order is preserved. Replacing an existing key keeps it at its
/// original position; removal through [`Value::remove`] preserves the order
/// of the remaining members.
pub type Map = IndexMap<String, Value>;

/// A JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// JSON null literal.
    #[default]
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number, exact integer or double.
    Number(Number),
    /// JSON string: a sequence of Unicode scalar values.
    String(String),
    /// JSON array of values.
    Array(Vec<Value>),
    /// JSON object with insertion-ordered keys.
    Object(Map),
}

/// The tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// The null literal.
    Null,
    /// A boolean.
    Bool,
    /// A number.
    Number,
    /// A string.
    String,
    /// An array.
    Array,
    /// An object.
    Object,
}

impl ValueKind {
    /// Lowercase kind name, used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// The tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Returns true if this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true if this is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The boolean value, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The number, if this is a `Number`.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// The exact integer value, if this is an integer `Number`.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(|number| number.as_i64())
    }

    /// The numeric value as a double, if this is a `Number`.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(|number| number.as_f64())
    }

    /// A reference to the string, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    /// A reference to the elements, if this is an `Array`.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// A reference to the members, if this is an `Object`.
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Get an object member by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Get an array element by index.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    fn mismatch(&self, expected: ValueKind) -> TypeMismatch {
        TypeMismatch {
            expected,
            actual: self.kind(),
        }
    }

    /// The boolean value, or `TypeMismatch` for any other kind.
    pub fn try_bool(&self) -> Result<bool, TypeMismatch> {
        self.as_bool().ok_or(self.mismatch(ValueKind::Bool))
    }

    /// The number, or `TypeMismatch` for any other kind.
    pub fn try_number(&self) -> Result<Number, TypeMismatch> {
        self.as_number().ok_or(self.mismatch(ValueKind::Number))
    }

    /// The string, or `TypeMismatch` for any other kind.
    pub fn try_str(&self) -> Result<&str, TypeMismatch> {
        self.as_str().ok_or(self.mismatch(ValueKind::String))
    }

    /// The array elements, or `TypeMismatch` for any other kind.
    pub fn try_array(&self) -> Result<&Vec<Value>, TypeMismatch> {
        self.as_array().ok_or(self.mismatch(ValueKind::Array))
    }

    /// The object members, or `TypeMismatch` for any other kind.
    pub fn try_object(&self) -> Result<&Map, TypeMismatch> {
        self.as_object().ok_or(self.mismatch(ValueKind::Object))
    }

    /// Append an element to an array.
    pub fn push(&mut self, value: Value) -> Result<(), TypeMismatch> {
        match self {
            Value::Array(items) => {
                items.push(value);
                Ok(())
            }
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    /// Set an object member, returning the replaced value if the key was
    /// present. An existing key keeps its position.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: Value,
    ) -> Result<Option<Value>, TypeMismatch> {
        match self {
            Value::Object(map) => Ok(map.insert(key.into(), value)),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }

    /// Remove an object member by key, preserving the order of the rest.
    pub fn remove(&mut self, key: &str) -> Result<Option<Value>, TypeMismatch> {
        match self {
            Value::Object(map) => Ok(map.shift_remove(key)),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Int(i64::from(value)))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Int(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Int(i64::from(value)))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        // Non-finite doubles have no JSON representation; the serde_json
        // convention maps them to null.
        match Number::from_f64(value) {
            Some(number) => Value::Number(number),
            None => Value::Null,
        }
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}
