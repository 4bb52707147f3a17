//! JSON serialization.
//!
//! Converts a [`Value`] tree back into text. Serialization is infallible: a
//! value built through the public API cannot contain anything the text form
//! cannot represent (Rust strings cannot hold unpaired surrogates, and
//! non-finite doubles are rejected at construction).

use crate::value::{Map, Value};

/// Serializer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces per nesting level; `None` selects compact output.
    pub indent: Option<usize>,
    /// Emit object members in key order (Unicode code point order) instead
    /// of insertion order, for deterministic diffable output.
    pub sort_keys: bool,
    /// Escape every scalar value above U+007F as `\uXXXX` (surrogate pairs
    /// above U+FFFF) instead of emitting raw UTF-8.
    pub escape_non_ascii: bool,
}

impl WriteOptions {
    /// Compact output: no insignificant whitespace, insertion order, raw
    /// UTF-8.
    pub const fn compact() -> Self {
        Self {
            indent: None,
            sort_keys: false,
            escape_non_ascii: false,
        }
    }

    /// Pretty output indented by `width` spaces per nesting level.
    pub const fn pretty(width: usize) -> Self {
        Self {
            indent: Some(width),
            sort_keys: false,
            escape_non_ascii: false,
        }
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self::compact()
    }
}

/// Serialize a value compactly.
pub fn to_string(value: &Value) -> String {
    to_string_with(value, &WriteOptions::compact())
}

/// Serialize a value with explicit options.
pub fn to_string_with(value: &Value, options: &WriteOptions) -> String {
    let mut emitter = Emitter {
        out: String::new(),
        options,
        depth: 0,
    };
    emitter.write_value(value);
    emitter.out
}

/// Serialize a value compactly to a UTF-8 byte buffer.
pub fn to_vec(value: &Value) -> Vec<u8> {
    to_string(value).into_bytes()
}

/// Serialize a value to a UTF-8 byte buffer with explicit options.
pub fn to_vec_with(value: &Value, options: &WriteOptions) -> Vec<u8> {
    to_string_with(value, options).into_bytes()
}

struct Emitter<'a> {
    out: String,
    options: &'a WriteOptions,
    depth: usize,
}

impl Emitter<'_> {
    fn write_value(&mut self, value: &Value) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Number(number) => self.out.push_str(&number.to_string()),
            Value::String(s) => self.write_string(s),
            Value::Array(items) => self.write_array(items),
            Value::Object(map) => self.write_object(map),
        }
    }

    /// Emit a string with JSON escaping.
    fn write_string(&mut self, s: &str) {
        self.out.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\x08' => self.out.push_str("\\b"),
                '\x0C' => self.out.push_str("\\f"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                c if (c as u32) < 0x20 => {
                    self.out.push_str(&format!("\\u{:04x}", c as u32));
                }
                c if self.options.escape_non_ascii && (c as u32) > 0x7F => {
                    let mut units = [0u16; 2];
                    for unit in c.encode_utf16(&mut units) {
                        self.out.push_str(&format!("\\u{unit:04x}"));
                    }
                }
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }

    fn write_array(&mut self, items: &[Value]) {
        if items.is_empty() {
            self.out.push_str("[]");
            return;
        }
        self.out.push('[');
        self.depth += 1;
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                self.out.push(',');
            }
            self.break_line();
            self.write_value(item);
        }
        self.depth -= 1;
        self.break_line();
        self.out.push(']');
    }

    fn write_object(&mut self, map: &Map) {
        if map.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push('{');
        self.depth += 1;
        if self.options.sort_keys {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            for (index, key) in keys.iter().enumerate() {
                if index > 0 {
                    self.out.push(',');
                }
                self.break_line();
                self.write_string(key);
                self.write_colon();
                if let Some(value) = map.get(*key) {
                    self.write_value(value);
                }
            }
        } else {
            for (index, (key, value)) in map.iter().enumerate() {
                if index > 0 {
                    self.out.push(',');
                }
                self.break_line();
                self.write_string(key);
                self.write_colon();
                self.write_value(value);
            }
        }
        self.depth -= 1;
        self.break_line();
        self.out.push('}');
    }

    /// Line break plus indentation in pretty mode; nothing in compact mode.
    fn break_line(&mut self) {
        if let Some(width) = self.options.indent {
            self.out.push('\n');
            for _ in 0..self.depth * width {
                self.out.push(' ');
            }
        }
    }

    fn write_colon(&mut self) {
        if self.options.indent.is_some() {
            self.out.push_str(": ");
        } else {
            self.out.push(':');
        }
    }
}
