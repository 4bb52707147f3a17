//! JSON number representation and formatting.
//!
//! Numbers are kept exact where the text allows it: integer literals within
//! the 64-bit signed range become [`Number::Int`], everything else (fractions,
//! exponents, out-of-range magnitudes) becomes [`Number::Float`]. Formatting
//! guarantees round-trip fidelity — re-parsing the emitted text yields a
//! number equal to the original under [`Number`]'s own equality.

use std::fmt;

/// A JSON number.
///
/// Equality is formatter-defined: `Int` by value, `Float` by bit pattern (so
/// `-0.0` and `0.0` stay distinct), and never across variants — the two
/// variants always serialize differently (`1` vs `1.0`).
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Exact 64-bit signed integer.
    Int(i64),
    /// Double-precision float.
    Float(f64),
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for Number {}

impl Number {
    /// Parse a raw JSON number literal.
    ///
    /// Validates the strict grammar
    /// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?` and converts: plain
    /// integers in `i64` range stay exact, everything else becomes a double.
    /// `-0` becomes `-0.0` so the sign survives. Returns `None` for grammar
    /// violations and for literals whose double conversion is not finite.
    pub fn from_literal(text: &str) -> Option<Number> {
        let bytes = text.as_bytes();
        let mut i = 0;
        if bytes.first() == Some(&b'-') {
            i += 1;
        }
        match bytes.get(i) {
            Some(b'0') => i += 1,
            Some(b'1'..=b'9') => {
                while matches!(bytes.get(i), Some(b'0'..=b'9')) {
                    i += 1;
                }
            }
            _ => return None,
        }
        let mut integral = true;
        if bytes.get(i) == Some(&b'.') {
            integral = false;
            i += 1;
            if !matches!(bytes.get(i), Some(b'0'..=b'9')) {
                return None;
            }
            while matches!(bytes.get(i), Some(b'0'..=b'9')) {
                i += 1;
            }
        }
        if matches!(bytes.get(i), Some(b'e' | b'E')) {
            integral = false;
            i += 1;
            if matches!(bytes.get(i), Some(b'+' | b'-')) {
                i += 1;
            }
            if !matches!(bytes.get(i), Some(b'0'..=b'9')) {
                return None;
            }
            while matches!(bytes.get(i), Some(b'0'..=b'9')) {
                i += 1;
            }
        }
        if i != bytes.len() {
            return None;
        }

        // "-0" must stay a float: i64 has no signed zero.
        if integral && text != "-0" {
            if let Ok(value) = text.parse::<i64>() {
                return Some(Number::Int(value));
            }
            // Magnitude beyond i64: fall through to the double path.
        }
        let value: f64 = text.parse().ok()?;
        value.is_finite().then_some(Number::Float(value))
    }

    /// Construct a float number, rejecting NaN and infinity.
    ///
    /// JSON has no representation for non-finite doubles; refusing them here
    /// is what keeps serialization infallible.
    pub fn from_f64(value: f64) -> Option<Number> {
        value.is_finite().then_some(Number::Float(value))
    }

    /// Returns true if this number is an exact integer.
    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// The exact integer value, if this is an `Int`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(value) => Some(*value),
            Number::Float(_) => None,
        }
    }

    /// The value as a double, converting exact integers (possibly lossily
    /// above 2^53).
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(value) => *value as f64,
            Number::Float(value) => *value,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(value) => f.write_str(itoa::Buffer::new().format(value)),
            Number::Float(value) => write_float(value, f),
        }
    }
}

/// Emit a finite double as JSON number text.
///
/// Rust's float formatting already produces the shortest decimal digits that
/// re-parse to the identical bit pattern; this only chooses the notation.
/// Integral values are forced to carry `.0` so they re-parse as floats, and
/// extreme magnitudes use exponent notation.
fn write_float(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        return write!(f, "{value:e}");
    }
    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    f.write_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(text: &str) -> Number {
        match Number::from_literal(text) {
            Some(number) => number,
            None => panic!("literal {text:?} should parse"),
        }
    }

    #[test]
    fn test_integer_literals() {
        assert_eq!(literal("0"), Number::Int(0));
        assert_eq!(literal("42"), Number::Int(42));
        assert_eq!(literal("-123"), Number::Int(-123));
        assert_eq!(literal("9223372036854775807"), Number::Int(i64::MAX));
        assert_eq!(literal("-9223372036854775808"), Number::Int(i64::MIN));
    }

    #[test]
    fn test_float_literals() {
        assert_eq!(literal("3.5"), Number::Float(3.5));
        assert_eq!(literal("-0.25"), Number::Float(-0.25));
        assert_eq!(literal("1e3"), Number::Float(1000.0));
        assert_eq!(literal("2.5E-2"), Number::Float(0.025));
    }

    #[test]
    fn test_out_of_range_integer_becomes_float() {
        // One above i64::MAX.
        assert_eq!(literal("9223372036854775808"), Number::Float(9.223372036854776e18));
    }

    #[test]
    fn test_negative_zero_stays_signed() {
        let number = literal("-0");
        assert_eq!(number, Number::Float(-0.0));
        assert_ne!(number, Number::Float(0.0));
        assert_eq!(literal("-0.0"), Number::Float(-0.0));
    }

    #[test]
    fn test_grammar_violations() {
        for text in [
            "", "-", "+1", "01", "0x1", "1.", ".5", "1.e3", "1e", "1e+", "1e1.5", "1 ", "--1",
            "NaN", "Infinity",
        ] {
            assert!(Number::from_literal(text).is_none(), "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_overflowing_exponent_rejected() {
        assert!(Number::from_literal("1e999").is_none());
        assert!(Number::from_literal("-1e999").is_none());
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert!(Number::from_f64(f64::NAN).is_none());
        assert!(Number::from_f64(f64::INFINITY).is_none());
        assert_eq!(Number::from_f64(1.5), Some(Number::Float(1.5)));
    }

    #[test]
    fn test_format_integers() {
        assert_eq!(Number::Int(0).to_string(), "0");
        assert_eq!(Number::Int(-7).to_string(), "-7");
        assert_eq!(Number::Int(i64::MAX).to_string(), "9223372036854775807");
    }

    #[test]
    fn test_format_floats() {
        assert_eq!(Number::Float(3.5).to_string(), "3.5");
        assert_eq!(Number::Float(1.0).to_string(), "1.0");
        assert_eq!(Number::Float(-0.0).to_string(), "-0.0");
        assert_eq!(Number::Float(0.0001).to_string(), "0.0001");
        assert_eq!(Number::Float(1e300).to_string(), "1e300");
        assert_eq!(Number::Float(2.5e-7).to_string(), "2.5e-7");
    }

    #[test]
    fn test_round_trip_bits() {
        for text in ["3.1400000000000001", "0.1", "1e300", "-2.5e-7", "123456.789"] {
            let first = literal(text);
            let second = literal(&first.to_string());
            assert_eq!(first, second, "round-trip through text must preserve bits");
        }
    }

    #[test]
    fn test_accessors() {
        assert!(Number::Int(5).is_int());
        assert_eq!(Number::Int(5).as_i64(), Some(5));
        assert_eq!(Number::Float(5.0).as_i64(), None);
        assert_eq!(Number::Int(5).as_f64(), 5.0);
        assert_eq!(Number::Float(2.5).as_f64(), 2.5);
    }

    #[test]
    fn test_cross_variant_inequality() {
        assert_ne!(Number::Int(1), Number::Float(1.0));
    }
}
