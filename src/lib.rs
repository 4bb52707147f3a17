//! HollowCore JSON value engine.
//!
//! Parses complete UTF-8 text into an owned [`Value`] tree and serializes
//! trees back to text, with exact integer handling, shortest-round-trip
//! doubles, insertion-ordered objects, and a configurable nesting depth
//! limit.
//!
//! # Architecture
//!
//! The engine is organized into focused modules:
//!
//! - [`value`] - The `Value` tagged union and its accessor/mutation API
//! - [`number`] - Number representation and round-trip formatting
//! - [`lexer`] - Tokenizer with escape decoding and position tracking
//! - [`parser`] - Recursive descent parser with depth limiting
//! - [`serializer`] - Compact and pretty text emission
//! - [`limits`] - Parse resource bounds
//! - [`error`] - Error taxonomy with positional diagnostics
//!
//! # Example
//!
//! ```
//! use hollowcore_json::{parse, to_string};
//!
//! let value = parse("{\"b\": 2, \"a\": 1}").unwrap();
//!
//! // Compact serialization preserves member order.
//! assert_eq!(to_string(&value), "{\"b\":2,\"a\":1}");
//! ```

// Library code must avoid unwrap/expect/panic; every failure is a typed
// error. Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod lexer;
pub mod limits;
pub mod number;
pub mod parser;
pub mod serializer;
pub mod value;

// Re-export the everyday surface.
pub use error::{LexError, LexErrorKind, ParseError, Position, TypeMismatch};
pub use limits::Limits;
pub use number::Number;
pub use parser::{parse, parse_slice, parse_slice_with_limits, parse_with_limits};
pub use serializer::{to_string, to_string_with, to_vec, to_vec_with, WriteOptions};
pub use value::{Map, Value, ValueKind};
