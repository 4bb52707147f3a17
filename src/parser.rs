//! JSON parser.
//!
//! Recursive descent over the token stream. Grammar:
//!
//! ```text
//! value  := object | array | string | number | "true" | "false" | "null"
//! object := "{" (member ("," member)*)? "}"
//! member := string ":" value
//! array  := "[" (value ("," value)*)? "]"
//! ```
//!
//! Container nesting is bounded by [`Limits::max_depth`] so adversarial
//! input fails with `DepthExceeded` instead of exhausting the call stack.
//! Parsing is fail-fast and tolerates nothing after the top-level value
//! except whitespace.

use log::debug;

use crate::error::{LexError, LexErrorKind, ParseError, Position};
use crate::lexer::{Lexer, Token};
use crate::limits::Limits;
use crate::number::Number;
use crate::value::{Map, Value};

/// Recursive-descent JSON parser.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    current_start: usize,
    limits: Limits,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over `input`, priming the first token.
    pub fn new(input: &'a str, limits: Limits) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        let current_start = lexer.token_start();
        Ok(Self {
            lexer,
            current,
            current_start,
            limits,
            depth: 0,
        })
    }

    /// Parse one complete document.
    pub fn parse(mut self) -> Result<Value, ParseError> {
        if self.current == Token::Eof {
            return Err(ParseError::EmptyInput);
        }
        let value = self.parse_value()?;
        if self.current != Token::Eof {
            return Err(ParseError::TrailingData {
                position: self.position(),
            });
        }
        Ok(value)
    }

    /// Position of the current token.
    fn position(&self) -> Position {
        self.lexer.position_at(self.current_start)
    }

    /// Advance to the next token.
    fn advance(&mut self) -> Result<(), ParseError> {
        self.current = self.lexer.next_token()?;
        self.current_start = self.lexer.token_start();
        Ok(())
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            found: self.current.describe(),
            expected,
            position: self.position(),
        }
    }

    /// Enter a container, enforcing the depth limit at its opening token.
    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.limits.max_depth {
            return Err(ParseError::DepthExceeded {
                limit: self.limits.max_depth,
                position: self.position(),
            });
        }
        Ok(())
    }

    /// Parse a single JSON value.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match &self.current {
            Token::Null => {
                self.advance()?;
                Ok(Value::Null)
            }
            Token::True => {
                self.advance()?;
                Ok(Value::Bool(true))
            }
            Token::False => {
                self.advance()?;
                Ok(Value::Bool(false))
            }
            Token::String(s) => {
                let value = Value::String(s.clone());
                self.advance()?;
                Ok(value)
            }
            Token::Number(raw) => {
                let number = Number::from_literal(raw).ok_or_else(|| ParseError::InvalidNumber {
                    position: self.position(),
                })?;
                self.advance()?;
                Ok(Value::Number(number))
            }
            Token::LeftBrace => self.parse_object(),
            Token::LeftBracket => self.parse_array(),
            _ => Err(self.unexpected("a value")),
        }
    }

    /// Parse a JSON object.
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        // Consume opening brace.
        self.advance()?;

        let mut map = Map::new();

        if self.current == Token::RightBrace {
            self.advance()?;
            self.depth -= 1;
            return Ok(Value::Object(map));
        }

        loop {
            let key = match &self.current {
                Token::String(s) => s.clone(),
                _ => return Err(self.unexpected("an object key")),
            };
            self.advance()?;

            if self.current != Token::Colon {
                return Err(self.unexpected("`:`"));
            }
            self.advance()?;

            let value = self.parse_value()?;
            // Duplicate keys: the last occurrence wins; the key keeps the
            // position of its first occurrence.
            map.insert(key, value);

            match &self.current {
                Token::Comma => {
                    self.advance()?;
                    // Trailing commas are a grammar error.
                    if self.current == Token::RightBrace {
                        return Err(self.unexpected("an object key"));
                    }
                }
                Token::RightBrace => {
                    self.advance()?;
                    break;
                }
                _ => return Err(self.unexpected("`,` or `}`")),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    /// Parse a JSON array.
    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        // Consume opening bracket.
        self.advance()?;

        let mut items = Vec::new();

        if self.current == Token::RightBracket {
            self.advance()?;
            self.depth -= 1;
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);

            match &self.current {
                Token::Comma => {
                    self.advance()?;
                    // Trailing commas are a grammar error.
                    if self.current == Token::RightBracket {
                        return Err(self.unexpected("a value"));
                    }
                }
                Token::RightBracket => {
                    self.advance()?;
                    break;
                }
                _ => return Err(self.unexpected("`,` or `]`")),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }
}

/// Parse a complete JSON document with default limits.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parse_with_limits(input, Limits::default())
}

/// Parse a complete JSON document with explicit limits.
pub fn parse_with_limits(input: &str, limits: Limits) -> Result<Value, ParseError> {
    debug!("parsing {} byte document", input.len());
    Parser::new(input, limits)?.parse()
}

/// Parse a raw byte buffer, validating UTF-8 first.
pub fn parse_slice(input: &[u8]) -> Result<Value, ParseError> {
    parse_slice_with_limits(input, Limits::default())
}

/// Parse a raw byte buffer with explicit limits.
pub fn parse_slice_with_limits(input: &[u8], limits: Limits) -> Result<Value, ParseError> {
    match std::str::from_utf8(input) {
        Ok(text) => parse_with_limits(text, limits),
        Err(error) => {
            let offset = error.valid_up_to();
            let prefix = std::str::from_utf8(&input[..offset]).unwrap_or_default();
            Err(ParseError::Lex(LexError {
                kind: LexErrorKind::InvalidCharacter,
                position: Position::locate(prefix, offset),
            }))
        }
    }
}
