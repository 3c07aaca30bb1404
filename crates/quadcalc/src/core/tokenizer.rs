//! Tokenizer: raw input to an ordered token sequence
//!
//! Positions in errors are character offsets, so they line up with what a
//! display shows even when the input holds multi-byte characters.

use crate::core::token::Token;
use crate::core::{LexError, LexErrorKind, Operator};

/// Tokenizes `input` in one pass
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(input).tokenize()
}

/// Tokenizer for converting expression strings to tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    /// Byte offset into `input`
    pos: usize,
    /// Character offset into `input`
    column: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            column: 0,
        }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        if ch.is_ascii_digit() || ch == '.' {
            return self.read_number().map(Some);
        }

        match Operator::from_char(ch) {
            Some(op) => {
                self.advance();
                Ok(Some(Token::Operator(op)))
            }
            None => Err(LexError::new(ch, self.column, LexErrorKind::UnexpectedChar)),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
            self.column += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let start_column = self.column;
        let mut has_dot = false;
        let mut has_digit = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                has_digit = true;
                self.advance();
            } else if ch == '.' {
                if has_dot {
                    return Err(LexError::new(
                        ch,
                        self.column,
                        LexErrorKind::ExtraDecimalPoint,
                    ));
                }
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        if !has_digit {
            return Err(LexError::new(
                '.',
                start_column,
                LexErrorKind::BareDecimalPoint,
            ));
        }

        let literal = &self.input[start..self.pos];
        let first = literal.chars().next().unwrap_or('0');
        literal
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Token::Number)
            .ok_or_else(|| LexError::new(first, start_column, LexErrorKind::LiteralOutOfRange))
    }
}
