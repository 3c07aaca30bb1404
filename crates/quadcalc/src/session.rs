//! Keypad session: the input buffer and what the display shows
//!
//! This is the state a calculator front end owns. It hands the core plain
//! strings and tokens and keeps the outcome for display.

use crate::core::evaluator::evaluate;
use crate::core::format::format_result;
use crate::core::history::History;
use crate::core::token::Token;
use crate::core::tokenizer::tokenize;
use crate::core::{CalcError, CalcResult, Operator};
use thiserror::Error;
use tracing::debug;

/// Text shown for any failed evaluation in [`ErrorStyle::Opaque`]
pub const ERROR_DISPLAY: &str = "Error";

/// A keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Arithmetic operator
    Operator(Operator),
    /// Evaluate the buffer
    Equals,
    /// Reset the buffer
    Clear,
}

impl Key {
    /// Maps a keypad character to its key
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => ch
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .map(Self::Digit),
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            'C' | 'c' => Some(Self::Clear),
            _ => Operator::from_char(ch).map(Self::Operator),
        }
    }

    /// Character appended to the buffer, or None for action keys
    #[must_use]
    pub fn to_char(self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
            Self::Decimal => Some('.'),
            Self::Operator(op) => Some(op.symbol()),
            Self::Equals | Self::Clear => None,
        }
    }
}

/// How a failed evaluation is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorStyle {
    /// Every failure shows [`ERROR_DISPLAY`]
    #[default]
    Opaque,
    /// The error's own message
    Detailed,
}

/// Rejected key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Character with no keypad button
    #[error("No key for '{key}'")]
    UnsupportedKey {
        /// The character pressed
        key: char,
    },
    /// Digit key outside 0-9
    #[error("Invalid digit key {digit}")]
    InvalidDigit {
        /// The digit value
        digit: u8,
    },
}

/// Result left on the display by `=`, reused as the first operand
#[derive(Debug, Clone, Copy, PartialEq)]
struct Carry {
    value: f64,
    /// Character length of the formatted value at the front of the buffer
    len: usize,
}

/// Keypad calculator state
#[derive(Debug, Clone)]
pub struct Session {
    buffer: String,
    carry: Option<Carry>,
    last_error: Option<CalcError>,
    history: History,
    error_style: ErrorStyle,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates an empty session
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            carry: None,
            last_error: None,
            history: History::new(),
            error_style: ErrorStyle::default(),
        }
    }

    /// Sets how errors are rendered
    #[must_use]
    pub fn with_error_style(mut self, error_style: ErrorStyle) -> Self {
        self.error_style = error_style;
        self
    }

    /// Current input buffer
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Error from the last `=`, if it failed
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Successful evaluations
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Text to show on the display
    #[must_use]
    pub fn display(&self) -> String {
        match (&self.last_error, self.error_style) {
            (Some(_), ErrorStyle::Opaque) => ERROR_DISPLAY.to_string(),
            (Some(err), ErrorStyle::Detailed) => err.to_string(),
            (None, _) => self.buffer.clone(),
        }
    }

    /// Handles one key press
    pub fn press(&mut self, key: Key) -> Result<(), SessionError> {
        match key {
            Key::Clear => self.clear(),
            Key::Equals => {
                // Failures are kept in `last_error` for display
                let _ = self.evaluate();
            }
            Key::Digit(digit) if digit > 9 => return Err(SessionError::InvalidDigit { digit }),
            Key::Digit(_) | Key::Decimal => {
                let extends_carry = self.buffer_is_carry();
                self.append(key);
                if extends_carry {
                    self.extend_carry();
                }
            }
            Key::Operator(_) => self.append(key),
        }
        Ok(())
    }

    /// Handles one keypad character
    pub fn push_char(&mut self, ch: char) -> Result<(), SessionError> {
        let key = Key::from_char(ch).ok_or(SessionError::UnsupportedKey { key: ch })?;
        self.press(key)
    }

    /// Handles each character of `keys` in order, ignoring whitespace
    pub fn push_str(&mut self, keys: &str) -> Result<(), SessionError> {
        keys.chars()
            .filter(|ch| !ch.is_whitespace())
            .try_for_each(|ch| self.push_char(ch))
    }

    /// Empties the buffer and drops any error
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.carry = None;
        self.last_error = None;
    }

    /// Evaluates the buffer
    ///
    /// On success the buffer is replaced by the formatted result and the
    /// expression is recorded in history. On failure the buffer is emptied
    /// and the error is kept until the next key press.
    pub fn evaluate(&mut self) -> CalcResult<f64> {
        let expression = std::mem::take(&mut self.buffer);
        let carry = self.carry.take();

        match Self::evaluate_buffer(&expression, carry) {
            Ok(value) => {
                self.history.record(&expression, value);
                self.buffer = format_result(value);
                self.carry = Some(Carry {
                    value,
                    len: self.buffer.chars().count(),
                });
                self.last_error = None;
                Ok(value)
            }
            Err(err) => {
                debug!(expression = %expression, error = %err, "keypad evaluation failed");
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// The carried result goes in as one number token, so a negative
    /// result can start the next expression without unary minus support.
    fn evaluate_buffer(expression: &str, carry: Option<Carry>) -> CalcResult<f64> {
        let tokens = match carry {
            Some(carry) => {
                let rest: String = expression.chars().skip(carry.len).collect();
                let mut tokens = vec![Token::Number(carry.value)];
                tokens.extend(tokenize(&rest).map_err(|e| e.shifted(carry.len))?);
                tokens
            }
            None => tokenize(expression)?,
        };
        evaluate(&tokens)
    }

    fn buffer_is_carry(&self) -> bool {
        self.carry
            .is_some_and(|carry| self.buffer.chars().count() == carry.len)
    }

    /// A digit typed onto a shown result becomes part of that literal
    ///
    /// The carry then stands for the whole extended buffer. If the text no
    /// longer reads as one number the carry is dropped and the buffer is
    /// tokenized as typed.
    fn extend_carry(&mut self) {
        self.carry = self
            .buffer
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(|value| Carry {
                value,
                len: self.buffer.chars().count(),
            });
    }

    fn append(&mut self, key: Key) {
        if self.last_error.take().is_some() {
            self.buffer.clear();
            self.carry = None;
        }
        if let Some(ch) = key.to_char() {
            self.buffer.push(ch);
        }
    }
}
