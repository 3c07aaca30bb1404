//! Core arithmetic pipeline: tokenizer, evaluator and result formatting
//!
//! Errors are plain values. Nothing in this module holds state between calls.

pub mod evaluator;
pub mod format;
pub mod history;
mod operations;
pub mod token;
pub mod tokenizer;

pub use operations::Operator;

use serde::Serialize;
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Unrecognized character or malformed number literal
    #[error("Invalid input: {0}")]
    Lex(#[from] LexError),
    /// Token arrangement that cannot be evaluated
    #[error("Malformed expression: {reason}")]
    Structural {
        /// What was wrong with the arrangement
        reason: StructuralReason,
    },
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed (infinity)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
}

impl CalcError {
    /// Creates a structural error
    #[must_use]
    pub const fn structural(reason: StructuralReason) -> Self {
        Self::Structural { reason }
    }

    /// Returns the coarse category of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lexical,
            Self::Structural { .. } => ErrorKind::Structural,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::Overflow => ErrorKind::Overflow,
        }
    }
}

/// Coarse error category, for collaborators that render one message per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Tokenizer rejected the input
    Lexical,
    /// Tokens are in an order that cannot be evaluated
    Structural,
    /// Zero divisor
    DivisionByZero,
    /// Non-finite result
    Overflow,
}

impl ErrorKind {
    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Structural => "structural",
            Self::DivisionByZero => "division_by_zero",
            Self::Overflow => "overflow",
        }
    }
}

/// Lexical failure: the offending character and its zero-based character offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} '{ch}' at position {position}")]
pub struct LexError {
    /// Offending character
    pub ch: char,
    /// Character (not byte) offset of `ch` in the input
    pub position: usize,
    /// What went wrong
    pub kind: LexErrorKind,
}

impl LexError {
    /// Creates a new lexical error
    #[must_use]
    pub const fn new(ch: char, position: usize, kind: LexErrorKind) -> Self {
        Self { ch, position, kind }
    }

    /// Returns the same error with its position moved right by `offset` characters
    #[must_use]
    pub const fn shifted(self, offset: usize) -> Self {
        Self {
            position: self.position + offset,
            ..self
        }
    }
}

/// Reasons the tokenizer can reject input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// Character outside digits, `.`, `+ - * /` and whitespace
    UnexpectedChar,
    /// Second decimal point inside one number literal
    ExtraDecimalPoint,
    /// A decimal point with no digits on either side
    BareDecimalPoint,
    /// Literal too large for a finite `f64`
    LiteralOutOfRange,
}

impl std::fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedChar => write!(f, "Unexpected character"),
            Self::ExtraDecimalPoint => write!(f, "Extra decimal point"),
            Self::BareDecimalPoint => write!(f, "Decimal point without digits"),
            Self::LiteralOutOfRange => write!(f, "Number literal out of range starting with"),
        }
    }
}

/// Why a token sequence cannot be evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralReason {
    /// No tokens at all
    Empty,
    /// First token is an operator
    LeadingOperator,
    /// Last token is an operator
    TrailingOperator,
    /// Operator directly after another operator
    AdjacentOperators {
        /// Token index of the second operator
        position: usize,
    },
    /// Number directly after another number
    AdjacentNumbers {
        /// Token index of the second number
        position: usize,
    },
    /// Number token holding infinity or NaN
    NonFiniteNumber {
        /// Token index of the number
        position: usize,
    },
}

impl std::fmt::Display for StructuralReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty expression"),
            Self::LeadingOperator => write!(f, "expression starts with an operator"),
            Self::TrailingOperator => write!(f, "expression ends with an operator"),
            Self::AdjacentOperators { position } => {
                write!(f, "operator follows another operator at token {position}")
            }
            Self::AdjacentNumbers { position } => {
                write!(f, "number follows another number at token {position}")
            }
            Self::NonFiniteNumber { position } => {
                write!(f, "number at token {position} is not finite")
            }
        }
    }
}
