//! quadcalc - four-function arithmetic expression evaluator
//!
//! Input strings built from digits, decimal points and `+ - * /` are turned
//! into tokens and evaluated with the usual precedence: `*` and `/` bind
//! tighter than `+` and `-`, and operators of equal precedence apply left to
//! right. Every failure comes back as a typed [`CalcError`] value.
//!
//! # Pipeline
//!
//! ```text
//! &str --tokenize--> Vec<Token> --evaluate--> f64 --format_result--> String
//! ```
//!
//! # Example
//!
//! ```rust
//! use quadcalc::prelude::*;
//!
//! assert_eq!(evaluate_expression("2+3*4"), Ok(14.0));
//! assert_eq!(evaluate_expression("10/2/5"), Ok(1.0));
//! assert_eq!(evaluate_expression("5/0"), Err(CalcError::DivisionByZero));
//! assert_eq!(format_result(evaluate_expression("0.1+0.2").unwrap()), "0.3");
//!
//! // A keypad front end keeps its buffer in a Session
//! let mut session = Session::new();
//! session.push_str("7*6=").unwrap();
//! assert_eq!(session.display(), "42");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod session;

pub use crate::core::evaluator::{evaluate, evaluate_expression};
pub use crate::core::format::format_result;
pub use crate::core::tokenizer::tokenize;
pub use crate::core::{CalcError, CalcResult, ErrorKind, LexError};
pub use crate::session::Session;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::{check_structure, evaluate, evaluate_expression, Evaluator};
    pub use crate::core::format::format_result;
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::token::Token;
    pub use crate::core::tokenizer::{tokenize, Tokenizer};
    pub use crate::core::{
        CalcError, CalcResult, ErrorKind, LexError, LexErrorKind, Operator, StructuralReason,
    };
    pub use crate::session::{ErrorStyle, Key, Session, SessionError};
}
