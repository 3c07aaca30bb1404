//! Two-level precedence climbing over a token slice
//!
//! Grammar:
//! ```text
//! expression ::= term (('+' | '-') term)*
//! term       ::= factor (('*' | '/') factor)*
//! factor     ::= NUMBER
//! ```
//!
//! Both loops fold to the left, so `10 / 2 / 5` is `(10 / 2) / 5`.

use crate::core::token::Token;
use crate::core::tokenizer::tokenize;
use crate::core::{CalcError, CalcResult, Operator, StructuralReason};
use tracing::{debug, trace};

/// Evaluates a token sequence
///
/// The arrangement is checked in full before any arithmetic runs, so a
/// malformed sequence is reported as such even if it also divides by zero.
pub fn evaluate(tokens: &[Token]) -> CalcResult<f64> {
    check_structure(tokens).map_err(CalcError::structural)?;
    Evaluator::new(tokens).evaluate()
}

/// Tokenizes and evaluates `input`: the "=" action
pub fn evaluate_expression(input: &str) -> CalcResult<f64> {
    let tokens = tokenize(input)?;
    trace!(tokens = tokens.len(), "tokenized expression");

    let result = evaluate(&tokens);
    if let Err(err) = &result {
        debug!(error = %err, kind = err.kind().as_str(), "evaluation failed");
    }
    result
}

/// Validates the arrangement of a token sequence
///
/// A valid sequence alternates number, operator, number, ... and both starts
/// and ends with a number.
pub fn check_structure(tokens: &[Token]) -> Result<(), StructuralReason> {
    let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
        return Err(StructuralReason::Empty);
    };

    if first.is_operator() {
        return Err(StructuralReason::LeadingOperator);
    }

    for (index, pair) in tokens.windows(2).enumerate() {
        let position = index + 1;
        match (pair[0], pair[1]) {
            (Token::Operator(_), Token::Operator(_)) => {
                return Err(StructuralReason::AdjacentOperators { position });
            }
            (Token::Number(_), Token::Number(_)) => {
                return Err(StructuralReason::AdjacentNumbers { position });
            }
            _ => {}
        }
    }

    if last.is_operator() {
        return Err(StructuralReason::TrailingOperator);
    }

    // Tokens built outside the tokenizer can carry any f64
    let non_finite = tokens
        .iter()
        .position(|token| matches!(token, Token::Number(n) if !n.is_finite()));
    if let Some(position) = non_finite {
        return Err(StructuralReason::NonFiniteNumber { position });
    }

    Ok(())
}

/// Cursor over a borrowed token slice
///
/// Holds nothing but a read position; the tokens themselves are never
/// touched.
#[derive(Debug)]
pub struct Evaluator<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Evaluator<'t> {
    /// Creates an evaluator positioned at the first token
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Evaluates the whole sequence
    ///
    /// Structural problems found on the way are still reported as
    /// [`CalcError::Structural`], so this is safe to call on unchecked input.
    pub fn evaluate(mut self) -> CalcResult<f64> {
        if self.tokens.is_empty() {
            return Err(CalcError::structural(StructuralReason::Empty));
        }

        let value = self.parse_expression()?;

        // Only a number can stop both loops early
        if self.pos < self.tokens.len() {
            return Err(CalcError::structural(StructuralReason::AdjacentNumbers {
                position: self.pos,
            }));
        }

        Ok(value)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expression(&mut self) -> CalcResult<f64> {
        let mut left = self.parse_term()?;

        while let Some(&Token::Operator(op @ (Operator::Add | Operator::Sub))) = self.current() {
            self.advance();
            let right = self.parse_term()?;
            left = op.apply(left, right)?;
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> CalcResult<f64> {
        let mut left = self.parse_factor()?;

        while let Some(&Token::Operator(op @ (Operator::Mul | Operator::Div))) = self.current() {
            self.advance();
            let right = self.parse_factor()?;
            left = op.apply(left, right)?;
        }

        Ok(left)
    }

    fn parse_factor(&mut self) -> CalcResult<f64> {
        let position = self.pos;
        match self.advance() {
            Some(Token::Number(n)) if n.is_finite() => Ok(*n),
            Some(Token::Number(_)) => Err(CalcError::structural(
                StructuralReason::NonFiniteNumber { position },
            )),
            Some(Token::Operator(_)) if position == 0 => {
                Err(CalcError::structural(StructuralReason::LeadingOperator))
            }
            Some(Token::Operator(_)) => Err(CalcError::structural(
                StructuralReason::AdjacentOperators { position },
            )),
            None => Err(CalcError::structural(StructuralReason::TrailingOperator)),
        }
    }
}
