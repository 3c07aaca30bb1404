//! The four arithmetic operators
//!
//! Error prevention: a closed enum means every operator is handled everywhere.

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Sub,
    /// Multiplication (*)
    Mul,
    /// Division (/)
    Div,
}

impl Operator {
    /// All operators, in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Maps an input character to its operator
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Applies the operator to two operands
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Self::Add => add(a, b),
            Self::Sub => subtract(a, b),
            Self::Mul => multiply(a, b),
            Self::Div => divide(a, b),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

fn add(a: f64, b: f64) -> CalcResult<f64> {
    check_overflow(a + b)
}

fn subtract(a: f64, b: f64) -> CalcResult<f64> {
    check_overflow(a - b)
}

fn multiply(a: f64, b: f64) -> CalcResult<f64> {
    check_overflow(a * b)
}

fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    check_overflow(a / b)
}

/// Finite operands only go non-finite by exceeding the f64 range
fn check_overflow(result: f64) -> CalcResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- Operator enum tests ---

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), '+');
        assert_eq!(Operator::Sub.symbol(), '-');
        assert_eq!(Operator::Mul.symbol(), '*');
        assert_eq!(Operator::Div.symbol(), '/');
    }

    #[test]
    fn test_operator_from_char_roundtrips_symbol() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_char(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_char('%'), None);
        assert_eq!(Operator::from_char('^'), None);
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(Operator::Div.to_string(), "/");
    }

    // --- Arithmetic tests ---

    #[test]
    fn test_apply_basic() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Sub.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operator::Mul.apply(2.0, 3.0), Ok(6.0));
        assert_eq!(Operator::Div.apply(3.0, 2.0), Ok(1.5));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Operator::Div.apply(5.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Operator::Div.apply(0.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Operator::Div.apply(5.0, -0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_multiply_overflow() {
        assert_eq!(Operator::Mul.apply(f64::MAX, 2.0), Err(CalcError::Overflow));
    }

    #[test]
    fn test_add_overflow() {
        assert_eq!(Operator::Add.apply(f64::MAX, f64::MAX), Err(CalcError::Overflow));
    }

    #[test]
    fn test_divide_overflow() {
        assert_eq!(Operator::Div.apply(f64::MAX, 0.5), Err(CalcError::Overflow));
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e100f64..1e100, b in -1e100f64..1e100) {
            prop_assert_eq!(Operator::Add.apply(a, b), Operator::Add.apply(b, a));
        }

        #[test]
        fn prop_nonzero_divisor_never_errors(a in -1e100f64..1e100, b in 1e-10f64..1e10) {
            prop_assert!(Operator::Div.apply(a, b).is_ok());
            prop_assert!(Operator::Div.apply(a, -b).is_ok());
        }
    }
}
