//! Property-based tests for the tokenizer and evaluator
//!
//! Error prevention: property tests catch edge cases that example tests miss

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use quadcalc::prelude::*;

// ===== Strategy definitions =====

/// Digit/decimal-point literals with at least one digit and at most one point
fn literal_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,12}",
        "[0-9]{1,8}\\.[0-9]{0,8}",
        "\\.[0-9]{1,8}",
    ]
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Sub),
        Just(Operator::Mul),
        Just(Operator::Div),
    ]
}

/// Non-zero operands keep every division defined
fn operand_strategy() -> impl Strategy<Value = i64> {
    1i64..=50
}

/// A flat expression: first operand followed by (operator, operand) pairs
fn expression_strategy() -> impl Strategy<Value = (i64, Vec<(Operator, i64)>)> {
    (
        operand_strategy(),
        prop::collection::vec((operator_strategy(), operand_strategy()), 0..8),
    )
}

fn render((first, rest): &(i64, Vec<(Operator, i64)>)) -> String {
    let mut text = first.to_string();
    for (op, operand) in rest {
        text.push(op.symbol());
        text.push_str(&operand.to_string());
    }
    text
}

/// Reference evaluation: collapse `*` and `/` first, then sum left to right
fn reference_value((first, rest): &(i64, Vec<(Operator, i64)>)) -> f64 {
    let mut terms: Vec<f64> = vec![*first as f64];
    let mut signs: Vec<f64> = vec![1.0];
    for (op, operand) in rest {
        let value = *operand as f64;
        match op {
            Operator::Mul => *terms.last_mut().unwrap() *= value,
            Operator::Div => *terms.last_mut().unwrap() /= value,
            Operator::Add => {
                terms.push(value);
                signs.push(1.0);
            }
            Operator::Sub => {
                terms.push(value);
                signs.push(-1.0);
            }
        }
    }
    terms
        .iter()
        .zip(&signs)
        .fold(0.0, |acc, (term, sign)| acc + sign * term)
}

// ===== Tokenizer properties =====

proptest! {
    /// A valid literal is exactly one Number with the parsed value
    #[test]
    fn prop_literal_is_single_number(literal in literal_strategy()) {
        let tokens = tokenize(&literal).unwrap();
        let expected: f64 = literal.parse().unwrap();
        prop_assert_eq!(tokens, vec![Token::Number(expected)]);
    }

    /// Whitespace around tokens never changes the sequence
    #[test]
    fn prop_whitespace_is_ignored(expr in expression_strategy()) {
        let compact = render(&expr);
        let spaced: String = compact
            .chars()
            .flat_map(|ch| if ch.is_ascii_digit() { vec![ch] } else { vec![' ', ch, ' '] })
            .collect();
        prop_assert_eq!(tokenize(&compact).unwrap(), tokenize(&spaced).unwrap());
    }

    /// Token count is operands plus operators
    #[test]
    fn prop_token_count_matches_shape(expr in expression_strategy()) {
        let tokens = tokenize(&render(&expr)).unwrap();
        prop_assert_eq!(tokens.len(), 1 + 2 * expr.1.len());
    }

    /// Two points in one literal are always rejected at the second point
    #[test]
    fn prop_second_point_rejected(a in "[0-9]{0,4}", b in "[0-9]{0,4}", c in "[0-9]{0,4}") {
        let literal = format!("{a}.{b}.{c}");
        let err = tokenize(&literal).unwrap_err();
        prop_assert_eq!(err.kind, LexErrorKind::ExtraDecimalPoint);
        prop_assert_eq!(err.position, a.len() + 1 + b.len());
    }
}

// ===== Evaluator properties =====

proptest! {
    /// Matches a straightforward two-pass reference evaluation
    #[test]
    fn prop_matches_reference(expr in expression_strategy()) {
        let value = evaluate_expression(&render(&expr)).unwrap();
        let expected = reference_value(&expr);
        prop_assert!(
            (value - expected).abs() <= expected.abs().max(1.0) * 1e-9,
            "{} = {} but reference gave {}", render(&expr), value, expected
        );
    }

    /// Same tokens, same answer
    #[test]
    fn prop_evaluate_idempotent(expr in expression_strategy()) {
        let tokens = tokenize(&render(&expr)).unwrap();
        let first = evaluate(&tokens);
        prop_assert_eq!(evaluate(&tokens), first.clone());
        prop_assert_eq!(evaluate(&tokens), first);
    }

    /// Appending an operator always leaves a trailing-operator expression
    #[test]
    fn prop_trailing_operator_is_structural(expr in expression_strategy(), op in operator_strategy()) {
        let mut text = render(&expr);
        text.push(op.symbol());
        prop_assert_eq!(
            evaluate_expression(&text),
            Err(CalcError::structural(StructuralReason::TrailingOperator))
        );
    }

    /// Dividing anything by a literal zero is DivisionByZero
    #[test]
    fn prop_divide_by_zero(expr in expression_strategy()) {
        let text = format!("{}/0", render(&expr));
        prop_assert_eq!(evaluate_expression(&text), Err(CalcError::DivisionByZero));
    }

    /// Formatting a result and evaluating the text again is stable
    #[test]
    fn prop_formatted_result_reevaluates(expr in expression_strategy()) {
        let value = evaluate_expression(&render(&expr)).unwrap();
        let text = format_result(value.abs());
        if text.contains('e') {
            // Exponent form is for display; the tokenizer reads plain decimals
            prop_assert!(text.parse::<f64>().is_ok());
            return Ok(());
        }
        let again = evaluate_expression(&text).unwrap();
        prop_assert_eq!(format_result(again), text);
    }
}
