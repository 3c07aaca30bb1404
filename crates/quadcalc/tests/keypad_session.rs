//! Keypad flows driven through the public Session API

#![allow(clippy::unwrap_used)]

use quadcalc::prelude::*;

fn press_all(session: &mut Session, keys: &[Key]) {
    for key in keys {
        session.press(*key).unwrap();
    }
}

#[test]
fn test_button_sequence_matches_typed_sequence() {
    let mut pressed = Session::new();
    press_all(
        &mut pressed,
        &[
            Key::Digit(7),
            Key::Operator(Operator::Add),
            Key::Digit(8),
            Key::Operator(Operator::Mul),
            Key::Digit(9),
            Key::Equals,
        ],
    );

    let mut typed = Session::new();
    typed.push_str("7+8*9=").unwrap();

    assert_eq!(pressed.display(), "79");
    assert_eq!(pressed.display(), typed.display());
}

#[test]
fn test_every_keypad_character_is_accepted() {
    let mut session = Session::new();
    for ch in "0123456789.+-*/".chars() {
        session.push_char(ch).unwrap();
    }
    assert_eq!(session.buffer(), "0123456789.+-*/");
    session.push_char('C').unwrap();
    assert_eq!(session.buffer(), "");
}

#[test]
fn test_running_total() {
    let mut session = Session::new();
    session.push_str("10=").unwrap();
    for _ in 0..3 {
        session.push_str("+2.5=").unwrap();
    }
    assert_eq!(session.display(), "17.5");
    assert_eq!(session.history().len(), 4);
    assert_eq!(
        session.history().export_formatted(),
        "10 = 10\n10+2.5 = 12.5\n12.5+2.5 = 15\n15+2.5 = 17.5"
    );
}

#[test]
fn test_error_then_recover() {
    let mut session = Session::new().with_error_style(ErrorStyle::Detailed);
    session.push_str("8/0=").unwrap();
    assert_eq!(session.display(), "Division by zero");
    assert_eq!(session.last_error().map(CalcError::kind), Some(ErrorKind::DivisionByZero));

    session.push_str("8/2=").unwrap();
    assert_eq!(session.display(), "4");
}

#[test]
fn test_each_error_kind_shows_opaque_error() {
    for keys in ["1..2=", "3+=", "*2=", "5/0=", "="] {
        let mut session = Session::new();
        session.push_str(keys).unwrap();
        assert_eq!(session.display(), "Error", "keys: {keys}");
        assert!(session.last_error().is_some());
    }
}
