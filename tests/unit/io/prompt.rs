//! Tests for prompt parsing and reprompt loops

use bingotiles::io::prompt::{
    AssumeYes, LinePrompter, Prompter, parse_confirmation, parse_positive_integer,
};
use std::io::Cursor;

#[test]
fn test_parse_positive_integer_accepts_only_positive_numbers() {
    assert_eq!(parse_positive_integer("5"), Some(5));
    assert_eq!(parse_positive_integer("  12 \n"), Some(12));
    assert_eq!(parse_positive_integer("0"), None);
    assert_eq!(parse_positive_integer("-3"), None);
    assert_eq!(parse_positive_integer("abc"), None);
    assert_eq!(parse_positive_integer(""), None);
}

#[test]
fn test_parse_confirmation_first_letter_rules() {
    assert_eq!(parse_confirmation("yes"), Some(true));
    assert_eq!(parse_confirmation("Y"), Some(true));
    assert_eq!(parse_confirmation("yep\n"), Some(true));
    assert_eq!(parse_confirmation("no"), Some(false));
    assert_eq!(parse_confirmation("anything else"), Some(false));
    assert_eq!(parse_confirmation(""), None);
    assert_eq!(parse_confirmation("   "), None);
}

#[test]
fn test_positive_integer_reprompts_until_valid() {
    let input = Cursor::new(b"abc\n0\n7\n".to_vec());
    let mut output = Vec::new();
    let mut prompter = LinePrompter::new(input, &mut output);

    let value = prompter.positive_integer("Count: ").expect("value");
    assert_eq!(value, 7);

    let transcript = String::from_utf8(output).expect("utf8");
    assert_eq!(
        transcript
            .matches("The number must be a positive integer.")
            .count(),
        2,
        "both invalid answers are reprompted"
    );
}

#[test]
fn test_confirm_skips_blank_lines() {
    let input = Cursor::new(b"\nnope\n".to_vec());
    let mut output = Vec::new();
    let mut prompter = LinePrompter::new(input, &mut output);

    assert!(!prompter.confirm("Proceed?").expect("answer"));
}

#[test]
fn test_closed_input_stream_is_an_error() {
    let input = Cursor::new(Vec::new());
    let mut output = Vec::new();
    let mut prompter = LinePrompter::new(input, &mut output);

    assert!(prompter.positive_integer("Count: ").is_err());
}

#[test]
fn test_assume_yes_confirms_but_cannot_invent_counts() {
    let mut prompter = AssumeYes;
    assert!(prompter.confirm("Overwrite?").expect("confirm"));
    assert!(prompter.positive_integer("Count: ").is_err());
}

// A retry gate with nobody at the keyboard must fail fast, not spin; callers
// loop on acknowledge, so a non-interactive Ok would never terminate.
#[test]
fn test_assume_yes_cannot_await_operator_intervention() {
    let mut prompter = AssumeYes;
    let err = prompter
        .acknowledge("Please close the file.")
        .err()
        .expect("non-interactive acknowledgment must fail");
    assert!(err.to_string().contains("Please close the file."));
}
