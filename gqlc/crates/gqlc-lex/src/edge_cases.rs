//! Edge case tests for gqlc-lex

use gqlc_util::{Position, Span};
use proptest::prelude::*;

use crate::{tokenize, LexError, LexResult, ResumePolicy, ScanOptions, Scalar, Scanner, Token};

fn lex_all(source: &str) -> Vec<Token<'_>> {
    tokenize(source).unwrap().into_iter().map(|s| s.item).collect()
}

fn first_error(source: &str) -> Span<LexError> {
    tokenize(source).unwrap_err()
}

fn skip_all(source: &str) -> Vec<LexResult<'_>> {
    Scanner::with_options(source, ScanOptions::default().with_resume(ResumePolicy::Skip)).collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_lone_bell() {
    assert_eq!(
        first_error("\u{7}"),
        Span::point(Position::new(), LexError::UnknownCharacter('\u{7}'))
    );
}

#[test]
fn test_edge_nul_byte() {
    assert_eq!(first_error("a\0").item, LexError::UnknownCharacter('\0'));
}

#[test]
fn test_edge_byte_order_mark_is_not_ignored() {
    assert_eq!(first_error("\u{FEFF}{}").item, LexError::UnknownCharacter('\u{FEFF}'));
}

#[test]
fn test_edge_long_name() {
    let name = "a".repeat(10_000);
    let source = format!("{{ {name} }}");
    let tokens = tokenize(&source).unwrap();
    assert_eq!(tokens[1].item, Token::Name(&name));
    assert_eq!(tokens[1].len(), 10_000);
}

#[test]
fn test_edge_adjacent_tokens_without_spaces() {
    assert_eq!(
        lex_all("a:$b@c...d"),
        vec![
            Token::Name("a"),
            Token::Colon,
            Token::Dollar,
            Token::Name("b"),
            Token::At,
            Token::Name("c"),
            Token::Ellipsis,
            Token::Name("d"),
            Token::Eof,
        ]
    );
}

#[test]
fn test_edge_negative_zero_float() {
    assert_eq!(lex_all("-0.0")[0], Token::Scalar(Scalar::Float(-0.0)));
}

#[test]
fn test_edge_float_then_dot() {
    // "1.5." scans the float, then a dot that cannot start a spread
    let error = first_error("1.5.");
    assert_eq!(error, Span::point(Position::at(4, 0, 4), LexError::UnexpectedEndOfFile));
}

#[test]
fn test_edge_exponent_sign_only() {
    assert_eq!(
        first_error("1e-x"),
        Span::point(Position::at(3, 0, 3), LexError::UnexpectedCharacter('x'))
    );
}

#[test]
fn test_edge_string_with_hash() {
    assert_eq!(lex_all("\"# not a comment\"")[0], Token::Scalar(Scalar::String("# not a comment")));
}

#[test]
fn test_edge_comment_with_quote() {
    assert_eq!(lex_all("# \"\n1"), vec![Token::Scalar(Scalar::Integer(1)), Token::Eof]);
}

#[test]
fn test_edge_crlf_line_counting() {
    let tokens = tokenize("a\r\n\r\nb").unwrap();
    assert_eq!(tokens[1].start, Position::at(5, 2, 0));
}

#[test]
fn test_edge_eof_after_trailing_newline() {
    let tokens = tokenize("a\n").unwrap();
    assert_eq!(tokens[1], Span::point(Position::at(2, 1, 0), Token::Eof));
}

// ==================== CALL SEQUENCE ====================

#[test]
fn test_edge_success_then_single_eof_then_none() {
    let mut scanner = Scanner::new("a b");
    assert!(scanner.next_token().unwrap().is_ok());
    assert!(scanner.next_token().unwrap().is_ok());
    assert_eq!(scanner.next_token().unwrap().unwrap().item, Token::Eof);
    for _ in 0..3 {
        assert!(scanner.next_token().is_none());
    }
}

#[test]
fn test_edge_failure_then_none_under_halt() {
    let mut scanner = Scanner::new("a % b");
    assert!(scanner.next_token().unwrap().is_ok());
    assert!(scanner.next_token().unwrap().is_err());
    assert!(scanner.next_token().is_none());
    assert!(scanner.next_token().is_none());
}

#[test]
fn test_edge_skip_collects_every_error() {
    // the closing quote after a bad escape opens a new, unterminated string
    let results = skip_all("{ % a: 00 ^\n b: \"y\n c: \"x\\q\" }");
    let errors: Vec<LexError> = results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .map(|e| e.item.clone())
        .collect();
    assert_eq!(
        errors,
        vec![
            LexError::UnknownCharacter('%'),
            LexError::UnexpectedCharacter('0'),
            LexError::UnknownCharacter('^'),
            LexError::UnterminatedString,
            LexError::UnknownEscapeSequence("\\q".to_string()),
            LexError::UnterminatedString,
        ]
    );
    assert_eq!(results.last().unwrap().as_ref().unwrap().item, Token::Eof);
}

#[test]
fn test_edge_skip_stops_after_eof() {
    let mut scanner =
        Scanner::with_options("%", ScanOptions::default().with_resume(ResumePolicy::Skip));
    assert!(scanner.next_token().unwrap().is_err());
    assert_eq!(scanner.next_token().unwrap().unwrap().item, Token::Eof);
    assert!(scanner.next_token().is_none());
}

// ==================== PROPERTY-BASED TESTS ====================

proptest! {
    #[test]
    fn test_property_names_lex_to_one_token(input in "[_A-Za-z][_0-9A-Za-z]{0,60}") {
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].item, Token::Name(&input));
        prop_assert_eq!(tokens[0].end.index(), input.len());
    }

    #[test]
    fn test_property_integers_round_trip(value in any::<i64>()) {
        let source = value.to_string();
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(tokens[0].item, Token::Scalar(Scalar::Integer(value)));
        prop_assert_eq!(tokens[1].item, Token::Eof);
    }

    #[test]
    fn test_property_plain_strings(body in "[^\"\\\\\\n\\r\\x00-\\x1f]{0,80}") {
        let source = format!("\"{body}\"");
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].item, Token::Scalar(Scalar::String(&body)));
        prop_assert_eq!(tokens[0].len(), body.chars().count() + 2);
    }

    #[test]
    fn test_property_never_panics(input in "\\PC{0,200}") {
        let _ = tokenize(&input);
        let _ = skip_all(&input).len();
    }

    #[test]
    fn test_property_skip_terminates_with_progress(input in any::<String>()) {
        let chars = input.chars().count();
        let results = skip_all(&input);

        // at most one result per character, plus the end of input
        prop_assert!(results.len() <= chars + 1);
        prop_assert!(matches!(results.last(), Some(Ok(span)) if span.item.is_eof()));

        let mut last = None;
        for result in &results {
            let start = match result {
                Ok(span) => span.start,
                Err(span) => span.start,
            };
            if let Some(previous) = last {
                prop_assert!(start >= previous);
            }
            last = Some(start);
        }
    }

    #[test]
    fn test_property_index_counts_characters(input in "[a-z \\n\\r,]{0,100}") {
        let tokens = tokenize(&input).unwrap();
        let eof = tokens.last().unwrap();
        prop_assert_eq!(eof.start.index(), input.chars().count());
        prop_assert_eq!(eof.start.line(), input.matches('\n').count());
    }
}
