use std::borrow::Cow;

use super::*;
use crate::errors::LexErrorKind;

fn kinds(diagnostics: &Diagnostics) -> Vec<LexErrorKind> {
    diagnostics.iter().map(|e| e.kind.clone()).collect()
}

#[test]
fn step_produces_tokens_incrementally() {
    let mut scanner = Scanner::new("a + b");
    assert_eq!(scanner.step(), 1);
    assert_eq!(scanner.step(), 1);
    let drained: Vec<_> = scanner.drain().map(|t| t.token).collect();
    assert_eq!(drained, vec![Token::Identifier("a"), Token::Symbol('+')]);

    assert_eq!(scanner.step(), 1);
    assert!(scanner.finished());
    assert_eq!(scanner.step(), 0);
    assert_eq!(scanner.emitted(), 3);
}

#[test]
fn iterator_is_lazy() {
    let mut scanner = Scanner::new("x y z");
    let first = scanner.next().map(|t| t.token);
    assert_eq!(first, Some(Token::Identifier("x")));
    assert!(!scanner.finished());
    assert_eq!(scanner.count(), 2);
}

#[test]
fn clear_rescans_identically() {
    let source = "let s = \"a\\tb\"; //! nope\nx";
    let mut scanner = Scanner::new(source);
    let first = scanner.scan_all();
    let first_errors = kinds(scanner.diagnostics());
    assert!(scanner.failed());

    scanner.clear();
    assert!(!scanner.failed());
    assert!(scanner.diagnostics().is_empty());
    let second = scanner.scan_all();
    assert_eq!(first, second);
    assert_eq!(first_errors, kinds(scanner.diagnostics()));

    scanner.clear_and_release();
    assert_eq!(scanner.scan_all(), first);
}

#[test]
fn reset_binds_a_new_buffer() {
    let mut scanner = Scanner::new("old");
    scanner.scan_all();
    scanner.reset("new buffer");
    let tokens: Vec<_> = scanner.map(|t| t.token).collect();
    assert_eq!(
        tokens,
        vec![Token::Identifier("new"), Token::Identifier("buffer")]
    );
}

#[test]
fn custom_classifier_decides_separators() {
    let underscore_splits = |c: char| c == '_' || c == ' ';
    let scanner = Scanner::new("snake_case name").with_classifier(&underscore_splits);
    let tokens: Vec<_> = scanner.map(|t| t.token).collect();
    assert_eq!(
        tokens,
        vec![
            Token::Identifier("snake"),
            Token::Identifier("case"),
            Token::Identifier("name"),
        ]
    );
}

#[test]
fn doc_comments_can_be_dropped() {
    let options = ScanOptions::new().with_doc_comments(false);
    let scanner = Scanner::new("//! top\n/// item\nfn").with_options(options);
    let tokens: Vec<_> = scanner.map(|t| t.token).collect();
    assert_eq!(
        tokens,
        vec![Token::Keyword(crate::lexer::keywords::Keyword::Fn)]
    );
}

#[test]
fn dropped_doc_comments_still_end_the_preamble() {
    for keep in [true, false] {
        let options = ScanOptions::new().with_doc_comments(keep);
        let mut scanner = Scanner::new("/// a\n//! b\nx").with_options(options);
        let tokens = scanner.scan_all();
        assert!(scanner.failed(), "doc comments kept: {keep}");
        assert_eq!(tokens.len(), usize::from(keep));
        assert_eq!(
            kinds(scanner.diagnostics()),
            vec![LexErrorKind::MisplacedTopLevelDocComment]
        );
    }
}

#[test]
fn consecutive_top_level_doc_lines_are_allowed() {
    let tokens: Vec<_> = Scanner::new("//! one\n//! two\nx")
        .map(|t| t.token)
        .collect();
    assert_eq!(
        tokens,
        vec![
            Token::DocComment {
                text: " one",
                top_level: true
            },
            Token::DocComment {
                text: " two",
                top_level: true
            },
            Token::Identifier("x"),
        ]
    );
}

#[test]
fn fatal_error_stops_the_scan() {
    let mut scanner = Scanner::new("a 12z b c");
    let tokens = scanner.scan_all();
    assert_eq!(tokens.len(), 1);
    assert!(scanner.failed());
    assert!(scanner.finished());
    assert_eq!(scanner.next(), None);
    assert_eq!(
        kinds(scanner.diagnostics()),
        vec![LexErrorKind::IllegalNumberCharacter('z')]
    );
}

#[test]
fn error_limit_turns_into_fatal() {
    let options = ScanOptions::new().with_error_limit(2);
    let mut scanner = Scanner::new("'' '' '' x").with_options(options);
    let tokens = scanner.scan_all();
    assert!(tokens.is_empty());
    assert_eq!(
        kinds(scanner.diagnostics()),
        vec![
            LexErrorKind::EmptyChar,
            LexErrorKind::EmptyChar,
            LexErrorKind::TooManyErrors(2),
        ]
    );
}

#[test]
fn external_sink_receives_reports() {
    let mut reports: Vec<crate::errors::LexError> = Vec::new();
    let tokens: Vec<_> = Scanner::with_sink("'ab' ok", &mut reports)
        .map(|t| t.token)
        .collect();
    assert_eq!(tokens, vec![Token::Identifier("ok")]);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].kind, LexErrorKind::CharTooLarge);
    assert!(reports[0].help.is_some());
}

#[test]
fn escaped_strings_are_heap_owned() {
    let tokens: Vec<_> = Scanner::new(r#""plain" "esc\n""#)
        .map(|t| t.token)
        .collect();
    assert_eq!(tokens[0], Token::String(Cow::Borrowed("plain")));
    assert!(!tokens[0].is_heap_owned());
    assert_eq!(tokens[1], Token::String(Cow::Owned("esc\n".to_string())));
    assert!(tokens[1].is_heap_owned());
}

#[test]
fn clear_and_release_empties_the_sink() {
    let mut reports: Vec<crate::errors::LexError> = Vec::new();
    {
        let mut scanner = Scanner::with_sink("'' '' ''", &mut reports);
        scanner.scan_all();
        assert_eq!(scanner.sink().len(), 3);
        scanner.clear_and_release();
    }
    assert!(reports.is_empty());
    assert_eq!(reports.capacity(), 0);
}

#[test]
fn literals_leave_the_cursor_in_normal_mode() {
    let mut scanner = Scanner::new("\"a b\" 1.5 'c'");
    let tokens = scanner.scan_all();
    assert_eq!(tokens.len(), 3);
    assert_eq!(scanner.cursor.mode(), ScanMode::Normal);
    match &tokens[1].token {
        Token::Number(literal) => assert!(literal.is_float()),
        other => panic!("expected a number, got {other:?}"),
    }
}
