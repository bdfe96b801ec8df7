use std::borrow::Cow;

use kestrel::{Scanner, Token, lex_with_diagnostics};
use proptest::prelude::*;

fn words_and_gaps() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    prop::collection::vec("[a-zA-Z_][a-zA-Z0-9_]{0,8}", 1..12).prop_flat_map(|words| {
        let gaps = prop::collection::vec("[ \t\n\r]{1,3}", words.len());
        (Just(words), gaps)
    })
}

proptest! {
    #[test]
    fn ascii_words_partition_exactly((words, gaps) in words_and_gaps()) {
        let source: String = words
            .iter()
            .zip(&gaps)
            .flat_map(|(word, gap)| [word.as_str(), gap.as_str()])
            .collect();
        let (tokens, diagnostics) = lex_with_diagnostics(&source);
        prop_assert!(diagnostics.is_empty());
        prop_assert_eq!(tokens.len(), words.len());
        for (token, word) in tokens.iter().zip(&words) {
            prop_assert_eq!(&source[token.span.byte_range()], word.as_str());
        }
    }

    #[test]
    fn plain_string_literals_round_trip(body in "[^\"\\\\]{0,40}") {
        let source = format!("\"{body}\"");
        let (tokens, diagnostics) = lex_with_diagnostics(&source);
        prop_assert!(diagnostics.is_empty());
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].token, &Token::String(Cow::Borrowed(body.as_str())));
        prop_assert!(!tokens[0].token.is_heap_owned());
    }

    #[test]
    fn rescanning_is_deterministic(source in "\\PC{0,80}") {
        let mut scanner = Scanner::new(&source);
        let first = scanner.scan_all();
        let first_errors = scanner.diagnostics().len();
        scanner.clear();
        let second = scanner.scan_all();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first_errors, scanner.diagnostics().len());
    }

    #[test]
    fn spans_are_ordered_and_in_bounds(source in "\\PC{0,80}") {
        let (tokens, _) = lex_with_diagnostics(&source);
        let mut previous_end = None;
        for token in &tokens {
            let span = token.span;
            prop_assert!(span.start.byte_offset <= span.end.byte_offset);
            prop_assert!(span.end.byte_offset < source.len());
            prop_assert!(source.is_char_boundary(span.start.byte_offset));
            if let Some(end) = previous_end {
                prop_assert!(span.start.byte_offset > end);
            }
            previous_end = Some(span.end.byte_offset);
        }
    }
}
