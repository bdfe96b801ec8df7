use super::keywords::{BuiltinType, Keyword};
use super::scanner::Scanner;
use super::token::Token;
use super::unicode::{is_quote, is_symbol};
use crate::diagnostics::DiagnosticSink;

impl<S: DiagnosticSink> Scanner<'_, S> {
    /// Consume a maximal run of code points that are neither separators,
    /// symbols nor quotes, then classify it.
    pub(super) fn scan_word(&mut self) {
        let start = self.cursor.position();
        while let Some(c) = self.cursor.peek() {
            if self.cursor.is_separator(c) || is_symbol(c) || is_quote(c) {
                break;
            }
            self.cursor.bump();
        }

        let text = self.cursor.slice_from(start);
        let span = self.span_from(start);
        self.emit(span, classify_word(text));
    }
}

/// Resolve a word to a literal keyword, keyword, built-in type or identifier.
pub fn classify_word(text: &str) -> Token<'_> {
    match text {
        "null" => Token::Null,
        "undefined" => Token::Undefined,
        "true" => Token::Bool(true),
        "false" => Token::Bool(false),
        _ if text.starts_with(|c: char| c.is_ascii_digit()) => Token::Identifier(text),
        _ => Keyword::lookup(text)
            .map(Token::Keyword)
            .or_else(|| BuiltinType::lookup(text).map(Token::BuiltinType))
            .unwrap_or(Token::Identifier(text)),
    }
}
