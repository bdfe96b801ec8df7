use std::borrow::Cow;

use super::scanner::Scanner;
use super::token::{Position, Token};
use super::unicode::is_line_break;
use crate::diagnostics::DiagnosticSink;
use crate::errors::{LexError, LexErrorKind};

const CHAR_HELP: &str = "character literals hold one code point; strings use double quotes";

impl<'src, S: DiagnosticSink> Scanner<'src, S> {
    pub(super) fn scan_string(&mut self) {
        let start = self.cursor.position();
        if let Some(text) = self.in_literal(|s| s.scan_string_body(start)) {
            let span = self.span_from(start);
            self.emit(span, Token::String(text));
        }
    }

    /// Copy unescaped runs verbatim and decode escapes in between. Text
    /// without escapes stays a borrow of the source.
    fn scan_string_body(&mut self, start: Position) -> Option<Cow<'src, str>> {
        self.cursor.bump();
        let content_start = self.cursor.position().byte_offset;
        let mut run_start = content_start;
        let mut decoded: Option<String> = None;

        let content_end = loop {
            match self.cursor.peek() {
                Some('"') => {
                    let end = self.cursor.position().byte_offset;
                    self.cursor.bump();
                    break end;
                }
                Some('\\') => {
                    let escape_at = self.cursor.position().byte_offset;
                    let buf = decoded.get_or_insert_with(String::new);
                    buf.push_str(self.cursor.slice(run_start, escape_at));
                    buf.push(self.decode_escape('"'));
                    run_start = self.cursor.position().byte_offset;
                }
                Some(_) => {
                    self.cursor.bump();
                }
                None => {
                    let span = self.span_from(start);
                    self.error(LexErrorKind::UnterminatedString, span);
                    return None;
                }
            }
        };

        Some(match decoded {
            None => Cow::Borrowed(self.cursor.slice(content_start, content_end)),
            Some(mut buf) => {
                buf.push_str(self.cursor.slice(run_start, content_end));
                Cow::Owned(buf)
            }
        })
    }

    pub(super) fn scan_char(&mut self) {
        let start = self.cursor.position();
        if let Some(c) = self.in_literal(|s| s.scan_char_body(start)) {
            let span = self.span_from(start);
            self.emit(span, Token::Char(c));
        }
    }

    fn scan_char_body(&mut self, start: Position) -> Option<char> {
        self.cursor.bump();
        let value = match self.cursor.peek() {
            Some('\'') => {
                self.cursor.bump();
                let span = self.span_from(start);
                self.report(LexError::new(LexErrorKind::EmptyChar, span).with_help(CHAR_HELP));
                return None;
            }
            Some('\\') => self.decode_escape('\''),
            Some(c) => {
                self.cursor.bump();
                c
            }
            None => {
                let span = self.span_from(start);
                self.error(LexErrorKind::UnterminatedChar, span);
                return None;
            }
        };

        if self.cursor.bump_if('\'') {
            return Some(value);
        }

        let closed = self.skip_to_char_end();
        let span = self.span_from(start);
        if closed {
            self.report(LexError::new(LexErrorKind::CharTooLarge, span).with_help(CHAR_HELP));
        } else {
            self.error(LexErrorKind::UnterminatedChar, span);
        }
        None
    }

    /// Resynchronize after a malformed character literal: consume through the
    /// next `'` on this line. Returns whether one was found.
    fn skip_to_char_end(&mut self) -> bool {
        while let Some(c) = self.cursor.peek() {
            if is_line_break(c) {
                return false;
            }
            self.cursor.bump();
            if c == '\'' {
                return true;
            }
        }
        false
    }
}
