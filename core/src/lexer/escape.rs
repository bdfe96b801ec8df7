use super::scanner::Scanner;
use super::token::{Position, Span};
use crate::diagnostics::DiagnosticSink;
use crate::errors::{LexError, LexErrorKind};

/// Highest number of hex digits a `\u{...}` escape may carry. Six digits
/// are needed to spell U+10FFFF; the value itself is bounded by `char::MAX`.
const MAX_UNICODE_DIGITS: usize = 6;

impl<S: DiagnosticSink> Scanner<'_, S> {
    /// Decode one escape sequence starting at the backslash.
    ///
    /// On malformed input this reports a recoverable error and returns
    /// U+FFFD, having consumed the bad sequence but never the delimiter.
    pub(super) fn decode_escape(&mut self, delimiter: char) -> char {
        let start = self.cursor.position();
        self.cursor.bump();

        let Some(c) = self.cursor.peek() else {
            return self.escape_error(LexErrorKind::UnterminatedEscape, start, None);
        };
        if c == delimiter {
            self.cursor.bump();
            return c;
        }

        self.cursor.bump();
        match c {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '\\' => '\\',
            'x' => self.decode_hex_escape(start),
            'u' => self.decode_unicode_escape(start),
            other => self.escape_error(LexErrorKind::UnknownEscape(other), start, None),
        }
    }

    /// `\xHH`: exactly two hex digits.
    fn decode_hex_escape(&mut self, start: Position) -> char {
        let mut value = 0u32;
        for _ in 0..2 {
            let at = self.cursor.position();
            let Some(c) = self.cursor.peek() else {
                return self.escape_error(LexErrorKind::UnterminatedEscape, start, None);
            };
            let Some(digit) = c.to_digit(16) else {
                return self.escape_error(LexErrorKind::InvalidHexEscape, start, Some((at, c)));
            };
            self.cursor.bump();
            value = value * 16 + digit;
        }
        char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// `\u{H..H}`: one to six hex digits, at most U+10FFFF.
    fn decode_unicode_escape(&mut self, start: Position) -> char {
        let at = self.cursor.position();
        match self.cursor.peek() {
            Some('{') => {
                self.cursor.bump();
            }
            Some(c) => {
                return self.escape_error(LexErrorKind::InvalidUnicodeEscape, start, Some((at, c)));
            }
            None => return self.escape_error(LexErrorKind::UnterminatedEscape, start, None),
        }

        let mut value = 0u32;
        let mut digits = 0usize;
        loop {
            let at = self.cursor.position();
            match self.cursor.peek() {
                Some('}') => {
                    self.cursor.bump();
                    break;
                }
                Some(c) => {
                    let Some(digit) = c.to_digit(16) else {
                        return self.escape_error(
                            LexErrorKind::InvalidUnicodeEscape,
                            start,
                            Some((at, c)),
                        );
                    };
                    self.cursor.bump();
                    digits += 1;
                    if digits <= MAX_UNICODE_DIGITS {
                        value = value * 16 + digit;
                    }
                }
                None => return self.escape_error(LexErrorKind::UnterminatedEscape, start, None),
            }
        }

        if digits == 0 {
            return self.escape_error(LexErrorKind::InvalidUnicodeEscape, start, None);
        }
        if digits > MAX_UNICODE_DIGITS || value > char::MAX as u32 {
            return self.escape_error(LexErrorKind::UnicodeEscapeTooLarge, start, None);
        }
        match char::from_u32(value) {
            Some(c) => c,
            // Surrogate halves are not scalar values.
            None => self.escape_error(LexErrorKind::InvalidUnicodeEscape, start, None),
        }
    }

    fn escape_error(
        &mut self,
        kind: LexErrorKind,
        start: Position,
        offending: Option<(Position, char)>,
    ) -> char {
        let error = match offending {
            Some((at, c)) => {
                let width = c.len_utf8();
                LexError::new(kind, Span::new(start, at.last_byte(width))).with_highlight(at, width)
            }
            None => LexError::new(kind, self.span_from(start)),
        };
        self.report(error);
        char::REPLACEMENT_CHARACTER
    }
}
