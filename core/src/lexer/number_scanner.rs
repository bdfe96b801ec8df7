use super::keywords::NumberType;
use super::scanner::Scanner;
use super::token::{Base, NumberLiteral, Position, Span, Token};
use super::unicode::{is_quote, is_separating_symbol, is_symbol};
use crate::diagnostics::DiagnosticSink;
use crate::errors::{LexError, LexErrorKind};

impl<'src, S: DiagnosticSink> Scanner<'src, S> {
    /// Scan a number literal starting at a digit or at a sign that
    /// directly precedes one.
    pub(super) fn scan_number(&mut self) {
        let start = self.cursor.position();
        if let Some(literal) = self.in_literal(|s| s.scan_number_literal(start)) {
            let span = self.span_from(start);
            self.emit(span, Token::Number(literal));
        }
    }

    fn scan_number_literal(&mut self, start: Position) -> Option<NumberLiteral<'src>> {
        let mut base = Base::Decimal;
        let mut text_start = start.byte_offset;
        let negative = self.cursor.peek() == Some('-');
        if matches!(self.cursor.peek(), Some('+' | '-')) {
            self.cursor.bump();
        }
        if self.cursor.peek() == Some('0') {
            if let Some(prefixed) = self.cursor.peek_nth(1).and_then(Base::from_prefix_char) {
                self.cursor.bump();
                self.cursor.bump();
                base = prefixed;
                text_start = self.cursor.position().byte_offset;
            }
        }

        let mut digits = 0usize;
        let mut is_float = false;
        // Digits seen after the exponent marker, once there is one.
        let mut exponent: Option<usize> = None;

        while let Some(c) = self.cursor.peek() {
            let at = self.cursor.position();
            match c {
                '_' => {
                    self.cursor.bump();
                }
                'n' | 'i' | 'u' => break,
                'f' if base != Base::Hexadecimal => break,
                '.' if base == Base::Decimal
                    && !is_float
                    && exponent.is_none()
                    && self.cursor.peek_nth(1).is_some_and(|d| d.is_ascii_digit()) =>
                {
                    is_float = true;
                    self.cursor.bump();
                }
                'e' | 'E' if base == Base::Decimal => {
                    if !is_float {
                        self.number_error(LexErrorKind::ExponentWithoutDecimalPoint, start, at);
                        return None;
                    }
                    if exponent.is_some() {
                        self.number_error(LexErrorKind::IllegalNumberCharacter(c), start, at);
                        return None;
                    }
                    self.cursor.bump();
                    exponent = Some(0);
                    if matches!(self.cursor.peek(), Some('+' | '-')) {
                        self.cursor.bump();
                    }
                }
                c if c.is_digit(base.radix()) => {
                    self.cursor.bump();
                    match exponent.as_mut() {
                        Some(count) => *count += 1,
                        None => digits += 1,
                    }
                }
                c if c == '.' || is_separating_symbol(c) || self.cursor.is_separator(c) => break,
                _ => {
                    self.number_error(LexErrorKind::IllegalNumberCharacter(c), start, at);
                    return None;
                }
            }
        }

        if digits == 0 {
            let span = self.span_from(start);
            self.error(
                LexErrorKind::MissingDigits {
                    prefix: base.prefix(),
                },
                span,
            );
            return None;
        }
        if exponent == Some(0) {
            let span = self.span_from(start);
            self.error(LexErrorKind::MissingExponentDigits, span);
            return None;
        }

        let text = self.cursor.slice(text_start, self.cursor.position().byte_offset);
        let ty = self.scan_number_suffix(start, base, is_float, negative);
        Some(NumberLiteral {
            text,
            base,
            ty,
            negative,
        })
    }

    /// Scan and check an explicit type suffix. Illegal suffixes are reported
    /// and leave the literal untyped.
    fn scan_number_suffix(
        &mut self,
        start: Position,
        base: Base,
        is_float: bool,
        negative: bool,
    ) -> Option<NumberType> {
        let introducer = self.cursor.peek()?;
        let introduces = matches!(introducer, 'n' | 'i' | 'u')
            || (introducer == 'f' && base != Base::Hexadecimal);
        if !introduces {
            return None;
        }

        let suffix_start = self.cursor.position();
        while let Some(c) = self.cursor.peek() {
            if is_symbol(c) || is_quote(c) || self.cursor.is_separator(c) {
                break;
            }
            self.cursor.bump();
        }
        let suffix = self.cursor.slice_from(suffix_start);

        let Some(ty) = NumberType::from_suffix(suffix) else {
            let span = self.span_from(suffix_start);
            self.error(LexErrorKind::UnknownNumberType(suffix.to_owned()), span);
            return None;
        };

        let illegal = if is_float && ty.is_signed_integer() {
            Some(LexErrorKind::IntegerTypeOnFloat(ty))
        } else if is_float && ty.is_unsigned() {
            Some(LexErrorKind::UnsignedTypeOnFloat(ty))
        } else if negative && ty.is_unsigned() {
            Some(LexErrorKind::UnsignedTypeOnNegative(ty))
        } else {
            None
        };

        match illegal {
            Some(kind) => {
                let span = self.span_from(start);
                self.report(LexError::new(kind, span).with_highlight(suffix_start, suffix.len()));
                None
            }
            None => Some(ty),
        }
    }

    fn number_error(&mut self, kind: LexErrorKind, start: Position, at: Position) {
        let width = self.cursor.peek().map_or(1, char::len_utf8);
        let end = at.last_byte(width);
        self.report(LexError::new(kind, Span::new(start, end)).with_highlight(at, width));
    }
}
