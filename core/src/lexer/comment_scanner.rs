use super::scanner::Scanner;
use super::token::{Position, Span, Token};
use super::unicode::is_line_break;
use crate::diagnostics::DiagnosticSink;
use crate::errors::LexErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentKind {
    Plain,
    /// `///` or `/** */`, attached to the following declaration.
    Doc,
    /// `//!`, attached to the whole file.
    TopLevelDoc,
}

impl<'src, S: DiagnosticSink> Scanner<'src, S> {
    /// Scan a comment starting at `//` or `/*`.
    pub(super) fn scan_comment(&mut self) {
        let start = self.cursor.position();
        self.cursor.bump();
        match self.cursor.bump() {
            Some('/') => self.scan_line_comment(start),
            _ => self.scan_block_comment(start),
        }
    }

    fn scan_line_comment(&mut self, start: Position) {
        let kind = match (self.cursor.peek(), self.cursor.peek_nth(1)) {
            (Some('/'), next) if next != Some('/') => CommentKind::Doc,
            (Some('!'), _) => CommentKind::TopLevelDoc,
            _ => CommentKind::Plain,
        };
        if kind != CommentKind::Plain {
            self.cursor.bump();
        }

        let text_start = self.cursor.position();
        self.cursor.bump_while(|c| !is_line_break(c));
        let text = self.cursor.slice_from(text_start);
        let text = text.strip_suffix('\r').unwrap_or(text);
        let span = self.span_from(start);
        self.finish_comment(kind, text, span);
    }

    fn scan_block_comment(&mut self, start: Position) {
        let is_doc = self.cursor.peek() == Some('*') && self.cursor.peek_nth(1) != Some('/');
        if is_doc {
            self.cursor.bump();
        }

        let text_start = self.cursor.position().byte_offset;
        loop {
            match self.cursor.peek() {
                Some('*') if self.cursor.peek_nth(1) == Some('/') => {
                    let text_end = self.cursor.position().byte_offset;
                    self.cursor.bump();
                    self.cursor.bump();
                    let text = self.cursor.slice(text_start, text_end);
                    let kind = if is_doc {
                        CommentKind::Doc
                    } else {
                        CommentKind::Plain
                    };
                    let span = self.span_from(start);
                    self.finish_comment(kind, text, span);
                    return;
                }
                Some(_) => {
                    self.cursor.bump();
                }
                None => {
                    let span = self.span_from(start);
                    self.error(LexErrorKind::UnterminatedBlockComment, span);
                    return;
                }
            }
        }
    }

    /// Plain comments vanish; doc comments become tokens. A top-level doc
    /// comment after any other token is fatal.
    fn finish_comment(&mut self, kind: CommentKind, text: &'src str, span: Span) {
        let top_level = match kind {
            CommentKind::Plain => return,
            CommentKind::Doc => {
                // Ends the preamble whether or not the token is kept.
                self.in_preamble = false;
                false
            }
            CommentKind::TopLevelDoc => {
                if !self.in_preamble {
                    self.error(LexErrorKind::MisplacedTopLevelDocComment, span);
                    return;
                }
                true
            }
        };

        if self.options.doc_comments() {
            self.emit(span, Token::DocComment { text, top_level });
        }
    }
}
