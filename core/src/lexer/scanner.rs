use std::collections::VecDeque;

use super::cursor::{Cursor, ScanMode};
use super::keywords::init_tables;
use super::options::ScanOptions;
use super::token::{LocatedToken, Position, Span, Token};
use super::unicode::{SeparatorClassifier, UNICODE_SEPARATORS, is_symbol};
use crate::diagnostics::{DiagnosticSink, Diagnostics};
use crate::errors::{LexError, LexErrorKind};

/// Scans source code into a sequence of located tokens.
///
/// Tokens are produced on demand: [`Scanner::step`] scans until at least one
/// new token is ready, the [`Iterator`] impl yields them one at a time, and
/// [`Scanner::scan_all`] drains the whole buffer. Diagnostics go to the sink
/// `S` as they are found; a fatal one stops the scan for good.
pub struct Scanner<'src, S = Diagnostics> {
    pub(super) cursor: Cursor<'src>,
    pub(super) options: ScanOptions,
    sink: S,
    pending: VecDeque<LocatedToken<'src>>,
    emitted: usize,
    last_is_expression: bool,
    /// Nothing but top-level doc comments has been emitted yet.
    pub(super) in_preamble: bool,
    failed: bool,
    recoverable_errors: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_sink(source, Diagnostics::new())
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.sink
    }
}

impl<'src, S: DiagnosticSink> Scanner<'src, S> {
    pub fn with_sink(source: &'src str, sink: S) -> Self {
        init_tables();
        Self {
            cursor: Cursor::new(source, &UNICODE_SEPARATORS),
            options: ScanOptions::default(),
            sink,
            pending: VecDeque::new(),
            emitted: 0,
            last_is_expression: false,
            in_preamble: true,
            failed: false,
            recoverable_errors: 0,
        }
    }

    pub fn with_classifier(mut self, classifier: &'src dyn SeparatorClassifier) -> Self {
        self.cursor.set_classifier(classifier);
        self
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    pub fn source(&self) -> &'src str {
        self.cursor.source()
    }

    /// True once the input is exhausted or a fatal error was reported.
    pub fn finished(&self) -> bool {
        self.failed || self.cursor.is_at_end()
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Number of tokens emitted since the last clear.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Scan until at least one new token is ready or the scan is finished.
    /// Returns how many tokens were added to the pending queue.
    pub fn step(&mut self) -> usize {
        let before = self.pending.len();
        while self.pending.len() == before && !self.finished() {
            self.scan_next();
        }
        self.pending.len() - before
    }

    /// Take every token scanned so far but not yet handed out.
    pub fn drain(&mut self) -> std::collections::vec_deque::Drain<'_, LocatedToken<'src>> {
        self.pending.drain(..)
    }

    /// Scan the rest of the buffer and return all tokens not yet handed out.
    pub fn scan_all(&mut self) -> Vec<LocatedToken<'src>> {
        tracing::debug!(bytes = self.source().len(), "scan started");
        let tokens: Vec<_> = self.by_ref().collect();
        tracing::debug!(tokens = tokens.len(), failed = self.failed, "scan finished");
        tokens
    }

    /// Rewind to the start of the same buffer, keeping allocated capacity.
    pub fn clear(&mut self) {
        self.cursor.rewind();
        self.pending.clear();
        self.sink.reset();
        self.emitted = 0;
        self.last_is_expression = false;
        self.in_preamble = true;
        self.failed = false;
        self.recoverable_errors = 0;
        tracing::debug!("scanner cleared");
    }

    /// Like [`Scanner::clear`], but also gives back capacity grown by the
    /// token queue and the sink.
    pub fn clear_and_release(&mut self) {
        self.clear();
        self.pending = VecDeque::new();
        self.sink.release();
    }

    /// Rebind to another buffer and start over.
    pub fn reset(&mut self, source: &'src str) {
        self.cursor.rebind(source);
        self.clear();
    }

    fn scan_next(&mut self) {
        self.cursor.skip_separators();
        let Some(c) = self.cursor.peek() else {
            return;
        };

        match c {
            '/' if matches!(self.cursor.peek_nth(1), Some('/' | '*')) => self.scan_comment(),
            '"' => self.scan_string(),
            '\'' => self.scan_char(),
            '+' | '-' if self.starts_signed_number() => self.scan_number(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_symbol(c) => {
                let start = self.cursor.position();
                self.cursor.bump();
                self.emit(Span::new(start, self.cursor.last_end()), Token::Symbol(c));
            }
            _ => self.scan_word(),
        }
    }

    /// A sign directly followed by a digit starts a number literal unless the
    /// previous token completes an operand (`a-1` is a subtraction).
    fn starts_signed_number(&self) -> bool {
        if self.last_is_expression {
            return false;
        }
        self.cursor.peek_nth(1).is_some_and(|d| d.is_ascii_digit())
    }

    /// Run `scan` with separator skipping switched off.
    pub(super) fn in_literal<T>(&mut self, scan: impl FnOnce(&mut Self) -> T) -> T {
        let outer = self.cursor.mode();
        self.cursor.set_mode(ScanMode::InsideLiteral);
        let result = scan(self);
        self.cursor.set_mode(outer);
        result
    }

    /// Span from `start` to the last consumed byte.
    pub(super) fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.cursor.last_end())
    }

    pub(super) fn emit(&mut self, span: Span, token: Token<'src>) {
        tracing::trace!(row = span.start.row, column = span.start.column, ?token, "token");
        self.last_is_expression = token.is_expression();
        if !matches!(token, Token::DocComment { top_level: true, .. }) {
            self.in_preamble = false;
        }
        self.emitted += 1;
        self.pending.push_back(LocatedToken::new(span, token));
    }

    pub(super) fn error(&mut self, kind: LexErrorKind, span: Span) {
        self.report(LexError::new(kind, span));
    }

    pub(super) fn report(&mut self, error: LexError) {
        let span = error.span;
        if error.is_fatal() {
            tracing::warn!(
                kind = %error.kind,
                row = span.start.row,
                column = span.start.column,
                "fatal lexical error, scan stopped"
            );
            self.failed = true;
            self.sink.report(error);
            return;
        }

        tracing::debug!(kind = %error.kind, row = span.start.row, "lexical error");
        self.sink.report(error);
        self.recoverable_errors += 1;
        if let Some(limit) = self.options.error_limit() {
            if self.recoverable_errors >= limit {
                self.report(LexError::new(LexErrorKind::TooManyErrors(limit), span));
            }
        }
    }
}

impl<'src, S: DiagnosticSink> Iterator for Scanner<'src, S> {
    type Item = LocatedToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() {
            self.step();
        }
        self.pending.pop_front()
    }
}

#[cfg(test)]
mod tests;
