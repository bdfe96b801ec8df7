use std::str::Chars;

use super::token::Position;
use super::unicode::{SeparatorClassifier, is_line_break};

/// Whether the cursor may skip separators on its own.
///
/// Literal scanners switch to `InsideLiteral` so whitespace inside a string,
/// character or number is seen rather than swallowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    #[default]
    Normal,
    InsideLiteral,
}

/// Code-point reader over the source string that tracks positions.
pub struct Cursor<'src> {
    source: &'src str,
    chars: Chars<'src>,
    pos: Position,
    last_end: Position,
    mode: ScanMode,
    classifier: &'src dyn SeparatorClassifier,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str, classifier: &'src dyn SeparatorClassifier) -> Self {
        Self {
            source,
            chars: source.chars(),
            pos: Position::default(),
            last_end: Position::default(),
            mode: ScanMode::Normal,
            classifier,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Position of the next unread code point.
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Position of the last byte of the most recently consumed code point.
    pub fn last_end(&self) -> Position {
        self.last_end
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ScanMode) {
        self.mode = mode;
    }

    pub fn set_classifier(&mut self, classifier: &'src dyn SeparatorClassifier) {
        self.classifier = classifier;
    }

    /// Peek at the next code point without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    /// Peek `n` code points past the next one (`peek_nth(0) == peek()`).
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n)
    }

    /// Consume one code point and update the position.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        let width = c.len_utf8();
        self.last_end = self.pos.last_byte(width);
        self.pos.byte_offset += width;
        if is_line_break(c) {
            self.pos.row += 1;
            self.pos.column = 0;
        } else {
            self.pos.column += width;
        }
        Some(c)
    }

    /// Consume the next code point if it equals `expected`.
    pub fn bump_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume code points while `pred` holds.
    pub fn bump_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while self.peek().is_some_and(&mut pred) {
            self.bump();
        }
    }

    pub fn is_separator(&self, c: char) -> bool {
        self.classifier.is_separator(c)
    }

    /// Skip a run of separators. Does nothing inside a literal.
    pub fn skip_separators(&mut self) -> bool {
        if self.mode == ScanMode::InsideLiteral {
            return false;
        }
        let start = self.pos.byte_offset;
        while let Some(c) = self.peek() {
            if !self.classifier.is_separator(c) {
                break;
            }
            self.bump();
        }
        self.pos.byte_offset > start
    }

    /// Source text between `start` and the current position.
    pub fn slice_from(&self, start: Position) -> &'src str {
        &self.source[start.byte_offset..self.pos.byte_offset]
    }

    pub fn slice(&self, start: usize, end: usize) -> &'src str {
        &self.source[start..end]
    }

    /// Whether the cursor has reached the end.
    pub fn is_at_end(&self) -> bool {
        self.pos.byte_offset >= self.source.len()
    }

    /// Rewind to the start of the buffer.
    pub fn rewind(&mut self) {
        self.chars = self.source.chars();
        self.pos = Position::default();
        self.last_end = Position::default();
        self.mode = ScanMode::Normal;
    }

    /// Rebind to a different buffer and rewind.
    pub fn rebind(&mut self, source: &'src str) {
        self.source = source;
        self.rewind();
    }
}
