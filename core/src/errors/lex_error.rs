use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::lexer::keywords::NumberType;
use crate::lexer::token::{Position, Span};

/// How an anomaly affects the rest of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Scanning stops; no further tokens are produced.
    Fatal,
    /// Reported, then the scanner resynchronizes and continues.
    Recoverable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("illegal character {0:?} in number literal")]
    IllegalNumberCharacter(char),

    #[error("exponent in a number not known to be float yet")]
    ExponentWithoutDecimalPoint,

    #[error("number literal has no digits after `{prefix}`")]
    MissingDigits { prefix: &'static str },

    #[error("float exponent has no digits")]
    MissingExponentDigits,

    #[error("unknown number type `{0}`")]
    UnknownNumberType(String),

    #[error("float literal cannot have integer type `{0}`")]
    IntegerTypeOnFloat(NumberType),

    #[error("negative literal cannot have unsigned type `{0}`")]
    UnsignedTypeOnNegative(NumberType),

    #[error("float literal cannot have unsigned type `{0}`")]
    UnsignedTypeOnFloat(NumberType),

    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("unterminated character literal")]
    UnterminatedChar,

    #[error("empty character literal")]
    EmptyChar,

    #[error("character is too large")]
    CharTooLarge,

    #[error("unknown escape sequence `\\{0}`")]
    UnknownEscape(char),

    #[error("invalid hex escape sequence")]
    InvalidHexEscape,

    #[error("invalid escape sequence")]
    InvalidUnicodeEscape,

    #[error("unicode escape is too large")]
    UnicodeEscapeTooLarge,

    #[error("unterminated escape sequence")]
    UnterminatedEscape,

    #[error("unterminated block comment")]
    UnterminatedBlockComment,

    #[error("top-level doc comment must come before any other token")]
    MisplacedTopLevelDocComment,

    #[error("too many errors ({0}), giving up")]
    TooManyErrors(usize),
}

impl LexErrorKind {
    pub fn severity(&self) -> Severity {
        match self {
            Self::IllegalNumberCharacter(_)
            | Self::ExponentWithoutDecimalPoint
            | Self::MissingDigits { .. }
            | Self::MissingExponentDigits
            | Self::MisplacedTopLevelDocComment
            | Self::TooManyErrors(_) => Severity::Fatal,
            _ => Severity::Recoverable,
        }
    }
}

/// One lexical diagnostic, renderable through miette.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    /// Exact offending point inside `span`, when narrower than it.
    pub highlight: Option<Position>,

    #[label("here")]
    primary: SourceSpan,

    #[label("this character")]
    secondary: Option<SourceSpan>,

    #[help]
    pub help: Option<String>,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self {
            kind,
            span,
            highlight: None,
            primary: span.to_source_span(),
            secondary: None,
            help: None,
        }
    }

    /// Point at the `width` bytes starting at `at` inside the primary span.
    pub fn with_highlight(mut self, at: Position, width: usize) -> Self {
        self.highlight = Some(at);
        self.secondary = Some((at.byte_offset, width).into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

/// Every diagnostic of a failed batch scan.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("lexing failed with {} error(s)", .errors.len())]
pub struct LexErrors {
    #[related]
    pub errors: Vec<LexError>,
}
