use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use super::keywords::{BuiltinType, Keyword, NumberType};

/// A located point in the source buffer.
///
/// All fields are zero-based. `column` counts bytes since the last line
/// break, so a multi-byte code point advances it by its encoded length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub byte_offset: usize,
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(byte_offset: usize, row: usize, column: usize) -> Self {
        Self {
            byte_offset,
            row,
            column,
        }
    }

    /// Position of the last byte of a code point of `width` bytes starting here.
    pub fn last_byte(self, width: usize) -> Self {
        let extra = width.saturating_sub(1);
        Self {
            byte_offset: self.byte_offset + extra,
            row: self.row,
            column: self.column + extra,
        }
    }
}

/// Source range of a token. `end` is the position of the last byte scanned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Number of bytes covered, counting the inclusive end.
    pub fn len(&self) -> usize {
        self.end.byte_offset + 1 - self.start.byte_offset
    }

    pub fn is_empty(&self) -> bool {
        self.end.byte_offset < self.start.byte_offset
    }

    /// The byte range covered, in the half-open form slices expect.
    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.start.byte_offset..self.end.byte_offset + 1
    }

    pub fn to_source_span(&self) -> miette::SourceSpan {
        (self.start.byte_offset, self.len()).into()
    }
}

/// Numeric base selected by a literal's prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Base {
    Binary,
    Octal,
    #[default]
    Decimal,
    Hexadecimal,
}

impl Base {
    pub fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Self::Binary => "0b",
            Self::Octal => "0o",
            Self::Decimal => "",
            Self::Hexadecimal => "0x",
        }
    }

    /// Base selected by the character following a leading `0`.
    pub fn from_prefix_char(c: char) -> Option<Self> {
        match c {
            'b' | 'B' => Some(Self::Binary),
            'o' | 'O' => Some(Self::Octal),
            'x' | 'X' => Some(Self::Hexadecimal),
            _ => None,
        }
    }
}

/// Unparsed number literal. Value conversion happens downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberLiteral<'src> {
    /// Source text after the base prefix and before any type suffix,
    /// including a leading sign for signed decimal literals.
    pub text: &'src str,
    pub base: Base,
    /// Explicit type from a suffix, `None` when absent or illegal.
    pub ty: Option<NumberType>,
    /// A `-` sign was scanned as part of the literal. For prefixed bases the
    /// sign sits before the prefix and is therefore not in `text`.
    pub negative: bool,
}

impl NumberLiteral<'_> {
    pub fn is_float(&self) -> bool {
        self.base == Base::Decimal && self.text.contains('.')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Token<'src> {
    Null,
    Undefined,
    Bool(bool),
    Char(char),
    Number(NumberLiteral<'src>),
    /// `Cow::Borrowed` when the literal had no escapes, `Cow::Owned` when
    /// the text had to be decoded into a fresh buffer.
    String(Cow<'src, str>),
    Symbol(char),
    Keyword(Keyword),
    BuiltinType(BuiltinType),
    Identifier(&'src str),
    DocComment { text: &'src str, top_level: bool },
}

impl Token<'_> {
    /// Whether this token can end an operand, which makes a following
    /// `+`/`-` binary instead of the sign of a number literal.
    pub fn is_expression(&self) -> bool {
        match self {
            Self::Null
            | Self::Undefined
            | Self::Bool(_)
            | Self::Char(_)
            | Self::Number(_)
            | Self::String(_)
            | Self::Identifier(_) => true,
            // A closing bracket ends an index expression just like `)`.
            Self::Symbol(c) => matches!(c, ')' | ']'),
            Self::Keyword(_) | Self::BuiltinType(_) | Self::DocComment { .. } => false,
        }
    }

    pub fn is_heap_owned(&self) -> bool {
        matches!(self, Self::String(Cow::Owned(_)))
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Undefined => f.write_str("undefined"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Char(c) => write!(f, "{c:?}"),
            Self::Number(n) => {
                let sign = if n.negative && n.base != Base::Decimal {
                    "-"
                } else {
                    ""
                };
                write!(f, "{sign}{}{}", n.base.prefix(), n.text)?;
                match n.ty {
                    Some(ty) => write!(f, "{ty}"),
                    None => Ok(()),
                }
            }
            Self::String(s) => write!(f, "{s:?}"),
            Self::Symbol(c) => write!(f, "{c}"),
            Self::Keyword(k) => write!(f, "{k}"),
            Self::BuiltinType(t) => write!(f, "{t}"),
            Self::Identifier(name) => f.write_str(name),
            Self::DocComment { text, top_level } => {
                let marker = if *top_level { "//!" } else { "///" };
                write!(f, "{marker}{text}")
            }
        }
    }
}

/// A token with its source span; the unit of scanner output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocatedToken<'src> {
    pub span: Span,
    pub token: Token<'src>,
}

impl<'src> LocatedToken<'src> {
    pub fn new(span: Span, token: Token<'src>) -> Self {
        Self { span, token }
    }
}
