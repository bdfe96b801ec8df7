/// Answers whether a code point separates words.
///
/// The scanner only borrows its classifier, so callers may share one
/// across many scans.
pub trait SeparatorClassifier {
    fn is_separator(&self, c: char) -> bool;
}

/// Separators per the Unicode `Zs`, `Zl` and `Zp` categories plus the
/// ASCII and C1 control characters that break lines or indent.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSeparators;

pub static UNICODE_SEPARATORS: UnicodeSeparators = UnicodeSeparators;

impl SeparatorClassifier for UnicodeSeparators {
    fn is_separator(&self, c: char) -> bool {
        matches!(
            c,
            '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{85}'
                // Zs
                | ' '
                | '\u{A0}'
                | '\u{1680}'
                | '\u{2000}'..='\u{200A}'
                | '\u{202F}'
                | '\u{205F}'
                | '\u{3000}'
                // Zl, Zp
                | '\u{2028}'
                | '\u{2029}'
        )
    }
}

impl<F: Fn(char) -> bool> SeparatorClassifier for F {
    fn is_separator(&self, c: char) -> bool {
        self(c)
    }
}

/// Code points that end a line and bump the row counter.
pub fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Single code points that always end a word and become `Symbol` tokens.
pub fn is_separating_symbol(c: char) -> bool {
    matches!(
        c,
        '&' | '|'
            | '!'
            | '~'
            | '^'
            | '<'
            | '>'
            | '*'
            | '/'
            | '{'
            | '}'
            | '('
            | ')'
            | '['
            | ']'
            | ':'
            | ','
            | '='
            | '%'
            | '+'
            | '-'
            | '?'
            | '@'
            | ';'
    )
}

/// Separating symbols plus `.`, which a decimal literal may absorb.
pub fn is_symbol(c: char) -> bool {
    c == '.' || is_separating_symbol(c)
}

/// Quotes open literals and therefore also end a word.
pub fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'')
}

#[cfg(test)]
mod tests;
