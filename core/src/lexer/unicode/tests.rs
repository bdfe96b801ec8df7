use super::*;

#[test]
fn ascii_whitespace_is_separator() {
    for c in [' ', '\t', '\n', '\r', '\u{0B}', '\u{0C}'] {
        assert!(UNICODE_SEPARATORS.is_separator(c), "{c:?}");
    }
    assert!(!UNICODE_SEPARATORS.is_separator('a'));
    assert!(!UNICODE_SEPARATORS.is_separator('_'));
}

#[test]
fn unicode_space_categories_are_separators() {
    // NO-BREAK SPACE, EM SPACE, IDEOGRAPHIC SPACE, LINE and PARAGRAPH SEPARATOR
    for c in ['\u{A0}', '\u{2003}', '\u{3000}', '\u{2028}', '\u{2029}'] {
        assert!(UNICODE_SEPARATORS.is_separator(c), "{c:?}");
    }
    assert!(!UNICODE_SEPARATORS.is_separator('é'));
    assert!(!UNICODE_SEPARATORS.is_separator('\u{1F480}'));
}

#[test]
fn closures_act_as_classifiers() {
    let only_spaces = |c: char| c == ' ';
    assert!(only_spaces.is_separator(' '));
    assert!(!only_spaces.is_separator('\t'));
}

#[test]
fn dot_is_a_symbol_but_not_separating() {
    assert!(is_symbol('.'));
    assert!(!is_separating_symbol('.'));
    assert!(is_separating_symbol('@'));
    assert!(!is_symbol('_'));
    assert!(!is_symbol('"'));
}

#[test]
fn carriage_return_does_not_break_lines() {
    assert!(is_line_break('\n'));
    assert!(is_line_break('\u{2028}'));
    assert!(!is_line_break('\r'));
}

#[test]
fn format_characters_are_not_separators() {
    // ZERO WIDTH SPACE and ZERO WIDTH NO-BREAK SPACE are Cf, not Zs.
    assert!(!UNICODE_SEPARATORS.is_separator('\u{200B}'));
    assert!(!UNICODE_SEPARATORS.is_separator('\u{FEFF}'));
    assert!(UNICODE_SEPARATORS.is_separator('\u{1680}'));
    assert!(UNICODE_SEPARATORS.is_separator('\u{200A}'));
}
