use kestrel::errors::LexErrorKind;
use kestrel::lex_with_diagnostics;

/// Suggest the quote that would close a literal left open at the cursor.
pub fn hint_for(line: &str, pos: usize) -> Option<String> {
    if pos < line.len() || line.trim().is_empty() {
        return None;
    }

    let (_, diagnostics) = lex_with_diagnostics(line);
    diagnostics.iter().find_map(|error| match error.kind {
        LexErrorKind::UnterminatedString => Some("\"".to_string()),
        LexErrorKind::UnterminatedChar if !line.ends_with('\'') => Some("'".to_string()),
        LexErrorKind::UnterminatedBlockComment => Some(" */".to_string()),
        _ => None,
    })
}
