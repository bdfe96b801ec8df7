mod comment_scanner;
pub mod cursor;
mod escape;
pub mod keywords;
mod number_scanner;
mod options;
pub mod scanner;
mod string_scanner;
pub mod token;
pub mod unicode;
mod word_scanner;

pub use options::ScanOptions;
pub use scanner::Scanner;
pub use word_scanner::classify_word;

use crate::diagnostics::Diagnostics;
use crate::errors::LexErrors;
use token::LocatedToken;

/// Tokenize source code into a list of located tokens.
///
/// Fails if any diagnostic was reported, even a recoverable one.
pub fn lex(source: &str) -> Result<Vec<LocatedToken<'_>>, LexErrors> {
    let (tokens, diagnostics) = lex_with_diagnostics(source);
    if diagnostics.is_empty() {
        Ok(tokens)
    } else {
        Err(LexErrors {
            errors: diagnostics.into_vec(),
        })
    }
}

/// Tokenize source code, handing back whatever was scanned along with the
/// diagnostics instead of failing.
pub fn lex_with_diagnostics(source: &str) -> (Vec<LocatedToken<'_>>, Diagnostics) {
    let mut scanner = Scanner::new(source);
    let tokens = scanner.scan_all();
    (tokens, scanner.into_sink())
}
