mod lex_error;

pub use lex_error::{LexError, LexErrorKind, LexErrors, Severity};

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type wrapping all kestrel errors.
#[derive(Debug, Error, Diagnostic)]
pub enum KestrelError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexErrors),

    #[error("could not read '{path}': {source}")]
    #[diagnostic(code(kestrel::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
