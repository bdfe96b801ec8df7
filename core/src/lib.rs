pub mod diagnostics;
pub mod errors;
pub mod lexer;
pub mod source;

pub use diagnostics::{DiagnosticSink, Diagnostics};
pub use errors::{KestrelError, LexError, LexErrorKind, LexErrors, Severity};
pub use lexer::token::{Base, LocatedToken, NumberLiteral, Position, Span, Token};
pub use lexer::{ScanOptions, Scanner, lex, lex_with_diagnostics};
pub use source::Source;
