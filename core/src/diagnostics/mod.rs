mod sink;

pub use sink::{DiagnosticSink, Diagnostics};
