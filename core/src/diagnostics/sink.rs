use crate::errors::{LexError, Severity};

/// Receiver for lexical diagnostics as the scanner finds them.
pub trait DiagnosticSink {
    fn report(&mut self, error: LexError);

    /// Called when the scanner restarts, so a rescan does not repeat old reports.
    fn reset(&mut self) {}

    /// Called after a reset when the scanner also drops grown buffers.
    fn release(&mut self) {}
}

/// Collects every reported diagnostic in order.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    errors: Vec<LexError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_fatal(&self) -> bool {
        self.errors
            .iter()
            .any(|error| error.severity() == Severity::Fatal)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LexError> {
        self.errors.iter()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn shrink_to_fit(&mut self) {
        self.errors.shrink_to_fit();
    }

    pub fn into_vec(self) -> Vec<LexError> {
        self.errors
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, error: LexError) {
        self.errors.push(error);
    }

    fn reset(&mut self) {
        self.clear();
    }

    fn release(&mut self) {
        self.shrink_to_fit();
    }
}

impl DiagnosticSink for Vec<LexError> {
    fn report(&mut self, error: LexError) {
        self.push(error);
    }

    fn reset(&mut self) {
        self.clear();
    }

    fn release(&mut self) {
        self.shrink_to_fit();
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, error: LexError) {
        (**self).report(error);
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn release(&mut self) {
        (**self).release();
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a LexError;
    type IntoIter = std::slice::Iter<'a, LexError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
