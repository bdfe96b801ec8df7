/// Knobs for a scan. Defaults keep doc comments and never give up early.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    doc_comments: bool,
    error_limit: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            doc_comments: true,
            error_limit: None,
        }
    }
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `///`, `//!` and `/** */` comments as tokens.
    pub fn with_doc_comments(mut self, keep: bool) -> Self {
        self.doc_comments = keep;
        self
    }

    /// Stop with a fatal error once this many recoverable errors were seen.
    pub fn with_error_limit(mut self, limit: usize) -> Self {
        self.error_limit = Some(limit);
        self
    }

    pub fn doc_comments(&self) -> bool {
        self.doc_comments
    }

    pub fn error_limit(&self) -> Option<usize> {
        self.error_limit
    }
}
