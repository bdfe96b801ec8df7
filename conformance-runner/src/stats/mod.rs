mod report;

use std::collections::HashMap;
use std::path::{Component, Path};

use crate::runner::TestResult;

pub use report::print_analysis;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SectionStats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl SectionStats {
    pub fn pass_rate(&self) -> f64 {
        let ran = self.passed + self.failed;
        if ran == 0 {
            return 1.0;
        }
        self.passed as f64 / ran as f64
    }
}

/// Per-directory counts and failure reasons grouped by shape.
#[derive(Debug, Default)]
pub struct Analysis {
    pub sections: HashMap<String, SectionStats>,
    pub failure_messages: HashMap<String, usize>,
    pub skip_reasons: HashMap<String, usize>,
}

impl Analysis {
    pub fn record(&mut self, root: &Path, path: &Path, result: &TestResult) {
        let stats = self.sections.entry(section_of(root, path)).or_default();
        stats.total += 1;

        match result {
            TestResult::Passed => stats.passed += 1,
            TestResult::Failed(reason) => {
                stats.failed += 1;
                *self
                    .failure_messages
                    .entry(failure_shape(reason))
                    .or_default() += 1;
            }
            TestResult::Skipped(reason) => {
                stats.skipped += 1;
                *self.skip_reasons.entry(reason.clone()).or_default() += 1;
            }
        }
    }
}

/// The first directory below the suite root, or `(root)` for top-level files.
fn section_of(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let mut dirs = rel.parent().into_iter().flat_map(Path::components);
    match dirs.find_map(|component| match component {
        Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
        _ => None,
    }) {
        Some(section) => section,
        None => "(root)".to_string(),
    }
}

/// First line of a failure with digit runs collapsed to `N`, so the same
/// error at different positions lands in one bucket.
fn failure_shape(message: &str) -> String {
    let first_line = message.lines().next().unwrap_or_default().trim();
    let mut shape = String::with_capacity(first_line.len());
    let mut in_digits = false;
    for c in first_line.chars() {
        if c.is_ascii_digit() {
            if !in_digits {
                shape.push('N');
            }
            in_digits = true;
        } else {
            shape.push(c);
            in_digits = false;
        }
    }
    shape
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_use_the_first_directory_below_root() {
        let root = Path::new("fixtures");
        assert_eq!(section_of(root, Path::new("fixtures/numbers/hex.kes")), "numbers");
        assert_eq!(section_of(root, Path::new("fixtures/a/b/c.kes")), "a");
        assert_eq!(section_of(root, Path::new("fixtures/top.kes")), "(root)");
    }

    #[test]
    fn failure_shapes_ignore_positions() {
        assert_eq!(
            failure_shape("Recoverable at 3:14: empty character literal\nmore"),
            "Recoverable at N:N: empty character literal"
        );
    }

    #[test]
    fn records_are_counted_per_section() {
        let root = Path::new("f");
        let mut analysis = Analysis::default();
        analysis.record(root, Path::new("f/s/a.kes"), &TestResult::Passed);
        analysis.record(root, Path::new("f/s/b.kes"), &TestResult::Failed("x at 1:2".into()));
        analysis.record(root, Path::new("f/s/c.kes"), &TestResult::Failed("x at 9:9".into()));
        let stats = analysis.sections["s"];
        assert_eq!((stats.total, stats.passed, stats.failed), (3, 1, 2));
        assert_eq!(analysis.failure_messages["x at N:N"], 2);
    }
}
