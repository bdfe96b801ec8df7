use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use colored::Colorize;
use rayon::prelude::*;

use crate::metadata::parse_frontmatter;
use crate::panic_message::format_panic;
use crate::runner::{TestResult, run_test};
use crate::stats::Analysis;

#[derive(Default)]
pub struct SuiteSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub failures: Vec<(PathBuf, String)>,
    pub analysis: Analysis,
}

struct CaseRecord {
    path: PathBuf,
    result: TestResult,
}

/// Run every fixture on the rayon pool and fold the results in path order.
pub fn run_suite(root: &Path, files: &[PathBuf], verbose: bool, analyze: bool) -> SuiteSummary {
    let records: Vec<_> = files.par_iter().map(|path| run_case(path)).collect();
    let mut summary = SuiteSummary::default();

    for record in records {
        if analyze {
            summary.analysis.record(root, &record.path, &record.result);
        }
        summary.apply(record, verbose);
    }

    summary
}

fn run_case(path: &Path) -> CaseRecord {
    let result = match fs::read_to_string(path) {
        Ok(source) => match parse_frontmatter(&source) {
            Ok(meta) => panic::catch_unwind(AssertUnwindSafe(|| run_test(&source, &meta)))
                .unwrap_or_else(|payload| TestResult::Failed(format_panic(payload))),
            Err(reason) => TestResult::Failed(reason),
        },
        Err(err) => TestResult::Skipped(format!("failed to read fixture: {err}")),
    };

    CaseRecord {
        path: path.to_path_buf(),
        result,
    }
}

impl SuiteSummary {
    fn apply(&mut self, record: CaseRecord, verbose: bool) {
        let CaseRecord { path, result } = record;
        match result {
            TestResult::Passed => {
                self.passed += 1;
                if verbose {
                    println!("{} {}", "PASS".green(), path.display());
                }
            }
            TestResult::Failed(reason) => {
                self.failed += 1;
                if verbose {
                    println!("{} {} - {}", "FAIL".red(), path.display(), reason);
                }
                self.failures.push((path, reason));
            }
            TestResult::Skipped(reason) => {
                self.skipped += 1;
                if verbose {
                    println!("{} {} - {}", "SKIP".yellow(), path.display(), reason);
                }
            }
        }
    }
}
