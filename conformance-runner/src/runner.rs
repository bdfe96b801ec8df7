use kestrel::{LexError, ScanOptions, Scanner};

use crate::metadata::{CaseMetadata, Flag, Negative};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Passed,
    Failed(String),
    Skipped(String),
}

pub fn run_test(source: &str, metadata: &CaseMetadata) -> TestResult {
    if metadata.has_flag(Flag::Skip) {
        return TestResult::Skipped("marked skip".into());
    }

    let options = ScanOptions::new().with_doc_comments(!metadata.has_flag(Flag::NoDocs));
    let mut scanner = Scanner::new(source).with_options(options);
    let tokens = scanner.scan_all();
    let diagnostics: Vec<LexError> = scanner.diagnostics().iter().cloned().collect();

    scanner.clear();
    if scanner.scan_all() != tokens || scanner.diagnostics().len() != diagnostics.len() {
        return TestResult::Failed("rescan after clear produced a different result".into());
    }

    if let Some(expected) = metadata.tokens {
        if tokens.len() != expected {
            return TestResult::Failed(format!(
                "expected {expected} tokens but got {}",
                tokens.len()
            ));
        }
    }

    match &metadata.negative {
        Some(negative) => evaluate_negative(negative, &diagnostics),
        None => match diagnostics.first() {
            Some(error) => TestResult::Failed(describe(error)),
            None => TestResult::Passed,
        },
    }
}

fn evaluate_negative(negative: &Negative, diagnostics: &[LexError]) -> TestResult {
    if diagnostics.is_empty() {
        return TestResult::Failed("expected error but scan succeeded".into());
    }

    let matched = diagnostics.iter().any(|error| {
        negative.severity.matches(error.severity())
            && (format!("{:?}", error.kind).contains(&negative.kind)
                || error.kind.to_string().contains(&negative.kind))
    });
    if matched {
        TestResult::Passed
    } else {
        let got: Vec<_> = diagnostics.iter().map(describe).collect();
        TestResult::Failed(format!(
            "expected {:?} {} but got: {}",
            negative.severity,
            negative.kind,
            got.join("; ")
        ))
    }
}

fn describe(error: &LexError) -> String {
    let at = error.span.start;
    format!(
        "{:?} at {}:{}: {}",
        error.severity(),
        at.row,
        at.column,
        error.kind
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::parse_frontmatter;

    fn run(source: &str) -> TestResult {
        let meta = parse_frontmatter(source).unwrap();
        run_test(source, &meta)
    }

    #[test]
    fn clean_case_with_token_count_passes() {
        let source = "/*---\ntokens: 5\n---*/\nlet x = 0x1F;\n";
        assert_eq!(run(source), TestResult::Passed);
    }

    #[test]
    fn wrong_token_count_fails() {
        let source = "/*---\ntokens: 2\n---*/\nlet x = 1;\n";
        assert!(matches!(run(source), TestResult::Failed(reason) if reason.contains("expected 2")));
    }

    #[test]
    fn negative_case_matches_kind_and_severity() {
        let source = "/*---\nnegative:\n  severity: recoverable\n  kind: UnterminatedString\n---*/\nlet s = \"open\n";
        assert_eq!(run(source), TestResult::Passed);
    }

    #[test]
    fn negative_case_with_wrong_severity_fails() {
        let source = "/*---\nnegative:\n  severity: fatal\n  kind: UnterminatedString\n---*/\nlet s = \"open\n";
        assert!(matches!(run(source), TestResult::Failed(_)));
    }

    #[test]
    fn unexpected_diagnostic_fails() {
        let source = "let c = '';";
        assert!(matches!(run(source), TestResult::Failed(reason) if reason.contains("empty character")));
    }

    #[test]
    fn skip_flag_skips() {
        let source = "/*---\nflags: [skip]\n---*/\n0x";
        assert!(matches!(run(source), TestResult::Skipped(_)));
    }
}
