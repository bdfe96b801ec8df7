use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use crate::cli::Cli;
use crate::discovery::collect_fixtures;
use crate::execution::{SuiteSummary, run_suite};
use crate::stats::print_analysis;

/// Run the suite and return the process exit code.
pub fn run() -> i32 {
    let cli = Cli::parse();
    let start = Instant::now();

    let files = collect_fixtures(&cli.path, cli.filter.as_deref());
    if files.is_empty() {
        eprintln!(
            "{} no .kes fixtures under {}",
            "error:".red().bold(),
            cli.path.display()
        );
        return 2;
    }
    println!("{} {} fixtures...\n", "Running".bold().cyan(), files.len());

    let summary = run_suite(&cli.path, &files, cli.verbose, cli.analyze);
    print_totals(&summary, start.elapsed().as_secs_f64());

    if cli.analyze {
        print_analysis(&summary.analysis);
    }

    if summary.failed > 0 && !cli.verbose {
        print_failure_sample(&summary.failures);
    }

    i32::from(summary.failed > 0)
}

fn print_totals(summary: &SuiteSummary, elapsed_secs: f64) {
    let ran = summary.passed + summary.failed;
    let pass_rate = if ran == 0 {
        100.0
    } else {
        summary.passed as f64 * 100.0 / ran as f64
    };
    println!("\n{}", "=".repeat(60));
    println!(
        "Passed: {} | Failed: {} | Skipped: {} | {:.1}% passing",
        summary.passed.to_string().green().bold(),
        summary.failed.to_string().red().bold(),
        summary.skipped.to_string().yellow().bold(),
        pass_rate
    );
    println!("Completed in {elapsed_secs:.2}s");
    println!("{}", "=".repeat(60));
}

fn print_failure_sample(failures: &[(PathBuf, String)]) {
    let max_rows = 10;
    let shown = failures.len().min(max_rows);

    println!("\n{}", "Sample failures:".red().bold());
    for (path, reason) in failures.iter().take(shown) {
        println!("  {} - {}", path.display(), reason);
    }
    if failures.len() > shown {
        println!(
            "  ... and {} more (use --verbose for all)",
            failures.len() - shown
        );
    }
}
