use std::process;
use std::time::{Duration, Instant};

use clap::Parser;
use kestrel::{Diagnostics, LocatedToken, ScanOptions, Scanner, Source};
use miette::Report;
use owo_colors::OwoColorize;

mod repl;

#[derive(Parser)]
#[command(name = "kestrel", about = "Tokenize kestrel source and report lexical errors")]
struct Cli {
    /// Path to a source file to tokenize
    file: Option<String>,
    /// Tokenize inline source instead of a file
    #[arg(long)]
    eval: Option<String>,
    /// Print tokens as JSON
    #[arg(long)]
    json: bool,
    /// Clear and rescan the buffer this many times and report timings
    #[arg(long, value_name = "N")]
    bench: Option<usize>,
    /// Drop doc comments instead of emitting them
    #[arg(long)]
    no_docs: bool,
    /// Give up after this many recoverable errors
    #[arg(long, value_name = "N")]
    error_limit: Option<usize>,
    /// Log filter, e.g. `kestrel=debug` (defaults to RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

impl Cli {
    fn scan_options(&self) -> ScanOptions {
        let options = ScanOptions::new().with_doc_comments(!self.no_docs);
        match self.error_limit {
            Some(limit) => options.with_error_limit(limit),
            None => options,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    if cli.version {
        println!(
            "{} {}",
            "kestrel".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return;
    }

    let source = match (&cli.eval, &cli.file) {
        (Some(code), _) => Source::new("<eval>", code.as_str()),
        (None, Some(file)) => match Source::read(file) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("{:?}", Report::new(err));
                process::exit(1);
            }
        },
        (None, None) => {
            if let Err(err) = repl::run(cli.scan_options()) {
                eprintln!("{} {err}", "repl error:".red().bold());
                process::exit(1);
            }
            return;
        }
    };

    let options = cli.scan_options();
    let code = match cli.bench {
        Some(runs) => run_bench(&source, options, runs),
        None => run_file(&source, options, cli.json),
    };
    process::exit(code);
}

fn init_tracing(filter: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None if std::env::var("RUST_LOG").is_ok() => EnvFilter::from_default_env(),
        None => return,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn run_file(source: &Source, options: ScanOptions, json: bool) -> i32 {
    let mut scanner = Scanner::new(source.text()).with_options(options);
    let tokens = scanner.scan_all();

    if json {
        match serde_json::to_string_pretty(&tokens) {
            Ok(out) => println!("{out}"),
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                return 1;
            }
        }
    } else {
        print_tokens(&tokens);
    }

    report_diagnostics(source, scanner.diagnostics())
}

pub(crate) fn print_tokens(tokens: &[LocatedToken<'_>]) {
    for located in tokens {
        let start = located.span.start;
        println!(
            "{:>4}:{:<4} {}",
            start.row.bright_black(),
            start.column.bright_black(),
            located.token
        );
    }
}

/// Render every diagnostic against its source. Returns the exit code.
pub(crate) fn report_diagnostics(source: &Source, diagnostics: &Diagnostics) -> i32 {
    if diagnostics.is_empty() {
        return 0;
    }
    for error in diagnostics {
        let report = Report::new(error.clone()).with_source_code(source.named_source());
        eprintln!("{report:?}");
    }
    1
}

fn run_bench(source: &Source, options: ScanOptions, runs: usize) -> i32 {
    let runs = runs.max(1);
    let mut scanner = Scanner::new(source.text()).with_options(options);
    let baseline = scanner.scan_all();
    let mut total = Duration::ZERO;

    for run in 0..runs {
        scanner.clear();
        let started = Instant::now();
        let tokens = scanner.scan_all();
        total += started.elapsed();
        if tokens != baseline {
            eprintln!(
                "{} run {run} produced a different token stream",
                "error:".red().bold()
            );
            return 1;
        }
    }

    let mean = total / runs as u32;
    let bytes = source.text().len() as f64;
    let mib_per_sec = bytes / mean.as_secs_f64().max(f64::EPSILON) / (1024.0 * 1024.0);
    println!(
        "{} {} tokens, {} runs, mean {:?} per scan ({:.1} MiB/s)",
        "bench".bright_blue().bold(),
        baseline.len(),
        runs,
        mean,
        mib_per_sec
    );
    report_diagnostics(source, scanner.diagnostics())
}
