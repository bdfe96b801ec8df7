use std::collections::HashMap;

use colored::Colorize;

use super::Analysis;

pub fn print_analysis(analysis: &Analysis) {
    println!("\n{}", "Analysis (--analyze)".bold().cyan());
    print_sections(analysis);
    print_ranked("Most common failures:", &analysis.failure_messages, 10);
    print_ranked("Most common skip reasons:", &analysis.skip_reasons, 5);
}

fn print_sections(analysis: &Analysis) {
    let mut sections: Vec<_> = analysis.sections.iter().collect();
    sections.sort_by(|(a_name, a), (b_name, b)| {
        a.pass_rate()
            .total_cmp(&b.pass_rate())
            .then_with(|| a_name.cmp(b_name))
    });

    println!("\n{}", "Sections (worst pass rate first):".bold());
    for (name, stats) in sections {
        println!(
            "  {:24} {:>5} cases | pass {:>6.1}% | fail {:>5} | skip {:>5}",
            name,
            stats.total,
            stats.pass_rate() * 100.0,
            stats.failed,
            stats.skipped
        );
    }
}

fn print_ranked(title: &str, counts: &HashMap<String, usize>, limit: usize) {
    if counts.is_empty() {
        return;
    }
    let mut ranked: Vec<_> = counts.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    println!("\n{}", title.bold());
    for (message, count) in ranked.into_iter().take(limit) {
        println!("  {count:>4}x {message}");
    }
}
