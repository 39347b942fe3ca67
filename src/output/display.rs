//! Display functions for command results

use crate::commands::{CheckReport, GenerateReport};
use crate::core::ExtractedList;
use colored::Colorize;

/// Print the result of a generate run
pub fn print_generate_report(report: &GenerateReport) {
    let path = report.output.display().to_string();
    let verb = if report.written { "Generated" } else { "Rendered" };

    println!(
        "{} {} with {}",
        verb.green().bold(),
        path.bright_white().bold(),
        summarize_counts(&report.lists)
    );

    print_lists(&report.lists);

    if report.is_degraded() {
        let missing = report.missing().count();
        println!(
            "\n{}",
            format!("⚠ {missing} list(s) not found; emitted as empty arrays")
                .yellow()
                .bold()
        );
    }
}

/// Print the result of a source check
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "SOURCE CHECK".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    print_lists(&report.lists);

    println!();
    if report.is_complete() {
        println!(
            "{}",
            format!(
                "✅ All {} lists found ({} items)",
                report.lists.len(),
                report.total_items()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ {} of {} lists missing",
                report.missing_count(),
                report.lists.len()
            )
            .red()
            .bold()
        );
    }
}

fn print_lists(lists: &[ExtractedList]) {
    let width = lists
        .iter()
        .map(|l| l.symbol.as_str().len())
        .max()
        .unwrap_or(0);

    for list in lists {
        let symbol = format!("{:width$}", list.symbol.as_str());
        if list.found {
            println!("   {}  {}", symbol, list.len().to_string().bright_yellow());
        } else {
            println!("   {}  {}", symbol.red(), "not found".red());
        }
    }
}

/// `"2 faker_first_names_male, 1 faker_words"`
#[must_use]
pub fn summarize_counts(lists: &[ExtractedList]) -> String {
    if lists.is_empty() {
        return "no lists".to_string();
    }

    lists
        .iter()
        .map(|l| format!("{} {}", l.len(), l.symbol))
        .collect::<Vec<_>>()
        .join(", ")
}
