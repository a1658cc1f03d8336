//! Terminal output formatting.

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use analyzer_client::render::{progress_bar, ResultView};

const BAR_WIDTH: usize = 30;

/// Indeterminate progress indicator shown while a request is in flight.
pub fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

pub fn print_drop_zone(label: &str) {
    println!("{}", label.dimmed());
}

pub fn print_result(view: &ResultView) {
    println!();
    println!("{}", "Analysis Results".green().bold());
    println!();
    println!(
        "{} {}",
        "Primary Role:".bold(),
        view.predicted_category.cyan().bold()
    );
    println!();
    println!("{}", "Role Matching Probabilities:".bold());

    if view.rows.is_empty() {
        println!("  {}", "No matches returned.".dimmed());
        return;
    }

    for row in &view.rows {
        let bar = progress_bar(row.fill, BAR_WIDTH);
        let bar = if row.badge.is_some() {
            bar.blue()
        } else {
            bar.purple()
        };
        println!(
            "  {:<28} {:>7}  {}  {}",
            row.category,
            row.percent,
            bar,
            row.badge.unwrap_or_default().green()
        );
    }
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}
