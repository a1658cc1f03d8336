//! Presentation model for an analysis. Pure data; `main.rs` decides how to paint it.

use crate::models::AnalysisResult;
use crate::state::AnalyzerState;

pub const BEST_MATCH: &str = "Best Match";

/// One line of the "Role Matching Probabilities" list.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRow {
    pub category: String,
    /// Probability as a percentage with one decimal, e.g. `82.0%`.
    pub percent: String,
    /// Bar fill, 0.0 – 100.0.
    pub fill: f64,
    pub badge: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub predicted_category: String,
    pub rows: Vec<MatchRow>,
}

/// Builds the view in the order the classifier produced. The first row is the best match;
/// nothing is re-sorted.
pub fn result_view(result: &AnalysisResult) -> ResultView {
    let rows = result
        .top_matches
        .iter()
        .enumerate()
        .map(|(index, entry)| MatchRow {
            category: entry.category.clone(),
            percent: format_probability(entry.probability),
            fill: (entry.probability * 100.0).clamp(0.0, 100.0),
            badge: (index == 0).then_some(BEST_MATCH),
        })
        .collect();

    ResultView {
        predicted_category: result.predicted_category.clone(),
        rows,
    }
}

/// One decimal, with exact ties rounded away from zero (`0.25` -> `0.3`). `{:.1}` alone
/// would round those ties to even.
pub fn format_probability(probability: f64) -> String {
    let percent = probability * 100.0;
    let percent = if is_exact_tie(percent) {
        (percent * 10.0).round() / 10.0
    } else {
        percent
    };
    format!("{percent:.1}%")
}

/// Whether `value` sits exactly halfway between two one-decimal numbers.
fn is_exact_tie(value: f64) -> bool {
    // 60 places hold the full expansion of any tie in range; ties need at least 0.05
    let expanded = format!("{:.60}", value.abs());
    let Some((_, fraction)) = expanded.split_once('.') else {
        return false;
    };
    fraction.as_bytes().get(1) == Some(&b'5') && fraction[2..].bytes().all(|b| b == b'0')
}

/// Fixed-width text bar for a fill percentage.
pub fn progress_bar(fill: f64, width: usize) -> String {
    let filled = ((fill.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Line describing the drop zone.
pub fn drop_zone_label(state: &AnalyzerState) -> String {
    match state.file() {
        Some(file) => format!("Selected: {}", file.name),
        None => "Drag & drop a PDF/DOCX file here, or click to select".to_string(),
    }
}
