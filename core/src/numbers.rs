//! Every numeric token in a report.
//!
//! Diagnostic only. Nothing here feeds the reading list or the total.

use std::sync::LazyLock;

use regex::Regex;

static FLOAT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?[0-9]*\.?[0-9]+").unwrap());

/// Returns each numeric token of `text` in order of appearance.
pub fn all_numbers(text: &str) -> Vec<f64> {
    FLOAT_TOKEN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}
