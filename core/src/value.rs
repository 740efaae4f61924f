//! Interpretation of the candidate line that follows a marker.
//!
//! A candidate that does not yield a number is simply absent and the scan
//! drops that site block.

use std::sync::LazyLock;

use pvsum_common::config::Config;
use regex::Regex;

/// First signed number on a line, with `.` or `,` as decimal separator.
static NUMBER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?\d+(?:[.,]\d+)?").unwrap());

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValueMode {
    /// The whole trimmed line must be a float literal.
    #[default]
    Strict,
    /// The first numeric token on the line is used, decimal comma allowed.
    Lenient,
}

impl ValueMode {
    pub fn from_config(cfg: &Config) -> Self {
        if cfg.lenient {
            Self::Lenient
        } else {
            Self::Strict
        }
    }
}

/// Attempts to read an active power value from `line`.
pub fn parse_candidate(line: &str, mode: ValueMode) -> Option<f64> {
    match mode {
        ValueMode::Strict => parse_strict(line),
        ValueMode::Lenient => parse_lenient(line),
    }
}

fn parse_strict(line: &str) -> Option<f64> {
    line.trim().parse::<f64>().ok()
}

fn parse_lenient(line: &str) -> Option<f64> {
    let token: &str = NUMBER_TOKEN.find(line)?.as_str();
    token.replacen(',', ".", 1).parse::<f64>().ok()
}
