//! # Line Scan
//!
//! One forward pass over the lines of a report. Every marker line looks at
//! the line directly after it and nothing else: no backtracking, no search
//! for the "right" row further down the block.
//!
//! A candidate that fails to parse (blank, text, another marker, or no line
//! at all) is dropped without an error. The total then reflects only the
//! blocks that did parse.

use pvsum_common::config::Config;

use crate::markers::MarkerSet;
use crate::report::{PowerReport, Reading};
use crate::value::{self, ValueMode};

#[derive(Clone, Debug, Default)]
pub struct Extractor {
    markers: MarkerSet,
    mode: ValueMode,
}

impl Extractor {
    pub fn new(markers: MarkerSet, mode: ValueMode) -> Self {
        Self { markers, mode }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(MarkerSet::from_config(cfg), ValueMode::from_config(cfg))
    }

    /// Scans `text` and collects one reading per marker whose next line parses.
    pub fn scan(&self, text: &str) -> PowerReport {
        let lines: Vec<&str> = text.lines().collect();
        let mut report: PowerReport = PowerReport::new();

        for (idx, line) in lines.iter().enumerate() {
            if !self.markers.matches(line) {
                continue;
            }

            let candidate: Option<f64> = lines
                .get(idx + 1)
                .and_then(|next| value::parse_candidate(next, self.mode));

            match candidate {
                Some(active_power_mw) => report.push(Reading::new(line.trim(), active_power_mw)),
                None => report.skip(),
            }
        }

        report
    }
}

/// Scans `text` with the default `PV-` / `SAT-` markers and strict parsing.
pub fn extract(text: &str) -> PowerReport {
    Extractor::default().scan(text)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
