use std::io::{self, Write};
use std::time::Instant;

use anyhow::Context;
use pvsum_common::config::Config;
use pvsum_core::{Extractor, PowerReport, Source, numbers};
use tracing::debug;

use crate::terminal::print;

pub fn sum(source: Source, cfg: &Config) -> anyhow::Result<()> {
    sum_into(source, cfg, &mut io::stdout().lock())
}

/// Runs the scan and writes the two result lines to `out`.
pub fn sum_into<W: Write>(source: Source, cfg: &Config, out: &mut W) -> anyhow::Result<()> {
    let text: String = source.read()?;
    print::loaded(&source, &text, cfg.quiet);

    let start_time: Instant = Instant::now();
    let report: PowerReport = Extractor::from_config(cfg).scan(&text);

    let stats = report.stats();
    debug!(
        markers = stats.markers,
        skipped = stats.skipped,
        elapsed_us = start_time.elapsed().as_micros() as u64,
        "scan finished"
    );
    debug!("{} numeric tokens in report", numbers::all_numbers(&text).len());

    print::readings(&report, cfg.quiet);
    print::results(&report, out).context("failed to write results")?;
    print::summary(&report, cfg.quiet);

    Ok(())
}
