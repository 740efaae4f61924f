use std::fmt::Display;
use std::io::{self, Write};

use colored::*;
use pvsum_core::{PowerReport, Source, ValueList};
use tracing::info;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "pvsum::print";

/// Decoration line on stderr, drawn as-is by the formatter.
pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(q_level: u8) {
    if q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ PVSUM v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = console::measure_text_width(&text_content);
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();

    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str) {
    let space: String = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

pub fn aligned_line<V: Display>(key: &str, key_width: usize, value: V) {
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.chars().count()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!(
        "{} {}{} {}",
        prefix,
        key.color(colors::PRIMARY),
        colon,
        value
    ));
}

/// One aligned `site....: value MW` line per reading.
pub fn readings(report: &PowerReport, q_level: u8) {
    if q_level > 1 || report.is_empty() {
        return;
    }

    let key_width: usize = report
        .readings()
        .iter()
        .map(|r| r.site.chars().count())
        .max()
        .unwrap_or(0);

    for reading in report.readings() {
        let value: String = format!("{:>8.2} MW", reading.active_power_mw);
        let value: ColoredString = if reading.active_power_mw < 0.0 {
            value.color(colors::NEGATIVE)
        } else {
            value.color(colors::TEXT_DEFAULT)
        };
        aligned_line(&reading.site, key_width, value);
    }
}

/// The two result lines. Written whatever the quiet level.
pub fn results<W: Write>(report: &PowerReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "Active power values: {}", ValueList(report))?;
    writeln!(out, "Total active power (MW): {:?}", report.total())
}

pub fn loaded(source: &Source, text: &str, q_level: u8) {
    if q_level > 1 {
        return;
    }
    pvsum_common::info!("Loaded {} lines from {source}", text.lines().count());
}

pub fn summary(report: &PowerReport, q_level: u8) {
    if q_level > 1 {
        return;
    }

    let count: ColoredString = format!("{} sites", report.len()).bold().green();
    let total: ColoredString = format!("{:.2} MW", report.total()).bold().color(colors::ACCENT);
    let output: String = format!("Active power: {count} totalling {total}");

    if q_level == 0 {
        fat_separator();
        centerln(&output);
    } else {
        print(&output);
    }
}
