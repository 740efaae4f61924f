//! # Curtailment Tables
//!
//! Converts a curtailment order pasted from the grid operator into one
//! window per site. Two layouts arrive in practice:
//! * **Email**: a header naming `Activo` and `Setpoint`, then one tab
//!   separated row per order: `sites, _, HH:MM, HH:MM, power MW`. Several
//!   sites can share a row (`PEREA e VEGON`, `PEREA, VEGON`).
//! * **Quarterly**: an hour label row (`08-09`), a quarter label row
//!   (`Q1`..`Q4`), then one row per site with a power value per quarter.
//!
//! Site names are translated to console codes through [`PLANT_NAMES`].
//! Rows with an unknown site, an unreadable time or an unreadable power
//! are left out.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use regex::Regex;
use thiserror::Error;

/// Operator name to console site code.
pub const PLANT_NAMES: &[(&str, &str)] = &[
    ("PEREA", "PV-PEREA"),
    ("VEGON", "PV-VEGON"),
    ("ESCATRON", "PV-ESCATRON"),
    ("ENVITERO", "PV-ENVITERO"),
    ("LOGRO", "PV-LOGRO"),
    ("TORRE BELA", "NON-PV-TORRE BELA BASE"),
    ("SOBREEQUIP TORRE BELA", "NON-PV-TORRE BELA REEQUIPAMIENTO"),
    ("RIO MAIOR", "NON-PV-RIO MAIOR BASE"),
    ("SOBREEQUIP RIO MAIOR", "NON-PV-RIO MAIOR REEQUIPAMIENTO"),
    ("AURIGA", "PV-AURIGA SOLAR"),
    ("BELINCHON I", "PV-BELINCHON I"),
    ("CEPHEUS", "PV-CEPHEUS SOLAR"),
    ("MEDINA DEL CAMPO I", "PV-MEDINA DEL CAMPO I"),
    ("TETHYS", "PV-TETHYS SOLAR"),
    ("TELESTO", "PV-TELESTO SOLAR"),
    ("THERMISTO", "PV-THERMISTO"),
    ("TELESTO 7", "PV-TELESTO SOLAR 7"),
    ("RHEA", "PV-RHEA SOLAR"),
    ("HINOJOSAS", "PV-HINOJOSAS I"),
];

const QUARTER_MINUTES: i64 = 15;

/// Portuguese "and" between site names in an email row.
static NAME_JOINER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i) e ").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurtailError {
    #[error("curtailment table needs a header row and at least one data row")]
    TooShort,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableLayout {
    Email,
    Quarterly,
}

/// One curtailment window for one site.
#[derive(Clone, Debug, PartialEq)]
pub struct CurtailmentRow {
    pub site: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub power_mw: f64,
}

/// Looks up the console code for an operator site name, ignoring case.
pub fn site_code(name: &str) -> Option<&'static str> {
    let name: String = name.trim().to_uppercase();
    PLANT_NAMES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, code)| *code)
}

pub fn detect_layout(header: &str) -> TableLayout {
    let header: String = header.to_lowercase();
    if header.contains("activo") && header.contains("setpoint") {
        TableLayout::Email
    } else {
        TableLayout::Quarterly
    }
}

/// Parses a pasted curtailment table, placing every window on `day`.
pub fn parse(text: &str, day: NaiveDate) -> Result<Vec<CurtailmentRow>, CurtailError> {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Err(CurtailError::TooShort);
    }

    let rows: Vec<CurtailmentRow> = match detect_layout(lines[0]) {
        TableLayout::Email => parse_email(&lines[1..], day),
        TableLayout::Quarterly => parse_quarterly(&lines, day),
    };
    Ok(rows)
}

fn parse_email(lines: &[&str], day: NaiveDate) -> Vec<CurtailmentRow> {
    let mut rows: Vec<CurtailmentRow> = Vec::new();

    for line in lines {
        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() < 5 {
            continue;
        }

        let (Some(starts_at), Some(ends_at)) = (clock_time(day, parts[2]), clock_time(day, parts[3]))
        else {
            continue;
        };
        let Some(power_mw) = parse_power(&parts[4].replace("MW", "")) else {
            continue;
        };

        let names: String = NAME_JOINER.replace_all(parts[0], ",").into_owned();
        for site in names.split(',').filter_map(site_code) {
            rows.push(CurtailmentRow {
                site: site.to_string(),
                starts_at,
                ends_at,
                power_mw,
            });
        }
    }

    rows
}

fn parse_quarterly(lines: &[&str], day: NaiveDate) -> Vec<CurtailmentRow> {
    let hour_labels: Vec<&str> = lines[0].split('\t').skip(1).collect();
    let quarter_labels: Vec<&str> = lines[1].split('\t').skip(1).collect();
    let mut rows: Vec<CurtailmentRow> = Vec::new();

    for line in &lines[2..] {
        let mut cols = line.split('\t');
        let Some(site) = cols.next().and_then(site_code) else {
            continue;
        };

        let mut hour_idx: usize = 0;
        for (idx, raw) in cols.enumerate() {
            let quarter: &str = quarter_labels.get(idx).map_or("", |q| q.trim());
            let hour: Option<i64> = hour_labels
                .get(hour_idx)
                .and_then(|label| label.split('-').next())
                .and_then(leading_int);

            let window: Option<NaiveDateTime> = hour
                .zip(quarter_number(quarter))
                .and_then(|(h, q)| at(day, h, (q - 1) * QUARTER_MINUTES));

            if let (Some(starts_at), Some(power_mw)) = (window, parse_power(raw)) {
                rows.push(CurtailmentRow {
                    site: site.to_string(),
                    starts_at,
                    ends_at: starts_at + TimeDelta::minutes(QUARTER_MINUTES),
                    power_mw,
                });
            }

            if quarter == "Q4" {
                hour_idx += 1;
            }
        }
    }

    rows
}

/// `HH:MM` on `day`. `24:00` is midnight of the next day.
fn clock_time(day: NaiveDate, s: &str) -> Option<NaiveDateTime> {
    let (hours, minutes) = s.trim().split_once(':')?;
    let hours: i64 = hours.trim().parse().ok()?;
    let minutes: i64 = minutes.trim().parse().ok()?;
    if !(0..60).contains(&minutes) {
        return None;
    }
    at(day, hours, minutes)
}

fn at(day: NaiveDate, hours: i64, minutes: i64) -> Option<NaiveDateTime> {
    if !(0..=24).contains(&hours) {
        return None;
    }
    let midnight: NaiveDateTime = day.and_hms_opt(0, 0, 0)?;
    Some(midnight + TimeDelta::minutes(hours * 60 + minutes))
}

fn quarter_number(label: &str) -> Option<i64> {
    let number: i64 = leading_int(&label.replace('Q', ""))?;
    (1..=4).contains(&number).then_some(number)
}

fn leading_int(s: &str) -> Option<i64> {
    let s: &str = s.trim();
    let end: usize = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

fn parse_power(raw: &str) -> Option<f64> {
    raw.trim().replacen(',', ".", 1).parse::<f64>().ok()
}
