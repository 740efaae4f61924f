use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use pvsum_common::{config::Config, success};
use pvsum_core::{CurtailmentRow, Source, curtail, export};

use crate::commands::write_destination;
use crate::terminal::print;

/// Day a curtailment order applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Day {
    Today,
    Tomorrow,
    On(NaiveDate),
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "tomorrow" => Ok(Self::Tomorrow),
            other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
                .map(Self::On)
                .map_err(|e| format!("invalid day '{s}': {e}")),
        }
    }
}

impl Day {
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Today => today,
            Self::Tomorrow => today.succ_opt().unwrap_or(today),
            Self::On(day) => day,
        }
    }
}

pub fn curtail(source: Source, day: Day, output: Option<PathBuf>, cfg: &Config) -> anyhow::Result<()> {
    let day: NaiveDate = day.resolve(Local::now().date_naive());
    curtail_into(source, day, output.as_deref(), cfg, &mut io::stdout().lock())
}

pub fn curtail_into(
    source: Source,
    day: NaiveDate,
    output: Option<&Path>,
    cfg: &Config,
    stdout: &mut dyn Write,
) -> anyhow::Result<()> {
    let text: String = source.read()?;
    print::loaded(&source, &text, cfg.quiet);

    let rows: Vec<CurtailmentRow> = curtail::parse(&text, day)?;

    write_destination(output, stdout, |out| export::write_curtailment_csv(&rows, out))?;

    if cfg.quiet < 2 {
        let unit: &str = if rows.len() == 1 { "window" } else { "windows" };
        success!("{} curtailment {unit} for {day}", rows.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const ORDER: &str = "Activo\tFecha\tInicio\tFin\tSetpoint\n\
                         PEREA e VEGON\t07/03\t10:00\t12:00\t15,5 MW\n";

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    #[test]
    fn day_keywords_and_dates_parse() {
        assert_eq!(Day::from_str("today"), Ok(Day::Today));
        assert_eq!(Day::from_str("Tomorrow"), Ok(Day::Tomorrow));
        assert_eq!(Day::from_str("2025-03-07"), Ok(Day::On(day())));
        assert!(Day::from_str("07/03/2025").is_err());
    }

    #[test]
    fn tomorrow_resolves_to_the_next_day() {
        assert_eq!(Day::Tomorrow.resolve(day()), day().succ_opt().unwrap());
        assert_eq!(Day::Today.resolve(day()), day());
    }

    #[test]
    fn email_order_is_written_to_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("order.txt");
        fs::write(&input, ORDER).unwrap();

        let mut out: Vec<u8> = Vec::new();
        curtail_into(Source::File(input), day(), None, &Config::default(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "site;startsAt (yyyy/mm/dd hh:mm);endAt (yyyy/mm/dd hh:mm);power (mw)\n\
             PV-PEREA;2025/03/07 10:00;2025/03/07 12:00;15.5\n\
             PV-VEGON;2025/03/07 10:00;2025/03/07 12:00;15.5\n"
        );
    }

    #[test]
    fn single_line_order_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("order.txt");
        fs::write(&input, "Activo\tSetpoint\n").unwrap();

        let mut out: Vec<u8> = Vec::new();
        let result = curtail_into(Source::File(input), day(), None, &Config::default(), &mut out);

        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
