//! Semicolon separated exports: one row per site reading, or one row per
//! curtailment window.

use std::io::Write;

use csv::{Writer, WriterBuilder};

use crate::curtail::CurtailmentRow;
use crate::report::PowerReport;

pub const CSV_HEADER: [&str; 2] = ["site", "activePower (MW)"];

pub const CURTAILMENT_HEADER: [&str; 4] = [
    "site",
    "startsAt (yyyy/mm/dd hh:mm)",
    "endAt (yyyy/mm/dd hh:mm)",
    "power (mw)",
];

/// Timestamp layout expected by the scheduling import.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M";

fn writer<W: Write>(out: W) -> Writer<W> {
    WriterBuilder::new().delimiter(b';').from_writer(out)
}

/// Writes the header and one `site;value` row per reading.
pub fn write_csv<W: Write>(report: &PowerReport, out: W) -> csv::Result<()> {
    let mut wtr: Writer<W> = writer(out);
    wtr.write_record(CSV_HEADER)?;
    for reading in report.readings() {
        let value: String = reading.active_power_mw.to_string();
        wtr.write_record([reading.site.as_str(), value.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the header and one row per curtailment window.
pub fn write_curtailment_csv<W: Write>(rows: &[CurtailmentRow], out: W) -> csv::Result<()> {
    let mut wtr: Writer<W> = writer(out);
    wtr.write_record(CURTAILMENT_HEADER)?;
    for row in rows {
        let starts_at: String = row.starts_at.format(TIMESTAMP_FORMAT).to_string();
        let ends_at: String = row.ends_at.format(TIMESTAMP_FORMAT).to_string();
        let power: String = row.power_mw.to_string();
        wtr.write_record([row.site.as_str(), starts_at.as_str(), ends_at.as_str(), power.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn to_csv(report: &PowerReport) -> csv::Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_csv(report, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Reading;
    use chrono::NaiveDate;

    #[test]
    fn rows_follow_report_order() {
        let mut report = PowerReport::new();
        report.push(Reading::new("PV-A", 5.0));
        report.push(Reading::new("SAT-C", -2.5));

        assert_eq!(
            to_csv(&report).unwrap(),
            "site;activePower (MW)\nPV-A;5\nSAT-C;-2.5\n"
        );
    }

    #[test]
    fn empty_report_is_header_only() {
        assert_eq!(to_csv(&PowerReport::new()).unwrap(), "site;activePower (MW)\n");
    }

    #[test]
    fn separator_in_site_name_is_quoted() {
        let mut report = PowerReport::new();
        report.push(Reading::new("PV-A;B \"north\"", 1.5));

        assert_eq!(
            to_csv(&report).unwrap(),
            "site;activePower (MW)\n\"PV-A;B \"\"north\"\"\";1.5\n"
        );
    }

    #[test]
    fn carriage_return_in_site_name_is_quoted() {
        // a lone \r survives `str::lines` when pasted from stdin
        let mut report = PowerReport::new();
        report.push(Reading::new("PV-A\rB", 1.0));

        assert_eq!(
            to_csv(&report).unwrap(),
            "site;activePower (MW)\n\"PV-A\rB\";1\n"
        );
    }

    #[test]
    fn curtailment_rows_use_slash_timestamps() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let rows = vec![CurtailmentRow {
            site: "PV-PEREA".to_string(),
            starts_at: day.and_hms_opt(9, 45, 0).unwrap(),
            ends_at: day.and_hms_opt(10, 0, 0).unwrap(),
            power_mw: 12.5,
        }];
        let mut buf: Vec<u8> = Vec::new();
        write_curtailment_csv(&rows, &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "site;startsAt (yyyy/mm/dd hh:mm);endAt (yyyy/mm/dd hh:mm);power (mw)\n\
             PV-PEREA;2025/03/07 09:45;2025/03/07 10:00;12.5\n"
        );
    }
}
