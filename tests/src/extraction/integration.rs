#![cfg(test)]
use approx::assert_relative_eq;
use pvsum_common::config::Config;
use pvsum_core::source::SAMPLE_REPORT;
use pvsum_core::{Extractor, Source, ValueList, export, extract, numbers};
use crate::fixtures::{header_rows, site_block};

#[test]
fn bundled_report_yields_every_parsable_site() {
    let text: String = Source::Sample.read().unwrap();
    let report = extract(&text);

    assert_eq!(report.stats().markers, 32);
    assert_eq!(report.stats().skipped, 1);
    assert_eq!(report.len(), 31);
    assert_relative_eq!(report.total(), 573.63, epsilon = 1e-9);

    let values = report.values();
    assert_eq!(values.first(), Some(&13.13));
    assert_eq!(values.get(1), Some(&-0.12));
    assert_eq!(values.last(), Some(&15.4));
}

#[test]
fn blank_value_line_drops_only_that_site() {
    let report = extract(SAMPLE_REPORT);

    assert!(
        report
            .readings()
            .iter()
            .all(|r| r.site != "PV-SANTIZ III (VALDELOSA I)")
    );
    assert_eq!(report.readings()[0].site, "PV-SANTIZ II (PALACIOS ARZB. I)");
}

#[test]
fn diagnostic_numbers_do_not_touch_the_total() {
    let report = extract(SAMPLE_REPORT);
    let every_number: Vec<f64> = numbers::all_numbers(SAMPLE_REPORT);

    assert!(every_number.len() > report.len());
    assert_relative_eq!(report.total(), 573.63, epsilon = 1e-9);
}

#[test]
fn synthetic_report_sums_block_values() {
    let mut text: String = header_rows();
    text.push_str(&site_block("PV-NORTE", "10.5"));
    text.push_str(&site_block("SAT-WF SUR", " -1.25\t"));
    text.push_str(&site_block("PV-ESTE", "n/a"));
    text.push_str(&site_block("SAT-OESTE", "0.75"));

    let report = extract(&text);

    assert_eq!(report.values(), vec![10.5, -1.25, 0.75]);
    assert_relative_eq!(report.total(), 10.0);
    assert_eq!(ValueList(&report).to_string(), "[10.5, -1.25, 0.75]");
}

#[test]
fn lenient_mode_reads_decimal_commas() {
    let mut text: String = header_rows();
    text.push_str(&site_block("PV-NORTE", "10,5"));
    text.push_str(&site_block("PV-SUR", "2.5 MW"));

    assert!(extract(&text).is_empty());

    let cfg = Config {
        lenient: true,
        ..Config::default()
    };
    let report = Extractor::from_config(&cfg).scan(&text);
    assert_eq!(report.values(), vec![10.5, 2.5]);
}

#[test]
fn export_lists_sites_of_the_bundled_report() {
    let report = extract(SAMPLE_REPORT);
    let csv: String = export::to_csv(&report).unwrap();
    let mut lines = csv.lines();

    assert_eq!(lines.next(), Some("site;activePower (MW)"));
    assert_eq!(lines.next(), Some("PV-SANTIZ II (PALACIOS ARZB. I);13.13"));
    assert_eq!(csv.lines().count(), report.len() + 1);
}
