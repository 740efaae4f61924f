#![cfg(test)]
use chrono::NaiveDate;
use pvsum_core::curtail::{self, PLANT_NAMES};
use pvsum_core::export;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

#[test]
fn every_mapped_plant_is_accepted_in_email_orders() {
    let mut text: String = String::from("Activo\tFecha\tInicio\tFin\tSetpoint\n");
    for (alias, _) in PLANT_NAMES {
        text.push_str(&format!("{alias}\t30/06\t13:00\t14:00\t0 MW\n"));
    }

    let rows = curtail::parse(&text, day()).unwrap();
    let sites: Vec<&str> = rows.iter().map(|r| r.site.as_str()).collect();
    let codes: Vec<&str> = PLANT_NAMES.iter().map(|(_, code)| *code).collect();

    assert_eq!(sites, codes);
}

#[test]
fn quarterly_order_exports_one_row_per_quarter() {
    let text = "Hora\t23-24\n\tQ1\tQ2\tQ3\tQ4\nRHEA\t4,25\t4,25\t0\t0\n";
    let rows = curtail::parse(text, day()).unwrap();

    let mut buf: Vec<u8> = Vec::new();
    export::write_curtailment_csv(&rows, &mut buf).unwrap();
    let csv: String = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], "PV-RHEA SOLAR;2025/06/30 23:00;2025/06/30 23:15;4.25");
    assert_eq!(lines[4], "PV-RHEA SOLAR;2025/06/30 23:45;2025/07/01 00:00;0");
}
