//! Helpers for building synthetic dispatch reports.

/// Rows that follow the active power line inside every console block.
const TRAILING_ROWS: &[&str] = &["24.96\t", "13.14", "13.14\t", "AGC", "49 €\t--\t--\t", "1"];

/// Builds one site block as it appears when pasted from the console.
pub fn site_block(site: &str, active_power: &str) -> String {
    let mut block: String = format!("{site}\n{active_power}\n");
    for row in TRAILING_ROWS {
        block.push_str(row);
        block.push('\n');
    }
    block
}

/// Column header rows that precede the first site.
pub fn header_rows() -> String {
    ["Site", "Status", "Active power (MW)", "Hour +1 (MWh)", "SP By AGC (MW)"]
        .iter()
        .map(|row| format!("{row}\n"))
        .collect()
}
