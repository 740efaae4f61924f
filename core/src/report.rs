use std::fmt;

/// One site block that produced a value.
#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    /// The marker line, trimmed.
    pub site: String,
    pub active_power_mw: f64,
}

impl Reading {
    pub fn new(site: impl Into<String>, active_power_mw: f64) -> Self {
        Self {
            site: site.into(),
            active_power_mw,
        }
    }
}

/// Counters collected during a scan.
///
/// `skipped` is every marker whose next line did not parse, including a
/// marker on the last line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub markers: usize,
    pub skipped: usize,
}

/// Readings in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PowerReport {
    readings: Vec<Reading>,
    stats: ScanStats,
}

impl PowerReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, reading: Reading) {
        self.stats.markers += 1;
        self.readings.push(reading);
    }

    pub fn skip(&mut self) {
        self.stats.markers += 1;
        self.stats.skipped += 1;
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    pub fn values(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.active_power_mw).collect()
    }

    /// Left-to-right sum of every value, `0.0` when there are none.
    pub fn total(&self) -> f64 {
        self.readings
            .iter()
            .fold(0.0, |acc, reading| acc + reading.active_power_mw)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Renders values the way they are printed on the summary line,
/// e.g. `[5.0, -2.5]`.
pub struct ValueList<'a>(pub &'a PowerReport);

impl fmt::Display for ValueList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, reading) in self.0.readings.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", reading.active_power_mw)?;
        }
        f.write_str("]")
    }
}
