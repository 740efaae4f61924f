pub const DEFAULT_MARKERS: &[&str] = &["PV-", "SAT-"];

#[derive(Clone, Debug)]
pub struct Config {
    /// Prefixes that open a site block.
    ///
    /// An empty list falls back to [`DEFAULT_MARKERS`].
    pub markers: Vec<String>,
    /// Compares prefixes without regard to ASCII case.
    pub ignore_case: bool,
    /// Reads the first number on the candidate line instead of requiring
    /// the whole line to be a float. Accepts a decimal comma.
    pub lenient: bool,
    /// 0 prints decoration, 1 drops the banner and headers, 2 also drops
    /// status lines. Results on stdout and `-v` debug output are kept.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            markers: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
            ignore_case: false,
            lenient: false,
            quiet: 0,
        }
    }
}
