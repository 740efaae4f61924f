//! # Site Markers
//!
//! A marker line opens a site block. Recognition is a plain prefix test on
//! the line with its leading whitespace removed, nothing more: a value line
//! that happens to start with a prefix is a marker too.

use pvsum_common::config::{Config, DEFAULT_MARKERS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerSet {
    prefixes: Vec<String>,
    ignore_case: bool,
}

impl MarkerSet {
    /// Builds a set from the given prefixes.
    ///
    /// Empty prefixes are dropped since they would match every line. If none
    /// remain, the set falls back to [`DEFAULT_MARKERS`].
    pub fn new<I, S>(prefixes: I, ignore_case: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut prefixes: Vec<String> = prefixes
            .into_iter()
            .map(Into::into)
            .filter(|prefix: &String| !prefix.is_empty())
            .collect();

        if prefixes.is_empty() {
            prefixes = DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect();
        }

        Self {
            prefixes,
            ignore_case,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.markers.iter().cloned(), cfg.ignore_case)
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Returns `true` if `line` opens a site block.
    pub fn matches(&self, line: &str) -> bool {
        let line: &str = line.trim_start();
        self.prefixes
            .iter()
            .any(|prefix| starts_with(line, prefix, self.ignore_case))
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::new(DEFAULT_MARKERS.iter().copied(), false)
    }
}

fn starts_with(line: &str, prefix: &str, ignore_case: bool) -> bool {
    if !ignore_case {
        return line.starts_with(prefix);
    }

    line.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
