//! # Active Power Extraction
//!
//! Pulls the active power reading of every site block out of a pasted
//! dispatch report and adds them up.
//!
//! * **[`extract`]**: the single forward scan with one line of lookahead.
//! * **[`markers`]**: which lines open a site block.
//! * **[`value`]**: how the line after a marker becomes a number.
//! * **[`report`]**: the ordered readings and their total.
//! * **[`source`]**: where the raw text comes from.
//! * **[`curtail`]**: curtailment orders to per-site windows.
//! * **[`export`]**: semicolon CSV output.
//! * **[`numbers`]**: every numeric token in the text, for diagnostics only.

pub mod curtail;
pub mod export;
pub mod extract;
pub mod markers;
pub mod numbers;
pub mod report;
pub mod source;
pub mod value;

pub use curtail::{CurtailError, CurtailmentRow};
pub use extract::{Extractor, extract};
pub use markers::MarkerSet;
pub use report::{PowerReport, Reading, ScanStats, ValueList};
pub use source::{Source, SourceError};
pub use value::ValueMode;
