//! # Report Sources
//!
//! The raw text of a report is loaded once, in full, before the scan starts.
//! It can come from:
//! * The bundled sample report captured from the dispatch console.
//! * Standard input (`-`).
//! * A file on disk.

use std::convert::Infallible;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Sample dispatch report, one block per site.
pub const SAMPLE_REPORT: &str = include_str!("../data/sample_report.txt");

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read '{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),
    #[error("{origin} is not valid UTF-8")]
    NotUtf8 { origin: String },
}

/// Where a report is read from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Source {
    /// The bundled [`SAMPLE_REPORT`].
    #[default]
    Sample,
    Stdin,
    File(PathBuf),
}

impl FromStr for Source {
    type Err = Infallible;

    /// `-` selects standard input; anything else is taken as a path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(Self::Stdin),
            path => Ok(Self::File(PathBuf::from(path))),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sample => f.write_str("bundled sample report"),
            Self::Stdin => f.write_str("standard input"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Source {
    /// Loads the whole report as UTF-8 text.
    pub fn read(&self) -> Result<String, SourceError> {
        match self {
            Self::Sample => Ok(SAMPLE_REPORT.to_string()),
            Self::Stdin => read_from(io::stdin().lock(), self),
            Self::File(path) => {
                let bytes: Vec<u8> = fs::read(path).map_err(|source| SourceError::File {
                    path: path.clone(),
                    source,
                })?;
                decode(bytes, self)
            }
        }
    }
}

fn read_from<R: Read>(mut reader: R, origin: &Source) -> Result<String, SourceError> {
    let mut bytes: Vec<u8> = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(SourceError::Stdin)?;
    decode(bytes, origin)
}

fn decode(bytes: Vec<u8>, origin: &Source) -> Result<String, SourceError> {
    String::from_utf8(bytes).map_err(|_| SourceError::NotUtf8 {
        origin: origin.to_string(),
    })
}
