pub mod curtail;
pub mod export;
pub mod sum;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use pvsum_common::config::{Config, DEFAULT_MARKERS};
use pvsum_core::Source;

use curtail::Day;

#[derive(Parser)]
#[command(name = "pvsum")]
#[command(about = "Sums the active power of every site in a pasted dispatch report.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Prefix of a site line, repeat for several (default: PV- and SAT-)
    #[arg(short, long = "marker", value_name = "PREFIX", global = true)]
    pub markers: Vec<String>,

    /// Match site prefixes regardless of ASCII case
    #[arg(short, long, global = true)]
    pub ignore_case: bool,

    /// Take the first number on the value line, decimal comma allowed
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Less decoration on stderr, repeat to drop it entirely
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// More log output on stderr, repeat for trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the active power values and their total
    #[command(alias = "s")]
    Sum {
        /// Report file, `-` for stdin, bundled sample when omitted
        input: Option<Source>,
    },
    /// Write one `site;value` row per reading
    #[command(alias = "e")]
    Export {
        /// Report file, `-` for stdin, bundled sample when omitted
        input: Option<Source>,
        /// Destination file, stdout when omitted
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Turn a pasted curtailment order into `site;start;end;power` rows
    #[command(alias = "c")]
    Curtail {
        /// Order file, `-` for stdin
        input: Source,
        /// Day the windows fall on: today, tomorrow or YYYY-MM-DD
        #[arg(short, long, value_name = "DAY", default_value = "today")]
        date: Day,
        /// Destination file, stdout when omitted
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let markers: Vec<String> = if self.markers.is_empty() {
            DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect()
        } else {
            self.markers.clone()
        };

        Config {
            markers,
            ignore_case: self.ignore_case,
            lenient: self.lenient,
            quiet: self.quiet,
        }
    }
}

/// Writes CSV to `output`, or to `stdout` when no path is given.
pub fn write_destination<F>(
    output: Option<&Path>,
    stdout: &mut dyn Write,
    write: F,
) -> anyhow::Result<()>
where
    F: FnOnce(&mut dyn Write) -> csv::Result<()>,
{
    let Some(path) = output else {
        return write(stdout).context("failed to write to stdout");
    };

    let file: File =
        File::create(path).with_context(|| format!("failed to create '{}'", path.display()))?;
    let mut buf: BufWriter<File> = BufWriter::new(file);
    write(&mut buf).with_context(|| format!("failed to write '{}'", path.display()))?;
    buf.flush()
        .with_context(|| format!("failed to write '{}'", path.display()))?;

    Ok(())
}
