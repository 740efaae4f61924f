use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pvsum_common::{config::Config, success};
use pvsum_core::{Extractor, PowerReport, Source, export};

use crate::commands::write_destination;
use crate::terminal::print;

pub fn export(source: Source, output: Option<PathBuf>, cfg: &Config) -> anyhow::Result<()> {
    export_into(source, output.as_deref(), cfg, &mut io::stdout().lock())
}

pub fn export_into(
    source: Source,
    output: Option<&Path>,
    cfg: &Config,
    stdout: &mut dyn Write,
) -> anyhow::Result<()> {
    let text: String = source.read()?;
    print::loaded(&source, &text, cfg.quiet);

    let report: PowerReport = Extractor::from_config(cfg).scan(&text);

    write_destination(output, stdout, |out| export::write_csv(&report, out))?;

    if let Some(path) = output {
        if cfg.quiet < 2 {
            let unit: &str = if report.len() == 1 { "reading" } else { "readings" };
            success!("{} {unit} written to {}", report.len(), path.display());
        }
    }
    Ok(())
}
