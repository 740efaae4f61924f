mod commands;
mod terminal;

use commands::{CommandLine, Commands, curtail, export, sum};
use pvsum_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose);

    let cfg: Config = commands.config();
    print::banner(cfg.quiet);

    match commands.command {
        Commands::Sum { input } => {
            print::header("summing active power", cfg.quiet);
            sum::sum(input.unwrap_or_default(), &cfg)
        }
        Commands::Export { input, output } => {
            print::header("exporting readings", cfg.quiet);
            export::export(input.unwrap_or_default(), output, &cfg)
        }
        Commands::Curtail { input, date, output } => {
            print::header("converting curtailment", cfg.quiet);
            curtail::curtail(input, date, output, &cfg)
        }
    }
}
