mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, classify, thresholds};
use sortr_common::{config::Config, error};
use terminal::{logging, print};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        verbose: commands.verbose,
    };

    logging::init_logging(&cfg);
    print::banner(cfg.no_banner, cfg.quiet);

    match run(commands.command, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, cfg: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Classify { readings } => {
            print::header("classifying package", cfg.quiet);
            classify::classify(&readings, cfg)
        }
        Commands::Thresholds => {
            print::header("handling thresholds", cfg.quiet);
            thresholds::thresholds();
            Ok(())
        }
    }
}
