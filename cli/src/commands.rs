pub mod classify;
pub mod thresholds;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sortr")]
#[command(about = "Sorts packages into STANDARD, SPECIAL or REJECTED handling.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output; repeat to also hide the assessment details
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Log debug events
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a package from its width, height, length (cm) and mass
    #[command(alias = "c")]
    Classify {
        /// WIDTH HEIGHT LENGTH MASS, taken as raw text so malformed readings
        /// are reported by the classifier itself
        #[arg(num_args = 0..=4, allow_negative_numbers = true, value_name = "READING")]
        readings: Vec<String>,
    },
    /// Show the fixed handling thresholds
    #[command(alias = "t")]
    Thresholds,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
