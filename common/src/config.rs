//! # Configuration
//!
//! Holds the fixed handling thresholds and the presentation flags of a run.
//!
//! The thresholds are compile-time constants. The decision logic in
//! `sortr-core` only ever reads them through these names.

/// Any single dimension (cm) at or above this marks a package as oversized.
pub const OVERSIZED_DIMENSION: f64 = 150.0;

/// A volume (cm³) at or above this marks a package as oversized.
pub const BULKY_VOLUME: f64 = 1_000_000.0;

/// A mass at or above this marks a package as heavy.
pub const HEAVY_MASS: f64 = 20.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Skips the banner printed at start-up.
    pub no_banner: bool,
    /// `1` hides headers, `2` also hides the assessment details.
    ///
    /// The category token itself is always written to stdout.
    pub quiet: u8,
    /// Lowers the default log filter to `debug`.
    pub verbose: bool,
}

impl Config {
    /// The default `EnvFilter` directive when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
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
