//! Shared pieces of the `sortr` workspace: handling thresholds, run
//! configuration and the status-line macros used by the binary.

pub mod config;
pub mod status;
