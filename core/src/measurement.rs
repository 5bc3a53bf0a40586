//! # Measurements
//!
//! Every reading handed to the classifier is a plain `f64` tagged with the
//! [`Argument`] it stands for. A reading is valid when it is a number,
//! strictly positive and finite, checked in that order.

use std::fmt;

use thiserror::Error;

/// The four positional inputs of a classification, in parameter order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    Width,
    Height,
    Length,
    Mass,
}

impl Argument {
    pub const ALL: [Argument; 4] = [
        Argument::Width,
        Argument::Height,
        Argument::Length,
        Argument::Mass,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Argument::Width => "width",
            Argument::Height => "height",
            Argument::Length => "length",
            Argument::Mass => "mass",
        }
    }

    /// Width, height and length are dimensions; mass is not.
    pub fn is_dimension(self) -> bool {
        !matches!(self, Argument::Mass)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validation rule a reading can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    NotANumber,
    NotPositive,
    NotFinite,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rule::NotANumber => "a number",
            Rule::NotPositive => "greater than zero",
            Rule::NotFinite => "finite",
        };
        f.write_str(text)
    }
}

/// Raised when a reading fails validation.
///
/// Callers match on the rendered message, e.g. `"mass must be finite"`, so the
/// format is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{argument} must be {rule}")]
pub struct InvalidMeasurement {
    pub argument: Argument,
    pub rule: Rule,
}

impl InvalidMeasurement {
    pub fn new(argument: Argument, rule: Rule) -> Self {
        Self { argument, rule }
    }
}

/// Runs the full rule chain on a single reading: number, then strictly
/// positive, then finite.
pub fn validate(argument: Argument, value: f64) -> Result<f64, InvalidMeasurement> {
    let rule = if value.is_nan() {
        Rule::NotANumber
    } else if value <= 0.0 {
        Rule::NotPositive
    } else if !value.is_finite() {
        Rule::NotFinite
    } else {
        return Ok(value);
    };

    let err = InvalidMeasurement::new(argument, rule);
    tracing::debug!(%argument, value, "rejected reading: {err}");
    Err(err)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
