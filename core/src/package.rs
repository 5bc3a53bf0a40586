//! # Package Model
//!
//! A [`Package`] only exists once all four readings passed validation, so the
//! decision logic never has to look at a bad value.

use std::fmt;
use std::str::FromStr;

use crate::classifier;
use crate::measurement::{self, Argument, InvalidMeasurement};

/// Handling category. The rendered tokens are consumed downstream as
/// control tokens and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Standard,
    Special,
    Rejected,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Special => "SPECIAL",
            Category::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts the exact upper-case tokens only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STANDARD" => Ok(Category::Standard),
            "SPECIAL" => Ok(Category::Special),
            "REJECTED" => Ok(Category::Rejected),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

/// What made a package oversized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Oversize {
    /// The first dimension, in width/height/length order, at or above the
    /// length threshold.
    Dimension(Argument),
    /// No single dimension was too long but the volume met the threshold.
    Volume(f64),
}

/// The category of a package together with the flags that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub category: Category,
    pub oversized: Option<Oversize>,
    pub heavy: bool,
}

impl Assessment {
    pub fn is_oversized(&self) -> bool {
        self.oversized.is_some()
    }
}

/// Width, height and length in centimetres plus mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Package {
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
}

impl Package {
    /// Validates the readings in parameter order and fails on the first
    /// violation.
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> Result<Self, InvalidMeasurement> {
        Ok(Self {
            width: measurement::validate(Argument::Width, width)?,
            height: measurement::validate(Argument::Height, height)?,
            length: measurement::validate(Argument::Length, length)?,
            mass: measurement::validate(Argument::Mass, mass)?,
        })
    }

    /// Assembles a package from readings that already passed
    /// [`measurement::validate`].
    pub(crate) fn from_validated(width: f64, height: f64, length: f64, mass: f64) -> Self {
        Self {
            width,
            height,
            length,
            mass,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn get(&self, argument: Argument) -> f64 {
        match argument {
            Argument::Width => self.width,
            Argument::Height => self.height,
            Argument::Length => self.length,
            Argument::Mass => self.mass,
        }
    }

    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }

    pub fn category(&self) -> Category {
        self.assess().category
    }

    pub fn assess(&self) -> Assessment {
        classifier::assess(self)
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
