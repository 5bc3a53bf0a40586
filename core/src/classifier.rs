//! # Classifier
//!
//! A package is *oversized* when a single dimension reaches
//! [`OVERSIZED_DIMENSION`] or, failing that, when its volume reaches
//! [`BULKY_VOLUME`]. It is *heavy* when its mass reaches [`HEAVY_MASS`].
//!
//! | oversized | heavy | category |
//! |-----------|-------|----------|
//! | yes       | yes   | REJECTED |
//! | yes       | no    | SPECIAL  |
//! | no        | yes   | SPECIAL  |
//! | no        | no    | STANDARD |

use sortr_common::config::{BULKY_VOLUME, HEAVY_MASS, OVERSIZED_DIMENSION};
use tracing::debug;

use crate::measurement::{Argument, InvalidMeasurement};
use crate::package::{Assessment, Category, Oversize, Package};

const DIMENSIONS: [Argument; 3] = [Argument::Width, Argument::Height, Argument::Length];

/// Validates the readings and returns the handling category.
///
/// Readings are checked in parameter order; for each one the number, positive
/// and finite rules run in that order, and the first violation is returned.
pub fn classify(width: f64, height: f64, length: f64, mass: f64) -> Result<Category, InvalidMeasurement> {
    let package = Package::new(width, height, length, mass)?;
    Ok(package.category())
}

pub(crate) fn assess(package: &Package) -> Assessment {
    let oversized = oversize(package);
    let heavy = is_too_heavy(package.mass());
    let category = decide(oversized.is_some(), heavy);

    debug!(
        width = package.width(),
        height = package.height(),
        length = package.length(),
        mass = package.mass(),
        oversized = ?oversized,
        heavy,
        "classified as {category}"
    );

    Assessment {
        category,
        oversized,
        heavy,
    }
}

/// Maps the two flags onto a category.
pub fn decide(oversized: bool, heavy: bool) -> Category {
    match (oversized, heavy) {
        (true, true) => Category::Rejected,
        (true, false) | (false, true) => Category::Special,
        (false, false) => Category::Standard,
    }
}

fn is_too_long(dimension: f64) -> bool {
    dimension >= OVERSIZED_DIMENSION
}

fn is_too_heavy(mass: f64) -> bool {
    mass >= HEAVY_MASS
}

fn oversize(package: &Package) -> Option<Oversize> {
    if let Some(argument) = DIMENSIONS
        .into_iter()
        .find(|argument| is_too_long(package.get(*argument)))
    {
        return Some(Oversize::Dimension(argument));
    }

    let volume = package.volume();
    (volume >= BULKY_VOLUME).then_some(Oversize::Volume(volume))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
