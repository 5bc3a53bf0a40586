//! # Raw Readings
//!
//! Classification from textual readings, as they arrive from a shell or a
//! sensor bus. A reading that is absent, blank or not parseable as a number
//! counts as *not a number*; anything that parses is handed to the regular
//! rule chain, so `"0"` and `"inf"` fail as out of range rather than as
//! malformed.

use crate::measurement::{self, Argument, InvalidMeasurement, Rule};
use crate::package::{Category, Package};

/// Parses one reading without applying the range rules.
pub fn parse_measurement(argument: Argument, raw: Option<&str>) -> Result<f64, InvalidMeasurement> {
    let not_a_number = InvalidMeasurement::new(argument, Rule::NotANumber);

    let trimmed = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or(not_a_number)?;
    let value: f64 = trimmed.parse().map_err(|_| not_a_number)?;

    if value.is_nan() {
        return Err(not_a_number);
    }
    Ok(value)
}

/// Builds a validated package from positional readings.
///
/// Each argument's whole chain runs before the next argument is read.
/// Readings past the fourth are ignored.
pub fn package_from_raw(readings: &[&str]) -> Result<Package, InvalidMeasurement> {
    let mut values = [0.0; 4];
    for (slot, argument) in values.iter_mut().zip(Argument::ALL) {
        let raw = readings.get(argument as usize).copied();
        let value = parse_measurement(argument, raw)?;
        *slot = measurement::validate(argument, value)?;
    }

    let [width, height, length, mass] = values;
    Ok(Package::from_validated(width, height, length, mass))
}

pub fn classify_raw(readings: &[&str]) -> Result<Category, InvalidMeasurement> {
    Ok(package_from_raw(readings)?.category())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
