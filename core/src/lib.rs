//! # Sortr Core
//!
//! Classifies a package into a handling category from its three dimensions
//! and its mass.
//!
//! * **[`measurement`]**: argument names, validation rules and the error type.
//! * **[`package`]**: the validated package, its category and assessment.
//! * **[`classifier`]**: the decision table and the `classify` entry point.
//! * **[`input`]**: classification from raw textual readings.
//!
//! Everything here is pure. Calls share no state and may run concurrently.

pub mod classifier;
pub mod input;
pub mod measurement;
pub mod package;

pub use classifier::classify;
pub use measurement::{Argument, InvalidMeasurement, Rule};
pub use package::{Assessment, Category, Oversize, Package};
