//! Status-line macros.
//!
//! Thin wrappers over `tracing` so every crate reports through the same
//! subscriber. The symbol in front of each line comes from the level.

#[doc(hidden)]
pub use tracing as __tracing;

/// A step finished as expected.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::status::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::status::__tracing::error!($($arg)*)
    };
}
