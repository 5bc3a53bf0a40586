//! End-to-end checks of the public `sortr-core` API.

mod classification;
