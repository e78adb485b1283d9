//! Utility functions
//!
//! Provides clock and input validation helpers.

pub mod clock;
pub mod validation;

pub use clock::{now_millis, now_millis_string};
pub use validation::{is_blank, strip_whitespace};
