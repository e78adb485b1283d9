//! Error handling
//!
//! Defines error types and handling for the leaderboard.

pub mod handlers;
pub mod types;

pub use types::*;
