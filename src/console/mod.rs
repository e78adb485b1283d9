//! Operator console
//!
//! Line-oriented command interface over the leaderboard: parsing, dispatch,
//! reply formatting and text rendering.

pub mod commands;
pub mod handlers;
pub mod render;
pub mod responses;
pub mod session;

pub use commands::{Command, CommandResult, CommandStatus, Password, parse_command};
pub use handlers::handle_command;
pub use session::run;
