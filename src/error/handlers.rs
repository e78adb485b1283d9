//! Error handlers
//!
//! Logs failures and maps them to console reply codes.

use crate::error::types::{AuthError, ErrorKind, LeaderboardError, MediaError};
use log::{error, warn};

/// Log an error at a level matching its severity
pub fn handle_error(err: &LeaderboardError) {
    match err.kind() {
        ErrorKind::Storage => error!("Leaderboard error: {}", err),
        _ => warn!("Rejected: {}", err),
    }
}

/// Convert error to console reply code
pub fn error_to_reply_code(err: &LeaderboardError) -> u16 {
    match err {
        LeaderboardError::Auth(AuthError::NotLoggedIn) => 530,
        LeaderboardError::Auth(AuthError::AdminRequired) => 403,
        LeaderboardError::Media(MediaError::TooLarge { .. }) => 413,
        LeaderboardError::Media(MediaError::Io(_)) => 500,
        _ => match err.kind() {
            ErrorKind::Validation => 400,
            ErrorKind::Auth => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Media => 415,
            ErrorKind::Format => 422,
            ErrorKind::Storage => 500,
        },
    }
}
