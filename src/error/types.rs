//! Error types
//!
//! Defines domain-specific error types for each module of the leaderboard.

use std::fmt;
use std::io;

/// User-visible category of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input shape
    Validation,
    /// Duplicate identity
    Conflict,
    /// Credential mismatch or missing/insufficient session
    Auth,
    /// CSV structural problem
    Format,
    NotFound,
    Media,
    Storage,
}

/// Credential store errors
#[derive(Debug)]
pub enum AuthError {
    MissingFields,
    InvalidEmail(String),
    PasswordTooShort(usize),
    InvalidPhone(String),
    EmailTaken(String),
    PhoneTaken(String),
    InvalidCredentials,
    NotLoggedIn,
    AdminRequired,
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields
            | AuthError::InvalidEmail(_)
            | AuthError::PasswordTooShort(_)
            | AuthError::InvalidPhone(_) => ErrorKind::Validation,
            AuthError::EmailTaken(_) | AuthError::PhoneTaken(_) => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::NotLoggedIn | AuthError::AdminRequired => {
                ErrorKind::Auth
            }
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingFields => write!(f, "All fields are required"),
            AuthError::InvalidEmail(e) => write!(f, "Invalid email format: {}", e),
            AuthError::PasswordTooShort(min) => {
                write!(f, "Password must be at least {} characters", min)
            }
            AuthError::InvalidPhone(p) => write!(
                f,
                "Invalid Bangladesh phone number: {} (use +8801XXXXXXXXX or 01XXXXXXXXX)",
                p
            ),
            AuthError::EmailTaken(e) => write!(f, "Email already registered: {}", e),
            AuthError::PhoneTaken(p) => write!(f, "Phone number already registered: {}", p),
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::NotLoggedIn => write!(f, "Not logged in"),
            AuthError::AdminRequired => write!(f, "Admin access required"),
        }
    }
}

impl std::error::Error for AuthError {}

/// CSV import errors
#[derive(Debug, PartialEq)]
pub enum ImportError {
    NotEnoughLines,
    MissingColumn(String),
    InvalidRow(usize),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::NotEnoughLines => {
                write!(f, "CSV must contain headers and at least one data row")
            }
            ImportError::MissingColumn(c) => write!(f, "Missing required column: {}", c),
            ImportError::InvalidRow(i) => {
                write!(f, "Error parsing row {}: Invalid data format", i)
            }
        }
    }
}

impl std::error::Error for ImportError {}

/// Roster state errors
#[derive(Debug, PartialEq)]
pub enum RosterError {
    NotFound(String),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::NotFound(id) => write!(f, "TSO not found: {}", id),
        }
    }
}

impl std::error::Error for RosterError {}

/// Upload errors
#[derive(Debug)]
pub enum MediaError {
    UnsupportedType(String),
    ImageRequired(String),
    TooLarge { size: u64, limit: u64 },
    Io(io::Error),
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::UnsupportedType(p) => {
                write!(f, "Please upload an image or video file: {}", p)
            }
            MediaError::ImageRequired(p) => write!(f, "Please upload an image file: {}", p),
            MediaError::TooLarge { size, limit } => {
                write!(f, "File too large: {} bytes (limit {} bytes)", size, limit)
            }
            MediaError::Io(e) => write!(f, "Failed to read file: {}", e),
        }
    }
}

impl std::error::Error for MediaError {}

impl From<io::Error> for MediaError {
    fn from(error: io::Error) -> Self {
        MediaError::Io(error)
    }
}

/// Key-value storage errors
#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Serialization(String, serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "IO error: {}", e),
            StorageError::Serialization(key, e) => {
                write!(f, "Malformed value under key '{}': {}", key, e)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::Io(error)
    }
}

/// General error that encompasses all module errors
#[derive(Debug)]
pub enum LeaderboardError {
    Auth(AuthError),
    Import(ImportError),
    Roster(RosterError),
    Media(MediaError),
    Storage(StorageError),
    IoError(io::Error),
}

impl LeaderboardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LeaderboardError::Auth(e) => e.kind(),
            LeaderboardError::Import(_) => ErrorKind::Format,
            LeaderboardError::Roster(_) => ErrorKind::NotFound,
            LeaderboardError::Media(_) => ErrorKind::Media,
            LeaderboardError::Storage(_) | LeaderboardError::IoError(_) => ErrorKind::Storage,
        }
    }
}

impl fmt::Display for LeaderboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaderboardError::Auth(e) => write!(f, "{}", e),
            LeaderboardError::Import(e) => write!(f, "{}", e),
            LeaderboardError::Roster(e) => write!(f, "{}", e),
            LeaderboardError::Media(e) => write!(f, "{}", e),
            LeaderboardError::Storage(e) => write!(f, "Storage error: {}", e),
            LeaderboardError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for LeaderboardError {}

impl From<AuthError> for LeaderboardError {
    fn from(error: AuthError) -> Self {
        LeaderboardError::Auth(error)
    }
}

impl From<ImportError> for LeaderboardError {
    fn from(error: ImportError) -> Self {
        LeaderboardError::Import(error)
    }
}

impl From<RosterError> for LeaderboardError {
    fn from(error: RosterError) -> Self {
        LeaderboardError::Roster(error)
    }
}

impl From<MediaError> for LeaderboardError {
    fn from(error: MediaError) -> Self {
        LeaderboardError::Media(error)
    }
}

impl From<StorageError> for LeaderboardError {
    fn from(error: StorageError) -> Self {
        LeaderboardError::Storage(error)
    }
}

impl From<io::Error> for LeaderboardError {
    fn from(error: io::Error) -> Self {
        LeaderboardError::IoError(error)
    }
}
