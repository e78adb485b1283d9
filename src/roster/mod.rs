//! Roster management
//!
//! TSO records, CSV import, ranking, and the in-memory leaderboard state.

pub mod importer;
pub mod ranking;
pub mod record;
pub mod seed;
pub mod state;

pub use importer::{
    CSV_TEMPLATE, REQUIRED_HEADERS, TEMPLATE_FILENAME, parse_csv, parse_template_row,
};
pub use ranking::{Badge, RankedEntry, Standings, rank, standings};
pub use record::TsoRecord;
pub use state::{Branding, LeaderboardState};
