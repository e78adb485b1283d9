pub mod app;
pub mod auth;
pub mod config;
pub mod console;
pub mod error;
pub mod media;
pub mod roster;
pub mod storage;
pub mod utils;

pub use app::App;
pub use config::AppConfig;
pub use error::LeaderboardError;
