//! Application store
//!
//! Owns the credential store and the leaderboard state. Every roster or
//! branding change goes through here so the admin gate is applied in one
//! place.

use log::info;
use std::path::{Path, PathBuf};

use crate::auth::{CredentialStore, Session};
use crate::config::{AppConfig, StartupConfig};
use crate::error::{LeaderboardError, StorageError};
use crate::media::{self, MediaKind};
use crate::roster::{
    CSV_TEMPLATE, LeaderboardState, Standings, TsoRecord, parse_csv, parse_template_row,
};
use crate::storage::{FileStore, KeyValueStore};

pub struct App {
    credentials: CredentialStore,
    state: LeaderboardState,
    startup: StartupConfig,
}

impl App {
    /// Opens the file-backed store named by the configuration
    pub fn open(config: AppConfig) -> Result<Self, StorageError> {
        let storage = FileStore::open(config.startup.storage_path())?;
        Self::with_storage(Box::new(storage), config)
    }

    pub fn with_storage(
        storage: Box<dyn KeyValueStore>,
        config: AppConfig,
    ) -> Result<Self, StorageError> {
        let (startup, board) = config.split();
        Ok(Self {
            credentials: CredentialStore::open(storage)?,
            state: LeaderboardState::new(board),
            startup,
        })
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn state(&self) -> &LeaderboardState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.credentials.session()
    }

    // --------------------
    // Account operations
    // --------------------

    /// Self-service sign-up always creates a viewer account
    pub fn signup(
        &mut self,
        email: &str,
        phone: &str,
        password: &str,
    ) -> Result<Session, LeaderboardError> {
        self.credentials.register(email, phone, password, false)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, LeaderboardError> {
        self.credentials.authenticate(email, password)
    }

    pub fn logout(&mut self) -> Result<(), LeaderboardError> {
        Ok(self.credentials.logout()?)
    }

    pub fn whoami(&self) -> Result<&Session, LeaderboardError> {
        Ok(self.credentials.require_session()?)
    }

    // --------------------
    // Viewer operations
    // --------------------

    pub fn board(&self) -> Result<Standings<'_>, LeaderboardError> {
        self.credentials.require_session()?;
        Ok(self.state.standings())
    }

    // --------------------
    // Admin operations
    // --------------------

    fn require_admin(&self) -> Result<(), LeaderboardError> {
        self.credentials.require_admin()?;
        Ok(())
    }

    /// Full roster, best first
    pub fn roster(&self) -> Result<Vec<&TsoRecord>, LeaderboardError> {
        self.require_admin()?;
        Ok(self.state.ranked())
    }

    /// Replaces the roster with the parsed CSV text. On any parse error the
    /// current roster is left untouched.
    pub fn import_csv_text(&mut self, text: &str) -> Result<usize, LeaderboardError> {
        self.require_admin()?;
        let records = parse_csv(text)?;
        let count = records.len();
        self.state.set_records(records);
        info!("Successfully imported {} TSOs from CSV", count);
        Ok(count)
    }

    /// Bytes that are not valid UTF-8 are replaced with U+FFFD
    pub async fn import_csv_file(&mut self, path: &Path) -> Result<usize, LeaderboardError> {
        self.require_admin()?;
        let bytes = tokio::fs::read(path).await?;
        self.import_csv_text(&String::from_utf8_lossy(&bytes))
    }

    pub async fn write_template(&self, path: &Path) -> Result<PathBuf, LeaderboardError> {
        self.require_admin()?;
        tokio::fs::write(path, CSV_TEMPLATE).await?;
        info!("CSV template written to {}", path.display());
        Ok(path.to_path_buf())
    }

    /// Adds a record from one template-order CSV line
    pub fn add_record(&mut self, row: &str) -> Result<String, LeaderboardError> {
        self.require_admin()?;
        let record = parse_template_row(row, "")?;
        Ok(self.state.add(record))
    }

    pub fn delete_record(&mut self, id: &str) -> Result<TsoRecord, LeaderboardError> {
        self.require_admin()?;
        let removed = self.state.delete(id)?;
        info!("TSO deleted: {} ({})", removed.name, removed.id);
        Ok(removed)
    }

    pub async fn upload_avatar(&mut self, id: &str, path: &Path) -> Result<(), LeaderboardError> {
        self.require_admin()?;
        // Fail on an unknown id before reading the file
        self.state.update(id, |_| ())?;
        let media = media::read_image(path, self.startup.max_upload_size_bytes()).await?;
        self.state.assign_avatar(id, media.data_url)?;
        Ok(())
    }

    pub async fn upload_logo(&mut self, path: &Path) -> Result<(), LeaderboardError> {
        self.require_admin()?;
        let media = media::read_image(path, self.startup.max_upload_size_bytes()).await?;
        self.state.set_logo(media.data_url);
        Ok(())
    }

    pub async fn upload_background(&mut self, path: &Path) -> Result<MediaKind, LeaderboardError> {
        self.require_admin()?;
        let media = media::read_upload(path, self.startup.max_upload_size_bytes()).await?;
        let kind = media.kind;
        self.state.set_background(media);
        Ok(kind)
    }

    pub fn set_week(&mut self, week: u32) -> Result<(), LeaderboardError> {
        self.require_admin()?;
        self.state.set_week(week);
        Ok(())
    }

    pub fn startup(&self) -> &StartupConfig {
        &self.startup
    }
}
