//! Leaderboard application state
//!
//! Holds the in-memory roster, board settings and branding media. Nothing
//! here is persisted; a restart brings back the sample roster.

use log::info;

use super::ranking::{Standings, rank, standings};
use super::record::TsoRecord;
use super::seed::initial_roster;
use crate::config::BoardConfig;
use crate::error::RosterError;
use crate::media::{MediaKind, UploadedMedia};
use crate::utils::now_millis;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Branding {
    /// Logo data URL; empty means the built-in logo
    pub logo: String,
    pub background: Option<UploadedMedia>,
}

pub struct LeaderboardState {
    records: Vec<TsoRecord>,
    board: BoardConfig,
    branding: Branding,
    /// Last id handed out by `add`; ids never repeat within one state
    last_id: u128,
}

impl LeaderboardState {
    /// State pre-filled with the sample roster
    pub fn new(board: BoardConfig) -> Self {
        Self::with_records(board, initial_roster())
    }

    pub fn with_records(board: BoardConfig, records: Vec<TsoRecord>) -> Self {
        Self {
            records,
            board,
            branding: Branding::default(),
            last_id: 0,
        }
    }

    pub fn records(&self) -> &[TsoRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&TsoRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Bulk replace, as done by a CSV import
    pub fn set_records(&mut self, records: Vec<TsoRecord>) {
        info!(
            "Roster replaced: {} -> {} records",
            self.records.len(),
            records.len()
        );
        self.records = records;
    }

    /// Appends a record under a fresh timestamp id and returns that id.
    /// Adds within the same millisecond get the next free number.
    pub fn add(&mut self, mut record: TsoRecord) -> String {
        let stamp = now_millis().max(self.last_id + 1);
        self.last_id = stamp;
        record.id = stamp.to_string();
        let id = record.id.clone();
        self.records.push(record);
        id
    }

    pub fn update<F>(&mut self, id: &str, apply: F) -> Result<(), RosterError>
    where
        F: FnOnce(&mut TsoRecord),
    {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
        apply(record);
        Ok(())
    }

    pub fn assign_avatar(&mut self, id: &str, avatar: String) -> Result<(), RosterError> {
        self.update(id, |record| record.avatar = avatar)
    }

    pub fn delete(&mut self, id: &str) -> Result<TsoRecord, RosterError> {
        let position = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
        Ok(self.records.remove(position))
    }

    pub fn ranked(&self) -> Vec<&TsoRecord> {
        rank(&self.records)
    }

    pub fn standings(&self) -> Standings<'_> {
        standings(
            &self.records,
            self.board.leaderboard_size,
            self.board.podium_size,
        )
    }

    pub fn board(&self) -> &BoardConfig {
        &self.board
    }

    pub fn set_week(&mut self, week: u32) {
        self.board.week_number = week;
    }

    pub fn branding(&self) -> &Branding {
        &self.branding
    }

    pub fn set_logo(&mut self, logo: String) {
        self.branding.logo = logo;
    }

    pub fn set_background(&mut self, media: UploadedMedia) {
        self.branding.background = Some(media);
    }

    pub fn background_kind(&self) -> Option<MediaKind> {
        self.branding.background.as_ref().map(|m| m.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::importer::{CSV_TEMPLATE, parse_csv};

    fn state() -> LeaderboardState {
        LeaderboardState::new(BoardConfig::default())
    }

    #[test]
    fn starts_with_sample_roster() {
        let state = state();
        assert_eq!(state.records().len(), 10);
        assert_eq!(state.standings().podium[0].record.name, "Arif Khan");
    }

    #[test]
    fn import_replaces_everything() {
        let mut state = state();
        state.set_records(parse_csv(CSV_TEMPLATE).unwrap());
        assert_eq!(state.records().len(), 5);
        assert_eq!(state.ranked()[0].name, "Tanvir Alam");
    }

    #[test]
    fn avatar_assignment_and_unknown_ids() {
        let mut state = state();
        state
            .assign_avatar("3", "data:image/png;base64,AAAA".into())
            .unwrap();
        assert_eq!(state.get("3").unwrap().avatar, "data:image/png;base64,AAAA");
        assert_eq!(
            state.assign_avatar("nope", String::new()),
            Err(RosterError::NotFound("nope".into()))
        );
    }

    #[test]
    fn add_and_delete() {
        let mut state = state();
        let mut record = state.get("1").unwrap().clone();
        record.name = "New Person".into();
        let id = state.add(record);
        assert_eq!(state.records().len(), 11);
        assert_eq!(state.get(&id).unwrap().name, "New Person");

        let removed = state.delete("2").unwrap();
        assert_eq!(removed.name, "Kamal Hossain");
        assert!(state.get("2").is_none());
        assert!(state.delete("2").is_err());
    }

    #[test]
    fn back_to_back_adds_get_distinct_ids() {
        let mut state = state();
        let record = state.get("1").unwrap().clone();
        let ids: Vec<String> = (0..5).map(|_| state.add(record.clone())).collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id), "duplicate id {id}");
        }

        state.delete(&ids[0]).unwrap();
        assert!(state.get(&ids[0]).is_none());
        assert!(state.get(&ids[1]).is_some());
        assert_eq!(state.records().len(), 14);
    }

    #[test]
    fn week_and_branding() {
        let mut state = state();
        state.set_week(3);
        assert_eq!(state.board().week_number, 3);
        assert!(state.branding().logo.is_empty());
        state.set_logo("data:image/png;base64,AA==".into());
        assert!(!state.branding().logo.is_empty());
        assert_eq!(state.background_kind(), None);
        state.set_background(UploadedMedia {
            data_url: "data:video/mp4;base64,AA==".into(),
            kind: MediaKind::Video,
            mime: "video/mp4",
        });
        assert_eq!(state.background_kind(), Some(MediaKind::Video));
    }
}
