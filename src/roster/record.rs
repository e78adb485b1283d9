//! TSO roster record

use serde::{Deserialize, Serialize};

/// One ranked sales officer.
///
/// The five `*_percent` fields and `overall_percent` are weighted scores
/// supplied by the input. They are never recomputed from the raw metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsoRecord {
    pub id: String,
    pub name: String,
    /// Image reference or inline data URL; empty when none was uploaded
    pub avatar: String,
    pub territory: String,
    pub division: String,
    pub wing: String,

    pub volume_size: f64,
    pub memo_size: f64,
    /// Per Man Per Day Sales
    pub pmpd: f64,
    pub sales_per_memo: f64,
    pub outlet_reach: f64,

    /// Volume Size (20) %
    pub volume_size_percent: f64,
    /// Memo Size (20) %
    pub memo_size_percent: f64,
    /// Per Man Per Day Sales (PMPD) (30) %
    pub pmpd_percent: f64,
    /// Sales per Memo (20) %
    pub sales_per_memo_percent: f64,
    /// Outlet Reach (10) %
    pub outlet_reach_percent: f64,

    /// Composite score used for ranking
    pub overall_percent: f64,
}

impl TsoRecord {
    pub fn has_avatar(&self) -> bool {
        !self.avatar.is_empty()
    }

    /// Short initials shown in place of a missing avatar
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}
