//! Ranking by overall score
//!
//! A single-key descending sort. Ties keep their roster order.

use std::cmp::Ordering;

use super::record::TsoRecord;

/// Podium decoration for a rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Crown,
    Medal,
    Award,
    Plain(usize),
}

impl Badge {
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            1 => Badge::Crown,
            2 => Badge::Medal,
            3 => Badge::Award,
            n => Badge::Plain(n),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Badge::Crown => "[1st]".to_string(),
            Badge::Medal => "[2nd]".to_string(),
            Badge::Award => "[3rd]".to_string(),
            Badge::Plain(n) => format!("#{n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry<'a> {
    pub rank: usize,
    pub badge: Badge,
    pub record: &'a TsoRecord,
}

/// Board view: podium first, then the remaining table rows
#[derive(Debug, Clone, PartialEq)]
pub struct Standings<'a> {
    pub podium: Vec<RankedEntry<'a>>,
    pub rest: Vec<RankedEntry<'a>>,
}

impl Standings<'_> {
    pub fn is_empty(&self) -> bool {
        self.podium.is_empty() && self.rest.is_empty()
    }
}

/// All records, best first
pub fn rank(records: &[TsoRecord]) -> Vec<&TsoRecord> {
    let mut sorted: Vec<&TsoRecord> = records.iter().collect();
    sorted.sort_by(|a, b| {
        b.overall_percent
            .partial_cmp(&a.overall_percent)
            .unwrap_or(Ordering::Equal)
    });
    sorted
}

/// The top `size` records, with the first `podium` of them on the podium
pub fn standings(records: &[TsoRecord], size: usize, podium: usize) -> Standings<'_> {
    let mut entries: Vec<RankedEntry<'_>> = rank(records)
        .into_iter()
        .take(size)
        .enumerate()
        .map(|(i, record)| RankedEntry {
            rank: i + 1,
            badge: Badge::for_rank(i + 1),
            record,
        })
        .collect();

    let rest = entries.split_off(podium.min(entries.len()));
    Standings {
        podium: entries,
        rest,
    }
}
