//! Text rendering of the board and roster

use std::fmt::Write;

use crate::auth::Session;
use crate::roster::{Branding, RankedEntry, Standings, TsoRecord};

pub const BOARD_TITLE: &str = "XForce Leaderboard";

fn entry_line(entry: &RankedEntry<'_>) -> String {
    let record = entry.record;
    format!(
        "{:>6}  {:<24} {:<20} {:<10} {:>6.1}%",
        entry.badge.label(),
        record.name,
        record.territory,
        record.division,
        record.overall_percent
    )
}

pub fn render_board(standings: &Standings<'_>, week: u32, branding: &Branding) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{BOARD_TITLE} - Week {week} Rankings");
    if !branding.logo.is_empty() {
        let _ = writeln!(out, "  logo: custom");
    }
    if let Some(background) = &branding.background {
        let _ = writeln!(out, "  background: {}", background.kind.as_str());
    }

    if standings.is_empty() {
        out.push_str("  (no TSOs on the board)");
        return out;
    }

    out.push_str("  Podium\n");
    for entry in &standings.podium {
        let _ = writeln!(out, "{}", entry_line(entry));
    }
    if !standings.rest.is_empty() {
        let _ = writeln!(
            out,
            "  {:>4}  {:<24} {:<20} {:<10} {:>7}",
            "Rank", "TSO", "Territory", "Division", "Overall"
        );
        for entry in &standings.rest {
            let _ = writeln!(out, "{}", entry_line(entry));
        }
    }
    out.trim_end().to_string()
}

/// Admin view: every record with its id, raw metrics and weighted scores
pub fn render_roster(records: &[&TsoRecord]) -> String {
    if records.is_empty() {
        return "Roster is empty".to_string();
    }
    let mut out = format!("{} TSOs", records.len());
    for record in records {
        let _ = write!(
            out,
            "\n  {} | {} | {} / {} / {} | vol {} ({}%) memo {} ({}%) pmpd {} ({}%) spm {} ({}%) reach {} ({}%) | overall {}% | avatar: {}",
            record.id,
            record.name,
            record.territory,
            record.division,
            record.wing,
            record.volume_size,
            record.volume_size_percent,
            record.memo_size,
            record.memo_size_percent,
            record.pmpd,
            record.pmpd_percent,
            record.sales_per_memo,
            record.sales_per_memo_percent,
            record.outlet_reach,
            record.outlet_reach_percent,
            record.overall_percent,
            if record.has_avatar() {
                "yes".to_string()
            } else {
                format!("none ({})", record.initials())
            }
        );
    }
    out
}

pub fn render_session(session: &Session) -> String {
    format!(
        "{} ({}) role: {}",
        session.user.email,
        session.user.phone,
        session.role()
    )
}
