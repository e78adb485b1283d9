//! Sample roster shown before any CSV import.

use super::record::TsoRecord;

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

// (id, name, avatar seed, territory, division, wing,
//  raw metrics, weighted percents, overall)
type SeedRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    [f64; 5],
    [f64; 5],
    f64,
);

#[rustfmt::skip]
const SEED: [SeedRow; 10] = [
    ("1", "Arif Khan", "Arif", "Dhaka East", "Central", "Modern Trade",
        [80.0, 70.0, 90.0, 75.0, 85.0], [16.0, 14.0, 27.0, 15.0, 8.5], 80.5),
    ("2", "Kamal Hossain", "Kamal", "Narayanganj", "Central", "General Trade",
        [75.0, 68.0, 85.0, 72.0, 80.0], [15.0, 13.6, 25.5, 14.4, 8.0], 76.5),
    ("3", "Farhan Ahmed", "Farhan", "Chittagong Sadar", "Eastern", "Modern Trade",
        [70.0, 65.0, 80.0, 70.0, 75.0], [14.0, 13.0, 24.0, 14.0, 7.5], 72.5),
    ("4", "Sohel Rana", "Sohel", "Comilla", "Eastern", "General Trade",
        [68.0, 62.0, 78.0, 68.0, 72.0], [13.6, 12.4, 23.4, 13.6, 7.2], 70.2),
    ("5", "Mizanur Rahman", "Mizan", "Rajshahi Sadar", "Western", "General Trade",
        [65.0, 60.0, 75.0, 65.0, 70.0], [13.0, 12.0, 22.5, 13.0, 7.0], 67.5),
    ("6", "Jahangir Alam", "Jahangir", "Khulna Sadar", "Western", "Modern Trade",
        [62.0, 58.0, 72.0, 62.0, 68.0], [12.4, 11.6, 21.6, 12.4, 6.8], 64.8),
    ("7", "Tariqul Islam", "Tariq", "Sylhet Sadar", "Northern", "General Trade",
        [60.0, 56.0, 70.0, 60.0, 65.0], [12.0, 11.2, 21.0, 12.0, 6.5], 62.7),
    ("8", "Shakib Hassan", "Shakib", "Bogra", "Northern", "Modern Trade",
        [58.0, 54.0, 68.0, 58.0, 63.0], [11.6, 10.8, 20.4, 11.6, 6.3], 60.7),
    ("9", "Nahid Hasan", "Nahid", "Rangpur Sadar", "Northern", "General Trade",
        [55.0, 52.0, 65.0, 55.0, 60.0], [11.0, 10.4, 19.5, 11.0, 6.0], 57.9),
    ("10", "Imran Hossain", "Imran", "Barisal Sadar", "Southern", "General Trade",
        [52.0, 50.0, 62.0, 52.0, 58.0], [10.4, 10.0, 18.6, 10.4, 5.8], 55.2),
];

pub fn initial_roster() -> Vec<TsoRecord> {
    SEED.iter()
        .map(
            |&(id, name, seed, territory, division, wing, raw, pct, overall)| TsoRecord {
                id: id.to_string(),
                name: name.to_string(),
                avatar: format!("{AVATAR_BASE}{seed}"),
                territory: territory.to_string(),
                division: division.to_string(),
                wing: wing.to_string(),
                volume_size: raw[0],
                memo_size: raw[1],
                pmpd: raw[2],
                sales_per_memo: raw[3],
                outlet_reach: raw[4],
                volume_size_percent: pct[0],
                memo_size_percent: pct[1],
                pmpd_percent: pct[2],
                sales_per_memo_percent: pct[3],
                outlet_reach_percent: pct[4],
                overall_percent: overall,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_roster_carries_generated_avatars() {
        let roster = initial_roster();
        assert_eq!(roster.len(), 10);
        assert_eq!(
            roster[0].avatar,
            "https://api.dicebear.com/7.x/avataaars/svg?seed=Arif"
        );
        assert!(roster.iter().all(|r| r.has_avatar()));
    }
}
