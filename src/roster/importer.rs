//! CSV roster import
//!
//! Plain comma splitting: quoted fields are not supported, and numeric
//! fields that fail to parse become 0 instead of failing the import.
//! The whole import fails if any row cannot be built.

use log::error;
use std::collections::HashMap;

use super::record::TsoRecord;
use crate::error::ImportError;
use crate::utils::now_millis_string;

pub const COL_NAME: &str = "TSO Name";
pub const COL_TERRITORY: &str = "Territory";
pub const COL_DIVISION: &str = "Division";
pub const COL_WING: &str = "Wing";
pub const COL_VOLUME_SIZE: &str = "Volume Size";
pub const COL_MEMO_SIZE: &str = "Memo Size";
pub const COL_PMPD: &str = "Per Man Per Day Sales (PMPD)";
pub const COL_SALES_PER_MEMO: &str = "Sales per Memo";
pub const COL_OUTLET_REACH: &str = "Outlet Reach";
pub const COL_VOLUME_SIZE_PCT: &str = "Volume Size (20) %";
pub const COL_MEMO_SIZE_PCT: &str = "Memo Size (20) %";
pub const COL_PMPD_PCT: &str = "Per Man Per Day Sales (PMPD) (30) %";
pub const COL_SALES_PER_MEMO_PCT: &str = "Sales per Memo (20) %";
pub const COL_OUTLET_REACH_PCT: &str = "Outlet Reach (10) %";
pub const COL_OVERALL_PCT: &str = "Overall %";

/// Required columns, in template order
pub const REQUIRED_HEADERS: [&str; 15] = [
    COL_NAME,
    COL_TERRITORY,
    COL_DIVISION,
    COL_WING,
    COL_VOLUME_SIZE,
    COL_MEMO_SIZE,
    COL_PMPD,
    COL_SALES_PER_MEMO,
    COL_OUTLET_REACH,
    COL_VOLUME_SIZE_PCT,
    COL_MEMO_SIZE_PCT,
    COL_PMPD_PCT,
    COL_SALES_PER_MEMO_PCT,
    COL_OUTLET_REACH_PCT,
    COL_OVERALL_PCT,
];

pub const TEMPLATE_FILENAME: &str = "tso_template.csv";

/// Downloadable template: header row plus five sample officers
pub const CSV_TEMPLATE: &str = "\
TSO Name,Territory,Division,Wing,Volume Size,Memo Size,Per Man Per Day Sales (PMPD),Sales per Memo,Outlet Reach,Volume Size (20) %,Memo Size (20) %,Per Man Per Day Sales (PMPD) (30) %,Sales per Memo (20) %,Outlet Reach (10) %,Overall %
Arif Khan,Dhaka East,Central,Modern Trade,80,70,90,75,85,16.0,14.0,27.0,15.0,8.5,80.5
Nusrat Jahan,Chattogram South,South,General Trade,72,78,82,70,80,14.4,15.6,24.6,14.0,8.0,76.6
Imran Hossain,Rajshahi North,North,General Trade,85,75,88,82,90,17.0,15.0,26.4,16.4,9.0,83.8
Sadia Ahmed,Sylhet West,East,Modern Trade,68,72,76,74,70,13.6,14.4,22.8,14.8,7.0,72.6
Tanvir Alam,Barishal Central,South,Wholesale,90,85,92,88,95,18.0,17.0,27.6,17.6,9.5,89.7";

/// Parses CSV text into roster records.
///
/// Fails if there is no data row, if any required column is missing from
/// the header, or if a row lacks one of the text columns.
pub fn parse_csv(text: &str) -> Result<Vec<TsoRecord>, ImportError> {
    let lines: Vec<&str> = text.trim().split('\n').collect();
    if lines.len() < 2 {
        return Err(ImportError::NotEnoughLines);
    }

    let headers: Vec<&str> = lines[0].split(',').map(str::trim).collect();
    if let Some(missing) = REQUIRED_HEADERS.iter().find(|h| !headers.contains(*h)) {
        return Err(ImportError::MissingColumn(missing.to_string()));
    }

    let stamp = now_millis_string();
    lines[1..]
        .iter()
        .enumerate()
        .map(|(offset, line)| {
            let index = offset + 1;
            build_record(&headers, line, &format!("tso-{index}-{stamp}")).map_err(|field| {
                error!("Error parsing row {}: no value for column '{}'", index, field);
                ImportError::InvalidRow(index)
            })
        })
        .collect()
}

/// Parses one data line given in template column order
pub fn parse_template_row(line: &str, id: &str) -> Result<TsoRecord, ImportError> {
    build_record(&REQUIRED_HEADERS, line, id).map_err(|field| {
        error!("Error parsing row: no value for column '{}'", field);
        ImportError::InvalidRow(1)
    })
}

/// Builds a record from one line; the error is the first absent text column
fn build_record(headers: &[&str], line: &str, id: &str) -> Result<TsoRecord, &'static str> {
    let row: HashMap<&str, &str> = headers
        .iter()
        .copied()
        .zip(line.split(',').map(str::trim))
        .collect();

    let text = |column: &'static str| -> Result<String, &'static str> {
        row.get(column).map(|v| v.to_string()).ok_or(column)
    };
    let number = |column: &str| parse_number(row.get(column).copied());

    Ok(TsoRecord {
        id: id.to_string(),
        name: text(COL_NAME)?,
        avatar: String::new(),
        territory: text(COL_TERRITORY)?,
        division: text(COL_DIVISION)?,
        wing: text(COL_WING)?,
        volume_size: number(COL_VOLUME_SIZE),
        memo_size: number(COL_MEMO_SIZE),
        pmpd: number(COL_PMPD),
        sales_per_memo: number(COL_SALES_PER_MEMO),
        outlet_reach: number(COL_OUTLET_REACH),
        volume_size_percent: number(COL_VOLUME_SIZE_PCT),
        memo_size_percent: number(COL_MEMO_SIZE_PCT),
        pmpd_percent: number(COL_PMPD_PCT),
        sales_per_memo_percent: number(COL_SALES_PER_MEMO_PCT),
        outlet_reach_percent: number(COL_OUTLET_REACH_PCT),
        overall_percent: number(COL_OVERALL_PCT),
    })
}

/// Lenient float parse: the longest leading decimal number wins, anything
/// unparseable (or absent) is 0.
pub fn parse_number(raw: Option<&str>) -> f64 {
    raw.map(|value| numeric_prefix(value.trim()))
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp.min(bytes.len()));
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "TSO Name,Territory,Division,Wing,Volume Size,Memo Size,Per Man Per Day Sales (PMPD),Sales per Memo,Outlet Reach,Volume Size (20) %,Memo Size (20) %,Per Man Per Day Sales (PMPD) (30) %,Sales per Memo (20) %,Outlet Reach (10) %,Overall %";

    #[test]
    fn template_yields_five_records() {
        let records = parse_csv(CSV_TEMPLATE).unwrap();
        assert_eq!(records.len(), 5);

        let overall: Vec<f64> = records.iter().map(|r| r.overall_percent).collect();
        assert_eq!(overall, vec![80.5, 76.6, 83.8, 72.6, 89.7]);
        assert!(records.iter().all(|r| r.avatar.is_empty()));

        let first = &records[0];
        assert_eq!(first.name, "Arif Khan");
        assert_eq!(first.territory, "Dhaka East");
        assert_eq!(first.wing, "Modern Trade");
        assert_eq!(first.pmpd, 90.0);
        assert_eq!(first.pmpd_percent, 27.0);
        assert_eq!(first.outlet_reach_percent, 8.5);
        assert!(first.id.starts_with("tso-1-"));
        assert!(records[4].id.starts_with("tso-5-"));
    }

    #[test]
    fn header_only_is_rejected() {
        assert_eq!(parse_csv(HEADER), Err(ImportError::NotEnoughLines));
        assert_eq!(parse_csv(""), Err(ImportError::NotEnoughLines));
        assert_eq!(
            parse_csv(&format!("{HEADER}\n\n")),
            Err(ImportError::NotEnoughLines)
        );
    }

    #[test]
    fn missing_overall_column_is_named() {
        let header = HEADER.trim_end_matches(",Overall %");
        let text = format!("{header}\nA,B,C,D,1,2,3,4,5,6,7,8,9,10");
        let err = parse_csv(&text).unwrap_err();
        assert_eq!(err, ImportError::MissingColumn("Overall %".into()));
        assert_eq!(err.to_string(), "Missing required column: Overall %");
    }

    #[test]
    fn first_missing_column_in_required_order_is_reported() {
        let text = "Overall %,Wing\n1,2";
        assert_eq!(
            parse_csv(text),
            Err(ImportError::MissingColumn("TSO Name".into()))
        );
    }

    #[test]
    fn non_numeric_values_become_zero() {
        let text = format!("{HEADER}\nA,B,C,D,lots,70,90,75,85,16.0,14.0,27.0,15.0,8.5,n/a");
        let records = parse_csv(&text).unwrap();
        assert_eq!(records[0].volume_size, 0.0);
        assert_eq!(records[0].overall_percent, 0.0);
        assert_eq!(records[0].memo_size, 70.0);
    }

    #[test]
    fn columns_are_matched_by_name_not_position() {
        let text = "Overall %,TSO Name,Territory,Division,Wing,Volume Size,Memo Size,Per Man Per Day Sales (PMPD),Sales per Memo,Outlet Reach,Volume Size (20) %,Memo Size (20) %,Per Man Per Day Sales (PMPD) (30) %,Sales per Memo (20) %,Outlet Reach (10) %,Notes\n\
             91.5, Rina , T , D , W ,1,2,3,4,5,6,7,8,9,10,ignored";
        let records = parse_csv(text).unwrap();
        assert_eq!(records[0].overall_percent, 91.5);
        assert_eq!(records[0].name, "Rina");
        assert_eq!(records[0].outlet_reach_percent, 10.0);
    }

    #[test]
    fn windows_line_endings_are_tolerated() {
        let text = CSV_TEMPLATE.replace('\n', "\r\n");
        let records = parse_csv(&text).unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[4].overall_percent, 89.7);
    }

    #[test]
    fn short_row_fails_whole_import() {
        let text = format!(
            "{HEADER}\nA,B,C,D,1,2,3,4,5,6,7,8,9,10,11\nOnly Name\nE,F,G,H,1,2,3,4,5,6,7,8,9,10,11"
        );
        let err = parse_csv(&text).unwrap_err();
        assert_eq!(err, ImportError::InvalidRow(2));
        assert_eq!(err.to_string(), "Error parsing row 2: Invalid data format");
    }

    #[test]
    fn missing_numeric_tail_defaults_to_zero() {
        let text = format!("{HEADER}\nA,B,C,D,1,2");
        let records = parse_csv(&text).unwrap();
        assert_eq!(records[0].memo_size, 2.0);
        assert_eq!(records[0].overall_percent, 0.0);
    }

    #[test]
    fn template_row_uses_fixed_order() {
        let record = parse_template_row(
            "Rafi,Gazipur,Central,Wholesale,1,2,3,4,5,6,7,8,9,10,77.7",
            "42",
        )
        .unwrap();
        assert_eq!(record.id, "42");
        assert_eq!(record.division, "Central");
        assert_eq!(record.overall_percent, 77.7);
        assert!(parse_template_row("Rafi,Gazipur", "43").is_err());
    }

    #[test]
    fn lenient_number_parsing() {
        assert_eq!(parse_number(Some("12kg")), 12.0);
        assert_eq!(parse_number(Some(" -3.5 ")), -3.5);
        assert_eq!(parse_number(Some(".5")), 0.5);
        assert_eq!(parse_number(Some("1e2x")), 100.0);
        assert_eq!(parse_number(Some("1e")), 1.0);
        assert_eq!(parse_number(Some("NaN")), 0.0);
        assert_eq!(parse_number(Some("inf")), 0.0);
        assert_eq!(parse_number(Some("Infinity")), 0.0);
        assert_eq!(parse_number(Some("1e400")), 0.0);
        assert_eq!(parse_number(Some("-")), 0.0);
        assert_eq!(parse_number(Some("")), 0.0);
        assert_eq!(parse_number(None), 0.0);
    }
}
