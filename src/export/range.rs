//! Date range grammar shared by `generate`, `insights` and `export`.
//!
//! Supported forms:
//! - `YYYY`
//! - `YYYY-MM`
//! - `YYYY-MM-DD`
//! - `start:end` where both sides use the same form above

use crate::errors::{AppError, AppResult};
use crate::utils::date::{month_last_day, parse_date};
use chrono::NaiveDate;

/// Expand one period expression into its inclusive date bounds.
fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(p.to_string());

    match p.len() {
        // YYYY
        4 => {
            let year: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let (y, m) = p.split_once('-').ok_or_else(invalid)?;
            let year: i32 = y.parse().map_err(|_| invalid())?;
            let month: u32 = m.parse().map_err(|_| invalid())?;
            let last = month_last_day(year, month).ok_or_else(invalid)?;
            let d1 = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(year, month, last).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(invalid)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

/// Parse a `--range` expression into inclusive start/end dates.
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start_raw = start_raw.trim();
        let end_raw = end_raw.trim();

        if start_raw.len() != end_raw.len() {
            return Err(AppError::InvalidRange(format!(
                "{r}: start and end must use the same format"
            )));
        }

        let (start, _) = parse_period(start_raw)?;
        let (_, end) = parse_period(end_raw)?;

        if start > end {
            return Err(AppError::InvalidRange(format!("{r}: start is after end")));
        }
        Ok((start, end))
    } else {
        parse_period(r.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn single_day_month_and_year() {
        assert_eq!(
            parse_range("2024-03-15").unwrap(),
            (d("2024-03-15"), d("2024-03-15"))
        );
        assert_eq!(
            parse_range("2024-02").unwrap(),
            (d("2024-02-01"), d("2024-02-29"))
        );
        assert_eq!(
            parse_range("2023").unwrap(),
            (d("2023-01-01"), d("2023-12-31"))
        );
    }

    #[test]
    fn colon_ranges() {
        assert_eq!(
            parse_range("2024-01-01:2024-01-05").unwrap(),
            (d("2024-01-01"), d("2024-01-05"))
        );
        assert_eq!(
            parse_range("2024-01:2024-03").unwrap(),
            (d("2024-01-01"), d("2024-03-31"))
        );
        assert_eq!(
            parse_range("2022:2023").unwrap(),
            (d("2022-01-01"), d("2023-12-31"))
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_range("20240101").is_err());
        assert!(parse_range("2024-13").is_err());
        assert!(parse_range("2024-01:2024-02-01").is_err());
        assert!(parse_range("2024-02-02:2024-02-01").is_err());
        assert!(parse_range("soon").is_err());
    }
}
