use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::process::raw_table::Cell;

/// `YYYY-MM-DD HH:MM:SS.f`, fraction of 1 to 9 digits, nothing around it.
static TIMESTAMP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{1,9}$").expect("timestamp regex")
});

/// Grouping key for one record.
///
/// `Day` sorts before `Unparseable`, so the bucket of bad rows always comes last.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DateKey {
    /// Calendar date as `YYYYMMDD`.
    Day(String),
    Unparseable,
}

impl DateKey {
    pub fn from_date(date: NaiveDate) -> Self {
        DateKey::Day(date.format("%Y%m%d").to_string())
    }

    /// Total: every cell gets a key.
    pub fn from_cell(cell: &Cell) -> Self {
        match cell {
            Cell::Text(s) => parse_timestamp(s)
                .map(|ts| Self::from_date(ts.date()))
                .unwrap_or(DateKey::Unparseable),
            Cell::DateTime(ts) => Self::from_date(ts.date()),
            Cell::Empty | Cell::Number(_) | Cell::Other(_) => DateKey::Unparseable,
        }
    }

    /// `None` for the unparseable bucket.
    pub fn as_day(&self) -> Option<&str> {
        match self {
            DateKey::Day(d) => Some(d),
            DateKey::Unparseable => None,
        }
    }
}

/// Parse `"YYYY-MM-DD HH:MM:SS.ffffff"`. Rejects other shapes and impossible
/// dates or times.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if !TIMESTAMP_RE.is_match(s) {
        return None;
    }
    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[5..7].parse().ok()?;
    let day: u32 = s[8..10].parse().ok()?;
    let hour: u32 = s[11..13].parse().ok()?;
    let min: u32 = s[14..16].parse().ok()?;
    let sec: u32 = s[17..19].parse().ok()?;

    // right-pad to nanoseconds: ".5" is 500ms
    let frac = &s[20..];
    let nanos: u32 = format!("{:0<9}", frac).parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_nano_opt(hour, min, sec, nanos)
}
