//! Turns free-text time periods into sortable timestamps.
//!
//! Only the end of a range matters: `2018 - 2021-06` sorts at June 2021, and
//! anything mentioning "present" sorts at the current instant.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

/// Separator between the start and end of a range.
pub const RANGE_SEPARATOR: &str = " - ";

const OPEN_ENDED: &str = "present";

/// Resolves a period against the current wall-clock time.
pub fn resolve_time(period: &str) -> i64 {
    resolve_time_at(period, Utc::now())
}

/// Resolves a period to milliseconds since the Unix epoch.
///
/// Returns `now` for open-ended periods, the first day of the matched month
/// for `YYYY` or `YYYY-MM` end dates, and 0 when no date can be found.
pub fn resolve_time_at(period: &str, now: DateTime<Utc>) -> i64 {
    if period.to_lowercase().contains(OPEN_ENDED) {
        return now.timestamp_millis();
    }

    let end = period
        .rsplit(RANGE_SEPARATOR)
        .next()
        .unwrap_or(period)
        .trim();

    end_date(end)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(0)
}

fn end_date(segment: &str) -> Option<NaiveDate> {
    static DATE_REGEX: OnceLock<Regex> = OnceLock::new();
    let date_regex =
        DATE_REGEX.get_or_init(|| Regex::new(r"(\d{4})(?:-(\d{2}))?").expect("Invalid date regex"));

    let caps = date_regex.captures(segment)?;
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 1,
    };

    first_of_month(year, month)
}

/// First day of `month`, letting out-of-range months roll into adjacent years.
fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let months = i64::from(year) * 12 + i64::from(month) - 1;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = u32::try_from(months.rem_euclid(12)).ok()? + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
}
