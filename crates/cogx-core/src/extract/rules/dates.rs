//! Result date resolution.

use chrono::NaiveDate;

use super::patterns::{ENCOUNTER_DAY, MONTH_YEAR};

/// Date value for results given on the day of the encounter.
pub const ENCOUNTER_DATE: &str = "encounter_date";

/// Resolve the date a result refers to from nearby text.
///
/// "today" and "this am" refer to the encounter itself. Otherwise the
/// first `MM/YYYY` literal with a valid month is returned as written.
pub fn resolve_date(text: &str) -> Option<String> {
    if ENCOUNTER_DAY.is_match(text) {
        return Some(ENCOUNTER_DATE.to_string());
    }

    MONTH_YEAR.captures_iter(text).find_map(|caps| {
        let month: u32 = caps[1].parse().ok()?;
        let year: i32 = caps[2].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(caps[0].to_string())
    })
}
