use std::sync::LazyLock;

use regex::Regex;

static YEAR_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})\D*(\d{1,2})").expect("valid year-month regex"));

/// Rewrites a loose manufacturing date (`"2024년 03월"`, `"2024-3"`) as
/// `"YYYY.MM.01"`.
///
/// The source only carries year and month, so the day is always `01`. Empty
/// input yields an empty string; anything without a year/month pair is
/// returned unchanged.
#[must_use]
pub fn normalize_year_month(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match YEAR_MONTH.captures(raw) {
        Some(caps) => format!("{}.{:0>2}.01", &caps[1], &caps[2]),
        None => raw.to_string(),
    }
}
