use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

pub(crate) const TITLE_MAX_CHARS: usize = 40;
pub(crate) const CONTENT_MAX_CHARS: usize = 210;

/// Keeps the first `max` characters and appends `...` iff something was cut.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

pub(crate) fn title_summary(title: &str) -> String {
    truncate(title, TITLE_MAX_CHARS)
}

pub(crate) fn content_summary(content: &str) -> String {
    truncate(content, CONTENT_MAX_CHARS)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Long date such as `January 1st, 2024`. Unparseable input is returned as-is.
pub(crate) fn format_long_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(d) => format!(
            "{} {}{}, {}",
            d.format("%B"),
            d.day(),
            ordinal_suffix(d.day()),
            d.year()
        ),
        None => raw.to_string(),
    }
}
