//! Small date helpers on top of `chrono`.
//!
//! The formatting helpers return an empty string for missing or unparseable
//! input instead of an error, so they can be dropped straight into output.

use std::fmt::Write;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

const FALLBACK_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parses RFC 3339, a few `YYYY-MM-DD HH:MM[:SS]` forms, or a bare date.
pub fn parse_date(date: &str) -> Option<NaiveDateTime> {
    let date = date.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.naive_local());
    }
    FALLBACK_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(date, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Parses with an explicit format. Date-only formats are accepted too.
pub fn parse_date_with(date: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(date, format).ok().or_else(|| {
        NaiveDate::parse_from_str(date, format)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    })
}

/// `None` when `format` has a specifier chrono cannot render.
fn render(dt: NaiveDateTime, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", dt.format(format)).ok()?;
    Some(out)
}

pub fn format_date(date: Option<&str>, format: &str) -> String {
    date.filter(|d| !d.is_empty())
        .and_then(parse_date)
        .and_then(|dt| render(dt, format))
        .unwrap_or_default()
}

pub fn reformat_date(date: Option<&str>, current_format: &str, target_format: &str) -> String {
    date.filter(|d| !d.is_empty())
        .and_then(|d| parse_date_with(d, current_format))
        .and_then(|dt| render(dt, target_format))
        .unwrap_or_default()
}

pub fn is_same_day(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.date() == b.date(),
        _ => false,
    }
}

pub fn minutes_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    (later - earlier).num_milliseconds() as f64 / 60_000.0
}

pub fn minutes_since(timestamp: DateTime<Utc>) -> f64 {
    minutes_between(timestamp, Utc::now())
}

/// Falls back to the current local time when `date` is missing or does not
/// match `format`.
pub fn parse_or_now(date: Option<&str>, format: &str) -> NaiveDateTime {
    date.and_then(|d| parse_date_with(d, format))
        .unwrap_or_else(|| Local::now().naive_local())
}

/// Relative phrase such as `"3 hours ago"` or `"in a day"`.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = (now - then).num_seconds();
    let phrase = humanize(delta.unsigned_abs());
    if delta >= 0 {
        format!("{phrase} ago")
    } else {
        format!("in {phrase}")
    }
}

pub fn from_now(then: DateTime<Utc>) -> String {
    time_ago(then, Utc::now())
}

/// Each unit is rounded before it is compared against its threshold.
fn humanize(seconds: u64) -> String {
    let raw_secs = seconds as f64;
    let raw_days = raw_secs / 86_400.0;
    let raw_months = raw_days * 4_800.0 / 146_097.0;

    let secs = raw_secs.round();
    let minutes = (raw_secs / 60.0).round();
    let hours = (raw_secs / 3_600.0).round();
    let days = raw_days.round();
    let months = raw_months.round();
    let years = (raw_months / 12.0).round();

    let plural = |n: f64, unit: &str| format!("{} {unit}", n as u64);

    if secs < 45.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        plural(minutes, "minutes")
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        plural(hours, "hours")
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        plural(days, "days")
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        plural(months, "months")
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        plural(years, "years")
    }
}
