//! Display formatting shared by the views.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::PriceChange;

/// Format a dollar amount with thousands separators.
///
/// Whole amounts print without cents (`$1,234`); anything else is rounded to
/// two decimals (`$1,234.50`).
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let frac = cents % 100;
    let sign = if amount < 0.0 && cents != 0 { "-" } else { "" };
    if frac == 0 {
        format!("{}${}", sign, whole)
    } else {
        format!("{}${}.{:02}", sign, whole, frac)
    }
}

/// Format a change as `+$12.50 (+3.20%)`.
pub fn format_change(change: &PriceChange) -> String {
    let sign = if change.value >= 0.0 { "+" } else { "-" };
    let pct_sign = if change.percentage >= 0.0 { "+" } else { "" };
    format!(
        "{}{} ({}{:.2}%)",
        sign,
        format_usd(change.value.abs()),
        pct_sign,
        change.percentage
    )
}

/// Short calendar date, `M/D/YYYY`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Parse a backend timestamp into its calendar date.
///
/// Accepts RFC 3339 (with offset) as well as the naive ISO forms SQL
/// backends commonly emit.
pub fn parse_timestamp_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let rest = n / 1000;
        if rest == 0 {
            groups.push((n % 1000).to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n = rest;
    }
    groups.reverse();
    groups.join(",")
}
