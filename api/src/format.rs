//! Presentation helpers for coin statistics.
//!
//! These are pure functions so every panel renders the same numbers the same
//! way.

use std::fmt;

use chrono::DateTime;
use chrono::Local;
use chrono::TimeZone;
use chrono::Utc;

/// Direction of the 24h price change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum ChangeDirection {
    Up,
    Down,
}

impl ChangeDirection {
    /// Zero counts as up.
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
        }
    }

    /// css class used by the change badges.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Up => "positive",
            Self::Down => "negative",
        }
    }
}

/// A 24h percentage change, rendered as a glyph plus absolute value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceChange(f64);

impl PriceChange {
    pub fn new(percentage: f64) -> Self {
        Self(percentage)
    }

    pub fn direction(&self) -> ChangeDirection {
        ChangeDirection::of(self.0)
    }
}

/// Formats as e.g. `↓3.46%`.
impl fmt::Display for PriceChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}%", self.direction().glyph(), self.0.abs())
    }
}

/// Inserts thousands separators into the integer part of a plain decimal
/// string, leaving any fraction untouched.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Headline price: dollar sign, grouping, exactly two decimals.
pub fn price(value: f64) -> String {
    format!("${}", group_thousands(&format!("{value:.2}")))
}

/// Secondary price stats (24h high/low, ATH/ATL): dollar sign, grouping, at
/// most three decimals with trailing zeros dropped.
pub fn stat_price(value: f64) -> String {
    let fixed = format!("{value:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };
    format!("${}", group_thousands(trimmed))
}

/// Market cap and volume, in billions.
pub fn billions(value: f64) -> String {
    format!("{:.2}B", value / 1e9)
}

/// Supplies, in millions.
pub fn millions(value: f64) -> String {
    format!("{:.2}M", value / 1e6)
}

/// Shown in place of a stat the backend sent as `null`.
pub const MISSING: &str = "N/A";

/// Renders `value` with `render`, or [`MISSING`] when there is no value.
pub fn or_missing(value: Option<f64>, render: impl FnOnce(f64) -> String) -> String {
    value.map(render).unwrap_or_else(|| MISSING.to_string())
}

/// Market cap and volume as shown on the cards, e.g. `$980.00B`.
pub fn dollar_billions(value: f64) -> String {
    format!("${}", billions(value))
}

/// Renders a timestamp in the given zone.
pub fn timestamp_in<Tz: TimeZone>(at: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    at.with_timezone(zone).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Renders a timestamp in the user's local zone.
pub fn local_timestamp(at: &DateTime<Utc>) -> String {
    timestamp_in(at, &Local)
}

/// Renders only the calendar day, e.g. for all-time high dates.
pub fn date(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d").to_string()
}
