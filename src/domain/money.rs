//! Formatting helpers for amounts stored as integer cents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money in
    Credit,
    /// Money out
    Debit,
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit => write!(f, "credit"),
            Self::Debit => write!(f, "debit"),
        }
    }
}

impl FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            other => Err(format!("unknown entry type: {other}")),
        }
    }
}

/// `-12345` -> `"-123.45"`, `5` -> `"0.05"`.
pub fn format_cents(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Like [`format_cents`], with a leading `+` on positive credits.
pub fn format_signed_cents(value: i64, entry_type: Option<EntryType>) -> String {
    let formatted = format_cents(value);
    if entry_type == Some(EntryType::Credit) && value > 0 {
        return format!("+{formatted}");
    }
    formatted
}

/// Cents as a franc amount.
#[allow(clippy::cast_precision_loss)]
pub fn cents_to_number(value: i64) -> f64 {
    value as f64 / 100.0
}

/// Render a franc amount for summaries.
///
/// Negative and non-finite inputs render as zero. From 100 CHF upwards the
/// amount is rounded to whole francs; below that two decimals are kept.
/// Thousands are separated by a space.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_chf_amount(value: f64) -> String {
    let amount = if value.is_finite() && value > 0.0 { value } else { 0.0 };
    if amount >= 100.0 {
        let whole = amount.round() as u64;
        return format!("{} CHF", group_thousands(whole));
    }
    let cents = (amount * 100.0).round() as u64;
    format!("{}.{:02} CHF", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}
