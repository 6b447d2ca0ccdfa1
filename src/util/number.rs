//! Lenient counter-value parsing.
//!
//! Counter text follows `parseInt` rules: optional surrounding whitespace, an
//! optional `+`, then leading digits. Anything without leading digits is 0.

#[cfg(test)]
#[path = "number_test.rs"]
mod number_test;

use serde::{Deserialize, Deserializer};

/// Parse the leading integer of `text`, coercing non-numeric input to 0.
#[must_use]
pub fn parse_counter_text(text: &str) -> u64 {
    let trimmed = text.trim_start();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.starts_with('-') {
        return 0;
    }
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse::<u64>().unwrap_or(0)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCounter {
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

/// Serde adapter for counter fields: numbers, numeric strings, or anything
/// else (coerced to 0).
///
/// # Errors
///
/// Only fails when the underlying deserializer itself fails.
pub fn deserialize_counter<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawCounter::deserialize(deserializer)?;
    Ok(match raw {
        RawCounter::Number(n) => n.as_u64().unwrap_or_else(|| {
            n.as_f64()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map_or(0, truncate_to_u64)
        }),
        RawCounter::Text(text) => parse_counter_text(&text),
        RawCounter::Other(_) => 0,
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_to_u64(value: f64) -> u64 {
    value.trunc() as u64
}
