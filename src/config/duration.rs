//! Custom serde module for parsing duration strings like "30s", "5m", "1h30m".

use serde::{self, Deserialize, Deserializer};
use std::time::Duration;

pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) => parse_duration(&s).map_err(serde::de::Error::custom),
        None => Ok(Duration::ZERO),
    }
}

/// Parses a sequence of `<number><unit>` terms.
///
/// A bare number is seconds, but only as the whole input: `1h30` is an error.
pub(crate) fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Duration::ZERO);
    }
    if s.starts_with('-') {
        return Err(format!("negative duration: {}", s));
    }

    let mut rest = s.strip_prefix('+').unwrap_or(s);
    let whole = rest;
    let mut total = Duration::ZERO;

    while !rest.is_empty() {
        // Find where the number ends and the unit begins
        let num_end = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        let (num_str, tail) = rest.split_at(num_end);
        let num: f64 = num_str
            .parse()
            .map_err(|_| format!("invalid duration number: {:?} in {}", num_str, s))?;

        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_end);

        let multiplier = match unit.trim() {
            "ns" => 1e-9,
            "us" | "µs" => 1e-6,
            "ms" => 1e-3,
            "" if num_str.len() != whole.len() => {
                return Err(format!("missing unit after {} in duration {}", num_str, s));
            }
            "s" | "" => 1.0,
            "m" => 60.0,
            "h" => 3600.0,
            _ => return Err(format!("unknown duration unit: {}", unit)),
        };

        let term = Duration::try_from_secs_f64(num * multiplier)
            .map_err(|e| format!("duration out of range: {}: {}", s, e))?;
        total = total
            .checked_add(term)
            .ok_or_else(|| format!("duration out of range: {}", s))?;
        rest = next;
    }

    Ok(total)
}
