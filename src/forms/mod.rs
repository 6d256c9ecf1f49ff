//! Request payloads accepted by the JSON API and their conversion into domain values.

use serde::{Deserialize, Deserializer};

use crate::domain::restaurant::{TimeRange, WeeklyHours};

pub mod menus;
pub mod orders;
pub mod restaurants;
pub mod staff;

/// Collapse whitespace runs into single spaces and drop control characters.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Sanitize each line and trim blank lines at both ends.
pub(crate) fn sanitize_multiline_text(input: &str) -> String {
    let lines: Vec<String> = input.lines().map(sanitize_inline_text).collect();

    let first = lines.iter().position(|line| !line.is_empty());
    let last = lines.iter().rposition(|line| !line.is_empty());

    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}

/// Sanitized optional text; blank input becomes `None`.
pub(crate) fn non_blank(input: Option<&str>) -> Option<String> {
    input
        .map(sanitize_inline_text)
        .filter(|value| !value.is_empty())
}

/// Wrap any present value, including `null`, in `Some`.
///
/// Combined with `#[serde(default)]` this tells an absent field (`None`) apart
/// from an explicit `null` (`Some(None)`).
pub(crate) fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Sanitized list entries with blanks removed.
pub(crate) fn sanitize_list(values: Vec<String>) -> Vec<String> {
    values
        .iter()
        .map(|value| sanitize_inline_text(value))
        .filter(|value| !value.is_empty())
        .collect()
}

fn is_valid_range(range: &TimeRange) -> bool {
    range.open_hour < 24 && range.close_hour < 24 && range.open_minute < 60 && range.close_minute < 60
}

/// Name of the first day holding an out-of-range time, if any.
pub(crate) fn invalid_hours_day(hours: &WeeklyHours) -> Option<&'static str> {
    hours
        .days()
        .into_iter()
        .find(|(_, ranges)| !ranges.iter().all(is_valid_range))
        .map(|(day, _)| day)
}
