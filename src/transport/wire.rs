//! Per-field coercions applied to response text.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime};

use super::DecodeError;
use super::xml::XmlElement;

const DATETIME_FORMATS: [&str; 6] = [
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%d %b %Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 3] = ["%m/%d/%Y", "%Y-%m-%d", "%d %b %Y"];

/// Trimmed text of `name`, or an empty string when missing.
pub fn text(element: &XmlElement, name: &str) -> String {
    element.find_text(name).unwrap_or_default().to_owned()
}

pub fn optional_text(element: &XmlElement, name: &str) -> Option<String> {
    element.find_text(name).map(str::to_owned)
}

pub fn required_text(element: &XmlElement, name: &'static str) -> Result<String, DecodeError> {
    optional_text(element, name).ok_or(DecodeError::MissingField { field: name })
}

/// Integer field; a missing or blank field reads as 0.
pub fn int(element: &XmlElement, name: &'static str) -> Result<i64, DecodeError> {
    match element.find_text(name) {
        None => Ok(0),
        Some(value) => value.parse().map_err(|_| DecodeError::InvalidNumber {
            field: name,
            value: value.to_owned(),
        }),
    }
}

/// Decimal field; thousands separators are ignored and a missing field reads
/// as 0.
pub fn float(element: &XmlElement, name: &'static str) -> Result<f64, DecodeError> {
    match element.find_text(name) {
        None => Ok(0.0),
        Some(value) => value
            .replace(',', "")
            .parse()
            .map_err(|_| DecodeError::InvalidNumber {
                field: name,
                value: value.to_owned(),
            }),
    }
}

/// Boolean sentinel: `true`, `yes`, `y` or `1` (any case) read as true,
/// anything else (including a missing field) as false.
pub fn flag(element: &XmlElement, name: &str) -> bool {
    element.find_text(name).is_some_and(is_truthy)
}

pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

/// Timestamp field; a missing field reads as `None`.
pub fn timestamp(
    element: &XmlElement,
    name: &'static str,
) -> Result<Option<NaiveDateTime>, DecodeError> {
    element
        .find_text(name)
        .map(|value| {
            parse_timestamp(value).ok_or_else(|| DecodeError::InvalidDate {
                field: name,
                value: value.to_owned(),
            })
        })
        .transpose()
}

/// Date field; a missing field reads as `None`.
pub fn date(element: &XmlElement, name: &'static str) -> Result<Option<NaiveDate>, DecodeError> {
    element
        .find_text(name)
        .map(|value| {
            parse_date(value).ok_or_else(|| DecodeError::InvalidDate {
                field: name,
                value: value.to_owned(),
            })
        })
        .transpose()
}

/// Parse the timestamp layouts the registrar uses. Date-only values read as
/// midnight.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| parse_date(value).and_then(|date| date.and_hms_opt(0, 0, 0)))
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Parse a UTC offset written as `+08.00`, `-5:30`, `+0800` or `-7`.
pub fn parse_utc_offset(value: &str) -> Option<FixedOffset> {
    let value = value.trim();
    let (sign, rest) = match value.as_bytes().first()? {
        b'+' => (1, &value[1..]),
        b'-' => (-1, &value[1..]),
        _ => (1, value),
    };
    let (hours, minutes) = match rest.split_once(['.', ':']) {
        Some((hours, minutes)) => (hours, minutes),
        None if rest.len() == 4 && rest.is_ascii() => rest.split_at(2),
        None => (rest, "0"),
    };
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if !(0..=23).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
