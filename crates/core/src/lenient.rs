//! Lenient field decoders for records handed over by the store.
//!
//! Dashboards must keep rendering when upstream data is partial, so these
//! decoders never fail: a malformed value decodes to its default (zero, `None`)
//! and the record is kept. Use them with `#[serde(default, deserialize_with = ...)]`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Known(T),
    Other(IgnoredAny),
}

impl<T> Lenient<T> {
    fn known(self) -> Option<T> {
        match self {
            Lenient::Known(v) => Some(v),
            Lenient::Other(_) => None,
        }
    }
}

/// Decode any value, falling back to `None` when it has the wrong shape.
pub fn or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Lenient::<T>::deserialize(deserializer)?.known())
}

/// Decode any value, falling back to `T::default()` when it has the wrong shape.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(or_none(deserializer)?.unwrap_or_default())
}

/// Decode a monetary amount given as a JSON number or numeric string.
///
/// Missing, null and unparsable amounts decode to zero.
pub fn amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(or_none::<D, Decimal>(deserializer)?.unwrap_or(Decimal::ZERO))
}

/// Decode an ISO-8601 timestamp in its recorded wall-clock time.
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(or_none::<D, String>(deserializer)?.and_then(|s| parse_timestamp(&s)))
}

/// Decode an ISO-8601 date (a timestamp is truncated to its date).
pub fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(or_none::<D, String>(deserializer)?.and_then(|s| parse_date(&s)))
}

/// Parse the timestamp formats the store emits.
///
/// Offsets are not re-zoned: `2024-03-01T00:30:00+02:00` stays in March.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = text.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(text).map(|dt| dt.date()))
}
