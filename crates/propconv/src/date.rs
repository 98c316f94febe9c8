//! Dates, time zones, and time intervals.
//!
//! Numeric dates are milliseconds since the Unix epoch, string dates are
//! RFC 3339. Intervals are milliseconds. Time zones are minutes east of UTC.

use std::time::Duration;

use serde_json::Value;
use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};

use crate::{convert::Convert, error::ConvertError, number::number};

/// A point in time; null means "no date".
impl Convert for Option<OffsetDateTime> {
    const NAME: &'static str = "Date";

    fn fallback() -> Self {
        None
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        match json {
            Value::String(s) => OffsetDateTime::parse(s.trim(), &Rfc3339)
                .map(Some)
                .map_err(|_| ConvertError::parse(Self::NAME, s)),
            Value::Number(_) => {
                let nanos = (number(json) * 1_000_000.0) as i128;
                OffsetDateTime::from_unix_timestamp_nanos(nanos)
                    .map(Some)
                    .map_err(|_| ConvertError::out_of_range(Self::NAME, json))
            }
            other => Err(ConvertError::mismatch("number or RFC 3339 string", other)),
        }
    }
}

/// A fixed UTC offset given in minutes.
impl Convert for Option<UtcOffset> {
    const NAME: &'static str = "TimeZone";

    fn fallback() -> Self {
        None
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        if !matches!(json, Value::Number(_) | Value::String(_)) {
            return Err(ConvertError::mismatch("number of minutes", json));
        }
        let minutes = <f64 as Convert>::try_convert(json)?;
        let seconds = (minutes * 60.0).round();
        if seconds.abs() > f64::from(i32::MAX) {
            return Err(ConvertError::out_of_range(Self::NAME, minutes));
        }
        UtcOffset::from_whole_seconds(seconds as i32)
            .map(Some)
            .map_err(|_| ConvertError::out_of_range(Self::NAME, minutes))
    }
}

/// A non-negative interval in milliseconds.
impl Convert for Duration {
    const NAME: &'static str = "TimeInterval";

    fn fallback() -> Self {
        Self::ZERO
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        let millis = <f64 as Convert>::try_convert(json)?;
        Self::try_from_secs_f64(millis / 1000.0)
            .map_err(|_| ConvertError::out_of_range(Self::NAME, millis))
    }
}
