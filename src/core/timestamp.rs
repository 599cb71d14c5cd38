//! Timestamp formatting for rendered log lines
//!
//! All formats render in UTC and never consult the process locale, so the
//! same instant always produces the same text.

use super::error::{LoggerError, Result};
use super::format::MISSING_PLACEHOLDER;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// strftime pattern behind [`TimestampFormat::Classic`]
pub const CLASSIC_TIMESTAMP_PATTERN: &str = "%m/%d/%Y %H:%M:%S%.3f";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use swiftwood::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let instant = Utc.with_ymd_and_hms(2022, 11, 17, 12, 34, 34).unwrap();
/// assert_eq!(TimestampFormat::Classic.format(&instant), "11/17/2022 12:34:34.000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Month/day/year with milliseconds: `11/17/2022 12:34:34.255`
    #[default]
    Classic,

    /// ISO 8601 with milliseconds: `2022-11-17T12:34:34.255Z`
    Iso8601,

    /// RFC 3339 format: `2022-11-17T12:34:34.255+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1668688474255`
    UnixMillis,

    /// Custom strftime format; build it with [`TimestampFormat::custom`] to
    /// reject bad patterns up front
    Custom(String),
}

impl TimestampFormat {
    /// Validated custom strftime pattern
    ///
    /// ```
    /// use swiftwood::TimestampFormat;
    ///
    /// assert!(TimestampFormat::custom("%H:%M:%S").is_ok());
    /// assert!(TimestampFormat::custom("%Q").is_err());
    /// ```
    pub fn custom(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "TimestampFormat",
                format!("invalid strftime pattern {:?}", pattern),
            ));
        }
        Ok(TimestampFormat::Custom(pattern))
    }

    /// Render `datetime`. An unrenderable custom pattern yields
    /// [`MISSING_PLACEHOLDER`] instead of panicking.
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Classic => datetime.format(CLASSIC_TIMESTAMP_PATTERN).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut rendered = String::new();
                match write!(rendered, "{}", datetime.format(format_str)) {
                    Ok(()) => rendered,
                    Err(_) => MISSING_PLACEHOLDER.to_string(),
                }
            }
        }
    }
}
