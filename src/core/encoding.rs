//! Machine-readable projection of log entries
//!
//! [`EncodedLogEntry`] carries the same information as a rendered line but in
//! a fixed field set, independent of any [`Format`](super::Format) part
//! order. It is what JSON and CBOR sinks write.

use super::destination::DestinationSettings;
use super::error::{LoggerError, Result};
use super::log_entry::LogEntry;
use super::log_level::Level;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedLogEntry {
    /// Seconds since the Unix epoch, millisecond precision
    pub timestamp: f64,
    /// Numeric rank of the level
    pub log_level: i32,
    /// One projection per message part, order preserved
    pub message: Vec<String>,
    pub category: String,
    /// Basename of the source file
    pub source_file: String,
    pub function: Option<String>,
    pub line_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl EncodedLogEntry {
    pub fn new(entry: &LogEntry, redact: bool) -> Self {
        Self {
            timestamp: entry.timestamp.timestamp_millis() as f64 / 1000.0,
            log_level: entry.level.rank(),
            message: entry.message_parts(redact),
            category: entry.category.to_string(),
            source_file: entry.location.file_name().to_string(),
            function: entry.location.function.map(String::from),
            line_number: entry.location.line,
            build_info: entry.build_info.clone(),
            context: entry.context.as_ref().map(|context| context.render(redact)),
        }
    }

    /// Canonical bucket for the stored rank
    pub fn level(&self) -> Level {
        Level::nearest(self.log_level)
    }

    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis((self.timestamp * 1000.0).round() as i64)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(json)?)
    }

    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        ciborium::into_writer(self, &mut buffer)
            .map_err(|e| LoggerError::encoding("cbor", e.to_string()))?;
        Ok(buffer)
    }

    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        ciborium::from_reader(bytes).map_err(|e| LoggerError::encoding("cbor", e.to_string()))
    }
}

/// Wire format used by file-backed destinations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingFormat {
    /// One [`EncodedLogEntry`] as JSON
    #[default]
    Json,
    /// One [`EncodedLogEntry`] as CBOR
    Cbor,
    /// The destination's rendered [`Format`](super::Format) line
    FormattedString,
}

impl EncodingFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            EncodingFormat::Json => "json",
            EncodingFormat::Cbor => "cbor",
            EncodingFormat::FormattedString => "log",
        }
    }

    /// Encode `entry` honoring the redaction flag and format in `settings`
    pub fn encode(&self, entry: &LogEntry, settings: &DestinationSettings) -> Result<Vec<u8>> {
        match self {
            EncodingFormat::Json => {
                Ok(EncodedLogEntry::new(entry, settings.should_redact)
                    .to_json()?
                    .into_bytes())
            }
            EncodingFormat::Cbor => EncodedLogEntry::new(entry, settings.should_redact).to_cbor(),
            EncodingFormat::FormattedString => Ok(settings.render(entry).into_bytes()),
        }
    }
}
