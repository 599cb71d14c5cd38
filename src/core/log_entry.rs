//! Log entry structure

use super::category::Category;
use super::log_level::Level;
use super::log_value::LogValue;
use chrono::{DateTime, Utc};

/// Where in the source a log call was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub function: Option<&'static str>,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function: Some(function),
            line,
        }
    }

    /// Location of the caller of a `#[track_caller]` function. Rust has no
    /// caller-function intrinsic, so the function name stays unknown.
    #[track_caller]
    pub fn caller() -> Self {
        let caller = std::panic::Location::caller();
        Self {
            file: caller.file(),
            function: None,
            line: caller.line(),
        }
    }

    /// Final path component of `file`, for either separator style
    pub fn file_name(&self) -> &'static str {
        file_basename(self.file)
    }
}

pub(crate) fn file_basename(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}

/// Immutable record of a single log call, shared by reference with every
/// destination during dispatch.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub message: Vec<LogValue>,
    pub category: Category,
    pub location: Location,
    pub build_info: Option<String>,
    pub context: Option<LogValue>,
}

impl LogEntry {
    pub fn new(level: Level, message: Vec<LogValue>, location: Location) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message,
            category: Category::DEFAULT,
            location,
            build_info: None,
            context: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_context(mut self, context: Option<LogValue>) -> Self {
        self.context = context;
        self
    }

    pub fn with_build_info(mut self, build_info: Option<String>) -> Self {
        self.build_info = build_info;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Per-part projections of the message, in order
    pub fn message_parts(&self, redact: bool) -> Vec<String> {
        self.message.iter().map(|part| part.render(redact)).collect()
    }

    /// Message parts joined by a single space
    pub fn rendered_message(&self, redact: bool) -> String {
        self.message_parts(redact).join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::redaction::Censored;

    #[test]
    fn test_file_basename() {
        assert_eq!(file_basename("src/core/log_entry.rs"), "log_entry.rs");
        assert_eq!(file_basename("C:\\work\\app\\main.rs"), "main.rs");
        assert_eq!(file_basename("main.rs"), "main.rs");
    }

    #[test]
    fn test_caller_location() {
        let location = Location::caller();
        assert_eq!(location.file_name(), "log_entry.rs");
        assert!(location.function.is_none());
        assert!(location.line > 0);
    }

    #[test]
    fn test_rendered_message_joins_with_space() {
        let entry = LogEntry::new(
            Level::INFO,
            vec![
                LogValue::from("a"),
                LogValue::from(3),
                LogValue::from(Censored("pw")),
            ],
            Location::new("main.rs", "main", 1),
        );

        assert_eq!(entry.rendered_message(false), "a 3 pw");
        assert_eq!(entry.rendered_message(true), "a 3 Censored: **CENSORED**");
        assert_eq!(entry.category, Category::DEFAULT);
    }
}
