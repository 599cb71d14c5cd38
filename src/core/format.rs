//! Ordered templates turning a log entry into a display line
//!
//! A [`Format`] is a list of parts evaluated strictly in declaration order
//! and joined by a separator. Optional fields that are absent (build info,
//! context, function name) render as [`MISSING_PLACEHOLDER`] so columns in
//! text logs stay aligned.

use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;

pub const MISSING_PLACEHOLDER: &str = "nil";

/// One renderable piece of a [`Format`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatPart {
    StaticText(String),
    Timestamp(TimestampFormat),
    Level,
    /// Basename of the source file, never the directory
    File,
    Function,
    LineNumber,
    /// Message parts, each projected individually and joined by one space
    Message,
    Category,
    BuildInfo,
    Context,
}

impl FormatPart {
    pub fn text(text: impl Into<String>) -> Self {
        FormatPart::StaticText(text.into())
    }

    fn render(&self, entry: &LogEntry, redact: bool) -> String {
        match self {
            FormatPart::StaticText(text) => text.clone(),
            FormatPart::Timestamp(format) => format.format(&entry.timestamp),
            FormatPart::Level => entry.level.label().to_string(),
            FormatPart::File => entry.location.file_name().to_string(),
            FormatPart::Function => entry
                .location
                .function
                .unwrap_or(MISSING_PLACEHOLDER)
                .to_string(),
            FormatPart::LineNumber => entry.location.line.to_string(),
            FormatPart::Message => entry.rendered_message(redact),
            FormatPart::Category => entry.category.to_string(),
            FormatPart::BuildInfo => entry
                .build_info
                .clone()
                .unwrap_or_else(|| MISSING_PLACEHOLDER.to_string()),
            FormatPart::Context => entry
                .context
                .as_ref()
                .map(|context| context.render(redact))
                .unwrap_or_else(|| MISSING_PLACEHOLDER.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub parts: Vec<FormatPart>,
    pub separator: String,
}

impl Default for Format {
    /// `11/17/2022 12:34:34.255 💙 INFO main.rs my_app::run:30 - message`
    fn default() -> Self {
        Self {
            parts: vec![
                FormatPart::Timestamp(TimestampFormat::default()),
                FormatPart::text(" "),
                FormatPart::Level,
                FormatPart::text(" "),
                FormatPart::File,
                FormatPart::text(" "),
                FormatPart::Function,
                FormatPart::text(":"),
                FormatPart::LineNumber,
                FormatPart::text(" - "),
                FormatPart::Message,
            ],
            separator: String::new(),
        }
    }
}

impl Format {
    pub fn new(parts: Vec<FormatPart>, separator: impl Into<String>) -> Self {
        Self {
            parts,
            separator: separator.into(),
        }
    }

    #[must_use]
    pub fn with_part(mut self, part: FormatPart) -> Self {
        self.parts.push(part);
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn push(&mut self, part: FormatPart) {
        self.parts.push(part);
    }

    /// Render `entry`; with `redact` set, redactable message and context
    /// values use their censored projection.
    pub fn render(&self, entry: &LogEntry, redact: bool) -> String {
        self.parts
            .iter()
            .map(|part| part.render(entry, redact))
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}
