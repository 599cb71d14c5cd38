//! Destination contract for log sinks
//!
//! A destination owns its filtering and formatting settings; the logger only
//! reads them to decide whether `accept` is called at all.

use super::{
    category::CategoryFilter, error::Result, format::Format, log_entry::LogEntry,
    log_level::Level,
};
use std::fmt;

/// Type tag used to decide whether two destinations are "the same kind"
/// for replication policies. Configuration is not part of the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DestinationKind(&'static str);

impl DestinationKind {
    pub const fn new(name: &'static str) -> Self {
        DestinationKind(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Per-destination filter, redaction and format settings.
///
/// Read by the logger at dispatch time, so changes made through
/// [`Logger::configure`](crate::Logger::configure) apply to the next event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationSettings {
    pub minimum_level: Level,
    pub category_filter: CategoryFilter,
    pub should_redact: bool,
    pub format: Format,
}

impl DestinationSettings {
    pub fn new(minimum_level: Level, should_redact: bool) -> Self {
        Self {
            minimum_level,
            category_filter: CategoryFilter::None,
            should_redact,
            format: Format::default(),
        }
    }

    /// Level and category gate
    #[must_use]
    pub fn admits(&self, entry: &LogEntry) -> bool {
        entry.level >= self.minimum_level && self.category_filter.allows(&entry.category)
    }

    /// Render `entry` with this destination's format and redaction flag
    pub fn render(&self, entry: &LogEntry) -> String {
        self.format.render(entry, self.should_redact)
    }
}

impl Default for DestinationSettings {
    fn default() -> Self {
        Self::new(Level::INFO, false)
    }
}

pub trait Destination: Send + Sync {
    fn kind(&self) -> DestinationKind;

    fn settings(&self) -> &DestinationSettings;

    fn settings_mut(&mut self) -> &mut DestinationSettings;

    /// Persist or display an entry that already passed the gate
    fn accept(&mut self, entry: &LogEntry) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Builder-style setters shared by every destination
pub trait DestinationExt: Destination + Sized {
    #[must_use]
    fn with_minimum_level(mut self, level: Level) -> Self {
        self.settings_mut().minimum_level = level;
        self
    }

    #[must_use]
    fn with_category_filter(mut self, filter: CategoryFilter) -> Self {
        self.settings_mut().category_filter = filter;
        self
    }

    #[must_use]
    fn with_redaction(mut self, should_redact: bool) -> Self {
        self.settings_mut().should_redact = should_redact;
        self
    }

    #[must_use]
    fn with_format(mut self, format: Format) -> Self {
        self.settings_mut().format = format;
        self
    }
}

impl<D: Destination + Sized> DestinationExt for D {}
