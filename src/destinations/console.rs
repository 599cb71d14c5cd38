//! Console destination

use crate::core::{Destination, DestinationKind, DestinationSettings, Level, LogEntry, Result};
#[cfg(feature = "console")]
use colored::Colorize;

pub const CONSOLE_KIND: DestinationKind = DestinationKind::new("console");

/// Suffix appended to lines cut at `max_chars_displayed`
pub const TRUNCATION_SUFFIX: &str = "... (too large to output in console)";

/// Prints rendered lines to stdout, or stderr from error rank upwards.
///
/// Defaults: minimum level info, no category filter, no redaction, no
/// truncation.
pub struct ConsoleDestination {
    settings: DestinationSettings,
    max_chars_displayed: Option<usize>,
    use_colors: bool,
}

impl ConsoleDestination {
    pub fn new() -> Self {
        Self {
            settings: DestinationSettings::new(Level::INFO, false),
            max_chars_displayed: None,
            use_colors: cfg!(feature = "console"),
        }
    }

    /// Cut lines longer than `max` characters; `0` disables truncation.
    ///
    /// # Example
    ///
    /// ```
    /// use swiftwood::ConsoleDestination;
    ///
    /// let console = ConsoleDestination::new().with_max_chars_displayed(500);
    /// assert_eq!(console.max_chars_displayed(), Some(500));
    /// ```
    #[must_use]
    pub fn with_max_chars_displayed(mut self, max: usize) -> Self {
        self.max_chars_displayed = (max > 0).then_some(max);
        self
    }

    /// Color whole lines by level (requires the `console` feature)
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn max_chars_displayed(&self) -> Option<usize> {
        self.max_chars_displayed
    }

    /// The exact text `accept` prints for `entry`
    pub fn prepare(&self, entry: &LogEntry) -> String {
        let rendered = self.settings.render(entry);

        let line = match self.max_chars_displayed {
            Some(max) => match rendered.char_indices().nth(max) {
                Some((cut, _)) => format!("{}{}", &rendered[..cut], TRUNCATION_SUFFIX),
                None => rendered,
            },
            None => rendered,
        };

        self.colorize(line, &entry.level)
    }

    #[cfg(feature = "console")]
    fn colorize(&self, line: String, level: &Level) -> String {
        if self.use_colors {
            line.color(level.color_code()).to_string()
        } else {
            line
        }
    }

    #[cfg(not(feature = "console"))]
    fn colorize(&self, line: String, _level: &Level) -> String {
        line
    }
}

impl Default for ConsoleDestination {
    fn default() -> Self {
        Self::new()
    }
}

impl Destination for ConsoleDestination {
    fn kind(&self) -> DestinationKind {
        CONSOLE_KIND
    }

    fn settings(&self) -> &DestinationSettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut DestinationSettings {
        &mut self.settings
    }

    fn accept(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.prepare(entry);

        if entry.level >= Level::ERROR {
            eprintln!("{}", output);
        } else {
            println!("{}", output);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }
}
