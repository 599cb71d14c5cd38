//! # Swiftwood
//!
//! A structured logging facade that fans every event out to any number of
//! independently configured destinations.
//!
//! ## Features
//!
//! - **Multiple Destinations**: Console, one-file-per-event, and custom sinks
//! - **Per-Destination Gates**: Minimum level and category allow/block lists
//! - **Redaction**: Sensitive values are censored only where a sink asks for it
//! - **Structured Encoding**: JSON or CBOR projections of each event
//! - **Thread Safe**: One logger shared freely behind an `Arc`
//!
//! ## Example
//!
//! ```
//! use swiftwood::prelude::*;
//! use swiftwood::info;
//!
//! let logger = Logger::new();
//! logger.add_destination(ConsoleDestination::new().with_minimum_level(Level::DEBUG));
//!
//! info!(logger, "user", Censored("alice@example.com"), "signed in");
//! ```

pub mod core;
pub mod destinations;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "files")]
    pub use crate::destinations::FilesDestination;
    pub use crate::destinations::ConsoleDestination;
    pub use crate::core::{
        BuildInfoCache, Category, CategoryFilter, Censored, Destination, DestinationExt,
        DestinationId, DestinationKind, DestinationSettings, EncodedLogEntry, EncodingFormat,
        Format, FormatPart, Level, Location, LogEntry, LogValue, Logger, LoggerBuilder,
        LoggerError, Redactable, ReplicationPolicy, Result, TimestampFormat,
    };
}

#[cfg(feature = "files")]
pub use crate::destinations::FilesDestination;
pub use crate::destinations::ConsoleDestination;
pub use crate::core::{
    BuildInfoCache, BuildInfoGenerator, BuildInfoState, Category, CategoryFilter, Censored,
    Destination, DestinationExt, DestinationId, DestinationKind, DestinationSettings,
    DispatchMetrics, EncodedLogEntry, EncodingFormat, Format, FormatPart, Level, Location,
    LogEntry, LogValue, Logger, LoggerBuilder, LoggerError, Redactable, ReplicationPolicy, Result,
    TimestampFormat, CANONICAL_LEVELS, CENSORED_MARKER, MISSING_PLACEHOLDER,
};
