//! Core logger types and traits

pub mod build_info;
pub mod category;
pub mod destination;
pub mod encoding;
pub mod error;
pub mod format;
pub mod log_entry;
pub mod log_level;
pub mod log_value;
pub mod logger;
pub mod metrics;
pub mod redaction;
pub mod replication_policy;
pub mod timestamp;

pub use build_info::{BuildInfoCache, BuildInfoGenerator, BuildInfoState};
pub use category::{Category, CategoryFilter};
pub use destination::{Destination, DestinationExt, DestinationKind, DestinationSettings};
pub use encoding::{EncodedLogEntry, EncodingFormat};
pub use error::{LoggerError, Result};
pub use format::{Format, FormatPart, MISSING_PLACEHOLDER};
pub use log_entry::{LogEntry, Location};
pub use log_level::{Level, CANONICAL_LEVELS};
pub use log_value::LogValue;
pub use logger::{DestinationId, Logger, LoggerBuilder};
pub use metrics::DispatchMetrics;
pub use redaction::{Censored, Redactable, CENSORED_MARKER};
pub use replication_policy::ReplicationPolicy;
pub use timestamp::{TimestampFormat, CLASSIC_TIMESTAMP_PATTERN};
