//! Registration policies for destinations of the same kind

/// What to do when registering a destination whose kind is already present
///
/// # Example
///
/// ```
/// use swiftwood::{ConsoleDestination, Logger, ReplicationPolicy};
///
/// let logger = Logger::new();
/// let first = logger.register(ConsoleDestination::new(), ReplicationPolicy::AppendAlways);
/// let second = logger.register(ConsoleDestination::new(), ReplicationPolicy::ForfeitIfSameKindExists);
///
/// assert!(first.is_some());
/// assert!(second.is_none());
/// assert_eq!(logger.destination_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReplicationPolicy {
    /// Always append; differently configured instances of one kind coexist
    AppendAlways,

    /// Skip the registration if any destination of the same kind exists
    #[default]
    ForfeitIfSameKindExists,

    /// Remove every destination of the same kind, then append
    ReplaceSameKind,
}
