//! Destination registry and event fan-out

use super::{
    build_info::{BuildInfoCache, BuildInfoGenerator},
    category::Category,
    destination::{Destination, DestinationKind, DestinationSettings},
    error::{LoggerError, Result},
    log_entry::{LogEntry, Location},
    log_level::Level,
    log_value::LogValue,
    metrics::DispatchMetrics,
    replication_policy::ReplicationPolicy,
};
use parking_lot::RwLock;
use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of one registered destination, handed out by
/// [`Logger::register`]. Two identically configured destinations get
/// different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DestinationId(u64);

struct Registered {
    id: DestinationId,
    destination: Box<dyn Destination>,
}

/// The logging facade: an ordered registry of destinations plus the
/// build-info cache attached to every event.
///
/// All methods take `&self`; share a logger between threads with `Arc`.
/// Dispatch is synchronous and holds the registry lock, so a destination
/// must not log through the same logger from inside `accept`. A build-info
/// generator may log; its own entries carry no build info.
///
/// # Example
///
/// ```
/// use swiftwood::prelude::*;
///
/// let logger = Logger::new();
/// logger.add_destination(ConsoleDestination::new().with_minimum_level(Level::DEBUG));
///
/// logger.info("Look at me");
/// logger.verbose("filtered out");
/// ```
pub struct Logger {
    destinations: RwLock<Vec<Registered>>,
    build_info: BuildInfoCache,
    metrics: DispatchMetrics,
    next_id: AtomicU64,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            destinations: RwLock::new(Vec::new()),
            build_info: BuildInfoCache::new(),
            metrics: DispatchMetrics::new(),
            next_id: AtomicU64::new(0),
        }
    }

    /// Register a destination; returns `None` when the policy forfeits.
    pub fn register<D: Destination + 'static>(
        &self,
        destination: D,
        policy: ReplicationPolicy,
    ) -> Option<DestinationId> {
        self.register_boxed(Box::new(destination), policy)
    }

    pub fn register_boxed(
        &self,
        destination: Box<dyn Destination>,
        policy: ReplicationPolicy,
    ) -> Option<DestinationId> {
        let kind = destination.kind();
        let mut destinations = self.destinations.write();

        match policy {
            ReplicationPolicy::AppendAlways => {}
            ReplicationPolicy::ForfeitIfSameKindExists => {
                if destinations.iter().any(|r| r.destination.kind() == kind) {
                    return None;
                }
            }
            ReplicationPolicy::ReplaceSameKind => {
                destinations.retain(|r| r.destination.kind() != kind);
            }
        }

        let id = DestinationId(self.next_id.fetch_add(1, Ordering::Relaxed));
        destinations.push(Registered { id, destination });
        Some(id)
    }

    /// Register with the default policy ([`ReplicationPolicy::ForfeitIfSameKindExists`])
    pub fn add_destination<D: Destination + 'static>(&self, destination: D) -> Option<DestinationId> {
        self.register(destination, ReplicationPolicy::default())
    }

    /// Remove one destination by identity
    pub fn unregister(&self, id: DestinationId) -> Option<Box<dyn Destination>> {
        let mut destinations = self.destinations.write();
        let index = destinations.iter().position(|r| r.id == id)?;
        Some(destinations.remove(index).destination)
    }

    pub fn clear_all(&self) {
        self.destinations.write().clear();
    }

    /// Mutate the live settings of a registered destination. The next
    /// dispatch sees the change. Returns `false` if `id` is not registered.
    pub fn configure<F>(&self, id: DestinationId, f: F) -> bool
    where
        F: FnOnce(&mut DestinationSettings),
    {
        let mut destinations = self.destinations.write();
        match destinations.iter_mut().find(|r| r.id == id) {
            Some(registered) => {
                f(registered.destination.settings_mut());
                true
            }
            None => false,
        }
    }

    pub fn settings(&self, id: DestinationId) -> Option<DestinationSettings> {
        self.destinations
            .read()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.destination.settings().clone())
    }

    pub fn destination_count(&self) -> usize {
        self.destinations.read().len()
    }

    /// Registered ids in dispatch order
    pub fn destination_ids(&self) -> Vec<DestinationId> {
        self.destinations.read().iter().map(|r| r.id).collect()
    }

    /// Registered kinds in dispatch order
    pub fn destination_kinds(&self) -> Vec<DestinationKind> {
        self.destinations
            .read()
            .iter()
            .map(|r| r.destination.kind())
            .collect()
    }

    pub fn contains(&self, id: DestinationId) -> bool {
        self.destinations.read().iter().any(|r| r.id == id)
    }

    pub fn set_build_info_generator<F>(&self, generator: F)
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.build_info.set_generator(generator);
    }

    pub fn set_caching_enabled(&self, enabled: bool) {
        self.build_info.set_caching_enabled(enabled);
    }

    pub fn build_info(&self) -> Option<String> {
        self.build_info.get()
    }

    pub fn build_info_cache(&self) -> &BuildInfoCache {
        &self.build_info
    }

    pub fn metrics(&self) -> &DispatchMetrics {
        &self.metrics
    }

    /// Build an entry for this call and fan it out to every destination
    /// whose gate passes, in registration order.
    pub fn emit(
        &self,
        level: Level,
        message: Vec<LogValue>,
        category: Category,
        context: Option<LogValue>,
        location: Location,
    ) {
        let entry = LogEntry::new(level, message, location)
            .with_category(category)
            .with_context(context)
            .with_build_info(self.build_info.get());

        self.dispatch(&entry);
    }

    /// Fan out a prebuilt entry. Sink failures and panics are reported to
    /// stderr and never reach the caller.
    pub fn dispatch(&self, entry: &LogEntry) {
        self.metrics.record_emitted();
        let mut destinations = self.destinations.write();

        for registered in destinations.iter_mut() {
            if !registered.destination.settings().admits(entry) {
                self.metrics.record_filtered();
                continue;
            }

            let kind = registered.destination.kind();
            let accept_result =
                catch_unwind(AssertUnwindSafe(|| registered.destination.accept(entry)));

            match accept_result {
                Ok(Ok(())) => {
                    self.metrics.record_delivered();
                }
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Destination '{}' failed: {}", kind, e);
                    self.metrics.record_failed();
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Destination '{}' panicked: {}. \
                         Other destinations continue to function.",
                        kind,
                        panic_message(panic_info.as_ref())
                    );
                    self.metrics.record_failed();
                }
            }
        }
    }

    /// Flush every destination. All destinations are flushed even if one
    /// fails; the first failure is returned.
    pub fn flush(&self) -> Result<()> {
        let mut destinations = self.destinations.write();
        let mut first_error = None;

        for registered in destinations.iter_mut() {
            let kind = registered.destination.kind();
            match catch_unwind(AssertUnwindSafe(|| registered.destination.flush())) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Destination '{}' flush failed: {}", kind, e);
                    first_error.get_or_insert(e);
                }
                Err(panic_info) => {
                    let message = panic_message(panic_info.as_ref());
                    eprintln!(
                        "[LOGGER CRITICAL] Destination '{}' panicked during flush: {}",
                        kind, message
                    );
                    self.metrics.record_failed();
                    first_error.get_or_insert(LoggerError::destination(
                        kind.name(),
                        format!("panicked during flush: {}", message),
                    ));
                }
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    #[track_caller]
    pub fn log(&self, level: Level, message: impl Into<LogValue>) {
        self.emit(
            level,
            vec![message.into()],
            Category::DEFAULT,
            None,
            Location::caller(),
        );
    }

    #[inline]
    #[track_caller]
    pub fn very_verbose(&self, message: impl Into<LogValue>) {
        self.log(Level::VERY_VERBOSE, message);
    }

    #[inline]
    #[track_caller]
    pub fn verbose(&self, message: impl Into<LogValue>) {
        self.log(Level::VERBOSE, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<LogValue>) {
        self.log(Level::DEBUG, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<LogValue>) {
        self.log(Level::INFO, message);
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, message: impl Into<LogValue>) {
        self.log(Level::WARNING, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<LogValue>) {
        self.log(Level::ERROR, message);
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("destinations", &self.destination_kinds())
            .field("build_info", &self.build_info)
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        let failed = self.metrics.failed_count();
        if failed > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} failed deliveries (failure rate: {:.2}%)",
                failed,
                self.metrics.failure_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use swiftwood::prelude::*;
///
/// let logger = Logger::builder()
///     .destination(ConsoleDestination::new().with_minimum_level(Level::DEBUG))
///     .build_info_generator(|| Some(env!("CARGO_PKG_VERSION").to_string()))
///     .build();
///
/// assert_eq!(logger.destination_count(), 1);
/// ```
pub struct LoggerBuilder {
    destinations: Vec<(Box<dyn Destination>, ReplicationPolicy)>,
    build_info_generator: Option<BuildInfoGenerator>,
    caching_enabled: bool,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            destinations: Vec::new(),
            build_info_generator: None,
            caching_enabled: true,
        }
    }

    /// Add a destination with the default replication policy
    #[must_use = "builder methods return a new value"]
    pub fn destination<D: Destination + 'static>(self, destination: D) -> Self {
        self.destination_with_policy(destination, ReplicationPolicy::default())
    }

    #[must_use = "builder methods return a new value"]
    pub fn destination_with_policy<D: Destination + 'static>(
        mut self,
        destination: D,
        policy: ReplicationPolicy,
    ) -> Self {
        self.destinations.push((Box::new(destination), policy));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn build_info_generator<F>(mut self, generator: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.build_info_generator = Some(std::sync::Arc::new(generator));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn caching_enabled(mut self, enabled: bool) -> Self {
        self.caching_enabled = enabled;
        self
    }

    /// Build the Logger, registering destinations in the order they were added
    pub fn build(self) -> Logger {
        let logger = Logger::new();

        if let Some(generator) = self.build_info_generator {
            logger.set_build_info_generator(move || generator());
        }
        logger.set_caching_enabled(self.caching_enabled);

        for (destination, policy) in self.destinations {
            logger.register_boxed(destination, policy);
        }

        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
