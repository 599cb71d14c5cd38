//! Integration tests for the logging facade
//!
//! These tests verify:
//! - One file per event with JSON and CBOR encoding
//! - Per-destination redaction of sensitive values
//! - Level and category gates
//! - Replication policies and destination identity
//! - Build info caching
//! - Failure isolation between destinations

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use swiftwood::destinations::FILES_KIND;
use swiftwood::prelude::*;
use swiftwood::{debug, info, log, warning};
use tempfile::TempDir;

fn written_files(folder: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(folder)
        .expect("Failed to read log folder")
        .map(|e| e.expect("Failed to read dir entry").path())
        .collect();
    files.sort();
    files
}

fn decode_all(folder: &Path) -> Vec<EncodedLogEntry> {
    written_files(folder)
        .iter()
        .map(|path| {
            EncodedLogEntry::from_json(&fs::read(path).expect("Failed to read log file"))
                .expect("Failed to decode log file")
        })
        .collect()
}

struct PanickingDestination {
    settings: DestinationSettings,
}

impl Destination for PanickingDestination {
    fn kind(&self) -> DestinationKind {
        DestinationKind::new("panicking")
    }

    fn settings(&self) -> &DestinationSettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut DestinationSettings {
        &mut self.settings
    }

    fn accept(&mut self, _entry: &LogEntry) -> Result<()> {
        panic!("sink exploded");
    }
}

#[test]
fn test_files_destination_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::new();
    let files = FilesDestination::new(temp_dir.path(), EncodingFormat::Json)
        .expect("Failed to create files destination");
    assert!(logger.add_destination(files).is_some());

    logger.info("test file destination");

    let entries = decode_all(temp_dir.path());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message[0], "test file destination");
    assert_eq!(entries[0].log_level, 60);
    assert_eq!(entries[0].source_file, "integration_tests.rs");
    assert_eq!(entries[0].category, "default");
}

#[test]
fn test_one_file_per_event() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::new();
    logger.add_destination(
        FilesDestination::new(temp_dir.path(), EncodingFormat::Json)
            .expect("Failed to create files destination"),
    );

    for i in 0..5 {
        info!(logger, "event", i);
    }

    let mut messages: Vec<String> = decode_all(temp_dir.path())
        .into_iter()
        .map(|e| e.message.join(" "))
        .collect();
    messages.sort();
    assert_eq!(
        messages,
        vec!["event 0", "event 1", "event 2", "event 3", "event 4"]
    );
}

#[test]
fn test_censored_and_uncensored_destinations() {
    let censored_dir = TempDir::new().expect("Failed to create temp dir");
    let uncensored_dir = TempDir::new().expect("Failed to create temp dir");

    let logger = Logger::new();
    logger.register(
        FilesDestination::new(censored_dir.path(), EncodingFormat::Json)
            .expect("Failed to create files destination")
            .with_redaction(true),
        ReplicationPolicy::AppendAlways,
    );
    logger.register(
        FilesDestination::new(uncensored_dir.path(), EncodingFormat::Json)
            .expect("Failed to create files destination")
            .with_redaction(false),
        ReplicationPolicy::AppendAlways,
    );
    assert_eq!(logger.destination_count(), 2);

    info!(
        logger,
        "test file destination",
        Censored("shouldbeconditionallycensored")
    );

    let censored = decode_all(censored_dir.path());
    assert_eq!(censored[0].message[0], "test file destination");
    assert_eq!(censored[0].message[1], "Censored: **CENSORED**");

    let uncensored = decode_all(uncensored_dir.path());
    assert_eq!(uncensored[0].message[1], "shouldbeconditionallycensored");

    let raw = fs::read_to_string(&written_files(censored_dir.path())[0])
        .expect("Failed to read log file");
    assert!(!raw.contains("shouldbeconditionallycensored"));
}

#[test]
fn test_context_follows_redaction() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::new();
    logger.add_destination(
        FilesDestination::new(temp_dir.path(), EncodingFormat::Json)
            .expect("Failed to create files destination"),
    );

    warning!(logger, context = Censored("session-abc"); "expired");

    let entries = decode_all(temp_dir.path());
    assert_eq!(entries[0].context.as_deref(), Some("Censored: **CENSORED**"));
    assert_eq!(entries[0].log_level, 80);
}

#[test]
fn test_cbor_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::new();
    logger.add_destination(
        FilesDestination::new(temp_dir.path(), EncodingFormat::Cbor)
            .expect("Failed to create files destination"),
    );

    debug!(logger, category = Category::from("db"); "query took", 12, "ms");

    let files = written_files(temp_dir.path());
    assert_eq!(files.len(), 1);
    let decoded = EncodedLogEntry::from_cbor(&fs::read(&files[0]).expect("Failed to read"))
        .expect("Failed to decode cbor");
    assert_eq!(decoded.message, vec!["query took", "12", "ms"]);
    assert_eq!(decoded.category, "db");
    assert_eq!(decoded.level(), Level::DEBUG);
}

#[test]
fn test_level_gate() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::new();
    logger.add_destination(
        FilesDestination::new(temp_dir.path(), EncodingFormat::Json)
            .expect("Failed to create files destination")
            .with_minimum_level(Level::WARNING),
    );

    logger.info("dropped");
    log!(logger, Level::new("🔒 AUDIT", 70), "dropped too");
    logger.warning("kept");
    logger.error("kept");
    log!(logger, Level::new("🔥 FATAL", 150), "kept");

    let mut ranks: Vec<i32> = decode_all(temp_dir.path())
        .iter()
        .map(|e| e.log_level)
        .collect();
    ranks.sort();
    assert_eq!(ranks, vec![80, 100, 150]);
    assert_eq!(logger.metrics().filtered_count(), 2);
}

#[test]
fn test_category_gate() {
    let allow_dir = TempDir::new().expect("Failed to create temp dir");
    let block_dir = TempDir::new().expect("Failed to create temp dir");

    let logger = Logger::new();
    logger.register(
        FilesDestination::new(allow_dir.path(), EncodingFormat::Json)
            .expect("Failed to create files destination")
            .with_category_filter(CategoryFilter::allow(["networking"])),
        ReplicationPolicy::AppendAlways,
    );
    logger.register(
        FilesDestination::new(block_dir.path(), EncodingFormat::Json)
            .expect("Failed to create files destination")
            .with_category_filter(CategoryFilter::block(["networking"])),
        ReplicationPolicy::AppendAlways,
    );

    info!(logger, category = Category::from("networking"); "request");
    info!(logger, category = Category::from("ui"); "tap");
    info!(logger, "uncategorized");

    let allowed: Vec<String> = decode_all(allow_dir.path())
        .into_iter()
        .map(|e| e.category)
        .collect();
    assert_eq!(allowed, vec!["networking"]);

    let mut blocked: Vec<String> = decode_all(block_dir.path())
        .into_iter()
        .map(|e| e.category)
        .collect();
    blocked.sort();
    assert_eq!(blocked, vec!["default", "ui"]);
}

#[test]
fn test_replication_policies() {
    let logger = Logger::new();

    let first = logger.add_destination(ConsoleDestination::new());
    assert!(first.is_some());

    let forfeited = logger.register(
        ConsoleDestination::new(),
        ReplicationPolicy::ForfeitIfSameKindExists,
    );
    assert!(forfeited.is_none());
    assert_eq!(logger.destination_count(), 1);

    let appended = logger.register(ConsoleDestination::new(), ReplicationPolicy::AppendAlways);
    assert!(appended.is_some());
    assert_ne!(first, appended);
    assert_eq!(logger.destination_count(), 2);

    let replaced = logger
        .register(
            ConsoleDestination::new().with_minimum_level(Level::ERROR),
            ReplicationPolicy::ReplaceSameKind,
        )
        .expect("Replace always registers");
    assert_eq!(logger.destination_ids(), vec![replaced]);
    assert_eq!(
        logger.settings(replaced).map(|s| s.minimum_level),
        Some(Level::ERROR)
    );
}

#[test]
fn test_unregister_and_clear_all() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::new();
    let id = logger
        .add_destination(
            FilesDestination::new(temp_dir.path(), EncodingFormat::Json)
                .expect("Failed to create files destination"),
        )
        .expect("First files destination registers");
    logger.add_destination(ConsoleDestination::new().with_minimum_level(Level::ERROR));

    logger.info("before");
    let removed = logger.unregister(id).expect("Destination was registered");
    assert_eq!(removed.kind(), FILES_KIND);
    logger.info("after");

    assert_eq!(written_files(temp_dir.path()).len(), 1);
    assert!(logger.unregister(id).is_none());

    logger.clear_all();
    assert_eq!(logger.destination_count(), 0);
    logger.info("nowhere");
}

#[test]
fn test_configure_applies_to_next_event() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::new();
    let id = logger
        .add_destination(
            FilesDestination::new(temp_dir.path(), EncodingFormat::Json)
                .expect("Failed to create files destination"),
        )
        .expect("Destination registers");

    info!(logger, "first", Censored("secret"));
    assert!(logger.configure(id, |settings| settings.should_redact = false));
    info!(logger, "second", Censored("secret"));

    let mut entries = decode_all(temp_dir.path());
    entries.sort_by(|a, b| a.message[0].cmp(&b.message[0]));
    assert_eq!(entries[0].message, vec!["first", "Censored: **CENSORED**"]);
    assert_eq!(entries[1].message, vec!["second", "secret"]);
}

#[test]
fn test_build_info_is_cached() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let logger = Logger::builder()
        .destination(
            FilesDestination::new(temp_dir.path(), EncodingFormat::Json)
                .expect("Failed to create files destination"),
        )
        .build_info_generator(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Some("1.2.3 (42)".to_string())
        })
        .build();

    logger.info("one");
    logger.info("two");
    logger.info("three");

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    for entry in decode_all(temp_dir.path()) {
        assert_eq!(entry.build_info.as_deref(), Some("1.2.3 (42)"));
    }

    logger.set_caching_enabled(false);
    logger.info("four");
    logger.info("five");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_missing_build_info_renders_placeholder() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::new();
    logger.add_destination(
        FilesDestination::new(temp_dir.path(), EncodingFormat::FormattedString)
            .expect("Failed to create files destination")
            .with_format(Format::new(
                vec![FormatPart::BuildInfo, FormatPart::Level, FormatPart::Message],
                " ",
            )),
    );

    logger.info("hello");

    let files = written_files(temp_dir.path());
    let contents = fs::read_to_string(&files[0]).expect("Failed to read log file");
    assert_eq!(contents, "nil 💙 INFO hello");
}

#[test]
fn test_panicking_destination_is_isolated() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::new();
    logger.add_destination(PanickingDestination {
        settings: DestinationSettings::new(Level::VERY_VERBOSE, false),
    });
    logger.add_destination(
        FilesDestination::new(temp_dir.path(), EncodingFormat::Json)
            .expect("Failed to create files destination"),
    );

    logger.info("survives");
    logger.info("still survives");

    assert_eq!(decode_all(temp_dir.path()).len(), 2);
    assert_eq!(logger.metrics().failed_count(), 2);
    assert_eq!(logger.metrics().delivered_count(), 2);
    assert_eq!(logger.metrics().emitted_count(), 2);
}

#[test]
fn test_failing_destination_does_not_reach_caller() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let folder = temp_dir.path().join("logs");
    let logger = Logger::new();
    logger.add_destination(
        FilesDestination::new(&folder, EncodingFormat::Json)
            .expect("Failed to create files destination"),
    );
    fs::remove_dir_all(&folder).expect("Failed to remove log folder");

    logger.error("lost");

    assert_eq!(logger.metrics().failed_count(), 1);
    assert!(logger.flush().is_ok());
}
