//! Files destination: one file per accepted event

use crate::core::{
    Destination, DestinationKind, DestinationSettings, EncodingFormat, Level, LogEntry,
    LoggerError, Result,
};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const FILES_KIND: DestinationKind = DestinationKind::new("files");

/// Folder used by [`FilesDestination::in_default_folder`]
pub const DEFAULT_FOLDER_NAME: &str = "swiftwood-logs";

/// Writes every accepted event to its own file inside a log folder.
///
/// Files are named `<seconds>.<millis>-<uuid>-<rank>.<ext>`, so a plain
/// lexical listing is chronological and names never collide. Each file is
/// written to a hidden temporary name first and then renamed, so readers
/// never observe a partial entry.
///
/// Defaults: minimum level very verbose, no category filter, redaction on,
/// JSON encoding.
///
/// # Example
///
/// ```no_run
/// use swiftwood::prelude::*;
///
/// let files = FilesDestination::new("/var/log/myapp", EncodingFormat::Cbor)?;
/// let logger = Logger::new();
/// logger.add_destination(files);
/// # Ok::<(), swiftwood::LoggerError>(())
/// ```
#[derive(Debug)]
pub struct FilesDestination {
    settings: DestinationSettings,
    log_folder: PathBuf,
    encoding: EncodingFormat,
}

impl FilesDestination {
    /// Create the destination, creating `log_folder` and its parents if
    /// missing.
    pub fn new(log_folder: impl Into<PathBuf>, encoding: EncodingFormat) -> Result<Self> {
        let log_folder = log_folder.into();

        fs::create_dir_all(&log_folder).map_err(|e| {
            LoggerError::io_operation(
                "create log folder",
                log_folder.display().to_string(),
                e,
            )
        })?;

        if !log_folder.is_dir() {
            return Err(LoggerError::config(
                "FilesDestination",
                format!("{} is not a directory", log_folder.display()),
            ));
        }

        Ok(Self {
            settings: DestinationSettings::new(Level::VERY_VERBOSE, true),
            log_folder,
            encoding,
        })
    }

    /// Use `<temp dir>/swiftwood-logs`
    pub fn in_default_folder(encoding: EncodingFormat) -> Result<Self> {
        Self::new(std::env::temp_dir().join(DEFAULT_FOLDER_NAME), encoding)
    }

    pub fn log_folder(&self) -> &Path {
        &self.log_folder
    }

    pub fn encoding(&self) -> EncodingFormat {
        self.encoding
    }

    /// Switch the encoding used for subsequent files
    #[must_use]
    pub fn with_encoding(mut self, encoding: EncodingFormat) -> Self {
        self.encoding = encoding;
        self
    }

    /// File name for `entry`, unique per call
    pub fn file_name(&self, entry: &LogEntry) -> String {
        format!(
            "{}.{:03}-{}-{}.{}",
            entry.timestamp.timestamp(),
            entry.timestamp.timestamp_subsec_millis(),
            Uuid::new_v4(),
            entry.level.rank(),
            self.encoding.extension()
        )
    }

    fn write_atomically(&self, file_name: &str, data: &[u8]) -> Result<()> {
        let target = self.log_folder.join(file_name);
        let staging = self.log_folder.join(format!(".{}.tmp", file_name));

        let write = || -> std::io::Result<()> {
            let mut file = fs::File::create(&staging)?;
            file.write_all(data)?;
            file.sync_all()?;
            fs::rename(&staging, &target)
        };

        write().map_err(|e| {
            let _ = fs::remove_file(&staging);
            LoggerError::io_operation("write log file", target.display().to_string(), e)
        })
    }
}

impl Destination for FilesDestination {
    fn kind(&self) -> DestinationKind {
        FILES_KIND
    }

    fn settings(&self) -> &DestinationSettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut DestinationSettings {
        &mut self.settings
    }

    fn accept(&mut self, entry: &LogEntry) -> Result<()> {
        let data = self.encoding.encode(entry, &self.settings)?;
        let file_name = self.file_name(entry);
        self.write_atomically(&file_name, &data)
    }
}
