//! Built-in destinations

pub mod console;
#[cfg(feature = "files")]
pub mod files;

pub use console::{ConsoleDestination, CONSOLE_KIND};
#[cfg(feature = "files")]
pub use files::{FilesDestination, FILES_KIND};
