//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An ordered severity: a display label plus a comparable rank.
///
/// Ordering, equality and hashing all look at the rank only, so a custom
/// level with the same rank as a canonical one compares equal to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    label: Cow<'static, str>,
    rank: i32,
}

/// The canonical buckets, ascending by rank.
pub static CANONICAL_LEVELS: [Level; 6] = [
    Level::VERY_VERBOSE,
    Level::VERBOSE,
    Level::DEBUG,
    Level::INFO,
    Level::WARNING,
    Level::ERROR,
];

impl Level {
    pub const VERY_VERBOSE: Level = Level::from_static("🤎 VERY VERBOSE", 0);
    pub const VERBOSE: Level = Level::from_static("💜 VERBOSE", 20);
    pub const DEBUG: Level = Level::from_static("💚 DEBUG", 40);
    pub const INFO: Level = Level::from_static("💙 INFO", 60);
    pub const WARNING: Level = Level::from_static("💛 WARNING", 80);
    pub const ERROR: Level = Level::from_static("❤️ ERROR", 100);

    pub const fn from_static(label: &'static str, rank: i32) -> Self {
        Self {
            label: Cow::Borrowed(label),
            rank,
        }
    }

    /// Create a custom level with an arbitrary label and rank
    pub fn new(label: impl Into<String>, rank: i32) -> Self {
        Self {
            label: Cow::Owned(label.into()),
            rank,
        }
    }

    /// Map an arbitrary rank onto the canonical bucket containing it.
    ///
    /// Buckets are half-open, `[floor, next_floor)`. Anything below the
    /// verbose floor lands in very-verbose and anything at or above the
    /// error floor lands in error.
    ///
    /// ```
    /// use swiftwood::Level;
    ///
    /// assert_eq!(Level::nearest(45), Level::DEBUG);
    /// assert_eq!(Level::nearest(150), Level::ERROR);
    /// ```
    #[must_use]
    pub fn nearest(rank: i32) -> Level {
        CANONICAL_LEVELS
            .iter()
            .rev()
            .find(|level| rank >= level.rank)
            .unwrap_or(&CANONICAL_LEVELS[0])
            .clone()
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn rank(&self) -> i32 {
        self.rank
    }

    /// Whether this level is one of the canonical buckets (label and rank)
    pub fn is_canonical(&self) -> bool {
        CANONICAL_LEVELS
            .iter()
            .any(|level| level.rank == self.rank && level.label == self.label)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match Level::nearest(self.rank).rank {
            0 => BrightBlack,
            20 => Magenta,
            40 => Green,
            60 => Blue,
            80 => Yellow,
            _ => Red,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::INFO
    }
}

impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Level {}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl Hash for Level {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    /// Accepts bucket names (`info`, `WARNING`, `very_verbose`), full labels
    /// (`💙 INFO`), or a bare integer which is coerced with [`Level::nearest`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(rank) = trimmed.parse::<i32>() {
            return Ok(Level::nearest(rank));
        }

        let normalized = trimmed.to_uppercase().replace(['_', '-'], " ");
        let level = match normalized.as_str() {
            "VERY VERBOSE" | "VERYVERBOSE" | "TRACE" => Level::VERY_VERBOSE,
            "VERBOSE" => Level::VERBOSE,
            "DEBUG" => Level::DEBUG,
            "INFO" => Level::INFO,
            "WARNING" | "WARN" => Level::WARNING,
            "ERROR" => Level::ERROR,
            _ => CANONICAL_LEVELS
                .iter()
                .find(|level| level.label.eq_ignore_ascii_case(trimmed))
                .cloned()
                .ok_or_else(|| LoggerError::InvalidLevel(s.to_string()))?,
        };
        Ok(level)
    }
}
