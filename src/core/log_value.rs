//! Heterogeneous message parts
//!
//! Message parts are kept as typed values rather than pre-rendered strings so
//! that every destination can decide on its own whether a part is shown as-is
//! or through its redacted projection.

use super::redaction::{Censored, Redactable};
use std::fmt;
use std::sync::Arc;

/// A single message part (or context value) carried by a log entry
#[derive(Clone)]
pub enum LogValue {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Redactable(Arc<dyn Redactable + Send + Sync>),
}

impl LogValue {
    /// Wrap a sensitive value
    pub fn redactable<T>(value: T) -> Self
    where
        T: Redactable + Send + Sync + 'static,
    {
        LogValue::Redactable(Arc::new(value))
    }

    /// Capture any displayable value as text
    pub fn display(value: impl fmt::Display) -> Self {
        LogValue::Text(value.to_string())
    }

    #[inline]
    pub fn is_redactable(&self) -> bool {
        matches!(self, LogValue::Redactable(_))
    }

    /// String projection of this value; `redact` selects the censored form
    /// for redactable values and is ignored for everything else.
    pub fn render(&self, redact: bool) -> String {
        match self {
            LogValue::Redactable(value) if redact => value.redacted_description(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Text(s) => f.write_str(s),
            LogValue::Int(i) => write!(f, "{}", i),
            LogValue::UInt(u) => write!(f, "{}", u),
            LogValue::Float(fl) => write!(f, "{}", fl),
            LogValue::Bool(b) => write!(f, "{}", b),
            LogValue::Redactable(value) => fmt::Display::fmt(value, f),
        }
    }
}

// Debug output never carries the raw value of a sensitive part.
impl fmt::Debug for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Text(s) => f.debug_tuple("Text").field(s).finish(),
            LogValue::Int(i) => f.debug_tuple("Int").field(i).finish(),
            LogValue::UInt(u) => f.debug_tuple("UInt").field(u).finish(),
            LogValue::Float(fl) => f.debug_tuple("Float").field(fl).finish(),
            LogValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            LogValue::Redactable(value) => f
                .debug_tuple("Redactable")
                .field(&value.redacted_description())
                .finish(),
        }
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::Text(s)
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::Text(s.to_string())
    }
}

impl From<&String> for LogValue {
    fn from(s: &String) -> Self {
        LogValue::Text(s.clone())
    }
}

impl From<i64> for LogValue {
    fn from(i: i64) -> Self {
        LogValue::Int(i)
    }
}

impl From<i32> for LogValue {
    fn from(i: i32) -> Self {
        LogValue::Int(i64::from(i))
    }
}

impl From<u64> for LogValue {
    fn from(u: u64) -> Self {
        LogValue::UInt(u)
    }
}

impl From<u32> for LogValue {
    fn from(u: u32) -> Self {
        LogValue::UInt(u64::from(u))
    }
}

impl From<usize> for LogValue {
    fn from(u: usize) -> Self {
        LogValue::UInt(u as u64)
    }
}

impl From<f64> for LogValue {
    fn from(f: f64) -> Self {
        LogValue::Float(f)
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl<T> From<Censored<T>> for LogValue
where
    T: fmt::Display + Send + Sync + 'static,
{
    fn from(value: Censored<T>) -> Self {
        LogValue::redactable(value)
    }
}
