//! Opt-in redaction for sensitive log values
//!
//! A type implementing [`Redactable`] keeps its normal `Display` output for
//! destinations that log in plain text and offers a censored projection for
//! destinations with redaction turned on. The default projection names the
//! type and hides the value entirely; implementors may override it to
//! disclose a safe fragment.
//!
//! ```
//! use swiftwood::Redactable;
//! use std::fmt;
//!
//! struct ApiKey(String);
//!
//! impl fmt::Display for ApiKey {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str(&self.0)
//!     }
//! }
//!
//! impl Redactable for ApiKey {
//!     fn redacted_description(&self) -> String {
//!         let tail = &self.0[self.0.len().saturating_sub(3)..];
//!         format!("***{}", tail)
//!     }
//! }
//!
//! let key = ApiKey("thisisalongkey".to_string());
//! assert_eq!(key.redacted_description(), "***key");
//! ```

use std::fmt;

pub const CENSORED_MARKER: &str = "**CENSORED**";

pub trait Redactable: fmt::Display {
    /// Safe-to-persist projection of the value
    fn redacted_description(&self) -> String {
        format!("{}: {}", short_type_name::<Self>(), CENSORED_MARKER)
    }
}

/// Marks any displayable value as sensitive, using the default projection.
///
/// ```
/// use swiftwood::{Censored, Redactable};
///
/// let token = Censored("hunter2");
/// assert_eq!(token.to_string(), "hunter2");
/// assert!(!token.redacted_description().contains("hunter2"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Censored<T>(pub T);

impl<T: fmt::Display> fmt::Display for Censored<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T: fmt::Display> Redactable for Censored<T> {
    fn redacted_description(&self) -> String {
        format!("Censored: {}", CENSORED_MARKER)
    }
}

/// Unqualified type name with every path segment stripped, generic
/// arguments included (`app::Secret<alloc::string::String>` becomes
/// `Secret<String>`).
fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut short = String::with_capacity(full.len());
    let mut segment_start = 0;

    for (i, c) in full.char_indices() {
        if matches!(c, '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' | '*') {
            short.push_str(strip_path(&full[segment_start..i]));
            short.push(c);
            segment_start = i + c.len_utf8();
        }
    }
    short.push_str(strip_path(&full[segment_start..]));
    short
}

fn strip_path(segment: &str) -> &str {
    segment
        .rfind("::")
        .map_or(segment, |i| &segment[i + 2..])
}
