//! Log categories and per-destination category filters
//!
//! Categories are plain string tags. Extend the set by declaring your own
//! constants next to the code that uses them:
//!
//! ```
//! use swiftwood::Category;
//!
//! const NETWORKING: Category = Category::from_static("networking");
//! assert_eq!(NETWORKING.as_str(), "networking");
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(Cow<'static, str>);

impl Category {
    pub const DEFAULT: Category = Category::from_static("default");

    pub const fn from_static(name: &'static str) -> Self {
        Category(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Category(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::DEFAULT
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Category {
    fn from(name: &'static str) -> Self {
        Category::from_static(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Category::new(name)
    }
}

/// Decides whether a category passes a destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Only the listed categories pass
    Allow(HashSet<Category>),
    /// Everything except the listed categories passes
    Block(HashSet<Category>),
    /// No filtering
    #[default]
    None,
}

impl CategoryFilter {
    pub fn allow<I, C>(categories: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Category>,
    {
        CategoryFilter::Allow(categories.into_iter().map(Into::into).collect())
    }

    pub fn block<I, C>(categories: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Category>,
    {
        CategoryFilter::Block(categories.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn allows(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::Allow(set) => set.contains(category),
            CategoryFilter::Block(set) => !set.contains(category),
            CategoryFilter::None => true,
        }
    }
}
