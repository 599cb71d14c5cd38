//! Memoized build identifier
//!
//! Looking up a build identifier can be slow (reading bundle metadata,
//! shelling out to git), so the result is computed once and reused until the
//! generator is replaced.

use parking_lot::{Mutex, ReentrantMutex};
use std::cell::Cell;
use std::fmt;
use std::sync::Arc;

pub type BuildInfoGenerator = Arc<dyn Fn() -> Option<String> + Send + Sync>;

/// Cached result of the generator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BuildInfoState {
    #[default]
    Uncomputed,
    ComputedSome(String),
    ComputedNone,
}

impl BuildInfoState {
    fn from_result(result: &Option<String>) -> Self {
        match result {
            Some(value) => BuildInfoState::ComputedSome(value.clone()),
            None => BuildInfoState::ComputedNone,
        }
    }

    fn cached(&self) -> Option<Option<String>> {
        match self {
            BuildInfoState::Uncomputed => None,
            BuildInfoState::ComputedSome(value) => Some(Some(value.clone())),
            BuildInfoState::ComputedNone => Some(None),
        }
    }
}

struct Inner {
    generator: BuildInfoGenerator,
    state: BuildInfoState,
    caching_enabled: bool,
    /// Bumped on every generator replacement
    epoch: u64,
}

/// Clears the in-progress flag even if the generator panics
struct Generating<'a>(&'a Cell<bool>);

impl Drop for Generating<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Build identifier accessor with at-most-once generation while caching is
/// enabled.
///
/// ```
/// use swiftwood::BuildInfoCache;
///
/// let cache = BuildInfoCache::new();
/// cache.set_generator(|| Some("21501".to_string()));
/// assert_eq!(cache.get().as_deref(), Some("21501"));
/// ```
pub struct BuildInfoCache {
    inner: Mutex<Inner>,
    /// Serializes generation across threads; the flag marks a generation in
    /// progress on the owning thread
    generation: ReentrantMutex<Cell<bool>>,
}

impl BuildInfoCache {
    /// Cache with caching enabled and a generator that yields no build info
    pub fn new() -> Self {
        Self::with_generator(|| None)
    }

    pub fn with_generator<F>(generator: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        Self {
            inner: Mutex::new(Inner {
                generator: Arc::new(generator),
                state: BuildInfoState::Uncomputed,
                caching_enabled: true,
                epoch: 0,
            }),
            generation: ReentrantMutex::new(Cell::new(false)),
        }
    }

    /// Current build info.
    ///
    /// The generator runs outside the state lock, one thread at a time, so
    /// concurrent callers right after an invalidation pay for it once. A
    /// generator that logs through the logger owning this cache gets `None`
    /// for its own entries instead of recursing.
    pub fn get(&self) -> Option<String> {
        if let Some(cached) = self.cached() {
            return cached;
        }

        let in_progress = self.generation.lock();
        if in_progress.get() {
            return None;
        }
        if let Some(cached) = self.cached() {
            return cached;
        }

        let (generator, epoch) = {
            let inner = self.inner.lock();
            (Arc::clone(&inner.generator), inner.epoch)
        };

        in_progress.set(true);
        let result = {
            let _generating = Generating(&*in_progress);
            generator()
        };

        let mut inner = self.inner.lock();
        if inner.epoch == epoch {
            inner.state = BuildInfoState::from_result(&result);
        }
        result
    }

    fn cached(&self) -> Option<Option<String>> {
        let inner = self.inner.lock();
        if inner.caching_enabled {
            inner.state.cached()
        } else {
            None
        }
    }

    /// Replace the generator and drop any cached value
    pub fn set_generator<F>(&self, generator: F)
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock();
        inner.generator = Arc::new(generator);
        inner.state = BuildInfoState::Uncomputed;
        inner.epoch += 1;
    }

    /// Disabling keeps the cached value around but regenerates on every
    /// read; re-enabling serves whatever the last generation produced.
    pub fn set_caching_enabled(&self, enabled: bool) {
        self.inner.lock().caching_enabled = enabled;
    }

    pub fn caching_enabled(&self) -> bool {
        self.inner.lock().caching_enabled
    }

    pub fn state(&self) -> BuildInfoState {
        self.inner.lock().state.clone()
    }
}

impl Default for BuildInfoCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BuildInfoCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("BuildInfoCache")
            .field("state", &inner.state)
            .field("caching_enabled", &inner.caching_enabled)
            .finish_non_exhaustive()
    }
}
