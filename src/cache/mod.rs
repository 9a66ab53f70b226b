//! Memory-only resource cache with deduplicated asynchronous fill.
//!
//! [`ResourceCache`] accelerates repeat visits within one feed session.
//! It is explicitly constructed and shared by reference - there is no
//! global singleton - and its lifetime is tied to the feed session.
//!
//! # Concurrency contract
//!
//! The internal key-to-value map is the only shared mutable state in the
//! engine. All access is funneled through [`ResourceCache::get`] and
//! [`ResourceCache::fetch_and_cache`], guarded by one mutex, so two
//! invariants hold under concurrent use:
//!
//! - at most one entry per key;
//! - at most one in-flight loader invocation per key. A second
//!   `fetch_and_cache` for a key already being fetched blocks until the
//!   first resolves and observes the same outcome.
//!
//! No eviction, TTL, or size bound: memory pressure handling is
//! delegated to the host environment. This is a scope limitation, not a
//! bug.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use crate::model::ImageError;

struct CacheState<V> {
    entries: HashMap<String, V>,
    in_flight: HashSet<String>,
}

/// Generic in-memory cache keyed by resource locator strings.
///
/// Values must be cheap to clone ([`Image`] is an `Arc` handle); every
/// read hands out a clone so the lock is never held across caller code.
pub struct ResourceCache<V> {
    state: Mutex<CacheState<V>>,
    resolved: Condvar,
}

impl<V: Clone> ResourceCache<V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                in_flight: HashSet::new(),
            }),
            resolved: Condvar::new(),
        }
    }

    // A poisoned lock means a loader panicked on another thread. The map
    // itself is always in a consistent state between operations, so
    // recover the guard rather than propagate the panic.
    fn lock(&self) -> MutexGuard<'_, CacheState<V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a cached value.
    pub fn get(&self, key: &str) -> Option<V> {
        self.lock().entries.get(key).cloned()
    }

    /// Resolve `key` through the cache, invoking `loader` on a miss.
    ///
    /// - Cache hit: returns immediately, `loader` is not invoked.
    /// - Miss, no fetch in flight: invokes `loader(key)` exactly once
    ///   (outside the lock). On `Some`, the value is stored and returned;
    ///   on `None` nothing is stored (no negative caching - a later call
    ///   retries).
    /// - Miss, fetch in flight for the same key: blocks until that fetch
    ///   resolves and returns its outcome.
    pub fn fetch_and_cache<F>(&self, key: &str, loader: F) -> Option<V>
    where
        F: FnOnce(&str) -> Option<V>,
    {
        let mut state = self.lock();
        loop {
            if let Some(value) = state.entries.get(key) {
                trace!(key, "cache hit");
                return Some(value.clone());
            }
            if !state.in_flight.contains(key) {
                break;
            }
            // Another caller is fetching this key; wait for its outcome.
            state = self
                .resolved
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
            // A failed fetch stores nothing, so a wakeup with no entry and
            // no in-flight marker means the fetch resolved to absent.
            if !state.in_flight.contains(key) && !state.entries.contains_key(key) {
                trace!(key, "deduplicated fetch resolved absent");
                return None;
            }
        }

        state.in_flight.insert(key.to_string());
        drop(state);

        let outcome = loader(key);

        let mut state = self.lock();
        state.in_flight.remove(key);
        if let Some(value) = &outcome {
            state.entries.insert(key.to_string(), value.clone());
            debug!(key, "cached fetched resource");
        } else {
            debug!(key, "resource fetch resolved absent");
        }
        drop(state);
        self.resolved.notify_all();

        outcome
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// True when no entries are cached.
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Drop all cached entries. In-flight fetches are unaffected and
    /// will still store their results.
    pub fn clear(&self) {
        self.lock().entries.clear();
    }
}

impl<V: Clone> Default for ResourceCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// A decoded, displayable image value.
///
/// Cheap to clone: the payload is shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    bytes: Arc<[u8]>,
}

impl Image {
    /// Decode raw loader bytes into a displayable image.
    ///
    /// The engine delegates real pixel decoding to the rendering side;
    /// here "decode" validates the payload is usable at all.
    pub fn decode(bytes: Vec<u8>) -> Result<Self, ImageError> {
        if bytes.is_empty() {
            return Err(ImageError::DecodeFailed);
        }
        Ok(Self {
            bytes: bytes.into(),
        })
    }

    /// The decoded payload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// External image-fetch capability (network or file read).
///
/// Supplied by the caller; the engine never performs I/O of its own for
/// images.
pub trait ImageLoader: Sync {
    /// Fetch the raw bytes behind a URL-like locator.
    fn load(&self, url: &str) -> Result<Vec<u8>, ImageError>;
}

/// Cache of decoded row images, keyed by resource locator.
pub type ImageCache = ResourceCache<Image>;

/// Fetch an image through the cache, deduplicating concurrent requests.
///
/// Loader or decode failure resolves to `None`: the row falls back to a
/// placeholder and the failure never propagates to the feed. Failures
/// are not retried automatically, but nothing negative is cached - a
/// later call for the same locator invokes the loader again.
pub fn load_image_cached(cache: &ImageCache, loader: &dyn ImageLoader, url: &str) -> Option<Image> {
    cache.fetch_and_cache(url, |key| match loader.load(key).and_then(Image::decode) {
        Ok(image) => Some(image),
        Err(err) => {
            debug!(url = key, error = %err, "image fetch failed, using placeholder");
            None
        }
    })
}
