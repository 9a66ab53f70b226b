//! Paginated review content provider.
//!
//! [`ReviewsProvider`] fetches one page of reviews at a time from a
//! [`ReviewSource`] (a readable byte source producing the backing JSON
//! document). Callers observe a uniform success/failure result: either a
//! [`ReviewBatch`] or a [`FetchError`].
//!
//! # Caller discipline
//!
//! The provider does no internal queuing; a single feed must not overlap
//! `fetch` calls. The feed controller enforces increasing-offset order by
//! only advancing its offset after a successful append.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::Rng;
use tracing::debug;

use crate::model::{FetchError, ReviewBatch};

/// Fixed page size limit: a batch carries at most this many reviews.
pub const PAGE_SIZE: usize = 20;

/// A readable byte source producing the backing JSON document.
///
/// External collaborator: the engine owns no network protocol. Decode
/// failure of the produced document surfaces as
/// [`FetchError::DecodeFailed`]; read failure as
/// [`FetchError::SourceUnavailable`].
pub trait ReviewSource {
    /// Read the full backing document.
    fn read(&self) -> std::io::Result<Vec<u8>>;
}

/// Review source backed by a JSON document on disk.
///
/// The file is re-read on every fetch; the source is treated as
/// immutable for the duration of one feed session.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading the given path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ReviewSource for FileSource {
    fn read(&self) -> std::io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }
}

/// In-memory review source for tests and embedding.
#[derive(Debug, Clone)]
pub struct StaticSource {
    bytes: Vec<u8>,
}

impl StaticSource {
    /// Create a source over the given document bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl ReviewSource for StaticSource {
    fn read(&self) -> std::io::Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

/// Artificial fetch latency emulating network conditions.
///
/// A dev/test affordance, not a retry mechanism. Tests disable it with
/// [`Latency::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    /// No artificial delay.
    None,
    /// Sleep a uniformly random duration within `min..=max` per fetch.
    Uniform {
        /// Lower bound of the delay.
        min: Duration,
        /// Upper bound of the delay.
        max: Duration,
    },
}

impl Latency {
    /// The default interval: 100ms to 1s per fetch.
    pub const DEFAULT: Self = Self::Uniform {
        min: Duration::from_millis(100),
        max: Duration::from_millis(1000),
    };

    fn sleep(&self) {
        match self {
            Latency::None => {}
            Latency::Uniform { min, max } => {
                let (lo, hi) = (min.as_millis() as u64, max.as_millis() as u64);
                let ms = if hi > lo {
                    rand::rng().random_range(lo..=hi)
                } else {
                    lo
                };
                std::thread::sleep(Duration::from_millis(ms));
            }
        }
    }
}

/// Fetches pages of reviews from a backing source.
#[derive(Debug, Clone)]
pub struct ReviewsProvider<S> {
    source: S,
    latency: Latency,
}

impl<S: ReviewSource> ReviewsProvider<S> {
    /// Create a provider over the given source with the default
    /// simulated latency.
    pub fn new(source: S) -> Self {
        Self {
            source,
            latency: Latency::DEFAULT,
        }
    }

    /// Override the simulated latency (use [`Latency::None`] in tests).
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Fetch one page of reviews starting at `offset`.
    ///
    /// Returns the slice `[offset, min(offset + PAGE_SIZE, total))` plus
    /// the total count. An offset at or past the end of the source
    /// yields an empty batch with the correct count - exhaustion is not
    /// an error. Both error variants are terminal for this call; no
    /// partial results. Re-issuing the same offset retries.
    pub fn fetch(&self, offset: usize) -> Result<ReviewBatch, FetchError> {
        self.latency.sleep();

        let bytes = self
            .source
            .read()
            .map_err(|source| FetchError::SourceUnavailable { source })?;
        let all: ReviewBatch = serde_json::from_slice(&bytes)?;

        if offset >= all.items.len() {
            debug!(offset, count = all.count, "fetch past end, returning empty batch");
            return Ok(ReviewBatch {
                items: Vec::new(),
                count: all.count,
            });
        }

        let end = (offset + PAGE_SIZE).min(all.items.len());
        let items = all.items[offset..end].to_vec();
        debug!(offset, returned = items.len(), count = all.count, "fetched review page");
        Ok(ReviewBatch {
            items,
            count: all.count,
        })
    }
}
