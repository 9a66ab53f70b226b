//! Error types for the review feed engine.
//!
//! The taxonomy follows the feed's propagation policy:
//!
//! - [`FetchError`] - page fetch failures. Fatal for that fetch, surfaced
//!   to the caller as an explicit result value, never retried inside the
//!   engine. Pagination freezes at the last successful page; re-issuing
//!   the same offset retries.
//! - [`ImageError`] - image loader/decode failures. Non-fatal: the row
//!   falls back to a placeholder visual and the failure never propagates
//!   to the feed (the cache resolves to "absent" instead).

use thiserror::Error;

/// Failure fetching one page of reviews.
///
/// Both variants are terminal for that fetch call; no partial results
/// are returned.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The backing review source could not be located or read.
    #[error("review source unavailable: {source}")]
    SourceUnavailable {
        /// The underlying I/O error from the source.
        #[source]
        source: std::io::Error,
    },

    /// The backing document was read but is malformed.
    #[error("malformed review payload: {source}")]
    DecodeFailed {
        /// The underlying decode error.
        #[from]
        source: serde_json::Error,
    },
}

/// Failure obtaining a displayable image for a row.
///
/// These never cross the feed boundary: callers observe an absent cache
/// value and render a placeholder instead. Image failures are not
/// retried automatically.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The image loader returned no usable bytes for the locator.
    #[error("image unavailable for '{url}'")]
    Unavailable {
        /// The resource locator that failed to load.
        url: String,
    },

    /// The loader returned bytes that could not be decoded into an image.
    #[error("image payload could not be decoded")]
    DecodeFailed,
}
