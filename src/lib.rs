//! revfeed - paginated review feed engine.
//!
//! A headless engine for an infinitely scrolling feed of heterogeneous
//! rows (reviews plus a trailing count row), where each row's on-screen
//! height depends on its content and must be computed before layout.
//!
//! Four pieces carry the real invariants:
//!
//! - [`provider`]: paginated content fetching with a uniform
//!   success/failure result (idempotent per offset);
//! - [`model::RowModel`]: a closed set of row kinds sharing one feed
//!   without the feed knowing their concrete types;
//! - [`layout`]: a deterministic measurement engine mapping row data and
//!   an available width to exact geometry, including truncation and the
//!   show-more affordance;
//! - [`cache`]: a memory-only resource cache that deduplicates in-flight
//!   fetches and serves repeats from memory.
//!
//! [`feed::FeedController`] composes them. Rendering targets, image
//! loaders, and the backing data source are external collaborators
//! reached through traits.

pub mod cache;
pub mod config;
pub mod feed;
pub mod layout;
pub mod logging;
pub mod model;
pub mod provider;
pub mod text;

#[cfg(test)]
mod tests;
