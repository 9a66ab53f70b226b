//! Domain model - wire types, row models, and error taxonomy.
//!
//! # Module Structure
//!
//! - `review`: wire-shaped types decoded from the backing JSON document
//!   (`Review`, `ReviewBatch`)
//! - `row`: the closed polymorphic row set rendered by the feed
//!   (`RowModel`, `ReviewRow`, `CountRow`, `RowId`, `RowTarget`)
//! - `error`: structured error types (`FetchError`, `ImageError`)

pub mod error;
pub mod review;
pub mod row;

pub use error::{FetchError, ImageError};
pub use review::{Review, ReviewBatch};
pub use row::{CountRow, ReviewRow, RowId, RowModel, RowTarget};
