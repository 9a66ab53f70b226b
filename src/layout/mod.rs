//! Layout engine - pure geometry computation for review rows.
//!
//! # Module Structure
//!
//! - `geometry`: `Size` and `Rect` primitives
//! - `metrics`: fixed pixel/metric constants (insets, spacings, avatar
//!   size) owned by the layout engine
//! - `engine`: the `measure` function mapping a row and an available
//!   width to a full [`RowGeometry`]
//!
//! Both "give me total height" and "give me rectangles" callers go
//! through the same [`measure`] computation, so measured and rendered
//! geometry cannot drift.

pub mod engine;
pub mod geometry;
pub mod metrics;

pub use engine::{measure, RowGeometry};
pub use geometry::{Rect, Size};
