//! The closed polymorphic row set rendered by the feed.
//!
//! The feed stores a single ordered sequence of [`RowModel`] values. The
//! set of kinds is closed: exactly [`ReviewRow`] and [`CountRow`] exist,
//! and dispatch is an exhaustive `match`. Adding a kind means adding its
//! arm to every operation here; call sites never change.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::layout;
use crate::model::Review;
use crate::text::{FontMetrics, StyledText};

/// Opaque, stable identity token for one review row.
///
/// Used to correlate a user action (tapping "show more") back to exactly
/// one row without rescanning content. A lookup key into the row
/// sequence, never an ownership handle. Unique per row and stable for
/// the row's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl RowId {
    /// Allocate the next unique identity token.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw token value, for logging only.
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// One renderable review in the feed.
///
/// Immutable after construction except for the show-more interaction,
/// which lifts `max_lines` to 0 (uncapped) via
/// [`crate::feed::FeedController::show_more`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRow {
    /// Star rating, clamped to 1..=5.
    pub rating: u8,
    /// Display name, "first last".
    pub user_name: String,
    /// Pre-rendered body text.
    pub body: StyledText,
    /// Pre-rendered creation-time label.
    pub created: StyledText,
    /// Maximum visible body lines; 0 disables truncation.
    pub max_lines: usize,
    /// Optional avatar resource locator.
    pub avatar_url: Option<String>,
    /// Optional ordered photo resource locators.
    pub photo_urls: Option<Vec<String>>,
    id: RowId,
}

impl ReviewRow {
    /// Reuse identifier for target recycling.
    pub const REUSE_ID: &'static str = "ReviewRow";

    /// Build a row from a decoded wire review.
    ///
    /// Pre-renders the body and created labels with their fixed fonts and
    /// allocates a fresh identity token. Out-of-range ratings clamp into
    /// 1..=5.
    pub fn from_review(review: Review, max_lines: usize) -> Self {
        Self {
            rating: review.rating.clamp(1, 5),
            user_name: format!("{} {}", review.first_name, review.last_name),
            body: StyledText::new(review.text, FontMetrics::BODY),
            created: StyledText::new(review.created, FontMetrics::CREATED),
            max_lines,
            avatar_url: review.avatar_url,
            photo_urls: review.photo_urls,
            id: RowId::next(),
        }
    }

    /// This row's identity token.
    pub fn id(&self) -> RowId {
        self.id
    }
}

/// Trailing summary row showing the total review count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRow {
    /// Total number of reviews in the feed.
    pub total: usize,
}

impl CountRow {
    /// Reuse identifier for target recycling.
    pub const REUSE_ID: &'static str = "CountRow";
}

/// Rendering target collaborator.
///
/// The engine never inspects a target's internals; it only pushes row
/// data through this trait. Visual styling, control hierarchies, and
/// recycling live entirely on the target side.
pub trait RowTarget {
    /// Display a review row.
    fn show_review(&mut self, row: &ReviewRow);
    /// Display the trailing count row.
    fn show_count(&mut self, row: &CountRow);
}

/// One renderable unit in the feed.
#[derive(Debug, Clone, PartialEq)]
pub enum RowModel {
    /// A review row.
    Review(ReviewRow),
    /// The trailing count row.
    Count(CountRow),
}

impl RowModel {
    /// Push this row's data onto a rendering target.
    pub fn update(&self, target: &mut dyn RowTarget) {
        match self {
            RowModel::Review(row) => target.show_review(row),
            RowModel::Count(row) => target.show_count(row),
        }
    }

    /// On-screen height of this row at the given available width.
    ///
    /// Reviews delegate to the layout engine; the count row has a fixed
    /// height.
    pub fn height(&self, max_width: f32) -> f32 {
        match self {
            RowModel::Review(row) => layout::measure(row, max_width).total_height,
            RowModel::Count(_) => layout::metrics::COUNT_ROW_HEIGHT,
        }
    }

    /// Stable reuse identifier for this row's kind.
    pub fn reuse_id(&self) -> &'static str {
        match self {
            RowModel::Review(_) => ReviewRow::REUSE_ID,
            RowModel::Count(_) => CountRow::REUSE_ID,
        }
    }

    /// The review row, if this is one.
    pub fn as_review(&self) -> Option<&ReviewRow> {
        match self {
            RowModel::Review(row) => Some(row),
            RowModel::Count(_) => None,
        }
    }

    /// Mutable access to the review row, if this is one.
    pub fn as_review_mut(&mut self) -> Option<&mut ReviewRow> {
        match self {
            RowModel::Review(row) => Some(row),
            RowModel::Count(_) => None,
        }
    }
}
