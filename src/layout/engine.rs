//! The measurement engine for review rows.
//!
//! [`measure`] is a pure function from `(row, available width)` to a
//! full geometry record. No hidden state: the same inputs always produce
//! the same output, so it serves both height queries and actual
//! placement without drift.

use tracing::trace;

use super::geometry::Rect;
use super::metrics;
use crate::model::ReviewRow;
use crate::text::{FontMetrics, StyledText};

/// Computed rectangles and total height for one review row at a given
/// width.
///
/// Absent elements (body text of an empty review, the show-more control
/// when the text fits) are [`Rect::ZERO`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowGeometry {
    /// Avatar frame, fixed size in the reserved left column.
    pub avatar: Rect,
    /// User-name line frame.
    pub name: Rect,
    /// Rating indicator frame.
    pub rating: Rect,
    /// Body text frame; zero when the body is empty.
    pub body: Rect,
    /// Show-more affordance frame; zero when not needed.
    pub show_more: Rect,
    /// Creation-time label frame.
    pub created: Rect,
    /// Total row height including the bottom inset.
    pub total_height: f32,
}

impl RowGeometry {
    /// True when the row offers the show-more affordance.
    pub fn shows_more(&self) -> bool {
        !self.show_more.is_empty()
    }
}

/// Measure one review row at the given available width.
///
/// Fixed recipe, top to bottom: the left column is reserved for the
/// avatar, the right column gets the remaining width. Name, then rating,
/// then body text (if any) capped at `max_lines`, then the show-more
/// affordance (iff the cap actually hides content), then the created
/// label. Total height is the lower of the avatar and created bottom
/// edges plus the bottom inset.
///
/// Degenerate widths clamp: if `max_width` is smaller than the fixed
/// columns the text column collapses to zero width instead of failing.
pub fn measure(row: &ReviewRow, max_width: f32) -> RowGeometry {
    let avatar = Rect::with_size(metrics::INSET_LEFT, metrics::INSET_TOP, metrics::AVATAR_SIZE);

    let text_x = metrics::INSET_LEFT + metrics::AVATAR_SIZE.width + metrics::AVATAR_TO_NAME_SPACING;
    let text_width = (max_width - metrics::INSET_RIGHT - text_x).max(0.0);

    let name = Rect::new(text_x, metrics::INSET_TOP, text_width, metrics::NAME_HEIGHT);
    let rating = Rect::with_size(
        text_x,
        name.max_y() + metrics::NAME_TO_RATING_SPACING,
        metrics::RATING_SIZE,
    );

    let mut cursor = rating.max_y() + metrics::RATING_TO_BODY_SPACING;
    let mut body = Rect::ZERO;
    let mut show_more = Rect::ZERO;

    if !row.body.is_empty() {
        // Height the text would need with no cap, and the height the cap
        // allows. The affordance appears only when the cap hides content.
        let uncapped_height = row.body.wrapped_size(text_width).height;
        let capped_height = row.body.capped_height(row.max_lines);
        let needs_show_more = row.max_lines != 0 && uncapped_height > capped_height;

        let body_size = if row.max_lines == 0 {
            row.body.wrapped_size(text_width)
        } else {
            row.body.wrapped_size_clamped(text_width, capped_height)
        };
        body = Rect::with_size(text_x, cursor, body_size.into());
        cursor = body.max_y() + metrics::BODY_TO_CREATED_SPACING;

        if needs_show_more {
            let label = StyledText::new(metrics::SHOW_MORE_TEXT, FontMetrics::SHOW_MORE);
            show_more = Rect::with_size(text_x, cursor, label.intrinsic_size().into());
            cursor = show_more.max_y() + metrics::SHOW_MORE_TO_CREATED_SPACING;
        }
    }

    let created = Rect::with_size(text_x, cursor, row.created.wrapped_size(text_width).into());
    let total_height = avatar.max_y().max(created.max_y()) + metrics::INSET_BOTTOM;

    trace!(
        row = row.id().get(),
        max_width,
        total_height,
        shows_more = !show_more.is_empty(),
        "measured review row"
    );

    RowGeometry {
        avatar,
        name,
        rating,
        body,
        show_more,
        created,
        total_height,
    }
}
