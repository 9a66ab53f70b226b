//! Fixed layout constants for review rows.
//!
//! Centralized location for every pixel/metric value the layout engine
//! uses. These are fixed configuration, not computed: the engine owns
//! them so height queries and rendering agree by construction.

use super::geometry::Size;

/// Inset from the top edge of the row to its content.
pub const INSET_TOP: f32 = 9.0;

/// Inset from the left edge of the row to its content.
pub const INSET_LEFT: f32 = 12.0;

/// Inset from the bottom of the content to the row's bottom edge.
pub const INSET_BOTTOM: f32 = 9.0;

/// Inset from the content to the right edge of the row.
pub const INSET_RIGHT: f32 = 12.0;

/// Fixed avatar extent; the left column is reserved for it.
pub const AVATAR_SIZE: Size = Size::new(36.0, 36.0);

/// Corner radius applied to the avatar by targets.
pub const AVATAR_CORNER_RADIUS: f32 = 18.0;

/// Horizontal gap between the avatar and the text column.
pub const AVATAR_TO_NAME_SPACING: f32 = 10.0;

/// Fixed height of the user-name line.
pub const NAME_HEIGHT: f32 = 20.0;

/// Vertical gap between the name line and the rating indicator.
pub const NAME_TO_RATING_SPACING: f32 = 4.0;

/// Fixed extent of the rating indicator.
pub const RATING_SIZE: Size = Size::new(100.0, 16.0);

/// Vertical gap between the rating indicator and the body text.
pub const RATING_TO_BODY_SPACING: f32 = 8.0;

/// Vertical gap from the body text to whatever sits below it.
pub const BODY_TO_CREATED_SPACING: f32 = 6.0;

/// Vertical gap from the show-more affordance to the created label.
pub const SHOW_MORE_TO_CREATED_SPACING: f32 = 6.0;

/// Fixed height of the trailing count row.
pub const COUNT_ROW_HEIGHT: f32 = 44.0;

/// Label text of the show-more affordance.
pub const SHOW_MORE_TEXT: &str = "Show more...";
