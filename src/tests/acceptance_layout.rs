//! Acceptance tests for the layout measurement engine.
//!
//! Covers the specified truncation scenarios: a capped body that hides
//! content (show-more appears, created label hangs off it) and an empty
//! body (no body or show-more rectangles at all).

use crate::layout::{measure, metrics};
use crate::model::{Review, ReviewRow};
use crate::text::FontMetrics;

const WIDTH: f32 = 300.0;

fn row(text: &str, max_lines: usize) -> ReviewRow {
    ReviewRow::from_review(
        Review {
            rating: 4,
            first_name: "Mara".to_string(),
            last_name: "Ellison".to_string(),
            text: text.to_string(),
            created: "12 May 2024".to_string(),
            avatar_url: None,
            photo_urls: None,
        },
        max_lines,
    )
}

/// A body whose uncapped height comfortably exceeds a 3-line cap at the
/// test width.
fn overflowing_body() -> String {
    vec!["overflow"; 60].join(" ")
}

#[test]
fn truncated_body_shows_affordance_and_stacks_created_below_it() {
    // GIVEN: a row capped at 3 lines whose body wants more
    let row = row(&overflowing_body(), 3);
    let geometry = measure(&row, WIDTH);

    // Sanity: the cap actually hides content at this width.
    let text_width = geometry.name.width;
    assert!(row.body.wrapped_size(text_width).height > row.body.capped_height(3));

    // THEN: a non-zero show-more rectangle is present
    assert!(geometry.shows_more());
    assert!(geometry.show_more.width > 0.0);
    assert!(geometry.show_more.height > 0.0);

    // AND: the body occupies exactly its capped height
    assert_eq!(geometry.body.height, 3.0 * FontMetrics::BODY.line_height);

    // AND: the created label's top edge equals the show-more bottom edge
    // plus the fixed gap
    assert_eq!(
        geometry.created.y,
        geometry.show_more.max_y() + metrics::SHOW_MORE_TO_CREATED_SPACING
    );
}

#[test]
fn empty_body_collapses_to_rating_then_created() {
    // GIVEN: a row with no body text
    let geometry = measure(&row("", 3), WIDTH);

    // THEN: body and show-more rectangles are zero-sized
    assert!(geometry.body.is_empty());
    assert!(geometry.show_more.is_empty());

    // AND: the created label sits directly below the rating plus the
    // fixed gap
    assert_eq!(
        geometry.created.y,
        geometry.rating.max_y() + metrics::RATING_TO_BODY_SPACING
    );
}

#[test]
fn zero_max_lines_never_shows_affordance() {
    let geometry = measure(&row(&overflowing_body(), 0), WIDTH);
    assert!(!geometry.shows_more());
    // Full wrapped height, no truncation.
    let row = row(&overflowing_body(), 0);
    assert_eq!(
        geometry.body.height,
        row.body.wrapped_size(geometry.name.width).height
    );
}

#[test]
fn fitting_body_never_shows_affordance() {
    let geometry = measure(&row("fits on one line", 3), WIDTH);
    assert!(!geometry.shows_more());
    assert_eq!(
        geometry.created.y,
        geometry.body.max_y() + metrics::BODY_TO_CREATED_SPACING
    );
}

#[test]
fn geometry_is_identical_across_repeated_measurement() {
    let row = row(&overflowing_body(), 3);
    let first = measure(&row, WIDTH);
    let second = measure(&row, WIDTH);
    assert_eq!(first, second);
}

#[test]
fn lifting_the_cap_removes_the_affordance_and_grows_the_row() {
    let mut row = row(&overflowing_body(), 3);
    let capped = measure(&row, WIDTH);

    // The show-more interaction rewrites max_lines to 0.
    row.max_lines = 0;
    let uncapped = measure(&row, WIDTH);

    assert!(capped.shows_more());
    assert!(!uncapped.shows_more());
    assert!(uncapped.total_height > capped.total_height);
}

#[test]
fn height_query_and_geometry_agree() {
    // "Give me total height" and "give me rectangles" go through the
    // same computation, so they can never drift.
    let row = row(&overflowing_body(), 3);
    let geometry = measure(&row, WIDTH);
    let height = crate::model::RowModel::Review(row).height(WIDTH);
    assert_eq!(height, geometry.total_height);
}
