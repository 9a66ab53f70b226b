//! Feed composition root.
//!
//! [`FeedController`] holds the ordered sequence of row models, asks the
//! content provider for the next page, appends in increasing offset
//! order, and answers height queries through the layout engine. It is a
//! thin layer: all real invariants live in the provider, the layout
//! engine, and the cache.
//!
//! The image cache is deliberately not owned here: construct a
//! [`crate::cache::ImageCache`] alongside the feed and pass it by
//! reference to whatever renders rows (see
//! [`crate::cache::load_image_cached`]).

pub mod height_index;

pub use height_index::HeightIndex;

use tracing::{debug, info};

use crate::config::FeedConfig;
use crate::model::{CountRow, FetchError, ReviewRow, RowId, RowModel, RowTarget};
use crate::provider::{ReviewSource, ReviewsProvider};

/// Orchestrates pagination, row construction, and height queries for one
/// feed session.
///
/// Single logical consumer: one outstanding fetch at a time, pages
/// appended in increasing offset order by construction (the offset only
/// advances after a successful append, so a failed fetch freezes
/// pagination at the last good page and the next call retries the same
/// offset).
#[derive(Debug)]
pub struct FeedController<S> {
    provider: ReviewsProvider<S>,
    config: FeedConfig,
    rows: Vec<RowModel>,
    offset: usize,
    total_count: Option<usize>,
    exhausted: bool,
    heights: HeightIndex,
    layout_width: Option<f32>,
}

impl<S: ReviewSource> FeedController<S> {
    /// Create a feed over the given provider and configuration.
    pub fn new(provider: ReviewsProvider<S>, config: FeedConfig) -> Self {
        Self {
            provider,
            config,
            rows: Vec::new(),
            offset: 0,
            total_count: None,
            exhausted: false,
            heights: HeightIndex::default(),
            layout_width: None,
        }
    }

    /// Fetch and append the next page of reviews.
    ///
    /// Returns the number of review rows appended. When the feed becomes
    /// exhausted the trailing count row is appended exactly once and
    /// later calls return `Ok(0)` without fetching. On error nothing is
    /// appended and the offset does not advance; calling again retries
    /// the same offset.
    pub fn load_next_page(&mut self) -> Result<usize, FetchError> {
        if self.exhausted {
            return Ok(0);
        }

        let batch = self.provider.fetch(self.offset)?;
        self.total_count = Some(batch.count);

        let appended = batch.items.len();
        for review in batch.items {
            let row = ReviewRow::from_review(review, self.config.max_lines);
            self.push_row(RowModel::Review(row));
        }
        self.offset += appended;
        debug!(appended, offset = self.offset, count = batch.count, "appended review page");

        if appended == 0 || self.offset >= batch.count {
            self.exhausted = true;
            self.push_row(RowModel::Count(CountRow { total: batch.count }));
            info!(count = batch.count, "feed exhausted, appended count row");
        }

        Ok(appended)
    }

    fn push_row(&mut self, row: RowModel) {
        if let Some(width) = self.layout_width {
            self.heights.push(HeightIndex::quantize(row.height(width)));
        }
        self.rows.push(row);
    }

    /// All rows in feed order.
    pub fn rows(&self) -> &[RowModel] {
        &self.rows
    }

    /// The row at `index`, if present.
    pub fn row(&self, index: usize) -> Option<&RowModel> {
        self.rows.get(index)
    }

    /// Number of rows (reviews plus the trailing count row once
    /// exhausted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no rows have been loaded.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total review count reported by the source, once known.
    pub fn total_count(&self) -> Option<usize> {
        self.total_count
    }

    /// True once every available review has been appended.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// On-screen height of the row at `index` for the given width.
    pub fn height(&self, index: usize, max_width: f32) -> Option<f32> {
        Some(self.rows.get(index)?.height(max_width))
    }

    /// Push the row at `index` onto a rendering target.
    ///
    /// Returns false when the index is out of bounds.
    pub fn update_row(&self, index: usize, target: &mut dyn RowTarget) -> bool {
        match self.rows.get(index) {
            Some(row) => {
                row.update(target);
                true
            }
            None => false,
        }
    }

    /// Lift the body line cap of the row identified by `id`.
    ///
    /// Called when the user taps the show-more affordance; the identity
    /// token correlates the tap back to exactly one row without
    /// rescanning content. Returns false when no row carries the token.
    pub fn show_more(&mut self, id: RowId) -> bool {
        let Some(index) = self
            .rows
            .iter()
            .position(|row| row.as_review().map(ReviewRow::id) == Some(id))
        else {
            debug!(id = id.get(), "show-more token matched no row");
            return false;
        };

        if let Some(review) = self.rows[index].as_review_mut() {
            review.max_lines = 0;
        }
        if let Some(width) = self.layout_width {
            let height = self.rows[index].height(width);
            self.heights.set(index, HeightIndex::quantize(height));
        }
        debug!(id = id.get(), index, "lifted line cap for row");
        true
    }

    /// (Re)build the scroll height index for the given width.
    ///
    /// Idempotent when the width is unchanged and no rows were added
    /// since the last call. Afterwards the index is maintained
    /// incrementally by [`Self::load_next_page`] and [`Self::show_more`].
    pub fn relayout(&mut self, max_width: f32) {
        if self.layout_width == Some(max_width) && self.heights.len() == self.rows.len() {
            return;
        }
        self.layout_width = Some(max_width);
        self.heights.clear();
        for row in &self.rows {
            self.heights.push(HeightIndex::quantize(row.height(max_width)));
        }
    }

    /// Total quantized content height at the last relayout width.
    pub fn content_height(&self) -> f32 {
        self.heights.total() as f32
    }

    /// Index of the row covering vertical offset `y`, at the last
    /// relayout width. `None` before the first [`Self::relayout`] or
    /// past the end of the content.
    pub fn row_at_offset(&self, y: f32) -> Option<usize> {
        if y < 0.0 {
            return None;
        }
        self.heights.row_at_offset(y as u32)
    }

    /// Clear all rows and pagination state for a fresh session.
    ///
    /// The backing source is treated as immutable between resets; this
    /// is the explicit refresh point.
    pub fn reset(&mut self) {
        self.rows.clear();
        self.offset = 0;
        self.total_count = None;
        self.exhausted = false;
        self.heights.clear();
        info!("feed reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::metrics::COUNT_ROW_HEIGHT;
    use crate::model::{Review, ReviewBatch};
    use crate::provider::{Latency, StaticSource, PAGE_SIZE};

    fn source(total: usize) -> StaticSource {
        let items: Vec<Review> = (0..total)
            .map(|i| Review {
                rating: (i % 5 + 1) as u8,
                first_name: format!("First{i}"),
                last_name: format!("Last{i}"),
                text: "short body".to_string(),
                created: "12 May 2024".to_string(),
                avatar_url: None,
                photo_urls: None,
            })
            .collect();
        StaticSource::new(
            serde_json::to_vec(&ReviewBatch {
                items,
                count: total,
            })
            .expect("encodes"),
        )
    }

    fn feed(total: usize) -> FeedController<StaticSource> {
        let provider = ReviewsProvider::new(source(total)).with_latency(Latency::None);
        FeedController::new(provider, FeedConfig::default())
    }

    #[test]
    fn first_page_appends_up_to_page_size() {
        let mut feed = feed(45);
        let appended = feed.load_next_page().expect("loads");
        assert_eq!(appended, PAGE_SIZE);
        assert_eq!(feed.len(), PAGE_SIZE);
        assert_eq!(feed.total_count(), Some(45));
        assert!(!feed.is_exhausted());
    }

    #[test]
    fn rows_keep_source_order_across_pages() {
        let mut feed = feed(45);
        feed.load_next_page().expect("page 1");
        feed.load_next_page().expect("page 2");

        let names: Vec<_> = feed
            .rows()
            .iter()
            .filter_map(RowModel::as_review)
            .map(|r| r.user_name.clone())
            .collect();
        assert_eq!(names[0], "First0 Last0");
        assert_eq!(names[20], "First20 Last20");
        assert_eq!(names.len(), 40);
    }

    #[test]
    fn exhaustion_appends_count_row_once() {
        let mut feed = feed(45);
        feed.load_next_page().expect("page 1");
        feed.load_next_page().expect("page 2");
        let last = feed.load_next_page().expect("page 3");

        assert_eq!(last, 5);
        assert!(feed.is_exhausted());
        assert_eq!(feed.len(), 46); // 45 reviews + count row
        assert_eq!(
            feed.row(45),
            Some(&RowModel::Count(CountRow { total: 45 }))
        );

        // Further loads are no-ops.
        assert_eq!(feed.load_next_page().expect("no-op"), 0);
        assert_eq!(feed.len(), 46);
    }

    #[test]
    fn empty_source_yields_only_count_row() {
        let mut feed = feed(0);
        let appended = feed.load_next_page().expect("loads");
        assert_eq!(appended, 0);
        assert!(feed.is_exhausted());
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.row(0), Some(&RowModel::Count(CountRow { total: 0 })));
    }

    #[test]
    fn failed_fetch_freezes_offset_for_retry() {
        struct Flaky {
            fail_first: std::sync::atomic::AtomicBool,
            good: StaticSource,
        }
        impl ReviewSource for Flaky {
            fn read(&self) -> std::io::Result<Vec<u8>> {
                if self.fail_first.swap(false, std::sync::atomic::Ordering::SeqCst) {
                    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
                } else {
                    self.good.read()
                }
            }
        }

        let provider = ReviewsProvider::new(Flaky {
            fail_first: std::sync::atomic::AtomicBool::new(true),
            good: source(5),
        })
        .with_latency(Latency::None);
        let mut feed = FeedController::new(provider, FeedConfig::default());

        let err = feed.load_next_page().expect_err("first load fails");
        assert!(matches!(err, FetchError::SourceUnavailable { .. }));
        assert!(feed.is_empty());
        assert_eq!(feed.total_count(), None);

        // Retrying the same offset succeeds and appends from the start.
        let appended = feed.load_next_page().expect("retry succeeds");
        assert_eq!(appended, 5);
        assert!(feed.is_exhausted());
    }

    #[test]
    fn show_more_lifts_cap_and_grows_height() {
        // Long body so the default cap truncates it.
        let provider =
            ReviewsProvider::new(source_with_body(200)).with_latency(Latency::None);
        let mut feed = FeedController::new(provider, FeedConfig::default());
        feed.load_next_page().expect("loads");

        let id = feed.rows()[0].as_review().expect("review row").id();
        let before = feed.height(0, 320.0).expect("height");

        assert!(feed.show_more(id));
        let after = feed.height(0, 320.0).expect("height");
        assert!(after > before, "uncapped row must be taller");
        assert_eq!(feed.rows()[0].as_review().expect("review").max_lines, 0);
    }

    fn source_with_body(words: usize) -> StaticSource {
        let body = vec!["lorem"; words].join(" ");
        StaticSource::new(
            serde_json::to_vec(&ReviewBatch {
                items: vec![Review {
                    rating: 5,
                    first_name: "A".to_string(),
                    last_name: "B".to_string(),
                    text: body,
                    created: "now".to_string(),
                    avatar_url: None,
                    photo_urls: None,
                }],
                count: 1,
            })
            .expect("encodes"),
        )
    }

    #[test]
    fn show_more_with_unknown_token_is_a_no_op() {
        let mut feed = feed(2);
        feed.load_next_page().expect("loads");
        let foreign = ReviewRow::from_review(
            Review {
                rating: 1,
                first_name: "X".to_string(),
                last_name: "Y".to_string(),
                text: String::new(),
                created: "now".to_string(),
                avatar_url: None,
                photo_urls: None,
            },
            3,
        )
        .id();
        assert!(!feed.show_more(foreign));
    }

    #[test]
    fn relayout_indexes_all_rows() {
        let mut feed = feed(5);
        feed.load_next_page().expect("loads");
        feed.relayout(320.0);

        let expected: f32 = (0..feed.len())
            .map(|i| HeightIndex::quantize(feed.height(i, 320.0).unwrap()) as f32)
            .sum();
        assert_eq!(feed.content_height(), expected);
        assert_eq!(feed.row_at_offset(0.0), Some(0));
        assert_eq!(feed.row_at_offset(feed.content_height()), None);
    }

    #[test]
    fn pages_loaded_after_relayout_extend_the_index() {
        let mut feed = feed(45);
        feed.load_next_page().expect("page 1");
        feed.relayout(320.0);
        let after_one_page = feed.content_height();

        feed.load_next_page().expect("page 2");
        assert!(feed.content_height() > after_one_page);

        // The last offset inside the content resolves to the last row.
        let last = feed.content_height() - 1.0;
        assert_eq!(feed.row_at_offset(last), Some(feed.len() - 1));
    }

    #[test]
    fn count_row_height_through_controller() {
        let mut feed = feed(0);
        feed.load_next_page().expect("loads");
        assert_eq!(feed.height(0, 320.0), Some(COUNT_ROW_HEIGHT));
    }

    #[test]
    fn update_row_dispatches_and_bounds_checks() {
        #[derive(Default)]
        struct Recorder {
            reviews: usize,
            counts: usize,
        }
        impl RowTarget for Recorder {
            fn show_review(&mut self, _row: &ReviewRow) {
                self.reviews += 1;
            }
            fn show_count(&mut self, _row: &CountRow) {
                self.counts += 1;
            }
        }

        let mut feed = feed(0);
        feed.load_next_page().expect("loads");

        let mut target = Recorder::default();
        assert!(feed.update_row(0, &mut target));
        assert!(!feed.update_row(99, &mut target));
        assert_eq!(target.counts, 1);
        assert_eq!(target.reviews, 0);
    }

    #[test]
    fn reset_clears_rows_and_restarts_pagination() {
        let mut feed = feed(45);
        feed.load_next_page().expect("page 1");
        feed.relayout(320.0);
        feed.reset();

        assert!(feed.is_empty());
        assert_eq!(feed.total_count(), None);
        assert!(!feed.is_exhausted());
        assert_eq!(feed.content_height(), 0.0);

        let appended = feed.load_next_page().expect("reload");
        assert_eq!(appended, PAGE_SIZE);
    }

    #[test]
    fn row_at_offset_rejects_negative_offsets() {
        let mut feed = feed(3);
        feed.load_next_page().expect("loads");
        feed.relayout(320.0);
        assert_eq!(feed.row_at_offset(-1.0), None);
    }
}
