//! Deterministic styled-text measurement.
//!
//! The layout engine must be a pure function, so text measurement cannot
//! depend on a platform text stack. This module models a font as a fixed
//! advance width plus a fixed line height, and measures wrapped text by
//! greedy word wrap over `unicode-width` columns. Same text, same font,
//! same width - always the same size.

use unicode_width::UnicodeWidthStr;

/// Fixed metrics for one font used by the feed.
///
/// `advance` is the horizontal advance of one column in points;
/// `line_height` is the vertical extent of one rendered line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Horizontal advance per text column, in points.
    pub advance: f32,
    /// Height of one line, in points.
    pub line_height: f32,
}

impl FontMetrics {
    /// Font used for review body text.
    pub const BODY: Self = Self {
        advance: 7.2,
        line_height: 18.0,
    };

    /// Font used for the creation-time label.
    pub const CREATED: Self = Self {
        advance: 6.4,
        line_height: 16.0,
    };

    /// Font used for the "Show more" affordance label.
    pub const SHOW_MORE: Self = Self {
        advance: 7.2,
        line_height: 18.0,
    };
}

/// A measured size in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextSize {
    /// Width in points.
    pub width: f32,
    /// Height in points.
    pub height: f32,
}

/// Pre-rendered text paired with the font it will be drawn in.
///
/// Rows pre-render their body and created labels as `StyledText` at
/// construction time so measurement never re-derives styling.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledText {
    text: String,
    font: FontMetrics,
}

impl StyledText {
    /// Create styled text from raw content and a font.
    pub fn new(text: impl Into<String>, font: FontMetrics) -> Self {
        Self {
            text: text.into(),
            font,
        }
    }

    /// The raw text content.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The font this text is measured with.
    pub fn font(&self) -> FontMetrics {
        self.font
    }

    /// True when the content is the empty string.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Height of `max_lines` rendered lines, ignoring the actual content.
    ///
    /// This is the "capped" height used to decide whether truncated text
    /// needs a show-more affordance. `max_lines == 0` means uncapped and
    /// yields zero here; callers must treat that case separately.
    pub fn capped_height(&self, max_lines: usize) -> f32 {
        self.font.line_height * max_lines as f32
    }

    /// Size of the text wrapped into the given width with no line cap.
    ///
    /// Degenerate widths clamp: a non-positive width yields a zero-width
    /// single clipped line rather than failing.
    pub fn wrapped_size(&self, max_width: f32) -> TextSize {
        if self.text.is_empty() {
            return TextSize::default();
        }
        let max_cols = self.columns_for_width(max_width);
        let (lines, widest) = wrap(&self.text, max_cols);
        TextSize {
            width: widest as f32 * self.font.advance,
            height: lines as f32 * self.font.line_height,
        }
    }

    /// Size of the text wrapped into `max_width`, with the height limited
    /// to `max_height` (the truncated frame a capped label would occupy).
    pub fn wrapped_size_clamped(&self, max_width: f32, max_height: f32) -> TextSize {
        let size = self.wrapped_size(max_width);
        TextSize {
            width: size.width,
            height: size.height.min(max_height.max(0.0)),
        }
    }

    /// Intrinsic single-line size, as used for fixed labels and buttons.
    pub fn intrinsic_size(&self) -> TextSize {
        if self.text.is_empty() {
            return TextSize::default();
        }
        TextSize {
            width: UnicodeWidthStr::width(self.text.as_str()) as f32 * self.font.advance,
            height: self.font.line_height,
        }
    }

    fn columns_for_width(&self, max_width: f32) -> usize {
        if max_width <= 0.0 {
            return 0;
        }
        (max_width / self.font.advance) as usize
    }
}

/// Greedy word wrap: returns `(line_count, widest_line_cols)`.
///
/// Words wider than a full line are hard-split across lines, matching
/// character-level label truncation. `max_cols == 0` is degenerate and
/// yields a single zero-width clipped line.
#[allow(unused_assignments)]
fn wrap(text: &str, max_cols: usize) -> (usize, usize) {
    if max_cols == 0 {
        return (1, 0);
    }

    let mut lines = 1usize;
    let mut cur = 0usize;
    let mut widest = 0usize;

    for word in text.split_whitespace() {
        let mut cols = UnicodeWidthStr::width(word);
        let sep = if cur == 0 { 0 } else { 1 };

        if cur + sep + cols <= max_cols {
            cur += sep + cols;
            widest = widest.max(cur);
            continue;
        }

        if cur > 0 {
            lines += 1;
            cur = 0;
        }
        while cols > max_cols {
            lines += 1;
            cols -= max_cols;
            widest = max_cols;
        }
        cur = cols;
        widest = widest.max(cur);
    }

    (lines, widest)
}
