//! Cumulative row heights with O(log n) queries via a Fenwick tree.
//!
//! An infinitely scrolling feed needs two lookups fast: the total
//! content height, and which row covers a given vertical offset. Row
//! heights are quantized to whole points (`ceil`) for indexing; exact
//! geometry always comes from the layout engine.

/// Prefix sums over quantized row heights.
///
/// Row `i` covers the vertical range `[prefix_sum(i-1), prefix_sum(i))`.
#[derive(Debug, Clone, Default)]
pub struct HeightIndex {
    heights: Vec<u32>,
    /// Fenwick tree over `heights`. Updates propagating past the array
    /// end are clipped, so the tree is rebuilt (never resized in place)
    /// when it grows.
    tree: Vec<isize>,
}

impl HeightIndex {
    /// Create an index with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heights: Vec::with_capacity(capacity),
            tree: vec![0; capacity.next_power_of_two()],
        }
    }

    /// Quantize a measured height for indexing.
    pub fn quantize(height: f32) -> u32 {
        height.max(0.0).ceil() as u32
    }

    /// Append a row with the given quantized height.
    pub fn push(&mut self, height: u32) {
        let index = self.heights.len();
        self.heights.push(height);
        if index >= self.tree.len() {
            self.rebuild();
        } else {
            fenwick::array::update(&mut self.tree, index, height as isize);
        }
    }

    fn rebuild(&mut self) {
        self.tree.clear();
        self.tree.resize(self.heights.len().next_power_of_two(), 0);
        for (index, &height) in self.heights.iter().enumerate() {
            fenwick::array::update(&mut self.tree, index, height as isize);
        }
    }

    /// Replace the height at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize, height: u32) {
        assert!(
            index < self.heights.len(),
            "row index {} out of bounds (len: {})",
            index,
            self.heights.len()
        );
        let delta = height as isize - self.heights[index] as isize;
        self.heights[index] = height;
        if delta != 0 {
            fenwick::array::update(&mut self.tree, index, delta);
        }
    }

    /// Cumulative height up to and including `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn prefix_sum(&self, index: usize) -> u32 {
        assert!(
            index < self.heights.len(),
            "row index {} out of bounds (len: {})",
            index,
            self.heights.len()
        );
        fenwick::array::prefix_sum(&self.tree, index).max(0) as u32
    }

    /// Height of the single row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn height_at(&self, index: usize) -> u32 {
        self.heights[index]
    }

    /// Index of the row covering vertical offset `y`.
    ///
    /// Returns `None` when `y >= total()` or the index is empty.
    pub fn row_at_offset(&self, y: u32) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let mut left = 0;
        let mut right = self.heights.len();
        while left < right {
            let mid = left + (right - left) / 2;
            if self.prefix_sum(mid) > y {
                right = mid;
            } else {
                left = mid + 1;
            }
        }
        (left < self.heights.len()).then_some(left)
    }

    /// Total quantized content height.
    pub fn total(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.prefix_sum(self.heights.len() - 1)
        }
    }

    /// Number of indexed rows.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// True when no rows are indexed.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Reset to empty, retaining allocated capacity.
    pub fn clear(&mut self) {
        self.heights.clear();
        self.tree.fill(0);
    }
}
