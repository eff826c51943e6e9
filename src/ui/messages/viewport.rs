//! Row windowing for the virtualised conversation list.
//!
//! Heights are measured after a row is laid out and cached per index. Rows
//! that have never been laid out count as [`ESTIMATED_ROW_HEIGHT`]. Given a
//! viewport, [`visible_window`] picks the rows that intersect it (plus an
//! overscan margin) and the blank space that stands in for everything else.

use std::ops::Range;

/// Height assumed for a row that has not been measured yet: a collapsed row's
/// author line, gap and one-line body bubble, plus padding.
pub const ESTIMATED_ROW_HEIGHT: f32 = 59.0;

#[derive(Clone, Debug)]
pub struct RowHeights {
    measured: Vec<Option<f32>>,
    estimate: f32,
}

impl Default for RowHeights {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RowHeights {
    pub fn new(len: usize) -> Self {
        Self {
            measured: vec![None; len],
            estimate: ESTIMATED_ROW_HEIGHT,
        }
    }

    pub fn len(&self) -> usize {
        self.measured.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measured.is_empty()
    }

    pub fn resize(&mut self, len: usize) {
        self.measured.resize(len, None);
    }

    /// Height of a row, measured or estimated.
    pub fn get(&self, index: usize) -> f32 {
        self.measured
            .get(index)
            .copied()
            .flatten()
            .unwrap_or(self.estimate)
    }

    pub fn is_measured(&self, index: usize) -> bool {
        matches!(self.measured.get(index), Some(Some(_)))
    }

    pub fn set(&mut self, index: usize, height: f32) {
        if let Some(slot) = self.measured.get_mut(index) {
            *slot = Some(height.max(0.0));
        }
    }

    /// Forget a measurement; the row falls back to the estimate until it is
    /// laid out again.
    pub fn invalidate(&mut self, index: usize) {
        if let Some(slot) = self.measured.get_mut(index) {
            *slot = None;
        }
    }

    pub fn total(&self) -> f32 {
        (0..self.len()).map(|i| self.get(i)).sum()
    }
}

/// Rows to materialise and the space standing in for the rest.
#[derive(Clone, Debug, PartialEq)]
pub struct Window {
    pub range: Range<usize>,
    pub space_before: f32,
    pub space_after: f32,
}

/// Select the rows overlapping `top..bottom` widened by `overscan` on both
/// sides. Coordinates are relative to the top of the list content.
pub fn visible_window(heights: &RowHeights, top: f32, bottom: f32, overscan: f32) -> Window {
    let low = top - overscan;
    let high = bottom + overscan;

    let mut y = 0.0;
    let mut start = heights.len();
    let mut space_before = 0.0;
    for index in 0..heights.len() {
        let h = heights.get(index);
        if y + h > low {
            start = index;
            space_before = y;
            break;
        }
        y += h;
    }
    if start == heights.len() {
        space_before = y;
    }

    let mut end = start;
    let mut window_height = 0.0;
    while end < heights.len() && space_before + window_height < high {
        window_height += heights.get(end);
        end += 1;
    }

    let space_after = (heights.total() - space_before - window_height).max(0.0);
    Window {
        range: start..end,
        space_before,
        space_after,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(len: usize, h: f32) -> RowHeights {
        let mut heights = RowHeights::new(len);
        for i in 0..len {
            heights.set(i, h);
        }
        heights
    }

    #[test]
    fn test_empty_list() {
        let window = visible_window(&RowHeights::new(0), 0.0, 500.0, 100.0);
        assert_eq!(window.range, 0..0);
        assert_eq!(window.space_before, 0.0);
        assert_eq!(window.space_after, 0.0);
    }

    #[test]
    fn test_all_rows_fit() {
        let window = visible_window(&uniform(5, 50.0), 0.0, 1000.0, 0.0);
        assert_eq!(window.range, 0..5);
        assert_eq!(window.space_after, 0.0);
    }

    #[test]
    fn test_scrolled_window() {
        // Rows at 0,100,200,...; viewport 250..450 touches rows 2..5
        let heights = uniform(10, 100.0);
        let window = visible_window(&heights, 250.0, 450.0, 0.0);
        assert_eq!(window.range, 2..5);
        assert_eq!(window.space_before, 200.0);
        assert_eq!(window.space_after, 500.0);
    }

    #[test]
    fn test_overscan_widens_window() {
        let heights = uniform(10, 100.0);
        let window = visible_window(&heights, 250.0, 450.0, 100.0);
        assert_eq!(window.range, 1..6);
    }

    #[test]
    fn test_space_accounts_for_total() {
        let mut heights = uniform(20, 40.0);
        heights.set(3, 200.0);
        heights.invalidate(7);
        let window = visible_window(&heights, 300.0, 600.0, 50.0);
        let window_height: f32 = window.range.clone().map(|i| heights.get(i)).sum();
        let sum = window.space_before + window_height + window.space_after;
        assert!((sum - heights.total()).abs() < 1e-3);
    }

    #[test]
    fn test_viewport_past_end() {
        let heights = uniform(3, 10.0);
        let window = visible_window(&heights, 500.0, 600.0, 0.0);
        assert_eq!(window.range, 3..3);
        assert_eq!(window.space_before, 30.0);
        assert_eq!(window.space_after, 0.0);
    }

    #[test]
    fn test_unmeasured_rows_use_estimate() {
        let mut heights = RowHeights::new(2);
        assert_eq!(heights.get(0), ESTIMATED_ROW_HEIGHT);
        assert!(!heights.is_measured(0));
        heights.set(0, 80.0);
        assert!(heights.is_measured(0));
        assert_eq!(heights.total(), 80.0 + ESTIMATED_ROW_HEIGHT);
        heights.invalidate(0);
        assert_eq!(heights.get(0), ESTIMATED_ROW_HEIGHT);
    }
}
