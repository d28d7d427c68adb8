//! # Scroll-Driven Selection
//!
//! The category strip is a paged carousel: every category is one viewport
//! wide, so a horizontal scroll offset maps to a category index.
//!
//! ```text
//!  offset ─▶ index = floor(offset / W)
//!            progress = (offset - W * index) / W
//!            progress > 0.1 ? index + 1 : index
//! ```
//!
//! Pure functions only. The reducer in `action.rs` decides what to do with
//! the inferred index.

/// Fraction of an item that must be scrolled past before the next item counts as selected.
pub const SELECTION_THRESHOLD: f64 = 0.1;

/// Distance from the end of content, in item widths, at which the end counts as reached.
pub const END_REACHED_THRESHOLD: f64 = 0.1;

/// One scroll-position update from the horizontal category strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    /// Horizontal offset of the left edge of the viewport into the content.
    pub offset: f64,
    /// Visible width; also the width of one category item.
    pub viewport_width: f64,
    /// Total width of the strip content.
    pub content_width: f64,
}

impl ScrollSample {
    /// Builds a sample for a strip of `count` viewport-wide items.
    pub fn paged(offset: f64, viewport_width: f64, count: usize) -> Self {
        Self {
            offset,
            viewport_width,
            content_width: viewport_width * count as f64,
        }
    }

    fn is_measurable(&self) -> bool {
        self.offset.is_finite()
            && self.viewport_width.is_finite()
            && self.content_width.is_finite()
            && self.viewport_width > 0.0
    }
}

/// Returns the index of the category the scroll position points at, or
/// `None` if the computed index is outside `0..count`.
pub fn inferred_index(sample: &ScrollSample, count: usize) -> Option<usize> {
    if !sample.is_measurable() {
        return None;
    }

    let width = sample.viewport_width;
    let index = (sample.offset / width).floor();
    let progress = (sample.offset - width * index) / width;
    let target = if progress > SELECTION_THRESHOLD {
        index + 1.0
    } else {
        index
    };

    if target < 0.0 || target >= count as f64 {
        return None;
    }
    Some(target as usize)
}

/// True when the viewport's right edge is within the end threshold of the
/// content's end.
pub fn end_reached(sample: &ScrollSample) -> bool {
    if !sample.is_measurable() || sample.content_width <= 0.0 {
        return false;
    }
    let distance_from_end = sample.content_width - (sample.offset + sample.viewport_width);
    distance_from_end <= END_REACHED_THRESHOLD * sample.viewport_width
}
