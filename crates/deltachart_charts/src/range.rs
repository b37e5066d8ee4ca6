//! Pixel-to-time range selection.

use deltachart_core::TimeRange;

use crate::scale::PixelMapper;

/// Drags at or below this width (pixels) are clicks, not selections.
pub const SELECTION_THRESHOLD_PX: f64 = 10.0;

/// Convert a dragged pixel interval into a time range.
///
/// `pixel_start` and `pixel_end` may come in either order. The result does not
/// depend on their order, and `from <= to` holds even for a decreasing mapper.
pub fn compute_range<M>(pixel_start: f64, pixel_end: f64, mapper: &M) -> TimeRange
where
    M: PixelMapper + ?Sized,
{
    let left = pixel_start.min(pixel_end);
    let right = pixel_start.max(pixel_end);
    TimeRange::new(mapper.px_to_timestamp(left), mapper.px_to_timestamp(right))
}

/// Whether a drag from `pixel_start` to `pixel_end` counts as a selection.
pub fn is_selection(pixel_start: f64, pixel_end: f64) -> bool {
    (pixel_end - pixel_start).abs() > SELECTION_THRESHOLD_PX
}
