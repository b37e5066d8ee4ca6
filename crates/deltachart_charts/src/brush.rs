use crate::range::SELECTION_THRESHOLD_PX;

/// Horizontal drag-selection state, in local pixel coordinates.
///
/// Pixels are converted to time only when a selection is published, using the
/// mapper the rendering surface passes in at that moment.
#[derive(Clone, Copy, Debug)]
pub struct BrushX {
    active: bool,
    start_px: f64,
    cur_px: f64,
    threshold_px: f64,
}

/// How a drag ended on mouse-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BrushRelease {
    /// No drag was in progress.
    Idle,
    /// The drag was too short; treat it as a click.
    Click,
    /// A selection from `left` to `right` (pixels, ordered).
    Selected(f64, f64),
}

impl Default for BrushX {
    fn default() -> Self {
        Self::with_threshold(SELECTION_THRESHOLD_PX)
    }
}

impl BrushX {
    pub fn with_threshold(threshold_px: f64) -> Self {
        Self {
            active: false,
            start_px: 0.0,
            cur_px: 0.0,
            threshold_px: threshold_px.max(0.0),
        }
    }

    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn begin(&mut self, x_px: f64) {
        self.active = true;
        self.start_px = x_px;
        self.cur_px = x_px;
    }

    pub fn update(&mut self, x_px: f64) {
        if self.active {
            self.cur_px = x_px;
        }
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn range_px(&self) -> Option<(f64, f64)> {
        if !self.active {
            return None;
        }
        Some((
            self.start_px.min(self.cur_px),
            self.start_px.max(self.cur_px),
        ))
    }

    pub fn width_px(&self) -> Option<f64> {
        self.range_px().map(|(a, b)| b - a)
    }

    /// Whether the current drag is wide enough to count as a selection.
    pub fn is_selection(&self) -> bool {
        self.width_px().is_some_and(|w| w > self.threshold_px)
    }

    /// Finish the drag at `x_px`.
    pub fn release(&mut self, x_px: f64) -> BrushRelease {
        if !self.active {
            return BrushRelease::Idle;
        }
        self.update(x_px);
        let selected = self.is_selection();
        match self.take_final_px() {
            Some((left, right)) if selected => BrushRelease::Selected(left, right),
            _ => BrushRelease::Click,
        }
    }

    pub fn take_final_px(&mut self) -> Option<(f64, f64)> {
        let r = self.range_px();
        self.active = false;
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brush_tracks_range() {
        let mut b = BrushX::default();
        assert_eq!(b.range_px(), None);
        b.begin(10.0);
        assert_eq!(b.range_px(), Some((10.0, 10.0)));
        b.update(3.0);
        assert_eq!(b.range_px(), Some((3.0, 10.0)));
        assert_eq!(b.take_final_px(), Some((3.0, 10.0)));
        assert_eq!(b.range_px(), None);
    }

    #[test]
    fn short_drag_releases_as_click() {
        let mut b = BrushX::default();
        b.begin(100.0);
        b.update(105.0);
        assert!(!b.is_selection());
        assert_eq!(b.release(110.0), BrushRelease::Click);
        assert!(!b.is_active());
    }

    #[test]
    fn wide_drag_releases_as_selection() {
        let mut b = BrushX::default();
        b.begin(200.0);
        assert_eq!(b.release(150.0), BrushRelease::Selected(150.0, 200.0));
    }

    #[test]
    fn release_without_begin_is_idle() {
        let mut b = BrushX::default();
        assert_eq!(b.release(42.0), BrushRelease::Idle);
    }

    #[test]
    fn update_after_cancel_is_ignored() {
        let mut b = BrushX::with_threshold(2.0);
        b.begin(0.0);
        b.cancel();
        b.update(50.0);
        assert_eq!(b.range_px(), None);
        assert!(!b.is_selection());
    }
}
