//! Interactive analysis chart model.
//!
//! Holds the series, the Y-axis scaling mode, and the drag-selection state of one
//! chart. The rendering surface forwards pointer events in local pixel
//! coordinates together with its current pixel→timestamp mapping; the model
//! answers with time ranges and per-series deltas and publishes them to
//! registered callbacks.

use deltachart_core::events::event_types;
use deltachart_core::{ChartEvent, Error, EventDispatcher, ScalingMode, Series, TimeRange, YExtent};
use serde::{Deserialize, Serialize};

use crate::brush::{BrushRelease, BrushX};
use crate::delta::{compute_deltas, SeriesDeltaRow};
use crate::range::{compute_range, SELECTION_THRESHOLD_PX};
use crate::scale::PixelMapper;
use crate::scaling::{compute_bounds_for_extent, AxisBounds};

/// Settings passed to a chart at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisChartConfig {
    pub scaling_mode: ScalingMode,
    /// Drags no wider than this (pixels) are clicks.
    pub selection_threshold_px: f64,
}

impl Default for AnalysisChartConfig {
    fn default() -> Self {
        Self {
            scaling_mode: ScalingMode::default(),
            selection_threshold_px: SELECTION_THRESHOLD_PX,
        }
    }
}

/// The visible selection: its time range and the deltas of every series inside it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectionSummary {
    pub range: TimeRange,
    pub rows: Vec<SeriesDeltaRow>,
}

/// Mutable model for an interactive time-series analysis chart.
#[derive(Debug)]
pub struct AnalysisChart {
    series: Vec<Series>,
    scaling_mode: ScalingMode,
    extent: YExtent,

    brush_x: BrushX,
    selection: Option<SelectionSummary>,

    events: EventDispatcher,
}

impl AnalysisChart {
    pub fn new(series: Vec<Series>, config: AnalysisChartConfig) -> anyhow::Result<Self> {
        anyhow::ensure!(!series.is_empty(), Error::EmptySeriesList);

        let extent = match YExtent::of(&series) {
            Some(e) => e,
            None => {
                let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
                return Err(Error::EmptySeries(names.join(", ")).into());
            }
        };

        for s in series.iter().filter(|s| !s.is_sorted()) {
            tracing::warn!("series '{}' is not sorted by timestamp", s.name);
        }

        tracing::debug!(
            series = series.len(),
            y_min = extent.min,
            y_max = extent.max,
            mode = %config.scaling_mode,
            "created analysis chart"
        );

        Ok(Self {
            series,
            scaling_mode: config.scaling_mode,
            extent,
            brush_x: BrushX::with_threshold(config.selection_threshold_px),
            selection: None,
            events: EventDispatcher::new(),
        })
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn extent(&self) -> YExtent {
        self.extent
    }

    pub fn scaling_mode(&self) -> ScalingMode {
        self.scaling_mode
    }

    /// Y-axis bounds for the current scaling mode.
    pub fn y_bounds(&self) -> AxisBounds {
        compute_bounds_for_extent(self.scaling_mode, self.extent)
    }

    pub fn selection(&self) -> Option<&SelectionSummary> {
        self.selection.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.brush_x.is_active()
    }

    /// Current drag extent in pixels, ordered.
    pub fn drag_px(&self) -> Option<(f64, f64)> {
        self.brush_x.range_px()
    }

    // ---------------------------------------------------------------------
    // Callbacks
    // ---------------------------------------------------------------------

    pub fn on_range_selected<F>(&mut self, callback: F)
    where
        F: Fn(TimeRange) + Send + Sync + 'static,
    {
        self.events
            .register(event_types::RANGE_SELECTED, move |event| {
                if let ChartEvent::RangeSelected(range) = event {
                    callback(*range);
                }
            });
    }

    pub fn on_selection_cleared<F>(&mut self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.events
            .register(event_types::SELECTION_CLEARED, move |_| callback());
    }

    pub fn on_scaling_changed<F>(&mut self, callback: F)
    where
        F: Fn(ScalingMode) + Send + Sync + 'static,
    {
        self.events
            .register(event_types::SCALING_CHANGED, move |event| {
                if let ChartEvent::ScalingChanged(mode) = event {
                    callback(*mode);
                }
            });
    }

    // ---------------------------------------------------------------------
    // Scaling
    // ---------------------------------------------------------------------

    /// Switch scaling mode and notify listeners (also when the mode is unchanged).
    pub fn set_scaling_mode(&mut self, mode: ScalingMode) -> AxisBounds {
        self.scaling_mode = mode;
        self.events.dispatch(&ChartEvent::ScalingChanged(mode));
        self.y_bounds()
    }

    /// Like [`AnalysisChart::set_scaling_mode`] for a mode name; unknown names
    /// select `FixedIncludeZero`.
    pub fn set_scaling_param(&mut self, mode: &str) -> AxisBounds {
        self.set_scaling_mode(ScalingMode::from_param(mode))
    }

    // ---------------------------------------------------------------------
    // Selection gesture
    // ---------------------------------------------------------------------

    pub fn on_mouse_down(&mut self, local_x: f64) {
        // A new drag hides the previous selection until it grows past the threshold.
        self.clear_selection();
        self.brush_x.begin(local_x);
    }

    /// Track the drag and recompute the selection.
    ///
    /// Returns the selection when the drag is wider than the threshold.
    pub fn on_mouse_move<M>(&mut self, local_x: f64, mapper: &M) -> Option<&SelectionSummary>
    where
        M: PixelMapper + ?Sized,
    {
        if !self.brush_x.is_active() {
            return None;
        }
        self.brush_x.update(local_x);
        if !self.brush_x.is_selection() {
            self.clear_selection();
            return None;
        }
        let (left, right) = self.brush_x.range_px()?;
        self.select(compute_range(left, right, mapper));
        self.selection.as_ref()
    }

    /// Finish the drag. Short drags count as clicks and clear the selection.
    pub fn on_mouse_up<M>(&mut self, local_x: f64, mapper: &M) -> BrushRelease
    where
        M: PixelMapper + ?Sized,
    {
        let release = self.brush_x.release(local_x);
        match release {
            BrushRelease::Selected(left, right) => {
                self.select(compute_range(left, right, mapper));
            }
            BrushRelease::Click => self.clear_selection(),
            BrushRelease::Idle => {}
        }
        release
    }

    /// Leaving the plot while dragging cancels the drag.
    pub fn on_mouse_leave(&mut self) {
        if self.brush_x.is_active() {
            self.brush_x.cancel();
            self.clear_selection();
        }
    }

    /// The range slider moved; the selection no longer matches the view.
    pub fn on_range_slide(&mut self) {
        self.clear_selection();
    }

    pub fn clear_selection(&mut self) {
        if self.selection.take().is_some() {
            tracing::trace!("selection cleared");
            self.events.dispatch(&ChartEvent::SelectionCleared);
        }
    }

    /// Select a time range directly, bypassing the pointer gesture.
    pub fn select(&mut self, range: TimeRange) -> &SelectionSummary {
        let rows = compute_deltas(range, &self.series);
        self.events.dispatch(&ChartEvent::RangeSelected(range));
        self.selection.insert(SelectionSummary { range, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::LinearScale;
    use std::sync::{Arc, Mutex};

    fn chart() -> AnalysisChart {
        let series = vec![
            Series::from_pairs("a", "#f00", [(1.0, 10.0), (2.0, 20.0), (3.0, 15.0)]),
            Series::from_pairs("b", "#0f0", [(1.5, -4.0), (2.5, 8.0)]),
        ];
        AnalysisChart::new(series, AnalysisChartConfig::default()).unwrap()
    }

    // 0..100 px maps to 0..4 s.
    fn scale() -> LinearScale {
        LinearScale::new(0.0, 4.0, 0.0, 100.0)
    }

    #[test]
    fn rejects_empty_inputs() {
        assert!(AnalysisChart::new(Vec::new(), AnalysisChartConfig::default()).is_err());
        let err = AnalysisChart::new(
            vec![Series::new("x", "", Vec::new())],
            AnalysisChartConfig::default(),
        )
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::EmptySeries("x".into()))
        );
    }

    #[test]
    fn drag_selects_and_computes_deltas() {
        let mut c = chart();
        c.on_mouse_down(100.0);
        let sel = c.on_mouse_move(0.0, &scale()).unwrap();
        assert_eq!(sel.range, TimeRange::new(0.0, 4.0));
        assert_eq!(sel.rows.len(), 2);
        assert_eq!(sel.rows[0].delta.summary(), "+50.00% (+5)");
        assert_eq!(sel.rows[1].delta.absolute_delta, 12.0);

        assert_eq!(c.on_mouse_up(0.0, &scale()), BrushRelease::Selected(0.0, 100.0));
        assert!(c.selection().is_some());
        assert!(!c.is_dragging());
    }

    #[test]
    fn short_drag_is_a_click() {
        let mut c = chart();
        c.select(TimeRange::new(0.0, 4.0));
        c.on_mouse_down(50.0);
        assert!(c.selection().is_none());
        assert!(c.on_mouse_move(55.0, &scale()).is_none());
        assert_eq!(c.on_mouse_up(58.0, &scale()), BrushRelease::Click);
        assert!(c.selection().is_none());
    }

    #[test]
    fn repeated_move_to_same_pixel_is_idempotent() {
        let ranges = Arc::new(Mutex::new(Vec::new()));
        let mut c = chart();
        let r = ranges.clone();
        c.on_range_selected(move |range| r.lock().unwrap().push(range));

        c.on_mouse_down(25.0);
        let first = c.on_mouse_move(75.0, &scale()).cloned().unwrap();
        let second = c.on_mouse_move(75.0, &scale()).cloned().unwrap();

        assert_eq!(first, second);
        assert_eq!(first.range, TimeRange::new(1.0, 3.0));
        assert_eq!(*ranges.lock().unwrap(), vec![TimeRange::new(1.0, 3.0); 2]);
    }

    #[test]
    fn shrinking_below_threshold_clears_once() {
        let cleared = Arc::new(Mutex::new(0));
        let mut c = chart();
        let n = cleared.clone();
        c.on_selection_cleared(move || *n.lock().unwrap() += 1);

        c.on_mouse_down(20.0);
        assert!(c.on_mouse_move(60.0, &scale()).is_some());
        assert!(c.on_mouse_move(25.0, &scale()).is_none());
        assert!(c.on_mouse_move(22.0, &scale()).is_none());
        assert_eq!(*cleared.lock().unwrap(), 1);

        assert_eq!(c.on_mouse_up(22.0, &scale()), BrushRelease::Click);
        assert_eq!(*cleared.lock().unwrap(), 1);
        assert!(c.selection().is_none());
    }

    #[test]
    fn leaving_cancels_drag() {
        let mut c = chart();
        c.on_mouse_down(0.0);
        assert!(c.on_mouse_move(80.0, &scale()).is_some());
        c.on_mouse_leave();
        assert!(!c.is_dragging());
        assert!(c.selection().is_none());
        assert_eq!(c.on_mouse_up(90.0, &scale()), BrushRelease::Idle);
    }

    #[test]
    fn callbacks_fire_for_selection_and_scaling() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut c = chart();

        let l = log.clone();
        c.on_range_selected(move |r| l.lock().unwrap().push(format!("range {}..{}", r.from, r.to)));
        let l = log.clone();
        c.on_selection_cleared(move || l.lock().unwrap().push("cleared".to_string()));
        let l = log.clone();
        c.on_scaling_changed(move |m| l.lock().unwrap().push(format!("mode {m}")));

        c.on_mouse_down(25.0);
        c.on_mouse_move(75.0, &scale());
        c.on_range_slide();
        c.set_scaling_param("rescale");

        assert_eq!(
            *log.lock().unwrap(),
            vec!["range 1..3", "cleared", "mode rescale"]
        );
    }

    #[test]
    fn scaling_mode_drives_bounds() {
        let mut c = chart();
        assert_eq!(c.extent(), YExtent::new(-4.0, 20.0));
        match c.y_bounds() {
            AxisBounds::Fixed { min, max } => {
                assert_eq!(min, -4.0);
                assert!((max - 22.0).abs() < 1e-9);
            }
            AxisBounds::Auto => panic!("expected fixed bounds"),
        }
        assert_eq!(c.set_scaling_mode(ScalingMode::AutoRescale), AxisBounds::Auto);
        assert_eq!(c.set_scaling_param("nonsense"), c.y_bounds());
        assert_eq!(c.scaling_mode(), ScalingMode::FixedIncludeZero);
    }
}
