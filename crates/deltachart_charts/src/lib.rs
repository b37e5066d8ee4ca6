//! deltachart_charts
//!
//! Interaction logic for a time-series analysis chart, independent of any renderer.
//!
//! Design goals:
//! - Pure computation over plain data (no drawing, no DOM, no globals)
//! - Coordinate mapping is injected by the rendering surface ([`PixelMapper`])
//! - Results are published through `deltachart_core`'s event dispatcher

mod brush;
mod view;

pub mod analysis;
pub mod delta;
pub mod format;
pub mod query;
pub mod range;
pub mod scale;
pub mod scaling;
pub mod time_format;

pub use analysis::{AnalysisChart, AnalysisChartConfig, SelectionSummary};
pub use brush::{BrushRelease, BrushX};
pub use delta::{compute_delta, compute_deltas, PercentDelta, SeriesDelta, SeriesDeltaRow};
pub use range::{compute_range, is_selection, SELECTION_THRESHOLD_PX};
pub use scale::{LinearScale, PixelMapper};
pub use scaling::{compute_bounds, compute_bounds_for_param, AxisBounds};
pub use view::Domain1D;

/// Common imports for chart users.
pub mod prelude {
    pub use crate::analysis::{AnalysisChart, AnalysisChartConfig, SelectionSummary};
    pub use crate::brush::{BrushRelease, BrushX};
    pub use crate::delta::{
        compute_delta, compute_deltas, PercentDelta, SeriesDelta, SeriesDeltaRow,
    };
    pub use crate::query::QueryParams;
    pub use crate::range::{compute_range, is_selection, SELECTION_THRESHOLD_PX};
    pub use crate::scale::{LinearScale, PixelMapper};
    pub use crate::scaling::{compute_bounds, compute_bounds_for_param, AxisBounds};
    pub use crate::view::Domain1D;
    pub use deltachart_core::{ChartEvent, DataPoint, ScalingMode, Series, TimeRange, YExtent};
}
