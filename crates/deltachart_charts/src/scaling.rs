//! Y-axis bounds for each scaling mode.

use deltachart_core::{ScalingMode, YExtent};

use crate::view::Domain1D;

/// Padding applied by the fixed modes, as a fraction of the reference magnitude.
const PAD_FRACTION: f64 = 0.1;

/// Axis bounds chosen by a scaling mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisBounds {
    Fixed { min: f64, max: f64 },
    /// The rendering surface rescales to whatever data is visible.
    Auto,
}

impl AxisBounds {
    pub fn as_domain(&self) -> Option<Domain1D> {
        match *self {
            AxisBounds::Fixed { min, max } => Some(Domain1D::new(min, max)),
            AxisBounds::Auto => None,
        }
    }
}

/// Derive Y-axis bounds from the data extrema of all series.
///
/// - `FixedIncludeZero`: zero always visible, top padded by 10% of the larger magnitude
/// - `FixedPadded`: both ends padded by 10% of the span
/// - `AutoRescale`: no fixed bounds
pub fn compute_bounds(mode: ScalingMode, y_min: f64, y_max: f64) -> AxisBounds {
    match mode {
        ScalingMode::FixedIncludeZero => {
            let furthest = y_min.abs().max(y_max.abs());
            AxisBounds::Fixed {
                min: y_min.min(0.0),
                max: (y_max + PAD_FRACTION * furthest).max(0.0),
            }
        }
        ScalingMode::FixedPadded => {
            let span = y_max - y_min;
            AxisBounds::Fixed {
                min: y_min - PAD_FRACTION * span,
                max: y_max + PAD_FRACTION * span,
            }
        }
        ScalingMode::AutoRescale => AxisBounds::Auto,
    }
}

/// [`compute_bounds`] for a mode given by name; unknown names use `FixedIncludeZero`.
pub fn compute_bounds_for_param(mode: &str, y_min: f64, y_max: f64) -> AxisBounds {
    compute_bounds(ScalingMode::from_param(mode), y_min, y_max)
}

pub fn compute_bounds_for_extent(mode: ScalingMode, extent: YExtent) -> AxisBounds {
    compute_bounds(mode, extent.min, extent.max)
}
