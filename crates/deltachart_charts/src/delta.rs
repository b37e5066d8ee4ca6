//! Per-series value change across a selected time range.

use std::fmt;

use deltachart_core::{DataPoint, Series, TimeRange};
use serde::Serialize;

use crate::format::{format_signed_fixed, format_signed_grouped, round_half_away};

const PERCENT_DECIMALS: u32 = 2;

/// Percentage change between the first and last point of a selection.
///
/// A zero (or otherwise unusable) starting value has no meaningful ratio and is
/// reported as `Undefined` instead of NaN/Infinity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(into = "Option<f64>")]
pub enum PercentDelta {
    /// Percent change, already rounded to two decimals.
    Ratio(f64),
    Undefined,
}

impl PercentDelta {
    /// `100 * last / first - 100`, rounded half away from zero to two decimals.
    pub fn between(first: f64, last: f64) -> Self {
        if first == 0.0 {
            return PercentDelta::Undefined;
        }
        let raw = 100.0 * last / first - 100.0;
        if !raw.is_finite() {
            return PercentDelta::Undefined;
        }
        let rounded = round_half_away(raw, PERCENT_DECIMALS);
        // -0.00 would otherwise render with a stray minus sign.
        PercentDelta::Ratio(if rounded == 0.0 { 0.0 } else { rounded })
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            PercentDelta::Ratio(v) => Some(*v),
            PercentDelta::Undefined => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, PercentDelta::Undefined)
    }
}

impl From<PercentDelta> for Option<f64> {
    fn from(p: PercentDelta) -> Self {
        p.value()
    }
}

impl fmt::Display for PercentDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentDelta::Ratio(v) => {
                f.write_str(&format_signed_fixed(*v, PERCENT_DECIMALS as usize))
            }
            PercentDelta::Undefined => f.write_str("n/a"),
        }
    }
}

/// First/last points inside a range and the change between them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SeriesDelta {
    pub first: DataPoint,
    pub last: DataPoint,
    pub absolute_delta: f64,
    pub percent_delta: PercentDelta,
}

impl SeriesDelta {
    pub fn between(first: DataPoint, last: DataPoint) -> Self {
        Self {
            first,
            last,
            absolute_delta: last.y - first.y,
            percent_delta: PercentDelta::between(first.y, last.y),
        }
    }

    /// e.g. `+5` or `-1,250.5`
    pub fn absolute_string(&self) -> String {
        format_signed_grouped(self.absolute_delta)
    }

    /// e.g. `+50.00` or `n/a`
    pub fn percent_string(&self) -> String {
        self.percent_delta.to_string()
    }

    /// e.g. `+50.00% (+5)`
    ///
    /// The percent and the absolute change are each signed on their own, so a
    /// series falling from `-10` to `-20` reads `+100.00% (-10)`. The `+` is not
    /// borrowed from the absolute change, which would print `100.00% (-10)` or a
    /// double sign such as `+-50.00%`.
    pub fn summary(&self) -> String {
        match self.percent_delta {
            PercentDelta::Ratio(_) => {
                format!("{}% ({})", self.percent_string(), self.absolute_string())
            }
            PercentDelta::Undefined => format!("n/a ({})", self.absolute_string()),
        }
    }
}

/// Delta for one named series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesDeltaRow {
    pub name: String,
    pub color: String,
    pub delta: SeriesDelta,
}

/// Find the first and last points strictly inside `range` and the change between them.
///
/// `first` is the point closest to `range.from`, `last` the one closest to
/// `range.to`. On equal distance the earlier point in `series.data` wins.
/// Returns `None` when no point lies strictly inside the range.
pub fn compute_delta(range: TimeRange, series: &Series) -> Option<SeriesDelta> {
    let mut first: Option<DataPoint> = None;
    let mut last: Option<DataPoint> = None;

    for p in series.data.iter() {
        if !range.contains_exclusive(p.x) {
            continue;
        }
        if first.map_or(true, |f| p.x - range.from < f.x - range.from) {
            first = Some(*p);
        }
        if last.map_or(true, |l| range.to - p.x < range.to - l.x) {
            last = Some(*p);
        }
    }

    Some(SeriesDelta::between(first?, last?))
}

/// Deltas for every series with at least one point inside `range`, in series order.
pub fn compute_deltas(range: TimeRange, series: &[Series]) -> Vec<SeriesDeltaRow> {
    let rows: Vec<SeriesDeltaRow> = series
        .iter()
        .filter_map(|s| {
            compute_delta(range, s).map(|delta| SeriesDeltaRow {
                name: s.name.clone(),
                color: s.color.clone(),
                delta,
            })
        })
        .collect();
    tracing::debug!(
        from = range.from,
        to = range.to,
        series = series.len(),
        with_delta = rows.len(),
        "computed selection deltas"
    );
    rows
}
