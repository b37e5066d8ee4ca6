//! Time-series data model
//!
//! Plain data shared by every deltachart crate. Timestamps are seconds since the
//! Unix epoch, stored as `f64` so sub-second samples survive.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single sample: timestamp `x` (seconds) and value `y`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A named, colored, time-ordered sequence of data points.
///
/// Points are expected to be sorted by `x`; this is assumed, not verified.
/// Use [`Series::is_sorted`] when the source is untrusted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "SeriesRepr", into = "SeriesRepr")]
pub struct Series {
    pub name: String,
    pub color: String,
    pub data: Arc<[DataPoint]>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            data: data.into(),
        }
    }

    /// Build a series from `(x, y)` pairs.
    pub fn from_pairs(
        name: impl Into<String>,
        color: impl Into<String>,
        pairs: impl IntoIterator<Item = (f64, f64)>,
    ) -> Self {
        Self::new(name, color, pairs.into_iter().map(DataPoint::from).collect())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_sorted(&self) -> bool {
        self.data.windows(2).all(|w| w[0].x <= w[1].x)
    }

    /// Smallest and largest timestamp; scans every point, so unsorted data is fine.
    pub fn x_min_max(&self) -> Option<(f64, f64)> {
        min_max(self.data.iter().map(|p| p.x))
    }

    pub fn y_min_max(&self) -> Option<(f64, f64)> {
        min_max(self.data.iter().map(|p| p.y))
    }
}

fn min_max(mut values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let first = values.next()?;
    Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

#[derive(Serialize, Deserialize)]
struct SeriesRepr {
    name: String,
    #[serde(default)]
    color: String,
    data: Vec<DataPoint>,
}

impl From<SeriesRepr> for Series {
    fn from(repr: SeriesRepr) -> Self {
        Series::new(repr.name, repr.color, repr.data)
    }
}

impl From<Series> for SeriesRepr {
    fn from(series: Series) -> Self {
        SeriesRepr {
            name: series.name,
            color: series.color,
            data: series.data.to_vec(),
        }
    }
}

/// A time interval `from..to` in seconds. Always `from <= to`.
///
/// Deserialization goes through [`TimeRange::try_new`]: bounds given in reverse
/// order are swapped and non-finite bounds are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TimeRangeRepr")]
pub struct TimeRange {
    pub from: f64,
    pub to: f64,
}

#[derive(Deserialize)]
struct TimeRangeRepr {
    from: f64,
    to: f64,
}

impl TryFrom<TimeRangeRepr> for TimeRange {
    type Error = Error;

    fn try_from(repr: TimeRangeRepr) -> Result<Self> {
        TimeRange::try_new(repr.from, repr.to)
    }
}

impl TimeRange {
    /// Build a range from two unordered bounds.
    pub fn new(a: f64, b: f64) -> Self {
        if b < a {
            Self { from: b, to: a }
        } else {
            Self { from: a, to: b }
        }
    }

    /// Like [`TimeRange::new`] but rejects NaN and infinite bounds.
    pub fn try_new(a: f64, b: f64) -> Result<Self> {
        if !(a.is_finite() && b.is_finite()) {
            return Err(Error::NonFiniteRange { from: a, to: b });
        }
        Ok(Self::new(a, b))
    }

    pub fn span(&self) -> f64 {
        self.to - self.from
    }

    /// `from < x < to`; both endpoints are excluded.
    pub fn contains_exclusive(&self, x: f64) -> bool {
        self.from < x && x < self.to
    }
}

/// How the Y-axis bounds are derived from the data extrema.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScalingMode {
    /// Always show zero, pad the top by 10% of the largest magnitude.
    #[default]
    FixedIncludeZero,
    /// Pad both ends by 10% of the data span; zero may be excluded.
    FixedPadded,
    /// Let the rendering surface rescale to the visible data.
    AutoRescale,
}

impl ScalingMode {
    pub const ALL: [ScalingMode; 3] = [
        ScalingMode::FixedIncludeZero,
        ScalingMode::FixedPadded,
        ScalingMode::AutoRescale,
    ];

    /// Name used in URL parameters and config files.
    pub fn as_param(&self) -> &'static str {
        match self {
            ScalingMode::FixedIncludeZero => "fixed-zero",
            ScalingMode::FixedPadded => "fixed",
            ScalingMode::AutoRescale => "rescale",
        }
    }

    /// Lenient parse: unrecognized input falls back to [`ScalingMode::FixedIncludeZero`].
    pub fn from_param(value: &str) -> Self {
        match value.parse() {
            Ok(mode) => mode,
            Err(_) => {
                tracing::warn!(
                    "unknown y-axis scaling mode '{}', using '{}'",
                    value,
                    ScalingMode::default().as_param()
                );
                ScalingMode::default()
            }
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, ScalingMode::AutoRescale)
    }
}

impl FromStr for ScalingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "fixed-zero" => Ok(ScalingMode::FixedIncludeZero),
            "fixed" => Ok(ScalingMode::FixedPadded),
            "rescale" => Ok(ScalingMode::AutoRescale),
            other => Err(Error::UnknownScalingMode(other.to_string())),
        }
    }
}

impl fmt::Display for ScalingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl From<String> for ScalingMode {
    fn from(value: String) -> Self {
        ScalingMode::from_param(&value)
    }
}

impl From<ScalingMode> for String {
    fn from(mode: ScalingMode) -> Self {
        mode.as_param().to_string()
    }
}

/// Y extrema across every point of every series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YExtent {
    pub min: f64,
    pub max: f64,
}

impl YExtent {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `None` when no series holds a point.
    pub fn of(series: &[Series]) -> Option<Self> {
        series
            .iter()
            .filter_map(Series::y_min_max)
            .reduce(|(a0, a1), (b0, b1)| (a0.min(b0), a1.max(b1)))
            .map(|(min, max)| Self { min, max })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn distance_furthest_from_zero(&self) -> f64 {
        self.min.abs().max(self.max.abs())
    }
}
