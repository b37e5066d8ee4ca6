use deltachart_core::Series;

/// 1D numeric domain (min..max), in seconds for the time axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain1D {
    pub min: f64,
    pub max: f64,
}

impl Domain1D {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Time extent covering every point of every series; `None` if all are empty.
    ///
    /// Series need not be sorted.
    pub fn x_extent(series: &[Series]) -> Option<Self> {
        let mut points = series.iter().flat_map(|s| s.data.iter());
        let first = points.next()?;
        let (min, max) = points.fold((first.x, first.x), |(lo, hi), p| (lo.min(p.x), hi.max(p.x)));
        Some(Self { min, max })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max > self.min
    }

    pub fn contains(&self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    /// Grow a too-narrow domain around its midpoint, e.g. a single timestamp.
    pub fn clamp_span_min(&mut self, min_span: f64) {
        if self.span() < min_span {
            let mid = (self.min + self.max) * 0.5;
            let half = min_span * 0.5;
            self.min = mid - half;
            self.max = mid + half;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_timestamp_widens_to_min_span() {
        let s = Series::from_pairs("one", "", [(5.0, 1.0)]);
        let mut d = Domain1D::x_extent(&[s]).unwrap();
        assert!(!d.is_valid());
        d.clamp_span_min(2.0);
        assert_eq!(d, Domain1D::new(4.0, 6.0));
        assert!(d.is_valid());
    }

    #[test]
    fn x_extent_spans_all_series() {
        let a = Series::from_pairs("a", "", [(3.0, 0.0), (1.0, 0.0)]);
        let b = Series::from_pairs("b", "", [(7.0, 0.0)]);
        let empty = Series::new("e", "", Vec::new());
        assert_eq!(
            Domain1D::x_extent(&[a, empty.clone(), b]),
            Some(Domain1D::new(1.0, 7.0))
        );
        assert_eq!(Domain1D::x_extent(&[empty]), None);
    }

    #[test]
    fn contains_is_inclusive() {
        let d = Domain1D::new(-1.0, 1.0);
        assert!(d.contains(-1.0));
        assert!(d.contains(1.0));
        assert!(!d.contains(1.5));
    }
}
