use crate::view::Domain1D;

/// Converts a pixel x-coordinate on the plot into a timestamp.
///
/// The mapping depends on the chart's current zoom/pan state, so it is always
/// supplied by the rendering surface rather than owned by the selection logic.
pub trait PixelMapper {
    fn px_to_timestamp(&self, px: f64) -> f64;
}

impl<F> PixelMapper for F
where
    F: Fn(f64) -> f64,
{
    fn px_to_timestamp(&self, px: f64) -> f64 {
        self(px)
    }
}

/// Linear mapping between a time domain and a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    pub fn new(domain_min: f64, domain_max: f64, range_min: f64, range_max: f64) -> Self {
        Self {
            domain_min,
            domain_max,
            range_min,
            range_max,
        }
    }

    /// Scale spanning `domain` over `0..width_px` pixels.
    pub fn for_plot(domain: Domain1D, width_px: f64) -> Self {
        Self::new(domain.min, domain.max, 0.0, width_px)
    }

    pub fn map(&self, value: f64) -> f64 {
        let d = self.domain_max - self.domain_min;
        if d.abs() < 1e-12 {
            return self.range_min;
        }
        let t = (value - self.domain_min) / d;
        self.range_min + t * (self.range_max - self.range_min)
    }

    pub fn invert(&self, px: f64) -> f64 {
        let r = self.range_max - self.range_min;
        if r.abs() < 1e-12 {
            return self.domain_min;
        }
        let t = (px - self.range_min) / r;
        self.domain_min + t * (self.domain_max - self.domain_min)
    }
}

impl PixelMapper for LinearScale {
    fn px_to_timestamp(&self, px: f64) -> f64 {
        self.invert(px)
    }
}
