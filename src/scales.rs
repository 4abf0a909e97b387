use d3rs::scale::{LinearScale, Scale as D3Scale};

/// Linear data-to-pixel scale.
#[derive(Clone)]
pub struct ChartScale {
    scale: LinearScale,
    domain: (f64, f64),
    range: (f32, f32),
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let domain = Self::sanitize_domain(domain.0, domain.1);
        let scale = LinearScale::new()
            .domain(domain.0, domain.1)
            .range(range.0 as f64, range.1 as f64);
        Self {
            scale,
            domain,
            range,
        }
    }

    /// Widens empty or non-finite domains so the mapping never divides by zero.
    fn sanitize_domain(min: f64, max: f64) -> (f64, f64) {
        if !min.is_finite() || !max.is_finite() {
            return (0.0, 1.0);
        }
        if (max - min).abs() < f64::EPSILON {
            return (min - 0.5, max + 0.5);
        }
        (min, max)
    }

    pub fn map(&self, value: f64) -> f32 {
        let res = self.scale.scale(value) as f32;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        self.scale.invert(pixel as f64).unwrap_or(0.0)
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns (m, c) such that screen = value * m + c
    pub fn get_linear_coeffs(&self) -> (f32, f32) {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        let m = (r_max - r_min) as f64 / (d_max - d_min);
        let c = r_min as f64 - m * d_min;
        (m as f32, c as f32)
    }
}
