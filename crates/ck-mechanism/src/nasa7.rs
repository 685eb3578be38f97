//! NASA 7-coefficient thermodynamic polynomials.
//!
//! Each species carries two coefficient sets `a0..a6`, one for
//! `[t_low, t_mid)` and one for `[t_mid, t_high]`:
//!
//! ```text
//! cp/R  = a0 + a1 T + a2 T² + a3 T³ + a4 T⁴
//! h/RT  = a0 + a1 T/2 + a2 T²/3 + a3 T³/4 + a4 T⁴/5 + a5/T
//! s/R   = a0 ln T + a1 T + a2 T²/2 + a3 T³/3 + a4 T⁴/4 + a6
//! ```
//!
//! Outside the fitted range the nearest piece is extrapolated. Continuity at
//! `t_mid` is a property of the data, not something evaluation enforces.

/// Two-range NASA-7 polynomial.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nasa7 {
    /// Lower bound of the low-temperature piece [K]
    pub t_low: f64,
    /// Boundary between the two pieces [K]
    pub t_mid: f64,
    /// Upper bound of the high-temperature piece [K]
    pub t_high: f64,
    /// Coefficients valid on `[t_low, t_mid)`
    pub low: [f64; 7],
    /// Coefficients valid on `[t_mid, t_high]`
    pub high: [f64; 7],
}

impl Nasa7 {
    pub fn new(t_low: f64, t_mid: f64, t_high: f64, low: [f64; 7], high: [f64; 7]) -> Self {
        Self {
            t_low,
            t_mid,
            t_high,
            low,
            high,
        }
    }

    /// Coefficient set for the piece containing `t`.
    #[inline]
    pub fn coefficients(&self, t: f64) -> &[f64; 7] {
        if t < self.t_mid { &self.low } else { &self.high }
    }

    /// Whether `t` lies inside the fitted range.
    pub fn contains(&self, t: f64) -> bool {
        t >= self.t_low && t <= self.t_high
    }

    /// Dimensionless heat capacity `cp/R`.
    #[inline]
    pub fn cp_r(&self, t: f64) -> f64 {
        let a = self.coefficients(t);
        a[0] + t * (a[1] + t * (a[2] + t * (a[3] + t * a[4])))
    }

    /// Dimensionless enthalpy `h/(RT)`.
    #[inline]
    pub fn h_rt(&self, t: f64) -> f64 {
        let a = self.coefficients(t);
        a[0] + t * (a[1] / 2.0 + t * (a[2] / 3.0 + t * (a[3] / 4.0 + t * a[4] / 5.0))) + a[5] / t
    }

    /// Dimensionless standard-state entropy `s°/R`.
    #[inline]
    pub fn s_r(&self, t: f64) -> f64 {
        let a = self.coefficients(t);
        a[0] * t.ln() + t * (a[1] + t * (a[2] / 2.0 + t * (a[3] / 3.0 + t * a[4] / 4.0))) + a[6]
    }

    /// Dimensionless standard-state Gibbs energy `g°/(RT) = h/RT − s°/R`.
    #[inline]
    pub fn g_rt(&self, t: f64) -> f64 {
        self.h_rt(t) - self.s_r(t)
    }

    /// True when every coefficient and range bound is finite.
    pub fn is_finite(&self) -> bool {
        self.t_low.is_finite()
            && self.t_mid.is_finite()
            && self.t_high.is_finite()
            && self.low.iter().chain(self.high.iter()).all(|c| c.is_finite())
    }
}
