use crate::{CkError, CkResult};

/// Floating point type used throughout the kernel
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Relative difference `|a - b| / max(|a|, |b|)`, zero when both are zero.
pub fn relative_difference(a: Real, b: Real) -> Real {
    let scale = a.abs().max(b.abs());
    if scale == 0.0 {
        0.0
    } else {
        (a - b).abs() / scale
    }
}

/// Pass `v` through if finite, otherwise `CkError::NonFinite`.
pub fn ensure_finite(v: Real, what: &'static str) -> CkResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CkError::NonFinite { what, value: v })
    }
}

/// Integer powers go through `powi`, everything else through `powf`.
///
/// Stoichiometric exponents are almost always small integers, and `powi`
/// is both faster and exact for them.
#[inline]
pub fn stoich_pow(base: Real, exponent: Real) -> Real {
    if exponent == 1.0 {
        base
    } else if exponent.fract() == 0.0 && exponent.abs() <= i32::MAX as Real {
        base.powi(exponent as i32)
    } else {
        base.powf(exponent)
    }
}
