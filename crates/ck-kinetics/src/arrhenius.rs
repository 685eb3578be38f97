//! Modified Arrhenius rate constants.

use ck_core::constants::R_UNIVERSAL;
use ck_mechanism::Arrhenius;

/// Largest exponent passed to `exp`; `e^690` is still finite in f64.
pub const MAX_EXP_ARG: f64 = 690.0;

/// `exp(x)` with `x` clamped to `[-MAX_EXP_ARG, MAX_EXP_ARG]`. NaN passes through.
#[inline]
pub(crate) fn clamped_exp(x: f64) -> f64 {
    let x = if x > MAX_EXP_ARG {
        MAX_EXP_ARG
    } else if x < -MAX_EXP_ARG {
        -MAX_EXP_ARG
    } else {
        x
    };
    x.exp()
}

/// `k = A·T^b·exp(−Ea/(R·T))`, evaluated in log space.
///
/// Temperatures at or below zero are lifted to the smallest positive f64 so
/// that `T → 0` gives a finite (usually zero) rate instead of overflowing.
#[inline]
pub fn rate_constant(rate: &Arrhenius, t: f64) -> f64 {
    if rate.a == 0.0 {
        return 0.0;
    }
    let t = if t < f64::MIN_POSITIVE { f64::MIN_POSITIVE } else { t };
    let mut arg = rate.a.ln();
    if rate.b != 0.0 {
        arg += rate.b * t.ln();
    }
    if rate.ea != 0.0 {
        arg -= rate.ea / (R_UNIVERSAL * t);
    }
    clamped_exp(arg)
}
