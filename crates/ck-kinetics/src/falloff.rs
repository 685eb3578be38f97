//! Pressure-dependent (falloff) rate constants.

use ck_mechanism::{Arrhenius, Troe};

use crate::arrhenius::rate_constant;

/// Effective rate constant of a falloff reaction at third-body
/// concentration `m` [kmol/m³].
///
/// `k = k∞ · Pr/(1 + Pr) · F` with `Pr = k0·[M]/k∞`; `F = 1` without Troe
/// parameters (Lindemann form).
pub fn lindemann_rate(
    high: &Arrhenius,
    low: &Arrhenius,
    troe: Option<&Troe>,
    t: f64,
    m: f64,
) -> f64 {
    let k_inf = rate_constant(high, t);
    if k_inf == 0.0 {
        return 0.0;
    }
    let k0 = rate_constant(low, t);
    let pr = k0 * m / k_inf;
    let f = match troe {
        Some(troe) => troe_broadening(troe, t, pr),
        None => 1.0,
    };
    k_inf * (pr / (1.0 + pr)) * f
}

/// Troe broadening factor `F(T, Pr)`.
pub fn troe_broadening(troe: &Troe, t: f64, pr: f64) -> f64 {
    if pr <= 0.0 {
        return 1.0;
    }
    let mut f_cent = (1.0 - troe.a) * (-t / troe.t3).exp() + troe.a * (-t / troe.t1).exp();
    if let Some(t2) = troe.t2 {
        f_cent += (-t2 / t).exp();
    }
    let log_fc = f_cent.max(f64::MIN_POSITIVE).log10();
    let c = -0.4 - 0.67 * log_fc;
    let n = 0.75 - 1.27 * log_fc;
    let x = pr.log10() + c;
    let f1 = x / (n - 0.14 * x);
    10f64.powf(log_fc / (1.0 + f1 * f1))
}
