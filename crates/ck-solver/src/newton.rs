//! Scalar Newton inversion of the caloric equation of state.

use ck_mechanism::ThermoData;
use ck_thermo::{EnergyMode, eos};
use tracing::{debug, trace};

use crate::error::{FailureReason, SolverError, SolverResult};

/// Newton solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NewtonConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the residual, in target units (J/kg)
    pub abs_tol: f64,
    /// Convergence threshold on the temperature step (K)
    pub temperature_tol: f64,
    /// Smallest heat capacity accepted as a derivative (J/(kg·K))
    pub min_derivative: f64,
    /// Keep a sign-change bracket and bisect when Newton leaves it
    pub bracket_fallback: bool,
    /// Guesses up to this far outside the valid range are clamped into it (K)
    pub guess_margin: f64,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            abs_tol: 1e-6,
            temperature_tol: 1e-10,
            min_derivative: 1e-12,
            bracket_fallback: false,
            guess_margin: 100.0,
        }
    }
}

/// Converged temperature inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSolution {
    /// Temperature [K]
    pub temperature: f64,
    /// `f(T) − target` at `temperature`
    pub residual: f64,
    /// Newton steps taken
    pub iterations: usize,
}

fn fail(temperature: f64, residual: f64, iterations: usize, reason: FailureReason) -> SolverError {
    debug!(temperature, residual, iterations, %reason, "temperature inversion failed");
    SolverError::TemperatureInversionFailed {
        temperature,
        residual,
        iterations,
        reason,
    }
}

/// Sign-change bracket `[lo, hi]` with `f(lo) < target < f(hi)`.
fn initial_bracket(
    thermo: &ThermoData,
    target: f64,
    y: &[f64],
    mode: EnergyMode,
) -> Option<(f64, f64)> {
    let (t_min, t_max) = thermo.temperature_range();
    let r_lo = eos::energy(mode, thermo, t_min, y) - target;
    let r_hi = eos::energy(mode, thermo, t_max, y) - target;
    (r_lo <= 0.0 && r_hi >= 0.0).then_some((t_min, t_max))
}

/// Find `T` such that `energy(mode, T, y) = target`, starting from `t_guess`.
///
/// A guess within `config.guess_margin` of `thermo.temperature_range()` is
/// clamped into the range; one further out fails before iterating. Every
/// iterate must stay inside the range. Fails with
/// `SolverError::TemperatureInversionFailed` on iteration cap, degenerate
/// heat capacity, non-finite values or leaving the range.
pub fn solve_temperature(
    thermo: &ThermoData,
    target: f64,
    t_guess: f64,
    y: &[f64],
    mode: EnergyMode,
    config: &NewtonConfig,
) -> SolverResult<TemperatureSolution> {
    let (t_min, t_max) = thermo.temperature_range();
    let residual = |t: f64| eos::energy(mode, thermo, t, y) - target;

    if !t_guess.is_finite() || !target.is_finite() {
        return Err(fail(t_guess, f64::NAN, 0, FailureReason::NonFinite));
    }
    if t_guess < t_min - config.guess_margin || t_guess > t_max + config.guess_margin {
        return Err(fail(t_guess, residual(t_guess), 0, FailureReason::OutOfRange));
    }

    let mut bracket = if config.bracket_fallback {
        initial_bracket(thermo, target, y, mode)
    } else {
        None
    };

    let mut t = t_guess.clamp(t_min, t_max);
    for iter in 0..config.max_iterations {
        let r = residual(t);
        let d = eos::heat_capacity(mode, thermo, t, y);

        if !r.is_finite() || !d.is_finite() {
            return Err(fail(t, r, iter, FailureReason::NonFinite));
        }
        if d.abs() < config.min_derivative {
            return Err(fail(t, r, iter, FailureReason::DegenerateDerivative));
        }
        if r.abs() < config.abs_tol {
            return Ok(TemperatureSolution {
                temperature: t,
                residual: r,
                iterations: iter,
            });
        }

        let step = r / d;
        let mut t_next = t - step;
        if let Some((lo, hi)) = bracket.as_mut() {
            if (r < 0.0) == (d > 0.0) {
                *lo = t;
            } else {
                *hi = t;
            }
            if !(t_next > *lo && t_next < *hi) {
                t_next = 0.5 * (*lo + *hi);
            }
        }
        trace!(iteration = iter, t, residual = r, step, "newton iteration");

        if !t_next.is_finite() {
            return Err(fail(t_next, r, iter + 1, FailureReason::NonFinite));
        }
        if t_next < t_min || t_next > t_max {
            return Err(fail(t_next, r, iter + 1, FailureReason::OutOfRange));
        }
        if (t_next - t).abs() < config.temperature_tol {
            return Ok(TemperatureSolution {
                temperature: t_next,
                residual: residual(t_next),
                iterations: iter + 1,
            });
        }
        t = t_next;
    }

    Err(fail(
        t,
        residual(t),
        config.max_iterations,
        FailureReason::MaxIterations,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ck_mechanism::builtin;

    fn san_diego() -> ThermoData {
        builtin::san_diego_h2().compile().unwrap()
    }

    fn uniform() -> Vec<f64> {
        vec![1.0 / 9.0; 9]
    }

    #[test]
    fn default_config() {
        let cfg = NewtonConfig::default();
        assert_eq!(cfg.max_iterations, 100);
        assert_eq!(cfg.abs_tol, 1e-6);
        assert_eq!(cfg.temperature_tol, 1e-10);
        assert!(!cfg.bracket_fallback);
        assert_eq!(cfg.guess_margin, 100.0);
    }

    #[test]
    fn inverts_internal_energy() {
        let thermo = san_diego();
        let y = uniform();
        let e = eos::specific_internal_energy(&thermo, 1700.0, &y);
        let sol = solve_temperature(
            &thermo,
            e,
            1500.0,
            &y,
            EnergyMode::InternalEnergy,
            &NewtonConfig::default(),
        )
        .unwrap();
        assert!((sol.temperature - 1700.0).abs() < 1e-6);
        assert!(sol.iterations > 0);
    }

    #[test]
    fn inverts_enthalpy() {
        let thermo = san_diego();
        let y = uniform();
        let h = eos::specific_enthalpy(&thermo, 650.0, &y);
        let sol = solve_temperature(
            &thermo,
            h,
            700.0,
            &y,
            EnergyMode::Enthalpy,
            &NewtonConfig::default(),
        )
        .unwrap();
        assert!((sol.temperature - 650.0).abs() < 1e-6);
    }

    #[test]
    fn exact_guess_converges_immediately() {
        let thermo = san_diego();
        let y = uniform();
        let e = eos::specific_internal_energy(&thermo, 800.0, &y);
        let sol = solve_temperature(
            &thermo,
            e,
            800.0,
            &y,
            EnergyMode::InternalEnergy,
            &NewtonConfig::default(),
        )
        .unwrap();
        assert_eq!(sol.iterations, 0);
        assert_eq!(sol.temperature, 800.0);
    }

    #[test]
    fn guess_outside_range_fails() {
        let thermo = san_diego();
        let err = solve_temperature(
            &thermo,
            2.0e7,
            10_000.0,
            &uniform(),
            EnergyMode::InternalEnergy,
            &NewtonConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.reason(), FailureReason::OutOfRange);
        let SolverError::TemperatureInversionFailed { iterations, .. } = err;
        assert_eq!(iterations, 0);
    }

    #[test]
    fn guess_just_outside_range_is_clamped() {
        let thermo = san_diego();
        let y = uniform();
        let (t_min, t_max) = thermo.temperature_range();
        for (t, delta) in [(t_min + 1.0, -5.0), (t_max - 1.0, 5.0), (t_min, -99.0)] {
            for mode in [EnergyMode::InternalEnergy, EnergyMode::Enthalpy] {
                let target = eos::energy(mode, &thermo, t, &y);
                let sol = solve_temperature(
                    &thermo,
                    target,
                    t + delta,
                    &y,
                    mode,
                    &NewtonConfig::default(),
                )
                .unwrap();
                assert!((sol.temperature - t).abs() < 1e-6, "{mode:?} at {t}");
            }
        }
    }

    #[test]
    fn guess_beyond_margin_fails() {
        let thermo = san_diego();
        let (_, t_max) = thermo.temperature_range();
        let cfg = NewtonConfig::default();
        let err = solve_temperature(
            &thermo,
            2.0e7,
            t_max + cfg.guess_margin + 1.0,
            &uniform(),
            EnergyMode::InternalEnergy,
            &cfg,
        )
        .unwrap_err();
        assert_eq!(err.reason(), FailureReason::OutOfRange);
    }

    #[test]
    fn all_zero_composition_is_degenerate() {
        let thermo = san_diego();
        let err = solve_temperature(
            &thermo,
            2.0e7,
            300.0,
            &[0.0; 9],
            EnergyMode::InternalEnergy,
            &NewtonConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.reason(), FailureReason::DegenerateDerivative);
    }

    #[test]
    fn nan_target_fails() {
        let thermo = san_diego();
        let err = solve_temperature(
            &thermo,
            f64::NAN,
            300.0,
            &uniform(),
            EnergyMode::Enthalpy,
            &NewtonConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.reason(), FailureReason::NonFinite);
    }

    #[test]
    fn iteration_cap() {
        let thermo = san_diego();
        let y = uniform();
        let e = eos::specific_internal_energy(&thermo, 2500.0, &y);
        let cfg = NewtonConfig {
            max_iterations: 1,
            ..NewtonConfig::default()
        };
        let err =
            solve_temperature(&thermo, e, 1200.0, &y, EnergyMode::InternalEnergy, &cfg)
                .unwrap_err();
        assert_eq!(err.reason(), FailureReason::MaxIterations);
    }

    #[test]
    fn unreachable_target_leaves_range() {
        let thermo = san_diego();
        let y = uniform();
        let e_max = eos::specific_internal_energy(&thermo, 3500.0, &y);
        let err = solve_temperature(
            &thermo,
            e_max * 1.5,
            3000.0,
            &y,
            EnergyMode::InternalEnergy,
            &NewtonConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.reason(), FailureReason::OutOfRange);
    }

    #[test]
    fn bracket_fallback_keeps_iterates_in_range() {
        let thermo = san_diego();
        let y = uniform();
        let (t_min, t_max) = thermo.temperature_range();
        // c_v grows with T, so the first Newton step from the bottom of the
        // range toward a root near the top overshoots past t_max.
        let t_root = t_max - 50.0;
        let target = eos::specific_internal_energy(&thermo, t_root, &y);
        let plain = solve_temperature(
            &thermo,
            target,
            t_min,
            &y,
            EnergyMode::InternalEnergy,
            &NewtonConfig::default(),
        );
        let guarded = solve_temperature(
            &thermo,
            target,
            t_min,
            &y,
            EnergyMode::InternalEnergy,
            &NewtonConfig {
                bracket_fallback: true,
                ..NewtonConfig::default()
            },
        )
        .unwrap();
        assert!((guarded.temperature - t_root).abs() < 1e-6);
        if let Err(err) = plain {
            assert_eq!(err.reason(), FailureReason::OutOfRange);
        }
    }
}
