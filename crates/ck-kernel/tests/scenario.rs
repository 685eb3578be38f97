//! End-to-end scenarios on the built-in hydrogen mechanism.

use ck_kernel::{
    CellInput, EnergyMode, Kernel, KernelConfig, KernelError, MixtureState, builtin,
};
use ck_solver::{FailureReason, NewtonConfig};

fn kernel() -> Kernel {
    Kernel::new(&builtin::san_diego_h2()).unwrap()
}

fn uniform() -> Vec<f64> {
    vec![1.0 / 9.0; 9]
}

fn inversion_reason(err: KernelError) -> FailureReason {
    match err {
        KernelError::TemperatureInversionFailed(e) => e.reason(),
        other => panic!("expected inversion failure, got {other:?}"),
    }
}

#[test]
fn identity_of_san_diego() {
    let k = kernel();
    assert_eq!(k.num_species(), 9);
    assert_eq!(k.model_name(), "san_diego_h2");
    let names: Vec<&str> = k.species_names().iter().map(String::as_str).collect();
    assert_eq!(names, ["H2", "H", "O2", "O", "OH", "HO2", "H2O2", "H2O", "N2"]);
}

#[test]
fn reference_cell_temperature() {
    let k = kernel();
    let y = uniform();
    let t = k
        .get_temperature(2.3624875e7, 320.0, &y, EnergyMode::InternalEnergy)
        .unwrap();
    // 300.06 K with these NASA fits and element-derived weights.
    assert!((t - 300.0).abs() < 0.1, "T = {t}");

    let p = k.pressure(0.2040, t, &y).unwrap();
    assert!((p - 101_325.0).abs() < 50.0, "p = {p}");
}

#[test]
fn own_energy_round_trips_at_300k() {
    let k = kernel();
    let y = uniform();
    let e = k.specific_internal_energy(300.0, &y).unwrap();
    let t = k
        .get_temperature(e, 320.0, &y, EnergyMode::InternalEnergy)
        .unwrap();
    assert!((t - 300.0).abs() < 1e-6);

    let h = k.specific_enthalpy(300.0, &y).unwrap();
    let t = k.get_temperature(h, 280.0, &y, EnergyMode::Enthalpy).unwrap();
    assert!((t - 300.0).abs() < 1e-6);
}

#[test]
fn far_out_of_range_guess_fails() {
    let k = kernel();
    let err = k
        .get_temperature(2.3624875e7, 10_000.0, &uniform(), EnergyMode::InternalEnergy)
        .unwrap_err();
    assert_eq!(inversion_reason(err), FailureReason::OutOfRange);
}

#[test]
fn guess_just_below_the_table_is_clamped() {
    let k = kernel();
    let y = uniform();
    let e = k.specific_internal_energy(201.0, &y).unwrap();
    let t = k
        .get_temperature(e, 196.0, &y, EnergyMode::InternalEnergy)
        .unwrap();
    assert!((t - 201.0).abs() < 1e-6);
}

#[test]
fn all_zero_composition_fails() {
    let k = kernel();
    let err = k
        .get_temperature(2.3624875e7, 320.0, &[0.0; 9], EnergyMode::InternalEnergy)
        .unwrap_err();
    assert_eq!(inversion_reason(err), FailureReason::DegenerateDerivative);
}

#[test]
fn repeated_calls_are_bitwise_identical() {
    let k = kernel();
    let y = uniform();
    let a = k.net_production_rates(0.2040, 1500.0, &y).unwrap();
    let b = k.net_production_rates(0.2040, 1500.0, &y).unwrap();
    let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a), bits(&b));

    let clone = k.clone();
    let c = clone.net_production_rates(0.2040, 1500.0, &y).unwrap();
    assert_eq!(bits(&a), bits(&c));
}

#[test]
fn state_based_queries_match_slices() {
    let k = kernel();
    let state = MixtureState::from_si(0.5, 1800.0, uniform());
    assert_eq!(
        k.net_production_rates_of(&state).unwrap(),
        k.net_production_rates(0.5, 1800.0, &uniform()).unwrap()
    );
    assert_eq!(
        k.pressure_of(&state).unwrap().value,
        k.pressure(0.5, 1800.0, &uniform()).unwrap()
    );
}

#[test]
fn pure_nitrogen_has_no_chemistry() {
    let k = kernel();
    let mut y = vec![0.0; 9];
    y[k.species_index("N2").unwrap().ix()] = 1.0;
    let w = k.net_production_rates(1.0, 2000.0, &y).unwrap();
    assert!(w.iter().all(|&v| v == 0.0));
    let q = k.rates_of_progress(1.0, 2000.0, &y).unwrap();
    assert_eq!(q.len(), 24);
}

#[test]
fn hot_radical_pool_consumes_h_atoms() {
    let k = kernel();
    let w = k.net_production_rates(0.2040, 1500.0, &uniform()).unwrap();
    let h = k.species_index("H").unwrap().ix();
    assert!(w[h] < 0.0);
}

#[test]
fn mixture_molar_mass_and_concentrations() {
    let k = kernel();
    let y = uniform();
    let w = k.mixture_molar_mass(&y).unwrap();
    let c = k.concentrations(0.2040, &y).unwrap();
    let total: f64 = c.iter().sum();
    assert!((total - 0.2040 / w).abs() < 1e-12);
    assert!(k.specific_heat_cp(300.0, &y).unwrap() > k.specific_heat_cv(300.0, &y).unwrap());
}

#[test]
fn configured_iteration_cap_is_honoured() {
    let config = KernelConfig {
        newton: NewtonConfig {
            max_iterations: 1,
            ..NewtonConfig::default()
        },
    };
    let k = Kernel::with_config(&builtin::san_diego_h2(), config).unwrap();
    let y = uniform();
    let e = k.specific_internal_energy(2000.0, &y).unwrap();
    let err = k
        .evaluate(&CellInput {
            rho: 0.2,
            energy: e,
            t_guess: 1500.0,
            y,
            mode: EnergyMode::InternalEnergy,
        })
        .unwrap_err();
    assert_eq!(inversion_reason(err), FailureReason::MaxIterations);
}
