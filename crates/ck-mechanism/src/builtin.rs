//! Built-in mechanisms.
//!
//! `san_diego_h2` is the nine-species San Diego hydrogen/oxygen mechanism
//! with N2 as an inert diluent. Rate parameters are given in the customary
//! CGS/calorie units and converted to SI on a kmol basis at construction.

use crate::builder::MechanismBuilder;
use crate::description::MechanismDescription;
use crate::nasa7::Nasa7;
use crate::reaction::{Arrhenius, ReactionDescription, Troe};

/// Model name reported by the San Diego kernel.
pub const SAN_DIEGO_H2_NAME: &str = "san_diego_h2";

/// Species order of the San Diego kernel.
pub const SAN_DIEGO_H2_SPECIES: [&str; 9] = ["H2", "H", "O2", "O", "OH", "HO2", "H2O2", "H2O", "N2"];

// Element atomic weights [kg/kmol]; species weights follow from composition.
const W_H: f64 = 1.00794;
const W_O: f64 = 15.9994;
const W_N: f64 = 14.0067;

/// Collision efficiencies shared by the simple three-body reactions.
const THIRD_BODY_EFF: [(&str, f64); 2] = [("H2", 2.5), ("H2O", 12.0)];

fn cgs(a: f64, b: f64, ea_cal: f64, order: i32) -> Arrhenius {
    Arrhenius::from_cgs(a, b, ea_cal, order)
}

fn reversible(
    equation: &str,
    reactants: &[(&str, f64)],
    products: &[(&str, f64)],
    rate: Arrhenius,
) -> ReactionDescription {
    ReactionDescription::reversible(equation, reactants, products, rate)
}

/// The San Diego H2/O2 mechanism: 9 species, 24 reactions (3 duplicates).
pub fn san_diego_h2() -> MechanismDescription {
    let mut b = MechanismBuilder::new(SAN_DIEGO_H2_NAME);

    b.add_species(
        "H2",
        2.0 * W_H,
        Nasa7::new(
            200.0,
            1000.0,
            3500.0,
            [
                2.34433112e+00, 7.98052075e-03, -1.94781510e-05, 2.01572094e-08, -7.37611761e-12,
                -9.17935173e+02, 6.83010238e-01,
            ],
            [
                3.33727920e+00, -4.94024731e-05, 4.99456778e-07, -1.79566394e-10, 2.00255376e-14,
                -9.50158922e+02, -3.20502331e+00,
            ],
        ),
    );
    b.add_species(
        "H",
        W_H,
        Nasa7::new(
            200.0,
            1000.0,
            3500.0,
            [
                2.50000000e+00, 7.05332819e-13, -1.99591964e-15, 2.30081632e-18, -9.27732332e-22,
                2.54736599e+04, -4.46682853e-01,
            ],
            [
                2.50000001e+00, -2.30842973e-11, 1.61561948e-14, -4.73515235e-18, 4.98197357e-22,
                2.54736599e+04, -4.46682914e-01,
            ],
        ),
    );
    b.add_species(
        "O2",
        2.0 * W_O,
        Nasa7::new(
            200.0,
            1000.0,
            3500.0,
            [
                3.78245636e+00, -2.99673416e-03, 9.84730201e-06, -9.68129509e-09, 3.24372837e-12,
                -1.06394356e+03, 3.65767573e+00,
            ],
            [
                3.28253784e+00, 1.48308754e-03, -7.57966669e-07, 2.09470555e-10, -2.16717794e-14,
                -1.08845772e+03, 5.45323129e+00,
            ],
        ),
    );
    b.add_species(
        "O",
        W_O,
        Nasa7::new(
            200.0,
            1000.0,
            3500.0,
            [
                3.16826710e+00, -3.27931884e-03, 6.64306396e-06, -6.12806624e-09, 2.11265971e-12,
                2.91222592e+04, 2.05193346e+00,
            ],
            [
                2.56942078e+00, -8.59741137e-05, 4.19484589e-08, -1.00177799e-11, 1.22833691e-15,
                2.92175791e+04, 4.78433864e+00,
            ],
        ),
    );
    b.add_species(
        "OH",
        W_O + W_H,
        Nasa7::new(
            200.0,
            1000.0,
            6000.0,
            [
                3.99198424e+00, -2.40106655e-03, 4.61664033e-06, -3.87916306e-09, 1.36319502e-12,
                3.36889836e+03, -1.03998477e-01,
            ],
            [
                2.83853033e+00, 1.10741289e-03, -2.94000209e-07, 4.20698729e-11, -2.42289890e-15,
                3.69780808e+03, 5.84494652e+00,
            ],
        ),
    );
    b.add_species(
        "HO2",
        W_H + 2.0 * W_O,
        Nasa7::new(
            200.0,
            1000.0,
            3500.0,
            [
                4.30179801e+00, -4.74912051e-03, 2.11582891e-05, -2.42763894e-08, 9.29225124e-12,
                2.94808040e+02, 3.71666245e+00,
            ],
            [
                4.01721090e+00, 2.23982013e-03, -6.33658150e-07, 1.14246370e-10, -1.07908535e-14,
                1.11856713e+02, 3.78510215e+00,
            ],
        ),
    );
    b.add_species(
        "H2O2",
        2.0 * W_H + 2.0 * W_O,
        Nasa7::new(
            200.0,
            1000.0,
            3500.0,
            [
                4.27611269e+00, -5.42822417e-04, 1.67335701e-05, -2.15770813e-08, 8.62454363e-12,
                -1.77025821e+04, 3.43505074e+00,
            ],
            [
                4.16500285e+00, 4.90831694e-03, -1.90139225e-06, 3.71185986e-10, -2.87908305e-14,
                -1.78617877e+04, 2.91615662e+00,
            ],
        ),
    );
    b.add_species(
        "H2O",
        2.0 * W_H + W_O,
        Nasa7::new(
            200.0,
            1000.0,
            3500.0,
            [
                4.19864056e+00, -2.03643410e-03, 6.52040211e-06, -5.48797062e-09, 1.77197817e-12,
                -3.02937267e+04, -8.49032208e-01,
            ],
            [
                3.03399249e+00, 2.17691804e-03, -1.64072518e-07, -9.70419870e-11, 1.68200992e-14,
                -3.00042971e+04, 4.96677010e+00,
            ],
        ),
    );
    b.add_species(
        "N2",
        2.0 * W_N,
        Nasa7::new(
            200.0,
            1000.0,
            6000.0,
            [
                3.53100528e+00, -1.23660988e-04, -5.02999433e-07, 2.43530612e-09, -1.40881235e-12,
                -1.04697628e+03, 2.96747038e+00,
            ],
            [
                2.95257637e+00, 1.39690040e-03, -4.92631603e-07, 7.86010195e-11, -4.60755204e-15,
                -9.23948688e+02, 5.87188762e+00,
            ],
        ),
    );

    // Chain branching and propagation
    b.add_reaction(reversible(
        "H + O2 <=> OH + O",
        &[("H", 1.0), ("O2", 1.0)],
        &[("OH", 1.0), ("O", 1.0)],
        cgs(3.52e16, -0.7, 17069.79, 2),
    ));
    b.add_reaction(reversible(
        "H2 + O <=> OH + H",
        &[("H2", 1.0), ("O", 1.0)],
        &[("OH", 1.0), ("H", 1.0)],
        cgs(5.06e4, 2.67, 6290.63, 2),
    ));
    b.add_reaction(reversible(
        "H2 + OH <=> H2O + H",
        &[("H2", 1.0), ("OH", 1.0)],
        &[("H2O", 1.0), ("H", 1.0)],
        cgs(1.17e9, 1.3, 3635.28, 2),
    ));
    b.add_reaction(reversible(
        "H2O + O <=> 2 OH",
        &[("H2O", 1.0), ("O", 1.0)],
        &[("OH", 2.0)],
        cgs(7.6, 3.84, 12779.64, 2),
    ));

    // Recombination
    b.add_reaction(
        reversible(
            "2 H + M <=> H2 + M",
            &[("H", 2.0)],
            &[("H2", 1.0)],
            cgs(1.3e18, -1.0, 0.0, 3),
        )
        .with_third_body(&THIRD_BODY_EFF),
    );
    b.add_reaction(
        reversible(
            "H + OH + M <=> H2O + M",
            &[("H", 1.0), ("OH", 1.0)],
            &[("H2O", 1.0)],
            cgs(4.0e22, -2.0, 0.0, 3),
        )
        .with_third_body(&THIRD_BODY_EFF),
    );
    b.add_reaction(
        reversible(
            "2 O + M <=> O2 + M",
            &[("O", 2.0)],
            &[("O2", 1.0)],
            cgs(6.17e15, -0.5, 0.0, 3),
        )
        .with_third_body(&THIRD_BODY_EFF),
    );
    b.add_reaction(
        reversible(
            "H + O + M <=> OH + M",
            &[("H", 1.0), ("O", 1.0)],
            &[("OH", 1.0)],
            cgs(4.71e18, -1.0, 0.0, 3),
        )
        .with_third_body(&THIRD_BODY_EFF),
    );
    b.add_reaction(
        reversible(
            "O + OH + M <=> HO2 + M",
            &[("O", 1.0), ("OH", 1.0)],
            &[("HO2", 1.0)],
            cgs(8.0e15, 0.0, 0.0, 3),
        )
        .with_third_body(&THIRD_BODY_EFF),
    );
    b.add_reaction(
        reversible(
            "H + O2 (+M) <=> HO2 (+M)",
            &[("H", 1.0), ("O2", 1.0)],
            &[("HO2", 1.0)],
            cgs(4.65e12, 0.44, 0.0, 2),
        )
        .with_falloff(
            cgs(5.75e19, -1.4, 0.0, 3),
            &[("H2", 2.5), ("H2O", 16.0)],
            Some(Troe {
                a: 0.5,
                t3: 1e-30,
                t1: 1e30,
                t2: None,
            }),
        ),
    );

    // HO2 consumption
    b.add_reaction(reversible(
        "HO2 + H <=> 2 OH",
        &[("HO2", 1.0), ("H", 1.0)],
        &[("OH", 2.0)],
        cgs(7.08e13, 0.0, 294.93, 2),
    ));
    b.add_reaction(reversible(
        "HO2 + H <=> H2 + O2",
        &[("HO2", 1.0), ("H", 1.0)],
        &[("H2", 1.0), ("O2", 1.0)],
        cgs(1.66e13, 0.0, 822.9, 2),
    ));
    b.add_reaction(reversible(
        "HO2 + H <=> H2O + O",
        &[("HO2", 1.0), ("H", 1.0)],
        &[("H2O", 1.0), ("O", 1.0)],
        cgs(3.1e13, 0.0, 1720.84, 2),
    ));
    b.add_reaction(reversible(
        "HO2 + O <=> OH + O2",
        &[("HO2", 1.0), ("O", 1.0)],
        &[("OH", 1.0), ("O2", 1.0)],
        cgs(2.0e13, 0.0, 0.0, 2),
    ));
    b.add_reaction(reversible(
        "HO2 + OH <=> H2O + O2",
        &[("HO2", 1.0), ("OH", 1.0)],
        &[("H2O", 1.0), ("O2", 1.0)],
        cgs(7.0e12, 0.0, -1094.65, 2),
    ));
    b.add_reaction(reversible(
        "HO2 + OH <=> H2O + O2",
        &[("HO2", 1.0), ("OH", 1.0)],
        &[("H2O", 1.0), ("O2", 1.0)],
        cgs(4.5e14, 0.0, 10929.73, 2),
    ));

    // H2O2 formation and consumption
    b.add_reaction(
        reversible(
            "2 OH (+M) <=> H2O2 (+M)",
            &[("OH", 2.0)],
            &[("H2O2", 1.0)],
            cgs(9.55e13, -0.27, 0.0, 2),
        )
        .with_falloff(
            cgs(2.76e25, -3.2, 0.0, 3),
            &[("H2", 2.5), ("H2O", 6.0)],
            Some(Troe {
                a: 0.57,
                t3: 1e30,
                t1: 1e-30,
                t2: None,
            }),
        ),
    );
    b.add_reaction(reversible(
        "2 HO2 <=> H2O2 + O2",
        &[("HO2", 2.0)],
        &[("H2O2", 1.0), ("O2", 1.0)],
        cgs(1.03e14, 0.0, 11042.07, 2),
    ));
    b.add_reaction(reversible(
        "2 HO2 <=> H2O2 + O2",
        &[("HO2", 2.0)],
        &[("H2O2", 1.0), ("O2", 1.0)],
        cgs(1.94e11, 0.0, -1408.94, 2),
    ));
    b.add_reaction(reversible(
        "H2O2 + H <=> HO2 + H2",
        &[("H2O2", 1.0), ("H", 1.0)],
        &[("HO2", 1.0), ("H2", 1.0)],
        cgs(2.3e13, 0.0, 7950.05, 2),
    ));
    b.add_reaction(reversible(
        "H2O2 + H <=> H2O + OH",
        &[("H2O2", 1.0), ("H", 1.0)],
        &[("H2O", 1.0), ("OH", 1.0)],
        cgs(1.0e13, 0.0, 3585.09, 2),
    ));
    b.add_reaction(reversible(
        "H2O2 + OH <=> H2O + HO2",
        &[("H2O2", 1.0), ("OH", 1.0)],
        &[("H2O", 1.0), ("HO2", 1.0)],
        cgs(1.74e12, 0.0, 318.12, 2),
    ));
    b.add_reaction(reversible(
        "H2O2 + OH <=> H2O + HO2",
        &[("H2O2", 1.0), ("OH", 1.0)],
        &[("H2O", 1.0), ("HO2", 1.0)],
        cgs(7.59e13, 0.0, 7272.94, 2),
    ));
    b.add_reaction(reversible(
        "H2O2 + O <=> HO2 + OH",
        &[("H2O2", 1.0), ("O", 1.0)],
        &[("HO2", 1.0), ("OH", 1.0)],
        cgs(9.63e6, 2.0, 3991.4, 2),
    ));

    b.finish()
}
