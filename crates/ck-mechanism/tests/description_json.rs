//! JSON interchange of mechanism descriptions.

use ck_mechanism::{MechanismDescription, ReactionKind, builtin};

#[test]
fn builtin_round_trips_through_json() {
    let desc = builtin::san_diego_h2();
    let text = serde_json::to_string(&desc).unwrap();
    let back: MechanismDescription = serde_json::from_str(&text).unwrap();
    assert_eq!(back.name, desc.name);
    assert_eq!(back.species.len(), desc.species.len());
    assert_eq!(back.reactions.len(), desc.reactions.len());
    assert!(back.compile().is_ok());
}

#[test]
fn hand_written_description() {
    let text = r#"{
        "name": "toy",
        "species": [
            {"name": "A", "molar_mass": 2.0,
             "thermo": {"t_low": 200.0, "t_mid": 1000.0, "t_high": 3000.0,
                        "low": [2.5, 0, 0, 0, 0, 0, 0], "high": [2.5, 0, 0, 0, 0, 0, 0]}},
            {"name": "A2", "molar_mass": 4.0,
             "thermo": {"t_low": 200.0, "t_mid": 1000.0, "t_high": 3000.0,
                        "low": [3.5, 0, 0, 0, 0, -1000, 0], "high": [3.5, 0, 0, 0, 0, -1000, 0]}}
        ],
        "reactions": [
            {"equation": "2 A + M <=> A2 + M",
             "reactants": [["A", 2.0]], "products": [["A2", 1.0]],
             "rate": {"a": 1e12, "b": -1.0, "ea": 0.0},
             "reversible": true,
             "kind": {"ThreeBody": {"efficiencies": [["A2", 2.0]]}}}
        ]
    }"#;
    let desc: MechanismDescription = serde_json::from_str(text).unwrap();
    assert!(matches!(desc.reactions[0].kind, ReactionKind::ThreeBody { .. }));
    let thermo = desc.compile().unwrap();
    assert_eq!(thermo.num_species(), 2);
    assert_eq!(thermo.temperature_range(), (200.0, 3000.0));
}
