//! Internal-energy / enthalpy branch selector.

/// Which caloric quantity a temperature inversion targets.
///
/// Internal energy pairs with `c_v` as its temperature derivative, enthalpy
/// with `c_p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EnergyMode {
    /// Specific internal energy `e` [J/kg] (density-based solvers)
    #[default]
    InternalEnergy,
    /// Specific enthalpy `h` [J/kg] (pressure-based solvers)
    Enthalpy,
}

impl EnergyMode {
    pub fn label(self) -> &'static str {
        match self {
            EnergyMode::InternalEnergy => "internal energy",
            EnergyMode::Enthalpy => "enthalpy",
        }
    }
}

impl std::str::FromStr for EnergyMode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "e" | "energy" | "internal_energy" | "internal-energy" => {
                Ok(EnergyMode::InternalEnergy)
            }
            "h" | "enthalpy" => Ok(EnergyMode::Enthalpy),
            _ => Err("unknown energy mode"),
        }
    }
}
