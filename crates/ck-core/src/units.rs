// ck-core/src/units.rs

use uom::si::f64::{
    MassDensity as UomMassDensity, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

/// Specific energy (internal energy or enthalpy) [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnergy = f64;

/// Specific heat capacity [J/(kg·K)].
pub type SpecHeatCapacity = f64;

/// Molar concentration [kmol/m³].
pub type Concentration = f64;

/// Molar production rate [kmol/(m³·s)].
pub type MolarRate = f64;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

pub mod constants {
    /// Universal gas constant [J/(kmol·K)].
    pub const R_UNIVERSAL: f64 = 8_314.462_618_153_24;

    /// Standard-state pressure used by the equilibrium constants [Pa].
    pub const P_ATM: f64 = 101_325.0;

    /// Thermochemical calorie [J].
    pub const CAL_TO_J: f64 = 4.184;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
        let _rho = kgpm3(1.2);
    }

    #[test]
    fn constructors_store_si_values() {
        assert_eq!(k(300.0).value, 300.0);
        assert_eq!(pa(101_325.0).value, 101_325.0);
        assert_eq!(kgpm3(0.204).value, 0.204);
    }
}
