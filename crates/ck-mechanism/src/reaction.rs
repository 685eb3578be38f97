//! Reaction descriptions and rate-law parameters.

/// Modified Arrhenius rate law `k = A·T^b·exp(−Ea/(R·T))`.
///
/// Units are SI on a kmol basis: `A` in `(m³/kmol)^(n−1)/s` for a reaction
/// of overall order `n`, `Ea` in J/kmol.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrhenius {
    /// Pre-exponential factor
    pub a: f64,
    /// Temperature exponent
    pub b: f64,
    /// Activation energy [J/kmol]
    pub ea: f64,
}

impl Arrhenius {
    pub const fn new(a: f64, b: f64, ea: f64) -> Self {
        Self { a, b, ea }
    }

    /// Convert from the customary CGS/calorie form (`cm`, `mol`, `cal/mol`).
    ///
    /// `order` is the overall molecularity of the rate expression, counting
    /// the third body for three-body and low-pressure falloff rates.
    pub fn from_cgs(a: f64, b: f64, ea_cal_per_mol: f64, order: i32) -> Self {
        use ck_core::units::constants::CAL_TO_J;
        // cm³/mol -> m³/kmol is a factor 1e-3 per concentration power
        let a_si = a * 1e-3_f64.powi(order - 1);
        Self::new(a_si, b, ea_cal_per_mol * CAL_TO_J * 1e3)
    }

    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.ea.is_finite()
    }
}

/// Troe falloff broadening parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Troe {
    pub a: f64,
    pub t3: f64,
    pub t1: f64,
    /// Optional fourth parameter; absent means the `exp(−T2/T)` term is dropped
    pub t2: Option<f64>,
}

/// Collision / pressure-dependence model of a reaction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReactionKind {
    /// Plain mass-action reaction.
    Elementary,
    /// `A + B + M <=> AB + M`: rate of progress scaled by `[M]`.
    ThreeBody {
        /// Collision efficiencies by species name; unlisted species use 1.0
        efficiencies: Vec<(String, f64)>,
    },
    /// `A + B (+M) <=> AB (+M)`: Lindemann blending of `low` and the
    /// reaction's high-pressure rate, optionally broadened by Troe.
    Falloff {
        low: Arrhenius,
        efficiencies: Vec<(String, f64)>,
        troe: Option<Troe>,
    },
}

impl ReactionKind {
    /// Collision efficiencies, if the reaction has a third body.
    pub fn efficiencies(&self) -> Option<&[(String, f64)]> {
        match self {
            ReactionKind::Elementary => None,
            ReactionKind::ThreeBody { efficiencies } => Some(efficiencies),
            ReactionKind::Falloff { efficiencies, .. } => Some(efficiencies),
        }
    }
}

/// One reaction of a mechanism, referencing species by name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactionDescription {
    /// Human-readable equation, used in diagnostics only
    pub equation: String,
    pub reactants: Vec<(String, f64)>,
    pub products: Vec<(String, f64)>,
    /// Forward (high-pressure, for falloff) rate law
    pub rate: Arrhenius,
    pub reversible: bool,
    pub kind: ReactionKind,
}

impl ReactionDescription {
    /// Reversible elementary reaction.
    pub fn reversible(
        equation: impl Into<String>,
        reactants: &[(&str, f64)],
        products: &[(&str, f64)],
        rate: Arrhenius,
    ) -> Self {
        Self {
            equation: equation.into(),
            reactants: to_owned_side(reactants),
            products: to_owned_side(products),
            rate,
            reversible: true,
            kind: ReactionKind::Elementary,
        }
    }

    /// Irreversible elementary reaction.
    pub fn irreversible(
        equation: impl Into<String>,
        reactants: &[(&str, f64)],
        products: &[(&str, f64)],
        rate: Arrhenius,
    ) -> Self {
        Self {
            reversible: false,
            ..Self::reversible(equation, reactants, products, rate)
        }
    }

    /// Attach third-body enhancement.
    pub fn with_third_body(mut self, efficiencies: &[(&str, f64)]) -> Self {
        self.kind = ReactionKind::ThreeBody {
            efficiencies: to_owned_side(efficiencies),
        };
        self
    }

    /// Attach falloff pressure dependence.
    pub fn with_falloff(
        mut self,
        low: Arrhenius,
        efficiencies: &[(&str, f64)],
        troe: Option<Troe>,
    ) -> Self {
        self.kind = ReactionKind::Falloff {
            low,
            efficiencies: to_owned_side(efficiencies),
            troe,
        };
        self
    }
}

fn to_owned_side(side: &[(&str, f64)]) -> Vec<(String, f64)> {
    side.iter().map(|(s, nu)| ((*s).to_string(), *nu)).collect()
}
