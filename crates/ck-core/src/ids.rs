use core::fmt;

/// Compact, stable index into one of the mechanism arenas.
///
/// Species and reactions live in flat arrays; an `Id` is just the position
/// in that array. The wrapper keeps species and reaction indices from being
/// mixed up with plain counters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Id(u32);

impl Id {
    /// Create an Id from a 0-based index.
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Recover the 0-based index.
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Index as `usize`, for slicing into arenas.
    #[inline]
    pub const fn ix(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Domain-specific ID aliases for clarity (no runtime cost).
pub type SpeciesId = Id;
pub type ReactionId = Id;
