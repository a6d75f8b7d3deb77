//! The fifteen standard andness levels.

/// Named andness presets, evenly spaced at steps of 1/14 from full
/// disjunction (`D`, α = 0) to full conjunction (`C`, α = 1).
///
/// # Examples
///
/// ```
/// use u_lsp::aggregation::AndnessLevel;
///
/// assert_eq!(AndnessLevel::Neutrality.andness(), 0.5);
/// assert_eq!(AndnessLevel::from_symbol("HC+"), Some(AndnessLevel::HighHardPartialConjunction));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AndnessLevel {
    FullConjunction,
    HighHardPartialConjunction,
    MediumHardPartialConjunction,
    LowHardPartialConjunction,
    HighSoftPartialConjunction,
    MediumSoftPartialConjunction,
    LowSoftPartialConjunction,
    Neutrality,
    LowSoftPartialDisjunction,
    MediumSoftPartialDisjunction,
    HighSoftPartialDisjunction,
    LowHardPartialDisjunction,
    MediumHardPartialDisjunction,
    HighHardPartialDisjunction,
    FullDisjunction,
}

impl AndnessLevel {
    const ALL: [AndnessLevel; 15] = [
        AndnessLevel::FullConjunction,
        AndnessLevel::HighHardPartialConjunction,
        AndnessLevel::MediumHardPartialConjunction,
        AndnessLevel::LowHardPartialConjunction,
        AndnessLevel::HighSoftPartialConjunction,
        AndnessLevel::MediumSoftPartialConjunction,
        AndnessLevel::LowSoftPartialConjunction,
        AndnessLevel::Neutrality,
        AndnessLevel::LowSoftPartialDisjunction,
        AndnessLevel::MediumSoftPartialDisjunction,
        AndnessLevel::HighSoftPartialDisjunction,
        AndnessLevel::LowHardPartialDisjunction,
        AndnessLevel::MediumHardPartialDisjunction,
        AndnessLevel::HighHardPartialDisjunction,
        AndnessLevel::FullDisjunction,
    ];

    /// All presets, from full conjunction down to full disjunction.
    pub fn all() -> &'static [AndnessLevel] {
        &Self::ALL
    }

    /// Number of 1/14 steps above full disjunction.
    fn steps(self) -> u8 {
        14 - self as u8
    }

    /// The andness α of this preset (`steps / 14`).
    pub fn andness(self) -> f64 {
        f64::from(self.steps()) / 14.0
    }

    /// Conventional LSP symbol (`C`, `HC+`, ..., `A`, ..., `D`).
    pub fn symbol(self) -> &'static str {
        match self {
            AndnessLevel::FullConjunction => "C",
            AndnessLevel::HighHardPartialConjunction => "HC+",
            AndnessLevel::MediumHardPartialConjunction => "HC",
            AndnessLevel::LowHardPartialConjunction => "HC-",
            AndnessLevel::HighSoftPartialConjunction => "SC+",
            AndnessLevel::MediumSoftPartialConjunction => "SC",
            AndnessLevel::LowSoftPartialConjunction => "SC-",
            AndnessLevel::Neutrality => "A",
            AndnessLevel::LowSoftPartialDisjunction => "SD-",
            AndnessLevel::MediumSoftPartialDisjunction => "SD",
            AndnessLevel::HighSoftPartialDisjunction => "SD+",
            AndnessLevel::LowHardPartialDisjunction => "HD-",
            AndnessLevel::MediumHardPartialDisjunction => "HD",
            AndnessLevel::HighHardPartialDisjunction => "HD+",
            AndnessLevel::FullDisjunction => "D",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|level| level.symbol() == symbol)
    }

    /// Returns the preset whose andness is exactly `andness`, if any.
    pub fn from_andness(andness: f64) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.andness() == andness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evenly_spaced() {
        let levels = AndnessLevel::all();
        assert_eq!(levels.len(), 15);
        for pair in levels.windows(2) {
            let step = pair[0].andness() - pair[1].andness();
            assert!((step - 1.0 / 14.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(AndnessLevel::FullConjunction.andness(), 1.0);
        assert_eq!(AndnessLevel::FullDisjunction.andness(), 0.0);
        assert_eq!(AndnessLevel::Neutrality.andness(), 0.5);
        assert!((AndnessLevel::HighHardPartialDisjunction.andness() - 1.0 / 14.0).abs() < 1e-15);
    }

    #[test]
    fn test_symbol_roundtrip() {
        for &level in AndnessLevel::all() {
            assert_eq!(AndnessLevel::from_symbol(level.symbol()), Some(level));
            assert_eq!(AndnessLevel::from_andness(level.andness()), Some(level));
        }
        assert_eq!(AndnessLevel::from_symbol("X"), None);
        assert_eq!(AndnessLevel::from_andness(0.3), None);
    }
}
