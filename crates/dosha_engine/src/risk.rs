//! Percentage → risk tier classification.

use serde::Serialize;

use crate::dosha::{ALL_DOSHAS, DoshaLevels};
use crate::error::DoshaError;

/// Lowest percentage classified as [`RiskLevel::Warning`].
pub const WARNING_THRESHOLD: u8 = 36;

/// Lowest percentage classified as [`RiskLevel::Critical`].
pub const CRITICAL_THRESHOLD: u8 = 42;

/// Risk tier, ordered `Normal < Warning < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Normal,
    Warning,
    Critical,
}

impl RiskLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }

    pub const fn code(self) -> i32 {
        match self {
            Self::Normal => 0,
            Self::Warning => 1,
            Self::Critical => 2,
        }
    }

    /// Classify a percentage already known to be in `0..=100`.
    pub const fn from_percentage(percentage: u8) -> Self {
        if percentage >= CRITICAL_THRESHOLD {
            Self::Critical
        } else if percentage >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// Classify a dosha percentage.
///
/// Fails with [`DoshaError::InvalidArgument`] outside `0..=100`.
pub fn classify_risk(percentage: i32) -> Result<RiskLevel, DoshaError> {
    match u8::try_from(percentage) {
        Ok(p) if p <= 100 => Ok(RiskLevel::from_percentage(p)),
        _ => Err(DoshaError::InvalidArgument("percentage must be in 0..=100")),
    }
}

/// Risk tier for each dosha, indexed by [`crate::Dosha::index`].
pub fn dosha_risks(levels: &DoshaLevels) -> [RiskLevel; 3] {
    ALL_DOSHAS.map(|d| RiskLevel::from_percentage(levels.get(d)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(classify_risk(0), Ok(RiskLevel::Normal));
        assert_eq!(classify_risk(35), Ok(RiskLevel::Normal));
        assert_eq!(classify_risk(36), Ok(RiskLevel::Warning));
        assert_eq!(classify_risk(41), Ok(RiskLevel::Warning));
        assert_eq!(classify_risk(42), Ok(RiskLevel::Critical));
        assert_eq!(classify_risk(100), Ok(RiskLevel::Critical));
    }

    #[test]
    fn out_of_range_rejected() {
        let err = Err(DoshaError::InvalidArgument("percentage must be in 0..=100"));
        assert_eq!(classify_risk(-1), err);
        assert_eq!(classify_risk(101), err);
        assert_eq!(classify_risk(i32::MIN), err);
        assert_eq!(classify_risk(256), err);
    }

    #[test]
    fn monotonic() {
        let mut prev = RiskLevel::Normal;
        for p in 0..=100 {
            let tier = classify_risk(p).unwrap();
            assert!(tier >= prev, "tier dropped at {p}");
            prev = tier;
        }
    }

    #[test]
    fn ordering() {
        assert!(RiskLevel::Normal < RiskLevel::Warning);
        assert!(RiskLevel::Warning < RiskLevel::Critical);
    }

    #[test]
    fn per_dosha_tiers() {
        let levels = DoshaLevels::new(24, 48, 28).unwrap();
        assert_eq!(
            dosha_risks(&levels),
            [RiskLevel::Normal, RiskLevel::Critical, RiskLevel::Normal]
        );
    }
}
