//! Body regions and dosha → region risk derivation.

use std::str::FromStr;

use serde::Serialize;

use crate::dosha::{ALL_DOSHAS, Dosha, DoshaLevels};
use crate::error::DoshaError;
use crate::risk::RiskLevel;

/// Body regions highlighted on the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyPart {
    Head,
    Chest,
    Stomach,
    Joints,
}

/// All regions in catalog order.
pub const ALL_BODY_PARTS: [BodyPart; 4] = [
    BodyPart::Head,
    BodyPart::Chest,
    BodyPart::Stomach,
    BodyPart::Joints,
];

impl BodyPart {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Chest => "chest",
            Self::Stomach => "stomach",
            Self::Joints => "joints",
        }
    }

    pub const fn code(self) -> i32 {
        match self {
            Self::Head => 0,
            Self::Chest => 1,
            Self::Stomach => 2,
            Self::Joints => 3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Head),
            1 => Some(Self::Chest),
            2 => Some(Self::Stomach),
            3 => Some(Self::Joints),
            _ => None,
        }
    }
}

impl FromStr for BodyPart {
    type Err = DoshaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_BODY_PARTS
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or(DoshaError::NotFound("unknown body part"))
    }
}

/// Regions governed by a dosha, in emission order.
pub const fn dosha_regions(dosha: Dosha) -> &'static [BodyPart] {
    match dosha {
        Dosha::Vata => &[BodyPart::Head, BodyPart::Joints],
        Dosha::Pitta => &[BodyPart::Stomach],
        Dosha::Kapha => &[BodyPart::Chest],
    }
}

/// Short condition label shown for an affected region.
pub const fn condition_label(part: BodyPart) -> &'static str {
    match part {
        BodyPart::Head => "Migraine / Insomnia",
        BodyPart::Chest => "Respiratory Congestion",
        BodyPart::Stomach => "Acidity / Digestive Fire",
        BodyPart::Joints => "Arthritis / Joint Pain",
    }
}

/// One affected region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BodyPartRisk {
    pub part: BodyPart,
    pub level: RiskLevel,
    pub condition: &'static str,
    pub dosha: Dosha,
}

/// Expand per-dosha risk into the list of affected regions.
///
/// Doshas are visited vata, pitta, kapha; regions follow [`dosha_regions`].
/// Doshas classified [`RiskLevel::Normal`] contribute nothing.
pub fn derive_body_part_risks(levels: &DoshaLevels) -> Vec<BodyPartRisk> {
    let mut risks = Vec::with_capacity(ALL_BODY_PARTS.len());
    for dosha in ALL_DOSHAS {
        let level = RiskLevel::from_percentage(levels.get(dosha));
        if level == RiskLevel::Normal {
            continue;
        }
        risks.extend(dosha_regions(dosha).iter().map(|&part| BodyPartRisk {
            part,
            level,
            condition: condition_label(part),
            dosha,
        }));
    }
    risks
}

/// Banner state summarising a risk list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Balanced,
    ElevatedRisk,
    ImbalanceDetected,
}

impl OverallStatus {
    /// Worst tier present decides the banner.
    pub fn from_risks(risks: &[BodyPartRisk]) -> Self {
        match risks.iter().map(|r| r.level).max() {
            Some(RiskLevel::Critical) => Self::ImbalanceDetected,
            Some(RiskLevel::Warning) => Self::ElevatedRisk,
            Some(RiskLevel::Normal) | None => Self::Balanced,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::ElevatedRisk => "Elevated Risk",
            Self::ImbalanceDetected => "Imbalance Detected",
        }
    }
}
