//! One-shot assessment: every pipeline stage for a single input record.

use serde::Serialize;

use crate::body_part::{BodyPartRisk, OverallStatus, derive_body_part_risks};
use crate::dosha::DoshaLevels;
use crate::lifestyle::LifestyleInputs;
use crate::normalize::compute_dosha_levels;
use crate::risk::{RiskLevel, dosha_risks};
use crate::weights::{RawScores, raw_scores};

/// Full engine output for one lifestyle record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub inputs: LifestyleInputs,
    pub raw: RawScores,
    pub levels: DoshaLevels,
    /// Tier per dosha, indexed by [`crate::Dosha::index`].
    pub dosha_risks: [RiskLevel; 3],
    pub body_part_risks: Vec<BodyPartRisk>,
    pub status: OverallStatus,
}

/// Run the whole pipeline for one input record.
pub fn assess(inputs: &LifestyleInputs) -> Assessment {
    let levels = compute_dosha_levels(inputs);
    let body_part_risks = derive_body_part_risks(&levels);
    let status = OverallStatus::from_risks(&body_part_risks);
    Assessment {
        inputs: *inputs,
        raw: raw_scores(inputs),
        levels,
        dosha_risks: dosha_risks(&levels),
        body_part_risks,
        status,
    }
}
