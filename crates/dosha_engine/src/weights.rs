//! Lifestyle → dosha weight tables and raw-score computation.
//!
//! Each table maps one input value to a non-negative integer weight.
//! Stress and skin type each feed two doshas with independent constants.
//! Every table has a positive minimum entry, so the raw total is never zero.

use serde::Serialize;

use crate::lifestyle::{Activity, BodyFrame, Diet, LifestyleInputs, SkinType, Sleep, Stress};

/// Kapha contribution when sleep exceeds nine hours.
pub const OVERSLEEP_KAPHA_WEIGHT: u32 = 25;

/// Kapha contribution for every other sleep duration.
pub const BASE_SLEEP_KAPHA_WEIGHT: u32 = 5;

pub const fn sleep_vata_weight(sleep: Sleep) -> u32 {
    match sleep {
        Sleep::UnderFour => 40,
        Sleep::FiveToSix => 20,
        Sleep::SevenToEight => 5,
        Sleep::OverNine => 10,
    }
}

pub const fn sleep_kapha_weight(sleep: Sleep) -> u32 {
    match sleep {
        Sleep::OverNine => OVERSLEEP_KAPHA_WEIGHT,
        _ => BASE_SLEEP_KAPHA_WEIGHT,
    }
}

pub const fn stress_vata_weight(stress: Stress) -> u32 {
    match stress {
        Stress::VeryLow => 5,
        Stress::Low => 15,
        Stress::Moderate => 25,
        Stress::High => 40,
        Stress::Extreme => 55,
    }
}

pub const fn stress_pitta_weight(stress: Stress) -> u32 {
    match stress {
        Stress::VeryLow => 5,
        Stress::Low => 10,
        Stress::Moderate => 20,
        Stress::High => 35,
        Stress::Extreme => 50,
    }
}

pub const fn activity_kapha_weight(activity: Activity) -> u32 {
    match activity {
        Activity::Sedentary => 45,
        Activity::LightActive => 30,
        Activity::Active => 15,
        Activity::Athlete => 5,
    }
}

pub const fn diet_pitta_weight(diet: Diet) -> u32 {
    match diet {
        Diet::Processed => 40,
        Diet::Mixed => 20,
        Diet::HomeCooked => 5,
    }
}

pub const fn body_frame_kapha_weight(frame: BodyFrame) -> u32 {
    match frame {
        BodyFrame::Petite => 5,
        BodyFrame::Medium => 20,
        BodyFrame::Heavy => 40,
    }
}

pub const fn skin_vata_weight(skin: SkinType) -> u32 {
    match skin {
        SkinType::DryRough => 30,
        SkinType::OilySensitive => 5,
        SkinType::SoftMoist => 10,
    }
}

pub const fn skin_pitta_weight(skin: SkinType) -> u32 {
    match skin {
        SkinType::DryRough => 5,
        SkinType::OilySensitive => 30,
        SkinType::SoftMoist => 15,
    }
}

/// Unnormalized weighted sums, one per dosha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RawScores {
    pub vata: u32,
    pub pitta: u32,
    pub kapha: u32,
}

impl RawScores {
    pub const fn total(&self) -> u32 {
        self.vata + self.pitta + self.kapha
    }
}

/// Sum the per-dimension weights for each dosha.
pub const fn raw_scores(inputs: &LifestyleInputs) -> RawScores {
    RawScores {
        vata: sleep_vata_weight(inputs.sleep)
            + stress_vata_weight(inputs.stress)
            + skin_vata_weight(inputs.skin_type),
        pitta: stress_pitta_weight(inputs.stress)
            + diet_pitta_weight(inputs.diet)
            + skin_pitta_weight(inputs.skin_type),
        kapha: activity_kapha_weight(inputs.activity)
            + body_frame_kapha_weight(inputs.body_frame)
            + sleep_kapha_weight(inputs.sleep),
    }
}
