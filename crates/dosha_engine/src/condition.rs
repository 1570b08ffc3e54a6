//! Static condition and remedy catalog, keyed by body region.

use serde::Serialize;

use crate::body_part::{BodyPart, condition_label};
use crate::dosha::Dosha;
use crate::error::DoshaError;

/// Diet, yoga, and herbal advice for one condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Remedy {
    pub diet: &'static str,
    pub yoga: &'static str,
    pub herb: &'static str,
}

/// Catalog entry for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Condition {
    pub part: BodyPart,
    pub name: &'static str,
    pub dosha: Dosha,
    pub remedy: Remedy,
}

/// Catalog in [`crate::ALL_BODY_PARTS`] order.
pub static CONDITIONS: [Condition; 4] = [
    Condition {
        part: BodyPart::Head,
        name: condition_label(BodyPart::Head),
        dosha: Dosha::Vata,
        remedy: Remedy {
            diet: "Warm milk with ashwagandha before bed. Avoid caffeine and cold foods.",
            yoga: "Shavasana (Corpse Pose) - 15 minutes daily",
            herb: "Brahmi (Bacopa monnieri) - Enhances cognitive function and calms the mind",
        },
    },
    Condition {
        part: BodyPart::Chest,
        name: condition_label(BodyPart::Chest),
        dosha: Dosha::Kapha,
        remedy: Remedy {
            diet: "Warm ginger-honey tea. Light, spicy foods. Avoid dairy and cold beverages.",
            yoga: "Bhujangasana (Cobra Pose) - Opens the chest",
            herb: "Tulsi (Holy Basil) - Clears respiratory passages and boosts immunity",
        },
    },
    Condition {
        part: BodyPart::Stomach,
        name: condition_label(BodyPart::Stomach),
        dosha: Dosha::Pitta,
        remedy: Remedy {
            diet: "Cooling foods: cucumber, coconut water, mint. Avoid spicy, fried, and sour foods.",
            yoga: "Vajrasana (Thunderbolt Pose) - Post-meal for 10 minutes",
            herb: "Shatavari - Cools the digestive system and reduces inflammation",
        },
    },
    Condition {
        part: BodyPart::Joints,
        name: condition_label(BodyPart::Joints),
        dosha: Dosha::Vata,
        remedy: Remedy {
            diet: "Warm, oily foods. Sesame oil massage. Avoid raw vegetables and cold foods.",
            yoga: "Trikonasana (Triangle Pose) - Improves joint flexibility",
            herb: "Guggulu - Anti-inflammatory, supports joint health",
        },
    },
];

/// Catalog entry for a region. Infallible for the closed region set.
pub fn lookup_condition(part: BodyPart) -> &'static Condition {
    &CONDITIONS[part.code() as usize]
}

/// Catalog entry for a raw region code.
pub fn lookup_condition_code(code: i32) -> Result<&'static Condition, DoshaError> {
    BodyPart::from_code(code)
        .map(lookup_condition)
        .ok_or(DoshaError::NotFound("unknown body part code"))
}

/// Catalog entry for a region name (`"head"`, `"Joints"`, ...).
pub fn lookup_condition_name(name: &str) -> Result<&'static Condition, DoshaError> {
    Ok(lookup_condition(name.parse()?))
}
