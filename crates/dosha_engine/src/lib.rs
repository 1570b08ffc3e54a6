//! Dosha risk engine.
//!
//! Maps six categorical lifestyle answers to a vata/pitta/kapha percentage
//! split, classifies each dosha into a risk tier, and expands elevated
//! doshas into the affected body regions with their remedies.
//!
//! The pipeline is a set of pure functions over immutable values:
//!
//! ```text
//! LifestyleInputs ─raw_scores─▶ RawScores ─normalize─▶ DoshaLevels
//!     ─derive_body_part_risks─▶ Vec<BodyPartRisk> ─lookup_condition─▶ Condition
//! ```
//!
//! No I/O, no global state, no logging. Every call may run concurrently.

pub mod assessment;
pub mod body_part;
pub mod condition;
pub mod dosha;
pub mod error;
pub mod lifestyle;
pub mod normalize;
pub mod risk;
pub mod weights;

pub use assessment::{Assessment, assess};
pub use body_part::{
    ALL_BODY_PARTS, BodyPart, BodyPartRisk, OverallStatus, condition_label,
    derive_body_part_risks, dosha_regions,
};
pub use condition::{
    CONDITIONS, Condition, Remedy, lookup_condition, lookup_condition_code, lookup_condition_name,
};
pub use dosha::{ALL_DOSHAS, Dosha, DoshaLevels};
pub use error::DoshaError;
pub use lifestyle::{
    ALL_ACTIVITY, ALL_BODY_FRAMES, ALL_DIET, ALL_SKIN_TYPES, ALL_SLEEP, ALL_STRESS, Activity,
    BodyFrame, Diet, LifestyleInputs, SkinType, Sleep, Stress,
};
pub use normalize::{compute_dosha_levels, normalize};
pub use risk::{CRITICAL_THRESHOLD, RiskLevel, WARNING_THRESHOLD, classify_risk, dosha_risks};
pub use weights::{RawScores, raw_scores};
