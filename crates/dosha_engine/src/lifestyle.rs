//! Lifestyle input dimensions and the immutable input record.
//!
//! Each dimension is a closed enumeration. Every value has a compact
//! canonical token (`"7-8h"`, `"HomeCooked"`), the label shown by the
//! control panel (`"7-8 hrs"`, `"Home Cooked/Fresh"`), and a
//! 0-based integer code in declaration order for C callers.
//!
//! Parsing accepts either the token or the label (ASCII case-insensitive)
//! and rejects everything else with [`DoshaError::InvalidArgument`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DoshaError;

/// Shared surface of the six closed input enumerations.
pub(crate) trait Choice: Copy + Sized + 'static {
    const ALL: &'static [Self];
    const UNKNOWN: &'static str;

    fn token(self) -> &'static str;
    fn label(self) -> &'static str;
}

fn parse_choice<T: Choice>(s: &str) -> Result<T, DoshaError> {
    let s = s.trim();
    T::ALL
        .iter()
        .copied()
        .find(|v| v.token().eq_ignore_ascii_case(s) || v.label().eq_ignore_ascii_case(s))
        .ok_or(DoshaError::InvalidArgument(T::UNKNOWN))
}

fn from_code<T: Choice>(code: i32) -> Option<T> {
    usize::try_from(code).ok().and_then(|i| T::ALL.get(i).copied())
}

// ---------------------------------------------------------------------------
// Sleep
// ---------------------------------------------------------------------------

/// Nightly sleep duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sleep {
    #[serde(rename = "<4h", alias = "< 4 hrs")]
    UnderFour,
    #[serde(rename = "5-6h", alias = "5-6 hrs")]
    FiveToSix,
    #[serde(rename = "7-8h", alias = "7-8 hrs")]
    SevenToEight,
    #[serde(rename = ">9h", alias = "> 9 hrs")]
    OverNine,
}

/// All sleep values in control-panel order.
pub const ALL_SLEEP: [Sleep; 4] = [
    Sleep::UnderFour,
    Sleep::FiveToSix,
    Sleep::SevenToEight,
    Sleep::OverNine,
];

impl Sleep {
    pub const fn token(self) -> &'static str {
        match self {
            Self::UnderFour => "<4h",
            Self::FiveToSix => "5-6h",
            Self::SevenToEight => "7-8h",
            Self::OverNine => ">9h",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderFour => "< 4 hrs",
            Self::FiveToSix => "5-6 hrs",
            Self::SevenToEight => "7-8 hrs",
            Self::OverNine => "> 9 hrs",
        }
    }

    pub const fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        from_code(code)
    }
}

impl Choice for Sleep {
    const ALL: &'static [Self] = &ALL_SLEEP;
    const UNKNOWN: &'static str = "unknown sleep duration";

    fn token(self) -> &'static str {
        Sleep::token(self)
    }

    fn label(self) -> &'static str {
        Sleep::label(self)
    }
}

impl FromStr for Sleep {
    type Err = DoshaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s)
    }
}

// ---------------------------------------------------------------------------
// Stress
// ---------------------------------------------------------------------------

/// Perceived stress level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stress {
    #[serde(alias = "Very Low")]
    VeryLow,
    Low,
    Moderate,
    High,
    Extreme,
}

/// All stress values in control-panel order.
pub const ALL_STRESS: [Stress; 5] = [
    Stress::VeryLow,
    Stress::Low,
    Stress::Moderate,
    Stress::High,
    Stress::Extreme,
];

impl Stress {
    pub const fn token(self) -> &'static str {
        match self {
            Self::VeryLow => "VeryLow",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Extreme => "Extreme",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Extreme => "Extreme",
        }
    }

    pub const fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        from_code(code)
    }
}

impl Choice for Stress {
    const ALL: &'static [Self] = &ALL_STRESS;
    const UNKNOWN: &'static str = "unknown stress level";

    fn token(self) -> &'static str {
        Stress::token(self)
    }

    fn label(self) -> &'static str {
        Stress::label(self)
    }
}

impl FromStr for Stress {
    type Err = DoshaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s)
    }
}

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// Physical activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    Sedentary,
    #[serde(alias = "Light Active")]
    LightActive,
    Active,
    Athlete,
}

/// All activity values in control-panel order.
pub const ALL_ACTIVITY: [Activity; 4] = [
    Activity::Sedentary,
    Activity::LightActive,
    Activity::Active,
    Activity::Athlete,
];

impl Activity {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightActive => "LightActive",
            Self::Active => "Active",
            Self::Athlete => "Athlete",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightActive => "Light Active",
            Self::Active => "Active",
            Self::Athlete => "Athlete",
        }
    }

    pub const fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        from_code(code)
    }
}

impl Choice for Activity {
    const ALL: &'static [Self] = &ALL_ACTIVITY;
    const UNKNOWN: &'static str = "unknown activity level";

    fn token(self) -> &'static str {
        Activity::token(self)
    }

    fn label(self) -> &'static str {
        Activity::label(self)
    }
}

impl FromStr for Activity {
    type Err = DoshaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s)
    }
}

// ---------------------------------------------------------------------------
// Diet
// ---------------------------------------------------------------------------

/// Diet quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diet {
    #[serde(alias = "Processed/Junk")]
    Processed,
    Mixed,
    #[serde(alias = "Home Cooked/Fresh")]
    HomeCooked,
}

/// All diet values in control-panel order.
pub const ALL_DIET: [Diet; 3] = [Diet::Processed, Diet::Mixed, Diet::HomeCooked];

impl Diet {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Processed => "Processed",
            Self::Mixed => "Mixed",
            Self::HomeCooked => "HomeCooked",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Processed => "Processed/Junk",
            Self::Mixed => "Mixed",
            Self::HomeCooked => "Home Cooked/Fresh",
        }
    }

    pub const fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        from_code(code)
    }
}

impl Choice for Diet {
    const ALL: &'static [Self] = &ALL_DIET;
    const UNKNOWN: &'static str = "unknown diet quality";

    fn token(self) -> &'static str {
        Diet::token(self)
    }

    fn label(self) -> &'static str {
        Diet::label(self)
    }
}

impl FromStr for Diet {
    type Err = DoshaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s)
    }
}

// ---------------------------------------------------------------------------
// BodyFrame
// ---------------------------------------------------------------------------

/// Body frame / build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyFrame {
    #[serde(alias = "Petite/Thin")]
    Petite,
    #[serde(alias = "Medium/Athletic")]
    Medium,
    #[serde(alias = "Heavy/Broad")]
    Heavy,
}

/// All body frames in control-panel order.
pub const ALL_BODY_FRAMES: [BodyFrame; 3] = [BodyFrame::Petite, BodyFrame::Medium, BodyFrame::Heavy];

impl BodyFrame {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Petite => "Petite",
            Self::Medium => "Medium",
            Self::Heavy => "Heavy",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Petite => "Petite/Thin",
            Self::Medium => "Medium/Athletic",
            Self::Heavy => "Heavy/Broad",
        }
    }

    pub const fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        from_code(code)
    }
}

impl Choice for BodyFrame {
    const ALL: &'static [Self] = &ALL_BODY_FRAMES;
    const UNKNOWN: &'static str = "unknown body frame";

    fn token(self) -> &'static str {
        BodyFrame::token(self)
    }

    fn label(self) -> &'static str {
        BodyFrame::label(self)
    }
}

impl FromStr for BodyFrame {
    type Err = DoshaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s)
    }
}

// ---------------------------------------------------------------------------
// SkinType
// ---------------------------------------------------------------------------

/// Skin type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkinType {
    #[serde(alias = "Dry/Rough")]
    DryRough,
    #[serde(alias = "Oily/Sensitive")]
    OilySensitive,
    #[serde(alias = "Soft/Moist")]
    SoftMoist,
}

/// All skin types in control-panel order.
pub const ALL_SKIN_TYPES: [SkinType; 3] =
    [SkinType::DryRough, SkinType::OilySensitive, SkinType::SoftMoist];

impl SkinType {
    pub const fn token(self) -> &'static str {
        match self {
            Self::DryRough => "DryRough",
            Self::OilySensitive => "OilySensitive",
            Self::SoftMoist => "SoftMoist",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DryRough => "Dry/Rough",
            Self::OilySensitive => "Oily/Sensitive",
            Self::SoftMoist => "Soft/Moist",
        }
    }

    pub const fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        from_code(code)
    }
}

impl Choice for SkinType {
    const ALL: &'static [Self] = &ALL_SKIN_TYPES;
    const UNKNOWN: &'static str = "unknown skin type";

    fn token(self) -> &'static str {
        SkinType::token(self)
    }

    fn label(self) -> &'static str {
        SkinType::label(self)
    }
}

impl FromStr for SkinType {
    type Err = DoshaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s)
    }
}

// ---------------------------------------------------------------------------
// LifestyleInputs
// ---------------------------------------------------------------------------

/// One complete set of lifestyle answers.
///
/// Values are never mutated in place; the `with_*` methods return a new
/// record with one field replaced, mirroring how the control panel emits
/// a fresh record on every interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LifestyleInputs {
    pub sleep: Sleep,
    pub stress: Stress,
    pub activity: Activity,
    pub diet: Diet,
    pub body_frame: BodyFrame,
    pub skin_type: SkinType,
}

impl Default for LifestyleInputs {
    /// The control panel's starting preset (a moderate profile).
    fn default() -> Self {
        Self {
            sleep: Sleep::SevenToEight,
            stress: Stress::Moderate,
            activity: Activity::Active,
            diet: Diet::Mixed,
            body_frame: BodyFrame::Medium,
            skin_type: SkinType::OilySensitive,
        }
    }
}

impl LifestyleInputs {
    /// Build from raw integer codes (declaration order, 0-based).
    ///
    /// Any out-of-domain code is rejected; nothing is defaulted.
    pub fn from_codes(
        sleep: i32,
        stress: i32,
        activity: i32,
        diet: i32,
        body_frame: i32,
        skin_type: i32,
    ) -> Result<Self, DoshaError> {
        Ok(Self {
            sleep: Sleep::from_code(sleep).ok_or(DoshaError::InvalidArgument(Sleep::UNKNOWN))?,
            stress: Stress::from_code(stress)
                .ok_or(DoshaError::InvalidArgument(Stress::UNKNOWN))?,
            activity: Activity::from_code(activity)
                .ok_or(DoshaError::InvalidArgument(Activity::UNKNOWN))?,
            diet: Diet::from_code(diet).ok_or(DoshaError::InvalidArgument(Diet::UNKNOWN))?,
            body_frame: BodyFrame::from_code(body_frame)
                .ok_or(DoshaError::InvalidArgument(BodyFrame::UNKNOWN))?,
            skin_type: SkinType::from_code(skin_type)
                .ok_or(DoshaError::InvalidArgument(SkinType::UNKNOWN))?,
        })
    }

    pub const fn with_sleep(self, sleep: Sleep) -> Self {
        Self { sleep, ..self }
    }

    pub const fn with_stress(self, stress: Stress) -> Self {
        Self { stress, ..self }
    }

    pub const fn with_activity(self, activity: Activity) -> Self {
        Self { activity, ..self }
    }

    pub const fn with_diet(self, diet: Diet) -> Self {
        Self { diet, ..self }
    }

    pub const fn with_body_frame(self, body_frame: BodyFrame) -> Self {
        Self { body_frame, ..self }
    }

    pub const fn with_skin_type(self, skin_type: SkinType) -> Self {
        Self { skin_type, ..self }
    }

    /// Every valid input record (4 x 5 x 4 x 3 x 3 x 3 = 2160).
    pub fn all() -> impl Iterator<Item = Self> {
        ALL_SLEEP.into_iter().flat_map(|sleep| {
            ALL_STRESS.into_iter().flat_map(move |stress| {
                ALL_ACTIVITY.into_iter().flat_map(move |activity| {
                    ALL_DIET.into_iter().flat_map(move |diet| {
                        ALL_BODY_FRAMES.into_iter().flat_map(move |body_frame| {
                            ALL_SKIN_TYPES.into_iter().map(move |skin_type| Self {
                                sleep,
                                stress,
                                activity,
                                diet,
                                body_frame,
                                skin_type,
                            })
                        })
                    })
                })
            })
        })
    }
}
