//! Lifestyle profile files and command-line overrides.
//!
//! A profile is a JSON object with any subset of the six lifestyle fields,
//! spelled with canonical tokens or the control-panel labels:
//!
//! ```json
//! { "sleep": "5-6h", "stress": "High", "skinType": "Dry/Rough" }
//! ```
//!
//! Resolution order per field: command-line flag, then profile, then the
//! default preset.

use std::fs;
use std::path::Path;

use anyhow::Context;
use dosha_engine::{Activity, BodyFrame, Diet, LifestyleInputs, SkinType, Sleep, Stress};
use serde::Deserialize;
use tracing::debug;

/// Partial lifestyle record; absent fields fall through to the next layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Profile {
    pub sleep: Option<Sleep>,
    pub stress: Option<Stress>,
    pub activity: Option<Activity>,
    pub diet: Option<Diet>,
    pub body_frame: Option<BodyFrame>,
    pub skin_type: Option<SkinType>,
}

impl Profile {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("invalid lifestyle profile")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        debug!(path = %path.display(), "loading lifestyle profile");
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read profile {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Fields set in `overrides` win over fields set here.
    pub fn overlay(self, overrides: Profile) -> Self {
        Self {
            sleep: overrides.sleep.or(self.sleep),
            stress: overrides.stress.or(self.stress),
            activity: overrides.activity.or(self.activity),
            diet: overrides.diet.or(self.diet),
            body_frame: overrides.body_frame.or(self.body_frame),
            skin_type: overrides.skin_type.or(self.skin_type),
        }
    }

    /// Fill remaining gaps from the default preset.
    pub fn resolve(self) -> LifestyleInputs {
        let d = LifestyleInputs::default();
        LifestyleInputs {
            sleep: self.sleep.unwrap_or(d.sleep),
            stress: self.stress.unwrap_or(d.stress),
            activity: self.activity.unwrap_or(d.activity),
            diet: self.diet.unwrap_or(d.diet),
            body_frame: self.body_frame.unwrap_or(d.body_frame),
            skin_type: self.skin_type.unwrap_or(d.skin_type),
        }
    }
}
