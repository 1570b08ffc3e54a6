//! The three doshas and their normalized percentage split.

use serde::{Deserialize, Serialize};

use crate::error::DoshaError;

/// The three dosha axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

/// All doshas in canonical (evaluation) order.
pub const ALL_DOSHAS: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

impl Dosha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
        }
    }

    /// Governing element.
    pub const fn element(self) -> &'static str {
        match self {
            Self::Vata => "Air",
            Self::Pitta => "Fire",
            Self::Kapha => "Earth",
        }
    }

    /// 0-based index into [`ALL_DOSHAS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Vata => 0,
            Self::Pitta => 1,
            Self::Kapha => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Vata),
            1 => Some(Self::Pitta),
            2 => Some(Self::Kapha),
            _ => None,
        }
    }
}

/// Percentage split across the three doshas.
///
/// The only ways to obtain a value are normalization of raw scores or
/// [`DoshaLevels::new`], both of which guarantee `vata + pitta + kapha == 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LevelsRepr")]
pub struct DoshaLevels {
    vata: u8,
    pitta: u8,
    kapha: u8,
}

#[derive(Deserialize)]
struct LevelsRepr {
    vata: i64,
    pitta: i64,
    kapha: i64,
}

impl TryFrom<LevelsRepr> for DoshaLevels {
    type Error = DoshaError;

    fn try_from(value: LevelsRepr) -> Result<Self, Self::Error> {
        let narrow = |v: i64| {
            u8::try_from(v).map_err(|_| DoshaError::InvalidArgument("dosha level out of range"))
        };
        Self::new(narrow(value.vata)?, narrow(value.pitta)?, narrow(value.kapha)?)
    }
}

impl DoshaLevels {
    /// Validate an externally supplied split.
    pub fn new(vata: u8, pitta: u8, kapha: u8) -> Result<Self, DoshaError> {
        if u16::from(vata) + u16::from(pitta) + u16::from(kapha) != 100 {
            return Err(DoshaError::InvalidArgument("dosha levels must sum to 100"));
        }
        Ok(Self { vata, pitta, kapha })
    }

    /// Caller guarantees the sum invariant.
    pub(crate) const fn from_parts(vata: u8, pitta: u8, kapha: u8) -> Self {
        Self { vata, pitta, kapha }
    }

    pub const fn vata(&self) -> u8 {
        self.vata
    }

    pub const fn pitta(&self) -> u8 {
        self.pitta
    }

    pub const fn kapha(&self) -> u8 {
        self.kapha
    }

    pub const fn get(&self, dosha: Dosha) -> u8 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    /// Always 100.
    pub const fn total(&self) -> u16 {
        self.vata as u16 + self.pitta as u16 + self.kapha as u16
    }

    /// Levels as an array indexed by [`Dosha::index`].
    pub const fn to_array(&self) -> [u8; 3] {
        [self.vata, self.pitta, self.kapha]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, d) in ALL_DOSHAS.iter().enumerate() {
            assert_eq!(d.index() as usize, i);
            assert_eq!(Dosha::from_code(i as i32), Some(*d));
        }
        assert_eq!(Dosha::from_code(3), None);
    }

    #[test]
    fn elements() {
        assert_eq!(Dosha::Vata.element(), "Air");
        assert_eq!(Dosha::Pitta.element(), "Fire");
        assert_eq!(Dosha::Kapha.element(), "Earth");
    }

    #[test]
    fn new_accepts_exact_hundred() {
        let l = DoshaLevels::new(24, 48, 28).unwrap();
        assert_eq!(l.to_array(), [24, 48, 28]);
        assert_eq!(l.total(), 100);
        assert_eq!(l.get(Dosha::Pitta), 48);
    }

    #[test]
    fn new_rejects_bad_sum() {
        assert_eq!(
            DoshaLevels::new(30, 30, 30),
            Err(DoshaError::InvalidArgument("dosha levels must sum to 100"))
        );
        assert!(DoshaLevels::new(200, 0, 0).is_err());
    }

    #[test]
    fn json_round_trip_validates() {
        let l: DoshaLevels = serde_json::from_str(r#"{"vata":40,"pitta":30,"kapha":30}"#).unwrap();
        assert_eq!(l.vata(), 40);
        assert_eq!(serde_json::to_string(&l).unwrap(), r#"{"vata":40,"pitta":30,"kapha":30}"#);
        assert!(serde_json::from_str::<DoshaLevels>(r#"{"vata":40,"pitta":40,"kapha":40}"#).is_err());
        assert!(serde_json::from_str::<DoshaLevels>(r#"{"vata":-10,"pitta":60,"kapha":50}"#).is_err());
    }
}
