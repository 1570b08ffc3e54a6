//! Raw score → percentage normalization.
//!
//! Vata and pitta are each rounded half-up from their share of the total;
//! kapha takes the remainder so the three always sum to exactly 100. The
//! assignment order (vata, pitta, kapha-as-remainder) is fixed: rounding
//! kapha independently can yield 99 or 101.

use crate::dosha::DoshaLevels;
use crate::lifestyle::LifestyleInputs;
use crate::weights::{RawScores, raw_scores};

/// `round_half_up(part / total * 100)` in exact integer arithmetic.
///
/// Requires `part <= total` and `total > 0`.
pub(crate) const fn percent_round_half_up(part: u32, total: u32) -> u8 {
    let part = part as u64;
    let total = total as u64;
    ((200 * part + total) / (2 * total)) as u8
}

/// Normalize raw scores into a percentage split summing to 100.
///
/// Returns `None` for an all-zero or overflowing total, or when vata and pitta both round
/// up past 100 (only possible with a zero kapha score). No lifestyle input
/// produces either.
pub const fn normalize(raw: RawScores) -> Option<DoshaLevels> {
    let total = match raw.vata.checked_add(raw.pitta) {
        Some(vp) => match vp.checked_add(raw.kapha) {
            Some(t) if t > 0 => t,
            _ => return None,
        },
        None => return None,
    };
    let vata = percent_round_half_up(raw.vata, total);
    let pitta = percent_round_half_up(raw.pitta, total);
    if vata as u16 + pitta as u16 > 100 {
        return None;
    }
    let kapha = 100 - vata - pitta;
    Some(DoshaLevels::from_parts(vata, pitta, kapha))
}

/// Compute the dosha split for one set of lifestyle answers.
pub fn compute_dosha_levels(inputs: &LifestyleInputs) -> DoshaLevels {
    let raw = raw_scores(inputs);
    match normalize(raw) {
        Some(levels) => levels,
        // Every weight table has a positive minimum entry.
        None => unreachable!("raw dosha total is always positive"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifestyle::{Activity, BodyFrame, Diet, SkinType, Sleep, Stress};

    #[test]
    fn half_rounds_up() {
        assert_eq!(percent_round_half_up(75, 200), 38); // 37.5
        assert_eq!(percent_round_half_up(25, 200), 13); // 12.5
        assert_eq!(percent_round_half_up(1, 3), 33);
        assert_eq!(percent_round_half_up(2, 3), 67);
        assert_eq!(percent_round_half_up(0, 10), 0);
        assert_eq!(percent_round_half_up(10, 10), 100);
    }

    #[test]
    fn zero_total_is_none() {
        assert_eq!(normalize(RawScores { vata: 0, pitta: 0, kapha: 0 }), None);
    }

    #[test]
    fn overflowing_split_is_none() {
        // 12.5 → 13 and 87.5 → 88 with nothing left for kapha
        assert_eq!(normalize(RawScores { vata: 25, pitta: 175, kapha: 0 }), None);
    }

    #[test]
    fn default_profile_levels() {
        // 35/145 = 24.14, 70/145 = 48.28, kapha = 100 - 24 - 48
        let levels = compute_dosha_levels(&LifestyleInputs::default());
        assert_eq!(levels.to_array(), [24, 48, 28]);
    }

    #[test]
    fn kapha_absorbs_rounding() {
        // raw (75, 50, 75) / 200: 37.5 → 38, 25, kapha 37 (not round(37.5) = 38)
        let inputs = LifestyleInputs {
            sleep: Sleep::UnderFour,
            stress: Stress::VeryLow,
            activity: Activity::LightActive,
            diet: Diet::Processed,
            body_frame: BodyFrame::Heavy,
            skin_type: SkinType::DryRough,
        };
        assert_eq!(raw_scores(&inputs), RawScores { vata: 75, pitta: 50, kapha: 75 });
        assert_eq!(compute_dosha_levels(&inputs).to_array(), [38, 25, 37]);
    }

    #[test]
    fn pitta_rounds_before_kapha() {
        // raw (50, 75, 75) / 200: 25, 37.5 → 38, kapha 37
        let levels = normalize(RawScores { vata: 50, pitta: 75, kapha: 75 }).unwrap();
        assert_eq!(levels.to_array(), [25, 38, 37]);
    }

    #[test]
    fn thirds_leave_kapha_34() {
        let levels = normalize(RawScores { vata: 1, pitta: 1, kapha: 1 }).unwrap();
        assert_eq!(levels.to_array(), [33, 33, 34]);
    }
}
