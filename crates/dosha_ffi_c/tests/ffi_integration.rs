//! Integration tests for the C FFI layer.

use dosha_engine::{ALL_BODY_PARTS, LifestyleInputs, compute_dosha_levels, lookup_condition};
use dosha_ffi_c::*;

fn default_c_inputs() -> DoshaLifestyleInputs {
    DoshaLifestyleInputs::from(LifestyleInputs::default())
}

#[test]
fn compute_levels_matches_core() {
    let mut out = DoshaLevelsC { vata: -1, pitta: -1, kapha: -1 };
    // SAFETY: Valid pointers created in test scope.
    let status = unsafe { dosha_compute_levels(&default_c_inputs(), &mut out) };
    assert_eq!(status, DoshaStatus::Ok);
    assert_eq!(out, DoshaLevelsC { vata: 24, pitta: 48, kapha: 28 });
    assert_eq!(
        out,
        DoshaLevelsC::from(compute_dosha_levels(&LifestyleInputs::default()))
    );
}

#[test]
fn compute_levels_rejects_out_of_domain_code() {
    let mut inputs = default_c_inputs();
    inputs.skin_type = 3;
    let mut out = DoshaLevelsC { vata: -1, pitta: -1, kapha: -1 };
    // SAFETY: Valid pointers created in test scope.
    let status = unsafe { dosha_compute_levels(&inputs, &mut out) };
    assert_eq!(status, DoshaStatus::InvalidArgument);
    // Output untouched on failure.
    assert_eq!(out.vata, -1);

    inputs = default_c_inputs();
    inputs.sleep = -1;
    // SAFETY: Valid pointers created in test scope.
    let status = unsafe { dosha_compute_levels(&inputs, &mut out) };
    assert_eq!(status, DoshaStatus::InvalidArgument);
}

#[test]
fn classify_boundaries() {
    let cases = [(35, 0), (36, 1), (41, 1), (42, 2), (100, 2), (0, 0)];
    for (pct, expected) in cases {
        let mut level = -1;
        // SAFETY: Valid pointer created in test scope.
        let status = unsafe { dosha_classify_risk(pct, &mut level) };
        assert_eq!(status, DoshaStatus::Ok);
        assert_eq!(level, expected, "pct {pct}");
    }
}

#[test]
fn classify_rejects_out_of_range() {
    let mut level = -1;
    for pct in [-1, 101, i32::MAX] {
        // SAFETY: Valid pointer created in test scope.
        let status = unsafe { dosha_classify_risk(pct, &mut level) };
        assert_eq!(status, DoshaStatus::InvalidArgument);
    }
    assert_eq!(level, -1);
}

#[test]
fn derive_vata_and_kapha_warning() {
    let levels = DoshaLevelsC { vata: 38, pitta: 26, kapha: 36 };
    let mut out = [DoshaBodyPartRiskC::zeroed(); DOSHA_MAX_BODY_PART_RISKS];
    let mut count = 0_u32;
    // SAFETY: Output array holds DOSHA_MAX_BODY_PART_RISKS entries.
    let status = unsafe { dosha_derive_body_part_risks(&levels, out.as_mut_ptr(), &mut count) };
    assert_eq!(status, DoshaStatus::Ok);
    assert_eq!(count, 3);

    let parts: Vec<i32> = out[..3].iter().map(|r| r.part).collect();
    assert_eq!(parts, [0, 3, 1]); // head, joints, chest
    assert!(out[..3].iter().all(|r| r.level == 1));
    assert_eq!(out[0].dosha, 0);
    assert_eq!(out[2].dosha, 2);
    assert_eq!(decode_c_utf8(&out[0].condition_utf8).unwrap(), "Migraine / Insomnia");
    assert_eq!(decode_c_utf8(&out[2].condition_utf8).unwrap(), "Respiratory Congestion");
}

#[test]
fn derive_all_normal_writes_zero() {
    let levels = DoshaLevelsC { vata: 35, pitta: 35, kapha: 30 };
    let mut out = [DoshaBodyPartRiskC::zeroed(); DOSHA_MAX_BODY_PART_RISKS];
    let mut count = 99_u32;
    // SAFETY: Output array holds DOSHA_MAX_BODY_PART_RISKS entries.
    let status = unsafe { dosha_derive_body_part_risks(&levels, out.as_mut_ptr(), &mut count) };
    assert_eq!(status, DoshaStatus::Ok);
    assert_eq!(count, 0);
}

#[test]
fn derive_rejects_bad_sum() {
    let mut out = [DoshaBodyPartRiskC::zeroed(); DOSHA_MAX_BODY_PART_RISKS];
    let mut count = 0_u32;
    for levels in [
        DoshaLevelsC { vata: 50, pitta: 50, kapha: 50 },
        DoshaLevelsC { vata: -10, pitta: 60, kapha: 50 },
    ] {
        // SAFETY: Output array holds DOSHA_MAX_BODY_PART_RISKS entries.
        let status =
            unsafe { dosha_derive_body_part_risks(&levels, out.as_mut_ptr(), &mut count) };
        assert_eq!(status, DoshaStatus::InvalidArgument);
    }
}

#[test]
fn derive_rejects_null() {
    let levels = DoshaLevelsC { vata: 40, pitta: 30, kapha: 30 };
    let mut count = 0_u32;
    // SAFETY: Null output array is intentional for validation.
    let status =
        unsafe { dosha_derive_body_part_risks(&levels, std::ptr::null_mut(), &mut count) };
    assert_eq!(status, DoshaStatus::NullPointer);
}

#[test]
fn lookup_every_region() {
    for part in ALL_BODY_PARTS {
        let mut out = DoshaConditionC::zeroed();
        // SAFETY: Valid pointer created in test scope.
        let status = unsafe { dosha_lookup_condition(part.code(), &mut out) };
        assert_eq!(status, DoshaStatus::Ok);

        let expected = lookup_condition(part);
        assert_eq!(out.part, part.code());
        assert_eq!(out.dosha, i32::from(expected.dosha.index()));
        assert_eq!(decode_c_utf8(&out.name_utf8).unwrap(), expected.name);
        assert_eq!(decode_c_utf8(&out.diet_utf8).unwrap(), expected.remedy.diet);
        assert_eq!(decode_c_utf8(&out.yoga_utf8).unwrap(), expected.remedy.yoga);
        assert_eq!(decode_c_utf8(&out.herb_utf8).unwrap(), expected.remedy.herb);
    }
}

#[test]
fn lookup_unknown_region_not_found() {
    let mut out = DoshaConditionC::zeroed();
    // SAFETY: Valid pointer created in test scope.
    let status = unsafe { dosha_lookup_condition(4, &mut out) };
    assert_eq!(status, DoshaStatus::NotFound);
}

#[test]
fn exhaustive_parity_with_core() {
    for inputs in LifestyleInputs::all() {
        let mut out = DoshaLevelsC { vata: 0, pitta: 0, kapha: 0 };
        let c_inputs = DoshaLifestyleInputs::from(inputs);
        // SAFETY: Valid pointers created in test scope.
        let status = unsafe { dosha_compute_levels(&c_inputs, &mut out) };
        assert_eq!(status, DoshaStatus::Ok);
        assert_eq!(out, DoshaLevelsC::from(compute_dosha_levels(&inputs)));
    }
}
