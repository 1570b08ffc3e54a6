//! C-facing adapter types for `dosha_engine`.
//!
//! Enumerations cross the boundary as 0-based `i32` codes in declaration
//! order. Text crosses as NUL-terminated UTF-8 in fixed-capacity buffers.

use dosha_engine::{
    BodyPartRisk, Condition, DoshaError, DoshaLevels, LifestyleInputs, classify_risk,
    compute_dosha_levels, derive_body_part_risks, lookup_condition_code,
};

/// ABI version for downstream bindings.
pub const DOSHA_API_VERSION: u32 = 1;

/// Upper bound on entries written by [`dosha_derive_body_part_risks`].
pub const DOSHA_MAX_BODY_PART_RISKS: usize = 4;

/// Buffer size for short labels (condition names).
pub const DOSHA_LABEL_CAPACITY: usize = 64;

/// Buffer size for remedy text.
pub const DOSHA_TEXT_CAPACITY: usize = 256;

/// C-facing status codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoshaStatus {
    Ok = 0,
    InvalidArgument = 1,
    NotFound = 2,
    NullPointer = 7,
    Internal = 255,
}

impl From<&DoshaError> for DoshaStatus {
    fn from(value: &DoshaError) -> Self {
        match value {
            DoshaError::InvalidArgument(_) => Self::InvalidArgument,
            DoshaError::NotFound(_) => Self::NotFound,
            _ => Self::Internal,
        }
    }
}

/// C-compatible lifestyle record (one code per dimension).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoshaLifestyleInputs {
    pub sleep: i32,
    pub stress: i32,
    pub activity: i32,
    pub diet: i32,
    pub body_frame: i32,
    pub skin_type: i32,
}

impl TryFrom<DoshaLifestyleInputs> for LifestyleInputs {
    type Error = DoshaError;

    fn try_from(value: DoshaLifestyleInputs) -> Result<Self, Self::Error> {
        LifestyleInputs::from_codes(
            value.sleep,
            value.stress,
            value.activity,
            value.diet,
            value.body_frame,
            value.skin_type,
        )
    }
}

impl From<LifestyleInputs> for DoshaLifestyleInputs {
    fn from(value: LifestyleInputs) -> Self {
        Self {
            sleep: value.sleep.code(),
            stress: value.stress.code(),
            activity: value.activity.code(),
            diet: value.diet.code(),
            body_frame: value.body_frame.code(),
            skin_type: value.skin_type.code(),
        }
    }
}

/// C-compatible percentage split.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoshaLevelsC {
    pub vata: i32,
    pub pitta: i32,
    pub kapha: i32,
}

impl From<DoshaLevels> for DoshaLevelsC {
    fn from(value: DoshaLevels) -> Self {
        Self {
            vata: i32::from(value.vata()),
            pitta: i32::from(value.pitta()),
            kapha: i32::from(value.kapha()),
        }
    }
}

impl TryFrom<DoshaLevelsC> for DoshaLevels {
    type Error = DoshaError;

    fn try_from(value: DoshaLevelsC) -> Result<Self, Self::Error> {
        let narrow = |v: i32| {
            u8::try_from(v).map_err(|_| DoshaError::InvalidArgument("dosha level out of range"))
        };
        DoshaLevels::new(narrow(value.vata)?, narrow(value.pitta)?, narrow(value.kapha)?)
    }
}

/// C-compatible affected region.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoshaBodyPartRiskC {
    /// Region code (0=head, 1=chest, 2=stomach, 3=joints).
    pub part: i32,
    /// Risk code (0=normal, 1=warning, 2=critical).
    pub level: i32,
    /// Dosha code (0=vata, 1=pitta, 2=kapha).
    pub dosha: i32,
    pub condition_utf8: [u8; DOSHA_LABEL_CAPACITY],
}

impl DoshaBodyPartRiskC {
    pub const fn zeroed() -> Self {
        Self {
            part: 0,
            level: 0,
            dosha: 0,
            condition_utf8: [0; DOSHA_LABEL_CAPACITY],
        }
    }
}

impl TryFrom<&BodyPartRisk> for DoshaBodyPartRiskC {
    type Error = DoshaStatus;

    fn try_from(value: &BodyPartRisk) -> Result<Self, Self::Error> {
        Ok(Self {
            part: value.part.code(),
            level: value.level.code(),
            dosha: i32::from(value.dosha.index()),
            condition_utf8: encode_c_utf8(value.condition)?,
        })
    }
}

/// C-compatible catalog entry.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoshaConditionC {
    pub part: i32,
    pub dosha: i32,
    pub name_utf8: [u8; DOSHA_LABEL_CAPACITY],
    pub diet_utf8: [u8; DOSHA_TEXT_CAPACITY],
    pub yoga_utf8: [u8; DOSHA_TEXT_CAPACITY],
    pub herb_utf8: [u8; DOSHA_TEXT_CAPACITY],
}

impl DoshaConditionC {
    pub const fn zeroed() -> Self {
        Self {
            part: 0,
            dosha: 0,
            name_utf8: [0; DOSHA_LABEL_CAPACITY],
            diet_utf8: [0; DOSHA_TEXT_CAPACITY],
            yoga_utf8: [0; DOSHA_TEXT_CAPACITY],
            herb_utf8: [0; DOSHA_TEXT_CAPACITY],
        }
    }
}

impl TryFrom<&Condition> for DoshaConditionC {
    type Error = DoshaStatus;

    fn try_from(value: &Condition) -> Result<Self, Self::Error> {
        Ok(Self {
            part: value.part.code(),
            dosha: i32::from(value.dosha.index()),
            name_utf8: encode_c_utf8(value.name)?,
            diet_utf8: encode_c_utf8(value.remedy.diet)?,
            yoga_utf8: encode_c_utf8(value.remedy.yoga)?,
            herb_utf8: encode_c_utf8(value.remedy.herb)?,
        })
    }
}

/// Compute levels using C-compatible types.
pub fn dosha_compute_levels_internal(
    inputs: DoshaLifestyleInputs,
) -> Result<DoshaLevelsC, DoshaStatus> {
    let inputs = LifestyleInputs::try_from(inputs).map_err(|err| DoshaStatus::from(&err))?;
    Ok(DoshaLevelsC::from(compute_dosha_levels(&inputs)))
}

/// Derive affected regions using C-compatible types.
pub fn dosha_derive_body_part_risks_internal(
    levels: DoshaLevelsC,
) -> Result<Vec<DoshaBodyPartRiskC>, DoshaStatus> {
    let levels = DoshaLevels::try_from(levels).map_err(|err| DoshaStatus::from(&err))?;
    derive_body_part_risks(&levels)
        .iter()
        .map(DoshaBodyPartRiskC::try_from)
        .collect()
}

/// Look up a catalog entry by region code.
pub fn dosha_lookup_condition_internal(part: i32) -> Result<DoshaConditionC, DoshaStatus> {
    let condition = lookup_condition_code(part).map_err(|err| DoshaStatus::from(&err))?;
    DoshaConditionC::try_from(condition)
}

/// Return ABI version of the exported C API.
#[unsafe(no_mangle)]
pub extern "C" fn dosha_api_version() -> u32 {
    DOSHA_API_VERSION
}

/// Compute the dosha split for one lifestyle record.
///
/// # Safety
/// `inputs` and `out_levels` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dosha_compute_levels(
    inputs: *const DoshaLifestyleInputs,
    out_levels: *mut DoshaLevelsC,
) -> DoshaStatus {
    ffi_boundary(|| {
        if inputs.is_null() || out_levels.is_null() {
            return DoshaStatus::NullPointer;
        }

        // SAFETY: Pointer is checked for null and copied by value.
        let inputs_value = unsafe { *inputs };

        match dosha_compute_levels_internal(inputs_value) {
            Ok(levels) => {
                // SAFETY: Pointer is checked for null and written once.
                unsafe { *out_levels = levels };
                DoshaStatus::Ok
            }
            Err(status) => status,
        }
    })
}

/// Classify a percentage into a risk code (0=normal, 1=warning, 2=critical).
///
/// # Safety
/// `out_level` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dosha_classify_risk(percentage: i32, out_level: *mut i32) -> DoshaStatus {
    ffi_boundary(|| {
        if out_level.is_null() {
            return DoshaStatus::NullPointer;
        }

        match classify_risk(percentage) {
            Ok(level) => {
                // SAFETY: Pointer is checked for null and written once.
                unsafe { *out_level = level.code() };
                DoshaStatus::Ok
            }
            Err(err) => DoshaStatus::from(&err),
        }
    })
}

/// Derive affected regions for a percentage split.
///
/// Writes up to [`DOSHA_MAX_BODY_PART_RISKS`] entries into `out_risks` and
/// the number written into `out_count`.
///
/// # Safety
/// `levels` and `out_count` must be valid, non-null pointers. `out_risks`
/// must point to an array of at least [`DOSHA_MAX_BODY_PART_RISKS`] entries.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dosha_derive_body_part_risks(
    levels: *const DoshaLevelsC,
    out_risks: *mut DoshaBodyPartRiskC,
    out_count: *mut u32,
) -> DoshaStatus {
    ffi_boundary(|| {
        if levels.is_null() || out_risks.is_null() || out_count.is_null() {
            return DoshaStatus::NullPointer;
        }

        // SAFETY: Pointer is checked for null and copied by value.
        let levels_value = unsafe { *levels };

        match dosha_derive_body_part_risks_internal(levels_value) {
            Ok(risks) => {
                if risks.len() > DOSHA_MAX_BODY_PART_RISKS {
                    return DoshaStatus::Internal;
                }
                // SAFETY: Caller guarantees capacity for DOSHA_MAX_BODY_PART_RISKS entries.
                let out = unsafe { std::slice::from_raw_parts_mut(out_risks, risks.len()) };
                out.copy_from_slice(&risks);
                // SAFETY: Pointer is checked for null and written once.
                unsafe { *out_count = risks.len() as u32 };
                DoshaStatus::Ok
            }
            Err(status) => status,
        }
    })
}

/// Look up the catalog entry for a region code.
///
/// # Safety
/// `out_condition` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dosha_lookup_condition(
    part: i32,
    out_condition: *mut DoshaConditionC,
) -> DoshaStatus {
    ffi_boundary(|| {
        if out_condition.is_null() {
            return DoshaStatus::NullPointer;
        }

        match dosha_lookup_condition_internal(part) {
            Ok(condition) => {
                // SAFETY: Pointer is checked for null and written once.
                unsafe { *out_condition = condition };
                DoshaStatus::Ok
            }
            Err(status) => status,
        }
    })
}

fn ffi_boundary(f: impl FnOnce() -> DoshaStatus) -> DoshaStatus {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(status) => status,
        Err(_) => DoshaStatus::Internal,
    }
}

fn encode_c_utf8<const N: usize>(input: &str) -> Result<[u8; N], DoshaStatus> {
    let bytes = input.as_bytes();
    if bytes.len() >= N || bytes.contains(&0) {
        return Err(DoshaStatus::Internal);
    }

    let mut out = [0_u8; N];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(out)
}

/// Decode a NUL-terminated buffer written by this crate.
pub fn decode_c_utf8<const N: usize>(buffer: &[u8; N]) -> Result<&str, std::str::Utf8Error> {
    let end = buffer.iter().position(|b| *b == 0).unwrap_or(N);
    std::str::from_utf8(&buffer[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn status_maps_from_engine_error() {
        assert_eq!(
            DoshaStatus::from(&DoshaError::InvalidArgument("bad")),
            DoshaStatus::InvalidArgument
        );
        assert_eq!(DoshaStatus::from(&DoshaError::NotFound("x")), DoshaStatus::NotFound);
    }

    #[test]
    fn api_version() {
        assert_eq!(dosha_api_version(), DOSHA_API_VERSION);
    }

    #[test]
    fn encode_rejects_overlong() {
        let long = "x".repeat(DOSHA_LABEL_CAPACITY);
        assert_eq!(
            encode_c_utf8::<DOSHA_LABEL_CAPACITY>(&long),
            Err(DoshaStatus::Internal)
        );
    }

    #[test]
    fn encode_decode_label() {
        let buf = encode_c_utf8::<DOSHA_LABEL_CAPACITY>("Respiratory Congestion").unwrap();
        assert_eq!(decode_c_utf8(&buf).unwrap(), "Respiratory Congestion");
    }

    #[test]
    fn catalog_text_fits_buffers() {
        for code in 0..4 {
            assert!(dosha_lookup_condition_internal(code).is_ok(), "region {code}");
        }
    }

    #[test]
    fn compute_rejects_null() {
        let mut out = DoshaLevelsC { vata: 0, pitta: 0, kapha: 0 };
        // SAFETY: Null input pointer is intentional for this validation test.
        let status = unsafe { dosha_compute_levels(ptr::null(), &mut out) };
        assert_eq!(status, DoshaStatus::NullPointer);
    }

    #[test]
    fn classify_rejects_null() {
        // SAFETY: Null output pointer is intentional for this validation test.
        let status = unsafe { dosha_classify_risk(40, ptr::null_mut()) };
        assert_eq!(status, DoshaStatus::NullPointer);
    }

    #[test]
    fn lookup_rejects_null() {
        // SAFETY: Null output pointer is intentional for this validation test.
        let status = unsafe { dosha_lookup_condition(0, ptr::null_mut()) };
        assert_eq!(status, DoshaStatus::NullPointer);
    }
}
