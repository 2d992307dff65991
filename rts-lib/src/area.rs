use crate::bytes::Bytes;
use crate::Result;

/// Opaque region identifier.
pub type AreaCode = u16;

/// Intensity estimated for a region.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaIntensity {
    pub code: AreaCode,
    pub intensity: f64,
}

impl AreaIntensity {
    pub const LEN: usize = 3;
}

/// Decode one area intensity record. Unlike stations there is no alert bit.
///
/// # Errors
/// [crate::Error::TruncatedInput] if fewer than [AreaIntensity::LEN] bytes remain.
pub fn decode_area_intensity(bytes: &mut Bytes) -> Result<AreaIntensity> {
    let code = bytes.read_u16_le()?;
    let intensity = bytes.read_intensity()?;
    Ok(AreaIntensity { code, intensity })
}
