//! Seismic intensity bytes.
//!
//! Intensity travels as tenths above -3.0: a raw value `r` means `r / 10 - 3.0`.
//! Station records pack the alert flag into bit 7; area records use the whole byte.
use crate::bytes::Bytes;
use crate::Result;

/// Raw value that decodes to intensity 0.0.
const OFFSET_TENTHS: i16 = 30;

const ALERT_BIT: u8 = 0x80;
const INTENSITY_MASK: u8 = 0x7F;

/// Convert a raw intensity value into intensity rounded to 1 decimal place.
///
/// The tenths are computed exactly and divided once, producing the nearest `f64` to the
/// decimal value. This is the same result as `round((raw / 10.0) - 3.0, 1)` for every
/// byte.
#[must_use]
pub fn from_raw(raw: u8) -> f64 {
    f64::from(i16::from(raw) - OFFSET_TENTHS) / 10.0
}

impl Bytes<'_> {
    /// Read a packed station intensity byte: low 7 bits are intensity, bit 7 is the
    /// alert flag.
    ///
    /// # Errors
    /// [crate::Error::TruncatedInput] if the input is exhausted.
    pub fn read_intensity_alert(&mut self) -> Result<(f64, bool)> {
        let raw = self.read_u8()?;
        Ok((from_raw(raw & INTENSITY_MASK), raw & ALERT_BIT != 0))
    }

    /// Read an area intensity byte, where all 8 bits are magnitude.
    ///
    /// # Errors
    /// [crate::Error::TruncatedInput] if the input is exhausted.
    pub fn read_intensity(&mut self) -> Result<f64> {
        Ok(from_raw(self.read_u8()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0x1E, 0.0, false ; "zero")]
    #[test_case(0x9E, 0.0, true ; "zero alert")]
    #[test_case(0x7F, 9.7, false ; "max")]
    #[test_case(0xFF, 9.7, true ; "max alert")]
    #[test_case(0x00, -3.0, false ; "min")]
    #[test_case(0x80, -3.0, true ; "min alert")]
    #[test_case(0x1D, -0.1, false ; "just below zero")]
    #[test_case(0x41, 3.5, false ; "three and a half")]
    fn intensity_alert(raw: u8, intensity: f64, alert: bool) {
        let dat = [raw];
        let mut bytes = Bytes::new(&dat);
        assert_eq!(bytes.read_intensity_alert().unwrap(), (intensity, alert));
    }

    #[test_case(0x1E, 0.0 ; "zero")]
    #[test_case(0x7F, 9.7 ; "no alert bit")]
    #[test_case(0x80, 9.8 ; "high bit is magnitude")]
    #[test_case(0xFF, 22.5 ; "max")]
    fn area_intensity(raw: u8, expected: f64) {
        let dat = [raw];
        let mut bytes = Bytes::new(&dat);
        assert_eq!(bytes.read_intensity().unwrap(), expected);
    }

    /// Half-away-from-zero rounding of the scaled value, as existing decoders do.
    fn scaled_then_rounded(raw: u8) -> f64 {
        let val = (f64::from(raw) / 10.0) - 3.0;
        (val * 10.0).round() / 10.0
    }

    #[test]
    fn integer_tenths_match_rounded_formula() {
        for raw in 0..=u8::MAX {
            let got = from_raw(raw);
            let want = scaled_then_rounded(raw);
            assert_eq!(
                got.to_bits(),
                want.to_bits(),
                "raw={raw:#04x} got={got} want={want}"
            );
        }
    }

    #[test]
    fn truncated() {
        let mut bytes = Bytes::new(&[]);
        assert!(bytes.read_intensity_alert().is_err());
        assert!(bytes.read_intensity().is_err());
    }
}
