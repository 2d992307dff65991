//! Marker-prefixed scaled varints.
//!
//! |marker|total bytes|magnitude|
//! |---|---|---|
//! |`0x00..=0xFC`|1|the marker itself|
//! |`0xFD`|3|following u16 LE|
//! |`0xFE`|4|following u24 LE|
//! |`0xFF`|-|undefined, see [FfMarker]|
//!
//! The decoded value is the magnitude divided by [SCALE].
use tracing::warn;

use crate::bytes::Bytes;
use crate::{Error, Result};

/// Divisor applied to a raw varint magnitude (2 implied fractional digits).
pub const SCALE: f64 = 100.0;

pub const MARKER_U16: u8 = 0xFD;
pub const MARKER_U24: u8 = 0xFE;
pub const MARKER_UNDEFINED: u8 = 0xFF;

/// How to handle the undefined `0xFF` varint marker.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FfMarker {
    /// Fail with [Error::UnsupportedVarintMarker].
    #[default]
    Reject,
    /// Consume only the marker and decode a magnitude of 0, matching existing
    /// decoders.
    Zero,
}

impl Bytes<'_> {
    /// Read a varint and return its scaled decimal value.
    ///
    /// # Errors
    /// [Error::TruncatedInput] if the marker or its payload is missing, or
    /// [Error::UnsupportedVarintMarker] for `0xFF` under [FfMarker::Reject].
    pub fn read_varint_scaled(&mut self, ff: FfMarker) -> Result<f64> {
        let offset = self.offset();
        let raw = match self.read_u8()? {
            m @ 0..=0xFC => u32::from(m),
            MARKER_U16 => u32::from(self.read_u16_le()?),
            MARKER_U24 => self.read_u24_le()?,
            MARKER_UNDEFINED => match ff {
                FfMarker::Reject => return Err(Error::UnsupportedVarintMarker { offset }),
                FfMarker::Zero => {
                    warn!(offset, "varint marker 0xFF decoded as 0");
                    0
                }
            },
        };
        Ok(f64::from(raw) / SCALE)
    }
}
