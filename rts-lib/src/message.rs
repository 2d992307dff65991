use std::io::Read;

use chrono::{DateTime, Utc};

use crate::area::AreaIntensity;
use crate::bytes::Bytes;
use crate::decoder::Decoder;
use crate::station::Station;
use crate::timecode;
use crate::{Error, Result};

/// RTS message header.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: u8,
    /// Absolute Unix time in milliseconds
    pub timestamp_ms: i64,
    pub station_count: u16,
    pub int_count: u16,
    /// Carried through as-is; not interpreted
    pub reserved: u16,
}

impl Header {
    /// Size of an encoded ``Header``
    pub const LEN: usize = 12;
    /// The only supported format version.
    pub const VERSION: u8 = 1;

    /// Read a header, checking the version before anything else.
    ///
    /// # Errors
    /// [Error::UnsupportedVersion] if the version byte is not [Header::VERSION], or
    /// [Error::TruncatedInput] if the header is incomplete.
    pub fn read(bytes: &mut Bytes) -> Result<Self> {
        let version = bytes.read_u8()?;
        if version != Self::VERSION {
            return Err(Error::UnsupportedVersion(version));
        }
        Ok(Header {
            version,
            timestamp_ms: bytes.read_time40()?,
            station_count: bytes.read_u16_le()?,
            int_count: bytes.read_u16_le()?,
            reserved: bytes.read_u16_le()?,
        })
    }

    /// Message time as a UTC datetime, or `None` if not representable.
    #[must_use]
    pub fn time(&self) -> Option<DateTime<Utc>> {
        timecode::to_datetime(self.timestamp_ms)
    }
}

/// A fully decoded RTS snapshot.
///
/// `stations.len()` always equals `header.station_count` and `area_intensities.len()`
/// always equals `header.int_count`.
///
/// # Example
/// ```
/// use rts::Message;
///
/// #[rustfmt::skip]
/// let dat: &[u8] = &[
///     // version, time offset 0, 1 station, 1 area, reserved
///     0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00,
///     // station 7: pga 1.00, pgv 0.50, intensity 2.0 with alert
///     0x07, 0x00, 0x00, 0x00, 0x64, 0x32, 0xB2,
///     // area 101: intensity 1.5
///     0x65, 0x00, 0x2D,
/// ];
/// let message = Message::decode(dat).unwrap();
/// assert_eq!(message.header.timestamp_ms, rts::EPOCH_MS);
/// assert_eq!(message.stations[0].id, 7);
/// assert!(message.stations[0].is_alert);
/// assert_eq!(message.area_intensities[0].intensity, 1.5);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub header: Header,
    pub stations: Vec<Station>,
    pub area_intensities: Vec<AreaIntensity>,
}

impl Message {
    /// Decode a message from bytes using the default [Decoder].
    ///
    /// # Errors
    /// See [Decoder::decode].
    pub fn decode(dat: &[u8]) -> Result<Message> {
        Decoder::default().decode(dat)
    }

    /// Read a message from `r` until EOF using the default [Decoder].
    ///
    /// # Errors
    /// See [Decoder::read].
    pub fn read<R: Read>(r: R) -> Result<Message> {
        Decoder::default().read(r)
    }

    /// Timestamp of the snapshot, see [Header::time].
    #[must_use]
    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.header.time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header() {
        #[rustfmt::skip]
        let dat: &[u8] = &[
            0x01,
            // 1000ms after epoch
            0xE8, 0x03, 0x00, 0x00, 0x00,
            0x02, 0x00, 0x03, 0x00, 0xCD, 0xAB,
        ];
        let mut bytes = Bytes::new(dat);
        let header = Header::read(&mut bytes).unwrap();

        assert_eq!(
            header,
            Header {
                version: 1,
                timestamp_ms: timecode::EPOCH_MS + 1000,
                station_count: 2,
                int_count: 3,
                reserved: 0xABCD,
            }
        );
        assert_eq!(bytes.offset(), Header::LEN);
        assert_eq!(
            header.time().unwrap().to_rfc3339(),
            "2026-01-01T00:00:01+00:00"
        );
    }

    #[test]
    fn version_checked_first() {
        let mut bytes = Bytes::new(&[0x02]);
        let err = Header::read(&mut bytes).unwrap_err();
        assert!(matches!(err, Error::UnsupportedVersion(2)), "got {err:?}");
    }

    #[test]
    fn pre_epoch_time() {
        #[rustfmt::skip]
        let dat: &[u8] = &[
            0x01,
            // -1ms
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];
        let header = Header::read(&mut Bytes::new(dat)).unwrap();
        assert_eq!(header.timestamp_ms, timecode::EPOCH_MS - 1);
    }
}
