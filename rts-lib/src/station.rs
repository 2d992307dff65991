use crate::bytes::Bytes;
use crate::varint::FfMarker;
use crate::Result;

pub type StationId = u32;

/// Ground motion reported by a single seismic station.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    pub id: StationId,
    /// Peak ground acceleration
    pub pga: f64,
    /// Peak ground velocity
    pub pgv: f64,
    /// Intensity rounded to 1 decimal, between -3.0 and 9.7
    pub intensity: f64,
    pub is_alert: bool,
}

impl Station {
    /// Smallest encoding: id, two single-byte varints and the intensity byte.
    pub const MIN_LEN: usize = 7;
    /// Largest encoding: id, two 4-byte varints and the intensity byte.
    pub const MAX_LEN: usize = 13;
}

/// Decode one station record.
///
/// # Errors
/// The first primitive read failure; no partial station is produced.
pub fn decode_station(bytes: &mut Bytes, ff: FfMarker) -> Result<Station> {
    let id = bytes.read_u32_le()?;
    let pga = bytes.read_varint_scaled(ff)?;
    let pgv = bytes.read_varint_scaled(ff)?;
    let (intensity, is_alert) = bytes.read_intensity_alert()?;

    Ok(Station {
        id,
        pga,
        pgv,
        intensity,
        is_alert,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn minimal_station() {
        #[rustfmt::skip]
        let dat: &[u8] = &[
            // id
            0x39, 0x30, 0x00, 0x00,
            // pga, pgv
            0x7B, 0x05,
            // intensity 4.5 with alert
            0xCB,
        ];
        let mut bytes = Bytes::new(dat);
        let station = decode_station(&mut bytes, FfMarker::Reject).unwrap();

        assert_eq!(
            station,
            Station {
                id: 12345,
                pga: 1.23,
                pgv: 0.05,
                intensity: 4.5,
                is_alert: true,
            }
        );
        assert_eq!(bytes.offset(), Station::MIN_LEN);
    }

    #[test]
    fn wide_varints() {
        #[rustfmt::skip]
        let dat: &[u8] = &[
            0xFF, 0xFF, 0xFF, 0xFF,
            0xFE, 0x40, 0x42, 0x0F,
            0xFD, 0xE8, 0x03,
            0x1E,
        ];
        let mut bytes = Bytes::new(dat);
        let station = decode_station(&mut bytes, FfMarker::Reject).unwrap();

        assert_eq!(station.id, u32::MAX);
        assert_eq!(station.pga, 10000.0);
        assert_eq!(station.pgv, 10.0);
        assert_eq!(station.intensity, 0.0);
        assert!(!station.is_alert);
        assert_eq!(bytes.offset(), 12);
    }

    #[test]
    fn missing_last_byte() {
        let dat: &[u8] = &[0x01, 0x00, 0x00, 0x00, 0x10, 0x20, 0x1E];
        for len in 0..dat.len() {
            let mut bytes = Bytes::new(&dat[..len]);
            let err = decode_station(&mut bytes, FfMarker::Reject).unwrap_err();
            assert!(
                matches!(err, Error::TruncatedInput { .. }),
                "len={len} got {err:?}"
            );
        }
    }
}
