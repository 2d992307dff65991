//! Time40 timestamps.
//!
//! RTS carries message time as a signed 40-bit little-endian millisecond offset from
//! [EPOCH_MS] (2026-01-01T00:00:00Z).
use chrono::{DateTime, Utc};

use crate::bytes::Bytes;
use crate::Result;

/// Unix milliseconds that a Time40 offset of zero refers to.
pub const EPOCH_MS: i64 = 1_767_225_600_000;

/// Number of bytes in a Time40 value.
pub const TIME40_LEN: usize = 5;

/// Smallest representable Time40 offset, -2^39.
pub const TIME40_MIN: i64 = -(1 << 39);
/// Largest representable Time40 offset, 2^39 - 1.
pub const TIME40_MAX: i64 = (1 << 39) - 1;

/// Sign extend 5 little-endian bytes into a millisecond offset from [EPOCH_MS].
#[must_use]
pub fn decode_offset(buf: [u8; TIME40_LEN]) -> i64 {
    let [b0, b1, b2, b3, b4] = buf;
    // bit 39 lands in the i64 sign bit, the arithmetic shift back extends it
    (i64::from_le_bytes([b0, b1, b2, b3, b4, 0, 0, 0]) << 24) >> 24
}

/// Convert a Time40 millisecond timestamp to a UTC datetime.
///
/// Returns `None` if the value is outside what [DateTime] can represent.
#[must_use]
pub fn to_datetime(timestamp_ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(timestamp_ms)
}

impl Bytes<'_> {
    /// Read a Time40 value and return the absolute Unix millisecond timestamp.
    ///
    /// # Errors
    /// [crate::Error::TruncatedInput] if fewer than 5 bytes remain.
    pub fn read_time40(&mut self) -> Result<i64> {
        Ok(EPOCH_MS + decode_offset(self.take_array()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use test_case::test_case;

    fn encode_offset(offset: i64) -> [u8; TIME40_LEN] {
        let b = offset.to_le_bytes();
        [b[0], b[1], b[2], b[3], b[4]]
    }

    #[test_case(0 ; "epoch")]
    #[test_case(1 ; "one")]
    #[test_case(-1 ; "minus one")]
    #[test_case(86_400_000 ; "one day")]
    #[test_case(-86_400_000 ; "one day before")]
    #[test_case(TIME40_MAX ; "max")]
    #[test_case(TIME40_MIN ; "min")]
    #[test_case(0x7f_0000_0000 ; "high byte only")]
    fn roundtrip(offset: i64) {
        let timestamp_ms = EPOCH_MS + offset;
        let buf = encode_offset(timestamp_ms - EPOCH_MS);
        let mut bytes = Bytes::new(&buf);

        assert_eq!(bytes.read_time40().unwrap(), timestamp_ms);
        assert_eq!(bytes.offset(), TIME40_LEN);
    }

    #[test]
    fn roundtrip_sampled_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let offset = rng.gen_range(TIME40_MIN..=TIME40_MAX);
            let buf = encode_offset(offset);
            let mut bytes = Bytes::new(&buf);

            assert_eq!(
                bytes.read_time40().unwrap(),
                EPOCH_MS + offset,
                "offset={offset} buf={buf:02x?}"
            );
        }
    }

    #[test]
    fn sign_bit_is_bit_39() {
        assert_eq!(decode_offset([0xff, 0xff, 0xff, 0xff, 0xff]), -1);
        assert_eq!(decode_offset([0x00, 0x00, 0x00, 0x00, 0x80]), TIME40_MIN);
        assert_eq!(decode_offset([0xff, 0xff, 0xff, 0xff, 0x7f]), TIME40_MAX);
    }

    #[test]
    fn epoch_is_2026() {
        let dt = to_datetime(EPOCH_MS).unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-01-01T00:00:00+00:00");
    }

    #[test]
    fn truncated() {
        let mut bytes = Bytes::new(&[0, 0, 0, 0]);
        assert!(bytes.read_time40().is_err());
        assert_eq!(bytes.offset(), 0);
    }
}
