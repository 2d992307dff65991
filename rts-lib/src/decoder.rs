use std::io::Read;

use tracing::{debug, trace};
use typed_builder::TypedBuilder;

use crate::area::{decode_area_intensity, AreaIntensity};
use crate::bytes::Bytes;
use crate::message::{Header, Message};
use crate::station::{decode_station, Station};
use crate::varint::FfMarker;
use crate::Result;

/// Decodes RTS messages.
///
/// A decoder holds only options, so it is `Copy` and may be shared freely between
/// threads decoding independent inputs.
///
/// # Examples
/// Default decoding rejects the undefined `0xFF` varint marker.
/// ```
/// use rts::{Decoder, Error};
///
/// #[rustfmt::skip]
/// let dat: &[u8] = &[
///     0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
///     // station with pga marker 0xFF
///     0x01, 0x00, 0x00, 0x00, 0xFF, 0x10, 0x1E,
/// ];
/// let err = Decoder::default().decode(dat).unwrap_err();
/// assert!(matches!(err, Error::UnsupportedVarintMarker { offset: 16 }));
/// ```
/// Decoding the way existing tools do, where `0xFF` yields 0.
/// ```
/// use rts::{Decoder, FfMarker};
///
/// # #[rustfmt::skip]
/// # let dat: &[u8] = &[
/// #     0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
/// #     0x01, 0x00, 0x00, 0x00, 0xFF, 0x10, 0x1E,
/// # ];
/// let message = Decoder::builder()
///     .ff_marker(FfMarker::Zero)
///     .build()
///     .decode(dat)
///     .unwrap();
/// assert_eq!(message.stations[0].pga, 0.0);
/// assert_eq!(message.stations[0].pgv, 0.16);
/// ```
#[derive(TypedBuilder, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    /// Handling of the undefined varint marker `0xFF`.
    #[builder(default)]
    ff_marker: FfMarker,
}

impl Decoder {
    #[must_use]
    pub fn ff_marker(&self) -> FfMarker {
        self.ff_marker
    }

    /// Decode a single message from `dat`. Bytes following the message are ignored.
    ///
    /// # Errors
    /// [crate::Error::UnsupportedVersion], [crate::Error::TruncatedInput] or
    /// [crate::Error::UnsupportedVarintMarker]. No partial message is returned.
    pub fn decode(&self, dat: &[u8]) -> Result<Message> {
        let mut bytes = Bytes::new(dat);
        let message = self.decode_from(&mut bytes)?;
        if bytes.remaining() > 0 {
            debug!(
                consumed = bytes.offset(),
                trailing = bytes.remaining(),
                "ignoring bytes after message"
            );
        }
        Ok(message)
    }

    /// Drain `r` to EOF and decode the buffered bytes.
    ///
    /// # Errors
    /// [crate::Error::Io] if reading fails, otherwise as [Decoder::decode].
    pub fn read<R: Read>(&self, mut r: R) -> Result<Message> {
        let mut buf = Vec::new();
        r.read_to_end(&mut buf)?;
        self.decode(&buf)
    }

    /// Decode a message from the current position of `bytes`, leaving the cursor just
    /// past the message on success.
    ///
    /// # Errors
    /// As [Decoder::decode]. The cursor position is unspecified after an error.
    pub fn decode_from(&self, bytes: &mut Bytes) -> Result<Message> {
        let header = Header::read(bytes)?;
        trace!(
            timestamp_ms = header.timestamp_ms,
            station_count = header.station_count,
            int_count = header.int_count,
            "header"
        );

        let stations = self.decode_stations(bytes, header.station_count)?;
        trace!(offset = bytes.offset(), "stations");
        let area_intensities = decode_area_intensities(bytes, header.int_count)?;
        trace!(offset = bytes.offset(), "area intensities");

        Ok(Message {
            header,
            stations,
            area_intensities,
        })
    }

    fn decode_stations(&self, bytes: &mut Bytes, count: u16) -> Result<Vec<Station>> {
        let count = usize::from(count);
        // a bogus count should not drive a large allocation
        let mut stations = Vec::with_capacity(count.min(bytes.remaining() / Station::MIN_LEN));
        for _ in 0..count {
            stations.push(decode_station(bytes, self.ff_marker)?);
        }
        Ok(stations)
    }
}

fn decode_area_intensities(bytes: &mut Bytes, count: u16) -> Result<Vec<AreaIntensity>> {
    let count = usize::from(count);
    let mut areas = Vec::with_capacity(count.min(bytes.remaining() / AreaIntensity::LEN));
    for _ in 0..count {
        areas.push(decode_area_intensity(bytes)?);
    }
    Ok(areas)
}

/// Decode a message from `bytes` with the default [Decoder].
///
/// # Errors
/// See [Decoder::decode_from].
pub fn decode_message(bytes: &mut Bytes) -> Result<Message> {
    Decoder::default().decode_from(bytes)
}
