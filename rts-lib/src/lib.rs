#![doc = include_str!("../README.md")]

mod area;
mod bytes;
mod decoder;
mod error;
mod message;
mod station;
mod summary;

pub mod intensity;
pub mod timecode;
pub mod varint;

pub use area::{decode_area_intensity, AreaCode, AreaIntensity};
pub use bytes::Bytes;
pub use decoder::{decode_message, Decoder};
pub use error::{Error, Result};
pub use message::{Header, Message};
pub use station::{decode_station, Station, StationId};
pub use summary::Summary;
pub use timecode::EPOCH_MS;
pub use varint::FfMarker;
