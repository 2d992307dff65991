use crate::message::Message;

/// Aggregate figures for one [Message].
///
/// # Example
/// ```
/// use rts::{Message, Summary};
/// let dat: &[u8] = &[
///     0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
///     0x07, 0x00, 0x00, 0x00, 0x64, 0x32, 0xB2,
/// ];
/// let summary = Summary::from(&Message::decode(dat).unwrap());
/// assert_eq!(summary.alerts, 1);
/// assert_eq!(summary.max_area_intensity, None);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    pub stations: usize,
    /// Stations with the alert flag set
    pub alerts: usize,
    pub areas: usize,
    pub max_intensity: Option<f64>,
    pub max_pga: Option<f64>,
    pub max_pgv: Option<f64>,
    pub max_area_intensity: Option<f64>,
}

fn max(cur: Option<f64>, val: f64) -> Option<f64> {
    Some(cur.map_or(val, |cur| cur.max(val)))
}

impl From<&Message> for Summary {
    fn from(message: &Message) -> Self {
        let mut summary = Summary {
            stations: message.stations.len(),
            areas: message.area_intensities.len(),
            ..Default::default()
        };
        for station in &message.stations {
            if station.is_alert {
                summary.alerts += 1;
            }
            summary.max_intensity = max(summary.max_intensity, station.intensity);
            summary.max_pga = max(summary.max_pga, station.pga);
            summary.max_pgv = max(summary.max_pgv, station.pgv);
        }
        for area in &message.area_intensities {
            summary.max_area_intensity = max(summary.max_area_intensity, area.intensity);
        }
        summary
    }
}
