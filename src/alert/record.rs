//! Ship sighting records

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// A ship sighting from the tracking system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipRecord {
    /// Maritime Mobile Service Identity
    pub mmsi: u32,
    pub name: String,
    /// Free-form type string, e.g. "Cargo - Hazard A"
    pub ship_type: String,
    /// Course over ground, degrees
    pub course: f64,
    /// Speed over ground, knots
    pub speed: f64,
    /// Number of earlier sightings
    #[serde(default)]
    pub sightings: u32,
}

impl ShipRecord {
    /// Console line for this sighting at `now`
    pub fn console_line<Tz>(&self, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        format!(
            "[{}] {} (MMSI {}) {} course {:.1} speed {:.1} sightings {}",
            now.format("%Y-%m-%d %H:%M:%S"),
            self.name,
            self.mmsi,
            self.ship_type,
            self.course,
            self.speed,
            self.sightings
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_deserialize_without_sightings() {
        let json = r#"{"mmsi":366999712,"name":"EVER GIVEN","ship_type":"Cargo","course":271.4,"speed":11.3}"#;
        let record: ShipRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.mmsi, 366999712);
        assert_eq!(record.sightings, 0);
    }

    #[test]
    fn test_console_line() {
        let record = ShipRecord {
            mmsi: 366999712,
            name: "EVER GIVEN".to_string(),
            ship_type: "Cargo".to_string(),
            course: 271.44,
            speed: 11.0,
            sightings: 2,
        };
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 14, 5, 9).unwrap();

        assert_eq!(
            record.console_line(&now),
            "[2024-03-01 14:05:09] EVER GIVEN (MMSI 366999712) Cargo course 271.4 speed 11.0 sightings 2"
        );
    }
}
