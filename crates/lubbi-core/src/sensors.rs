//! Sensor store: the latest temperature and heart-rate reading pushed by the robot.
//!
//! A single snapshot shared by every caller. Each field is replaced only by a strictly
//! positive value; `lastUpdate` moves on every write, even one that changed nothing.

use crate::error::{CoreError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::sync::RwLock;

/// Current snapshot. Wire names follow the robot firmware (`temperatura`, `bpm`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SensorReading {
    /// Body temperature in °C.
    #[serde(rename = "temperatura")]
    pub temperature: Option<f64>,
    /// Heart rate in beats per minute.
    #[serde(rename = "bpm")]
    pub heart_rate: Option<f64>,
    #[serde(rename = "lastUpdate")]
    pub last_update: Option<DateTime<Utc>>,
}

/// Body of `POST /api/sensores` and `POST /api/analyze-vitals`.
///
/// Both fields accept a JSON number or a numeric string; anything else reads as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct SensorUpdate {
    #[serde(rename = "temperatura", default, deserialize_with = "lenient_number")]
    pub temperature: Option<f64>,
    #[serde(rename = "bpm", default, deserialize_with = "lenient_number")]
    pub heart_rate: Option<f64>,
}

impl SensorUpdate {
    pub fn new(temperature: Option<f64>, heart_rate: Option<f64>) -> Self {
        Self {
            temperature,
            heart_rate,
        }
    }
}

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()))
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// Read-only view of sensor state. The chat resolver reads through this.
pub trait SensorSource: Send + Sync {
    fn snapshot(&self) -> Result<SensorReading>;
}

/// A fixed reading is its own source.
impl SensorSource for SensorReading {
    fn snapshot(&self) -> Result<SensorReading> {
        Ok(*self)
    }
}

/// In-memory single-slot store, owned by the gateway state and injected into handlers.
#[derive(Debug, Default)]
pub struct SensorStore {
    reading: RwLock<SensorReading>,
}

impl SensorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an update stamped with the current time and returns the resulting snapshot.
    pub fn update(&self, update: SensorUpdate) -> Result<SensorReading> {
        self.update_at(update, Utc::now())
    }

    pub fn update_at(&self, update: SensorUpdate, now: DateTime<Utc>) -> Result<SensorReading> {
        let mut reading = self
            .reading
            .write()
            .map_err(|_| CoreError::SensorsUnavailable)?;
        if let Some(temperature) = positive(update.temperature) {
            reading.temperature = Some(temperature);
        }
        if let Some(heart_rate) = positive(update.heart_rate) {
            reading.heart_rate = Some(heart_rate);
        }
        reading.last_update = Some(now);
        Ok(*reading)
    }

    pub fn read(&self) -> Result<SensorReading> {
        self.reading
            .read()
            .map(|r| *r)
            .map_err(|_| CoreError::SensorsUnavailable)
    }
}

impl SensorSource for SensorStore {
    fn snapshot(&self) -> Result<SensorReading> {
        self.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Arc;

    #[test]
    fn test_starts_empty() {
        let store = SensorStore::new();
        assert_eq!(store.read().unwrap(), SensorReading::default());
    }

    #[test]
    fn test_positive_values_are_stored() {
        let store = SensorStore::new();
        let after = store.update(SensorUpdate::new(Some(38.0), Some(70.0))).unwrap();
        assert_eq!(after.temperature, Some(38.0));
        assert_eq!(after.heart_rate, Some(70.0));
        assert_eq!(store.read().unwrap(), after);
    }

    #[test]
    fn test_non_positive_or_absent_values_keep_previous() {
        let store = SensorStore::new();
        store.update(SensorUpdate::new(Some(36.6), Some(80.0))).unwrap();

        store.update(SensorUpdate::new(Some(0.0), Some(-5.0))).unwrap();
        let reading = store.read().unwrap();
        assert_eq!(reading.temperature, Some(36.6));
        assert_eq!(reading.heart_rate, Some(80.0));

        store.update(SensorUpdate::new(None, Some(92.0))).unwrap();
        let reading = store.read().unwrap();
        assert_eq!(reading.temperature, Some(36.6));
        assert_eq!(reading.heart_rate, Some(92.0));
    }

    #[test]
    fn test_last_update_moves_even_without_accepted_fields() {
        let store = SensorStore::new();
        let t1 = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 5).unwrap();

        store.update_at(SensorUpdate::new(Some(37.0), None), t1).unwrap();
        let reading = store.update_at(SensorUpdate::default(), t2).unwrap();
        assert_eq!(reading.last_update, Some(t2));
        assert_eq!(reading.temperature, Some(37.0));
        assert_eq!(reading.heart_rate, None);
    }

    #[test]
    fn test_update_body_accepts_numbers_and_numeric_strings() {
        let update: SensorUpdate =
            serde_json::from_value(serde_json::json!({ "temperatura": "37.9", "bpm": 72 })).unwrap();
        assert_eq!(update, SensorUpdate::new(Some(37.9), Some(72.0)));

        let update: SensorUpdate = serde_json::from_value(
            serde_json::json!({ "temperatura": "quente", "bpm": null }),
        )
        .unwrap();
        assert_eq!(update, SensorUpdate::default());

        let update: SensorUpdate = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(update, SensorUpdate::default());
    }

    #[test]
    fn test_reading_serializes_with_wire_names() {
        let json = serde_json::to_value(SensorReading::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "temperatura": null, "bpm": null, "lastUpdate": null })
        );
    }

    #[test]
    fn test_poisoned_lock_reports_unavailable() {
        let store = Arc::new(SensorStore::new());
        let writer = Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = writer.reading.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert!(matches!(store.read(), Err(CoreError::SensorsUnavailable)));
        assert!(matches!(
            store.update(SensorUpdate::default()),
            Err(CoreError::SensorsUnavailable)
        ));
    }
}
