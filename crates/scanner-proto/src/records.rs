//! REST resource records consumed from the scanner backend.
//!
//! Records are immutable once fetched: views derive from them without
//! mutating, and edits go through explicit server round-trips.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the backend's frequency registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrequencyRecord {
    pub id: i64,
    /// Stored frequency in Hz.
    pub frequency: f64,
    #[serde(default)]
    pub modulation: String,
    #[serde(default)]
    pub friendly_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub tags: String,
}

impl FrequencyRecord {
    /// Display label: the friendly name when set, else the MHz value.
    pub fn label(&self) -> String {
        if self.friendly_name.is_empty() {
            format_mhz(self.frequency)
        } else {
            self.friendly_name.clone()
        }
    }
}

/// A logged transmission, as returned by `GET /api/v1/transmissions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransmissionRecord {
    pub id: i64,
    pub frequency: f64,
    pub signal_strength: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(deserialize_with = "flexible_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub modulation: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub zello_sent: bool,
    #[serde(default)]
    pub zello_success: bool,
    #[serde(default)]
    pub zello_error: String,
    #[serde(default = "default_true")]
    pub zello_audio_enabled: bool,
}

/// Display state of the Zello relay leg, derived from the wire booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZelloDelivery {
    Delivered,
    Failed,
    Skipped,
}

impl ZelloDelivery {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Delivered => "✓",
            Self::Failed => "✗",
            Self::Skipped => "·",
        }
    }
}

impl TransmissionRecord {
    pub fn zello_delivery(&self) -> ZelloDelivery {
        if !self.zello_sent {
            ZelloDelivery::Skipped
        } else if self.zello_success {
            ZelloDelivery::Delivered
        } else {
            ZelloDelivery::Failed
        }
    }
}

/// Recording metadata (read-only for the dashboard).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingRecord {
    pub id: i64,
    pub filename: String,
    #[serde(deserialize_with = "flexible_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub duration_seconds: f64,
    pub frequency_hz: f64,
    #[serde(default)]
    pub friendly_name: String,
    #[serde(default)]
    pub file_size_bytes: u64,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub is_favorite: bool,
}

/// `GET /api/v1/recordings/stats/summary`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecordingStats {
    pub total_recordings: u64,
    pub total_duration_hours: f64,
    pub total_size_gb: f64,
    #[serde(default)]
    pub favorite_count: u64,
}

/// `GET /api/v1/scanner/status`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScannerStatus {
    pub is_scanning: bool,
    pub current_frequency: f64,
    #[serde(default)]
    pub scan_list_size: u32,
    pub sdr_connected: bool,
    #[serde(default)]
    pub scan_index: u32,
    #[serde(default)]
    pub timestamp: String,
}

/// `GET /api/v1/audio/status`.  The backend returns more detail (DSP
/// config, device parameters); only the fields the dashboard shows are kept.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AudioStatus {
    pub audio_enabled: bool,
    #[serde(default)]
    pub recording: bool,
    #[serde(default)]
    pub device_initialized: bool,
}

/// Payload for `POST /api/v1/frequencies`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFrequency {
    pub frequency: f64,
    pub modulation: String,
    #[serde(default)]
    pub friendly_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub tags: String,
}

const VALID_MODULATIONS: &[&str] = &["AM", "FM", "USB", "LSB", "CW", "NFM", "WFM"];

impl NewFrequency {
    /// Client-side validation, applied before any request is issued.
    pub fn validate(&self) -> Result<(), String> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(format!("frequency must be positive, got {}", self.frequency));
        }
        let upper = self.modulation.to_ascii_uppercase();
        if !VALID_MODULATIONS.contains(&upper.as_str()) {
            return Err(format!("unknown modulation `{}`", self.modulation));
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

/// The backend emits ISO timestamps without a UTC offset (naive
/// `datetime.isoformat()`); accept both those and proper RFC 3339.
fn flexible_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

/// `155_625_000.0` → `"155.625 MHz"`.
pub fn format_mhz(frequency_hz: f64) -> String {
    format!("{:.3} MHz", frequency_hz / 1e6)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sent: bool, success: bool) -> TransmissionRecord {
        TransmissionRecord {
            id: 1,
            frequency: 155_625_000.0,
            signal_strength: -47.0,
            duration: 3.5,
            timestamp: Utc::now(),
            modulation: "FM".into(),
            description: String::new(),
            zello_sent: sent,
            zello_success: success,
            zello_error: String::new(),
            zello_audio_enabled: true,
        }
    }

    #[test]
    fn zello_delivery_derivation() {
        assert_eq!(record(true, true).zello_delivery(), ZelloDelivery::Delivered);
        assert_eq!(record(true, false).zello_delivery(), ZelloDelivery::Failed);
        assert_eq!(record(false, false).zello_delivery(), ZelloDelivery::Skipped);
        // sent=false wins even if success is (nonsensically) set
        assert_eq!(record(false, true).zello_delivery(), ZelloDelivery::Skipped);
    }

    #[test]
    fn new_frequency_rejects_non_positive() {
        let mut f = NewFrequency {
            frequency: 0.0,
            modulation: "FM".into(),
            friendly_name: String::new(),
            description: String::new(),
            enabled: true,
            priority: 0,
            group: String::new(),
            tags: String::new(),
        };
        assert!(f.validate().is_err());
        f.frequency = -146_520_000.0;
        assert!(f.validate().is_err());
        f.frequency = 146_520_000.0;
        assert!(f.validate().is_ok());
    }

    #[test]
    fn new_frequency_rejects_unknown_modulation() {
        let f = NewFrequency {
            frequency: 146_520_000.0,
            modulation: "DMR".into(),
            friendly_name: String::new(),
            description: String::new(),
            enabled: true,
            priority: 0,
            group: String::new(),
            tags: String::new(),
        };
        assert!(f.validate().is_err());
    }

    #[test]
    fn transmission_timestamps_decode_with_and_without_offset() {
        let naive = r#"{"id":1,"frequency":155625000.0,"signal_strength":-47.0,
            "duration":3.0,"timestamp":"2026-08-06T12:00:05.123456"}"#;
        let rec: TransmissionRecord = serde_json::from_str(naive).unwrap();
        assert_eq!(rec.timestamp.timezone(), Utc);

        let rfc3339 = r#"{"id":2,"frequency":155625000.0,"signal_strength":-47.0,
            "duration":3.0,"timestamp":"2026-08-06T12:00:05+02:00"}"#;
        let rec: TransmissionRecord = serde_json::from_str(rfc3339).unwrap();
        assert_eq!(rec.timestamp.format("%H:%M").to_string(), "10:00");

        let bad = r#"{"id":3,"frequency":155625000.0,"signal_strength":-47.0,
            "duration":3.0,"timestamp":"yesterday"}"#;
        assert!(serde_json::from_str::<TransmissionRecord>(bad).is_err());
    }

    #[test]
    fn frequency_record_decodes_with_defaults() {
        let raw = r#"{"id":7,"frequency":121500000.0}"#;
        let rec: FrequencyRecord = serde_json::from_str(raw).unwrap();
        assert!(rec.enabled);
        assert!(rec.friendly_name.is_empty());
        assert_eq!(rec.label(), "121.500 MHz");
    }

    #[test]
    fn mhz_formatting() {
        assert_eq!(format_mhz(155_625_000.0), "155.625 MHz");
        assert_eq!(format_mhz(462_562_500.0), "462.563 MHz");
    }
}
