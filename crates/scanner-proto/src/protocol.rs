use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Events pushed by the scanner backend over the `/ws` channel.
///
/// The wire format is JSON discriminated on a `"type"` field.  Every field
/// that the backend may omit on older builds carries `#[serde(default)]` so
/// a partial payload still decodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Per-scan signal strength reading for one frequency.
    SignalStrength {
        frequency: f64,
        signal_strength: f64,
        #[serde(default)]
        timestamp: String,
    },
    /// A transmission opened above the squelch threshold.
    TransmissionStart {
        frequency: f64,
        signal_strength: f64,
        #[serde(default)]
        timestamp: String,
        #[serde(default)]
        modulation: String,
        #[serde(default)]
        description: String,
    },
    /// A transmission closed; carries the final duration and metadata.
    TransmissionEnd {
        frequency: f64,
        #[serde(default)]
        duration: f64,
        #[serde(default)]
        timestamp: String,
        #[serde(default)]
        audio_file: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        group: String,
        #[serde(default)]
        signal_strength: f64,
        #[serde(default)]
        modulation: String,
    },
    /// Periodic scanner state broadcast.
    ScannerStatus {
        is_scanning: bool,
        current_frequency: f64,
        #[serde(default)]
        scan_list_size: u32,
        sdr_connected: bool,
        #[serde(default)]
        scan_index: u32,
        #[serde(default)]
        timestamp: String,
    },
    /// The scanner retuned to a new frequency.
    FrequencyUpdate {
        frequency: f64,
        #[serde(default)]
        timestamp: String,
    },
}

const KNOWN_KINDS: &[&str] = &[
    "signal_strength",
    "transmission_start",
    "transmission_end",
    "scanner_status",
    "frequency_update",
];

/// Why an inbound frame could not be turned into a [`StreamEvent`].
///
/// Both cases are drop-and-log at the connection layer; neither may abort
/// the channel.
#[derive(Debug, Error)]
pub enum EventError {
    /// The payload is valid JSON but its `type` tag is not one we handle.
    #[error("unrecognized event kind `{0}`")]
    UnknownKind(String),
    /// The payload is not valid JSON, or a known kind with bad fields.
    #[error("malformed event payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode one text frame from the push channel.
pub fn decode_event(raw: &str) -> Result<StreamEvent, EventError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let kind = value
        .get("type")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if !KNOWN_KINDS.contains(&kind.as_str()) {
        return Err(EventError::UnknownKind(kind));
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_signal_strength() {
        let raw = r#"{"type":"signal_strength","frequency":155625000.0,"signal_strength":-47.5,"timestamp":"2026-08-06T12:00:00"}"#;
        match decode_event(raw).unwrap() {
            StreamEvent::SignalStrength {
                frequency,
                signal_strength,
                ..
            } => {
                assert_eq!(frequency, 155_625_000.0);
                assert_eq!(signal_strength, -47.5);
            }
            other => panic!("wrong event: {:?}", other),
        }
    }

    #[test]
    fn decodes_transmission_end_with_partial_fields() {
        // Older backends omit group/audio_file; defaults must fill in.
        let raw = r#"{"type":"transmission_end","frequency":462562500.0,"duration":4.2,"timestamp":"2026-08-06T12:00:05"}"#;
        match decode_event(raw).unwrap() {
            StreamEvent::TransmissionEnd {
                frequency,
                duration,
                group,
                ..
            } => {
                assert_eq!(frequency, 462_562_500.0);
                assert_eq!(duration, 4.2);
                assert!(group.is_empty());
            }
            other => panic!("wrong event: {:?}", other),
        }
    }

    #[test]
    fn decodes_scanner_status() {
        let raw = r#"{"type":"scanner_status","is_scanning":true,"current_frequency":118100000.0,"scan_list_size":12,"sdr_connected":true,"scan_index":3,"timestamp":""}"#;
        match decode_event(raw).unwrap() {
            StreamEvent::ScannerStatus {
                is_scanning,
                sdr_connected,
                scan_list_size,
                ..
            } => {
                assert!(is_scanning);
                assert!(sdr_connected);
                assert_eq!(scan_list_size, 12);
            }
            other => panic!("wrong event: {:?}", other),
        }
    }

    #[test]
    fn unknown_kind_is_reported_with_its_tag() {
        let raw = r#"{"type":"zello_heartbeat","ok":true}"#;
        match decode_event(raw) {
            Err(EventError::UnknownKind(kind)) => assert_eq!(kind, "zello_heartbeat"),
            other => panic!("expected UnknownKind, got {:?}", other),
        }
    }

    #[test]
    fn missing_tag_is_unknown_not_malformed() {
        let raw = r#"{"frequency":155625000.0}"#;
        assert!(matches!(
            decode_event(raw),
            Err(EventError::UnknownKind(kind)) if kind.is_empty()
        ));
    }

    #[test]
    fn malformed_json_is_malformed() {
        assert!(matches!(
            decode_event("{not json"),
            Err(EventError::Malformed(_))
        ));
    }

    #[test]
    fn known_kind_with_bad_fields_is_malformed() {
        let raw = r#"{"type":"signal_strength","frequency":"oops"}"#;
        assert!(matches!(
            decode_event(raw),
            Err(EventError::Malformed(_))
        ));
    }
}
