//! Frequency directory cache — local copy of the backend's registry, used
//! to resolve raw frequencies to friendly names everywhere in the UI.

use scanner_proto::records::FrequencyRecord;

/// Match tolerance for `resolve`.  Models oscillator drift / rounding in
/// the source hardware; must stay exactly this wide for displayed names to
/// agree with the backend.
pub const RESOLVE_TOLERANCE_HZ: f64 = 1000.0;

#[derive(Debug, Default)]
pub struct FrequencyDirectory {
    records: Vec<FrequencyRecord>,
}

impl FrequencyDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole directory atomically.  Never merges.
    pub fn replace(&mut self, records: Vec<FrequencyRecord>) {
        self.records = records;
    }

    /// First record whose stored frequency is within the tolerance of the
    /// query, in stored order.  First match wins on overlap.
    pub fn resolve(&self, frequency_hz: f64) -> Option<&FrequencyRecord> {
        self.records
            .iter()
            .find(|r| (r.frequency - frequency_hz).abs() < RESOLVE_TOLERANCE_HZ)
    }

    /// Friendly name for a frequency, when the directory has a non-empty one.
    pub fn friendly_name(&self, frequency_hz: f64) -> Option<&str> {
        self.resolve(frequency_hz)
            .map(|r| r.friendly_name.as_str())
            .filter(|name| !name.is_empty())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, frequency: f64, name: &str) -> FrequencyRecord {
        FrequencyRecord {
            id,
            frequency,
            modulation: "FM".into(),
            friendly_name: name.into(),
            description: String::new(),
            enabled: true,
            priority: 0,
            group: String::new(),
            tags: String::new(),
        }
    }

    #[test]
    fn resolves_within_tolerance() {
        let mut dir = FrequencyDirectory::new();
        dir.replace(vec![record(1, 155_625_000.0, "Marine 16")]);
        assert_eq!(dir.resolve(155_625_400.0).unwrap().id, 1);
        assert_eq!(dir.resolve(155_624_100.0).unwrap().id, 1);
        assert_eq!(dir.friendly_name(155_625_000.0), Some("Marine 16"));
    }

    #[test]
    fn exactly_1000_hz_off_does_not_match() {
        let mut dir = FrequencyDirectory::new();
        dir.replace(vec![record(1, 155_625_000.0, "Marine 16")]);
        assert!(dir.resolve(155_626_000.0).is_none());
        assert!(dir.resolve(155_624_000.0).is_none());
        assert!(dir.resolve(155_625_999.0).is_some());
    }

    #[test]
    fn no_match_returns_none() {
        let mut dir = FrequencyDirectory::new();
        assert!(dir.is_empty());
        dir.replace(vec![record(1, 155_625_000.0, "Marine 16")]);
        assert!(dir.resolve(121_500_000.0).is_none());
        assert!(dir.friendly_name(121_500_000.0).is_none());
    }

    #[test]
    fn overlapping_candidates_first_match_wins() {
        // Two entries 800 Hz apart: a query between them matches both;
        // stored order decides.
        let mut dir = FrequencyDirectory::new();
        dir.replace(vec![
            record(1, 155_625_000.0, "First"),
            record(2, 155_625_800.0, "Second"),
        ]);
        assert_eq!(dir.resolve(155_625_400.0).unwrap().id, 1);

        dir.replace(vec![
            record(2, 155_625_800.0, "Second"),
            record(1, 155_625_000.0, "First"),
        ]);
        assert_eq!(dir.resolve(155_625_400.0).unwrap().id, 2);
    }

    #[test]
    fn replace_is_wholesale() {
        let mut dir = FrequencyDirectory::new();
        dir.replace(vec![record(1, 155_625_000.0, "Marine 16")]);
        dir.replace(vec![record(2, 121_500_000.0, "Guard")]);
        assert_eq!(dir.len(), 1);
        assert!(dir.resolve(155_625_000.0).is_none());
    }

    #[test]
    fn empty_friendly_name_resolves_to_none() {
        let mut dir = FrequencyDirectory::new();
        dir.replace(vec![record(1, 155_625_000.0, "")]);
        assert!(dir.resolve(155_625_000.0).is_some());
        assert!(dir.friendly_name(155_625_000.0).is_none());
    }
}
