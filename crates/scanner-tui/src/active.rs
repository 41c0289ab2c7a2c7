//! Active-frequency tracker — time-keyed set of currently live frequencies.
//!
//! A frequency enters the set when a sample above the squelch threshold
//! arrives for it, and leaves only when a later sample for the *same*
//! frequency is at/below threshold and the entry has gone unrefreshed for
//! longer than the grace period.  A frequency that simply stops
//! transmitting is never swept; that is deliberate (see DESIGN.md) and
//! pinned by `silent_frequency_is_never_swept` below.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long an entry survives below-threshold samples before eviction.
/// Prevents flicker on noisy signals hovering at the squelch boundary.
pub const EVICTION_GRACE: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct ActiveEntry {
    pub frequency_hz: u64,
    pub strength_dbm: f64,
    pub last_seen: Instant,
    pub friendly_name: Option<String>,
}

#[derive(Debug, Default)]
pub struct ActiveTracker {
    entries: HashMap<u64, ActiveEntry>,
}

impl ActiveTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one sample.  `now` is injected so transitions are testable
    /// without sleeping.
    pub fn observe(
        &mut self,
        frequency_hz: u64,
        strength_dbm: f64,
        threshold_dbm: f64,
        friendly_name: Option<String>,
        now: Instant,
    ) {
        if strength_dbm > threshold_dbm {
            let entry = self
                .entries
                .entry(frequency_hz)
                .or_insert_with(|| ActiveEntry {
                    frequency_hz,
                    strength_dbm,
                    last_seen: now,
                    friendly_name: None,
                });
            entry.strength_dbm = strength_dbm;
            entry.last_seen = now;
            if friendly_name.is_some() {
                entry.friendly_name = friendly_name;
            }
        } else if let Some(entry) = self.entries.get(&frequency_hz) {
            // Below threshold: evict only once the grace period has passed
            // since the last above-threshold refresh.
            if now.duration_since(entry.last_seen) > EVICTION_GRACE {
                self.entries.remove(&frequency_hz);
            }
        }
    }

    /// All active entries, strongest first.  Ties break on frequency so the
    /// panel ordering is stable across frames.
    pub fn snapshot(&self) -> Vec<ActiveEntry> {
        let mut entries: Vec<ActiveEntry> = self.entries.values().cloned().collect();
        entries.sort_by(|a, b| {
            b.strength_dbm
                .partial_cmp(&a.strength_dbm)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.frequency_hz.cmp(&b.frequency_hz))
        });
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = -50.0;

    #[test]
    fn above_threshold_creates_and_refreshes() {
        let t0 = Instant::now();
        let mut tracker = ActiveTracker::new();
        tracker.observe(155_625_000, -40.0, THRESHOLD, None, t0);
        assert_eq!(tracker.len(), 1);

        let t1 = t0 + Duration::from_millis(500);
        tracker.observe(155_625_000, -35.0, THRESHOLD, None, t1);
        let snap = tracker.snapshot();
        assert_eq!(snap[0].strength_dbm, -35.0);
        assert_eq!(snap[0].last_seen, t1);
    }

    #[test]
    fn at_threshold_does_not_create() {
        let mut tracker = ActiveTracker::new();
        tracker.observe(155_625_000, THRESHOLD, THRESHOLD, None, Instant::now());
        assert!(tracker.is_empty());
    }

    #[test]
    fn below_threshold_within_grace_keeps_entry() {
        let t0 = Instant::now();
        let mut tracker = ActiveTracker::new();
        tracker.observe(155_625_000, -40.0, THRESHOLD, None, t0);

        // 1.5s later a weak sample arrives: inside the grace window.
        let t1 = t0 + Duration::from_millis(1500);
        tracker.observe(155_625_000, -70.0, THRESHOLD, None, t1);
        assert_eq!(tracker.len(), 1);
        // The weak sample does not count as a refresh.
        assert_eq!(tracker.snapshot()[0].last_seen, t0);
    }

    #[test]
    fn below_threshold_after_grace_evicts() {
        let t0 = Instant::now();
        let mut tracker = ActiveTracker::new();
        tracker.observe(155_625_000, -40.0, THRESHOLD, None, t0);

        let t1 = t0 + Duration::from_millis(2001);
        tracker.observe(155_625_000, -70.0, THRESHOLD, None, t1);
        assert!(tracker.is_empty());
    }

    #[test]
    fn silent_frequency_is_never_swept() {
        // Eviction fires only on receipt of a sample for that frequency.
        let t0 = Instant::now();
        let mut tracker = ActiveTracker::new();
        tracker.observe(155_625_000, -40.0, THRESHOLD, None, t0);

        // A long time passes with samples only for other frequencies.
        let t1 = t0 + Duration::from_secs(3600);
        tracker.observe(462_562_500, -30.0, THRESHOLD, None, t1);
        assert_eq!(tracker.len(), 2);
        assert!(tracker
            .snapshot()
            .iter()
            .any(|e| e.frequency_hz == 155_625_000));
    }

    #[test]
    fn snapshot_sorts_by_descending_strength() {
        let now = Instant::now();
        let mut tracker = ActiveTracker::new();
        tracker.observe(100_000_000, -45.0, THRESHOLD, None, now);
        tracker.observe(200_000_000, -20.0, THRESHOLD, None, now);
        tracker.observe(300_000_000, -33.0, THRESHOLD, None, now);
        let freqs: Vec<u64> = tracker.snapshot().iter().map(|e| e.frequency_hz).collect();
        assert_eq!(freqs, vec![200_000_000, 300_000_000, 100_000_000]);
    }

    #[test]
    fn friendly_name_sticks_once_resolved() {
        let t0 = Instant::now();
        let mut tracker = ActiveTracker::new();
        tracker.observe(155_625_000, -40.0, THRESHOLD, Some("Marine 16".into()), t0);
        // Later samples without a resolution keep the known name.
        tracker.observe(
            155_625_000,
            -38.0,
            THRESHOLD,
            None,
            t0 + Duration::from_millis(100),
        );
        assert_eq!(
            tracker.snapshot()[0].friendly_name.as_deref(),
            Some("Marine 16")
        );
    }
}
