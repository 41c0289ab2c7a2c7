//! Rolling signal statistics — fixed-capacity window with O(1) aggregates.
//!
//! Pure state: no clocks, no rendering.  The chart and header read from it
//! once per frame; only the stream handler writes to it.

use std::collections::VecDeque;

/// How many samples the rolling window holds.
pub const WINDOW_CAPACITY: usize = 200;

/// Sentinel floor for the peak aggregate (dBm).  Matches the bottom of the
/// chart's display range.
pub const PEAK_FLOOR_DBM: f64 = -100.0;

/// One reading from the stream.  Ephemeral: created per event, destroyed
/// when it falls off the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalSample {
    pub frequency_hz: u64,
    pub strength_dbm: f64,
}

/// Window of the most recent [`WINDOW_CAPACITY`] samples plus incrementally
/// maintained sum and lifetime peak.
///
/// Invariants (pinned by the tests below):
/// - `sum_dbm` always equals the exact sum of the samples in the window.
/// - `len() <= WINDOW_CAPACITY`.
/// - `peak()` is non-decreasing until `clear()`.
#[derive(Debug)]
pub struct RollingStats {
    window: VecDeque<SignalSample>,
    sum_dbm: f64,
    peak_dbm: f64,
}

impl RollingStats {
    pub fn new() -> Self {
        Self {
            window: VecDeque::with_capacity(WINDOW_CAPACITY),
            sum_dbm: 0.0,
            peak_dbm: PEAK_FLOOR_DBM,
        }
    }

    /// Append a sample, evicting the oldest first when the window is full.
    ///
    /// Eviction happens before insertion so the sum never transiently
    /// counts both the incoming and the outgoing sample.
    pub fn push(&mut self, sample: SignalSample) {
        if self.window.len() == WINDOW_CAPACITY {
            if let Some(evicted) = self.window.pop_front() {
                self.sum_dbm -= evicted.strength_dbm;
            }
        }
        self.sum_dbm += sample.strength_dbm;
        if sample.strength_dbm > self.peak_dbm {
            self.peak_dbm = sample.strength_dbm;
        }
        self.window.push_back(sample);
    }

    /// Mean strength over the window.  `None` when no data — the caller
    /// renders a "no data" state rather than averaging with a sentinel.
    pub fn average(&self) -> Option<f64> {
        if self.window.is_empty() {
            None
        } else {
            Some(self.sum_dbm / self.window.len() as f64)
        }
    }

    /// Strongest sample seen since the last `clear()`.
    pub fn peak(&self) -> f64 {
        self.peak_dbm
    }

    /// Drop all samples and reset the peak to the floor sentinel.
    pub fn clear(&mut self) {
        self.window.clear();
        self.sum_dbm = 0.0;
        self.peak_dbm = PEAK_FLOOR_DBM;
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Samples in arrival order, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = &SignalSample> {
        self.window.iter()
    }

    pub fn latest(&self) -> Option<&SignalSample> {
        self.window.back()
    }
}

impl Default for RollingStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(strength_dbm: f64) -> SignalSample {
        SignalSample {
            frequency_hz: 155_625_000,
            strength_dbm,
        }
    }

    fn recomputed_sum(stats: &RollingStats) -> f64 {
        stats.samples().map(|s| s.strength_dbm).sum()
    }

    #[test]
    fn incremental_sum_never_drifts() {
        let mut stats = RollingStats::new();
        // Mixed magnitudes, including values outside the physical dBm range:
        // no clamping is performed anywhere.
        let values: Vec<f64> = (0..450)
            .map(|i| -95.0 + (i as f64 * 0.73) % 140.0)
            .collect();
        for (i, &v) in values.iter().enumerate() {
            stats.push(sample(v));
            assert_eq!(stats.len(), (i + 1).min(WINDOW_CAPACITY));
            assert!(
                (stats.sum_dbm - recomputed_sum(&stats)).abs() < 1e-9,
                "sum drifted after {} pushes",
                i + 1
            );
        }
    }

    #[test]
    fn average_is_none_when_empty() {
        let mut stats = RollingStats::new();
        assert_eq!(stats.average(), None);
        stats.push(sample(-60.0));
        assert_eq!(stats.average(), Some(-60.0));
    }

    #[test]
    fn peak_is_monotone_until_clear() {
        let mut stats = RollingStats::new();
        assert_eq!(stats.peak(), PEAK_FLOOR_DBM);
        let mut prev = stats.peak();
        for v in [-80.0, -40.0, -90.0, -39.5, -120.0] {
            stats.push(sample(v));
            assert!(stats.peak() >= prev);
            prev = stats.peak();
        }
        assert_eq!(stats.peak(), -39.5);
        // The peak survives the peak sample falling off the window.
        for _ in 0..WINDOW_CAPACITY {
            stats.push(sample(-75.0));
        }
        assert_eq!(stats.peak(), -39.5);

        stats.clear();
        assert_eq!(stats.peak(), PEAK_FLOOR_DBM);
        assert_eq!(stats.len(), 0);
        assert_eq!(stats.average(), None);
    }

    #[test]
    fn ramp_of_250_keeps_exactly_the_last_200() {
        let mut stats = RollingStats::new();
        for i in 0..250 {
            stats.push(sample(-80.0 + i as f64));
        }
        assert_eq!(stats.len(), 200);
        // Oldest 50 evicted: window spans -30 ..= 169.
        assert_eq!(stats.samples().next().unwrap().strength_dbm, -30.0);
        assert_eq!(stats.latest().unwrap().strength_dbm, 169.0);
        // Peak passes through unclamped even though +169 dBm is not physical.
        assert_eq!(stats.peak(), 169.0);
        // Arithmetic series sum: (-30 + 169) * 200 / 2.
        let expected: f64 = (-30..=169).map(|v| v as f64).sum();
        assert!((stats.sum_dbm - expected).abs() < 1e-9);
        assert_eq!(stats.average(), Some(expected / 200.0));
    }
}
