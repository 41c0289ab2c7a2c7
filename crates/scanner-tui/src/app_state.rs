//! AppState — shared data passed read-only to all components during
//! render/event handling.
//!
//! The App event loop is the only writer.  Every mutation happens inside a
//! single `handle_message` or timer arm, run to completion before the next
//! one is dispatched, so the engines below never see a partial update.

use scanner_proto::records::{AudioStatus, RecordingRecord, RecordingStats, ScannerStatus};

use crate::active::ActiveTracker;
use crate::directory::FrequencyDirectory;
use crate::logview::LogView;
use crate::stats::RollingStats;

pub struct AppState {
    // ── Connectivity ────────────────────────────────────────────────────────
    /// Push channel is open.
    pub connected: bool,

    // ── Live signal state (fed by the stream handlers) ──────────────────────
    pub stats: RollingStats,
    pub active: ActiveTracker,
    /// Frequency the scanner is currently tuned to, from `frequency_update`.
    pub current_frequency_hz: Option<f64>,
    pub squelch_threshold_dbm: f64,

    // ── Pull-based views ────────────────────────────────────────────────────
    pub directory: FrequencyDirectory,
    pub log_view: LogView,

    // ── Polled status ───────────────────────────────────────────────────────
    pub scanner_status: Option<ScannerStatus>,
    pub audio_status: Option<AudioStatus>,
    pub recording_stats: Option<RecordingStats>,
    /// Recent recordings, newest first (as the backend returns them).
    pub recordings: Vec<RecordingRecord>,
    /// Last status poll failed; header renders stale data dimmed.
    pub status_stale: bool,
}

impl AppState {
    pub fn new(squelch_threshold_dbm: f64) -> Self {
        Self {
            connected: false,
            stats: RollingStats::new(),
            active: ActiveTracker::new(),
            current_frequency_hz: None,
            squelch_threshold_dbm,
            directory: FrequencyDirectory::new(),
            log_view: LogView::new(),
            scanner_status: None,
            audio_status: None,
            recording_stats: None,
            recordings: Vec::new(),
            status_stale: false,
        }
    }

    /// Friendly name for a frequency, when the directory knows one.
    pub fn resolve_name(&self, frequency_hz: f64) -> Option<&str> {
        self.directory.friendly_name(frequency_hz)
    }
}
