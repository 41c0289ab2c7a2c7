//! Action enum — everything a component can ask the app to do.

use chrono::NaiveDate;
use scanner_proto::records::NewFrequency;

/// Unique identifier for a focusable panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    StripChart,
    ActivePanel,
    LogPanel,
}

/// All actions that can flow through the system.
/// Components produce Actions; the App dispatches them.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Scanner / audio commands ─────────────────────────────────────────────
    StartScanner,
    StopScanner,
    EnableAudio,
    DisableAudio,

    // ── Data refresh ─────────────────────────────────────────────────────────
    RefreshLog,
    RefreshDirectory,

    // ── Log view ─────────────────────────────────────────────────────────────
    CycleSort,
    CycleSortReverse,
    NextPage,
    PrevPage,
    SetDayFilter(Option<NaiveDate>),
    SetFrequencyFilter(Option<f64>),
    ClearFilters,

    // ── Registry edits (confirmed server round-trips) ───────────────────────
    CreateFrequency(NewFrequency),
    ToggleFrequencyEnabled(i64, bool),
    DeleteFrequency(i64),
    CleanupOlderThan(u32),

    // ── Recordings ───────────────────────────────────────────────────────────
    /// Star/unstar the most recent recording.
    ToggleRecordingFavorite,

    // ── Stats ────────────────────────────────────────────────────────────────
    ClearPeak,

    // ── Navigation / system ──────────────────────────────────────────────────
    FocusNext,
    FocusPane(ComponentId),
    /// User input that failed client-side validation; shown inline as a toast.
    InvalidInput(String),
    Quit,
}
