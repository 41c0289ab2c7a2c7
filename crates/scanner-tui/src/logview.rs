//! Transmission log view — pure filter → sort → paginate pipeline over the
//! fetched transmission set.
//!
//! The pipeline order is fixed: day filter, then frequency filter, then
//! sort, then pagination.  Source records are never mutated; every
//! re-render derives a fresh view.

use chrono::{DateTime, Local, NaiveDate, Utc};
use scanner_proto::records::TransmissionRecord;

use crate::directory::RESOLVE_TOLERANCE_HZ;

/// Fixed page size of the log table.
pub const PAGE_SIZE: usize = 20;

/// Sort order for the transmission log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogSort {
    #[default]
    Newest,
    Oldest,
    SignalHigh,
    SignalLow,
    DurationLong,
    DurationShort,
}

impl LogSort {
    pub fn next(self) -> Self {
        match self {
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::SignalHigh,
            Self::SignalHigh => Self::SignalLow,
            Self::SignalLow => Self::DurationLong,
            Self::DurationLong => Self::DurationShort,
            Self::DurationShort => Self::Newest,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Newest => Self::DurationShort,
            Self::Oldest => Self::Newest,
            Self::SignalHigh => Self::Oldest,
            Self::SignalLow => Self::SignalHigh,
            Self::DurationLong => Self::SignalLow,
            Self::DurationShort => Self::DurationLong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::SignalHigh => "signal▾",
            Self::SignalLow => "signal▴",
            Self::DurationLong => "duration▾",
            Self::DurationShort => "duration▴",
        }
    }
}

/// Aggregates over the *filtered* set (not the raw fetch).
#[derive(Debug, Clone, PartialEq)]
pub struct LogStats {
    pub total: usize,
    pub today: usize,
    pub average_signal_dbm: Option<f64>,
    pub total_duration_secs: f64,
}

#[derive(Debug)]
pub struct LogView {
    records: Vec<TransmissionRecord>,
    sort: LogSort,
    day_filter: Option<NaiveDate>,
    frequency_filter: Option<f64>,
    /// 1-based current page.
    page: usize,
}

impl LogView {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            sort: LogSort::Newest,
            day_filter: None,
            frequency_filter: None,
            page: 1,
        }
    }

    /// Install a fresh fetch.  The page is preserved (clamped) — only
    /// filter/sort changes reset it.
    pub fn set_records(&mut self, records: Vec<TransmissionRecord>) {
        self.records = records;
        self.clamp_page();
    }

    pub fn sort(&self) -> LogSort {
        self.sort
    }

    pub fn set_sort(&mut self, sort: LogSort) {
        if self.sort != sort {
            self.sort = sort;
            self.page = 1;
        }
    }

    pub fn day_filter(&self) -> Option<NaiveDate> {
        self.day_filter
    }

    pub fn set_day_filter(&mut self, day: Option<NaiveDate>) {
        if self.day_filter != day {
            self.day_filter = day;
            self.page = 1;
        }
    }

    pub fn frequency_filter(&self) -> Option<f64> {
        self.frequency_filter
    }

    pub fn set_frequency_filter(&mut self, frequency_hz: Option<f64>) {
        if self.frequency_filter != frequency_hz {
            self.frequency_filter = frequency_hz;
            self.page = 1;
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        let filtered = self.filtered_sorted().len();
        if filtered == 0 {
            1
        } else {
            filtered.div_ceil(PAGE_SIZE)
        }
    }

    pub fn next_page(&mut self) {
        if self.page < self.page_count() {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    fn clamp_page(&mut self) {
        let count = self.page_count();
        if self.page > count {
            self.page = count;
        }
    }

    fn matches_filters(&self, record: &TransmissionRecord) -> bool {
        if let Some(day) = self.day_filter {
            if local_day(&record.timestamp) != day {
                return false;
            }
        }
        if let Some(frequency_hz) = self.frequency_filter {
            if (record.frequency - frequency_hz).abs() >= RESOLVE_TOLERANCE_HZ {
                return false;
            }
        }
        true
    }

    /// Filter then sort, in that order.  `sort_by` is stable, so records
    /// that compare equal keep their fetched order.
    pub fn filtered_sorted(&self) -> Vec<&TransmissionRecord> {
        let mut rows: Vec<&TransmissionRecord> = self
            .records
            .iter()
            .filter(|r| self.matches_filters(r))
            .collect();
        match self.sort {
            LogSort::Newest => rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
            LogSort::Oldest => rows.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
            LogSort::SignalHigh => rows.sort_by(|a, b| cmp_f64(b.signal_strength, a.signal_strength)),
            LogSort::SignalLow => rows.sort_by(|a, b| cmp_f64(a.signal_strength, b.signal_strength)),
            LogSort::DurationLong => rows.sort_by(|a, b| cmp_f64(b.duration, a.duration)),
            LogSort::DurationShort => rows.sort_by(|a, b| cmp_f64(a.duration, b.duration)),
        }
        rows
    }

    /// Rows of the current page.
    pub fn page_rows(&self) -> Vec<&TransmissionRecord> {
        let rows = self.filtered_sorted();
        let start = (self.page - 1) * PAGE_SIZE;
        rows.into_iter().skip(start).take(PAGE_SIZE).collect()
    }

    pub fn stats(&self) -> LogStats {
        self.stats_for_day(Local::now().date_naive())
    }

    /// `today` injected for tests.
    pub fn stats_for_day(&self, today: NaiveDate) -> LogStats {
        let rows: Vec<&TransmissionRecord> = self
            .records
            .iter()
            .filter(|r| self.matches_filters(r))
            .collect();
        let total = rows.len();
        let today_count = rows.iter().filter(|r| local_day(&r.timestamp) == today).count();
        let average_signal_dbm = if total == 0 {
            None
        } else {
            Some(rows.iter().map(|r| r.signal_strength).sum::<f64>() / total as f64)
        };
        let total_duration_secs = rows.iter().map(|r| r.duration).sum();
        LogStats {
            total,
            today: today_count,
            average_signal_dbm,
            total_duration_secs,
        }
    }
}

fn local_day(timestamp: &DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

fn cmp_f64(a: f64, b: f64) -> std::cmp::Ordering {
    a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal)
}

/// Cumulative duration as hours/minutes: `"3h 12m"`, or `"42m"` under an
/// hour, or `"0m"` for nothing.
pub fn format_duration_hm(total_secs: f64) -> String {
    let minutes = (total_secs / 60.0).floor() as u64;
    let hours = minutes / 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    /// `ts` is wall-clock local time, so day-bucketing assertions hold on
    /// any machine timezone.
    fn record(id: i64, ts: &str, frequency: f64, signal: f64, duration: f64) -> TransmissionRecord {
        let naive = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap();
        TransmissionRecord {
            id,
            frequency,
            signal_strength: signal,
            duration,
            timestamp: Local
                .from_local_datetime(&naive)
                .single()
                .unwrap()
                .with_timezone(&Utc),
            modulation: "FM".into(),
            description: String::new(),
            zello_sent: false,
            zello_success: false,
            zello_error: String::new(),
            zello_audio_enabled: true,
        }
    }

    fn fixture() -> Vec<TransmissionRecord> {
        // 45 records across two days, varying signal and duration.
        let mut out = Vec::new();
        for i in 0..45i64 {
            let day = if i % 3 == 0 { "2026-08-05" } else { "2026-08-06" };
            let ts = format!("{} 10:{:02}:00", day, i);
            out.push(record(
                i,
                &ts,
                155_625_000.0 + (i % 5) as f64 * 12_500.0,
                -80.0 + (i % 7) as f64 * 4.0,
                (i % 11) as f64 * 1.5,
            ));
        }
        out
    }

    #[test]
    fn filter_before_sort_commutes_with_sort_before_filter() {
        // Filtering by a day, sorting signal-high, then slicing page 1 must
        // equal: sort the full set by signal descending, then filter by the
        // day, then slice [0, PAGE_SIZE).
        let mut view = LogView::new();
        view.set_records(fixture());
        let day = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        view.set_day_filter(Some(day));
        view.set_sort(LogSort::SignalHigh);

        let got: Vec<i64> = view.page_rows().iter().map(|r| r.id).collect();

        let mut sorted_first = fixture();
        sorted_first.sort_by(|a, b| cmp_f64(b.signal_strength, a.signal_strength));
        let want: Vec<i64> = sorted_first
            .iter()
            .filter(|r| local_day(&r.timestamp) == day)
            .take(PAGE_SIZE)
            .map(|r| r.id)
            .collect();

        assert_eq!(got, want);
    }

    #[test]
    fn stable_sort_preserves_fetched_order_on_ties() {
        let mut view = LogView::new();
        view.set_records(vec![
            record(1, "2026-08-06 10:00:00", 155_625_000.0, -50.0, 2.0),
            record(2, "2026-08-06 11:00:00", 155_625_000.0, -50.0, 2.0),
            record(3, "2026-08-06 12:00:00", 155_625_000.0, -50.0, 2.0),
        ]);
        view.set_sort(LogSort::SignalHigh);
        let ids: Vec<i64> = view.page_rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn frequency_filter_uses_directory_tolerance() {
        let mut view = LogView::new();
        view.set_records(vec![
            record(1, "2026-08-06 10:00:00", 155_625_000.0, -50.0, 2.0),
            record(2, "2026-08-06 10:01:00", 155_625_900.0, -50.0, 2.0),
            record(3, "2026-08-06 10:02:00", 155_627_000.0, -50.0, 2.0),
        ]);
        view.set_frequency_filter(Some(155_625_000.0));
        let ids: Vec<i64> = view.page_rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]); // newest first, record 3 is 2 kHz away
    }

    #[test]
    fn filter_and_sort_changes_reset_page_but_refetch_keeps_it() {
        let mut view = LogView::new();
        view.set_records(fixture());
        view.next_page();
        assert_eq!(view.page(), 2);

        // Bare re-fetch of the same data: page preserved.
        view.set_records(fixture());
        assert_eq!(view.page(), 2);

        // Sort change: back to page 1.
        view.set_sort(LogSort::DurationLong);
        assert_eq!(view.page(), 1);

        view.next_page();
        view.set_day_filter(Some(NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()));
        assert_eq!(view.page(), 1);

        // Setting the identical filter again is not a change.
        view.next_page();
        let page = view.page();
        view.set_day_filter(Some(NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()));
        assert_eq!(view.page(), page);
    }

    #[test]
    fn refetch_with_fewer_rows_clamps_page() {
        let mut view = LogView::new();
        view.set_records(fixture());
        while view.page() < view.page_count() {
            view.next_page();
        }
        view.set_records(fixture().into_iter().take(5).collect());
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn stats_come_from_the_filtered_set() {
        let mut view = LogView::new();
        view.set_records(vec![
            record(1, "2026-08-06 10:00:00", 155_625_000.0, -40.0, 60.0),
            record(2, "2026-08-06 11:00:00", 155_625_000.0, -60.0, 120.0),
            record(3, "2026-08-05 10:00:00", 462_562_500.0, -90.0, 600.0),
        ]);
        view.set_frequency_filter(Some(155_625_000.0));

        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let stats = view.stats_for_day(today);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.today, 2);
        assert_eq!(stats.average_signal_dbm, Some(-50.0));
        assert_eq!(stats.total_duration_secs, 180.0);
    }

    #[test]
    fn stats_on_empty_filtered_set() {
        let mut view = LogView::new();
        view.set_records(fixture());
        view.set_frequency_filter(Some(1.0)); // matches nothing
        let stats = view.stats_for_day(NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_signal_dbm, None);
        assert_eq!(stats.total_duration_secs, 0.0);
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration_hm(0.0), "0m");
        assert_eq!(format_duration_hm(59.0), "0m");
        assert_eq!(format_duration_hm(60.0), "1m");
        assert_eq!(format_duration_hm(3_600.0), "1h 0m");
        assert_eq!(format_duration_hm(11_520.0), "3h 12m");
    }

    #[test]
    fn sort_cycle_is_a_loop() {
        let mut s = LogSort::Newest;
        for _ in 0..6 {
            s = s.next();
        }
        assert_eq!(s, LogSort::Newest);
        assert_eq!(LogSort::Newest.prev(), LogSort::DurationShort);
    }
}
