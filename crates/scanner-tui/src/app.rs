//! App — the component-based event loop.
//!
//! Architecture, mirroring the single-owner discipline of the rest of the
//! stack:
//! - `App` owns all components and `AppState`.
//! - A `tokio::mpsc` channel carries `AppMessage` events in from background
//!   tasks (terminal input, the stream task, REST fetches).
//! - The loop draws a frame when something changed, then awaits the next
//!   message or timer tick under `tokio::select!`.
//! - Components return `Vec<Action>`; the App dispatches each one.  All
//!   mutation of `AppState` happens here, one message at a time.
//!
//! Overlapping fetches of the same resource are allowed; whichever response
//! arrives last overwrites state (no sequencing tokens).

use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use scanner_proto::client::ApiClient;
use scanner_proto::config::Config;
use scanner_proto::protocol::StreamEvent;
use scanner_proto::records::{
    format_mhz, AudioStatus, FrequencyRecord, RecordingRecord, RecordingStats, ScannerStatus,
    TransmissionRecord,
};

use crate::action::{Action, ComponentId};
use crate::app_state::AppState;
use crate::component::Component;
use crate::components::{
    active_panel::ActivePanel, header, log_panel::LogPanel, strip_chart::StripChart,
};
use crate::stats::SignalSample;
use crate::stream::{self, StreamUpdate};
use crate::widgets::{status_bar, toast::ToastManager};

// ── Internal event bus ────────────────────────────────────────────────────────

enum AppMessage {
    Input(Event),
    Stream(StreamUpdate),
    Frequencies(Vec<FrequencyRecord>),
    Transmissions(Vec<TransmissionRecord>),
    Recordings(Vec<RecordingRecord>),
    RecordingStats(RecordingStats),
    ScannerStatus(ScannerStatus),
    AudioStatus(AudioStatus),
    /// A status poll failed; keep the previous values and mark them stale.
    StatusFailed(String),
    /// A data fetch failed; the view keeps its last-good data.
    FetchFailed {
        what: &'static str,
        error: String,
    },
    CommandDone(String),
    CommandFailed {
        what: &'static str,
        error: String,
    },
    /// A registry write was confirmed by the backend; refresh the directory.
    FrequencyMutated(String),
}

const FOCUS_ORDER: [ComponentId; 3] = [
    ComponentId::StripChart,
    ComponentId::ActivePanel,
    ComponentId::LogPanel,
];

// ── App ───────────────────────────────────────────────────────────────────────

pub struct App {
    config: Config,
    api: ApiClient,
    pub state: AppState,

    strip_chart: StripChart,
    active_panel: ActivePanel,
    log_panel: LogPanel,
    focus: ComponentId,

    toast: ToastManager,
    tx: Option<mpsc::Sender<AppMessage>>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let api = ApiClient::new(&config.server.base_url);
        let state = AppState::new(config.scanner.squelch_threshold_dbm);
        Self {
            config,
            api,
            state,
            strip_chart: StripChart::new(),
            active_panel: ActivePanel::new(),
            log_panel: LogPanel::new(),
            focus: ComponentId::StripChart,
            toast: ToastManager::new(),
            tx: None,
            should_quit: false,
        }
    }

    // ── Main run loop ─────────────────────────────────────────────────────────

    pub async fn run(mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let (tx, mut rx) = mpsc::channel::<AppMessage>(1024);
        self.tx = Some(tx.clone());

        // ── Background task: keyboard events ──────────────────────────────────
        let input_tx = tx.clone();
        tokio::task::spawn_blocking(move || loop {
            match event::read() {
                Ok(ev) => {
                    if input_tx.blocking_send(AppMessage::Input(ev)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        });

        // ── Background task: push channel ─────────────────────────────────────
        let (stream_tx, mut stream_rx) = mpsc::channel::<StreamUpdate>(1024);
        let _stream_task =
            stream::start(self.config.ws_url(), self.config.reconnect_delay(), stream_tx);
        let fwd_tx = tx.clone();
        tokio::spawn(async move {
            while let Some(update) = stream_rx.recv().await {
                if fwd_tx.send(AppMessage::Stream(update)).await.is_err() {
                    break;
                }
            }
        });

        // ── Periodic timers ───────────────────────────────────────────────────
        // The first tick of an interval completes immediately, which doubles
        // as the initial fetch of everything.
        let mut status_poll =
            tokio::time::interval(Duration::from_secs(self.config.polling.status_interval_secs));
        status_poll.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let mut log_poll =
            tokio::time::interval(Duration::from_secs(self.config.polling.log_interval_secs));
        log_poll.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        // Toast expiry + component upkeep.
        let mut ui_tick = tokio::time::interval(Duration::from_millis(100));
        ui_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        // Chart repaint cadence — the strip chart redraws every frame for the
        // lifetime of the view, independent of message arrival.
        let mut render_tick = tokio::time::interval(Duration::from_millis(50));
        render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        info!("scanmon started, backend {}", self.config.server.base_url);

        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal.draw(|f| self.draw(f))?;
            }
            needs_redraw = false;

            if self.should_quit {
                break;
            }

            tokio::select! {
                Some(msg) = rx.recv() => {
                    const MAX_DRAIN: usize = 128;
                    let mut redraw = self.handle_message(msg);
                    let mut drained = 0usize;
                    while drained < MAX_DRAIN {
                        match rx.try_recv() {
                            Ok(next) => {
                                drained += 1;
                                redraw |= self.handle_message(next);
                            }
                            Err(_) => break,
                        }
                    }
                    needs_redraw = redraw;
                }

                _ = status_poll.tick() => {
                    self.spawn_status_poll();
                }

                _ = log_poll.tick() => {
                    self.spawn_log_fetch();
                    self.spawn_directory_fetch();
                    self.spawn_recordings_fetch();
                }

                _ = ui_tick.tick() => {
                    self.toast.tick();
                    let actions = [
                        self.strip_chart.tick(&self.state),
                        self.active_panel.tick(&self.state),
                        self.log_panel.tick(&self.state),
                    ]
                    .concat();
                    for action in actions {
                        self.dispatch(action);
                    }
                    needs_redraw = true;
                }

                _ = render_tick.tick() => {
                    needs_redraw = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // ── Teardown ──────────────────────────────────────────────────────────
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    // ── Message handling ──────────────────────────────────────────────────────

    /// Returns `true` when the message changed something worth a redraw.
    /// High-rate signal events return `false`; the render tick repaints the
    /// chart anyway.
    fn handle_message(&mut self, msg: AppMessage) -> bool {
        match msg {
            AppMessage::Input(Event::Key(key)) => {
                if key.kind == KeyEventKind::Release {
                    return false;
                }
                let actions = self.handle_key(key);
                for action in actions {
                    self.dispatch(action);
                }
                true
            }
            AppMessage::Input(Event::Resize(..)) => true,
            AppMessage::Input(_) => false,

            AppMessage::Stream(update) => self.handle_stream_update(update),

            AppMessage::Frequencies(records) => {
                debug!("directory refreshed: {} records", records.len());
                self.state.directory.replace(records);
                true
            }
            AppMessage::Transmissions(records) => {
                debug!("transmission log fetched: {} records", records.len());
                self.state.log_view.set_records(records);
                true
            }
            AppMessage::Recordings(records) => {
                self.state.recordings = records;
                true
            }
            AppMessage::RecordingStats(stats) => {
                self.state.recording_stats = Some(stats);
                true
            }
            AppMessage::ScannerStatus(status) => {
                self.state.scanner_status = Some(status);
                self.state.status_stale = false;
                true
            }
            AppMessage::AudioStatus(status) => {
                self.state.audio_status = Some(status);
                self.state.status_stale = false;
                true
            }
            AppMessage::StatusFailed(error) => {
                debug!("status poll failed: {}", error);
                self.state.status_stale = true;
                self.toast.warning("status poll failed");
                true
            }
            AppMessage::FetchFailed { what, error } => {
                warn!("{} fetch failed: {}", what, error);
                self.toast.error(format!("{} fetch failed: {}", what, error));
                true
            }
            AppMessage::CommandDone(message) => {
                self.toast.success(message);
                true
            }
            AppMessage::CommandFailed { what, error } => {
                warn!("{} failed: {}", what, error);
                self.toast.error(format!("{} failed: {}", what, error));
                true
            }
            AppMessage::FrequencyMutated(message) => {
                self.toast.success(message);
                self.spawn_directory_fetch();
                true
            }
        }
    }

    fn handle_stream_update(&mut self, update: StreamUpdate) -> bool {
        match update {
            StreamUpdate::Opened => {
                self.state.connected = true;
                self.toast.success("stream connected");
                true
            }
            StreamUpdate::Closed => {
                self.state.connected = false;
                self.toast.warning(format!(
                    "stream disconnected · retrying in {}s",
                    self.config.server.reconnect_delay_secs
                ));
                true
            }
            StreamUpdate::Event(event) => self.handle_stream_event(event),
        }
    }

    fn handle_stream_event(&mut self, event: StreamEvent) -> bool {
        match event {
            StreamEvent::SignalStrength {
                frequency,
                signal_strength,
                ..
            } => {
                let frequency_hz = frequency.round() as u64;
                self.state.stats.push(SignalSample {
                    frequency_hz,
                    strength_dbm: signal_strength,
                });
                let name = self
                    .state
                    .resolve_name(frequency)
                    .map(|s| s.to_string());
                self.state.active.observe(
                    frequency_hz,
                    signal_strength,
                    self.state.squelch_threshold_dbm,
                    name,
                    Instant::now(),
                );
                // The render tick picks this up.
                false
            }
            StreamEvent::FrequencyUpdate { frequency, .. } => {
                self.state.current_frequency_hz = Some(frequency);
                false
            }
            StreamEvent::ScannerStatus {
                is_scanning,
                current_frequency,
                scan_list_size,
                sdr_connected,
                scan_index,
                timestamp,
            } => {
                self.state.scanner_status = Some(ScannerStatus {
                    is_scanning,
                    current_frequency,
                    scan_list_size,
                    sdr_connected,
                    scan_index,
                    timestamp,
                });
                self.state.status_stale = false;
                true
            }
            StreamEvent::TransmissionStart {
                frequency,
                signal_strength,
                ..
            } => {
                let label = self
                    .state
                    .resolve_name(frequency)
                    .map(|n| format!("{} ({})", format_mhz(frequency), n))
                    .unwrap_or_else(|| format_mhz(frequency));
                self.toast
                    .info(format!("▲ {} · {:.1} dBm", label, signal_strength));
                let frequency_hz = frequency.round() as u64;
                let name = self.state.resolve_name(frequency).map(|s| s.to_string());
                self.state.active.observe(
                    frequency_hz,
                    signal_strength,
                    self.state.squelch_threshold_dbm,
                    name,
                    Instant::now(),
                );
                true
            }
            StreamEvent::TransmissionEnd {
                frequency, duration, ..
            } => {
                let label = self
                    .state
                    .resolve_name(frequency)
                    .map(|n| format!("{} ({})", format_mhz(frequency), n))
                    .unwrap_or_else(|| format_mhz(frequency));
                self.toast.info(format!("▽ {} · {:.1}s", label, duration));
                true
            }
        }
    }

    // ── Key handling ──────────────────────────────────────────────────────────

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Action> {
        // A panel with an open input owns the keyboard outright.
        if self.focused_component().wants_keyboard() {
            return self.focused_key(key);
        }

        match key.code {
            KeyCode::Char('q') => return vec![Action::Quit],
            KeyCode::Tab => return vec![Action::FocusNext],
            KeyCode::Char('1') => return vec![Action::FocusPane(ComponentId::StripChart)],
            KeyCode::Char('2') => return vec![Action::FocusPane(ComponentId::ActivePanel)],
            KeyCode::Char('3') => return vec![Action::FocusPane(ComponentId::LogPanel)],
            KeyCode::Char('s') => {
                let scanning = self
                    .state
                    .scanner_status
                    .as_ref()
                    .map(|s| s.is_scanning)
                    .unwrap_or(false);
                return if scanning {
                    vec![Action::StopScanner]
                } else {
                    vec![Action::StartScanner]
                };
            }
            KeyCode::Char('a') => {
                let enabled = self
                    .state
                    .audio_status
                    .as_ref()
                    .map(|a| a.audio_enabled)
                    .unwrap_or(false);
                return if enabled {
                    vec![Action::DisableAudio]
                } else {
                    vec![Action::EnableAudio]
                };
            }
            KeyCode::Char('r') => {
                return vec![Action::RefreshLog, Action::RefreshDirectory];
            }
            KeyCode::Char('*') => return vec![Action::ToggleRecordingFavorite],
            KeyCode::Esc if !self.toast.is_empty() => {
                self.toast.dismiss_all();
                return Vec::new();
            }
            _ => {}
        }

        self.focused_key(key)
    }

    fn focused_component(&self) -> &dyn Component {
        match self.focus {
            ComponentId::StripChart => &self.strip_chart,
            ComponentId::ActivePanel => &self.active_panel,
            ComponentId::LogPanel => &self.log_panel,
        }
    }

    fn focused_key(&mut self, key: KeyEvent) -> Vec<Action> {
        match self.focus {
            ComponentId::StripChart => self.strip_chart.handle_key(key, &self.state),
            ComponentId::ActivePanel => self.active_panel.handle_key(key, &self.state),
            ComponentId::LogPanel => self.log_panel.handle_key(key, &self.state),
        }
    }

    // ── Action dispatch ───────────────────────────────────────────────────────

    fn dispatch(&mut self, action: Action) {
        match action {
            Action::StartScanner => {
                self.spawn_command("scanner start", |api| async move { api.start_scanner().await })
            }
            Action::StopScanner => {
                self.spawn_command("scanner stop", |api| async move { api.stop_scanner().await })
            }
            Action::EnableAudio => {
                self.spawn_command("audio enable", |api| async move { api.enable_audio().await })
            }
            Action::DisableAudio => {
                self.spawn_command("audio disable", |api| async move { api.disable_audio().await })
            }

            Action::RefreshLog => {
                self.spawn_log_fetch();
                self.spawn_recordings_fetch();
            }
            Action::RefreshDirectory => self.spawn_directory_fetch(),

            Action::CycleSort => {
                let next = self.state.log_view.sort().next();
                self.state.log_view.set_sort(next);
            }
            Action::CycleSortReverse => {
                let prev = self.state.log_view.sort().prev();
                self.state.log_view.set_sort(prev);
            }
            Action::NextPage => self.state.log_view.next_page(),
            Action::PrevPage => self.state.log_view.prev_page(),
            Action::SetDayFilter(day) => self.state.log_view.set_day_filter(day),
            Action::SetFrequencyFilter(hz) => self.state.log_view.set_frequency_filter(hz),
            Action::ClearFilters => {
                self.state.log_view.set_day_filter(None);
                self.state.log_view.set_frequency_filter(None);
            }

            Action::CreateFrequency(new) => {
                // Validation gate: nothing invalid reaches the wire.
                if let Err(e) = new.validate() {
                    self.toast.error(e);
                    return;
                }
                let label = if new.friendly_name.is_empty() {
                    format_mhz(new.frequency)
                } else {
                    new.friendly_name.clone()
                };
                self.spawn_mutation(format!("added {}", label), move |api| async move {
                    api.create_frequency(&new).await
                });
            }
            Action::ToggleFrequencyEnabled(id, enabled) => {
                let verb = if enabled { "enabled" } else { "disabled" };
                self.spawn_mutation(format!("frequency {}", verb), move |api| async move {
                    api.set_frequency_enabled(id, enabled).await
                });
            }
            Action::DeleteFrequency(id) => {
                self.spawn_mutation("frequency deleted".to_string(), move |api| async move {
                    api.delete_frequency(id).await
                });
            }
            Action::CleanupOlderThan(days) => {
                let tx = self.tx.clone();
                let api = self.api.clone();
                let limit = self.config.polling.transmission_limit;
                tokio::spawn(async move {
                    let Some(tx) = tx else { return };
                    match api.maintenance_cleanup(days).await {
                        Ok(()) => {
                            let _ = tx
                                .send(AppMessage::CommandDone(format!(
                                    "cleaned up logs older than {} days",
                                    days
                                )))
                                .await;
                            if let Ok(records) = api.transmissions(limit).await {
                                let _ = tx.send(AppMessage::Transmissions(records)).await;
                            }
                        }
                        Err(e) => {
                            let _ = tx
                                .send(AppMessage::CommandFailed {
                                    what: "cleanup",
                                    error: e.to_string(),
                                })
                                .await;
                        }
                    }
                });
            }

            Action::ClearPeak => {
                self.state.stats.clear();
                self.toast.info("signal stats cleared");
            }

            Action::ToggleRecordingFavorite => {
                let Some(latest) = self.state.recordings.first().cloned() else {
                    self.toast.info("no recordings yet");
                    return;
                };
                let verb = if latest.is_favorite { "unstarred" } else { "starred" };
                self.spawn_command_with_refresh(
                    format!("{} {}", verb, latest.filename),
                    move |api| async move {
                        api.set_recording_favorite(latest.id, !latest.is_favorite)
                            .await
                    },
                );
            }

            Action::FocusNext => {
                let current = self.focused_component().id();
                let idx = FOCUS_ORDER
                    .iter()
                    .position(|&c| c == current)
                    .unwrap_or(0);
                self.focus = FOCUS_ORDER[(idx + 1) % FOCUS_ORDER.len()];
            }
            Action::FocusPane(id) => self.focus = id,
            Action::InvalidInput(message) => self.toast.error(message),
            Action::Quit => self.should_quit = true,
        }
    }

    // ── Background fetch helpers ──────────────────────────────────────────────

    fn spawn_status_poll(&self) {
        let Some(tx) = self.tx.clone() else { return };
        let api = self.api.clone();
        tokio::spawn(async move {
            match api.scanner_status().await {
                Ok(status) => {
                    let _ = tx.send(AppMessage::ScannerStatus(status)).await;
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::StatusFailed(e.to_string())).await;
                    return;
                }
            }
            match api.audio_status().await {
                Ok(status) => {
                    let _ = tx.send(AppMessage::AudioStatus(status)).await;
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::StatusFailed(e.to_string())).await;
                }
            }
        });
    }

    fn spawn_log_fetch(&self) {
        let Some(tx) = self.tx.clone() else { return };
        let api = self.api.clone();
        let limit = self.config.polling.transmission_limit;
        tokio::spawn(async move {
            match api.transmissions(limit).await {
                Ok(records) => {
                    let _ = tx.send(AppMessage::Transmissions(records)).await;
                }
                Err(e) => {
                    let _ = tx
                        .send(AppMessage::FetchFailed {
                            what: "transmission log",
                            error: e.to_string(),
                        })
                        .await;
                }
            }
        });
    }

    fn spawn_directory_fetch(&self) {
        let Some(tx) = self.tx.clone() else { return };
        let api = self.api.clone();
        tokio::spawn(async move {
            match api.frequencies().await {
                Ok(records) => {
                    let _ = tx.send(AppMessage::Frequencies(records)).await;
                }
                Err(e) => {
                    let _ = tx
                        .send(AppMessage::FetchFailed {
                            what: "frequency directory",
                            error: e.to_string(),
                        })
                        .await;
                }
            }
        });
    }

    /// Recording metadata + the stats summary tile, fetched together.
    fn spawn_recordings_fetch(&self) {
        let Some(tx) = self.tx.clone() else { return };
        let api = self.api.clone();
        tokio::spawn(async move {
            match api.recording_stats().await {
                Ok(stats) => {
                    let _ = tx.send(AppMessage::RecordingStats(stats)).await;
                }
                Err(e) => {
                    // The stats tile is decorative; log only.
                    debug!("recording stats fetch failed: {}", e);
                }
            }
            match api.recordings(50).await {
                Ok(records) => {
                    let _ = tx.send(AppMessage::Recordings(records)).await;
                }
                Err(e) => {
                    debug!("recordings fetch failed: {}", e);
                }
            }
        });
    }

    /// Fire-and-forget command with a success/failure toast.
    fn spawn_command<F, Fut>(&self, what: &'static str, f: F)
    where
        F: FnOnce(ApiClient) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = anyhow::Result<()>> + Send,
    {
        let Some(tx) = self.tx.clone() else { return };
        let api = self.api.clone();
        tokio::spawn(async move {
            match f(api).await {
                Ok(()) => {
                    let _ = tx.send(AppMessage::CommandDone(format!("{} ok", what))).await;
                }
                Err(e) => {
                    let _ = tx
                        .send(AppMessage::CommandFailed {
                            what,
                            error: e.to_string(),
                        })
                        .await;
                }
            }
        });
    }

    /// Command followed by a recordings refetch on success, so the header
    /// reflects the confirmed server state.
    fn spawn_command_with_refresh<F, Fut>(&self, done: String, f: F)
    where
        F: FnOnce(ApiClient) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = anyhow::Result<()>> + Send,
    {
        let Some(tx) = self.tx.clone() else { return };
        let api = self.api.clone();
        tokio::spawn(async move {
            match f(api.clone()).await {
                Ok(()) => {
                    let _ = tx.send(AppMessage::CommandDone(done)).await;
                    if let Ok(records) = api.recordings(50).await {
                        let _ = tx.send(AppMessage::Recordings(records)).await;
                    }
                }
                Err(e) => {
                    let _ = tx
                        .send(AppMessage::CommandFailed {
                            what: "recording update",
                            error: e.to_string(),
                        })
                        .await;
                }
            }
        });
    }

    /// Registry write: on success the directory is re-fetched so the local
    /// cache only ever changes via a confirmed round-trip.
    fn spawn_mutation<F, Fut>(&self, done: String, f: F)
    where
        F: FnOnce(ApiClient) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = anyhow::Result<()>> + Send,
    {
        let Some(tx) = self.tx.clone() else { return };
        let api = self.api.clone();
        tokio::spawn(async move {
            match f(api).await {
                Ok(()) => {
                    let _ = tx.send(AppMessage::FrequencyMutated(done)).await;
                }
                Err(e) => {
                    let _ = tx
                        .send(AppMessage::CommandFailed {
                            what: "frequency update",
                            error: e.to_string(),
                        })
                        .await;
                }
            }
        });
    }

    // ── Drawing ───────────────────────────────────────────────────────────────

    fn draw(&mut self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(10),
                Constraint::Length(12),
                Constraint::Length(1),
            ])
            .split(area);

        header::draw(frame, rows[0], &self.state);
        self.strip_chart.draw(
            frame,
            rows[1],
            self.focus == ComponentId::StripChart,
            &self.state,
        );

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
            .split(rows[2]);
        self.active_panel.draw(
            frame,
            bottom[0],
            self.focus == ComponentId::ActivePanel,
            &self.state,
        );
        self.log_panel.draw(
            frame,
            bottom[1],
            self.focus == ComponentId::LogPanel,
            &self.state,
        );

        status_bar::draw(frame, rows[3], &self.state);
        self.toast.draw(frame, area);
    }
}
