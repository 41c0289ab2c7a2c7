//! Stream connection manager — owns the push-channel lifecycle.
//!
//! One task, one channel: connect, read until closed, then wait the fixed
//! reconnect delay and try again, forever.  The retry bookkeeping lives in
//! [`ReconnectState`], a plain state machine with an injectable delay so
//! the no-stacking guarantee is testable without sockets.
//!
//! Malformed or unrecognized frames are dropped per message; they never
//! abort the channel.  In-memory aggregates are owned by the app, so a
//! reconnect loses nothing.

use std::time::Duration;

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};

use scanner_proto::protocol::{decode_event, EventError, StreamEvent};

/// Fixed delay between a channel closing and the next connect attempt.
pub const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Channel lifecycle states: exactly one live channel per client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Open,
    ClosedPendingRetry,
}

/// Reconnect state machine.
///
/// Guarantees, pinned by the tests below:
/// - `try_begin_connect` refuses while a channel is live, connecting, or a
///   retry is already scheduled — a second channel can never be created.
/// - `on_closed` schedules at most one retry per closure.
/// - Retries are unbounded: no backoff growth, no attempt cap.
#[derive(Debug)]
pub struct ReconnectState {
    state: ConnectionState,
    delay: Duration,
    retry_scheduled: bool,
    attempts: u64,
}

impl ReconnectState {
    pub fn new() -> Self {
        Self::with_delay(RECONNECT_DELAY)
    }

    /// Injectable delay, for tests.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            state: ConnectionState::ClosedPendingRetry,
            delay,
            retry_scheduled: false,
            attempts: 0,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Ask to open a channel.  `true` means the caller owns the attempt;
    /// `false` means one is already live, in flight, or scheduled.
    pub fn try_begin_connect(&mut self) -> bool {
        match self.state {
            ConnectionState::Open | ConnectionState::Connecting => false,
            ConnectionState::ClosedPendingRetry if self.retry_scheduled => false,
            ConnectionState::ClosedPendingRetry => {
                self.state = ConnectionState::Connecting;
                self.attempts += 1;
                true
            }
        }
    }

    pub fn on_open(&mut self) {
        self.state = ConnectionState::Open;
        self.retry_scheduled = false;
    }

    /// The channel fully closed (remote close, error, or failed connect).
    /// Returns `Some(delay)` exactly once per closure; the caller must
    /// schedule one retry for it.
    pub fn on_closed(&mut self) -> Option<Duration> {
        if self.state == ConnectionState::ClosedPendingRetry && self.retry_scheduled {
            return None;
        }
        self.state = ConnectionState::ClosedPendingRetry;
        self.retry_scheduled = true;
        Some(self.delay)
    }

    /// The scheduled retry timer fired; connecting is allowed again.
    pub fn on_retry_due(&mut self) {
        self.retry_scheduled = false;
    }
}

impl Default for ReconnectState {
    fn default() -> Self {
        Self::new()
    }
}

/// What the stream task reports to the app loop.
#[derive(Debug)]
pub enum StreamUpdate {
    Opened,
    Closed,
    Event(StreamEvent),
}

/// Spawn the connection manager.  Runs until the receiver side of `tx` is
/// dropped (app shutdown).
pub fn start(url: String, delay: Duration, tx: mpsc::Sender<StreamUpdate>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut reconnect = ReconnectState::with_delay(delay);
        loop {
            if !reconnect.try_begin_connect() {
                // Only reachable through a bookkeeping bug; never spin.
                warn!(
                    "stream: connect refused in state {:?}, resetting",
                    reconnect.state()
                );
                reconnect.on_retry_due();
                continue;
            }

            match run_channel(&url, &tx, &mut reconnect).await {
                Ok(()) => info!("stream: channel closed by server"),
                Err(e) => warn!("stream: channel error: {}", e),
            }

            let Some(wait) = reconnect.on_closed() else {
                continue;
            };
            if tx.send(StreamUpdate::Closed).await.is_err() {
                return; // app is gone
            }
            debug!(
                "stream: retrying in {:?} (attempt {})",
                wait,
                reconnect.attempts()
            );
            tokio::time::sleep(wait).await;
            reconnect.on_retry_due();
        }
    })
}

/// One channel lifetime: connect, announce, read frames until it ends.
async fn run_channel(
    url: &str,
    tx: &mpsc::Sender<StreamUpdate>,
    reconnect: &mut ReconnectState,
) -> anyhow::Result<()> {
    let (ws, _) = connect_async(url).await?;
    reconnect.on_open();
    info!("stream: connected to {}", url);
    tx.send(StreamUpdate::Opened)
        .await
        .map_err(|_| anyhow::anyhow!("app channel closed"))?;

    let (_write, mut read) = ws.split();
    while let Some(item) = read.next().await {
        match item? {
            Message::Text(text) => match decode_event(text.as_str()) {
                Ok(event) => {
                    if tx.send(StreamUpdate::Event(event)).await.is_err() {
                        anyhow::bail!("app channel closed");
                    }
                }
                Err(EventError::UnknownKind(kind)) => {
                    debug!("stream: dropping unrecognized event kind `{}`", kind);
                }
                Err(EventError::Malformed(e)) => {
                    debug!("stream: dropping malformed frame: {}", e);
                }
            },
            Message::Close(_) => break,
            // Pings are answered by the protocol layer; binary frames are
            // not part of this protocol.
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_schedules_exactly_one_retry_at_the_configured_delay() {
        let mut rs = ReconnectState::with_delay(Duration::from_millis(5000));
        assert!(rs.try_begin_connect());
        rs.on_open();
        assert_eq!(rs.state(), ConnectionState::Open);

        assert_eq!(rs.on_closed(), Some(Duration::from_millis(5000)));
        // A second closure report while the retry is pending schedules nothing.
        assert_eq!(rs.on_closed(), None);
        assert_eq!(rs.state(), ConnectionState::ClosedPendingRetry);
    }

    #[test]
    fn connect_is_refused_while_retry_is_pending() {
        let mut rs = ReconnectState::with_delay(Duration::from_secs(5));
        assert!(rs.try_begin_connect());
        rs.on_open();
        rs.on_closed();

        // connect() invoked again before the timer fires: no duplicate channel.
        assert!(!rs.try_begin_connect());
        assert_eq!(rs.attempts(), 1);

        rs.on_retry_due();
        assert!(rs.try_begin_connect());
        assert_eq!(rs.attempts(), 2);
    }

    #[test]
    fn connect_is_refused_while_open_or_connecting() {
        let mut rs = ReconnectState::new();
        assert!(rs.try_begin_connect());
        assert_eq!(rs.state(), ConnectionState::Connecting);
        assert!(!rs.try_begin_connect());

        rs.on_open();
        assert!(!rs.try_begin_connect());
    }

    #[test]
    fn retries_are_unbounded_with_fixed_delay() {
        let mut rs = ReconnectState::with_delay(Duration::from_secs(5));
        for attempt in 1..=100u64 {
            assert!(rs.try_begin_connect());
            assert_eq!(rs.attempts(), attempt);
            // Failed connect: closes without ever opening.
            assert_eq!(rs.on_closed(), Some(Duration::from_secs(5)));
            rs.on_retry_due();
        }
    }
}
