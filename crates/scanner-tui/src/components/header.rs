//! Dashboard header — scanner/audio status, window aggregates, recording
//! stats.  Polled data may be stale after a failed status fetch; stale
//! values render dimmed rather than disappearing.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use scanner_proto::records::format_mhz;

use crate::app_state::AppState;
use crate::logview::format_duration_hm;
use crate::theme::{self, C_ACCENT, C_ERROR, C_LIVE, C_MUTED, C_SECONDARY, C_WARN};

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::style_unfocused_border())
        .title(" scanmon ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let dim = state.status_stale;
    let status_fg = |c| if dim { C_MUTED } else { c };

    // Line 1: scanner + SDR + audio.
    let mut spans: Vec<Span> = Vec::new();
    match &state.scanner_status {
        Some(s) => {
            if s.is_scanning {
                spans.push(Span::styled(
                    " SCANNING ",
                    Style::default()
                        .fg(status_fg(C_LIVE))
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(" idle ", Style::default().fg(C_MUTED)));
            }
            let tuned = state
                .current_frequency_hz
                .unwrap_or(s.current_frequency);
            let mut tuned_label = format_mhz(tuned);
            if let Some(name) = state.resolve_name(tuned) {
                tuned_label.push_str(&format!(" ({})", name));
            }
            spans.push(Span::styled(
                format!("· {} ", tuned_label),
                Style::default().fg(status_fg(C_ACCENT)),
            ));
            spans.push(Span::styled(
                format!("· {} freqs ", s.scan_list_size),
                Style::default().fg(C_SECONDARY),
            ));
            if s.sdr_connected {
                spans.push(Span::styled("· sdr ✓ ", Style::default().fg(status_fg(C_LIVE))));
            } else {
                spans.push(Span::styled("· sdr ✗ ", Style::default().fg(C_ERROR)));
            }
        }
        None => spans.push(Span::styled(" scanner status unknown ", Style::default().fg(C_MUTED))),
    }
    match &state.audio_status {
        Some(a) if a.audio_enabled => {
            spans.push(Span::styled("· audio on ", Style::default().fg(status_fg(C_LIVE))));
            if a.recording {
                spans.push(Span::styled("● rec ", Style::default().fg(C_ERROR)));
            }
        }
        Some(_) => spans.push(Span::styled("· audio off ", Style::default().fg(C_MUTED))),
        None => {}
    }
    if dim {
        spans.push(Span::styled("(stale)", Style::default().fg(C_WARN)));
    }
    let mut lines = vec![Line::from(spans)];

    // Line 2: rolling window aggregates + active count.
    if inner.height >= 2 {
        let avg = match state.stats.average() {
            Some(v) => format!("{:.1} dBm", v),
            None => "no data".to_string(),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" peak {:.1} dBm ", state.stats.peak()),
                Style::default().fg(C_ACCENT),
            ),
            Span::styled(format!("· avg {} ", avg), Style::default().fg(C_SECONDARY)),
            Span::styled(
                format!("· {} samples ", state.stats.len()),
                Style::default().fg(C_SECONDARY),
            ),
            Span::styled(
                format!("· squelch {:.0} dBm ", state.squelch_threshold_dbm),
                Style::default().fg(C_MUTED),
            ),
            Span::styled(
                format!("· {} active", state.active.len()),
                Style::default().fg(C_LIVE),
            ),
        ]));
    }

    // Line 3: recording stats + filtered log aggregates.
    if inner.height >= 3 {
        let mut spans = Vec::new();
        match &state.recording_stats {
            Some(r) => spans.push(Span::styled(
                format!(
                    " recordings {} · {:.1} h · {:.2} GB · {} ★ ",
                    r.total_recordings, r.total_duration_hours, r.total_size_gb, r.favorite_count
                ),
                Style::default().fg(C_SECONDARY),
            )),
            None => spans.push(Span::styled(" recordings — ", Style::default().fg(C_MUTED))),
        }
        let log = state.log_view.stats();
        spans.push(Span::styled(
            format!(
                "· log {} (today {}) · {}",
                log.total,
                log.today,
                format_duration_hm(log.total_duration_secs)
            ),
            Style::default().fg(C_SECONDARY),
        ));
        if let Some(latest) = state.recordings.first() {
            let star = if latest.is_favorite { "★ " } else { "" };
            spans.push(Span::styled(
                format!(
                    " · last rec {} {}{}",
                    latest.timestamp.with_timezone(&chrono::Local).format("%H:%M"),
                    star,
                    if latest.friendly_name.is_empty() {
                        format_mhz(latest.frequency_hz)
                    } else {
                        latest.friendly_name.clone()
                    }
                ),
                Style::default().fg(C_MUTED),
            ));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
