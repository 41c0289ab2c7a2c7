//! Transmission log panel — paginated table over the fetched history.
//!
//! All data shaping (filter → sort → paginate, aggregates) lives in
//! `logview`; this component owns only the filter inputs and key handling.

use chrono::{Local, NaiveDate};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use scanner_proto::records::format_mhz;

use crate::action::{Action, ComponentId};
use crate::app_state::AppState;
use crate::component::Component;
use crate::logview::{format_duration_hm, LogStats};
use crate::theme::{
    self, strength_color, C_ACCENT, C_FILTER_BG, C_FILTER_FG, C_MUTED, C_SECONDARY, C_WARN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKind {
    Day,
    Frequency,
    Cleanup,
}

impl InputKind {
    fn prompt(self) -> &'static str {
        match self {
            Self::Day => "day (YYYY-MM-DD or `today`): ",
            Self::Frequency => "frequency (MHz): ",
            Self::Cleanup => "delete logs older than (days): ",
        }
    }
}

pub struct LogPanel {
    input: Option<(InputKind, Input)>,
}

impl LogPanel {
    pub fn new() -> Self {
        Self { input: None }
    }

    fn commit_input(&mut self, kind: InputKind, raw: &str) -> Vec<Action> {
        let raw = raw.trim();
        match kind {
            InputKind::Day => {
                if raw.is_empty() {
                    return vec![Action::SetDayFilter(None)];
                }
                let day = if raw.eq_ignore_ascii_case("today") {
                    Some(Local::now().date_naive())
                } else {
                    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
                };
                match day {
                    Some(d) => vec![Action::SetDayFilter(Some(d))],
                    None => vec![Action::InvalidInput(format!("not a date: `{}`", raw))],
                }
            }
            InputKind::Frequency => {
                if raw.is_empty() {
                    return vec![Action::SetFrequencyFilter(None)];
                }
                match raw.parse::<f64>() {
                    Ok(mhz) if mhz > 0.0 => {
                        vec![Action::SetFrequencyFilter(Some(mhz * 1e6))]
                    }
                    _ => vec![Action::InvalidInput(format!(
                        "not a positive frequency: `{}`",
                        raw
                    ))],
                }
            }
            InputKind::Cleanup => match raw.parse::<u32>() {
                Ok(days) if days > 0 => vec![Action::CleanupOlderThan(days)],
                _ => vec![Action::InvalidInput(format!("not a day count: `{}`", raw))],
            },
        }
    }
}

impl Component for LogPanel {
    fn id(&self) -> ComponentId {
        ComponentId::LogPanel
    }

    fn wants_keyboard(&self) -> bool {
        self.input.is_some()
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        if let Some((kind, input)) = self.input.as_mut() {
            return match key.code {
                KeyCode::Esc => {
                    self.input = None;
                    Vec::new()
                }
                KeyCode::Enter => {
                    let kind = *kind;
                    let raw = input.value().to_string();
                    self.input = None;
                    self.commit_input(kind, &raw)
                }
                _ => {
                    input.handle_event(&ratatui::crossterm::event::Event::Key(key));
                    Vec::new()
                }
            };
        }

        match key.code {
            KeyCode::Char('o') => vec![Action::CycleSort],
            KeyCode::Char('O') => vec![Action::CycleSortReverse],
            KeyCode::Right | KeyCode::Char('l') => vec![Action::NextPage],
            KeyCode::Left | KeyCode::Char('h') => vec![Action::PrevPage],
            KeyCode::Char('d') => {
                self.input = Some((InputKind::Day, Input::default()));
                Vec::new()
            }
            KeyCode::Char('f') => {
                self.input = Some((InputKind::Frequency, Input::default()));
                Vec::new()
            }
            KeyCode::Char('x') => {
                self.input = Some((InputKind::Cleanup, Input::default()));
                Vec::new()
            }
            KeyCode::Esc => vec![Action::ClearFilters],
            _ => Vec::new(),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let border_style = if focused {
            theme::style_focused_border()
        } else {
            theme::style_unfocused_border()
        };

        let view = &state.log_view;
        let mut title = format!(" log · {} ", view.sort().label());
        if let Some(day) = view.day_filter() {
            title.push_str(&format!("· {} ", day));
        }
        if let Some(hz) = view.frequency_filter() {
            title.push_str(&format!("· {} ", format_mhz(hz)));
        }
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height < 2 || inner.width == 0 {
            return;
        }

        // Rows: everything except the footer (and the input bar when open).
        let mut body_height = inner.height as usize - 1;
        if self.input.is_some() {
            body_height = body_height.saturating_sub(1);
        }

        let rows = view.page_rows();
        let mut lines: Vec<Line> = Vec::new();
        if rows.is_empty() {
            lines.push(Line::from(Span::styled(
                "no transmissions match",
                Style::default().fg(C_MUTED),
            )));
        }
        for record in rows.iter().take(body_height) {
            let ts = record.timestamp.with_timezone(&Local);
            let name = state
                .resolve_name(record.frequency)
                .unwrap_or("")
                .to_string();
            let zello = record.zello_delivery();
            lines.push(Line::from(vec![
                Span::styled(
                    ts.format("%m-%d %H:%M:%S ").to_string(),
                    Style::default().fg(C_SECONDARY),
                ),
                Span::styled(
                    format!("{:<13}", format_mhz(record.frequency)),
                    theme::style_default(),
                ),
                Span::styled(
                    format!("{:>7.1} dBm ", record.signal_strength),
                    Style::default().fg(strength_color(record.signal_strength)),
                ),
                Span::styled(
                    format!("{:>6.1}s ", record.duration),
                    Style::default().fg(C_SECONDARY),
                ),
                Span::styled(format!("{} ", zello.glyph()), Style::default().fg(C_MUTED)),
                Span::styled(name, Style::default().fg(C_ACCENT)),
            ]));
        }

        // Footer: pagination + aggregates over the filtered set.
        let LogStats {
            total,
            today,
            average_signal_dbm,
            total_duration_secs,
        } = view.stats();
        let avg = match average_signal_dbm {
            Some(v) => format!("{:.1} dBm", v),
            None => "—".to_string(),
        };
        let footer = format!(
            " page {}/{} · {} entries · today {} · avg {} · {}",
            view.page(),
            view.page_count(),
            total,
            today,
            avg,
            format_duration_hm(total_duration_secs),
        );
        while lines.len() < body_height {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            footer,
            Style::default().fg(C_SECONDARY).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(Paragraph::new(lines), inner);

        if let Some((kind, input)) = &self.input {
            let input_area = Rect {
                x: inner.x,
                y: inner.y + inner.height - 1,
                width: inner.width,
                height: 1,
            };
            let prompt = kind.prompt();
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(prompt, Style::default().fg(C_WARN)),
                    Span::styled(input.value(), Style::default().fg(C_FILTER_FG)),
                ]))
                .style(Style::default().bg(C_FILTER_BG)),
                input_area,
            );
            let cursor_x =
                input_area.x + prompt.chars().count() as u16 + input.visual_cursor() as u16;
            let max_x = (input_area.x + input_area.width).saturating_sub(1);
            frame.set_cursor_position((cursor_x.min(max_x), input_area.y));
        }
    }
}

impl Default for LogPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_input_parses_iso_and_today() {
        let mut panel = LogPanel::new();
        match panel.commit_input(InputKind::Day, "2026-08-06").as_slice() {
            [Action::SetDayFilter(Some(d))] => {
                assert_eq!(*d, NaiveDate::from_ymd_opt(2026, 8, 6).unwrap())
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(matches!(
            panel.commit_input(InputKind::Day, "today").as_slice(),
            [Action::SetDayFilter(Some(_))]
        ));
        assert!(matches!(
            panel.commit_input(InputKind::Day, "").as_slice(),
            [Action::SetDayFilter(None)]
        ));
        assert!(matches!(
            panel.commit_input(InputKind::Day, "08/06/2026").as_slice(),
            [Action::InvalidInput(_)]
        ));
    }

    #[test]
    fn frequency_input_converts_mhz_and_validates() {
        let mut panel = LogPanel::new();
        match panel.commit_input(InputKind::Frequency, "155.625").as_slice() {
            [Action::SetFrequencyFilter(Some(hz))] => assert_eq!(*hz, 155_625_000.0),
            other => panic!("unexpected: {:?}", other),
        }
        // Rejected before any request is issued.
        assert!(matches!(
            panel.commit_input(InputKind::Frequency, "-146.52").as_slice(),
            [Action::InvalidInput(_)]
        ));
        assert!(matches!(
            panel.commit_input(InputKind::Frequency, "junk").as_slice(),
            [Action::InvalidInput(_)]
        ));
    }

    #[test]
    fn cleanup_input_requires_positive_days() {
        let mut panel = LogPanel::new();
        assert!(matches!(
            panel.commit_input(InputKind::Cleanup, "30").as_slice(),
            [Action::CleanupOlderThan(30)]
        ));
        assert!(matches!(
            panel.commit_input(InputKind::Cleanup, "0").as_slice(),
            [Action::InvalidInput(_)]
        ));
    }
}
