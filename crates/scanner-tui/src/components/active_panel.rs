//! Active-frequency panel — the "currently live" list, strongest first.
//!
//! Also the place where the frequency registry is edited: the selected row
//! can be added to the directory, toggled, or removed.  All edits are
//! server round-trips; the local directory updates only after the backend
//! confirms.

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
use unicode_width::UnicodeWidthStr;

use scanner_proto::records::{format_mhz, NewFrequency};

use crate::action::{Action, ComponentId};
use crate::active::ActiveEntry;
use crate::app_state::AppState;
use crate::component::Component;
use crate::theme::{
    self, strength_color, C_ACCENT, C_FILTER_BG, C_FILTER_FG, C_MUTED, C_SECONDARY,
};

pub struct ActivePanel {
    selected: usize,
    /// Open when naming a frequency for the directory (`A`).
    name_input: Option<Input>,
}

impl ActivePanel {
    pub fn new() -> Self {
        Self {
            selected: 0,
            name_input: None,
        }
    }

    fn selected_entry(&self, state: &AppState) -> Option<ActiveEntry> {
        state.active.snapshot().into_iter().nth(self.selected)
    }
}

impl Component for ActivePanel {
    fn id(&self) -> ComponentId {
        ComponentId::ActivePanel
    }

    fn wants_keyboard(&self) -> bool {
        self.name_input.is_some()
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        if let Some(input) = self.name_input.as_mut() {
            return match key.code {
                KeyCode::Esc => {
                    self.name_input = None;
                    Vec::new()
                }
                KeyCode::Enter => {
                    let name = input.value().trim().to_string();
                    self.name_input = None;
                    let Some(entry) = self.selected_entry(state) else {
                        return Vec::new();
                    };
                    let new = NewFrequency {
                        frequency: entry.frequency_hz as f64,
                        modulation: "FM".into(),
                        friendly_name: name,
                        description: String::new(),
                        enabled: true,
                        priority: 0,
                        group: String::new(),
                        tags: String::new(),
                    };
                    match new.validate() {
                        Ok(()) => vec![Action::CreateFrequency(new)],
                        Err(e) => vec![Action::InvalidInput(e)],
                    }
                }
                _ => {
                    input.handle_event(&ratatui::crossterm::event::Event::Key(key));
                    Vec::new()
                }
            };
        }

        let count = state.active.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if count > 0 {
                    self.selected = (self.selected + 1).min(count - 1);
                }
                Vec::new()
            }
            KeyCode::Enter => match self.selected_entry(state) {
                Some(entry) => vec![Action::SetFrequencyFilter(Some(entry.frequency_hz as f64))],
                None => Vec::new(),
            },
            KeyCode::Char('A') => {
                if self.selected_entry(state).is_some() {
                    self.name_input = Some(Input::default());
                }
                Vec::new()
            }
            KeyCode::Char('e') => {
                let Some(entry) = self.selected_entry(state) else {
                    return Vec::new();
                };
                match state.directory.resolve(entry.frequency_hz as f64) {
                    Some(record) => {
                        vec![Action::ToggleFrequencyEnabled(record.id, !record.enabled)]
                    }
                    None => vec![Action::InvalidInput(format!(
                        "{} is not in the directory",
                        format_mhz(entry.frequency_hz as f64)
                    ))],
                }
            }
            KeyCode::Char('D') => {
                let Some(entry) = self.selected_entry(state) else {
                    return Vec::new();
                };
                match state.directory.resolve(entry.frequency_hz as f64) {
                    Some(record) => vec![Action::DeleteFrequency(record.id)],
                    None => vec![Action::InvalidInput(format!(
                        "{} is not in the directory",
                        format_mhz(entry.frequency_hz as f64)
                    ))],
                }
            }
            _ => Vec::new(),
        }
    }

    fn tick(&mut self, state: &AppState) -> Vec<Action> {
        // Keep the cursor on a real row as entries come and go.
        let count = state.active.len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
        Vec::new()
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
        let entries = state.active.snapshot();
        let title = format!(" active · {} ", entries.len());
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if entries.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "no live transmissions",
                    Style::default().fg(C_MUTED),
                )),
                inner,
            );
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        let mut rows = inner.height as usize;
        if self.name_input.is_some() {
            rows = rows.saturating_sub(1);
        }
        for (i, entry) in entries.iter().take(rows).enumerate() {
            let is_selected = focused && i == self.selected;
            let name = entry
                .friendly_name
                .clone()
                .unwrap_or_else(|| "—".to_string());
            let age_secs = entry.last_seen.elapsed().as_secs();
            let marker = if is_selected { "▸ " } else { "  " };
            let mut name_style = Style::default().fg(C_ACCENT);
            if is_selected {
                name_style = name_style.add_modifier(Modifier::BOLD);
            }
            // Pad the name column by display width, not char count.
            let pad = 18usize.saturating_sub(name.width());
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(C_SECONDARY)),
                Span::styled(
                    format!("{:<13}", format_mhz(entry.frequency_hz as f64)),
                    theme::style_default(),
                ),
                Span::styled(
                    format!("{:>7.1} dBm  ", entry.strength_dbm),
                    Style::default().fg(strength_color(entry.strength_dbm)),
                ),
                Span::styled(format!("{}{}", name, " ".repeat(pad)), name_style),
                Span::styled(format!("{:>3}s", age_secs), Style::default().fg(C_MUTED)),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), inner);

        if let Some(input) = &self.name_input {
            let input_area = Rect {
                x: inner.x,
                y: inner.y + inner.height - 1,
                width: inner.width,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("name: ", Style::default().fg(C_SECONDARY)),
                    Span::styled(input.value(), Style::default().fg(C_FILTER_FG)),
                ]))
                .style(Style::default().bg(C_FILTER_BG)),
                input_area,
            );
            let cursor_x = input_area.x + 6 + input.visual_cursor() as u16;
            let max_x = (input_area.x + input_area.width).saturating_sub(1);
            frame.set_cursor_position((cursor_x.min(max_x), input_area.y));
        }
    }
}

impl Default for ActivePanel {
    fn default() -> Self {
        Self::new()
    }
}
