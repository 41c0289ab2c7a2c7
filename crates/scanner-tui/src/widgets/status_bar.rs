//! Bottom status bar — connection badge plus key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app_state::AppState;
use crate::theme::{C_ERROR, C_LIVE, C_MUTED, C_SECONDARY};

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.height == 0 {
        return;
    }

    let (badge, badge_style) = if state.connected {
        (" LIVE ", Style::default().fg(C_LIVE).add_modifier(Modifier::BOLD))
    } else {
        (" RETRY ", Style::default().fg(C_ERROR).add_modifier(Modifier::BOLD))
    };

    let hints = " q quit · tab focus · s scan · a audio · r refresh · o sort · d/f filter · x cleanup";
    let line = Line::from(vec![
        Span::styled(badge, badge_style),
        Span::styled(hints, Style::default().fg(C_MUTED)),
        Span::styled(
            format!(
                "  {} freqs in directory",
                state.directory.len()
            ),
            Style::default().fg(C_SECONDARY),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
