//! Color palette and style constants for the monitor TUI.

use ratatui::style::{Color, Style};

// ── Color palette ─────────────────────────────────────────────────────────────

pub const C_BG: Color = Color::Rgb(16, 18, 20);
pub const C_PRIMARY: Color = Color::Rgb(208, 214, 220);
pub const C_SECONDARY: Color = Color::Rgb(110, 120, 132);
pub const C_MUTED: Color = Color::Rgb(70, 76, 88);
pub const C_ACCENT: Color = Color::Rgb(95, 205, 160);
pub const C_LIVE: Color = Color::Rgb(80, 200, 120);
pub const C_WARN: Color = Color::Rgb(255, 184, 80);
pub const C_ERROR: Color = Color::Rgb(255, 90, 90);
pub const C_PANEL_BORDER: Color = Color::Rgb(42, 46, 56);
pub const C_PANEL_BORDER_FOCUSED: Color = Color::Rgb(110, 140, 220);
pub const C_FILTER_BG: Color = Color::Rgb(22, 24, 34);
pub const C_FILTER_FG: Color = Color::Rgb(255, 200, 80);

// Chart colors
pub const C_GRID: Color = Color::Rgb(38, 42, 50);
pub const C_TRACE: Color = Color::Rgb(0, 200, 180);
pub const C_TRACE_FILL: Color = Color::Rgb(0, 80, 72);
pub const C_SQUELCH: Color = Color::Rgb(255, 140, 70);
pub const C_MARKER: Color = Color::Rgb(255, 255, 255);

// Toasts
pub const C_TOAST_INFO: Color = Color::Rgb(80, 160, 220);
pub const C_TOAST_SUCCESS: Color = Color::Rgb(80, 200, 120);
pub const C_TOAST_WARNING: Color = Color::Rgb(255, 184, 80);
pub const C_TOAST_ERROR: Color = Color::Rgb(255, 90, 90);

// ── Predefined styles ─────────────────────────────────────────────────────────

pub fn style_default() -> Style {
    Style::default().fg(C_PRIMARY)
}

pub fn style_focused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER_FOCUSED)
}

pub fn style_unfocused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER)
}

/// Signal strength → display color: hotter is brighter.
pub fn strength_color(dbm: f64) -> Color {
    if dbm >= -30.0 {
        C_ERROR
    } else if dbm >= -45.0 {
        C_WARN
    } else if dbm >= -60.0 {
        C_LIVE
    } else {
        C_SECONDARY
    }
}
