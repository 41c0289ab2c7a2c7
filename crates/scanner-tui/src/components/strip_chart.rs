//! Strip chart — live rendering of the rolling signal window.
//!
//! The point geometry is computed by pure functions over the window
//! contents so it can be tested without a terminal; `draw` only feeds the
//! resulting point sets into a ratatui `Chart`.
//!
//! Display mapping: x is the sample index over a fixed span of
//! `WINDOW_CAPACITY` slots (a partially filled window grows from the
//! left), y is dBm with 0 at the top and −100 at the bottom.  Values
//! outside that range are kept in state untouched; the axes simply clip
//! them at draw time.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use scanner_proto::records::format_mhz;

use crate::action::{Action, ComponentId};
use crate::app_state::AppState;
use crate::component::Component;
use crate::stats::WINDOW_CAPACITY;
use crate::theme::{
    self, C_GRID, C_MARKER, C_MUTED, C_SQUELCH, C_TRACE, C_TRACE_FILL,
};

/// Fixed horizontal reference lines, in dBm.
pub const REFERENCE_LINES_DBM: [f64; 5] = [0.0, -25.0, -50.0, -75.0, -100.0];

/// Number of evenly spaced vertical time gridlines.
pub const TIME_GRIDLINES: usize = 10;

pub const CHART_MIN_DBM: f64 = -100.0;
pub const CHART_MAX_DBM: f64 = 0.0;

/// Rightmost x coordinate of the chart (index axis).
const X_MAX: f64 = (WINDOW_CAPACITY - 1) as f64;

/// Vertical sampling step used to rasterize line/fill point sets.
const Y_STEP: f64 = 2.5;

// ── Pure geometry ─────────────────────────────────────────────────────────────

/// Normalized x position of a sample index: 0.0 at the oldest slot, 1.0 at
/// the newest.
pub fn x_fraction(index: usize) -> f64 {
    index as f64 / X_MAX
}

/// Normalized height of a strength value: 0.0 at −100 dBm, 1.0 at 0 dBm.
/// The screen inverts this (0 dBm renders at the top).
pub fn y_fraction(dbm: f64) -> f64 {
    (dbm - CHART_MIN_DBM) / (CHART_MAX_DBM - CHART_MIN_DBM)
}

/// The trace: one point per sample at (index, strength).
pub fn trace_points(strengths: &[f64]) -> Vec<(f64, f64)> {
    strengths
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect()
}

/// Filled area beneath the trace: a column of points from the floor up to
/// each sample value.
pub fn fill_points(strengths: &[f64]) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    for (i, &v) in strengths.iter().enumerate() {
        let top = v.min(CHART_MAX_DBM);
        let mut y = CHART_MIN_DBM;
        while y < top {
            points.push((i as f64, y));
            y += Y_STEP;
        }
    }
    points
}

/// A horizontal line across the full index span at `dbm`.
pub fn horizontal_line(dbm: f64) -> Vec<(f64, f64)> {
    (0..WINDOW_CAPACITY).map(|i| (i as f64, dbm)).collect()
}

/// The ten vertical time gridlines, each a column of points.
pub fn time_gridlines() -> Vec<Vec<(f64, f64)>> {
    (0..TIME_GRIDLINES)
        .map(|j| {
            let x = j as f64 * X_MAX / TIME_GRIDLINES as f64;
            let mut column = Vec::new();
            let mut y = CHART_MIN_DBM;
            while y <= CHART_MAX_DBM {
                column.push((x, y));
                y += Y_STEP;
            }
            column
        })
        .collect()
}

// ── Component ─────────────────────────────────────────────────────────────────

pub struct StripChart;

impl StripChart {
    pub fn new() -> Self {
        Self
    }
}

impl Component for StripChart {
    fn id(&self) -> ComponentId {
        ComponentId::StripChart
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        match key.code {
            KeyCode::Char('c') => vec![Action::ClearPeak],
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
        let block = Block::default()
            .title(" signal ")
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme::C_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if state.stats.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "waiting for signal samples…",
                    Style::default().fg(C_MUTED),
                )),
                inner,
            );
            return;
        }

        let strengths: Vec<f64> = state.stats.samples().map(|s| s.strength_dbm).collect();

        let grid_columns = time_gridlines();
        let reference_rows: Vec<Vec<(f64, f64)>> = REFERENCE_LINES_DBM
            .iter()
            .map(|&dbm| horizontal_line(dbm))
            .collect();
        let squelch = horizontal_line(state.squelch_threshold_dbm);
        let fill = fill_points(&strengths);
        let trace = trace_points(&strengths);
        let marker = [trace[trace.len() - 1]];

        let mut datasets: Vec<Dataset> = Vec::new();
        for column in &grid_columns {
            datasets.push(
                Dataset::default()
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(C_GRID))
                    .data(column),
            );
        }
        for row in &reference_rows {
            datasets.push(
                Dataset::default()
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(C_GRID))
                    .data(row),
            );
        }
        datasets.push(
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(C_SQUELCH))
                .data(&squelch),
        );
        datasets.push(
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(C_TRACE_FILL))
                .data(&fill),
        );
        datasets.push(
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(C_TRACE))
                .data(&trace),
        );
        datasets.push(
            Dataset::default()
                .marker(Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(C_MARKER))
                .data(&marker),
        );

        let x_axis = Axis::default()
            .style(Style::default().fg(C_GRID))
            .bounds([0.0, X_MAX]);
        let y_axis = Axis::default()
            .style(Style::default().fg(C_GRID))
            .bounds([CHART_MIN_DBM, CHART_MAX_DBM]);

        frame.render_widget(Chart::new(datasets).x_axis(x_axis).y_axis(y_axis), inner);

        // Numeric label for the newest sample, top-right inside the chart.
        if let Some(latest) = state.stats.latest() {
            let label = format!(
                "{} · {:+.1} dBm ",
                format_mhz(latest.frequency_hz as f64),
                latest.strength_dbm
            );
            let w = label.chars().count() as u16;
            if inner.width > w {
                let label_area = Rect {
                    x: inner.x + inner.width - w,
                    y: inner.y,
                    width: w,
                    height: 1,
                };
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        label,
                        Style::default().fg(C_MARKER),
                    ))),
                    label_area,
                );
            }
        }
    }
}

impl Default for StripChart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_fraction_spans_unit_interval() {
        assert_eq!(x_fraction(0), 0.0);
        assert_eq!(x_fraction(WINDOW_CAPACITY - 1), 1.0);
        assert!((x_fraction(100) - 100.0 / 199.0).abs() < 1e-12);
    }

    #[test]
    fn y_fraction_maps_the_dbm_range() {
        assert_eq!(y_fraction(-100.0), 0.0);
        assert_eq!(y_fraction(0.0), 1.0);
        assert_eq!(y_fraction(-50.0), 0.5);
        // No clamping: out-of-range values map outside the unit interval.
        assert!(y_fraction(20.0) > 1.0);
        assert!(y_fraction(-130.0) < 0.0);
    }

    #[test]
    fn trace_points_keep_arrival_order() {
        let pts = trace_points(&[-80.0, -60.0, -40.0]);
        assert_eq!(pts, vec![(0.0, -80.0), (1.0, -60.0), (2.0, -40.0)]);
    }

    #[test]
    fn reference_lines_cover_the_full_span() {
        for &dbm in &REFERENCE_LINES_DBM {
            let line = horizontal_line(dbm);
            assert_eq!(line.len(), WINDOW_CAPACITY);
            assert_eq!(line.first().unwrap().0, 0.0);
            assert_eq!(line.last().unwrap().0, X_MAX);
            assert!(line.iter().all(|&(_, y)| y == dbm));
        }
    }

    #[test]
    fn ten_gridline_columns_evenly_spaced() {
        let columns = time_gridlines();
        assert_eq!(columns.len(), TIME_GRIDLINES);
        let xs: Vec<f64> = columns.iter().map(|c| c[0].0).collect();
        let spacing = xs[1] - xs[0];
        for pair in xs.windows(2) {
            assert!((pair[1] - pair[0] - spacing).abs() < 1e-9);
        }
        assert_eq!(xs[0], 0.0);
    }

    #[test]
    fn fill_stays_beneath_the_sample() {
        let pts = fill_points(&[-90.0, -20.0]);
        assert!(pts.iter().filter(|&&(x, _)| x == 0.0).all(|&(_, y)| y < -90.0 + 1e-9));
        assert!(pts.iter().filter(|&&(x, _)| x == 1.0).all(|&(_, y)| y < -20.0));
        // A sample at the floor contributes no fill.
        assert!(fill_points(&[-100.0]).is_empty());
    }
}
