//! Component trait — the interface every dashboard panel implements.
//!
//! Components own their view state (scroll positions, filter inputs) and
//! read shared data from `AppState`.  They never mutate shared state;
//! instead they return `Vec<Action>` for the App loop to dispatch.

use ratatui::crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::action::{Action, ComponentId};
use crate::app_state::AppState;

pub trait Component {
    /// Which panel is this?
    fn id(&self) -> ComponentId;

    /// Handle a key event.  Only called when this panel has focus
    /// (or for global keys the App chooses to forward).
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action>;

    /// Called each UI tick (~100ms) for time-based upkeep.
    fn tick(&mut self, _state: &AppState) -> Vec<Action> {
        Vec::new()
    }

    /// Render into `area`.  Must be a no-op for a zero-sized area.
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState);

    /// True while the panel owns the keyboard (an input field is open), so
    /// the App must not interpret global shortcuts.
    fn wants_keyboard(&self) -> bool {
        false
    }
}
