/// Core game interface for the wordterm framework
use std::time::Duration;

use crossterm::event::KeyEvent;

use crate::core::effects::EffectHook;

/// Main game trait run by the engine loop.
///
/// A game owns its state, consumes key events, and draws itself into a
/// Ratatui frame. Time-based presentation state advances through `on_tick`.
pub trait Game {
    /// Handle a key press. `fx` is the host-supplied effect hook that games
    /// fire on state transitions (e.g. a win celebration).
    fn handle_key(&mut self, event: KeyEvent, fx: &mut dyn EffectHook);

    /// Render the current state into the Ratatui frame.
    fn render(&self, frame: &mut ratatui::Frame);

    /// How often `on_tick` should fire. `None` for games without
    /// time-based state.
    fn tick_rate(&self) -> Option<Duration> {
        None
    }

    /// Advance time-based state. `dt` is milliseconds since the last tick.
    fn on_tick(&mut self, _dt: u32) {}
}
