/// One-shot visual effects fired by games on state transitions
use ratatui::Frame;

/// Host-supplied hook for transient visual effects.
///
/// Games fire these when a transition happens (e.g. the round is won); the
/// engine draws any active effect on top of the game frame. Effects never
/// feed back into game state.
pub trait EffectHook {
    /// Fire the win celebration.
    fn celebrate(&mut self);

    /// Advance effect animation. `dt` is milliseconds since the last tick.
    fn on_tick(&mut self, _dt: u32) {}

    /// Draw the active effect over the game frame.
    fn render(&self, _frame: &mut Frame) {}
}

/// Inert hook for tests and headless runs.
pub struct NoEffects;

impl EffectHook for NoEffects {
    fn celebrate(&mut self) {}
}
