use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::effects::EffectHook;
use crate::core::game::Game;
use crate::games::wordguess::catalog::Catalog;
use crate::games::wordguess::renderer;
use crate::games::wordguess::round::{GuessOutcome, RoundEngine};

/// How long the wrong-guess shake cue runs.
const SHAKE_MS: u32 = 600;

/// Tone of the transient status line; the renderer picks a color from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTone {
    Correct,
    Wrong,
    Info,
}

/// The word-guessing game: the round engine plus transient presentation
/// state (status message, shake timer, play-again handling).
pub struct WordguessGame {
    engine: RoundEngine,
    message: Option<(String, MessageTone)>,
    shake_ms: u32,
    celebrated: bool,
}

impl WordguessGame {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            engine: RoundEngine::new(catalog),
            message: None,
            shake_ms: 0,
            celebrated: false,
        }
    }

    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    pub fn message(&self) -> Option<&(String, MessageTone)> {
        self.message.as_ref()
    }

    pub fn shake_ms(&self) -> u32 {
        self.shake_ms
    }

    fn guess(&mut self, letter: char, fx: &mut dyn EffectHook) {
        let was_win = self.engine.round().is_win();
        let Some(outcome) = self.engine.apply_guess(letter) else {
            return;
        };

        let upper = letter.to_ascii_uppercase();
        self.message = Some(match outcome {
            GuessOutcome::Correct(_) => (
                format!("✅ Good job! The letter \"{upper}\" is correct!"),
                MessageTone::Correct,
            ),
            GuessOutcome::AlreadyRevealed(_) => (
                format!("⚠️ You've already revealed all \"{upper}\" letters."),
                MessageTone::Info,
            ),
            GuessOutcome::Wrong(_) => {
                self.shake_ms = SHAKE_MS;
                (
                    format!("❌ Oops! The letter \"{upper}\" is not in the word."),
                    MessageTone::Wrong,
                )
            }
        });

        // Edge-triggered: the celebration fires on the transition into the
        // win state, once per round.
        if !was_win && self.engine.round().is_win() && !self.celebrated {
            self.celebrated = true;
            fx.celebrate();
        }
    }

    fn play_again(&mut self) {
        self.engine.start_new_round();
        self.message = None;
        self.shake_ms = 0;
        self.celebrated = false;
    }
}

impl Game for WordguessGame {
    fn handle_key(&mut self, event: KeyEvent, fx: &mut dyn EffectHook) {
        match event.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.guess(c.to_ascii_lowercase(), fx);
            }
            KeyCode::Enter if self.engine.round().is_over() => {
                self.play_again();
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        renderer::draw(frame, self);
    }

    fn tick_rate(&self) -> Option<Duration> {
        Some(Duration::from_millis(50))
    }

    fn on_tick(&mut self, dt: u32) {
        self.shake_ms = self.shake_ms.saturating_sub(dt);
    }
}
