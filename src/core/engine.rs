use crate::core::effects::EffectHook;
use crate::core::game::Game;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};

pub struct Engine<G: Game, F: EffectHook> {
    game: G,
    effects: F,
}

impl<G: Game, F: EffectHook> Engine<G, F> {
    pub fn new(game: G, effects: F) -> Self {
        Self { game, effects }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| {
                self.game.render(f);
                self.effects.render(f);
            })?;

            // Poll with the tick rate as timeout so input keeps getting read
            // while the loop still wakes often enough to animate. Games
            // without ticks get a small sleep to avoid a tight loop while
            // still letting input through.
            let tick_sleep = self.game.tick_rate().unwrap_or(Duration::from_millis(16));
            if event::poll(tick_sleep)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if key.code == KeyCode::Esc {
                            break;
                        }
                        self.game.handle_key(key, &mut self.effects);
                    }
                }
            }

            let dt = last_tick.elapsed().as_millis() as u32;
            last_tick = Instant::now();
            self.game.on_tick(dt);
            self.effects.on_tick(dt);
        }

        Ok(())
    }
}
