use rand::Rng;
use ratatui::{
    layout::Position,
    style::{Color, Style},
    Frame,
};

use crate::core::effects::EffectHook;

/// Lifetime of one celebration burst.
const BURST_MS: u32 = 2000;
const PARTICLE_COUNT: usize = 80;
const GLYPHS: [char; 4] = ['*', '+', 'o', '.'];
const COLORS: [Color; 5] = [
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Cyan,
    Color::Red,
];

#[derive(Debug)]
struct Particle {
    /// Horizontal position as a fraction of the frame width.
    x: f32,
    /// Fall speed in rows per second.
    speed: f32,
    glyph: char,
    color: Color,
}

/// Win celebration: a short burst of falling particles drawn over the game
/// frame. Purely visual; never touches game state.
#[derive(Debug, Default)]
pub struct Confetti {
    particles: Vec<Particle>,
    age_ms: u32,
}

impl Confetti {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }
}

impl EffectHook for Confetti {
    fn celebrate(&mut self) {
        let mut rng = rand::rng();
        self.age_ms = 0;
        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.random_range(0.0..1.0),
                speed: rng.random_range(4.0..12.0),
                glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
                color: COLORS[rng.random_range(0..COLORS.len())],
            })
            .collect();
    }

    fn on_tick(&mut self, dt: u32) {
        if self.particles.is_empty() {
            return;
        }
        self.age_ms += dt;
        if self.age_ms >= BURST_MS {
            self.particles.clear();
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        if self.particles.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }
        let elapsed = self.age_ms as f32 / 1000.0;
        let buf = frame.buffer_mut();
        for particle in &self.particles {
            let col = area.x + (particle.x * (area.width - 1) as f32) as u16;
            let row = (particle.speed * elapsed) as u32;
            if row >= area.height as u32 {
                continue;
            }
            let pos = Position::new(col, area.y + row as u16);
            if let Some(cell) = buf.cell_mut(pos) {
                cell.set_char(particle.glyph)
                    .set_style(Style::default().fg(particle.color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celebrate_spawns_a_burst() {
        let mut confetti = Confetti::new();
        assert!(!confetti.is_active());
        confetti.celebrate();
        assert!(confetti.is_active());
    }

    #[test]
    fn burst_dies_out_after_its_lifetime() {
        let mut confetti = Confetti::new();
        confetti.celebrate();
        confetti.on_tick(BURST_MS / 2);
        assert!(confetti.is_active());
        confetti.on_tick(BURST_MS / 2);
        assert!(!confetti.is_active());
    }

    #[test]
    fn ticking_an_idle_effect_is_a_no_op() {
        let mut confetti = Confetti::new();
        confetti.on_tick(10_000);
        assert!(!confetti.is_active());
    }

    #[test]
    fn a_new_celebration_restarts_the_clock() {
        let mut confetti = Confetti::new();
        confetti.celebrate();
        confetti.on_tick(BURST_MS - 1);
        confetti.celebrate();
        confetti.on_tick(BURST_MS - 1);
        assert!(confetti.is_active());
    }
}
