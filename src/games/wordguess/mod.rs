/// Word-guessing game module
pub mod catalog;
pub mod confetti;
pub mod game;
pub mod renderer;
pub mod round;

pub use catalog::{Catalog, WordEntry};
pub use confetti::Confetti;
pub use game::WordguessGame;
pub use round::{GuessOutcome, RoundEngine, RoundState, Session, MAX_WRONG};
