use std::sync::Arc;

use anyhow::{Context, Result};

use wordterm::core::engine::Engine;
use wordterm::games::wordguess::{Catalog, Confetti, WordguessGame};

fn main() -> Result<()> {
    init_logging()?;

    // Optional catalog override: `wordterm path/to/words.json`
    let args: Vec<String> = std::env::args().collect();
    let catalog = match args.get(1) {
        Some(path) => Catalog::load_file(path)?,
        None => Catalog::load_default().context("built-in word catalog is invalid")?,
    };

    let engine = Engine::new(WordguessGame::new(catalog), Confetti::new());
    let terminal = ratatui::init();
    let result = engine.run(terminal);
    ratatui::restore();
    result
}

/// Log to a file, and only when RUST_LOG is set. The TUI owns the terminal,
/// so nothing may write to stdout or stderr while it runs.
fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = std::fs::File::create("wordterm.log").context("failed to create log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
