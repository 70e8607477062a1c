/// Ratatui view of the word-guessing game - rendering only, no game logic
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::games::wordguess::game::{MessageTone, WordguessGame};
use crate::games::wordguess::round::RoundState;

pub fn draw(frame: &mut Frame, game: &WordguessGame) {
    let round = game.engine().round();
    let session = game.engine().session();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Length(2), // prompt
            Constraint::Length(2), // masked word
            Constraint::Length(2), // status message
            Constraint::Length(1), // wrong guesses
            Constraint::Length(2), // attempts left
            Constraint::Length(2), // hint
            Constraint::Length(3), // end-of-round banner
            Constraint::Min(0),
            Constraint::Length(1), // session footer
        ])
        .split(frame.area());

    frame.render_widget(
        Paragraph::new(" WORD GUESSING GAME 🎉 ")
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new("Press any letter key to guess:").alignment(Alignment::Center),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(masked_word_line(round)).alignment(Alignment::Center),
        chunks[2],
    );

    let (status, status_style) = match game.message() {
        Some((text, tone)) => (text.as_str(), message_style(*tone)),
        None => (
            "Start guessing by pressing a letter key!",
            Style::default().fg(Color::Gray),
        ),
    };
    frame.render_widget(
        Paragraph::new(status)
            .style(status_style)
            .alignment(Alignment::Center),
        chunks[3],
    );

    frame.render_widget(
        Paragraph::new(wrong_guess_line(round, game.shake_ms()))
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center),
        chunks[4],
    );

    frame.render_widget(
        Paragraph::new(format!(
            "Attempts left: {} {}",
            round.attempts_left(),
            "❤".repeat(round.attempts_left())
        ))
        .alignment(Alignment::Center),
        chunks[5],
    );

    if round.hint_visible() && !round.is_over() {
        frame.render_widget(
            Paragraph::new(format!("💡 Hint: {}", round.hint()))
                .style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::ITALIC),
                )
                .alignment(Alignment::Center),
            chunks[6],
        );
    }

    if round.is_over() {
        frame.render_widget(banner(round), chunks[7]);
    }

    frame.render_widget(
        Paragraph::new(format!(
            "Rounds Played: {} | Score: {}",
            session.rounds_played, session.score
        ))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center),
        chunks[9],
    );
}

/// The masked word: revealed letters highlighted, hidden cells as
/// underscores.
fn masked_word_line(round: &RoundState) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, c) in round.word().char_indices() {
        let (glyph, style) = if round.revealed().contains(&i) {
            (
                c.to_ascii_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ('_', Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(format!(" {glyph} "), style));
    }
    Line::from(spans)
}

/// The wrong-guess list, nudged sideways while the shake timer runs.
fn wrong_guess_line(round: &RoundState, shake_ms: u32) -> String {
    let letters = if round.wrong_letters().is_empty() {
        "None".to_string()
    } else {
        round
            .wrong_letters()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let nudge = if (shake_ms / 100) % 2 == 1 { "  " } else { "" };
    format!("{nudge}Wrong guesses: {letters}")
}

fn message_style(tone: MessageTone) -> Style {
    match tone {
        MessageTone::Correct => Style::default().fg(Color::Green),
        MessageTone::Wrong => Style::default().fg(Color::Red),
        MessageTone::Info => Style::default().fg(Color::Yellow),
    }
}

fn banner(round: &RoundState) -> Paragraph<'static> {
    let headline = if round.is_win() {
        Span::styled(
            "You won! 🎉",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!(
                "You lost! 😢 The word was \"{}\"",
                round.word().to_ascii_uppercase()
            ),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    };
    let lines = vec![
        Line::from(headline),
        Line::from(Span::styled(
            "Press Enter to play again, Esc to quit",
            Style::default().fg(Color::Gray),
        )),
    ];
    Paragraph::new(lines).alignment(Alignment::Center)
}
