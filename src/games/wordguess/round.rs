use std::collections::BTreeSet;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::games::wordguess::catalog::{Catalog, WordEntry};

/// Wrong guesses allowed before the round is lost.
pub const MAX_WRONG: usize = 6;

/// Result of a single guess.
///
/// Consumed immediately by the presentation layer to pick a status message;
/// never queued or replayed. At most one per `apply_guess` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter revealed one new cell.
    Correct(char),
    /// Every occurrence of the letter is already revealed.
    AlreadyRevealed(char),
    /// The letter is not in the word.
    Wrong(char),
}

/// State of one round. Replaced wholesale on every new round.
#[derive(Debug, Clone)]
pub struct RoundState {
    target: WordEntry,
    revealed: BTreeSet<usize>,
    wrong_letters: Vec<char>,
    hint_visible: bool,
}

impl RoundState {
    pub fn new(target: WordEntry) -> Self {
        Self {
            target,
            revealed: BTreeSet::new(),
            wrong_letters: Vec::new(),
            hint_visible: false,
        }
    }

    pub fn word(&self) -> &str {
        &self.target.word
    }

    pub fn hint(&self) -> &str {
        &self.target.hint
    }

    pub fn revealed(&self) -> &BTreeSet<usize> {
        &self.revealed
    }

    /// Incorrect letters guessed this round, in guess order.
    pub fn wrong_letters(&self) -> &[char] {
        &self.wrong_letters
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn is_win(&self) -> bool {
        (0..self.target.word.len()).all(|i| self.revealed.contains(&i))
    }

    pub fn is_loss(&self) -> bool {
        self.wrong_letters.len() >= MAX_WRONG
    }

    pub fn is_over(&self) -> bool {
        self.is_win() || self.is_loss()
    }

    /// Wrong guesses left before the round is lost. Never negative.
    pub fn attempts_left(&self) -> usize {
        MAX_WRONG.saturating_sub(self.wrong_letters.len())
    }

    /// Apply one guessed letter.
    ///
    /// Returns `None` when the guess is ignored: the round is already over,
    /// the character is not a lowercase letter, or the letter is a repeat of
    /// a known-wrong guess.
    pub fn apply_guess(&mut self, letter: char) -> Option<GuessOutcome> {
        if self.is_over() || !letter.is_ascii_lowercase() {
            return None;
        }

        // First occurrence of the letter that is still hidden. Only that one
        // cell is revealed: a repeated letter takes repeated guesses, one
        // cell per keystroke.
        let next_hidden = self
            .target
            .word
            .char_indices()
            .find(|(i, c)| *c == letter && !self.revealed.contains(i))
            .map(|(i, _)| i);

        if let Some(index) = next_hidden {
            self.revealed.insert(index);
            self.hint_visible = false;
            return Some(GuessOutcome::Correct(letter));
        }

        if self.target.word.contains(letter) {
            return Some(GuessOutcome::AlreadyRevealed(letter));
        }

        if self.wrong_letters.contains(&letter) {
            return None;
        }
        self.wrong_letters.push(letter);
        self.hint_visible = true;
        Some(GuessOutcome::Wrong(letter))
    }
}

/// Running totals across rounds. Lives for the whole process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub rounds_played: u32,
    pub score: u32,
}

/// Owns the active round and the session totals, and deals words from the
/// catalog.
#[derive(Debug)]
pub struct RoundEngine {
    catalog: Catalog,
    round: RoundState,
    session: Session,
}

impl RoundEngine {
    pub fn new(catalog: Catalog) -> Self {
        let target = select_word(catalog.entries(), None);
        info!(word = %target.word, "starting first round");
        Self {
            catalog,
            round: RoundState::new(target),
            session: Session::default(),
        }
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn apply_guess(&mut self, letter: char) -> Option<GuessOutcome> {
        let outcome = self.round.apply_guess(letter);
        if let Some(outcome) = outcome {
            debug!(?outcome, "guess applied");
            if self.round.is_over() {
                info!(word = %self.round.word(), win = self.round.is_win(), "round over");
            }
        }
        outcome
    }

    /// Credit the finished round and deal a fresh one.
    ///
    /// Rejected (no-op) while the round is still in progress, so a stray
    /// reset can neither credit a win nor advance the session counters.
    pub fn start_new_round(&mut self) {
        if !self.round.is_over() {
            return;
        }
        if self.round.is_win() {
            self.session.score += 1;
        }
        self.session.rounds_played += 1;
        let target = select_word(self.catalog.entries(), Some(self.round.word()));
        info!(
            word = %target.word,
            rounds_played = self.session.rounds_played,
            score = self.session.score,
            "starting new round"
        );
        self.round = RoundState::new(target);
    }
}

/// Uniform random pick, avoiding `excluding` when any alternative exists.
///
/// The candidate set is filtered up front, so a catalog where every word
/// matches the exclusion falls back to a pick over all entries instead of
/// retrying forever.
fn select_word(entries: &[WordEntry], excluding: Option<&str>) -> WordEntry {
    let mut rng = rand::rng();
    let candidates: Vec<&WordEntry> = entries
        .iter()
        .filter(|e| excluding != Some(e.word.as_str()))
        .collect();
    if candidates.is_empty() {
        warn!("every catalog word matches the exclusion, repeating one");
        return entries[rng.random_range(0..entries.len())].clone();
    }
    candidates[rng.random_range(0..candidates.len())].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn entry(word: &str) -> WordEntry {
        WordEntry {
            word: word.to_string(),
            hint: "some hint".to_string(),
        }
    }

    fn catalog(words: &[&str]) -> Catalog {
        Catalog::new(words.iter().map(|w| entry(w)).collect()).unwrap()
    }

    // Letters absent from both "fig" and "pear", enough to lose a round.
    const LOSING_GUESSES: [char; 6] = ['x', 'y', 'z', 'q', 'v', 't'];

    #[test]
    fn fig_is_won_in_three_correct_guesses() {
        let mut round = RoundState::new(entry("fig"));
        for (n, letter) in ['f', 'i', 'g'].into_iter().enumerate() {
            assert!(!round.is_over());
            assert_eq!(round.apply_guess(letter), Some(GuessOutcome::Correct(letter)));
            assert_eq!(round.revealed().len(), n + 1);
        }
        assert!(round.is_win());
        assert!(!round.is_loss());
        assert!(round.wrong_letters().is_empty());
    }

    #[test]
    fn repeated_letters_reveal_one_cell_per_guess() {
        let mut round = RoundState::new(entry("apple"));
        assert_eq!(round.apply_guess('p'), Some(GuessOutcome::Correct('p')));
        assert!(round.revealed().contains(&1));
        assert!(!round.revealed().contains(&2));

        assert_eq!(round.apply_guess('p'), Some(GuessOutcome::Correct('p')));
        assert!(round.revealed().contains(&2));

        assert_eq!(
            round.apply_guess('p'),
            Some(GuessOutcome::AlreadyRevealed('p'))
        );
        assert_eq!(round.revealed().len(), 2);
        assert!(round.wrong_letters().is_empty());
    }

    #[test]
    fn already_revealed_guess_is_idempotent() {
        let mut round = RoundState::new(entry("fig"));
        round.apply_guess('f');
        for _ in 0..3 {
            assert_eq!(
                round.apply_guess('f'),
                Some(GuessOutcome::AlreadyRevealed('f'))
            );
            assert_eq!(round.revealed().len(), 1);
            assert!(round.wrong_letters().is_empty());
        }
    }

    #[test]
    fn six_wrong_guesses_lose_the_round() {
        let mut round = RoundState::new(entry("kiwi"));
        for (n, letter) in LOSING_GUESSES.into_iter().enumerate() {
            assert!(!round.is_over());
            assert_eq!(round.apply_guess(letter), Some(GuessOutcome::Wrong(letter)));
            assert_eq!(round.wrong_letters().len(), n + 1);
            assert_eq!(round.attempts_left(), MAX_WRONG - n - 1);
        }
        assert!(round.is_loss());
        assert!(!round.is_win());

        // Terminal: further guesses are no-ops.
        assert_eq!(round.apply_guess('k'), None);
        assert!(round.revealed().is_empty());
    }

    #[test]
    fn duplicate_wrong_guess_is_a_silent_no_op() {
        let mut round = RoundState::new(entry("fig"));
        assert_eq!(round.apply_guess('x'), Some(GuessOutcome::Wrong('x')));
        assert_eq!(round.apply_guess('x'), None);
        assert_eq!(round.wrong_letters(), ['x']);
        assert_eq!(round.attempts_left(), MAX_WRONG - 1);
    }

    #[test]
    fn malformed_input_is_ignored() {
        let mut round = RoundState::new(entry("fig"));
        for bad in ['F', 'É', '1', '!', ' '] {
            assert_eq!(round.apply_guess(bad), None);
        }
        assert!(round.revealed().is_empty());
        assert!(round.wrong_letters().is_empty());
    }

    #[test]
    fn hint_shows_after_wrong_and_clears_on_correct() {
        let mut round = RoundState::new(entry("fig"));
        assert!(!round.hint_visible());
        round.apply_guess('x');
        assert!(round.hint_visible());
        round.apply_guess('f');
        assert!(!round.hint_visible());
    }

    #[test]
    fn win_with_five_wrong_is_not_also_a_loss() {
        let mut round = RoundState::new(entry("fig"));
        for letter in &LOSING_GUESSES[..5] {
            round.apply_guess(*letter);
        }
        for letter in ['f', 'i', 'g'] {
            round.apply_guess(letter);
        }
        assert!(round.is_win());
        assert!(!round.is_loss());
    }

    #[test]
    fn invariants_hold_through_a_mixed_round() {
        let mut round = RoundState::new(entry("apple"));
        for letter in ['a', 'x', 'p', 'p', 'z', 'x', 'l', 'e', 'q'] {
            round.apply_guess(letter);

            for &i in round.revealed() {
                assert!(i < round.word().len());
            }
            for &wrong in round.wrong_letters() {
                assert!(!round.word().contains(wrong));
            }
            let unique: HashSet<&char> = round.wrong_letters().iter().collect();
            assert_eq!(unique.len(), round.wrong_letters().len());
        }
        assert!(round.is_win());
    }

    #[test]
    fn winning_then_resetting_credits_the_session() {
        let mut engine = RoundEngine::new(catalog(&["fig", "pear"]));
        let word = engine.round().word().to_string();
        for letter in word.chars() {
            engine.apply_guess(letter);
        }
        assert!(engine.round().is_win());

        engine.start_new_round();
        assert_eq!(
            engine.session(),
            Session {
                rounds_played: 1,
                score: 1
            }
        );
        assert!(engine.round().revealed().is_empty());
        assert!(engine.round().wrong_letters().is_empty());
        assert!(!engine.round().hint_visible());
        assert_ne!(engine.round().word(), word);
    }

    #[test]
    fn losing_then_resetting_only_counts_the_round() {
        let mut engine = RoundEngine::new(catalog(&["fig", "pear"]));
        for letter in LOSING_GUESSES {
            engine.apply_guess(letter);
        }
        assert!(engine.round().is_loss());

        engine.start_new_round();
        assert_eq!(
            engine.session(),
            Session {
                rounds_played: 1,
                score: 0
            }
        );
    }

    #[test]
    fn reset_mid_round_is_rejected() {
        let mut engine = RoundEngine::new(catalog(&["fig", "pear"]));
        engine.apply_guess('x');
        engine.start_new_round();
        assert_eq!(engine.session(), Session::default());
        assert_eq!(engine.round().wrong_letters(), ['x']);
    }

    #[test]
    fn new_round_always_changes_the_word_with_two_distinct_words() {
        let mut engine = RoundEngine::new(catalog(&["fig", "pear"]));
        for _ in 0..10 {
            let previous = engine.round().word().to_string();
            for letter in LOSING_GUESSES {
                engine.apply_guess(letter);
            }
            engine.start_new_round();
            assert_ne!(engine.round().word(), previous);
        }
    }

    #[test]
    fn select_word_honors_the_exclusion() {
        let entries = vec![entry("fig"), entry("pear")];
        for _ in 0..50 {
            assert_eq!(select_word(&entries, Some("fig")).word, "pear");
        }
    }

    #[test]
    fn select_word_falls_back_when_everything_is_excluded() {
        let entries = vec![entry("fig")];
        assert_eq!(select_word(&entries, Some("fig")).word, "fig");
    }
}
