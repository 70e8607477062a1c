use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Built-in word list, embedded at compile time.
const DEFAULT_WORDS: &str = include_str!("words.json");

/// A guessable word plus the hint shown after a wrong guess.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub hint: String,
}

/// The fixed set of words the game draws from.
///
/// Validated once at load time and immutable afterwards; the round engine
/// can assume every entry is well formed.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<WordEntry>,
}

impl Catalog {
    /// Validate a list of entries into a catalog.
    ///
    /// At least 2 entries are required so a round reset can always pick a
    /// different word. Words must be non-empty lowercase a-z; hints must be
    /// non-empty.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self> {
        if entries.len() < 2 {
            bail!(
                "word catalog needs at least 2 entries, got {}",
                entries.len()
            );
        }
        for entry in &entries {
            if entry.word.is_empty() || !entry.word.chars().all(|c| c.is_ascii_lowercase()) {
                bail!(
                    "invalid catalog word {:?}: must be non-empty lowercase a-z",
                    entry.word
                );
            }
            if entry.hint.is_empty() {
                bail!("catalog word {:?} has an empty hint", entry.word);
            }
        }
        Ok(Self { entries })
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<WordEntry> =
            serde_json::from_str(json).context("failed to parse word catalog")?;
        Self::new(entries)
    }

    /// The built-in word list.
    pub fn load_default() -> Result<Self> {
        Self::from_json(DEFAULT_WORDS)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read word catalog {path}"))?;
        Self::from_json(&json)
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, hint: &str) -> WordEntry {
        WordEntry {
            word: word.to_string(),
            hint: hint.to_string(),
        }
    }

    #[test]
    fn default_catalog_loads_with_fifteen_entries() {
        let catalog = Catalog::load_default().unwrap();
        assert_eq!(catalog.entries().len(), 15);
        assert!(catalog.entries().iter().any(|e| e.word == "kiwi"));
    }

    #[test]
    fn single_entry_catalog_is_rejected() {
        let err = Catalog::new(vec![entry("fig", "a fruit")]).unwrap_err();
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(Catalog::new(Vec::new()).is_err());
    }

    #[test]
    fn uppercase_word_is_rejected() {
        let entries = vec![entry("Fig", "a fruit"), entry("pear", "a fruit")];
        assert!(Catalog::new(entries).is_err());
    }

    #[test]
    fn non_alphabetic_word_is_rejected() {
        let entries = vec![entry("fig42", "a fruit"), entry("pear", "a fruit")];
        assert!(Catalog::new(entries).is_err());
    }

    #[test]
    fn empty_hint_is_rejected() {
        let entries = vec![entry("fig", ""), entry("pear", "a fruit")];
        assert!(Catalog::new(entries).is_err());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(Catalog::from_json("not json").is_err());
    }
}
