//! Dictionary loading and the precomputed word index.
//!
//! The dictionary file holds one word per line. Entries may carry stray
//! whitespace, surrounding double quotes or capitals; all of that is
//! normalized away before a word reaches the index.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::letters::{LetterMultiset, LetterSet};

/// Shortest word the game accepts.
pub const MIN_WORD_LEN: usize = 3;

/// Failure to read a dictionary from disk.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An immutable set of distinct, normalized, lowercase words.
///
/// Words are kept sorted so every index built from the same dictionary
/// enumerates candidates in the same order.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: Vec<String>,
}

/// Trims, dequotes and lowercases one raw entry.
///
/// Returns `None` for entries that are too short or contain anything other
/// than ASCII letters.
fn normalize(raw: &str) -> Option<String> {
    let word = raw.trim().trim_matches('"').trim().to_ascii_lowercase();
    let valid = word.len() >= MIN_WORD_LEN && word.bytes().all(|b| b.is_ascii_lowercase());
    valid.then_some(word)
}

impl Dictionary {
    /// Builds a dictionary from raw entries, normalizing and deduplicating.
    pub fn from_words<I, S>(raw_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: FxHashSet<String> = raw_words
            .into_iter()
            .filter_map(|raw| normalize(raw.as_ref()))
            .collect();

        let mut words: Vec<String> = unique.into_iter().collect();
        words.sort_unstable();
        Self { words }
    }

    /// Reads a dictionary with one entry per line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_words(contents.lines());
        log::debug!(
            "loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// One dictionary word with its letter counts and distinct letters.
#[derive(Clone, Debug)]
pub struct IndexedWord {
    pub word: String,
    pub letters: LetterMultiset,
    pub letter_set: LetterSet,
}

impl IndexedWord {
    fn new(word: &str) -> Self {
        let letters = LetterMultiset::from_word(word);
        Self {
            word: word.to_owned(),
            letters,
            letter_set: letters.letter_set(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }
}

/// Letter multisets for every dictionary word, computed once.
///
/// The index is never mutated after construction, so any number of queries
/// may borrow it at the same time.
#[derive(Clone, Debug, Default)]
pub struct WordIndex {
    entries: Vec<IndexedWord>,
}

impl WordIndex {
    pub fn new(dictionary: &Dictionary) -> Self {
        let entries = dictionary
            .iter()
            .filter(|word| word.len() >= MIN_WORD_LEN)
            .map(IndexedWord::new)
            .collect();
        Self { entries }
    }

    #[inline]
    pub fn get(&self, word_id: usize) -> &IndexedWord {
        &self.entries[word_id]
    }

    #[inline]
    pub fn word(&self, word_id: usize) -> &str {
        &self.entries[word_id].word
    }

    pub fn entries(&self) -> &[IndexedWord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&Dictionary> for WordIndex {
    fn from(dictionary: &Dictionary) -> Self {
        Self::new(dictionary)
    }
}
