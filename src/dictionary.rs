use crate::errors::SolverError;
use crate::{debug_log, info_log};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Words and inputs are assumed to stay strictly shorter than this.
pub const MAX_WORD_SIZE: usize = 80;

pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";

const USER_DICTIONARY_DIR: &str = "anagram-solver";
const USER_DICTIONARY_FILE: &str = "words";

/// Ordered set of known words, compared exactly (case as stored).
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from a token stream. Duplicates are logged and ignored (the first
    /// occurrence wins) and tokens of `MAX_WORD_SIZE` characters or more are skipped.
    pub fn build<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for token in tokens {
            let word = token.as_ref();
            if word.chars().count() >= MAX_WORD_SIZE {
                log::warn!("Skipping dictionary entry longer than {MAX_WORD_SIZE} characters");
                continue;
            }
            if let Err(e) = dictionary.insert(word) {
                info_log!("{}", e);
            }
        }
        debug_log!("Dictionary built with {} words", dictionary.len());
        dictionary
    }

    /// Insert a single word, reporting `DuplicateEntry` if it is already present.
    pub fn insert(&mut self, word: &str) -> Result<(), SolverError> {
        if self.words.contains(word) {
            return Err(SolverError::DuplicateEntry {
                word: word.to_string(),
            });
        }
        self.words.insert(word.to_string());
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in ascending lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

pub fn load_dictionary_from_str(data: &str) -> Dictionary {
    Dictionary::build(data.split_whitespace())
}

pub fn load_dictionary_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, SolverError> {
    let path = path.as_ref();
    let data =
        fs::read_to_string(path).map_err(|source| SolverError::DictionarySourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
    info_log!("Loading dictionary from {}", path.display());
    Ok(load_dictionary_from_str(&data))
}

#[must_use]
pub fn get_user_dictionary_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_DICTIONARY_DIR).join(USER_DICTIONARY_FILE))
}

/// Pick the word database: an explicit path wins, then a user dictionary under the config
/// directory if one exists, then the system word list.
#[must_use]
pub fn resolve_dictionary_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Some(path) = get_user_dictionary_path().filter(|p| p.is_file()) {
        return path;
    }
    PathBuf::from(DEFAULT_DICTIONARY_PATH)
}
