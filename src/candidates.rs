use crate::dictionary::Dictionary;
use crate::errors::SolverError;
use crate::permutation::for_each_permutation;
use crate::debug_log;
use std::collections::HashSet;

/// The only words of a single letter; recognized without a dictionary lookup.
pub const SINGLE_LETTER_WORDS: [char; 4] = ['a', 'i', 'A', 'I'];

/// Deduplicated dictionary hits for one input.
#[derive(Debug, Clone, Default)]
pub struct CandidateList {
    words: Vec<String>,
    seen: HashSet<String>,
    duplicate_hits: usize,
}

impl CandidateList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `word` unless it is empty or already present. Returns whether it was added.
    pub fn insert_if_absent(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        if self.seen.contains(word) {
            self.duplicate_hits += 1;
            return false;
        }
        self.seen.insert(word.to_string());
        self.words.push(word.to_string());
        true
    }

    /// Stable ascending lexicographic sort.
    pub fn sort(&mut self) {
        self.words.sort();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// How many rediscoveries of an existing word were absorbed.
    #[must_use]
    pub fn duplicate_hits(&self) -> usize {
        self.duplicate_hits
    }
}

fn add_single_letter_words(letters: &[char], candidates: &mut CandidateList) {
    let mut word = [0u8; 4];
    for &letter in letters {
        if SINGLE_LETTER_WORDS.contains(&letter) {
            candidates.insert_if_absent(letter.encode_utf8(&mut word));
        }
    }
}

/// Every dictionary word that can be spelled from a subset of `input`'s letters, sorted.
///
/// Each ordering of the input is scanned for dictionary words rooted at its first letter
/// (length two up to the full ordering); single letters come from `SINGLE_LETTER_WORDS`.
pub fn discover_candidates(
    dictionary: &Dictionary,
    input: &str,
) -> Result<CandidateList, SolverError> {
    let mut letters: Vec<char> = input.chars().collect();
    let mut candidates = CandidateList::new();
    add_single_letter_words(&letters, &mut candidates);

    let mut prefix = String::with_capacity(input.len());
    for_each_permutation(&mut letters, |arrangement| {
        prefix.clear();
        for (i, &letter) in arrangement.iter().enumerate() {
            prefix.push(letter);
            if i >= 1 && dictionary.contains(&prefix) {
                candidates.insert_if_absent(&prefix);
            }
        }
    })?;

    debug_log!(
        "Discovered {} candidates for {:?} ({} repeat hits)",
        candidates.len(),
        input,
        candidates.duplicate_hits()
    );
    candidates.sort();
    Ok(candidates)
}

/// Dictionary words that use every letter of `input`, in the order they were found.
pub fn full_permutation_hits(
    dictionary: &Dictionary,
    input: &str,
) -> Result<CandidateList, SolverError> {
    let mut letters: Vec<char> = input.chars().collect();
    let mut hits = CandidateList::new();
    let mut arrangement_text = String::with_capacity(input.len());
    for_each_permutation(&mut letters, |arrangement| {
        arrangement_text.clear();
        arrangement_text.extend(arrangement);
        if dictionary.contains(&arrangement_text) {
            hits.insert_if_absent(&arrangement_text);
        }
    })?;
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &CandidateList) -> Vec<&str> {
        list.iter().collect()
    }

    #[test]
    fn test_insert_if_absent_deduplicates() {
        let mut list = CandidateList::new();
        assert!(list.insert_if_absent("sit"));
        assert!(list.insert_if_absent("its"));
        assert!(!list.insert_if_absent("sit"));
        assert!(!list.insert_if_absent(""));
        assert_eq!(list.len(), 2);
        assert_eq!(list.duplicate_hits(), 1);
        assert!(list.contains("its"));
    }

    #[test]
    fn test_sort_orders_lexicographically() {
        let mut list = CandidateList::new();
        for word in ["tis", "it", "its", "i", "sit"] {
            list.insert_if_absent(word);
        }
        list.sort();
        assert_eq!(words(&list), vec!["i", "it", "its", "sit", "tis"]);
    }

    #[test]
    fn test_discover_tis() {
        let dictionary = Dictionary::build(["a", "i", "at", "it", "sit", "its", "tis"]);
        let list = discover_candidates(&dictionary, "tis").unwrap();
        assert_eq!(words(&list), vec!["i", "it", "its", "sit", "tis"]);
    }

    #[test]
    fn test_discover_embedded_words() {
        // "at" only ever appears as a prefix of a longer ordering.
        let dictionary = Dictionary::build(["at", "cat", "act"]);
        let list = discover_candidates(&dictionary, "cats").unwrap();
        assert_eq!(words(&list), vec!["a", "act", "at", "cat"]);
    }

    #[test]
    fn test_single_letter_rule_ignores_dictionary() {
        let dictionary = Dictionary::build(["xyz"]);
        let list = discover_candidates(&dictionary, "ab").unwrap();
        assert_eq!(words(&list), vec!["a"]);
    }

    #[test]
    fn test_single_letter_rule_keeps_case() {
        let dictionary = Dictionary::new();
        let list = discover_candidates(&dictionary, "Ib").unwrap();
        assert_eq!(words(&list), vec!["I"]);
    }

    #[test]
    fn test_other_single_letters_are_not_words() {
        let dictionary = Dictionary::build(["o", "x"]);
        let list = discover_candidates(&dictionary, "ox").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_repeated_letters_deduplicated() {
        let dictionary = Dictionary::build(["a"]);
        let list = discover_candidates(&dictionary, "aa").unwrap();
        assert_eq!(words(&list), vec!["a"]);
        assert!(list.duplicate_hits() >= 1);
    }

    #[test]
    fn test_discover_empty_input_is_invalid() {
        let dictionary = Dictionary::build(["a"]);
        assert!(matches!(
            discover_candidates(&dictionary, ""),
            Err(SolverError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_full_permutation_hits_only_full_length() {
        let dictionary = Dictionary::build(["a", "i", "at", "it", "sit", "its", "tis"]);
        let hits = full_permutation_hits(&dictionary, "tis").unwrap();
        // Discovery order follows the permutation walk: tis, tsi, its, ist, sit, sti.
        assert_eq!(words(&hits), vec!["tis", "its", "sit"]);
    }

    #[test]
    fn test_full_permutation_hits_deduplicated() {
        let dictionary = Dictionary::build(["noon"]);
        let hits = full_permutation_hits(&dictionary, "noon").unwrap();
        assert_eq!(words(&hits), vec!["noon"]);
    }
}
