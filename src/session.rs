use crate::candidates::{CandidateList, discover_candidates};
use crate::dictionary::{Dictionary, MAX_WORD_SIZE};
use crate::errors::SolverError;
use crate::search::{CombinationSearch, WordReuse};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    pub reuse: WordReuse,
    /// Longest input accepted; the permutation walk costs `len!`.
    pub max_input_len: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            reuse: WordReuse::default(),
            max_input_len: MAX_WORD_SIZE - 1,
        }
    }
}

/// Check that `token` is a non-empty run of ASCII letters no longer than `max_len`.
pub fn validate_input(token: &str, max_len: usize) -> Result<&str, SolverError> {
    if token.is_empty() {
        return Err(SolverError::invalid_input("empty input"));
    }
    if let Some(c) = token.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(SolverError::invalid_input(format!(
            "non-alphabetic character '{c}'"
        )));
    }
    if token.len() > max_len {
        return Err(SolverError::invalid_input(format!(
            "{} letters is more than the limit of {max_len}",
            token.len()
        )));
    }
    Ok(token)
}

/// Everything needed to answer one jumbled input: the validated letters and the sorted
/// candidate words discovered for them.
#[derive(Debug)]
pub struct SolveSession<'d> {
    dictionary: &'d Dictionary,
    input: String,
    candidates: CandidateList,
    reuse: WordReuse,
}

impl<'d> SolveSession<'d> {
    pub fn new(
        dictionary: &'d Dictionary,
        input: &str,
        options: &SolveOptions,
    ) -> Result<Self, SolverError> {
        let input = validate_input(input, options.max_input_len)?;

        let started = Instant::now();
        let candidates = discover_candidates(dictionary, input)?;
        log::debug!(
            "Candidate discovery for {:?} took {:?}",
            input,
            started.elapsed()
        );

        Ok(Self {
            dictionary,
            input: input.to_string(),
            candidates,
            reuse: options.reuse,
        })
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    #[must_use]
    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Stream every exact cover to `emit`. Returns how many were found.
    pub fn for_each_solution<F>(&self, emit: F) -> usize
    where
        F: FnMut(&[&str]),
    {
        let started = Instant::now();
        let mut search =
            CombinationSearch::new(self.candidates.as_slice(), &self.input, self.reuse);
        let found = search.run(emit);
        log::debug!(
            "Search over {} candidates found {} solutions in {:?}",
            self.candidates.len(),
            found,
            started.elapsed()
        );
        found
    }

    /// All exact covers, each as its words joined by single spaces.
    #[must_use]
    pub fn solutions(&self) -> Vec<String> {
        let mut solutions = Vec::new();
        self.for_each_solution(|words| solutions.push(words.join(" ")));
        solutions
    }
}
