//! Backtracking enumeration of exact covers.
//!
//! Candidates are tried in list order from a cursor that never moves backwards, so each
//! combination of words is reached along exactly one path. A word is only placed when the
//! letter pool can supply all of its letters, and the budget of letters still to place makes
//! overshooting impossible.

use crate::matcher::LetterPool;

/// Whether one solution may use the same candidate word more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordReuse {
    /// The cursor stays on a chosen word, so it can be picked again while the pool still
    /// holds its letters ("a a" for input "aa").
    #[default]
    AllowRepeats,
    /// The cursor moves past a chosen word; every word appears at most once per solution.
    Forbid,
}

/// Search state for one input: the letter pool, the words chosen so far and the number of
/// letters still to place.
pub struct CombinationSearch<'a> {
    candidates: &'a [String],
    pool: LetterPool,
    stack: Vec<usize>,
    remaining: usize,
    reuse: WordReuse,
}

impl<'a> CombinationSearch<'a> {
    /// `candidates` should be sorted; solutions come out in that order.
    #[must_use]
    pub fn new(candidates: &'a [String], input: &str, reuse: WordReuse) -> Self {
        Self {
            candidates,
            pool: LetterPool::new(input),
            stack: Vec::new(),
            remaining: input.chars().count(),
            reuse,
        }
    }

    /// Call `emit` with the words of every exact cover. Returns the number of solutions.
    pub fn run<F>(&mut self, mut emit: F) -> usize
    where
        F: FnMut(&[&str]),
    {
        if self.remaining == 0 {
            return 0;
        }
        self.descend(0, &mut emit)
    }

    fn descend<F>(&mut self, cursor: usize, emit: &mut F) -> usize
    where
        F: FnMut(&[&str]),
    {
        let candidates = self.candidates;
        let mut found = 0;

        for (index, word) in candidates.iter().enumerate().skip(cursor) {
            let len = word.chars().count();
            if len == 0 || len > self.remaining || !self.pool.consume(word) {
                continue;
            }
            self.stack.push(index);
            self.remaining -= len;

            if self.remaining == 0 {
                self.emit_stack(emit);
                found += 1;
            } else {
                let next = match self.reuse {
                    WordReuse::AllowRepeats => index,
                    WordReuse::Forbid => index + 1,
                };
                found += self.descend(next, emit);
            }

            self.stack.pop();
            self.pool.release(word);
            self.remaining += len;
        }
        found
    }

    fn emit_stack<F>(&self, emit: &mut F)
    where
        F: FnMut(&[&str]),
    {
        let words: Vec<&str> = self
            .stack
            .iter()
            .map(|&index| self.candidates[index].as_str())
            .collect();
        emit(&words);
    }

    /// Letters not yet covered by the words on the stack.
    #[must_use]
    pub fn pool(&self) -> &LetterPool {
        &self.pool
    }
}
