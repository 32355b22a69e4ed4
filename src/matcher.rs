//! Reversible multiset matching of words against the input's letters.

/// One slot per input letter; a consumed slot holds `None`.
///
/// Successful consumes are recorded on a trail of `(slot, letter)` pairs so that `release`
/// can put every letter back into the exact slot it came from. Releases happen in reverse
/// order of consumes, which is the order backtracking produces.
#[derive(Debug, Clone)]
pub struct LetterPool {
    slots: Vec<Option<char>>,
    trail: Vec<(usize, char)>,
    marks: Vec<usize>,
}

impl LetterPool {
    #[must_use]
    pub fn new(letters: &str) -> Self {
        Self {
            slots: letters.chars().map(Some).collect(),
            trail: Vec::with_capacity(letters.len()),
            marks: Vec::new(),
        }
    }

    /// Take one unused slot for every letter of `word`, first match wins.
    ///
    /// All or nothing: if any letter is missing the pool is left untouched and `false` is
    /// returned.
    pub fn consume(&mut self, word: &str) -> bool {
        let mark = self.trail.len();
        for letter in word.chars() {
            match self.slots.iter().position(|slot| *slot == Some(letter)) {
                Some(index) => {
                    self.slots[index] = None;
                    self.trail.push((index, letter));
                }
                None => {
                    self.rollback(mark);
                    return false;
                }
            }
        }
        self.marks.push(mark);
        true
    }

    /// Undo the most recent successful `consume`, which must have been for `word`.
    ///
    /// Returns `false` and changes nothing when there is nothing to release or `word` is not
    /// the word last consumed.
    pub fn release(&mut self, word: &str) -> bool {
        let Some(&mark) = self.marks.last() else {
            return false;
        };
        let matches = self.trail[mark..]
            .iter()
            .map(|&(_, letter)| letter)
            .eq(word.chars());
        if !matches {
            return false;
        }
        self.marks.pop();
        self.rollback(mark);
        true
    }

    fn rollback(&mut self, mark: usize) {
        for (index, letter) in self.trail.drain(mark..) {
            self.slots[index] = Some(letter);
        }
    }

    /// Number of letters not currently consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Snapshot of the slots, `None` where a letter is held by a consumed word.
    #[must_use]
    pub fn letters(&self) -> &[Option<char>] {
        &self.slots
    }
}
