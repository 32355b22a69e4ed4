//! In-place permutation of a letter buffer.
//!
//! Orderings are produced by fixing position `start`, permuting everything after it, then
//! swapping the next unplaced letter into `start`. After the last letter has had its turn
//! the suffix reads `[last, first, second, ...]`, so a single left rotation puts it back.
//! Every level hands its slice back exactly as it found it, so one buffer serves the whole
//! recursion tree.
//!
//! For `abc` the visits are `abc acb bac bca cab cba`.

use crate::errors::SolverError;

/// Call `visit` once with the whole buffer for each of its `len!` orderings.
///
/// Repeated letters produce repeated orderings; they are not filtered here. The buffer is
/// back in its original order when this returns.
pub fn for_each_permutation<F>(letters: &mut [char], mut visit: F) -> Result<(), SolverError>
where
    F: FnMut(&[char]),
{
    if letters.is_empty() {
        return Err(SolverError::invalid_input(
            "cannot permute an empty letter buffer",
        ));
    }
    permute_from(letters, 0, &mut visit);
    Ok(())
}

fn permute_from<F>(buffer: &mut [char], start: usize, visit: &mut F)
where
    F: FnMut(&[char]),
{
    let len = buffer.len() - start;
    if len == 1 {
        visit(buffer);
        return;
    }
    for i in 0..len {
        permute_from(buffer, start + 1, visit);
        if i < len - 1 {
            buffer.swap(start, start + i + 1);
        } else {
            buffer[start..].rotate_left(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn collect(word: &str) -> (Vec<String>, Vec<char>) {
        let mut letters: Vec<char> = word.chars().collect();
        let mut seen: Vec<String> = Vec::new();
        for_each_permutation(&mut letters, |p| seen.push(p.iter().collect())).unwrap();
        (seen, letters)
    }

    #[test]
    fn test_three_letters_order() {
        let (seen, _) = collect("abc");
        assert_eq!(seen, vec!["abc", "acb", "bac", "bca", "cab", "cba"]);
    }

    #[test]
    fn test_single_letter() {
        let (seen, letters) = collect("a");
        assert_eq!(seen, vec!["a"]);
        assert_eq!(letters, vec!['a']);
    }

    #[test]
    fn test_empty_buffer_is_invalid_input() {
        let mut letters: Vec<char> = Vec::new();
        let mut calls = 0;
        let result = for_each_permutation(&mut letters, |_| calls += 1);
        assert!(matches!(result, Err(SolverError::InvalidInput { .. })));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_all_orderings_distinct_and_buffer_restored() {
        for word in ["ab", "abc", "abcd", "abcde", "abcdef"] {
            let (seen, letters) = collect(word);
            let factorial: usize = (1..=word.len()).product();
            assert_eq!(seen.len(), factorial, "count for {word}");
            let unique: HashSet<&String> = seen.iter().collect();
            assert_eq!(unique.len(), factorial, "distinct for {word}");
            assert_eq!(letters.iter().collect::<String>(), word, "restored for {word}");
        }
    }

    #[test]
    fn test_repeated_letters_visit_duplicates() {
        let (seen, letters) = collect("aab");
        assert_eq!(seen.len(), 6);
        let unique: HashSet<&String> = seen.iter().collect();
        assert_eq!(unique.len(), 3);
        assert_eq!(letters, vec!['a', 'a', 'b']);
    }

    #[test]
    fn test_suffix_restored_at_every_depth() {
        // Permuting only the tail of a buffer must leave the fixed head and the tail intact.
        let mut buffer: Vec<char> = "xyzw".chars().collect();
        for start in 0..buffer.len() {
            let before = buffer.clone();
            let mut visits = 0;
            permute_from(&mut buffer, start, &mut |p: &[char]| {
                assert_eq!(p[..start], before[..start]);
                visits += 1;
            });
            assert_eq!(buffer, before);
            assert_eq!(visits, (1..=before.len() - start).product::<usize>());
        }
    }

    #[test]
    fn test_visit_sees_full_buffer() {
        let mut letters: Vec<char> = "tis".chars().collect();
        for_each_permutation(&mut letters, |p| assert_eq!(p.len(), 3)).unwrap();
    }
}
