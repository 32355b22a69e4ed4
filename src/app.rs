use crate::candidates::full_permutation_hits;
use crate::dictionary::Dictionary;
use crate::errors::SolverError;
use crate::session::{SolveOptions, SolveSession, validate_input};
use crate::{debug_log, info_log};

/// What to do with each input token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// Combinations of words that use every letter exactly once
    #[default]
    Anagrams,
    /// Single dictionary words that use every letter
    Words,
    /// Report whether the token itself is a dictionary word
    Lookup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub mode: Mode,
    /// Show the sorted candidate words before the solutions.
    pub show_candidates: bool,
    pub solve: SolveOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Solve(String),
    Exit,
}

#[derive(Debug, Clone, Copy)]
pub struct SolveSummary<'a> {
    pub input: &'a str,
    pub mode: Mode,
    pub results: usize,
}

/// Trait for a front end that collects inputs and displays results.
/// This allows the same solving flow to drive the line-oriented CLI and the TUI.
pub trait SolverInterface {
    /// Returns `None` when the input should be ignored (blank line, bad key) and prompted for
    /// again.
    fn read_input(&mut self) -> Option<UserAction>;

    fn display_solving_message(&mut self, input: &str);

    fn display_candidates(&mut self, candidates: &[String]);

    fn display_solution(&mut self, solution: &str);

    fn display_word(&mut self, word: &str);

    fn display_lookup(&mut self, word: &str, found: bool);

    fn display_summary(&mut self, summary: &SolveSummary);

    fn display_error(&mut self, message: &str);

    fn display_exit_message(&mut self);
}

/// Answer one input according to `config.mode`, streaming results to `interface` as they
/// are found. Returns the number of results (solutions, words, or 1/0 for a lookup).
pub fn solve_once<I: SolverInterface + ?Sized>(
    dictionary: &Dictionary,
    config: &AppConfig,
    input: &str,
    interface: &mut I,
) -> Result<usize, SolverError> {
    debug_log!("solve_once() - mode {:?}, input {:?}", config.mode, input);

    let results = match config.mode {
        Mode::Anagrams => {
            let input = validate_input(input, config.solve.max_input_len)?;
            interface.display_solving_message(input);
            let session = SolveSession::new(dictionary, input, &config.solve)?;
            if config.show_candidates {
                interface.display_candidates(session.candidates().as_slice());
            }
            session.for_each_solution(|words| interface.display_solution(&words.join(" ")))
        }
        Mode::Words => {
            let input = validate_input(input, config.solve.max_input_len)?;
            interface.display_solving_message(input);
            let hits = full_permutation_hits(dictionary, input)?;
            for word in hits.iter() {
                interface.display_word(word);
            }
            hits.len()
        }
        Mode::Lookup => {
            if input.is_empty() {
                return Err(SolverError::invalid_input("empty input"));
            }
            let found = dictionary.contains(input);
            interface.display_lookup(input, found);
            usize::from(found)
        }
    };

    interface.display_summary(&SolveSummary {
        input,
        mode: config.mode,
        results,
    });
    Ok(results)
}

/// Keep answering inputs until the interface asks to exit.
///
/// Invalid inputs are reported and the loop continues; fatal errors end it.
pub fn solve_loop<I: SolverInterface + ?Sized>(
    dictionary: &Dictionary,
    config: &AppConfig,
    interface: &mut I,
) {
    info_log!(
        "solve_loop() - starting with {} dictionary words",
        dictionary.len()
    );
    loop {
        let input = match interface.read_input() {
            Some(UserAction::Exit) => {
                interface.display_exit_message();
                break;
            }
            Some(UserAction::Solve(input)) => input,
            None => continue,
        };

        if let Err(e) = solve_once(dictionary, config, &input, interface) {
            info_log!("solve_loop() - {} ({})", e, e.code());
            interface.display_error(&e.to_string());
            if e.is_fatal() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::WordReuse;
    use std::collections::VecDeque;

    /// Records every call so tests can check what the flow showed.
    #[derive(Default)]
    struct RecordingInterface {
        inputs: VecDeque<Option<UserAction>>,
        events: Vec<String>,
    }

    impl RecordingInterface {
        fn with_inputs(inputs: Vec<Option<UserAction>>) -> Self {
            Self {
                inputs: inputs.into(),
                events: Vec::new(),
            }
        }
    }

    impl SolverInterface for RecordingInterface {
        fn read_input(&mut self) -> Option<UserAction> {
            self.inputs.pop_front().unwrap_or(Some(UserAction::Exit))
        }

        fn display_solving_message(&mut self, input: &str) {
            self.events.push(format!("solving {input}"));
        }

        fn display_candidates(&mut self, candidates: &[String]) {
            self.events.push(format!("candidates {}", candidates.join(",")));
        }

        fn display_solution(&mut self, solution: &str) {
            self.events.push(format!("solution {solution}"));
        }

        fn display_word(&mut self, word: &str) {
            self.events.push(format!("word {word}"));
        }

        fn display_lookup(&mut self, word: &str, found: bool) {
            self.events.push(format!("lookup {word} {found}"));
        }

        fn display_summary(&mut self, summary: &SolveSummary) {
            self.events
                .push(format!("summary {} {}", summary.input, summary.results));
        }

        fn display_error(&mut self, message: &str) {
            self.events.push(format!("error {message}"));
        }

        fn display_exit_message(&mut self) {
            self.events.push("exit".to_string());
        }
    }

    fn dictionary() -> Dictionary {
        Dictionary::build(["a", "i", "at", "it", "sit", "its", "tis", "ta"])
    }

    #[test]
    fn test_solve_once_anagrams_streams_solutions() {
        let mut ui = RecordingInterface::default();
        let count = solve_once(&dictionary(), &AppConfig::default(), "tis", &mut ui).unwrap();
        assert_eq!(count, 3);
        assert_eq!(
            ui.events,
            vec![
                "solving tis",
                "solution its",
                "solution sit",
                "solution tis",
                "summary tis 3"
            ]
        );
    }

    #[test]
    fn test_solve_once_shows_candidates_when_asked() {
        let mut ui = RecordingInterface::default();
        let config = AppConfig {
            show_candidates: true,
            ..AppConfig::default()
        };
        solve_once(&dictionary(), &config, "at", &mut ui).unwrap();
        assert_eq!(ui.events[1], "candidates a,at,ta");
        assert_eq!(ui.events[2], "solution at");
        assert_eq!(ui.events[3], "solution ta");
    }

    #[test]
    fn test_solve_once_words_mode() {
        let mut ui = RecordingInterface::default();
        let config = AppConfig {
            mode: Mode::Words,
            ..AppConfig::default()
        };
        let count = solve_once(&dictionary(), &config, "tis", &mut ui).unwrap();
        assert_eq!(count, 3);
        assert_eq!(ui.events[1..4], ["word tis", "word its", "word sit"]);
    }

    #[test]
    fn test_solve_once_lookup_mode() {
        let mut ui = RecordingInterface::default();
        let config = AppConfig {
            mode: Mode::Lookup,
            ..AppConfig::default()
        };
        assert_eq!(solve_once(&dictionary(), &config, "sit", &mut ui).unwrap(), 1);
        assert_eq!(solve_once(&dictionary(), &config, "ist", &mut ui).unwrap(), 0);
        assert_eq!(ui.events[0], "lookup sit true");
        assert_eq!(ui.events[2], "lookup ist false");
    }

    #[test]
    fn test_solve_once_invalid_input() {
        let mut ui = RecordingInterface::default();
        let result = solve_once(&dictionary(), &AppConfig::default(), "t1s", &mut ui);
        assert!(matches!(result, Err(SolverError::InvalidInput { .. })));
        assert!(ui.events.is_empty());
    }

    #[test]
    fn test_solve_once_respects_reuse_option() {
        let dict = Dictionary::build(["a"]);
        let mut ui = RecordingInterface::default();
        let config = AppConfig {
            solve: SolveOptions {
                reuse: WordReuse::Forbid,
                ..SolveOptions::default()
            },
            ..AppConfig::default()
        };
        assert_eq!(solve_once(&dict, &config, "aa", &mut ui).unwrap(), 0);
        assert_eq!(
            solve_once(&dict, &AppConfig::default(), "aa", &mut ui).unwrap(),
            1
        );
    }

    #[test]
    fn test_solve_loop_reports_errors_and_continues() {
        let mut ui = RecordingInterface::with_inputs(vec![
            Some(UserAction::Solve("a1".to_string())),
            None,
            Some(UserAction::Solve("at".to_string())),
            Some(UserAction::Exit),
        ]);
        solve_loop(&dictionary(), &AppConfig::default(), &mut ui);

        assert!(ui.events[0].starts_with("error Invalid input"));
        assert!(ui.events.contains(&"solution at".to_string()));
        assert_eq!(ui.events.last().map(String::as_str), Some("exit"));
    }

    #[test]
    fn test_solve_loop_immediate_exit() {
        let mut ui = RecordingInterface::with_inputs(vec![Some(UserAction::Exit)]);
        solve_loop(&dictionary(), &AppConfig::default(), &mut ui);
        assert_eq!(ui.events, vec!["exit"]);
    }
}
