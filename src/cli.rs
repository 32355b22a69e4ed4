use crate::app::{AppConfig, Mode, SolveSummary, SolverInterface, UserAction};
use crate::debug_log;
use crate::dictionary::MAX_WORD_SIZE;
use crate::errors::SolverError;
use crate::search::WordReuse;
use crate::session::SolveOptions;
use clap::Parser;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Anagram Solver CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Jumbled letters to solve; omit to be prompted for inputs
    pub word: Option<String>,

    /// Path to a whitespace-delimited word list
    #[arg(short = 'd', long = "dict", env = "ANAGRAM_SOLVER_DICT")]
    pub dictionary_path: Option<PathBuf>,

    /// What to compute for each input
    #[arg(short = 'm', long, value_enum, default_value_t = Mode::Anagrams)]
    pub mode: Mode,

    /// Never use the same word twice within one solution
    #[arg(long)]
    pub distinct: bool,

    /// Print the sorted candidate words before the solutions
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Longest input accepted
    #[arg(long = "max-len", default_value_t = MAX_WORD_SIZE - 1)]
    pub max_len: usize,

    /// Use the interactive terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    #[must_use]
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            mode: self.mode,
            show_candidates: self.list,
            solve: SolveOptions {
                reuse: if self.distinct {
                    WordReuse::Forbid
                } else {
                    WordReuse::AllowRepeats
                },
                max_input_len: self.max_len.min(MAX_WORD_SIZE - 1),
            },
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

fn parse_input_line(line: &str) -> Option<UserAction> {
    let token = line.trim();
    match token.to_ascii_lowercase().as_str() {
        "" => None,
        "exit" | "quit" => Some(UserAction::Exit),
        _ => Some(UserAction::Solve(token.to_string())),
    }
}

/// Line-oriented implementation of `SolverInterface`.
///
/// Interactive mode prompts for inputs and prints notices around the results; batch mode
/// prints nothing but the results, one per line. The first write failure is kept and
/// returned by `finish`.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    interactive: bool,
    write_error: Option<io::Error>,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            interactive: true,
            write_error: None,
        }
    }

    /// Flush the writer and hand it back, or report the first write failure.
    pub fn finish(mut self) -> Result<W, SolverError> {
        if let Some(e) = self.write_error.take() {
            return Err(SolverError::Io(e));
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn emit(&mut self, line: fmt::Arguments) {
        if self.write_error.is_some() {
            return;
        }
        if let Err(e) = self.writer.write_fmt(format_args!("{line}\n")) {
            debug_log!("CliInterface::emit() - write failed: {}", e);
            self.write_error = Some(e);
        }
    }

    fn notice(&mut self, line: fmt::Arguments) {
        if self.interactive {
            self.emit(line);
        }
    }
}

impl<W: Write> CliInterface<io::Empty, W> {
    /// Results-only interface for one-shot use.
    pub fn batch(writer: W) -> Self {
        Self {
            reader: io::empty(),
            writer,
            interactive: false,
            write_error: None,
        }
    }
}

impl<R: BufRead, W: Write> SolverInterface for CliInterface<R, W> {
    fn read_input(&mut self) -> Option<UserAction> {
        self.notice(format_args!(
            "\nEnter jumbled word (or 'exit' to quit):"
        ));
        if self.interactive {
            if let Err(e) = self.writer.flush() {
                debug_log!("CliInterface::read_input() - flush failed: {}", e);
            }
        }
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Some(UserAction::Exit),
            Ok(_) => parse_input_line(&line),
            Err(e) => {
                log::warn!("Failed to read input: {e}");
                Some(UserAction::Exit)
            }
        }
    }

    fn display_solving_message(&mut self, input: &str) {
        self.notice(format_args!("Solving {input}..."));
    }

    fn display_candidates(&mut self, candidates: &[String]) {
        self.notice(format_args!("Candidate words ({}):", candidates.len()));
        for word in candidates {
            self.emit(format_args!("{word}"));
        }
        self.emit(format_args!(""));
    }

    fn display_solution(&mut self, solution: &str) {
        self.emit(format_args!("{solution}"));
    }

    fn display_word(&mut self, word: &str) {
        self.emit(format_args!("{word}"));
    }

    fn display_lookup(&mut self, word: &str, found: bool) {
        if found {
            self.emit(format_args!("{word} found in dictionary"));
        } else {
            self.emit(format_args!("{word} not found in dictionary"));
        }
    }

    fn display_summary(&mut self, summary: &SolveSummary) {
        match (summary.mode, summary.results) {
            (Mode::Lookup, _) => {}
            (Mode::Anagrams, 0) => {
                self.notice(format_args!("No solutions for {}.", summary.input));
            }
            (Mode::Words, 0) => {
                self.notice(format_args!(
                    "No dictionary word uses all of {}.",
                    summary.input
                ));
            }
            (_, 1) => self.notice(format_args!("1 result.")),
            (_, n) => self.notice(format_args!("{n} results.")),
        }
    }

    fn display_error(&mut self, message: &str) {
        self.emit(format_args!("{message}"));
    }

    fn display_exit_message(&mut self) {
        self.notice(format_args!("Exiting."));
    }
}
