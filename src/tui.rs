//! TUI (Terminal User Interface) module for the Anagram Solver
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! - `EnteringInput` → `Solving` → back to `EnteringInput` once the summary arrives
//!
//! Results stay on screen while the next input is typed and can be scrolled with the arrow
//! and page keys.

use crate::app::{Mode, SolveSummary, SolverInterface, UserAction};
use crate::dictionary::MAX_WORD_SIZE;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const PAGE_SIZE: usize = 10;
// Redraw while streaming after this many new results.
const REDRAW_EVERY: usize = 64;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringInput,
    Solving,
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Anagrams => "anagrams",
        Mode::Words => "full-length words",
        Mode::Lookup => "dictionary lookup",
    }
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    mode: Mode,
    input: &'a str,
    state: TuiState,
    candidates: &'a [String],
    results: &'a [String],
    scroll: usize,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and result display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    mode: Mode,
    input: String,
    state: TuiState,
    candidates: Vec<String>,
    results: Vec<String>,
    scroll: usize,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new(mode: Mode) -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            mode,
            input: String::new(),
            state: TuiState::EnteringInput,
            candidates: Vec::new(),
            results: Vec::new(),
            scroll: 0,
            message: String::new(),
            error_message: String::new(),
            status: "Ready".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            mode: self.mode,
            input: &self.input,
            state: self.state,
            candidates: &self.candidates,
            results: &self.results,
            scroll: self.scroll,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Input
                Constraint::Min(8),    // Candidates and results
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(chunks[2]);

        Self::render_title(f, chunks[0], ctx.mode);
        Self::render_input(f, chunks[1], ctx);
        Self::render_candidates(f, panels[0], ctx.candidates);
        Self::render_results(f, panels[1], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect, mode: Mode) {
        let title = Paragraph::new(format!("ANAGRAM SOLVER ({})", mode_label(mode)))
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_input(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut spans = vec![Span::raw(" "), Span::styled(ctx.input, SUCCESS_STYLE)];
        if ctx.state == TuiState::EnteringInput {
            spans.push(Span::styled("_", Style::default().fg(Color::DarkGray)));
        }
        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().title("Letters").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_candidates(f: &mut Frame, area: Rect, candidates: &[String]) {
        let lines: Vec<Line> = candidates
            .iter()
            .map(|word| Line::from(format!(" {word}")))
            .collect();
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(format!("Candidates ({})", candidates.len()))
                .borders(Borders::ALL),
        );
        f.render_widget(paragraph, area);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_results(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, MESSAGE_STYLE)]));
        }
        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                ctx.error_message,
                ERROR_STYLE,
            )]));
        }
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }

        for result in ctx.results {
            lines.push(Line::from(format!(" {result}")));
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(Span::styled(
                        format!("Results ({})", ctx.results.len()),
                        INFO_STYLE,
                    ))
                    .borders(Borders::ALL),
            )
            .wrap(Wrap { trim: false })
            .scroll((ctx.scroll.min(u16::MAX as usize) as u16, 0));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringInput => {
                "Type letters | ENTER: Solve | BACKSPACE: Delete | UP/DOWN/PGUP/PGDN: Scroll | ESC: Quit"
            }
            TuiState::Solving => "Solving...",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.handle_key(key)),
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let has_alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => {
                info_log!("handle_key() - ESC pressed, returning Exit");
                return Some(UserAction::Exit);
            }
            KeyCode::Char('c') if has_ctrl => return Some(UserAction::Exit),
            KeyCode::Char(_) if has_ctrl || has_alt => {
                debug_log!("handle_key() - Ignoring character with modifier: {:?}", key.modifiers);
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.error_message.clear();
                if self.input.len() < MAX_WORD_SIZE - 1 {
                    self.input.push(c);
                } else {
                    self.error_message = "Input is at the maximum length!".to_string();
                }
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace => {
                self.error_message.clear();
                self.input.pop();
            }
            KeyCode::Enter if self.input.is_empty() => {
                self.error_message = "Type some letters first!".to_string();
            }
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.input);
                info_log!("handle_key() - Enter pressed, solving '{}'", input);
                return Some(UserAction::Solve(input));
            }
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(PAGE_SIZE),
            KeyCode::PageDown => self.scroll_down(PAGE_SIZE),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.max_scroll(),
            _ => {
                debug_log!("handle_key() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn max_scroll(&self) -> usize {
        self.results.len().saturating_sub(1)
    }

    fn scroll_up(&mut self, by: usize) {
        self.scroll = self.scroll.saturating_sub(by);
    }

    fn scroll_down(&mut self, by: usize) {
        self.scroll = (self.scroll + by).min(self.max_scroll());
    }

    fn push_result(&mut self, line: String) {
        self.results.push(line);
        if self.results.len() % REDRAW_EVERY == 1 {
            self.draw_or_log();
        }
    }
}

impl SolverInterface for TuiInterface {
    fn read_input(&mut self) -> Option<UserAction> {
        self.state = TuiState::EnteringInput;
        loop {
            self.draw_or_log();
            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(e) => {
                    log::warn!("Terminal input failed: {e}");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_solving_message(&mut self, input: &str) {
        self.state = TuiState::Solving;
        self.candidates.clear();
        self.results.clear();
        self.scroll = 0;
        self.message.clear();
        self.error_message.clear();
        self.status = format!("Solving {input}...");
        self.draw_or_log();
    }

    fn display_candidates(&mut self, candidates: &[String]) {
        self.candidates = candidates.to_vec();
        self.draw_or_log();
    }

    fn display_solution(&mut self, solution: &str) {
        self.push_result(solution.to_string());
    }

    fn display_word(&mut self, word: &str) {
        self.push_result(word.to_string());
    }

    fn display_lookup(&mut self, word: &str, found: bool) {
        self.results.clear();
        self.candidates.clear();
        self.scroll = 0;
        self.error_message.clear();
        self.message = if found {
            format!("{word} found in dictionary")
        } else {
            format!("{word} not found in dictionary")
        };
    }

    fn display_summary(&mut self, summary: &SolveSummary) {
        self.state = TuiState::EnteringInput;
        self.status = match (summary.mode, summary.results) {
            (Mode::Lookup, _) => format!("Looked up {}", summary.input),
            (_, 0) => format!("No results for {}", summary.input),
            (_, n) => format!("{n} results for {}", summary.input),
        };
        self.draw_or_log();
    }

    fn display_error(&mut self, message: &str) {
        self.state = TuiState::EnteringInput;
        self.error_message = message.to_string();
        self.status = "Error".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        info_log!("TuiInterface - exiting");
        self.status = "Exiting.".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        if let Err(e) = self.cleanup() {
            debug_log!("Terminal cleanup failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_labels() {
        assert_eq!(mode_label(Mode::Anagrams), "anagrams");
        assert_eq!(mode_label(Mode::Words), "full-length words");
        assert_eq!(mode_label(Mode::Lookup), "dictionary lookup");
    }

    #[test]
    fn test_render_shows_results_and_candidates() {
        use ratatui::backend::TestBackend;

        let candidates = vec!["its".to_string(), "sit".to_string()];
        let results = vec!["its".to_string(), "sit".to_string()];
        let ctx = RenderContext {
            mode: Mode::Anagrams,
            input: "tis",
            state: TuiState::EnteringInput,
            candidates: &candidates,
            results: &results,
            scroll: 0,
            message: "",
            error_message: "",
            status: "2 results for tis",
        };

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| TuiInterface::render_static(f, &ctx))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("ANAGRAM SOLVER (anagrams)"));
        assert!(text.contains("Candidates (2)"));
        assert!(text.contains("Results (2)"));
        assert!(text.contains("2 results for tis"));
    }
}
