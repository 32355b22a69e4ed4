// Library interface for anagram-solver
// This allows integration tests to access internal modules

pub mod app;
pub mod candidates;
pub mod cli;
pub mod dictionary;
pub mod errors;
pub mod logging;
pub mod matcher;
pub mod permutation;
pub mod search;
pub mod session;
pub mod tui;

// Re-export commonly used items for easier testing
pub use app::{AppConfig, Mode, SolverInterface, UserAction, solve_loop, solve_once};
pub use candidates::{CandidateList, discover_candidates, full_permutation_hits};
pub use dictionary::{Dictionary, load_dictionary_from_file, load_dictionary_from_str};
pub use errors::SolverError;
pub use matcher::LetterPool;
pub use permutation::for_each_permutation;
pub use search::{CombinationSearch, WordReuse};
pub use session::{SolveOptions, SolveSession, validate_input};
