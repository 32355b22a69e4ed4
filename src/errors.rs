//! Error type shared by every stage of the solver.
//!
//! # Error Codes
//!
//! - A001: `DictionarySourceUnavailable` (word database could not be opened or read)
//! - A002: `DuplicateEntry` (word inserted twice, absorbed where it is detected)
//! - A003: `InvalidInput` (empty, non-alphabetic or oversized token)
//! - A004: `Io` (writing results failed)
//!
//! Allocation failure has no variant: the Rust global allocator aborts the process, which is
//! the fail-fast policy the solver relies on.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Could not open word database at {}: {source}", .path.display())]
    DictionarySourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{word} already in dictionary")]
    DuplicateEntry { word: String },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SolverError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        SolverError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::DictionarySourceUnavailable { .. } => "A001",
            SolverError::DuplicateEntry { .. } => "A002",
            SolverError::InvalidInput { .. } => "A003",
            SolverError::Io(_) => "A004",
        }
    }

    /// Fatal errors end the process with a non-zero exit code; the rest are reported and
    /// the caller carries on.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SolverError::DictionarySourceUnavailable { .. } | SolverError::Io(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_unique() {
        let errors = [
            SolverError::DictionarySourceUnavailable {
                path: PathBuf::from("/nope"),
                source: io::Error::new(io::ErrorKind::NotFound, "missing"),
            },
            SolverError::DuplicateEntry {
                word: "cat".to_string(),
            },
            SolverError::invalid_input("empty"),
            SolverError::Io(io::Error::other("broken pipe")),
        ];
        let mut codes: Vec<&str> = errors.iter().map(SolverError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_fatality() {
        let missing = SolverError::DictionarySourceUnavailable {
            path: PathBuf::from("/usr/share/dict/missing"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(missing.is_fatal());
        assert!(
            !SolverError::DuplicateEntry {
                word: "cat".to_string()
            }
            .is_fatal()
        );
        assert!(!SolverError::invalid_input("empty").is_fatal());
    }

    #[test]
    fn test_display_messages() {
        let missing = SolverError::DictionarySourceUnavailable {
            path: PathBuf::from("/usr/share/dict/words"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            missing.to_string(),
            "Could not open word database at /usr/share/dict/words: missing"
        );
        let dup = SolverError::DuplicateEntry {
            word: "tis".to_string(),
        };
        assert_eq!(dup.to_string(), "tis already in dictionary");
        assert_eq!(
            SolverError::invalid_input("empty token").to_string(),
            "Invalid input: empty token"
        );
    }
}
