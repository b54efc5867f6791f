//! Error types for the rotorcrypt library.

use thiserror::Error;

/// Errors produced by the rotorcrypt library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotorError {
    /// A chosen-dial index does not name a slot in the dial repository.
    #[error("Dial index {index} is outside the repository (size {repository_size})")]
    InvalidIndex {
        index: usize,
        repository_size: usize,
    },
    /// A symbol or counter digit is not in `[0, alphabet)`.
    #[error("Symbol {symbol} at position {position} is outside the alphabet [0, {alphabet})")]
    OutOfRange {
        symbol: u8,
        position: usize,
        alphabet: usize,
    },
    /// A dial table is not a permutation of the alphabet.
    #[error("Dial table is not a permutation: symbol {symbol} is {problem}")]
    InvalidDial { symbol: u8, problem: DialProblem },
    /// Starting counter and dial selection have different lengths.
    #[error("Starting counter has {counter} digits but {selection} dials are selected")]
    DepthMismatch { counter: usize, selection: usize },
    /// No dials were selected.
    #[error("Dial stack must contain at least one dial")]
    EmptyStack,
}

/// Why a dial table failed the permutation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialProblem {
    /// The output symbol is not in the alphabet.
    OutOfAlphabet,
    /// The output symbol appears more than once.
    Duplicated,
}

impl std::fmt::Display for DialProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DialProblem::OutOfAlphabet => write!(f, "outside the alphabet"),
            DialProblem::Duplicated => write!(f, "duplicated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_index() {
        let err = RotorError::InvalidIndex {
            index: 7,
            repository_size: 5,
        };
        assert_eq!(
            format!("{}", err),
            "Dial index 7 is outside the repository (size 5)"
        );
    }

    #[test]
    fn test_display_out_of_range() {
        let err = RotorError::OutOfRange {
            symbol: 3,
            position: 4,
            alphabet: 3,
        };
        assert_eq!(
            format!("{}", err),
            "Symbol 3 at position 4 is outside the alphabet [0, 3)"
        );
    }

    #[test]
    fn test_display_invalid_dial() {
        let err = RotorError::InvalidDial {
            symbol: 1,
            problem: DialProblem::Duplicated,
        };
        assert_eq!(
            format!("{}", err),
            "Dial table is not a permutation: symbol 1 is duplicated"
        );
    }

    #[test]
    fn test_display_depth_mismatch() {
        let err = RotorError::DepthMismatch {
            counter: 2,
            selection: 3,
        };
        assert_eq!(
            format!("{}", err),
            "Starting counter has 2 digits but 3 dials are selected"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(RotorError::EmptyStack, RotorError::EmptyStack);
        assert_ne!(
            RotorError::EmptyStack,
            RotorError::InvalidIndex {
                index: 0,
                repository_size: 0
            }
        );
    }

    #[test]
    fn test_error_clone() {
        let err = RotorError::OutOfRange {
            symbol: 9,
            position: 0,
            alphabet: 3,
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
