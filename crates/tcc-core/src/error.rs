//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared by the TCC order crates. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Absent arguments are reported before any lookup runs, naming the
//!   argument that was missing.
//! - An unmapped state code is a hard error on the strict path. It signals
//!   upstream corruption or an out-of-date state set and is never retried.

use thiserror::Error;

/// Top-level error type for the TCC order stack.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TccError {
    /// State lookup or conversion failed.
    #[error("state error: {0}")]
    State(#[from] StateError),
}

/// Error raised while converting a raw value into a state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A required input was absent. Always a caller contract violation.
    #[error("required argument `{argument}` was absent")]
    NullArgument {
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// No declared state carries the given code.
    #[error("No matching constant for [{code}]")]
    NoMatchingState {
        /// The unmapped code.
        code: i32,
    },

    /// No declared state carries the given name.
    #[error("unknown state name: {name:?}")]
    UnknownName {
        /// The unmatched name, verbatim.
        name: String,
    },
}

impl StateError {
    /// Whether the error is a caller contract violation rather than bad data.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::NullArgument { .. })
    }
}
