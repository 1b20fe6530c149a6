//! # Conversion Capability
//!
//! `StateFunction<T, S>` is the capability "given a `T`, produce an `S`".
//! State enums accept it at their generic lookup entry point so that callers
//! can decode their own source encodings (string columns, wire tags, legacy
//! enums) without the state crate knowing about those encodings.
//!
//! Every `FnOnce(T) -> S` closure is a `StateFunction`. Named converter types
//! can implement the trait directly.

use crate::error::StateError;

/// A one-shot conversion from a source value into a state.
pub trait StateFunction<T, S> {
    /// Convert `source`. Called exactly once per lookup.
    fn apply(self, source: T) -> S;
}

impl<T, S, F> StateFunction<T, S> for F
where
    F: FnOnce(T) -> S,
{
    fn apply(self, source: T) -> S {
        self(source)
    }
}

/// Unwrap a nullable argument, failing with [`StateError::NullArgument`].
pub fn require<T>(value: Option<T>, argument: &'static str) -> Result<T, StateError> {
    value.ok_or(StateError::NullArgument { argument })
}
