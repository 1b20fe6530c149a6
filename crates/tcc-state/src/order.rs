//! # Order Transaction State
//!
//! The outcome of a distributed order transaction run under Try-Confirm-Cancel.
//! Each state carries one stable integer code. The code is the only value that
//! storage records and wire messages hold; the variant is an in-process
//! convenience.
//!
//! ## States
//!
//! | Code         | State       | Phase        |
//! |--------------|-------------|--------------|
//! | `0`          | `PENDING`   | intermediate |
//! | `1`          | `CONFIRMED` | final        |
//! | `2`          | `CANCELLED` | final        |
//! | `3`          | `CONFLICT`  | final        |
//! | `i32::MAX`   | `INVALID`   | neither      |
//!
//! ```text
//! PENDING ──▶ CONFIRMED
//!    │
//!    ├──────▶ CANCELLED
//!    │
//!    └──────▶ CONFLICT
//! ```
//!
//! Transition legality belongs to the transaction coordinator. This module
//! names and classifies states only.
//!
//! ## Lookup
//!
//! - [`OrderState::parse`] fails with `NoMatchingState` on an unknown code.
//! - [`OrderState::parse_quietly`] degrades to [`OrderState::Invalid`].
//! - [`OrderState::parse_with`] delegates to a caller-supplied
//!   [`StateFunction`] for non-integer sources.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tcc_core::{require, StateError, StateFunction};

use crate::lookup::Lookup;

/// Code reserved for [`OrderState::Invalid`]. No real state may use it.
pub const INVALID_CODE: i32 = i32::MAX;

/// The outcome of an order transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderState {
    /// No such state. Returned by lenient lookup for unmapped codes.
    Invalid,
    /// In flight; the outcome is not yet decided.
    Pending,
    /// Completed successfully.
    Confirmed,
    /// Timed out or aborted before completion.
    Cancelled,
    /// Did not complete as expected; inconsistent mid-way.
    Conflict,
}

impl OrderState {
    /// Every declared state, `INVALID` included, in declaration order.
    pub fn all() -> &'static [OrderState] {
        &[
            Self::Invalid,
            Self::Pending,
            Self::Confirmed,
            Self::Cancelled,
            Self::Conflict,
        ]
    }

    /// The four real transaction outcomes.
    pub fn real() -> &'static [OrderState] {
        &[
            Self::Pending,
            Self::Confirmed,
            Self::Cancelled,
            Self::Conflict,
        ]
    }

    /// The persisted integer code.
    pub const fn val(&self) -> i32 {
        match self {
            Self::Invalid => INVALID_CODE,
            Self::Pending => 0,
            Self::Confirmed => 1,
            Self::Cancelled => 2,
            Self::Conflict => 3,
        }
    }

    /// Alias of [`OrderState::val`].
    pub const fn code(&self) -> i32 {
        self.val()
    }

    /// The upper-case constant name, e.g. `"CONFIRMED"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Invalid => "INVALID",
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
            Self::Conflict => "CONFLICT",
        }
    }

    /// Strict lookup. Fails with [`StateError::NoMatchingState`] when no
    /// declared state carries `code`.
    pub fn parse(code: i32) -> Result<Self, StateError> {
        Lookup::Strict.resolve(code)
    }

    /// Lenient lookup. Returns [`OrderState::Invalid`] when no declared state
    /// carries `code`; never fails.
    pub fn parse_quietly(code: i32) -> Self {
        Lookup::Lenient.resolve(code).unwrap_or(Self::Invalid)
    }

    /// Strict lookup of a code read from a nullable source.
    pub fn parse_nullable(code: Option<i32>) -> Result<Self, StateError> {
        Self::parse(require(code, "code")?)
    }

    /// Convert an arbitrary source through a caller-supplied function.
    ///
    /// The function is invoked exactly once and its result is returned
    /// unmodified.
    pub fn parse_with<T, F>(source: T, function: F) -> Self
    where
        F: StateFunction<T, OrderState>,
    {
        function.apply(source)
    }

    /// [`OrderState::parse_with`] for nullable arguments. Both are checked
    /// before the function runs.
    pub fn try_parse_with<T, F>(source: Option<T>, function: Option<F>) -> Result<Self, StateError>
    where
        F: StateFunction<T, OrderState>,
    {
        let source = require(source, "source")?;
        let function = require(function, "function")?;
        Ok(Self::parse_with(source, function))
    }

    /// Whether the transaction is still in flight. True only for `PENDING`.
    pub fn is_intermediate_state(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Whether the transaction has been resolved, one way or another.
    ///
    /// `INVALID` is neither intermediate nor final.
    pub fn is_final_state(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Cancelled | Self::Conflict)
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OrderState {
    type Err = StateError;

    /// Parse an order state from its upper-case constant name.
    ///
    /// Accepts the same names produced by [`OrderState::name()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INVALID" => Ok(Self::Invalid),
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CANCELLED" => Ok(Self::Cancelled),
            "CONFLICT" => Ok(Self::Conflict),
            other => Err(StateError::UnknownName {
                name: other.to_string(),
            }),
        }
    }
}

impl TryFrom<i32> for OrderState {
    type Error = StateError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::parse(code)
    }
}

impl From<OrderState> for i32 {
    fn from(state: OrderState) -> Self {
        state.val()
    }
}

// The code is the wire format.
impl Serialize for OrderState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.val())
    }
}

impl<'de> Deserialize<'de> for OrderState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i32::deserialize(deserializer)?;
        Self::parse(code).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let mut seen = HashSet::new();
        for state in OrderState::all() {
            assert!(seen.insert(state.val()), "Duplicate code for {state}");
        }
    }

    #[test]
    fn invalid_code_is_reserved() {
        assert_eq!(OrderState::Invalid.val(), i32::MAX);
        for state in OrderState::real() {
            assert_ne!(state.val(), INVALID_CODE);
        }
    }

    #[test]
    fn codes_match_persisted_values() {
        assert_eq!(OrderState::Pending.val(), 0);
        assert_eq!(OrderState::Confirmed.val(), 1);
        assert_eq!(OrderState::Cancelled.val(), 2);
        assert_eq!(OrderState::Conflict.val(), 3);
    }

    #[test]
    fn real_is_all_minus_invalid() {
        let real: Vec<_> = OrderState::all()
            .iter()
            .copied()
            .filter(|s| *s != OrderState::Invalid)
            .collect();
        assert_eq!(real, OrderState::real());
    }

    #[test]
    fn exactly_one_intermediate_state() {
        let intermediate: Vec<_> = OrderState::all()
            .iter()
            .filter(|s| s.is_intermediate_state())
            .collect();
        assert_eq!(intermediate, vec![&OrderState::Pending]);
    }

    #[test]
    fn real_states_are_intermediate_xor_final() {
        for state in OrderState::real() {
            assert_ne!(state.is_intermediate_state(), state.is_final_state(), "{state}");
        }
    }

    #[test]
    fn invalid_is_neither_intermediate_nor_final() {
        assert!(!OrderState::Invalid.is_intermediate_state());
        assert!(!OrderState::Invalid.is_final_state());
    }

    #[test]
    fn parse_finds_every_declared_state() {
        for state in OrderState::all() {
            assert_eq!(OrderState::parse(state.val()), Ok(*state));
            assert_eq!(OrderState::parse_quietly(state.val()), *state);
        }
    }

    #[test]
    fn parse_unknown_code_fails() {
        assert_eq!(
            OrderState::parse(99999),
            Err(StateError::NoMatchingState { code: 99999 })
        );
        assert!(OrderState::parse(-1).is_err());
        assert!(OrderState::parse(4).is_err());
    }

    #[test]
    fn parse_quietly_unknown_code_is_invalid() {
        assert_eq!(OrderState::parse_quietly(99999), OrderState::Invalid);
        assert_eq!(OrderState::parse_quietly(i32::MIN), OrderState::Invalid);
    }

    #[test]
    fn parse_nullable_rejects_absent_code() {
        assert_eq!(
            OrderState::parse_nullable(None),
            Err(StateError::NullArgument { argument: "code" })
        );
        assert_eq!(OrderState::parse_nullable(Some(2)), Ok(OrderState::Cancelled));
    }

    #[test]
    fn parse_with_delegates_to_function() {
        let state = OrderState::parse_with("CONFIRMED", |s: &str| {
            s.parse().unwrap_or(OrderState::Invalid)
        });
        assert_eq!(state, OrderState::Confirmed);
    }

    #[test]
    fn parse_with_returns_function_result_unmodified() {
        // Classification is not applied to the function's answer.
        let state = OrderState::parse_with(0_u8, |_: u8| OrderState::Invalid);
        assert_eq!(state, OrderState::Invalid);
    }

    #[test]
    fn try_parse_with_checks_arguments_first() {
        let mut calls = 0;
        let function = |s: &str| {
            calls += 1;
            s.parse().unwrap_or(OrderState::Invalid)
        };
        assert_eq!(
            OrderState::try_parse_with(None::<&str>, Some(function)),
            Err(StateError::NullArgument { argument: "source" })
        );
        assert_eq!(calls, 0);

        assert_eq!(
            OrderState::try_parse_with(Some("PENDING"), None::<fn(&str) -> OrderState>),
            Err(StateError::NullArgument { argument: "function" })
        );
    }

    #[test]
    fn display_matches_name() {
        for state in OrderState::all() {
            assert_eq!(state.to_string(), state.name());
        }
    }

    #[test]
    fn from_str_roundtrip() {
        for state in OrderState::all() {
            let parsed: OrderState = state.name().parse().unwrap_or_else(|e| {
                panic!("Failed to parse {:?}: {e}", state.name())
            });
            assert_eq!(*state, parsed);
        }
    }

    #[test]
    fn from_str_invalid() {
        assert!("confirmed".parse::<OrderState>().is_err()); // case-sensitive
        assert!("".parse::<OrderState>().is_err());
        assert_eq!(
            "DONE".parse::<OrderState>(),
            Err(StateError::UnknownName { name: "DONE".into() })
        );
    }

    #[test]
    fn integer_conversions() {
        assert_eq!(OrderState::try_from(3), Ok(OrderState::Conflict));
        assert!(OrderState::try_from(42).is_err());
        assert_eq!(i32::from(OrderState::Confirmed), 1);
        assert_eq!(OrderState::Cancelled.code(), OrderState::Cancelled.val());
    }
}
