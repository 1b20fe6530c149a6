//! Predefined code lookup strategies sharing the one [`CodeIndex`].
//!
//! The only behavioral difference between them is what happens to an
//! unmapped code: `Strict` fails, `Lenient` answers [`OrderState::Invalid`].

use tcc_core::StateError;

use crate::index::CodeIndex;
use crate::order::OrderState;

/// How an unmapped code is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// Fail with [`StateError::NoMatchingState`].
    Strict,
    /// Degrade to [`OrderState::Invalid`].
    Lenient,
}

impl Lookup {
    /// Resolve `code` against the shared index.
    ///
    /// `Lenient` never returns `Err`.
    pub fn resolve(self, code: i32) -> Result<OrderState, StateError> {
        match CodeIndex::global().get(code) {
            Some(state) => Ok(state),
            None => match self {
                Self::Strict => Err(StateError::NoMatchingState { code }),
                Self::Lenient => {
                    tracing::debug!(code, "unmapped order state code, using INVALID");
                    Ok(OrderState::Invalid)
                }
            },
        }
    }

    /// Whether an unmapped code is an error under this strategy.
    pub fn fails_on_unknown(&self) -> bool {
        matches!(self, Self::Strict)
    }
}
