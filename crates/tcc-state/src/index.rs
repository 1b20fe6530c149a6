//! # Code Index
//!
//! Process-wide reverse lookup from integer code to [`OrderState`]. Built once,
//! on first use, behind a [`OnceLock`]; every caller observes either no index
//! or the fully populated one. Read-only after construction.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::order::OrderState;

static CODE_INDEX: OnceLock<CodeIndex> = OnceLock::new();

/// Immutable code → state table covering every declared state.
#[derive(Debug)]
pub struct CodeIndex {
    by_code: HashMap<i32, OrderState>,
}

impl CodeIndex {
    /// The shared index, built on first access.
    pub fn global() -> &'static CodeIndex {
        CODE_INDEX.get_or_init(Self::build)
    }

    /// Build a fresh index from the declared state set.
    ///
    /// Deterministic: codes are unique, so population order does not matter.
    pub fn build() -> Self {
        let states = OrderState::all();
        let mut by_code = HashMap::with_capacity(states.len());
        for state in states {
            by_code.insert(state.val(), *state);
        }
        tracing::trace!(states = by_code.len(), "order state code index built");
        Self { by_code }
    }

    /// The state carrying `code`, if any.
    pub fn get(&self, code: i32) -> Option<OrderState> {
        self.by_code.get(&code).copied()
    }

    /// Number of indexed states.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Whether the index is empty. Never true for a built index.
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
