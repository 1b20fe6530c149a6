//! # tcc-state — Order Transaction States for Try-Confirm-Cancel
//!
//! A closed, integer-coded enumeration of order transaction outcomes. Storage
//! records and RPC payloads hold only the integer code; this crate turns the
//! code back into a typed [`OrderState`] and classifies it.
//!
//! ## Modules
//!
//! - **Order** (`order.rs`): `OrderState`, its codes, names, serde format and
//!   the intermediate/final predicates.
//!
//! - **Index** (`index.rs`): the process-wide code → state table, built once
//!   and read-only thereafter.
//!
//! - **Lookup** (`lookup.rs`): strict and lenient resolution over the index.
//!
//! ## Usage
//!
//! ```
//! use tcc_state::OrderState;
//!
//! let state = OrderState::parse(1).unwrap();
//! assert_eq!(state, OrderState::Confirmed);
//! assert!(state.is_final_state());
//!
//! assert!(OrderState::parse(99999).is_err());
//! assert_eq!(OrderState::parse_quietly(99999), OrderState::Invalid);
//! ```

pub mod index;
pub mod lookup;
pub mod order;

pub use index::CodeIndex;
pub use lookup::Lookup;
pub use order::{OrderState, INVALID_CODE};

pub use tcc_core::{StateError, StateFunction};
