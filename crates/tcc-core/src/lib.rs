//! # tcc-core — Foundational Types for the TCC Order Stack
//!
//! Leaf crate of the workspace. It defines the error hierarchy and the
//! conversion capability that state enums build on. It depends on nothing
//! internal.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tcc-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod convert;
pub mod error;

pub use convert::{require, StateFunction};
pub use error::{StateError, TccError};
