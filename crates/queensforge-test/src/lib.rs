//! Shared test fixtures for QueensForge crates.
//!
//! This crate provides pure functions for auditing engine output. It
//! depends only on `queensforge-core`.
//!
//! - [`nqueens`] - reference solutions and board fixtures
//! - [`audit`] - trace invariant checks
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! queensforge-test = { workspace = true }
//! ```

pub mod audit;
pub mod nqueens;

pub use audit::{
    assert_non_increasing_segments, assert_single_step_edits, max_step_len, removal_count,
};
pub use nqueens::{all_solutions, first_solution, rows_to_step};
