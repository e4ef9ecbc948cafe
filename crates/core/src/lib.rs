//! # Stowage Core
//!
//! Core error taxonomy and the exact knapsack solver shared by the stowage
//! allocation engine.
//!
//! This crate provides the foundational pieces consumed by the domain crates:
//!
//! - **Error taxonomy**: [`Error`], [`Result`] — boundary validation errors
//!   (`InvalidItem`, `InvalidInput`), resource ceilings (`ResourceLimit`).
//! - **Knapsack solver**: [`KnapsackSolver`] — exact 0/1 knapsack via
//!   bottom-up dynamic programming, the leaf algorithm underneath restock
//!   optimization and usable standalone.
//!
//! All solvers in the engine are pure functions over their inputs: they
//! allocate only local working state, never mutate caller-owned data, and
//! perform no I/O. Independent invocations may run in parallel on separate
//! threads with no locking discipline.
//!
//! ## Quick Start
//!
//! ```rust
//! use stowage_core::{KnapsackConfig, KnapsackItem, KnapsackSolver};
//!
//! let items = vec![
//!     KnapsackItem::new(2, 3.0),
//!     KnapsackItem::new(3, 4.0),
//!     KnapsackItem::new(4, 5.0),
//! ];
//!
//! let solver = KnapsackSolver::new(KnapsackConfig::new());
//! let solution = solver.solve(&items, 5).unwrap();
//!
//! println!(
//!     "selected {} items worth {}",
//!     solution.selected_count(),
//!     solution.total_value
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod knapsack;

// Re-exports
pub use error::{Error, Result};
pub use knapsack::{
    KnapsackConfig, KnapsackItem, KnapsackSolution, KnapsackSolver, DEFAULT_MAX_TABLE_CELLS,
};
