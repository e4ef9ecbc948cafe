//! # Stowage Restock
//!
//! Budget-constrained restock planning for the stowage engine.
//!
//! Decides how many units of each inventory item to purchase under a fixed
//! monetary budget to maximize expected profit. Each candidate may contribute
//! 0..max_units discrete units — a bounded knapsack — which is decomposed
//! into virtual 0/1 items (per-unit for small instances, power-of-two
//! bundles otherwise) and solved exactly with the core knapsack solver.
//!
//! ## Features
//!
//! - Exact bounded-knapsack optimization over an integer budget axis (cents)
//! - Per-candidate eligibility filtering (profitable, below restock point)
//! - Optional demand weighting of unit profit, off by default
//! - Pure computation: inputs are never mutated, results are returned whole
//!
//! ## Quick Start
//!
//! ```rust
//! use stowage_restock::{RestockCandidate, RestockOptimizer};
//!
//! let candidates = vec![
//!     RestockCandidate::new("sku-1", 1_000, 500.0).with_stock(2, 5),
//!     RestockCandidate::new("sku-2", 3_000, 2_000.0).with_stock(0, 2),
//! ];
//!
//! let optimizer = RestockOptimizer::default_config();
//! let plan = optimizer.optimize(&candidates, 10_000).unwrap();
//!
//! for line in &plan.lines {
//!     println!("{}: buy {} for {}", line.id, line.units, line.cost);
//! }
//! println!("spent {}, {} left", plan.total_cost, plan.remaining_budget);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod candidate;
mod decompose;
pub mod optimizer;
pub mod plan;

// Re-exports
pub use candidate::RestockCandidate;
pub use optimizer::{RestockConfig, RestockOptimizer, DEFAULT_UNIT_THRESHOLD};
pub use plan::{RestockLine, RestockPlan};
pub use stowage_core::{Error, KnapsackConfig, Result};
