//! # Stowage Storage
//!
//! Greedy warehouse-aware storage allocation for the stowage engine.
//!
//! Assigns inventory items to physical storage compartments under capacity
//! and warehouse-affinity constraints, using a first-fit-decreasing
//! bin-packing heuristic with a caller-selected compartment ordering policy.
//!
//! ## Features
//!
//! - Two ordering policies: cheapest-maintenance-first or most-free-space-first
//! - Strict warehouse affinity (null affinity on either side means no constraint)
//! - Pre-screening of items that fit no eligible compartment
//! - Pure computation: inputs are never mutated, results are returned whole
//!
//! ## Quick Start
//!
//! ```rust
//! use stowage_storage::{
//!     AllocationMode, AllocatorConfig, Compartment, StorableItem, StorageAllocator,
//! };
//!
//! let items = vec![
//!     StorableItem::new("pallet-1", 5.0, 2).with_warehouse("north"),
//!     StorableItem::new("pallet-2", 3.0, 1),
//! ];
//!
//! let compartments = vec![
//!     Compartment::new("bay-a", 20.0)
//!         .with_maintenance_cost(1.0)
//!         .with_warehouse("north"),
//!     Compartment::new("bay-b", 15.0).with_maintenance_cost(4.0),
//! ];
//!
//! let config = AllocatorConfig::new().with_mode(AllocationMode::CostAware);
//! let allocator = StorageAllocator::new(config);
//! let result = allocator.allocate(&items, &compartments).unwrap();
//!
//! println!(
//!     "assigned {} of {} items, utilization {}",
//!     result.assigned_count(),
//!     items.len(),
//!     result.utilization_percent()
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod allocator;
pub mod compartment;
pub mod item;
pub mod result;

// Re-exports
pub use allocator::{AllocationMode, AllocatorConfig, StorageAllocator};
pub use compartment::Compartment;
pub use item::{StorableItem, WarehouseId};
pub use result::{AllocationResult, Assignment};
pub use stowage_core::{Error, Result};
