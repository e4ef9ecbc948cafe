//! Storage compartment model.

use crate::item::{StorableItem, WarehouseId};
use stowage_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A physical storage compartment with bounded capacity.
///
/// Compartments are read-only inputs to the allocator: remaining capacity is
/// tracked in a private working copy during a solve, and the caller applies
/// the returned assignments back to durable storage as a single step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Compartment {
    /// Unique identifier.
    pub id: String,
    /// Upper bound on usable space.
    pub capacity: f64,
    /// Currently free space, `0 <= remaining_capacity <= capacity`.
    pub remaining_capacity: f64,
    /// Recurring maintenance cost.
    pub maintenance_cost: f64,
    /// Optional warehouse affinity.
    pub warehouse: Option<WarehouseId>,
}

impl Compartment {
    /// Creates a new, empty compartment (remaining capacity = capacity).
    pub fn new(id: impl Into<String>, capacity: f64) -> Self {
        Self {
            id: id.into(),
            capacity,
            remaining_capacity: capacity,
            maintenance_cost: 0.0,
            warehouse: None,
        }
    }

    /// Sets the current free space.
    pub fn with_remaining_capacity(mut self, remaining: f64) -> Self {
        self.remaining_capacity = remaining;
        self
    }

    /// Sets the maintenance cost.
    pub fn with_maintenance_cost(mut self, cost: f64) -> Self {
        self.maintenance_cost = cost;
        self
    }

    /// Sets the warehouse affinity.
    pub fn with_warehouse(mut self, warehouse: impl Into<WarehouseId>) -> Self {
        self.warehouse = Some(warehouse.into());
        self
    }

    /// Whether this compartment is warehouse-eligible for the item.
    ///
    /// Matches when either side has no affinity, or both name the same
    /// warehouse.
    pub fn accepts(&self, item: &StorableItem) -> bool {
        match (&item.warehouse, &self.warehouse) {
            (Some(iw), Some(cw)) => iw == cw,
            _ => true,
        }
    }

    /// Validates the numeric fields.
    pub fn validate(&self) -> Result<()> {
        if !self.capacity.is_finite() || self.capacity <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "compartment '{}' has an invalid capacity ({})",
                self.id, self.capacity
            )));
        }
        if !self.remaining_capacity.is_finite()
            || self.remaining_capacity < 0.0
            || self.remaining_capacity > self.capacity
        {
            return Err(Error::InvalidInput(format!(
                "compartment '{}' has an invalid remaining capacity ({} of {})",
                self.id, self.remaining_capacity, self.capacity
            )));
        }
        if !self.maintenance_cost.is_finite() || self.maintenance_cost < 0.0 {
            return Err(Error::InvalidInput(format!(
                "compartment '{}' has an invalid maintenance cost ({})",
                self.id, self.maintenance_cost
            )));
        }
        Ok(())
    }
}
