//! Storable item model.

use stowage_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a physical warehouse.
///
/// Items and compartments carrying the same warehouse id are bound together;
/// `None` on either side means no constraint.
pub type WarehouseId = String;

/// An inventory unit to be placed into a compartment.
///
/// The engine never mutates items; it reads their footprint and affinity and
/// reports assignments by id.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StorableItem {
    /// Unique identifier.
    pub id: String,
    /// Volume of a single unit.
    pub size: f64,
    /// Number of units stored together.
    pub quantity: u32,
    /// Optional warehouse affinity.
    pub warehouse: Option<WarehouseId>,
}

impl StorableItem {
    /// Creates a new item with no warehouse affinity.
    pub fn new(id: impl Into<String>, size: f64, quantity: u32) -> Self {
        Self {
            id: id.into(),
            size,
            quantity,
            warehouse: None,
        }
    }

    /// Sets the warehouse affinity.
    pub fn with_warehouse(mut self, warehouse: impl Into<WarehouseId>) -> Self {
        self.warehouse = Some(warehouse.into());
        self
    }

    /// Total space consumed by this item: `size × quantity`.
    pub fn footprint(&self) -> f64 {
        self.size * f64::from(self.quantity)
    }

    /// Validates the numeric fields.
    pub fn validate(&self) -> Result<()> {
        if !self.size.is_finite() || self.size < 0.0 {
            return Err(Error::InvalidItem(format!(
                "item '{}' has an invalid size ({})",
                self.id, self.size
            )));
        }
        Ok(())
    }
}
