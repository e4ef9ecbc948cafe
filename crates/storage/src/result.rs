//! Allocation result representation.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single item-to-compartment assignment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignment {
    /// Assigned item id.
    pub item_id: String,
    /// Receiving compartment id.
    pub compartment_id: String,
    /// Footprint charged against the compartment.
    pub footprint: f64,
}

/// Result of a storage allocation solve.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocationResult {
    /// Assignments in the order they were made.
    pub assignments: Vec<Assignment>,

    /// Ids of items that could not be placed in any eligible compartment.
    pub unassigned: Vec<String>,

    /// Ids of zero-footprint items skipped without assignment.
    pub skipped: Vec<String>,

    /// Assigned footprint over total remaining capacity (0.0 - 1.0).
    pub utilization: f64,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl AllocationResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if every considered item was assigned.
    pub fn all_assigned(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// Returns the number of assigned items.
    pub fn assigned_count(&self) -> usize {
        self.assignments.len()
    }

    /// Returns the number of unassigned items.
    pub fn unassigned_count(&self) -> usize {
        self.unassigned.len()
    }

    /// Looks up the compartment an item was assigned to.
    pub fn compartment_for(&self, item_id: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.item_id == item_id)
            .map(|a| a.compartment_id.as_str())
    }

    /// Returns the assignments as an item-id → compartment-id map.
    pub fn assignment_map(&self) -> HashMap<&str, &str> {
        self.assignments
            .iter()
            .map(|a| (a.item_id.as_str(), a.compartment_id.as_str()))
            .collect()
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }
}
