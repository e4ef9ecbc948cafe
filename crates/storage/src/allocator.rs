//! Greedy warehouse-aware storage allocator.

use crate::compartment::Compartment;
use crate::item::StorableItem;
use crate::result::{AllocationResult, Assignment};
use stowage_core::Result;

use std::time::Instant;
use tracing::{debug, instrument};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compartment ordering policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AllocationMode {
    /// Fill compartments with the lowest maintenance cost first.
    #[default]
    CostAware,
    /// Fill the compartments with the most free space first, concentrating
    /// items into fewer compartments.
    SpaceAware,
}

/// Configuration for the storage allocator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocatorConfig {
    /// Compartment ordering policy.
    pub mode: AllocationMode,

    /// Whether to pre-screen items that fit no eligible compartment before
    /// the greedy pass starts.
    pub prescreen: bool,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            mode: AllocationMode::default(),
            prescreen: true,
        }
    }
}

impl AllocatorConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the allocation mode.
    pub fn with_mode(mut self, mode: AllocationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enables or disables the pre-screen pass.
    pub fn with_prescreen(mut self, prescreen: bool) -> Self {
        self.prescreen = prescreen;
        self
    }
}

/// Greedy first-fit-decreasing storage allocator.
///
/// Items are taken largest-footprint-first and placed into the first
/// warehouse-eligible compartment with enough free space, with compartments
/// visited in the order selected by [`AllocationMode`]. This is a bin-packing
/// heuristic, not an exact optimum: it guarantees a feasible,
/// capacity-respecting assignment in O(n log n + n × m), not minimum
/// compartment count or minimum total maintenance cost.
pub struct StorageAllocator {
    config: AllocatorConfig,
}

impl StorageAllocator {
    /// Creates a new allocator with the given configuration.
    pub fn new(config: AllocatorConfig) -> Self {
        Self { config }
    }

    /// Creates an allocator with default configuration.
    pub fn default_config() -> Self {
        Self::new(AllocatorConfig::default())
    }

    /// Assigns items to compartments.
    ///
    /// Neither input slice is mutated; remaining capacities are tracked in a
    /// local working copy. Items that fit nowhere are reported in
    /// `unassigned`, zero-footprint items in `skipped`; neither is an error.
    ///
    /// # Errors
    ///
    /// [`stowage_core::Error::InvalidItem`] or
    /// [`stowage_core::Error::InvalidInput`] when an item or compartment
    /// carries non-finite or out-of-range numeric fields. Validation runs
    /// before any assignment is made.
    #[instrument(skip(self, items, compartments), fields(
        items = items.len(),
        compartments = compartments.len(),
        mode = ?self.config.mode
    ))]
    pub fn allocate(
        &self,
        items: &[StorableItem],
        compartments: &[Compartment],
    ) -> Result<AllocationResult> {
        let start = Instant::now();

        for item in items {
            item.validate()?;
        }
        for compartment in compartments {
            compartment.validate()?;
        }

        // Compartment visit order. Stable sorts keep ties in input order.
        let mut compartment_order: Vec<usize> = (0..compartments.len()).collect();
        match self.config.mode {
            AllocationMode::CostAware => compartment_order.sort_by(|&a, &b| {
                compartments[a]
                    .maintenance_cost
                    .total_cmp(&compartments[b].maintenance_cost)
            }),
            AllocationMode::SpaceAware => compartment_order.sort_by(|&a, &b| {
                compartments[b]
                    .remaining_capacity
                    .total_cmp(&compartments[a].remaining_capacity)
            }),
        }

        // First-fit-decreasing: largest footprint first.
        let mut item_order: Vec<usize> = (0..items.len()).collect();
        item_order.sort_by(|&a, &b| items[b].footprint().total_cmp(&items[a].footprint()));

        let mut result = AllocationResult::new();

        // Items that fit no eligible compartment at the original capacities
        // go straight to unassigned.
        let mut prescreened = vec![false; items.len()];
        if self.config.prescreen {
            for (i, item) in items.iter().enumerate() {
                let footprint = item.footprint();
                if footprint <= 0.0 {
                    continue;
                }
                let fits_somewhere = compartments
                    .iter()
                    .any(|c| c.accepts(item) && c.remaining_capacity >= footprint);
                if !fits_somewhere {
                    prescreened[i] = true;
                    result.unassigned.push(item.id.clone());
                }
            }
        }

        let mut remaining: Vec<f64> = compartments.iter().map(|c| c.remaining_capacity).collect();
        let total_remaining: f64 = remaining.iter().sum();
        let mut assigned_footprint = 0.0_f64;

        for &i in &item_order {
            if prescreened[i] {
                continue;
            }
            let item = &items[i];
            let footprint = item.footprint();
            if footprint <= 0.0 {
                result.skipped.push(item.id.clone());
                continue;
            }

            let mut placed = false;
            for &c in &compartment_order {
                if compartments[c].accepts(item) && remaining[c] >= footprint {
                    remaining[c] -= footprint;
                    assigned_footprint += footprint;
                    result.assignments.push(Assignment {
                        item_id: item.id.clone(),
                        compartment_id: compartments[c].id.clone(),
                        footprint,
                    });
                    placed = true;
                    break;
                }
            }
            if !placed {
                result.unassigned.push(item.id.clone());
            }
        }

        result.utilization = if total_remaining > 0.0 {
            assigned_footprint / total_remaining
        } else {
            0.0
        };
        result.computation_time_ms = start.elapsed().as_millis() as u64;

        debug!(
            assigned = result.assigned_count(),
            unassigned = result.unassigned_count(),
            skipped = result.skipped.len(),
            utilization = result.utilization,
            "storage allocation finished"
        );

        Ok(result)
    }
}
