//! Restock candidate model.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An item considered for restocking.
///
/// Costs are integer currency units (cents) so they can serve directly as
/// knapsack sizes; profits may be fractional. A candidate is only worth
/// restocking when selling it is profitable and stock sits below its restock
/// point — ineligible candidates are silently left out of the plan, never
/// reported as errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RestockCandidate {
    /// Unique identifier.
    pub id: String,
    /// Purchase cost per unit, in integer currency units.
    pub unit_cost: u64,
    /// Profit per unit sold (selling price minus cost); must be positive for
    /// the candidate to be eligible.
    pub unit_profit: f64,
    /// Units currently in stock.
    pub current_quantity: u32,
    /// Stock level to restore up to.
    pub restock_point: u32,
    /// Optional demand multiplier applied to `unit_profit` when the
    /// optimizer's demand weighting is enabled.
    pub demand_weight: Option<f64>,
}

impl RestockCandidate {
    /// Creates a new candidate with no stock deficit.
    pub fn new(id: impl Into<String>, unit_cost: u64, unit_profit: f64) -> Self {
        Self {
            id: id.into(),
            unit_cost,
            unit_profit,
            current_quantity: 0,
            restock_point: 0,
            demand_weight: None,
        }
    }

    /// Sets the current stock level and restock point.
    pub fn with_stock(mut self, current_quantity: u32, restock_point: u32) -> Self {
        self.current_quantity = current_quantity;
        self.restock_point = restock_point;
        self
    }

    /// Sets the demand multiplier.
    pub fn with_demand_weight(mut self, weight: f64) -> Self {
        self.demand_weight = Some(weight);
        self
    }

    /// Units needed to restore stock to the restock point.
    pub fn max_units(&self) -> u32 {
        self.restock_point.saturating_sub(self.current_quantity)
    }
}
