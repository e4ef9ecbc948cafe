//! Restock plan representation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single purchase decision in a restock plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RestockLine {
    /// Candidate id.
    pub id: String,
    /// Units to purchase.
    pub units: u32,
    /// Total purchase cost, in integer currency units.
    pub cost: u64,
    /// Expected profit from selling the purchased units (unweighted).
    pub expected_profit: f64,
}

/// Result of a restock optimization.
///
/// Lines are sorted descending by expected profit (ties by id). A plan with
/// no lines is a valid degenerate result, not an error — it means nothing
/// profitable fits the budget.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RestockPlan {
    /// One line per candidate with units > 0.
    pub lines: Vec<RestockLine>,

    /// Total purchase cost; never exceeds the budget.
    pub total_cost: u64,

    /// Budget left unspent: `budget - total_cost`.
    pub remaining_budget: u64,

    /// Total expected profit across all lines.
    pub total_profit: f64,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl RestockPlan {
    /// Creates an empty plan for the given budget.
    pub fn empty(budget: u64) -> Self {
        Self {
            remaining_budget: budget,
            ..Default::default()
        }
    }

    /// Returns true if nothing is planned for purchase.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of plan lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Looks up the line for a candidate.
    pub fn line_for(&self, id: &str) -> Option<&RestockLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Return on investment as a percentage of total cost.
    pub fn roi_percent(&self) -> f64 {
        if self.total_cost > 0 {
            self.total_profit / self.total_cost as f64 * 100.0
        } else {
            0.0
        }
    }
}
