//! Budget-constrained restock optimizer.

use crate::candidate::RestockCandidate;
use crate::decompose::decompose;
use crate::plan::{RestockLine, RestockPlan};
use stowage_core::{KnapsackConfig, KnapsackSolver, Result};

use std::time::Instant;
use tracing::{debug, instrument};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default total-unit threshold below which candidates are decomposed one
/// virtual item per unit instead of into power-of-two bundles.
pub const DEFAULT_UNIT_THRESHOLD: usize = 1000;

/// Configuration for the restock optimizer.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RestockConfig {
    /// Total-unit threshold for switching from per-unit to power-of-two
    /// decomposition.
    pub unit_threshold: usize,

    /// Whether candidate demand weights multiply unit profit during
    /// optimization. Off by default; plans always report unweighted profit.
    pub use_demand_weight: bool,

    /// Configuration forwarded to the underlying knapsack solver.
    pub knapsack: KnapsackConfig,
}

impl Default for RestockConfig {
    fn default() -> Self {
        Self {
            unit_threshold: DEFAULT_UNIT_THRESHOLD,
            use_demand_weight: false,
            knapsack: KnapsackConfig::default(),
        }
    }
}

impl RestockConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the decomposition threshold.
    pub fn with_unit_threshold(mut self, threshold: usize) -> Self {
        self.unit_threshold = threshold;
        self
    }

    /// Enables or disables demand weighting.
    pub fn with_demand_weight(mut self, enabled: bool) -> Self {
        self.use_demand_weight = enabled;
        self
    }

    /// Sets the knapsack solver configuration.
    pub fn with_knapsack(mut self, knapsack: KnapsackConfig) -> Self {
        self.knapsack = knapsack;
        self
    }
}

/// Exact bounded-knapsack restock optimizer.
///
/// Decomposes multi-unit restock decisions into virtual 0/1 items, solves
/// them with the core [`KnapsackSolver`] over an integer budget axis, and
/// aggregates the selection back into per-candidate unit counts.
pub struct RestockOptimizer {
    config: RestockConfig,
}

impl RestockOptimizer {
    /// Creates a new optimizer with the given configuration.
    pub fn new(config: RestockConfig) -> Self {
        Self { config }
    }

    /// Creates an optimizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(RestockConfig::default())
    }

    /// Produces the profit-maximal restock plan within the budget.
    ///
    /// The budget is in the same integer currency unit as candidate costs.
    /// A zero budget yields an empty plan (a valid degenerate result).
    /// Malformed candidates (non-finite or non-positive profit, zero cost)
    /// are excluded individually, never failing the whole call.
    ///
    /// # Errors
    ///
    /// [`stowage_core::Error::ResourceLimit`] when the budget axis would
    /// produce a DP table beyond the configured ceiling.
    #[instrument(skip(self, candidates), fields(candidates = candidates.len(), budget))]
    pub fn optimize(&self, candidates: &[RestockCandidate], budget: u64) -> Result<RestockPlan> {
        let start = Instant::now();

        if budget == 0 {
            return Ok(RestockPlan::empty(budget));
        }

        let (virtuals, knapsack_items) = decompose(
            candidates,
            budget,
            self.config.unit_threshold,
            self.config.use_demand_weight,
        );

        let mut plan = RestockPlan::empty(budget);
        if virtuals.is_empty() {
            plan.computation_time_ms = start.elapsed().as_millis() as u64;
            return Ok(plan);
        }

        let solver = KnapsackSolver::new(self.config.knapsack.clone());
        let solution = solver.solve(&knapsack_items, budget)?;

        // Aggregate selected bundles back to per-candidate unit counts.
        let mut units_per_candidate = vec![0_u32; candidates.len()];
        for &selected in &solution.selected {
            let virtual_item = &virtuals[selected];
            units_per_candidate[virtual_item.candidate] += virtual_item.units;
        }

        for (i, &units) in units_per_candidate.iter().enumerate() {
            if units == 0 {
                continue;
            }
            let candidate = &candidates[i];
            let cost = u64::from(units) * candidate.unit_cost;
            let expected_profit = f64::from(units) * candidate.unit_profit;
            plan.total_cost += cost;
            plan.total_profit += expected_profit;
            plan.lines.push(RestockLine {
                id: candidate.id.clone(),
                units,
                cost,
                expected_profit,
            });
        }

        plan.lines.sort_by(|a, b| {
            b.expected_profit
                .total_cmp(&a.expected_profit)
                .then_with(|| a.id.cmp(&b.id))
        });
        plan.remaining_budget = budget - plan.total_cost;
        plan.computation_time_ms = start.elapsed().as_millis() as u64;

        debug!(
            lines = plan.line_count(),
            total_cost = plan.total_cost,
            total_profit = plan.total_profit,
            remaining_budget = plan.remaining_budget,
            "restock plan computed"
        );

        Ok(plan)
    }
}
