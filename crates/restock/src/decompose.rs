//! Bounded-knapsack decomposition.
//!
//! Each restock candidate may contribute 0..max_units discrete units — a
//! bounded knapsack, not 0/1. Before handing the instance to the core 0/1
//! solver, candidates are decomposed into virtual items: one per unit when
//! the instance is small, power-of-two bundles (1, 2, 4, ..., remainder)
//! otherwise. Either decomposition is exact for the bounded formulation; the
//! binary one just bounds the virtual item count per candidate to
//! O(log max_units) so the DP table stays small.

use crate::candidate::RestockCandidate;
use stowage_core::KnapsackItem;

/// A bundle of units of one candidate, offered to the 0/1 solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VirtualItem {
    /// Index of the originating candidate.
    pub candidate: usize,
    /// Units in this bundle.
    pub units: u32,
}

/// Profit per unit after optional demand weighting.
///
/// Returns `None` when the candidate is ineligible: non-positive or
/// non-finite profit, zero unit cost, or an invalid demand weight while
/// weighting is enabled. Ineligibility is per-candidate and soft.
pub(crate) fn weighted_unit_profit(
    candidate: &RestockCandidate,
    use_demand_weight: bool,
) -> Option<f64> {
    if candidate.unit_cost == 0 {
        return None;
    }
    if !candidate.unit_profit.is_finite() || candidate.unit_profit <= 0.0 {
        return None;
    }
    if !use_demand_weight {
        return Some(candidate.unit_profit);
    }
    match candidate.demand_weight {
        Some(weight) if weight.is_finite() && weight > 0.0 => {
            Some(candidate.unit_profit * weight)
        }
        Some(_) => None,
        None => Some(candidate.unit_profit),
    }
}

/// Units of a candidate actually worth decomposing: the stock deficit,
/// capped at what the budget can afford at all.
pub(crate) fn affordable_units(candidate: &RestockCandidate, budget: u64) -> u32 {
    if candidate.unit_cost == 0 {
        return 0;
    }
    let affordable = budget / candidate.unit_cost;
    u64::from(candidate.max_units()).min(affordable) as u32
}

/// Decomposes candidates into virtual 0/1 items.
///
/// Returns the virtual items alongside their knapsack representation
/// (size = units × unit_cost, value = units × weighted profit), in
/// candidate order.
pub(crate) fn decompose(
    candidates: &[RestockCandidate],
    budget: u64,
    unit_threshold: usize,
    use_demand_weight: bool,
) -> (Vec<VirtualItem>, Vec<KnapsackItem>) {
    // (candidate index, usable units, weighted profit per unit)
    let eligible: Vec<(usize, u32, f64)> = candidates
        .iter()
        .enumerate()
        .filter_map(|(i, candidate)| {
            let profit = weighted_unit_profit(candidate, use_demand_weight)?;
            let units = affordable_units(candidate, budget);
            if units == 0 {
                return None;
            }
            Some((i, units, profit))
        })
        .collect();

    let total_units: u64 = eligible.iter().map(|&(_, units, _)| u64::from(units)).sum();

    let mut virtuals = Vec::new();
    let mut knapsack_items = Vec::new();
    let mut push = |candidate: usize, units: u32, profit: f64| {
        virtuals.push(VirtualItem { candidate, units });
        knapsack_items.push(KnapsackItem::new(
            u64::from(units) * candidates[candidate].unit_cost,
            f64::from(units) * profit,
        ));
    };

    if total_units <= unit_threshold as u64 {
        // Small instance: one virtual item per unit.
        for &(candidate, units, profit) in &eligible {
            for _ in 0..units {
                push(candidate, 1, profit);
            }
        }
    } else {
        // Power-of-two bundles so every count 0..=units stays expressible.
        for &(candidate, units, profit) in &eligible {
            let mut remaining = units;
            let mut bundle = 1_u32;
            while remaining > 0 {
                let take = bundle.min(remaining);
                push(candidate, take, profit);
                remaining -= take;
                bundle = bundle.saturating_mul(2);
            }
        }
    }

    (virtuals, knapsack_items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligibility_rules() {
        let good = RestockCandidate::new("a", 10, 5.0).with_stock(0, 3);
        assert_eq!(weighted_unit_profit(&good, false), Some(5.0));

        let loss = RestockCandidate::new("b", 10, -2.0).with_stock(0, 3);
        assert_eq!(weighted_unit_profit(&loss, false), None);

        let break_even = RestockCandidate::new("c", 10, 0.0).with_stock(0, 3);
        assert_eq!(weighted_unit_profit(&break_even, false), None);

        let free = RestockCandidate::new("d", 0, 5.0).with_stock(0, 3);
        assert_eq!(weighted_unit_profit(&free, false), None);

        let nan = RestockCandidate::new("e", 10, f64::NAN).with_stock(0, 3);
        assert_eq!(weighted_unit_profit(&nan, false), None);
    }

    #[test]
    fn test_demand_weight_applied_only_when_enabled() {
        let candidate = RestockCandidate::new("a", 10, 5.0)
            .with_stock(0, 3)
            .with_demand_weight(2.0);

        assert_eq!(weighted_unit_profit(&candidate, false), Some(5.0));
        assert_eq!(weighted_unit_profit(&candidate, true), Some(10.0));

        // Missing weight falls back to the raw profit.
        let unweighted = RestockCandidate::new("b", 10, 5.0).with_stock(0, 3);
        assert_eq!(weighted_unit_profit(&unweighted, true), Some(5.0));

        // Invalid weight excludes the candidate while weighting is on.
        let bad = RestockCandidate::new("c", 10, 5.0)
            .with_stock(0, 3)
            .with_demand_weight(f64::NAN);
        assert_eq!(weighted_unit_profit(&bad, true), None);
        assert_eq!(weighted_unit_profit(&bad, false), Some(5.0));
    }

    #[test]
    fn test_affordable_units_caps_at_budget() {
        let candidate = RestockCandidate::new("a", 30, 5.0).with_stock(0, 10);
        assert_eq!(affordable_units(&candidate, 1000), 10);
        assert_eq!(affordable_units(&candidate, 100), 3);
        assert_eq!(affordable_units(&candidate, 29), 0);
    }

    #[test]
    fn test_unit_decomposition() {
        let candidates = vec![RestockCandidate::new("a", 10, 5.0).with_stock(0, 3)];
        let (virtuals, items) = decompose(&candidates, 1000, 1000, false);

        assert_eq!(virtuals.len(), 3);
        assert!(virtuals.iter().all(|v| v.units == 1 && v.candidate == 0));
        assert!(items.iter().all(|i| i.size == 10 && i.value == 5.0));
    }

    #[test]
    fn test_binary_decomposition_covers_every_count() {
        let candidates = vec![RestockCandidate::new("a", 1, 1.0).with_stock(0, 13)];
        // Threshold 0 forces the binary path: 1, 2, 4, 6.
        let (virtuals, _) = decompose(&candidates, 1000, 0, false);

        let bundles: Vec<u32> = virtuals.iter().map(|v| v.units).collect();
        assert_eq!(bundles, vec![1, 2, 4, 6]);
        assert_eq!(bundles.iter().sum::<u32>(), 13);

        // Every count 0..=13 is a subset sum of the bundles.
        for target in 0_u32..=13 {
            let mut reachable = vec![false; 14];
            reachable[0] = true;
            for &b in &bundles {
                for count in (0..=13_usize).rev() {
                    if reachable[count] && count + b as usize <= 13 {
                        reachable[count + b as usize] = true;
                    }
                }
            }
            assert!(reachable[target as usize], "count {} unreachable", target);
        }
    }

    #[test]
    fn test_decompose_skips_ineligible() {
        let candidates = vec![
            RestockCandidate::new("loss", 10, -1.0).with_stock(0, 5),
            RestockCandidate::new("stocked", 10, 5.0).with_stock(10, 5),
            RestockCandidate::new("good", 10, 5.0).with_stock(0, 2),
        ];
        let (virtuals, _) = decompose(&candidates, 1000, 1000, false);
        assert_eq!(virtuals.len(), 2);
        assert!(virtuals.iter().all(|v| v.candidate == 2));
    }
}
