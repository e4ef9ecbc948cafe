//! Exact 0/1 knapsack solver.
//!
//! Classic bottom-up dynamic program over an integer capacity axis. Given
//! items with integer sizes and finite values, selects the subset maximizing
//! total value without exceeding capacity. The table has `(n + 1) × (capacity + 1)`
//! entries, so callers are responsible for scaling real-valued sizes or
//! budgets into a reasonably coarse integer unit first; the solver rejects
//! requests whose table would exceed the configured cell ceiling instead of
//! attempting the allocation.
//!
//! # Example
//!
//! ```rust
//! use stowage_core::{KnapsackItem, KnapsackSolver};
//!
//! let items = vec![
//!     KnapsackItem::new(3, 5.0),
//!     KnapsackItem::new(4, 6.0),
//!     KnapsackItem::new(5, 10.0),
//! ];
//!
//! let solver = KnapsackSolver::default_config();
//! let solution = solver.solve(&items, 8).unwrap();
//!
//! assert_eq!(solution.selected, vec![0, 2]);
//! assert_eq!(solution.total_value, 15.0);
//! assert_eq!(solution.remaining_capacity, 0);
//! ```

use crate::error::{Error, Result};
use tracing::{debug, instrument};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default ceiling on DP table cells (~128 MiB of `f64`).
pub const DEFAULT_MAX_TABLE_CELLS: usize = 16_000_000;

/// An item offered to the knapsack solver.
///
/// `size` is in the caller's integer unit (volume units, currency cents, ...).
/// `value` may be any finite number; items with non-positive value are never
/// worth selecting unless their size is zero, and the DP handles both cases
/// without special treatment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KnapsackItem {
    /// Size in integer capacity units.
    pub size: u64,
    /// Value contributed when selected.
    pub value: f64,
}

impl KnapsackItem {
    /// Creates a new item.
    pub fn new(size: u64, value: f64) -> Self {
        Self { size, value }
    }
}

/// Configuration for the knapsack solver.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KnapsackConfig {
    /// Maximum number of DP table cells, `(n + 1) × (capacity + 1)`.
    ///
    /// Requests exceeding this are rejected with [`Error::ResourceLimit`]
    /// before any allocation.
    pub max_table_cells: usize,
}

impl Default for KnapsackConfig {
    fn default() -> Self {
        Self {
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
        }
    }
}

impl KnapsackConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the table cell ceiling.
    pub fn with_max_table_cells(mut self, cells: usize) -> Self {
        self.max_table_cells = cells.max(1);
        self
    }

    /// Checks whether a table of the given dimensions is within the ceiling.
    pub fn is_within_limit(&self, num_items: usize, capacity: u64) -> bool {
        let cells = (num_items as u128 + 1) * (capacity as u128 + 1);
        cells <= self.max_table_cells as u128
    }
}

/// Solution produced by [`KnapsackSolver::solve`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KnapsackSolution {
    /// Indices into the input slice of the selected items, ascending.
    pub selected: Vec<usize>,
    /// Total value of the selected items.
    pub total_value: f64,
    /// Capacity left unused by the selection.
    pub remaining_capacity: u64,
}

impl KnapsackSolution {
    /// Returns the number of selected items.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Returns true if nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Exact 0/1 knapsack solver.
///
/// Stateless apart from its configuration; a single instance may be shared
/// freely across threads and repeated calls with identical inputs produce
/// identical selections (ties favor exclusion).
pub struct KnapsackSolver {
    config: KnapsackConfig,
}

impl KnapsackSolver {
    /// Creates a new solver with the given configuration.
    pub fn new(config: KnapsackConfig) -> Self {
        Self { config }
    }

    /// Creates a solver with default configuration.
    pub fn default_config() -> Self {
        Self::new(KnapsackConfig::default())
    }

    /// Solves the 0/1 knapsack instance.
    ///
    /// Runs in O(n × capacity) time and space. Items larger than the
    /// capacity are implicitly excluded; size-0 items with positive value
    /// are always selected.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidItem`] if any item value is non-finite.
    /// - [`Error::ResourceLimit`] if the DP table would exceed the
    ///   configured cell ceiling.
    #[instrument(skip(self, items), fields(items = items.len(), capacity))]
    pub fn solve(&self, items: &[KnapsackItem], capacity: u64) -> Result<KnapsackSolution> {
        for (i, item) in items.iter().enumerate() {
            if !item.value.is_finite() {
                return Err(Error::InvalidItem(format!(
                    "item {} has a non-finite value ({})",
                    i, item.value
                )));
            }
        }

        let n = items.len();
        if !self.config.is_within_limit(n, capacity) {
            return Err(Error::ResourceLimit(format!(
                "knapsack table of {} x {} cells exceeds the ceiling of {}",
                n + 1,
                capacity as u128 + 1,
                self.config.max_table_cells
            )));
        }

        let cap = capacity as usize;
        let width = cap + 1;

        // table[i * width + w] = best value using the first i items at capacity w.
        let mut table = vec![0.0_f64; (n + 1) * width];

        for i in 1..=n {
            let size = items[i - 1].size;
            let value = items[i - 1].value;
            let prev = (i - 1) * width;
            let row = i * width;

            for w in 0..=cap {
                let skip = table[prev + w];
                table[row + w] = if size > w as u64 {
                    skip
                } else {
                    let take = value + table[prev + w - size as usize];
                    if take > skip {
                        take
                    } else {
                        skip
                    }
                };
            }
        }

        // Walk the table backward; include item i only when its row strictly
        // differs, so ties always favor exclusion.
        let mut selected = Vec::new();
        let mut w = cap;
        for i in (1..=n).rev() {
            if table[i * width + w] != table[(i - 1) * width + w] {
                selected.push(i - 1);
                w -= items[i - 1].size as usize;
            }
        }
        selected.reverse();

        let solution = KnapsackSolution {
            total_value: table[n * width + cap],
            remaining_capacity: w as u64,
            selected,
        };

        debug!(
            selected = solution.selected_count(),
            total_value = solution.total_value,
            remaining_capacity = solution.remaining_capacity,
            "knapsack solved"
        );

        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(items: &[KnapsackItem], capacity: u64) -> KnapsackSolution {
        KnapsackSolver::default_config().solve(items, capacity).unwrap()
    }

    /// Exhaustive reference for small instances.
    fn brute_force(items: &[KnapsackItem], capacity: u64) -> f64 {
        let n = items.len();
        assert!(n <= 20);
        let mut best = 0.0_f64;
        for mask in 0_u32..(1 << n) {
            let mut size = 0_u64;
            let mut value = 0.0_f64;
            for (i, item) in items.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    size += item.size;
                    value += item.value;
                }
            }
            if size <= capacity && value > best {
                best = value;
            }
        }
        best
    }

    #[test]
    fn test_basic_selection() {
        let items = vec![
            KnapsackItem::new(3, 5.0),
            KnapsackItem::new(4, 6.0),
            KnapsackItem::new(5, 10.0),
        ];
        let solution = solve(&items, 8);
        assert_eq!(solution.selected, vec![0, 2]);
        assert_eq!(solution.total_value, 15.0);
        assert_eq!(solution.remaining_capacity, 0);
    }

    #[test]
    fn test_zero_capacity() {
        let items = vec![KnapsackItem::new(1, 10.0), KnapsackItem::new(2, 20.0)];
        let solution = solve(&items, 0);
        assert!(solution.is_empty());
        assert_eq!(solution.total_value, 0.0);
        assert_eq!(solution.remaining_capacity, 0);
    }

    #[test]
    fn test_no_items() {
        let solution = solve(&[], 100);
        assert!(solution.is_empty());
        assert_eq!(solution.total_value, 0.0);
        assert_eq!(solution.remaining_capacity, 100);
    }

    #[test]
    fn test_oversize_items_excluded() {
        let items = vec![KnapsackItem::new(50, 100.0), KnapsackItem::new(3, 1.0)];
        let solution = solve(&items, 10);
        assert_eq!(solution.selected, vec![1]);
        assert_eq!(solution.total_value, 1.0);
    }

    #[test]
    fn test_zero_size_positive_value_always_selected() {
        let items = vec![
            KnapsackItem::new(0, 1.0),
            KnapsackItem::new(5, 3.0),
            KnapsackItem::new(0, 2.0),
        ];
        let solution = solve(&items, 0);
        assert_eq!(solution.selected, vec![0, 2]);
        assert_eq!(solution.total_value, 3.0);
    }

    #[test]
    fn test_zero_size_zero_value_excluded() {
        // Tie between including and excluding a worthless item: exclusion wins.
        let items = vec![KnapsackItem::new(0, 0.0)];
        let solution = solve(&items, 10);
        assert!(solution.is_empty());
    }

    #[test]
    fn test_matches_brute_force() {
        // Deterministic pseudo-random instances, n <= 12.
        let mut seed = 0x2545F491_u64;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed
        };

        for _ in 0..50 {
            let n = (next() % 12 + 1) as usize;
            let capacity = next() % 40;
            let items: Vec<KnapsackItem> = (0..n)
                .map(|_| KnapsackItem::new(next() % 15, (next() % 100) as f64))
                .collect();

            let solution = solve(&items, capacity);
            let expected = brute_force(&items, capacity);
            assert_eq!(
                solution.total_value, expected,
                "items = {:?}, capacity = {}",
                items, capacity
            );

            let total_size: u64 = solution.selected.iter().map(|&i| items[i].size).sum();
            assert!(total_size <= capacity);
            assert_eq!(solution.remaining_capacity, capacity - total_size);
        }
    }

    #[test]
    fn test_deterministic() {
        let items = vec![
            KnapsackItem::new(2, 3.0),
            KnapsackItem::new(2, 3.0),
            KnapsackItem::new(2, 3.0),
        ];
        let first = solve(&items, 4);
        for _ in 0..5 {
            assert_eq!(solve(&items, 4), first);
        }
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let items = vec![KnapsackItem::new(1, f64::NAN)];
        let err = KnapsackSolver::default_config()
            .solve(&items, 10)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidItem(_)));

        let items = vec![KnapsackItem::new(1, f64::INFINITY)];
        let err = KnapsackSolver::default_config()
            .solve(&items, 10)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidItem(_)));
    }

    #[test]
    fn test_resource_limit_rejected() {
        let solver = KnapsackSolver::new(KnapsackConfig::new().with_max_table_cells(1000));
        let items = vec![KnapsackItem::new(1, 1.0)];
        let err = solver.solve(&items, 10_000).unwrap_err();
        assert!(matches!(err, Error::ResourceLimit(_)));

        // Pathological capacity must not overflow the limit check itself.
        let err = solver.solve(&items, u64::MAX).unwrap_err();
        assert!(matches!(err, Error::ResourceLimit(_)));
    }

    #[test]
    fn test_config_builder() {
        let config = KnapsackConfig::new().with_max_table_cells(500);
        assert_eq!(config.max_table_cells, 500);
        assert!(config.is_within_limit(4, 99));
        assert!(!config.is_within_limit(4, 100));
    }
}
