//! Per-column search statistics.
//!
//! The search tree is one level deep: a virtual root that only counts
//! visits, plus one node per candidate column. Nodes are ephemeral and
//! rebuilt on every `select_move` call.

use serde::{Deserialize, Serialize};

/// Statistics for one candidate column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnNode {
    /// The column this node evaluates.
    pub column: usize,

    /// Sum of rollout utilities (+1 win, −1 loss or draw).
    pub total_utility: f64,

    /// Number of rollouts played through this column.
    pub visits: u32,
}

impl ColumnNode {
    /// Create a fresh node for a column.
    #[must_use]
    pub fn new(column: usize) -> Self {
        Self {
            column,
            total_utility: 0.0,
            visits: 0,
        }
    }

    /// Average utility per rollout (0 when unvisited).
    #[must_use]
    pub fn mean_utility(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_utility / f64::from(self.visits)
        }
    }

    /// UCB1 score against the root visit count.
    ///
    /// An unvisited node scores +infinity so that every candidate is
    /// tried once before any is revisited.
    #[must_use]
    pub fn ucb1(&self, root_visits: u32, exploration: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }

        let ln_root = f64::from(root_visits.max(1)).ln();
        self.mean_utility() + exploration * (ln_root / f64::from(self.visits)).sqrt()
    }
}
