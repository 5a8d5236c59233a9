//! Core Monte Carlo search: selection, simulation, backpropagation.

use std::time::Instant;

use smallvec::SmallVec;

use crate::core::{GameEngine, GameRng, Player};

use super::config::SearchConfig;
use super::node::ColumnNode;
use super::stats::SearchStats;

/// Monte Carlo opponent.
///
/// Owns the per-search node table, the rollout RNG, and statistics from
/// the most recent search. One instance is reused across moves; the node
/// table is rebuilt on every call.
pub struct MonteCarloAi {
    /// Search configuration.
    config: SearchConfig,

    /// RNG forked once per rollout.
    rng: GameRng,

    /// One node per candidate column of the last search.
    nodes: SmallVec<[ColumnNode; 8]>,

    /// Virtual root: aggregate visit count only, no utility.
    root_visits: u32,

    /// Statistics from the last search.
    stats: SearchStats,
}

impl MonteCarloAi {
    /// Create a new search context.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            nodes: SmallVec::new(),
            root_visits: 0,
            stats: SearchStats::default(),
        }
    }

    /// Pick the best column for `player` from the engine's position.
    ///
    /// Runs `iterations` select/simulate/backpropagate rounds and returns
    /// the most-visited column (robust child). Returns `None` when no
    /// column is legal; callers must not invoke the search on a terminal
    /// engine expecting a move.
    pub fn select_move(
        &mut self,
        engine: &GameEngine,
        player: Player,
        iterations: u32,
    ) -> Option<usize> {
        let start = Instant::now();
        self.stats.reset();
        self.root_visits = 0;
        self.nodes = engine
            .legal_columns()
            .into_iter()
            .map(ColumnNode::new)
            .collect();

        if self.nodes.is_empty() {
            return None;
        }

        for _ in 0..iterations {
            let selected = self.select_node();
            let utility = self.rollout(engine, player, self.nodes[selected].column);

            let node = &mut self.nodes[selected];
            node.total_utility += utility;
            node.visits += 1;
            self.root_visits += 1;
            self.stats.iterations += 1;
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        self.best_column()
    }

    /// UCB1 selection over the node table.
    ///
    /// Ties break toward the lower index (strictly-greater comparison),
    /// so unvisited columns are taken in iteration order.
    fn select_node(&self) -> usize {
        let exploration = self.config.exploration_constant;

        let mut best = 0;
        let mut best_score = self.nodes[0].ucb1(self.root_visits, exploration);
        for (idx, node) in self.nodes.iter().enumerate().skip(1) {
            let score = node.ucb1(self.root_visits, exploration);
            if score > best_score {
                best = idx;
                best_score = score;
            }
        }
        best
    }

    /// Play one rollout: the candidate move, then alternating uniform
    /// random legal moves (opponent first) until the game ends.
    ///
    /// The clone is exclusively owned by this rollout, so the original
    /// engine is never touched.
    fn rollout(&mut self, engine: &GameEngine, player: Player, column: usize) -> f64 {
        let mut sim = engine.clone();
        let mut rng = self.rng.fork();

        sim.apply_move(player, column)
            .expect("candidate column came from legal_columns()");

        let mut to_move = player.other();
        while !sim.is_over() {
            let open = sim.legal_columns();
            let pick = open[rng.gen_range_usize(0..open.len())];
            sim.apply_move(to_move, pick)
                .expect("random column came from legal_columns()");
            to_move = to_move.other();
        }

        self.stats.simulations += 1;

        // Draws score as losses
        if sim.winner() == Some(player) {
            1.0
        } else {
            -1.0
        }
    }

    /// Most-visited column; ties go to the first-encountered node.
    fn best_column(&self) -> Option<usize> {
        let mut best: Option<&ColumnNode> = None;
        for node in &self.nodes {
            match best {
                Some(current) if node.visits <= current.visits => {}
                _ => best = Some(node),
            }
        }
        best.map(|node| node.column)
    }

    /// Visit counts per column from the last search.
    #[must_use]
    pub fn column_visits(&self) -> Vec<(usize, u32)> {
        self.nodes
            .iter()
            .map(|node| (node.column, node.visits))
            .collect()
    }

    /// Statistics from the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The search configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_move_returns_legal_column() {
        let engine = GameEngine::new();
        let mut ai = MonteCarloAi::new(SearchConfig::default().with_seed(1));

        let column = ai.select_move(&engine, Player::One, 100).unwrap();
        assert!(engine.legal_columns().contains(&column));
    }

    #[test]
    fn test_no_legal_columns_yields_none() {
        // Fill all 42 cells in a tiling whose longest same-player run in
        // any direction is 2, so the game ends in a draw.
        let mut engine = GameEngine::new();
        for row in (0..crate::core::ROWS).rev() {
            for column in 0..crate::core::COLS {
                let player = if (column + row / 2) % 2 == 0 {
                    Player::One
                } else {
                    Player::Two
                };
                engine.apply_move(player, column).unwrap();
            }
        }
        assert!(engine.legal_columns().is_empty());

        let mut ai = MonteCarloAi::new(SearchConfig::default());
        assert_eq!(ai.select_move(&engine, Player::One, 50), None);
    }

    #[test]
    fn test_cold_start_visits_every_column_once() {
        let engine = GameEngine::new();
        let mut ai = MonteCarloAi::new(SearchConfig::default().with_seed(3));

        // Budget equal to the number of legal columns
        ai.select_move(&engine, Player::One, 7);

        for (_, visits) in ai.column_visits() {
            assert_eq!(visits, 1);
        }
        assert_eq!(ai.stats().iterations, 7);
    }

    #[test]
    fn test_budget_spent_exactly() {
        let engine = GameEngine::new();
        let mut ai = MonteCarloAi::new(SearchConfig::default().with_seed(5));

        ai.select_move(&engine, Player::One, 250);

        assert_eq!(ai.stats().iterations, 250);
        assert_eq!(ai.stats().simulations, 250);
        let total: u32 = ai.column_visits().iter().map(|(_, n)| n).sum();
        assert_eq!(total, 250);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let engine = GameEngine::new();

        let mut ai1 = MonteCarloAi::new(SearchConfig::default().with_seed(12345));
        let mut ai2 = MonteCarloAi::new(SearchConfig::default().with_seed(12345));

        let column1 = ai1.select_move(&engine, Player::One, 300);
        let column2 = ai2.select_move(&engine, Player::One, 300);

        assert_eq!(column1, column2);
        assert_eq!(ai1.column_visits(), ai2.column_visits());
    }
}
