//! Per-step reward.

use crate::config::RewardConfig;

/// What happened during one step, as far as the reward is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RewardSignals {
    pub resources_remaining: usize,
    pub eaten: usize,
    pub out_of_bounds: bool,
}

/// Evaluates the reward with fixed precedence: win, eat, out-of-bounds, time penalty.
///
/// Clearing the board wins even on a step that also tried to leave the grid.
#[must_use]
pub fn compute_reward(config: &RewardConfig, grid_dim: u32, signals: &RewardSignals) -> f64 {
    if signals.resources_remaining == 0 {
        config.win
    } else if signals.eaten > 0 {
        config.eat
    } else if signals.out_of_bounds {
        config.out_of_bounds
    } else {
        config.step_penalty(grid_dim)
    }
}
