//! Built-in action policies.
//!
//! Learned policies live outside this crate; these exist to drive the world
//! from the CLI and in tests.

use crate::observation::Observation;
use ecosys_data::Action;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Maps an observation to the next action.
pub trait Policy {
    fn act(&mut self, observation: &Observation) -> Action;

    /// Called at the start of every episode.
    fn reset(&mut self) {}

    fn name(&self) -> &'static str;
}

/// Uniformly random actions.
pub struct RandomPolicy {
    rng: ChaCha8Rng,
    avoid_walls: bool,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            rng,
            avoid_walls: false,
        }
    }

    /// Never picks a direction whose wall flag is set.
    #[must_use]
    pub fn avoiding_walls(mut self) -> Self {
        self.avoid_walls = true;
        self
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, observation: &Observation) -> Action {
        let choices: Vec<Action> = Action::ALL
            .into_iter()
            .filter(|&a| !self.avoid_walls || !observation.wall_ahead(a))
            .collect();
        if choices.is_empty() {
            return Action::ALL[self.rng.gen_range(0..Action::COUNT)];
        }
        choices[self.rng.gen_range(0..choices.len())]
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Follows the food signal and steers away from walls.
#[derive(Default)]
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn act(&mut self, observation: &Observation) -> Action {
        if let Some(action) = observation.food_direction() {
            if !observation.wall_ahead(action) {
                return action;
            }
        }
        Action::ALL
            .into_iter()
            .find(|&a| !observation.wall_ahead(a))
            .unwrap_or(Action::Up)
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greedy_follows_food() {
        let obs = Observation {
            food: [0, 0, 1, 0],
            wall: [1, 0, 0, 1],
        };
        assert_eq!(GreedyPolicy.act(&obs), Action::Down);
    }

    #[test]
    fn test_greedy_without_food_avoids_walls() {
        let obs = Observation {
            food: [0; 4],
            wall: [1, 1, 0, 0],
        };
        assert_eq!(GreedyPolicy.act(&obs), Action::Down);
    }

    #[test]
    fn test_random_avoiding_walls() {
        let mut policy = RandomPolicy::new(Some(1)).avoiding_walls();
        let obs = Observation {
            food: [0; 4],
            wall: [1, 1, 1, 0],
        };
        for _ in 0..50 {
            assert_eq!(policy.act(&obs), Action::Left);
        }
    }

    #[test]
    fn test_random_is_seeded() {
        let obs = Observation::default();
        let mut a = RandomPolicy::new(Some(7));
        let mut b = RandomPolicy::new(Some(7));
        let seq_a: Vec<_> = (0..20).map(|_| a.act(&obs)).collect();
        let seq_b: Vec<_> = (0..20).map(|_| b.act(&obs)).collect();
        assert_eq!(seq_a, seq_b);
    }
}
