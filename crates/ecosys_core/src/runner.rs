//! Episode driver: runs policies against a world and summarises the results.

use crate::config::RunnerConfig;
use crate::error::Result;
use crate::metrics::EpisodeMetrics;
use crate::policy::Policy;
use crate::world::{GridWorld, Termination, Transition};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodeOutcome {
    Cleared,
    OutOfBounds,
    /// Step budget ran out before the world terminated.
    Truncated,
}

impl From<Termination> for EpisodeOutcome {
    fn from(t: Termination) -> Self {
        match t {
            Termination::Cleared => EpisodeOutcome::Cleared,
            Termination::OutOfBounds => EpisodeOutcome::OutOfBounds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub id: Uuid,
    pub total_reward: f64,
    pub steps: u64,
    pub resources_eaten: usize,
    pub outcome: EpisodeOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub episodes: Vec<EpisodeSummary>,
    pub running_reward: f64,
    /// Set when the running mean crossed the reward threshold.
    pub solved_at: Option<usize>,
}

pub struct EpisodeRunner {
    config: RunnerConfig,
}

impl EpisodeRunner {
    #[must_use]
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Resets `world` and plays one episode, calling `on_step` after every step.
    pub fn run_episode_with<P, F>(
        &self,
        world: &mut GridWorld,
        policy: &mut P,
        mut on_step: F,
    ) -> Result<EpisodeSummary>
    where
        P: Policy + ?Sized,
        F: FnMut(&GridWorld, &Transition),
    {
        let (mut observation, _) = world.reset(None)?;
        policy.reset();

        let mut total_reward = 0.0;
        let mut eaten = 0;
        let mut outcome = EpisodeOutcome::Truncated;
        while world.step_counter() < self.config.max_steps {
            let action = policy.act(&observation);
            let transition = world.step(action)?;
            total_reward += transition.reward;
            eaten += transition.info.eaten;
            observation = transition.observation;
            on_step(world, &transition);
            if let Some(t) = transition.info.termination {
                outcome = t.into();
                break;
            }
        }

        Ok(EpisodeSummary {
            id: Uuid::new_v4(),
            total_reward,
            steps: world.step_counter(),
            resources_eaten: eaten,
            outcome,
        })
    }

    pub fn run_episode<P: Policy + ?Sized>(
        &self,
        world: &mut GridWorld,
        policy: &mut P,
    ) -> Result<EpisodeSummary> {
        self.run_episode_with(world, policy, |_, _| {})
    }

    /// Plays up to `config.episodes` episodes, stopping early once the running
    /// mean reward exceeds `reward_threshold` after at least `min_episodes`.
    pub fn run<P: Policy + ?Sized>(
        &self,
        world: &mut GridWorld,
        policy: &mut P,
    ) -> Result<RunReport> {
        let mut metrics = EpisodeMetrics::new(self.config.window);
        let mut episodes = Vec::with_capacity(self.config.episodes);
        let mut solved_at = None;

        for i in 0..self.config.episodes {
            let summary = self.run_episode(world, policy)?;
            metrics.record_episode(&summary);
            tracing::info!(
                episode = i,
                id = %summary.id,
                reward = summary.total_reward,
                steps = summary.steps,
                outcome = ?summary.outcome,
                running_reward = metrics.running_mean(),
                "Episode finished"
            );
            episodes.push(summary);

            if metrics.running_mean() > self.config.reward_threshold
                && i + 1 >= self.config.min_episodes
            {
                tracing::info!(
                    episode = i,
                    running_reward = metrics.running_mean(),
                    "Reward threshold reached"
                );
                solved_at = Some(i);
                break;
            }
        }

        Ok(RunReport {
            episodes,
            running_reward: metrics.running_mean(),
            solved_at,
        })
    }
}
