use anyhow::Result;
use std::time::Duration;
use uuid::Uuid;

use crate::model::config::EcosysConfig;
use crate::model::metrics::EpisodeMetrics;
use crate::model::observation::Observation;
use crate::model::policy::{GreedyPolicy, Policy, RandomPolicy};
use crate::model::runner::{EpisodeOutcome, EpisodeRunner, EpisodeSummary, RunReport};
use crate::model::snapshot::WorldSnapshot;
use crate::model::world::GridWorld;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyKind {
    Random,
    Greedy,
}

impl PolicyKind {
    pub fn build(self, seed: Option<u64>) -> Box<dyn Policy> {
        match self {
            PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
            PolicyKind::Greedy => Box::new(GreedyPolicy),
        }
    }
}

pub struct App {
    pub running: bool,
    pub paused: bool,
    pub config: EcosysConfig,
    pub world: GridWorld,
    pub policy: Box<dyn Policy>,
    pub metrics: EpisodeMetrics,
    pub summaries: Vec<EpisodeSummary>,
    // Live episode
    pub episode: u64,
    pub observation: Observation,
    pub last_reward: f64,
    pub episode_reward: f64,
    pub episode_eaten: usize,
    pub latest_snapshot: Option<WorldSnapshot>,
    // Playback speed multiplier on render_fps
    pub time_scale: f64,
}

impl App {
    pub fn new(config: EcosysConfig, policy: Box<dyn Policy>) -> Result<Self> {
        let mut world = GridWorld::new(config.clone())?;
        let (observation, _) = world.reset(None)?;
        let latest_snapshot = world.snapshot();
        Ok(Self {
            running: true,
            paused: false,
            metrics: EpisodeMetrics::new(config.runner.window),
            summaries: Vec::new(),
            episode: 0,
            observation,
            last_reward: 0.0,
            episode_reward: 0.0,
            episode_eaten: 0,
            latest_snapshot,
            time_scale: 1.0,
            world,
            policy,
            config,
        })
    }

    /// Interval between simulation steps in interactive mode.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_secs_f64(1.0 / (self.config.render.render_fps as f64 * self.time_scale))
    }

    /// Plays one step; finishes the episode when the world terminates or the
    /// step budget runs out, then starts the next one or stops the app.
    pub fn tick(&mut self) -> Result<()> {
        if self.is_finished() {
            return Ok(());
        }
        let action = self.policy.act(&self.observation);
        let transition = self.world.step(action)?;
        self.observation = transition.observation;
        self.last_reward = transition.reward;
        self.episode_reward += transition.reward;
        self.episode_eaten += transition.info.eaten;
        self.latest_snapshot = self.world.snapshot();

        let outcome = match transition.info.termination {
            Some(t) => Some(EpisodeOutcome::from(t)),
            None if self.world.step_counter() >= self.config.runner.max_steps => {
                Some(EpisodeOutcome::Truncated)
            }
            None => None,
        };
        if let Some(outcome) = outcome {
            self.finish_episode(outcome)?;
        }
        Ok(())
    }

    fn finish_episode(&mut self, outcome: EpisodeOutcome) -> Result<()> {
        let summary = EpisodeSummary {
            id: Uuid::new_v4(),
            total_reward: self.episode_reward,
            steps: self.world.step_counter(),
            resources_eaten: self.episode_eaten,
            outcome,
        };
        self.metrics.record_episode(&summary);
        self.summaries.push(summary);
        self.episode += 1;

        if self.episode as usize >= self.config.runner.episodes {
            self.paused = true;
            return Ok(());
        }
        self.restart_episode()
    }

    /// Abandons the current episode and starts a fresh one.
    pub fn restart_episode(&mut self) -> Result<()> {
        let (observation, _) = self.world.reset(None)?;
        self.policy.reset();
        self.observation = observation;
        self.last_reward = 0.0;
        self.episode_reward = 0.0;
        self.episode_eaten = 0;
        self.latest_snapshot = self.world.snapshot();
        Ok(())
    }

    /// Whether every configured episode has been played.
    pub fn is_finished(&self) -> bool {
        self.episode as usize >= self.config.runner.episodes
    }

    /// Runs all configured episodes without a terminal.
    pub fn run_headless(&mut self) -> Result<RunReport> {
        tracing::info!(
            policy = self.policy.name(),
            episodes = self.config.runner.episodes,
            fingerprint = %self.config.fingerprint(),
            "Running in headless mode"
        );
        let runner = EpisodeRunner::new(self.config.runner.clone());
        let report = runner.run(&mut self.world, self.policy.as_mut())?;
        for summary in &report.episodes {
            self.metrics.record_episode(summary);
        }
        self.episode = report.episodes.len() as u64;
        self.summaries.extend(report.episodes.iter().cloned());
        self.latest_snapshot = self.world.snapshot();
        self.running = false;
        Ok(report)
    }
}
