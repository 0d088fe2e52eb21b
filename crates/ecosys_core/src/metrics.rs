//! Episode metrics and structured logging.
//!
//! Provides running statistics over finished episodes and the tracing
//! subscriber setup shared by the binaries.

use crate::runner::{EpisodeOutcome, EpisodeSummary};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Rolling statistics over finished episodes.
pub struct EpisodeMetrics {
    window: usize,
    recent_rewards: VecDeque<f64>,
    episodes: u64,
    total_steps: u64,
    total_eaten: u64,
    wins: u64,
    best_reward: Option<f64>,
    start_time: Instant,
}

impl Default for EpisodeMetrics {
    fn default() -> Self {
        Self::new(100)
    }
}

impl EpisodeMetrics {
    /// Creates a collector whose running mean covers the last `window` episodes.
    #[must_use]
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            recent_rewards: VecDeque::with_capacity(window),
            episodes: 0,
            total_steps: 0,
            total_eaten: 0,
            wins: 0,
            best_reward: None,
            start_time: Instant::now(),
        }
    }

    /// Records a finished episode.
    pub fn record_episode(&mut self, summary: &EpisodeSummary) {
        if self.recent_rewards.len() == self.window {
            self.recent_rewards.pop_front();
        }
        self.recent_rewards.push_back(summary.total_reward);
        self.episodes += 1;
        self.total_steps += summary.steps;
        self.total_eaten += summary.resources_eaten as u64;
        if summary.outcome == EpisodeOutcome::Cleared {
            self.wins += 1;
        }
        self.best_reward = Some(
            self.best_reward
                .map_or(summary.total_reward, |b| b.max(summary.total_reward)),
        );

        // Log at info level every 100 episodes
        if self.episodes.is_multiple_of(100) {
            tracing::info!(
                episodes = self.episodes,
                running_reward = self.running_mean(),
                win_rate = self.win_rate(),
                elapsed_ms = self.elapsed().as_millis() as u64,
                "Episode progress"
            );
        }
    }

    /// Mean reward over the window; zero before any episode.
    #[must_use]
    pub fn running_mean(&self) -> f64 {
        if self.recent_rewards.is_empty() {
            return 0.0;
        }
        self.recent_rewards.iter().sum::<f64>() / self.recent_rewards.len() as f64
    }

    #[must_use]
    pub fn episodes(&self) -> u64 {
        self.episodes
    }

    #[must_use]
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    #[must_use]
    pub fn total_eaten(&self) -> u64 {
        self.total_eaten
    }

    #[must_use]
    pub fn best_reward(&self) -> Option<f64> {
        self.best_reward
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.wins as f64 / self.episodes as f64
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honors `RUST_LOG`; defaults to `info`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
