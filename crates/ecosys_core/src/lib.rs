//! # Ecosys Core
//!
//! A turn-based grid world in which a single herbivore forages for resources.
//!
//! This crate contains the deterministic environment logic:
//! - The `reset` / `step` state machine ([`world::GridWorld`])
//! - The 2x4 food-direction / wall observation encoder
//! - The reward function
//! - Built-in policies and an episode runner for driving the world
//!
//! ## Example
//!
//! ```
//! use ecosys_core::config::{EcosysConfig, ResetOptions};
//! use ecosys_core::world::GridWorld;
//! use ecosys_data::Action;
//!
//! let mut world = GridWorld::new(EcosysConfig::default()).unwrap();
//! let (obs, info) = world
//!     .reset(Some(ResetOptions::default().with_grid_dim(8).with_seed(42)))
//!     .unwrap();
//! assert_eq!(info.step, 0);
//! assert_eq!(obs.food.iter().sum::<u8>(), 1);
//!
//! let transition = world.step(Action::Right).unwrap();
//! assert_eq!(world.step_counter(), 1);
//! # let _ = transition;
//! ```

/// Configuration management for environment parameters
pub mod config;
/// Environment error taxonomy
pub mod error;
/// Episode metrics and logging setup
pub mod metrics;
/// Directional and window observation encoders
pub mod observation;
/// Built-in action policies
pub mod policy;
/// Per-step reward function
pub mod reward;
/// Episode driver
pub mod runner;
/// Read-only render surface
pub mod snapshot;
/// Random entity placement
pub mod spawn;
/// The grid world state machine
pub mod world;

pub use config::{EcosysConfig, ResetOptions};
pub use error::EnvError;
pub use metrics::{init_logging, EpisodeMetrics};
pub use observation::Observation;
pub use policy::{GreedyPolicy, Policy, RandomPolicy};
pub use runner::{EpisodeOutcome, EpisodeRunner, EpisodeSummary};
pub use world::{GridWorld, Phase, StepInfo, Termination, Transition};
