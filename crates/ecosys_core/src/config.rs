//! Configuration management for environment parameters.
//!
//! Strongly-typed configuration structures that map to the `config.toml`
//! file. Every section has defaults, so a file only needs the keys it
//! overrides.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. [`ResetOptions`] passed to `reset` (override the world section)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! grid_dim = 10
//! n_resources = 20
//! seed = 42
//!
//! [observation]
//! mode = "window"
//! field_of_view = 5
//!
//! [runner]
//! max_steps = 500
//! ```

use ecosys_data::{Diet, EntityError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// World-level configuration: grid size, population and seeding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub grid_dim: u32,
    pub n_resources: usize,
    pub seed: Option<u64>,
    /// Kind names the herbivore may eat.
    pub herbivore_diet: Vec<String>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            grid_dim: 10,
            n_resources: 20,
            seed: None,
            herbivore_diet: vec!["resource".to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ObservationMode {
    /// 2x4 food-direction and wall-proximity flags only.
    #[default]
    Directional,
    /// Directional flags plus a square board centred on the herbivore.
    Window,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ObservationConfig {
    pub mode: ObservationMode,
    /// Side of the window board. Must be odd.
    pub field_of_view: u32,
}

impl Default for ObservationConfig {
    fn default() -> Self {
        Self {
            mode: ObservationMode::Directional,
            field_of_view: 5,
        }
    }
}

/// Reward magnitudes. The per-step time penalty is derived from `grid_dim`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RewardConfig {
    pub win: f64,
    pub eat: f64,
    pub out_of_bounds: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            win: 100.0,
            eat: 10.0,
            out_of_bounds: -100.0,
        }
    }
}

impl RewardConfig {
    /// Time penalty for a plain move: `-1 / (2 * (grid_dim - 1))`.
    ///
    /// A 1x1 grid has no room to move, so its penalty is zero.
    #[must_use]
    pub fn step_penalty(&self, grid_dim: u32) -> f64 {
        if grid_dim <= 1 {
            return 0.0;
        }
        -1.0 / (2.0 * (f64::from(grid_dim) - 1.0))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub render_fps: u64,
    pub screen_width: u32,
    pub screen_height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            render_fps: 10,
            screen_width: 600,
            screen_height: 600,
        }
    }
}

/// Episode driver settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunnerConfig {
    pub episodes: usize,
    pub max_steps: u64,
    /// Stop early once the running mean reward exceeds this value...
    pub reward_threshold: f64,
    /// ...but never before this many episodes.
    pub min_episodes: usize,
    /// Number of recent episodes in the running mean.
    pub window: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            episodes: 1,
            max_steps: 500,
            reward_threshold: 270.0,
            min_episodes: 1000,
            window: 100,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct EcosysConfig {
    pub world: WorldConfig,
    pub observation: ObservationConfig,
    pub reward: RewardConfig,
    pub render: RenderConfig,
    pub runner: RunnerConfig,
}

/// Per-reset overrides. Applied values persist into later resets.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResetOptions {
    pub grid_dim: Option<u32>,
    pub n_resources: Option<usize>,
    pub field_of_view: Option<u32>,
    pub seed: Option<u64>,
}

impl ResetOptions {
    #[must_use]
    pub fn with_grid_dim(mut self, grid_dim: u32) -> Self {
        self.grid_dim = Some(grid_dim);
        self
    }

    #[must_use]
    pub fn with_n_resources(mut self, n_resources: usize) -> Self {
        self.n_resources = Some(n_resources);
        self
    }

    #[must_use]
    pub fn with_field_of_view(mut self, field_of_view: u32) -> Self {
        self.field_of_view = Some(field_of_view);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl EcosysConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        // World validation
        anyhow::ensure!(self.world.grid_dim > 0, "Grid dimension must be positive");
        anyhow::ensure!(
            self.world.grid_dim <= 1000,
            "Grid dimension too large (max 1000)"
        );
        let cells = u64::from(self.world.grid_dim).pow(2);
        anyhow::ensure!(
            self.world.n_resources as u64 + 1 <= cells,
            "Cannot place {} resources and a herbivore on a {}x{} grid",
            self.world.n_resources,
            self.world.grid_dim,
            self.world.grid_dim
        );
        self.herbivore_diet()?;

        // Observation validation
        anyhow::ensure!(
            self.observation.field_of_view > 0 && self.observation.field_of_view % 2 == 1,
            "Field of view must be a positive odd integer, got {}",
            self.observation.field_of_view
        );
        if self.observation.mode == ObservationMode::Window {
            let max_fov = 2 * self.world.grid_dim + 1;
            anyhow::ensure!(
                self.observation.field_of_view <= max_fov,
                "Field of view {} exceeds {} for a {}x{} grid",
                self.observation.field_of_view,
                max_fov,
                self.world.grid_dim,
                self.world.grid_dim
            );
        }

        // Reward validation
        anyhow::ensure!(
            self.reward.win.is_finite()
                && self.reward.eat.is_finite()
                && self.reward.out_of_bounds.is_finite(),
            "Reward values must be finite"
        );

        // Render validation
        anyhow::ensure!(self.render.render_fps > 0, "Render FPS must be positive");
        anyhow::ensure!(self.render.render_fps <= 240, "Render FPS too high (max 240)");
        anyhow::ensure!(
            self.render.screen_width > 0 && self.render.screen_height > 0,
            "Screen size must be positive"
        );

        // Runner validation
        anyhow::ensure!(self.runner.max_steps > 0, "Max steps must be positive");
        anyhow::ensure!(self.runner.window > 0, "Running-mean window must be positive");

        Ok(())
    }

    /// Parses the configured herbivore diet.
    pub fn herbivore_diet(&self) -> Result<Diet, EntityError> {
        Diet::parse(&self.world.herbivore_diet)
    }

    /// Returns a copy with `options` applied to the world and observation sections.
    #[must_use]
    pub fn with_options(&self, options: &ResetOptions) -> Self {
        let mut config = self.clone();
        if let Some(grid_dim) = options.grid_dim {
            config.world.grid_dim = grid_dim;
        }
        if let Some(n_resources) = options.n_resources {
            config.world.n_resources = n_resources;
        }
        if let Some(field_of_view) = options.field_of_view {
            config.observation.field_of_view = field_of_view;
        }
        if let Some(seed) = options.seed {
            config.world.seed = Some(seed);
        }
        config
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults if the file
    /// does not exist. A file that exists but fails to parse is an error.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| e.context(format!("loading config from {}", path.display())))
    }

    /// Stable hash of the parameters that change episode dynamics.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.observation).as_bytes());
        hasher.update(format!("{:?}", self.reward).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = EcosysConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_grid_dim() {
        let config = EcosysConfig {
            world: WorldConfig {
                grid_dim: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_too_many_resources() {
        let config = EcosysConfig {
            world: WorldConfig {
                grid_dim: 3,
                n_resources: 9,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EcosysConfig {
            world: WorldConfig {
                grid_dim: 3,
                n_resources: 8,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_even_field_of_view() {
        let config = EcosysConfig {
            observation: ObservationConfig {
                field_of_view: 4,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_window_field_of_view_bounded_by_grid() {
        let mut config = EcosysConfig::default();
        config.observation.mode = ObservationMode::Window;
        config.observation.field_of_view = 21;
        assert!(config.validate().is_ok());
        config.observation.field_of_view = 23;
        assert!(config.validate().is_err());

        // directional mode never builds the board
        config.observation.mode = ObservationMode::Directional;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_diet_kind() {
        let config = EcosysConfig {
            world: WorldConfig {
                herbivore_diet: vec!["pebble".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pebble"));
    }

    #[test]
    fn test_invalid_render_fps() {
        let config = EcosysConfig {
            render: RenderConfig {
                render_fps: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_step_penalty_scales_with_grid() {
        let reward = RewardConfig::default();
        assert_eq!(reward.step_penalty(4), -1.0 / 6.0);
        assert_eq!(reward.step_penalty(11), -0.05);
        assert_eq!(reward.step_penalty(1), 0.0);
    }

    #[test]
    fn test_partial_toml() {
        let config = EcosysConfig::from_toml(
            r#"
            [world]
            grid_dim = 6
            seed = 7

            [observation]
            mode = "window"
            "#,
        )
        .unwrap();
        assert_eq!(config.world.grid_dim, 6);
        assert_eq!(config.world.n_resources, 20);
        assert_eq!(config.world.seed, Some(7));
        assert_eq!(config.observation.mode, ObservationMode::Window);
        assert_eq!(config.runner.max_steps, 500);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(EcosysConfig::from_toml("[world]\ngrid_dim = 2\nn_resources = 10\n").is_err());
        assert!(EcosysConfig::from_toml("[world]\ngrid_dim = \"ten\"\n").is_err());
    }

    #[test]
    fn test_with_options_overrides_only_given_fields() {
        let base = EcosysConfig::default();
        let options = ResetOptions::default().with_grid_dim(4).with_seed(3);
        let config = base.with_options(&options);
        assert_eq!(config.world.grid_dim, 4);
        assert_eq!(config.world.seed, Some(3));
        assert_eq!(config.world.n_resources, base.world.n_resources);
        assert_eq!(config.observation, base.observation);
    }

    #[test]
    fn test_fingerprint_consistency() {
        let config1 = EcosysConfig::default();
        let mut config2 = EcosysConfig::default();
        assert_eq!(config1.fingerprint(), config2.fingerprint());
        config2.world.grid_dim = 12;
        assert_ne!(config1.fingerprint(), config2.fingerprint());
    }
}
