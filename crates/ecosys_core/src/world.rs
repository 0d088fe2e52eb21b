//! The grid world state machine.
//!
//! ```text
//! Uninitialized --reset--> Ready --step--> Ready
//!                            ^               |
//!                            |             step (won / out of bounds)
//!                            |               v
//!                            +----reset--- Terminated
//! ```

use crate::config::{EcosysConfig, ObservationMode, ResetOptions};
use crate::error::{EnvError, Result};
use crate::observation::{Observation, WindowObservation};
use crate::reward::{compute_reward, RewardSignals};
use crate::snapshot::{EntityView, WorldSnapshot};
use crate::spawn::sample_cells;
use ecosys_data::{Action, Diet, Entity, Position};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Uninitialized,
    Ready,
    Terminated,
}

/// Why an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Every resource was eaten.
    Cleared,
    /// The herbivore tried to step off the grid.
    OutOfBounds,
}

/// Auxiliary data returned with every observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    pub herbivore_pos: Position,
    pub resources_remaining: usize,
    pub step: u64,
    /// Resources consumed by the step that produced this info.
    pub eaten: usize,
    pub termination: Option<Termination>,
}

/// Result of one `step`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub observation: Observation,
    pub reward: f64,
    pub terminated: bool,
    pub info: StepInfo,
}

#[derive(Debug)]
pub struct GridWorld {
    config: EcosysConfig,
    diet: Diet,
    herbivore: Entity,
    resources: Vec<Entity>,
    step_counter: u64,
    phase: Phase,
    rng: ChaCha8Rng,
}

impl GridWorld {
    /// Creates an uninitialized world. Call [`GridWorld::reset`] before stepping.
    pub fn new(config: EcosysConfig) -> Result<Self> {
        // diet names first, so an unknown kind reports as a type mismatch
        let diet = config.herbivore_diet()?;
        config.validate()?;
        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            herbivore: Entity::herbivore(Position::default()).with_diet(diet.clone()),
            diet,
            resources: Vec::new(),
            step_counter: 0,
            phase: Phase::Uninitialized,
            config,
            rng,
        })
    }

    /// Creates a ready world with a fixed layout instead of a random one.
    ///
    /// Every position must lie on the grid. Resources may share a cell with each
    /// other; one sharing the herbivore's cell is only eaten by the next step.
    pub fn from_layout(
        config: EcosysConfig,
        herbivore: Position,
        resources: &[Position],
    ) -> Result<Self> {
        let mut world = Self::new(config)?;
        let grid_dim = world.grid_dim();
        if let Some(bad) = std::iter::once(&herbivore)
            .chain(resources)
            .find(|p| !p.in_grid(grid_dim))
        {
            return Err(EnvError::config(format!(
                "position ({}, {}) lies outside the {grid_dim}x{grid_dim} grid",
                bad.x, bad.y
            )));
        }
        world.place(herbivore, resources.iter().copied());
        Ok(world)
    }

    /// Starts a new episode with a freshly sampled layout.
    ///
    /// Overrides in `options` are validated before anything changes and then
    /// persist into later resets. A `seed` reseeds the placement RNG.
    pub fn reset(&mut self, options: Option<ResetOptions>) -> Result<(Observation, StepInfo)> {
        if let Some(options) = options {
            let config = self.config.with_options(&options);
            config.validate()?;
            self.config = config;
            if let Some(seed) = options.seed {
                self.rng = ChaCha8Rng::seed_from_u64(seed);
            }
        }

        let cells = sample_cells(
            self.config.world.grid_dim,
            self.config.world.n_resources + 1,
            &mut self.rng,
        )?;
        let mut cells = cells.into_iter();
        let herbivore = cells.next().ok_or_else(|| EnvError::config("empty sample"))?;
        self.place(herbivore, cells);

        tracing::debug!(
            grid_dim = self.config.world.grid_dim,
            n_resources = self.resources.len(),
            herbivore_x = herbivore.x,
            herbivore_y = herbivore.y,
            "Episode reset"
        );

        Ok((self.observation(), self.info(0, None)))
    }

    fn place(&mut self, herbivore: Position, resources: impl Iterator<Item = Position>) {
        self.herbivore = Entity::herbivore(herbivore).with_diet(self.diet.clone());
        self.resources = resources.map(Entity::resource).collect();
        self.step_counter = 0;
        self.phase = Phase::Ready;
    }

    /// Advances one turn.
    pub fn step(&mut self, action: Action) -> Result<Transition> {
        match self.phase {
            Phase::Ready => {}
            Phase::Uninitialized => {
                tracing::warn!("step called before reset");
                return Err(EnvError::invalid_sequence("call reset before using step"));
            }
            Phase::Terminated => {
                tracing::warn!(step = self.step_counter, "step called after termination");
                return Err(EnvError::invalid_sequence(
                    "episode has terminated, call reset before stepping again",
                ));
            }
        }

        let grid_dim = self.grid_dim();
        let out_of_bounds = !self.herbivore.position.offset(action).in_grid(grid_dim);
        if !out_of_bounds {
            self.herbivore.move_by(action);
        }

        let before = self.resources.len();
        let herbivore = &self.herbivore;
        self.resources
            .retain(|r| !(herbivore.interact(r) && r.is_eaten_by(herbivore)));
        let eaten = before - self.resources.len();

        let observation = self.observation();
        let signals = RewardSignals {
            resources_remaining: self.resources.len(),
            eaten,
            out_of_bounds,
        };
        let reward = compute_reward(&self.config.reward, grid_dim, &signals);
        self.step_counter += 1;

        let termination = if self.resources.is_empty() {
            Some(Termination::Cleared)
        } else if out_of_bounds {
            Some(Termination::OutOfBounds)
        } else {
            None
        };
        if termination.is_some() {
            self.phase = Phase::Terminated;
        }

        tracing::debug!(
            step = self.step_counter,
            action = %action,
            x = self.herbivore.x(),
            y = self.herbivore.y(),
            eaten,
            reward,
            "World step"
        );
        if let Some(reason) = termination {
            tracing::info!(
                steps = self.step_counter,
                remaining = self.resources.len(),
                reason = ?reason,
                "Episode terminated"
            );
        }

        Ok(Transition {
            observation,
            reward,
            terminated: termination.is_some(),
            info: self.info(eaten, termination),
        })
    }

    /// [`GridWorld::step`] for a raw action index from a policy.
    pub fn step_index(&mut self, action: i64) -> Result<Transition> {
        let action = Action::try_from(action)?;
        self.step(action)
    }

    fn info(&self, eaten: usize, termination: Option<Termination>) -> StepInfo {
        StepInfo {
            herbivore_pos: self.herbivore.position,
            resources_remaining: self.resources.len(),
            step: self.step_counter,
            eaten,
            termination,
        }
    }

    /// Directional observation of the current state.
    #[must_use]
    pub fn observation(&self) -> Observation {
        Observation::encode(self.herbivore.position, &self.resources, self.grid_dim())
    }

    /// Window board, when the world is configured for window observations and
    /// an episode has started.
    #[must_use]
    pub fn window_observation(&self) -> Option<WindowObservation> {
        if self.config.observation.mode != ObservationMode::Window
            || self.phase == Phase::Uninitialized
        {
            return None;
        }
        Some(WindowObservation::encode(
            self.herbivore.position,
            &self.resources,
            self.grid_dim(),
            self.config.observation.field_of_view,
        ))
    }

    /// Render surface. `None` before the first reset.
    #[must_use]
    pub fn snapshot(&self) -> Option<WorldSnapshot> {
        if self.phase == Phase::Uninitialized {
            return None;
        }
        Some(WorldSnapshot {
            grid_dim: self.grid_dim(),
            step: self.step_counter,
            phase: self.phase,
            herbivore: EntityView::from(&self.herbivore),
            resources: self.resources.iter().map(EntityView::from).collect(),
        })
    }

    #[must_use]
    pub fn grid_dim(&self) -> u32 {
        self.config.world.grid_dim
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    #[must_use]
    pub fn herbivore(&self) -> Option<&Entity> {
        (self.phase != Phase::Uninitialized).then_some(&self.herbivore)
    }

    #[must_use]
    pub fn herbivore_position(&self) -> Option<Position> {
        self.herbivore().map(|h| h.position)
    }

    #[must_use]
    pub fn resources(&self) -> &[Entity] {
        &self.resources
    }

    #[must_use]
    pub fn resources_remaining(&self) -> usize {
        self.resources.len()
    }

    #[must_use]
    pub fn step_counter(&self) -> u64 {
        self.step_counter
    }

    #[must_use]
    pub fn config(&self) -> &EcosysConfig {
        &self.config
    }
}
