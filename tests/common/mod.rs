pub mod macros;

use ecosys_lib::model::config::EcosysConfig;
use ecosys_lib::model::entity::Position;
use ecosys_lib::model::world::GridWorld;

/// Builds a world with a hand-placed layout.
#[allow(dead_code)]
pub struct WorldBuilder {
    config: EcosysConfig,
    herbivore: Position,
    resources: Vec<Position>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new(grid_dim: u32) -> Self {
        let mut config = EcosysConfig::default();
        config.world.grid_dim = grid_dim;
        config.world.n_resources = 0;
        config.world.seed = Some(0);
        Self {
            config,
            herbivore: Position::default(),
            resources: Vec::new(),
        }
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut EcosysConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_herbivore(mut self, x: i32, y: i32) -> Self {
        self.herbivore = Position::new(x, y);
        self
    }

    pub fn with_resource(mut self, x: i32, y: i32) -> Self {
        self.resources.push(Position::new(x, y));
        self
    }

    pub fn build(self) -> GridWorld {
        GridWorld::from_layout(self.config, self.herbivore, &self.resources)
            .expect("layout should be valid")
    }
}

/// Config for randomly placed worlds.
#[allow(dead_code)]
pub fn seeded_config(grid_dim: u32, n_resources: usize, seed: u64) -> EcosysConfig {
    let mut config = EcosysConfig::default();
    config.world.grid_dim = grid_dim;
    config.world.n_resources = n_resources;
    config.world.seed = Some(seed);
    config
}
