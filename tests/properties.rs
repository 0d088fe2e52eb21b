mod common;

use std::collections::HashSet;

use common::seeded_config;
use ecosys_lib::model::entity::{Action, Position};
use ecosys_lib::model::world::GridWorld;
use proptest::prelude::*;

fn action_strategy() -> impl Strategy<Value = Action> {
    (0usize..4).prop_map(|i| Action::ALL[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn reset_places_everything_on_distinct_cells(
        grid_dim in 2u32..12,
        fill in 0.0f64..1.0,
        seed in any::<u64>(),
    ) {
        let capacity = (grid_dim * grid_dim) as usize - 1;
        let n_resources = (fill * capacity as f64) as usize;
        let mut world = GridWorld::new(seeded_config(grid_dim, n_resources, seed)).unwrap();
        let (obs, info) = world.reset(None).unwrap();

        let herbivore = world.herbivore_position().unwrap();
        prop_assert!(herbivore.in_grid(grid_dim));
        prop_assert_eq!(info.herbivore_pos, herbivore);
        prop_assert_eq!(info.resources_remaining, n_resources);
        prop_assert_eq!(world.step_counter(), 0);

        let mut cells: HashSet<Position> = HashSet::new();
        cells.insert(herbivore);
        for res in world.resources() {
            prop_assert!(res.position.in_grid(grid_dim));
            prop_assert!(cells.insert(res.position), "duplicate cell {:?}", res.position);
        }

        prop_assert!(obs.food.iter().map(|&v| u32::from(v)).sum::<u32>() <= 1);
        if n_resources > 0 {
            prop_assert_eq!(obs.food.iter().map(|&v| u32::from(v)).sum::<u32>(), 1);
        }
    }

    #[test]
    fn steps_stay_on_grid_and_reward_is_one_of_four(
        grid_dim in 2u32..9,
        n_resources in 1usize..4,
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 1..60),
    ) {
        let mut world = GridWorld::new(seeded_config(grid_dim, n_resources, seed)).unwrap();
        world.reset(None).unwrap();
        let penalty = -1.0 / (2.0 * (f64::from(grid_dim) - 1.0));

        for action in actions {
            let before = world.herbivore_position().unwrap();
            let remaining = world.resources_remaining();
            let t = world.step(action).unwrap();
            let after = world.herbivore_position().unwrap();

            prop_assert!(after.in_grid(grid_dim));
            prop_assert!(world.resources_remaining() <= remaining);
            prop_assert!(
                [100.0, 10.0, -100.0, penalty].contains(&t.reward),
                "unexpected reward {}", t.reward
            );

            if !before.offset(action).in_grid(grid_dim) {
                prop_assert_eq!(after, before);
                prop_assert!(t.terminated);
            } else {
                prop_assert_eq!(after, before.offset(action));
            }
            if t.info.eaten > 0 && world.resources_remaining() > 0 {
                prop_assert_eq!(t.reward, 10.0);
            }
            if t.terminated {
                break;
            }
        }
    }

    #[test]
    fn same_seed_same_layout(grid_dim in 1u32..10, seed in any::<u64>()) {
        let n_resources = ((grid_dim * grid_dim) as usize - 1).min(5);
        let mut a = GridWorld::new(seeded_config(grid_dim, n_resources, seed)).unwrap();
        let mut b = GridWorld::new(seeded_config(grid_dim, n_resources, seed)).unwrap();
        for _ in 0..3 {
            a.reset(None).unwrap();
            b.reset(None).unwrap();
            prop_assert_eq!(a.snapshot(), b.snapshot());
        }
    }
}
