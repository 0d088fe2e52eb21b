mod common;

use common::WorldBuilder;
use ecosys_lib::model::entity::Action;
use ecosys_lib::model::world::Termination;

#[test]
fn test_eating_last_resource_wins() {
    let mut world = WorldBuilder::new(4)
        .with_herbivore(1, 1)
        .with_resource(1, 0)
        .build();

    let t = world.step(Action::Up).unwrap();

    assert_herbivore_at!(world, 1, 0);
    assert_transition!(t, 100.0, true);
    assert_eq!(world.resources_remaining(), 0);
    assert_eq!(t.info.termination, Some(Termination::Cleared));
}

#[test]
fn test_walking_off_the_left_edge_loses() {
    let mut world = WorldBuilder::new(4)
        .with_herbivore(0, 0)
        .with_resource(3, 3)
        .build();

    let t = world.step_index(3).unwrap();

    assert_herbivore_at!(world, 0, 0);
    assert_transition!(t, -100.0, true);
    assert_eq!(t.info.termination, Some(Termination::OutOfBounds));
    assert_eq!(world.resources_remaining(), 1);
}

#[test]
fn test_every_edge_is_a_hard_wall() {
    let cases = [
        ((2, 0), Action::Up),
        ((3, 2), Action::Right),
        ((1, 3), Action::Down),
        ((0, 1), Action::Left),
    ];
    for ((x, y), action) in cases {
        let mut world = WorldBuilder::new(4)
            .with_herbivore(x, y)
            .with_resource(if x == 1 { 2 } else { 1 }, 1)
            .build();
        let t = world.step(action).unwrap();
        assert_herbivore_at!(world, x, y);
        assert_transition!(t, -100.0, true);
    }
}

#[test]
fn test_eating_one_of_several() {
    let mut world = WorldBuilder::new(5)
        .with_herbivore(2, 2)
        .with_resource(3, 2)
        .with_resource(0, 0)
        .with_resource(4, 4)
        .build();

    let t = world.step(Action::Right).unwrap();

    assert_transition!(t, 10.0, false);
    assert_eq!(t.info.eaten, 1);
    assert_eq!(world.resources_remaining(), 2);
}

#[test]
fn test_plain_step_penalty() {
    let mut world = WorldBuilder::new(5)
        .with_herbivore(2, 2)
        .with_resource(0, 0)
        .build();

    let t = world.step(Action::Down).unwrap();

    assert_transition!(t, -1.0 / 8.0, false);
    assert_herbivore_at!(world, 2, 3);
}

#[test]
fn test_clearing_beats_out_of_bounds_on_same_step() {
    // A resource placed on the herbivore's own cell is consumed by the next
    // step even when that step's move is suppressed at the wall.
    let mut world = WorldBuilder::new(4)
        .with_herbivore(0, 0)
        .with_resource(0, 0)
        .build();

    let t = world.step(Action::Left).unwrap();

    assert_herbivore_at!(world, 0, 0);
    assert_transition!(t, 100.0, true);
    assert_eq!(t.info.termination, Some(Termination::Cleared));
}

#[test]
fn test_eating_beats_out_of_bounds_when_food_remains() {
    let mut world = WorldBuilder::new(4)
        .with_herbivore(0, 0)
        .with_resource(0, 0)
        .with_resource(3, 3)
        .build();

    let t = world.step(Action::Up).unwrap();

    // reward reports the meal, termination still reports the wall
    assert_transition!(t, 10.0, true);
    assert_eq!(t.info.termination, Some(Termination::OutOfBounds));
}

#[test]
fn test_observation_tracks_food_and_walls() {
    let mut world = WorldBuilder::new(4)
        .with_herbivore(1, 0)
        .with_resource(3, 0)
        .with_resource(1, 3)
        .build();

    let obs = world.observation();
    // right: 1/4, down: 1/9
    assert_eq!(obs.food, [0, 1, 0, 0]);
    assert_eq!(obs.wall, [1, 0, 0, 0]);

    let t = world.step(Action::Right).unwrap();
    assert_eq!(t.observation.food, [0, 1, 0, 0]);
    let t = world.step(Action::Right).unwrap();
    assert_transition!(t, 10.0, false);
    // only (1, 3) is left: down-left of (3, 0)
    assert_eq!(t.observation.food, [0, 0, 1, 0]);
    assert_eq!(t.observation.wall, [1, 1, 0, 0]);
}

#[test]
fn test_greedy_walk_clears_a_row() {
    use ecosys_lib::model::policy::{GreedyPolicy, Policy};

    let mut world = WorldBuilder::new(6)
        .with_herbivore(0, 2)
        .with_resource(2, 2)
        .with_resource(4, 2)
        .with_resource(5, 2)
        .build();
    let mut policy = GreedyPolicy;
    let mut obs = world.observation();
    let mut rewards = Vec::new();
    while !world.is_terminated() {
        let t = world.step(policy.act(&obs)).unwrap();
        obs = t.observation;
        rewards.push(t.reward);
    }
    assert_eq!(world.step_counter(), 5);
    assert_eq!(rewards.iter().filter(|&&r| r == 10.0).count(), 2);
    assert_eq!(rewards.last(), Some(&100.0));
}
