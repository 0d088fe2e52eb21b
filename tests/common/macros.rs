/// Asserts reward and termination flag of a transition.
#[macro_export]
macro_rules! assert_transition {
    ($t:expr, $reward:expr, $terminated:expr) => {
        let t = &$t;
        assert!(
            (t.reward - $reward).abs() < 1e-12,
            "reward {} != expected {}",
            t.reward,
            $reward
        );
        assert_eq!(
            t.terminated, $terminated,
            "terminated flag mismatch (info: {:?})",
            t.info
        );
    };
}

/// Asserts the herbivore's cell.
#[macro_export]
macro_rules! assert_herbivore_at {
    ($world:expr, $x:expr, $y:expr) => {
        assert_eq!(
            $world.herbivore_position(),
            Some(ecosys_lib::model::entity::Position::new($x, $y)),
            "herbivore position mismatch"
        );
    };
}
