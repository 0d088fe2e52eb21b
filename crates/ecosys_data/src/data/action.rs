use crate::error::EntityError;
use serde::{Deserialize, Serialize};

/// One of the four axis-aligned moves available to an actor.
///
/// The discriminants are the wire encoding used by policies:
/// `0 = up`, `1 = right`, `2 = down`, `3 = left`. Up decreases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Action {
    /// All actions in encoding order.
    pub const ALL: [Action; 4] = [Action::Up, Action::Right, Action::Down, Action::Left];

    /// Number of discrete actions.
    pub const COUNT: usize = 4;

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Cell offset `(dx, dy)` produced by this action.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Action::Up => (0, -1),
            Action::Right => (1, 0),
            Action::Down => (0, 1),
            Action::Left => (-1, 0),
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Action::Up => Action::Down,
            Action::Right => Action::Left,
            Action::Down => Action::Up,
            Action::Left => Action::Right,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Right => "right",
            Action::Down => "down",
            Action::Left => "left",
        }
    }
}

impl TryFrom<i64> for Action {
    type Error = EntityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::Up),
            1 => Ok(Action::Right),
            2 => Ok(Action::Down),
            3 => Ok(Action::Left),
            other => Err(EntityError::InvalidAction(other)),
        }
    }
}

impl TryFrom<usize> for Action {
    type Error = EntityError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        i64::try_from(value)
            .map_err(|_| EntityError::InvalidAction(i64::MAX))
            .and_then(Action::try_from)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_order() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
            assert_eq!(Action::try_from(i as i64), Ok(*action));
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(Action::try_from(4i64), Err(EntityError::InvalidAction(4)));
        assert_eq!(Action::try_from(-1i64), Err(EntityError::InvalidAction(-1)));
        assert!(Action::try_from(usize::MAX).is_err());
    }

    #[test]
    fn test_opposite_cancels_delta() {
        for action in Action::ALL {
            let (dx, dy) = action.delta();
            let (ox, oy) = action.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }
}
