//! Observation encoders.
//!
//! [`Observation`] is the 2x4 binary matrix consumed by policies: row 0 is the
//! food direction (one-hot), row 1 the wall flags. Columns follow the action
//! encoding: up, right, down, left.
//!
//! [`WindowObservation`] is the optional square board centred on the
//! herbivore, enabled with `observation.mode = "window"`.

use ecosys_data::{Action, Entity, Position};
use serde::{Deserialize, Serialize};

pub const N_DIRECTIONS: usize = Action::COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Observation {
    pub food: [u8; N_DIRECTIONS],
    pub wall: [u8; N_DIRECTIONS],
}

impl Observation {
    /// Matrix shape `(rows, cols)`.
    pub const SHAPE: (usize, usize) = (2, N_DIRECTIONS);

    /// Encodes the world as seen from `herbivore`.
    #[must_use]
    pub fn encode(herbivore: Position, resources: &[Entity], grid_dim: u32) -> Self {
        Self {
            food: one_hot_first_max(&food_weights(herbivore, resources)),
            wall: wall_flags(herbivore, grid_dim),
        }
    }

    /// Direction of the strongest food signal, if any food remains.
    #[must_use]
    pub fn food_direction(&self) -> Option<Action> {
        self.food
            .iter()
            .position(|&v| v == 1)
            .and_then(|i| Action::try_from(i).ok())
    }

    /// Whether the herbivore sits on the grid edge facing `action`.
    #[must_use]
    pub fn wall_ahead(&self, action: Action) -> bool {
        self.wall[action.index()] == 1
    }

    #[must_use]
    pub fn as_matrix(&self) -> [[u8; N_DIRECTIONS]; 2] {
        [self.food, self.wall]
    }

    /// Row-major flattening, the layout a dense policy input expects.
    #[must_use]
    pub fn flatten(&self) -> [u8; 2 * N_DIRECTIONS] {
        let mut out = [0u8; 2 * N_DIRECTIONS];
        out[..N_DIRECTIONS].copy_from_slice(&self.food);
        out[N_DIRECTIONS..].copy_from_slice(&self.wall);
        out
    }
}

/// Inverse-square food weights per direction bucket.
///
/// A resource contributes to the bucket of each axis on which it is strictly
/// offset, never to an axis it is aligned with. Same-cell resources add nothing.
#[must_use]
pub fn food_weights(herbivore: Position, resources: &[Entity]) -> [f64; N_DIRECTIONS] {
    let mut weights = [0.0; N_DIRECTIONS];
    for res in resources {
        let dist = herbivore.manhattan(res.position);
        if dist == 0 {
            continue;
        }
        let w = 1.0 / f64::from(dist).powi(2);
        if res.y() < herbivore.y {
            weights[Action::Up.index()] += w;
        }
        if res.x() > herbivore.x {
            weights[Action::Right.index()] += w;
        }
        if res.y() > herbivore.y {
            weights[Action::Down.index()] += w;
        }
        if res.x() < herbivore.x {
            weights[Action::Left.index()] += w;
        }
    }
    weights
}

fn one_hot_first_max(weights: &[f64; N_DIRECTIONS]) -> [u8; N_DIRECTIONS] {
    let mut out = [0u8; N_DIRECTIONS];
    let mut best: Option<(usize, f64)> = None;
    for (i, &w) in weights.iter().enumerate() {
        if w > 0.0 && best.map_or(true, |(_, b)| w > b) {
            best = Some((i, w));
        }
    }
    if let Some((i, _)) = best {
        out[i] = 1;
    }
    out
}

/// Edge flags: 1 when the herbivore is on the last row/column facing that way.
#[must_use]
pub fn wall_flags(herbivore: Position, grid_dim: u32) -> [u8; N_DIRECTIONS] {
    let last = grid_dim as i32 - 1;
    [
        u8::from(herbivore.y == 0),
        u8::from(herbivore.x == last),
        u8::from(herbivore.y == last),
        u8::from(herbivore.x == 0),
    ]
}

/// Cell codes of the window board.
pub const CELL_EMPTY: u8 = 0;
pub const CELL_RESOURCE: u8 = 1;
pub const CELL_HERBIVORE: u8 = 2;

/// Square board of side `field_of_view` centred on the herbivore.
///
/// Cells are stored row-major, rows along `y`. Off-grid cells read as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowObservation {
    pub field_of_view: u32,
    pub cells: Vec<u8>,
}

impl WindowObservation {
    #[must_use]
    pub fn encode(
        herbivore: Position,
        resources: &[Entity],
        grid_dim: u32,
        field_of_view: u32,
    ) -> Self {
        let side = field_of_view as usize;
        let half = (field_of_view / 2) as i32;
        let mut cells = vec![CELL_EMPTY; side * side];
        let origin = Position::new(herbivore.x - half, herbivore.y - half);

        for res in resources {
            let col = res.x() - origin.x;
            let row = res.y() - origin.y;
            if res.position.in_grid(grid_dim)
                && (0..field_of_view as i32).contains(&col)
                && (0..field_of_view as i32).contains(&row)
            {
                cells[row as usize * side + col as usize] = CELL_RESOURCE;
            }
        }
        cells[half as usize * side + half as usize] = CELL_HERBIVORE;

        Self {
            field_of_view,
            cells,
        }
    }

    /// Cell at `(row, col)` of the window, `None` outside it.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        let side = self.field_of_view as usize;
        (row < side && col < side).then(|| self.cells[row * side + col])
    }
}
