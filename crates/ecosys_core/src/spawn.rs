//! Random placement of entities at reset.

use crate::error::{EnvError, Result};
use ecosys_data::Position;
use rand::Rng;

/// Samples `count` distinct cells of a `grid_dim x grid_dim` grid uniformly,
/// without replacement.
///
/// Cells are enumerated x-major (`(0,0), (0,1), ..`) before sampling, so a
/// fixed RNG state always yields the same layout.
pub fn sample_cells<R: Rng + ?Sized>(
    grid_dim: u32,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Position>> {
    let dim = grid_dim as usize;
    let total = dim * dim;
    if count > total {
        return Err(EnvError::config(format!(
            "cannot sample {count} distinct cells from a {grid_dim}x{grid_dim} grid"
        )));
    }
    Ok(rand::seq::index::sample(rng, total, count)
        .into_iter()
        .map(|idx| Position::new((idx / dim) as i32, (idx % dim) as i32))
        .collect())
}
