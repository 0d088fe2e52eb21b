//! Read-only view of the world for renderers.

use crate::world::Phase;
use ecosys_data::{Appearance, Entity, EntityKind, Position};
use serde::{Deserialize, Serialize};

/// Position and colour of one entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub kind: EntityKind,
    pub position: Position,
    pub appearance: Appearance,
}

impl From<&Entity> for EntityView {
    fn from(e: &Entity) -> Self {
        Self {
            kind: e.kind,
            position: e.position,
            appearance: e.appearance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub grid_dim: u32,
    pub step: u64,
    pub phase: Phase,
    pub herbivore: EntityView,
    pub resources: Vec<EntityView>,
}

/// Drawable target. Coordinates are in target units (pixels, terminal cells).
pub trait Canvas {
    fn clear(&mut self, color: (u8, u8, u8));
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, appearance: &Appearance);
}

impl WorldSnapshot {
    /// Side of one grid cell on a target `screen_width` units wide.
    #[must_use]
    pub fn cell_size(&self, screen_width: f64) -> f64 {
        screen_width / f64::from(self.grid_dim)
    }

    /// Entity drawn at `pos`; the herbivore is painted over resources.
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<&EntityView> {
        if self.herbivore.position == pos {
            return Some(&self.herbivore);
        }
        self.resources.iter().find(|r| r.position == pos)
    }

    /// Paints the background, then resources, then the herbivore.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, screen_width: f64) {
        let width = self.cell_size(screen_width);
        canvas.clear((0, 0, 0));
        for view in self.resources.iter().chain(std::iter::once(&self.herbivore)) {
            canvas.fill_rect(
                f64::from(view.position.x) * width,
                f64::from(view.position.y) * width,
                width,
                width,
                &view.appearance,
            );
        }
    }
}
