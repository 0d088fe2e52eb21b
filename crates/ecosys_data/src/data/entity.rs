use super::action::Action;
use crate::error::EntityError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Grid cell of an entity.
///
/// Components are signed so a candidate cell one step past the grid edge is
/// still representable; entities never clamp themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step away in the direction of `action`.
    #[must_use]
    pub fn offset(self, action: Action) -> Self {
        let (dx, dy) = action.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan distance between two cells.
    #[must_use]
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Whether the cell lies inside a `grid_dim x grid_dim` grid.
    #[must_use]
    pub fn in_grid(self, grid_dim: u32) -> bool {
        let dim = i64::from(grid_dim);
        (0..dim).contains(&i64::from(self.x)) && (0..dim).contains(&i64::from(self.y))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Visual appearance of an entity. Opaque to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub symbol: char,
}

impl Appearance {
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            symbol: '?',
        }
    }
}

/// Closed set of entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Herbivore,
    Resource,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Herbivore, EntityKind::Resource];

    /// Edibility table: the kinds that may consume an entity of this kind.
    #[must_use]
    pub fn eaten_by(self) -> &'static [EntityKind] {
        match self {
            EntityKind::Herbivore => &[],
            EntityKind::Resource => &[EntityKind::Herbivore],
        }
    }

    /// Diet implied by the edibility table.
    #[must_use]
    pub fn default_diet(self) -> Diet {
        Self::ALL
            .into_iter()
            .filter(|prey| prey.eaten_by().contains(&self))
            .collect()
    }

    #[must_use]
    pub fn default_appearance(self) -> Appearance {
        match self {
            EntityKind::Herbivore => Appearance {
                r: 0,
                g: 255,
                b: 0,
                symbol: '●',
            },
            EntityKind::Resource => Appearance {
                r: 255,
                g: 255,
                b: 255,
                symbol: '*',
            },
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Herbivore => "herbivore",
            EntityKind::Resource => "resource",
        }
    }
}

impl FromStr for EntityKind {
    type Err = EntityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "herbivore" => Ok(EntityKind::Herbivore),
            "resource" => Ok(EntityKind::Resource),
            _ => Err(EntityError::type_mismatch(s)),
        }
    }
}

impl TryFrom<u8> for EntityKind {
    type Error = EntityError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(EntityKind::Herbivore),
            1 => Ok(EntityKind::Resource),
            other => Err(EntityError::type_mismatch(other.to_string())),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of entity kinds an actor may consume on contact.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Diet(BTreeSet<EntityKind>);

impl Diet {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a diet from kind names, e.g. from a config file.
    pub fn parse<I, S>(names: I) -> Result<Self, EntityError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| name.as_ref().parse::<EntityKind>())
            .collect()
    }

    #[must_use]
    pub fn contains(&self, kind: EntityKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn insert(&mut self, kind: EntityKind) -> bool {
        self.0.insert(kind)
    }

    pub fn remove(&mut self, kind: EntityKind) -> bool {
        self.0.remove(&kind)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityKind> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<EntityKind> for Diet {
    fn from_iter<T: IntoIterator<Item = EntityKind>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A positioned actor or passive object on the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub position: Position,
    pub diet: Diet,
    pub appearance: Appearance,
}

impl Entity {
    /// Creates an entity with the diet and appearance its kind defaults to.
    #[must_use]
    pub fn new(kind: EntityKind, position: Position) -> Self {
        Self {
            kind,
            position,
            diet: kind.default_diet(),
            appearance: kind.default_appearance(),
        }
    }

    #[must_use]
    pub fn herbivore(position: Position) -> Self {
        Self::new(EntityKind::Herbivore, position)
    }

    #[must_use]
    pub fn resource(position: Position) -> Self {
        Self::new(EntityKind::Resource, position)
    }

    #[must_use]
    pub fn with_diet(mut self, diet: Diet) -> Self {
        self.diet = diet;
        self
    }

    #[must_use]
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.position.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// Manhattan distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Entity) -> u32 {
        self.position.manhattan(other.position)
    }

    /// True when both entities occupy exactly the same cell.
    #[must_use]
    pub fn interact(&self, other: &Entity) -> bool {
        self.position == other.position
    }

    /// True when `predator`'s diet includes this entity's kind.
    #[must_use]
    pub fn is_eaten_by(&self, predator: &Entity) -> bool {
        predator.diet.contains(self.kind)
    }

    /// Moves one cell in the direction of `action`. Bounds are the caller's concern.
    pub fn move_by(&mut self, action: Action) {
        self.position = self.position.offset(action);
    }

    pub fn add_to_diet(&mut self, kind: EntityKind) {
        self.diet.insert(kind);
    }

    pub fn remove_from_diet(&mut self, kind: EntityKind) {
        self.diet.remove(kind);
    }
}
