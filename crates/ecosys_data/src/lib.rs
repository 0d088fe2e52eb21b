//! Core data structures for the Ecosys grid world.
//!
//! Entities are plain values: a kind tag, an integer cell position, a diet
//! and an appearance. Nothing here knows about grid bounds; the world that
//! owns the entities enforces them.

pub mod data;
pub mod error;

pub use data::action::Action;
pub use data::entity::{Appearance, Diet, Entity, EntityKind, Position};
pub use error::EntityError;
