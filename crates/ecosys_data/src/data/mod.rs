//! Plain data types shared by the simulation and its renderers.

pub mod action;
pub mod entity;
