//! Pathfinding and path following for units on a fixed-size weighted grid.
//!
//! `SearchContext::astar` turns a start cell, a goal cell and a terrain map
//! into a list of cells to walk. `UnitMotion` walks such a list smoothly,
//! one `update` per frame, slowing down over costly terrain.

mod config;
mod error;
mod grid;
mod metadata;
mod motion;
mod node;
mod path;
mod search;
mod units;

pub use config::*;
pub use error::*;
pub use grid::*;
pub use metadata::*;
pub use motion::*;
pub use node::*;
pub use path::*;
pub use search::*;
pub use units::*;

pub use direction::CardinalDirection;
pub use glam::Vec2;
pub use grid_2d::{Coord, Size};

#[cfg(test)]
mod tests;
