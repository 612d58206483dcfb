use crate::config::MotionConfig;
use crate::grid::{speed_divisor, CostGrid};
use crate::node::Node;
use glam::Vec2;
use grid_2d::Coord;
use std::collections::VecDeque;
use std::f32::consts::{PI, TAU};

pub fn cell_position(coord: Coord) -> Vec2 {
    Vec2::new(coord.x as f32, coord.y as f32)
}

/// Smallest signed angle taking `from` to `to`, in `[-PI, PI)`.
fn angle_delta(from: f32, to: f32) -> f32 {
    (to - from + PI).rem_euclid(TAU) - PI
}

/// Continuous position of a unit, and the path it is following.
///
/// Positions are in grid units: the centre of cell `(x, y)` is at
/// `Vec2::new(x as f32, y as f32)`.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct UnitMotion {
    position: Vec2,
    heading: f32,
    moving: bool,
    path: VecDeque<Node>,
}

impl UnitMotion {
    pub fn new(cell: Coord) -> Self {
        Self {
            position: cell_position(cell),
            heading: 0.0,
            moving: false,
            path: VecDeque::new(),
        }
    }

    /// Sets the initial heading, in radians.
    pub fn with_heading(self, heading: f32) -> Self {
        Self { heading, ..self }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Facing angle in radians. Only eases towards the direction of travel;
    /// it never affects where the unit goes.
    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn path(&self) -> &VecDeque<Node> {
        &self.path
    }

    pub fn current_target(&self) -> Option<&Node> {
        self.path.front()
    }

    pub fn next_target(&self) -> Option<&Node> {
        self.path.get(1)
    }

    /// The cell nearest to the unit's current position.
    pub fn cell(&self) -> Coord {
        Coord::new(
            self.position.x.round() as i32,
            self.position.y.round() as i32,
        )
    }

    /// Replaces the remaining path. Does not start or stop the unit.
    pub fn set_path<I>(&mut self, path: I)
    where
        I: IntoIterator<Item = Node>,
    {
        self.path = path.into_iter().collect();
    }

    pub fn clear_path(&mut self) {
        self.path.clear();
    }

    pub fn set_moving(&mut self, moving: bool) {
        self.moving = moving;
    }

    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
    }

    fn turn_towards(&mut self, angle: f32, blend: f32) {
        let heading = self.heading + angle_delta(self.heading, angle) * blend;
        self.heading = angle_delta(0.0, heading);
    }

    /// Advances the unit by `dt` seconds along its path.
    ///
    /// Each call either steps towards the first remaining node or, once
    /// within `arrival_epsilon` of it, snaps onto it and drops it from the
    /// path. Speed is divided by the terrain cost of the node being
    /// approached.
    pub fn update<G: CostGrid>(&mut self, dt: f32, grid: &G, config: &MotionConfig) {
        if !self.moving || !dt.is_finite() || dt <= 0.0 {
            return;
        }

        let target = match self.path.front() {
            Some(node) => node.coord,
            None => {
                self.moving = false;
                return;
            }
        };

        let target_position = cell_position(target);
        let offset = target_position - self.position;
        let distance = offset.length();

        if distance > config.arrival_epsilon {
            let direction = offset / distance;
            let speed = config.base_speed / speed_divisor(grid, target);
            // never step past the target
            let step = (speed * dt).min(distance);
            self.position += direction * step;
            self.turn_towards(direction.y.atan2(direction.x), config.turn_blend);
        } else {
            self.path.pop_front();
            self.position = target_position;
            if self.path.is_empty() {
                self.moving = false;
            }
        }
    }
}
