use crate::config::*;
use crate::error::*;
use crate::grid::CostGrid;
use crate::metadata::SearchMetadata;
use crate::motion::{cell_position, UnitMotion};
use crate::node::Node;
use crate::search::SearchContext;
use grid_2d::Coord;
use log::debug;
use std::slice;

/// Identifies a unit within the `Units` that spawned it.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(usize);

impl UnitId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns the motion state of every unit. Ids are indices into the
/// collection, assigned in spawn order.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct Units {
    units: Vec<UnitMotion>,
    #[cfg_attr(feature = "serialize", serde(skip))]
    path_buffer: Vec<Node>,
}

impl Units {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn spawn(&mut self, cell: Coord) -> UnitId {
        self.insert(UnitMotion::new(cell))
    }

    pub fn insert(&mut self, unit: UnitMotion) -> UnitId {
        let id = UnitId(self.units.len());
        self.units.push(unit);
        debug!("spawned unit {} at {:?}", id.0, self.units[id.0].cell());
        id
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn get(&self, id: UnitId) -> Option<&UnitMotion> {
        self.units.get(id.0)
    }

    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut UnitMotion> {
        self.units.get_mut(id.0)
    }

    pub fn iter(&self) -> UnitsIter<'_> {
        UnitsIter {
            iter: self.units.iter().enumerate(),
        }
    }

    /// Searches from the cell nearest the unit to `goal` and gives the unit
    /// the resulting path. A unit standing off that cell's centre gets the
    /// cell itself as its first waypoint. The unit keeps its current
    /// `moving` state; use `commit` to set it off.
    pub fn plan<G: CostGrid>(
        &mut self,
        ctx: &mut SearchContext,
        grid: &G,
        id: UnitId,
        goal: Coord,
        config: SearchConfig,
    ) -> Result<SearchMetadata, Error> {
        let unit = self.units.get_mut(id.0).ok_or(Error::UnknownUnit)?;
        let start = unit.cell();
        let metadata = ctx.astar(grid, start, goal, config, &mut self.path_buffer)?;
        // a unit caught between cells first walks back onto the cell it planned from
        let return_to_start = if unit.position() == cell_position(start) {
            None
        } else {
            Some(Node::new(start))
        };
        unit.set_path(return_to_start.into_iter().chain(self.path_buffer.drain(..)));
        debug!(
            "unit {} planned {} steps from {:?} to {:?}",
            id.0, metadata.length, start, goal
        );
        Ok(metadata)
    }

    /// Starts the unit moving if it has somewhere to go. Returns whether it
    /// is now moving.
    pub fn commit(&mut self, id: UnitId) -> Result<bool, Error> {
        let unit = self.units.get_mut(id.0).ok_or(Error::UnknownUnit)?;
        let moving = !unit.path().is_empty();
        unit.set_moving(moving);
        Ok(moving)
    }

    pub fn update<G: CostGrid>(&mut self, dt: f32, grid: &G, config: &MotionConfig) {
        for (index, unit) in self.units.iter_mut().enumerate() {
            let was_moving = unit.is_moving();
            unit.update(dt, grid, config);
            if was_moving && !unit.is_moving() {
                debug!("unit {} arrived at {:?}", index, unit.cell());
            }
        }
    }
}

pub struct UnitsIter<'a> {
    iter: ::std::iter::Enumerate<slice::Iter<'a, UnitMotion>>,
}

impl<'a> Iterator for UnitsIter<'a> {
    type Item = (UnitId, &'a UnitMotion);
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(index, unit)| (UnitId(index), unit))
    }
}
