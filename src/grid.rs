use crate::config::TerrainMode;
use crate::error::Error;
use grid_2d::{Coord, Grid, Size};
use std::str::FromStr;

pub trait CostGrid {
    fn size(&self) -> Size;

    /// Terrain cost of the cell at `coord`, or `None` if it lies outside.
    fn cost(&self, coord: Coord) -> Option<u32>;

    fn is_walkable(&self, coord: Coord, mode: TerrainMode) -> bool {
        match (self.cost(coord), mode) {
            (None, _) => false,
            (Some(cost), TerrainMode::Obstacles) => cost == 0,
            (Some(_), TerrainMode::Weighted) => true,
        }
    }
}

impl CostGrid for Grid<u32> {
    fn size(&self) -> Size {
        Grid::size(self)
    }
    fn cost(&self, coord: Coord) -> Option<u32> {
        self.get(coord).cloned()
    }
}

/// Amount by which a unit's base speed is divided while it heads into `coord`.
///
/// Costs 0 and 1 both mean full speed. Cells outside the grid also give
/// full speed.
pub fn speed_divisor<G: CostGrid>(grid: &G, coord: Coord) -> f32 {
    grid.cost(coord).unwrap_or(0).max(1) as f32
}

/// A rectangular map of non-negative terrain costs.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Terrain {
    grid: Grid<u32>,
}

impl Terrain {
    pub fn new(size: Size) -> Self {
        Self {
            grid: Grid::new_clone(size, 0),
        }
    }

    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, Error> {
        let height = rows.len();
        let width = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        let max_cost = i64::from(::std::u32::MAX);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::NonRectangular {
                    row: y,
                    expected: width,
                    actual: row.len(),
                });
            }
            let invalid = row
                .iter()
                .enumerate()
                .find(|&(_, &cost)| cost < 0 || cost > max_cost);
            if let Some((x, &cost)) = invalid {
                let coord = Coord::new(x as i32, y as i32);
                return Err(if cost < 0 {
                    Error::NegativeCost { coord, cost }
                } else {
                    Error::CostTooLarge { coord, cost }
                });
            }
        }
        if width == 0 {
            return Err(Error::EmptyGrid);
        }
        let size = Size::new(width as u32, height as u32);
        let grid = Grid::new_fn(size, |coord| {
            rows[coord.y as usize].as_ref()[coord.x as usize] as u32
        });
        Ok(Self { grid })
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn size(&self) -> Size {
        self.grid.size()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.grid.get(coord).is_some()
    }

    pub fn get(&self, coord: Coord) -> Option<u32> {
        self.grid.get(coord).cloned()
    }

    /// Returns the previous cost, or `None` without writing if `coord` is
    /// outside.
    pub fn set(&mut self, coord: Coord, cost: u32) -> Option<u32> {
        self.grid
            .get_mut(coord)
            .map(|cell| ::std::mem::replace(cell, cost))
    }
}

impl CostGrid for Terrain {
    fn size(&self) -> Size {
        self.grid.size()
    }
    fn cost(&self, coord: Coord) -> Option<u32> {
        self.get(coord)
    }
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<i64>, Error> {
    let invalid = |column| Error::InvalidCell {
        line: line_number,
        column,
    };
    if line.contains(char::is_whitespace) {
        line.split_whitespace()
            .enumerate()
            .map(|(i, token)| token.parse::<i64>().map_err(|_| invalid(i + 1)))
            .collect()
    } else {
        line.chars()
            .enumerate()
            .map(|(i, ch)| {
                ch.to_digit(10)
                    .map(i64::from)
                    .ok_or_else(|| invalid(i + 1))
            })
            .collect()
    }
}

/// One row per non-blank line. Cells are either whitespace-separated
/// integers or, on lines without whitespace, single digits.
impl FromStr for Terrain {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (i, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            rows.push(parse_row(line, i + 1)?);
        }
        Self::from_rows(&rows)
    }
}
