use grid_2d::Coord;
use std::hash::{Hash, Hasher};

/// A grid cell visited by the search, with the scores it was ranked by.
///
/// Nodes compare and hash by coordinate alone.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct Node {
    pub coord: Coord,
    pub g: u32,
    pub h: u32,
    pub f: u32,
    #[cfg_attr(feature = "serialize", serde(skip))]
    pub(crate) parent: Option<usize>,
}

impl Node {
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            g: 0,
            h: 0,
            f: 0,
            parent: None,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.x.hash(state);
        self.coord.y.hash(state);
    }
}

impl From<Coord> for Node {
    fn from(coord: Coord) -> Self {
        Self::new(coord)
    }
}

/// Cells after the start, up to and including the goal.
pub type Path = Vec<Node>;

pub fn manhattan_distance(a: Coord, b: Coord) -> u32 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as u32
}
