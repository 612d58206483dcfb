use crate::node::Node;
use crate::search::EXPANSION_ORDER;
use direction::CardinalDirection;
use grid_2d::Coord;
use std::slice;

pub(crate) fn make_path(nodes: &[Node], goal_index: usize, path: &mut Vec<Node>) {
    path.clear();
    let mut index = goal_index;
    while let Some(parent) = nodes[index].parent {
        path.push(Node {
            parent: None,
            ..nodes[index]
        });
        index = parent;
    }
    path.reverse();
}

/// The single orthogonal step leading from `from` to `to`, if there is one.
pub fn step_direction(from: Coord, to: Coord) -> Option<CardinalDirection> {
    EXPANSION_ORDER
        .iter()
        .cloned()
        .find(|direction| from + direction.coord() == to)
}

/// Walks a path from its start cell, yielding each cell along with the step
/// taken to reach it.
pub struct PathWalk<'a> {
    current_coord: Coord,
    nodes: slice::Iter<'a, Node>,
}

impl<'a> PathWalk<'a> {
    pub fn new(start: Coord, path: &'a [Node]) -> Self {
        Self {
            current_coord: start,
            nodes: path.iter(),
        }
    }
}

impl<'a> Iterator for PathWalk<'a> {
    type Item = (Coord, Option<CardinalDirection>);
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        let direction = step_direction(self.current_coord, node.coord);
        self.current_coord = node.coord;
        Some((node.coord, direction))
    }
}

/// True if every step of the path, starting at `start`, is a single
/// orthogonal move.
pub fn is_contiguous(start: Coord, path: &[Node]) -> bool {
    PathWalk::new(start, path).all(|(_, direction)| direction.is_some())
}
