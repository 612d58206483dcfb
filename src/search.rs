use crate::config::*;
use crate::error::*;
use crate::grid::*;
use crate::metadata::*;
use crate::node::*;
use crate::path;
use best::BestMap;
use direction::CardinalDirection;
use grid_2d::*;
use log::trace;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Neighbours are expanded in this order: up, down, left, right.
pub const EXPANSION_ORDER: [CardinalDirection; 4] = [
    CardinalDirection::North,
    CardinalDirection::South,
    CardinalDirection::West,
    CardinalDirection::East,
];

#[derive(Debug, Clone, Copy, Default)]
struct SearchCell {
    seen: u64,
    visited: u64,
    node_index: usize,
}

/// Heap entry. Node indices are handed out in discovery order, so ordering
/// by `(f, node_index)` breaks ties the same way a front-to-back scan of the
/// open list does.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PriorityEntry {
    node_index: usize,
    f: u32,
}

impl PriorityEntry {
    fn new(node_index: usize, f: u32) -> Self {
        Self { node_index, f }
    }
}

impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.node_index.cmp(&self.node_index))
    }
}

/// Reusable A* state.
///
/// Bookkeeping is invalidated by bumping a sequence number at the start of
/// each search, so nothing leaks between calls. A context must not be shared
/// between overlapping searches.
#[derive(Debug, Clone)]
pub struct SearchContext {
    seq: u64,
    cell_grid: Grid<SearchCell>,
    nodes: Vec<Node>,
    open_list: Vec<usize>,
    priority_queue: BinaryHeap<PriorityEntry>,
}

impl SearchContext {
    pub fn new(size: Size) -> Self {
        Self {
            seq: 0,
            cell_grid: Grid::new_clone(size, SearchCell::default()),
            nodes: Vec::new(),
            open_list: Vec::new(),
            priority_queue: BinaryHeap::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.cell_grid.width()
    }

    pub fn height(&self) -> u32 {
        self.cell_grid.height()
    }

    pub fn size(&self) -> Size {
        self.cell_grid.size()
    }

    fn init(&mut self, size: Size) {
        if self.cell_grid.size() != size {
            self.cell_grid = Grid::new_clone(size, SearchCell::default());
            self.seq = 0;
        }
        self.seq += 1;
        self.nodes.clear();
        self.open_list.clear();
        self.priority_queue.clear();
    }

    fn push_open(&mut self, node_index: usize, open_set: OpenSet) {
        match open_set {
            OpenSet::LinearScan => self.open_list.push(node_index),
            OpenSet::PriorityQueue => {
                let f = self.nodes[node_index].f;
                self.priority_queue.push(PriorityEntry::new(node_index, f));
            }
        }
    }

    fn is_closed(&self, node_index: usize) -> bool {
        self.cell_grid
            .get(self.nodes[node_index].coord)
            .map_or(false, |cell| cell.visited == self.seq)
    }

    fn pop_open(&mut self, open_set: OpenSet) -> Option<usize> {
        match open_set {
            OpenSet::LinearScan => {
                let mut best_map = BestMap::new();
                for (position, &node_index) in self.open_list.iter().enumerate() {
                    best_map.insert_lt(self.nodes[node_index].f, position);
                }
                best_map
                    .into_value()
                    .map(|position| self.open_list.remove(position))
            }
            OpenSet::PriorityQueue => {
                while let Some(entry) = self.priority_queue.pop() {
                    let stale = entry.f != self.nodes[entry.node_index].f;
                    if stale || self.is_closed(entry.node_index) {
                        continue;
                    }
                    return Some(entry.node_index);
                }
                None
            }
        }
    }

    fn see_successor(
        &mut self,
        coord: Coord,
        parent: usize,
        g: u32,
        goal: Coord,
        open_set: OpenSet,
    ) {
        let seq = self.seq;
        let next_index = self.nodes.len();
        let cell = match self.cell_grid.get_mut(coord) {
            Some(cell) => cell,
            None => return,
        };

        if cell.seen == seq {
            if cell.visited == seq {
                return;
            }
            let node = &mut self.nodes[cell.node_index];
            if node.g <= g {
                return;
            }
            // h depends only on the coordinate so it is kept from discovery
            node.parent = Some(parent);
            node.g = g;
            node.f = g + node.h;
            if open_set == OpenSet::PriorityQueue {
                let entry = PriorityEntry::new(cell.node_index, node.f);
                self.priority_queue.push(entry);
            }
        } else {
            cell.seen = seq;
            cell.node_index = next_index;
            let h = manhattan_distance(coord, goal);
            self.nodes.push(Node {
                coord,
                g,
                h,
                f: g + h,
                parent: Some(parent),
            });
            self.push_open(next_index, open_set);
        }
    }

    /// A* over the 4-connected grid with a Manhattan distance heuristic.
    ///
    /// On success `path` holds the cells after `start` up to and including
    /// `goal`. It is left empty when `start == goal`.
    pub fn astar<G>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
        path: &mut Vec<Node>,
    ) -> Result<SearchMetadata, Error>
    where
        G: CostGrid,
    {
        if grid.cost(start).is_none() {
            return Err(Error::StartOutsideGrid);
        }
        if grid.cost(goal).is_none() {
            return Err(Error::GoalOutsideGrid);
        }
        if start == goal {
            path.clear();
            return Ok(Default::default());
        }

        self.init(grid.size());

        let start_index = match self.cell_grid.get_mut(start) {
            Some(cell) => {
                cell.seen = self.seq;
                cell.node_index = 0;
                0
            }
            None => return Err(Error::StartOutsideGrid),
        };
        let h = manhattan_distance(start, goal);
        self.nodes.push(Node {
            coord: start,
            g: 0,
            h,
            f: h,
            parent: None,
        });
        self.push_open(start_index, config.open_set);

        let mut num_nodes_visited = 0;

        while let Some(current_index) = self.pop_open(config.open_set) {
            // only a non-empty open set can hit the limit, an exhausted one is NoPath
            if num_nodes_visited >= config.node_limit {
                trace!("node limit reached searching {:?} to {:?}", start, goal);
                return Err(Error::NodeLimitReached);
            }

            let Node { coord, g, .. } = self.nodes[current_index];
            if let Some(cell) = self.cell_grid.get_mut(coord) {
                cell.visited = self.seq;
            }
            num_nodes_visited += 1;

            if coord == goal {
                path::make_path(&self.nodes, current_index, path);
                trace!(
                    "path from {:?} to {:?}: {} steps, {} nodes visited",
                    start,
                    goal,
                    path.len(),
                    num_nodes_visited
                );
                return Ok(SearchMetadata {
                    num_nodes_visited,
                    length: path.len(),
                });
            }

            for direction in EXPANSION_ORDER.iter() {
                let neighbour_coord = coord + direction.coord();
                if !grid.is_walkable(neighbour_coord, config.terrain_mode) {
                    continue;
                }
                self.see_successor(
                    neighbour_coord,
                    current_index,
                    g + 1,
                    goal,
                    config.open_set,
                );
            }
        }

        trace!(
            "no path from {:?} to {:?}, {} nodes visited",
            start,
            goal,
            num_nodes_visited
        );
        Err(Error::NoPath)
    }
}

/// Runs a single search with the default configuration.
pub fn find_path<G: CostGrid>(grid: &G, start: Coord, goal: Coord) -> Result<Path, Error> {
    find_path_with(grid, start, goal, Default::default())
}

pub fn find_path_with<G: CostGrid>(
    grid: &G,
    start: Coord,
    goal: Coord,
    config: SearchConfig,
) -> Result<Path, Error> {
    let mut ctx = SearchContext::new(grid.size());
    let mut path = Vec::new();
    ctx.astar(grid, start, goal, config, &mut path)?;
    Ok(path)
}
