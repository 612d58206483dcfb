use crate::grid::Terrain;
use crate::node::Node;
use grid_2d::Coord;

mod grid;

/// Builds terrain from an ASCII map.
///
/// `.` is cost 0, `,` is cost 4, `#` is cost 9. `s` and `g` mark the start
/// and goal on open ground, `B` marks both. `S` and `G` mark a start or goal
/// standing on a `#` cell.
pub(crate) fn grid_from_strings(strings: &[&str]) -> (Terrain, Coord, Coord) {
    let mut start = None;
    let mut goal = None;
    let mut rows = Vec::new();
    for (i, line) in strings.iter().enumerate() {
        let mut row = Vec::new();
        for (j, ch) in line.chars().enumerate() {
            let coord = Coord::new(j as i32, i as i32);
            let cost = match ch {
                '.' => 0,
                ',' => 4,
                '#' => 9,
                's' => {
                    start = Some(coord);
                    0
                }
                'g' => {
                    goal = Some(coord);
                    0
                }
                'B' => {
                    start = Some(coord);
                    goal = Some(coord);
                    0
                }
                'S' => {
                    start = Some(coord);
                    9
                }
                'G' => {
                    goal = Some(coord);
                    9
                }
                _ => panic!("unexpected map character {:?}", ch),
            };
            row.push(cost);
        }
        rows.push(row);
    }
    let terrain = Terrain::from_rows(&rows).unwrap();
    (terrain, start.unwrap(), goal.unwrap())
}

pub(crate) fn coords(path: &[Node]) -> Vec<(i32, i32)> {
    path.iter().map(|node| (node.coord.x, node.coord.y)).collect()
}
