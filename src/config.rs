/// How cell costs decide whether the search may enter a cell.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainMode {
    /// Cost 0 is open ground, anything else is a wall.
    Obstacles,
    /// Every cell can be entered. Costs only slow units down while moving.
    Weighted,
}

/// Data structure holding the open set during a search.
///
/// Both variants pick the node with the smallest F, and among equal F the
/// one discovered first, so they return identical paths.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenSet {
    LinearScan,
    PriorityQueue,
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub terrain_mode: TerrainMode,
    pub open_set: OpenSet,
    /// Searches that close this many nodes without reaching the goal fail
    /// with `Error::NodeLimitReached`.
    pub node_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            terrain_mode: TerrainMode::Obstacles,
            open_set: OpenSet::LinearScan,
            node_limit: ::std::usize::MAX,
        }
    }
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    /// Grid cells per second on terrain of cost 0 or 1.
    pub base_speed: f32,
    /// A unit closer than this to its target has arrived.
    pub arrival_epsilon: f32,
    /// Fraction of the remaining turn applied to the heading per update.
    pub turn_blend: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            base_speed: 1.0,
            arrival_epsilon: 0.1,
            turn_blend: 0.1,
        }
    }
}
