use grid_2d::Coord;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    StartOutsideGrid,
    GoalOutsideGrid,
    NoPath,
    NodeLimitReached,
    UnknownUnit,
    EmptyGrid,
    NonRectangular {
        row: usize,
        expected: usize,
        actual: usize,
    },
    NegativeCost {
        coord: Coord,
        cost: i64,
    },
    CostTooLarge {
        coord: Coord,
        cost: i64,
    },
    InvalidCell {
        line: usize,
        column: usize,
    },
}

impl Error {
    pub fn is_out_of_bounds(&self) -> bool {
        match self {
            Error::StartOutsideGrid | Error::GoalOutsideGrid => true,
            _ => false,
        }
    }

    pub fn is_invalid_grid(&self) -> bool {
        match self {
            Error::EmptyGrid
            | Error::NonRectangular { .. }
            | Error::NegativeCost { .. }
            | Error::CostTooLarge { .. }
            | Error::InvalidCell { .. } => true,
            _ => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::StartOutsideGrid => write!(f, "start coordinate is outside the grid"),
            Error::GoalOutsideGrid => write!(f, "goal coordinate is outside the grid"),
            Error::NoPath => write!(f, "no path to goal"),
            Error::NodeLimitReached => write!(f, "search node limit reached"),
            Error::UnknownUnit => write!(f, "no unit with this id"),
            Error::EmptyGrid => write!(f, "grid has no cells"),
            Error::NonRectangular {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, actual, expected
            ),
            Error::NegativeCost { coord, cost } => write!(
                f,
                "negative cost {} at ({}, {})",
                cost, coord.x, coord.y
            ),
            Error::CostTooLarge { coord, cost } => write!(
                f,
                "cost {} at ({}, {}) does not fit in a u32",
                cost, coord.x, coord.y
            ),
            Error::InvalidCell { line, column } => {
                write!(f, "invalid cell at line {}, column {}", line, column)
            }
        }
    }
}

impl std::error::Error for Error {}
