use crate::config::TerrainMode;
use crate::error::Error;
use crate::grid::*;
use grid_2d::*;

#[test]
fn from_rows() {
    let terrain = Terrain::from_rows(&[[0i64, 1, 2], [3, 4, 5]]).unwrap();
    assert_eq!(terrain.width(), 3);
    assert_eq!(terrain.height(), 2);
    assert_eq!(terrain.get(Coord::new(2, 1)), Some(5));
    assert_eq!(terrain.get(Coord::new(1, 0)), Some(1));
    assert_eq!(terrain.get(Coord::new(3, 0)), None);
    assert!(!terrain.contains(Coord::new(0, -1)));
}

#[test]
fn from_rows_rejects_invalid_input() {
    let empty: [[i64; 0]; 0] = [];
    assert_eq!(Terrain::from_rows(&empty).unwrap_err(), Error::EmptyGrid);
    assert_eq!(
        Terrain::from_rows(&[Vec::<i64>::new()]).unwrap_err(),
        Error::EmptyGrid
    );

    let ragged = vec![vec![0i64, 0, 0], vec![0, 0], vec![0, 0, 0]];
    let err = Terrain::from_rows(&ragged).unwrap_err();
    assert_eq!(
        err,
        Error::NonRectangular {
            row: 1,
            expected: 3,
            actual: 2,
        }
    );
    assert!(err.is_invalid_grid());

    let negative = vec![vec![0i64, 0], vec![0, -2]];
    assert_eq!(
        Terrain::from_rows(&negative).unwrap_err(),
        Error::NegativeCost {
            coord: Coord::new(1, 1),
            cost: -2,
        }
    );
}

#[test]
fn empty_first_row_is_ragged() {
    let rows = vec![vec![], vec![0i64, 1]];
    assert_eq!(
        Terrain::from_rows(&rows).unwrap_err(),
        Error::NonRectangular {
            row: 1,
            expected: 0,
            actual: 2,
        }
    );
}

#[test]
fn costs_must_fit_in_u32() {
    let largest = i64::from(::std::u32::MAX);
    let terrain = Terrain::from_rows(&[[0i64, largest]]).unwrap();
    assert_eq!(terrain.get(Coord::new(1, 0)), Some(::std::u32::MAX));

    let err = Terrain::from_rows(&[[0i64, 0], [largest + 1, 0]]).unwrap_err();
    assert_eq!(
        err,
        Error::CostTooLarge {
            coord: Coord::new(0, 1),
            cost: largest + 1,
        }
    );
    assert!(err.is_invalid_grid());

    let parsed = "0 4294967296".parse::<Terrain>().unwrap_err();
    assert_eq!(
        parsed,
        Error::CostTooLarge {
            coord: Coord::new(1, 0),
            cost: 4_294_967_296,
        }
    );
}

#[test]
fn parse_digits() {
    let terrain: Terrain = "
        0090
        0000
    "
    .parse()
    .unwrap();
    assert_eq!(terrain.size(), Size::new(4, 2));
    assert_eq!(terrain.get(Coord::new(2, 0)), Some(9));
    assert_eq!(terrain.get(Coord::new(2, 1)), Some(0));
}

#[test]
fn parse_whitespace_separated() {
    let terrain: Terrain = "0 12 0\n3 0 250\n".parse().unwrap();
    assert_eq!(terrain.get(Coord::new(1, 0)), Some(12));
    assert_eq!(terrain.get(Coord::new(2, 1)), Some(250));
}

#[test]
fn parse_errors() {
    assert_eq!(
        "00\n0x".parse::<Terrain>().unwrap_err(),
        Error::InvalidCell { line: 2, column: 2 }
    );
    assert_eq!(
        "0 0\n0 -1".parse::<Terrain>().unwrap_err(),
        Error::NegativeCost {
            coord: Coord::new(1, 1),
            cost: -1,
        }
    );
    assert!("00\n000".parse::<Terrain>().unwrap_err().is_invalid_grid());
    assert_eq!("\n  \n".parse::<Terrain>().unwrap_err(), Error::EmptyGrid);
}

#[test]
fn set_cost() {
    let mut terrain = Terrain::new(Size::new(2, 2));
    assert_eq!(terrain.set(Coord::new(1, 1), 7), Some(0));
    assert_eq!(terrain.get(Coord::new(1, 1)), Some(7));
    assert_eq!(terrain.set(Coord::new(2, 1), 7), None);
}

#[test]
fn walkability_depends_on_mode() {
    let terrain = Terrain::from_rows(&[[0i64, 3]]).unwrap();
    let open = Coord::new(0, 0);
    let costly = Coord::new(1, 0);
    let outside = Coord::new(2, 0);

    assert!(terrain.is_walkable(open, TerrainMode::Obstacles));
    assert!(!terrain.is_walkable(costly, TerrainMode::Obstacles));
    assert!(!terrain.is_walkable(outside, TerrainMode::Obstacles));

    assert!(terrain.is_walkable(open, TerrainMode::Weighted));
    assert!(terrain.is_walkable(costly, TerrainMode::Weighted));
    assert!(!terrain.is_walkable(outside, TerrainMode::Weighted));
}

#[test]
fn speed_divisor_treats_zero_and_one_alike() {
    let terrain = Terrain::from_rows(&[[0i64, 1, 4]]).unwrap();
    assert_eq!(speed_divisor(&terrain, Coord::new(0, 0)), 1.0);
    assert_eq!(speed_divisor(&terrain, Coord::new(1, 0)), 1.0);
    assert_eq!(speed_divisor(&terrain, Coord::new(2, 0)), 4.0);
    assert_eq!(speed_divisor(&terrain, Coord::new(5, 0)), 1.0);
}
