use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::coordinates::GridCoordinate;
use crate::errors::*;
use crate::grid::TileGrid;
use crate::random::RandomSource;
use crate::tiles::Tile;

/// Which way a wall line runs across a region.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Orientation {
    /// A wall column.
    Vertical,
    /// A wall row.
    Horizontal,
}

impl Orientation {
    /// Coin flip, heads is vertical.
    pub fn random<S: RandomSource>(rng: &mut S) -> Orientation {
        if rng.coin_flip() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    #[inline]
    pub fn flipped(self) -> Orientation {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Orientation> {
        match s.to_ascii_lowercase().as_str() {
            "vertical" | "v" => Ok(Orientation::Vertical),
            "horizontal" | "h" => Ok(Orientation::Horizontal),
            _ => Err(ErrorKind::UnknownOrientation(s.to_owned()).into()),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// An inclusive rectangle of grid tiles.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct Region {
    pub col_start: usize,
    pub col_end: usize,
    pub row_start: usize,
    pub row_end: usize,
}

impl Region {
    pub fn new(col_start: usize, col_end: usize, row_start: usize, row_end: usize) -> Region {
        debug_assert!(col_start <= col_end && row_start <= row_end);
        Region {
            col_start,
            col_end,
            row_start,
            row_end,
        }
    }

    /// The region covering every tile of `grid`.
    pub fn whole(grid: &TileGrid) -> Region {
        Region::new(0, grid.width() - 1, 0, grid.height() - 1)
    }

    /// A wall line needs at least one free column (row) on either side of it, so a region that is
    /// only one or two tiles across in either direction is left alone.
    #[inline]
    pub fn is_divisible(&self) -> bool {
        self.col_end - self.col_start > 1 && self.row_end - self.row_start > 1
    }

    pub fn contains(&self, coord: GridCoordinate) -> bool {
        (self.col_start..=self.col_end).contains(&coord.x) &&
        (self.row_start..=self.row_end).contains(&coord.y)
    }

    /// The two regions either side of a wall line at column/row `line`.
    pub fn halves(&self, orientation: Orientation, line: usize) -> (Region, Region) {
        match orientation {
            Orientation::Vertical => {
                (Region::new(self.col_start, line - 1, self.row_start, self.row_end),
                 Region::new(line + 1, self.col_end, self.row_start, self.row_end))
            }
            Orientation::Horizontal => {
                (Region::new(self.col_start, self.col_end, self.row_start, line - 1),
                 Region::new(self.col_start, self.col_end, line + 1, self.row_end))
            }
        }
    }
}

/// One wall line drawn by the recursive division.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct Partition {
    pub orientation: Orientation,
    /// The region the line cuts in two.
    pub region: Region,
    /// Column of a vertical line, row of a horizontal one.
    pub line: usize,
    /// Row (vertical line) or column (horizontal line) of the single passable tile on the line.
    pub gap: usize,
    /// Recursion depth, 0 for the line across the whole grid.
    pub depth: usize,
}

impl Partition {
    pub fn gap_coordinate(&self) -> GridCoordinate {
        match self.orientation {
            Orientation::Vertical => GridCoordinate::new(self.line, self.gap),
            Orientation::Horizontal => GridCoordinate::new(self.gap, self.line),
        }
    }

    /// Every tile on the line, gap included.
    pub fn line_coordinates(&self) -> Vec<GridCoordinate> {
        let r = &self.region;
        match self.orientation {
            Orientation::Vertical => {
                (r.row_start..=r.row_end).map(|row| GridCoordinate::new(self.line, row)).collect()
            }
            Orientation::Horizontal => {
                (r.col_start..=r.col_end).map(|col| GridCoordinate::new(col, self.line)).collect()
            }
        }
    }

    /// Wall tiles the line placed: its length minus the gap.
    pub fn wall_count(&self) -> usize {
        let r = &self.region;
        let line_length = match self.orientation {
            Orientation::Vertical => r.row_end - r.row_start + 1,
            Orientation::Horizontal => r.col_end - r.col_start + 1,
        };
        line_length - 1
    }
}

/// Apply the recursive division maze generation algorithm to the whole grid.
///
/// A region is cut in two by a single wall line placed at least one tile in from its edges. The
/// line is left open at one of its two ends, picked by a coin flip, and each half is then divided
/// again with the line running the other way. Alternating the orientation keeps long open corridors
/// from forming. Regions too thin to hold a line with a free tile either side are left open.
///
/// Because the gap always sits on an outer row/column of the region and every later line is drawn
/// strictly inside one of the halves, no gap is ever walled over and the whole grid stays connected.
///
/// Returns the wall lines in the order they were drawn.
pub fn recursive_division<S: RandomSource>(grid: &mut TileGrid,
                                           first_split: Orientation,
                                           rng: &mut S)
                                           -> Vec<Partition> {
    let mut partitions = vec![];
    let whole = Region::whole(grid);
    divide(grid, whole, first_split, 0, rng, &mut partitions);
    partitions
}

fn divide<S: RandomSource>(grid: &mut TileGrid,
                           region: Region,
                           orientation: Orientation,
                           depth: usize,
                           rng: &mut S,
                           partitions: &mut Vec<Partition>) {
    if !region.is_divisible() {
        return;
    }

    let (line, gap) = match orientation {
        Orientation::Vertical => {
            let split_column = rng.strictly_between(region.col_start, region.col_end);
            let gap_row = if rng.coin_flip() { region.row_end } else { region.row_start };
            (split_column, gap_row)
        }
        Orientation::Horizontal => {
            let split_row = rng.strictly_between(region.row_start, region.row_end);
            let gap_column = if rng.coin_flip() { region.col_end } else { region.col_start };
            (split_row, gap_column)
        }
    };

    let partition = Partition {
        orientation,
        region,
        line,
        gap,
        depth,
    };
    let gap_coord = partition.gap_coordinate();
    for coord in partition.line_coordinates() {
        if coord != gap_coord {
            grid.set_tile(coord, Tile::Wall);
        }
    }
    trace!("{} line at {} across {:?}, gap at {}, depth {}",
           orientation,
           line,
           region,
           gap_coord,
           depth);
    partitions.push(partition);

    let (first_half, second_half) = region.halves(orientation, line);
    let next_orientation = orientation.flipped();
    divide(grid, first_half, next_orientation, depth + 1, rng, partitions);
    divide(grid, second_half, next_orientation, depth + 1, rng, partitions);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Height, Width};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Always splits as near the middle as it can and always leaves the gap at the far end.
    struct GapAtFarEnd;
    impl RandomSource for GapAtFarEnd {
        fn coin_flip(&mut self) -> bool {
            true
        }
        fn strictly_between(&mut self, low: usize, high: usize) -> usize {
            (low + high) / 2
        }
    }

    /// Always splits right next to the low edge and leaves the gap at the near end.
    struct HugLowEdge;
    impl RandomSource for HugLowEdge {
        fn coin_flip(&mut self) -> bool {
            false
        }
        fn strictly_between(&mut self, low: usize, _: usize) -> usize {
            low + 1
        }
    }

    fn grid(w: usize, h: usize) -> TileGrid {
        TileGrid::new(Width(w), Height(h)).expect("valid grid dimensions")
    }

    #[test]
    fn thin_regions_are_not_divided() {
        for &(w, h) in &[(1, 1), (2, 2), (1, 9), (9, 1), (2, 9), (9, 2)] {
            let mut g = grid(w, h);
            let partitions = recursive_division(&mut g, Orientation::Vertical, &mut GapAtFarEnd);
            assert!(partitions.is_empty());
            assert_eq!(g.count(Tile::Wall), 0);
        }
    }

    #[test]
    fn three_by_three_vertical() {
        let mut g = grid(3, 3);
        let partitions = recursive_division(&mut g, Orientation::Vertical, &mut GapAtFarEnd);
        assert_eq!(partitions.len(), 1);
        assert_eq!(partitions[0],
                   Partition {
                       orientation: Orientation::Vertical,
                       region: Region::new(0, 2, 0, 2),
                       line: 1,
                       gap: 2,
                       depth: 0,
                   });
        assert_eq!(g.walls().collect::<Vec<_>>(),
                   vec![GridCoordinate::new(1, 0), GridCoordinate::new(1, 1)]);
    }

    #[test]
    fn three_by_three_horizontal_near_gap() {
        let mut g = grid(3, 3);
        let partitions = recursive_division(&mut g, Orientation::Horizontal, &mut HugLowEdge);
        assert_eq!(partitions.len(), 1);
        assert_eq!(partitions[0].gap_coordinate(), GridCoordinate::new(0, 1));
        assert_eq!(g.walls().collect::<Vec<_>>(),
                   vec![GridCoordinate::new(1, 1), GridCoordinate::new(2, 1)]);
    }

    #[test]
    fn gaps_always_at_far_end_when_scripted() {
        let mut g = grid(17, 11);
        let partitions = recursive_division(&mut g, Orientation::Horizontal, &mut GapAtFarEnd);
        assert!(!partitions.is_empty());
        for p in &partitions {
            let expected_gap = match p.orientation {
                Orientation::Vertical => p.region.row_end,
                Orientation::Horizontal => p.region.col_end,
            };
            assert_eq!(p.gap, expected_gap);
            assert_ne!(g.tile(p.gap_coordinate()), Some(Tile::Wall));
            for coord in p.line_coordinates() {
                if coord != p.gap_coordinate() {
                    assert_eq!(g.tile(coord), Some(Tile::Wall));
                }
            }
        }
    }

    #[test]
    fn orientation_alternates_with_depth() {
        let mut g = grid(40, 30);
        let mut rng = StdRng::seed_from_u64(3);
        let partitions = recursive_division(&mut g, Orientation::Vertical, &mut rng);
        for p in &partitions {
            let expected = if p.depth % 2 == 0 {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            assert_eq!(p.orientation, expected);
        }
    }

    #[test]
    fn lines_stay_inside_their_region() {
        let mut g = grid(31, 23);
        let mut rng = StdRng::seed_from_u64(99);
        let partitions = recursive_division(&mut g, Orientation::Horizontal, &mut rng);
        for p in &partitions {
            let r = &p.region;
            match p.orientation {
                Orientation::Vertical => assert!(p.line > r.col_start && p.line < r.col_end),
                Orientation::Horizontal => assert!(p.line > r.row_start && p.line < r.row_end),
            }
            assert!(p.line_coordinates().iter().all(|&coord| r.contains(coord)));
        }
    }

    #[test]
    fn every_division_shrinks_the_region() {
        let area = |r: &Region| (r.col_end - r.col_start + 1) * (r.row_end - r.row_start + 1);
        for seed in 0..10 {
            let mut g = grid(37, 29);
            let mut rng = StdRng::seed_from_u64(seed);
            let partitions = recursive_division(&mut g, Orientation::Vertical, &mut rng);
            for p in &partitions {
                let (first, second) = p.region.halves(p.orientation, p.line);
                assert!(area(&first) < area(&p.region) && area(&second) < area(&p.region));
                assert_eq!(area(&first) + area(&second) + p.line_coordinates().len(), area(&p.region));
            }
            // Every level removes at least one column or row, so depth is bounded by width + height.
            let deepest = partitions.iter().map(|p| p.depth).max().unwrap_or(0);
            assert!(deepest < 37 + 29);
        }
    }

    #[test]
    fn wall_count_matches_lines_drawn() {
        let mut g = grid(25, 25);
        let mut rng = StdRng::seed_from_u64(1234);
        let partitions = recursive_division(&mut g, Orientation::Vertical, &mut rng);
        let expected: usize = partitions.iter().map(Partition::wall_count).sum();
        assert_eq!(g.count(Tile::Wall), expected);
    }

    #[test]
    fn halves() {
        let r = Region::new(0, 6, 2, 9);
        assert_eq!(r.halves(Orientation::Vertical, 3),
                   (Region::new(0, 2, 2, 9), Region::new(4, 6, 2, 9)));
        assert_eq!(r.halves(Orientation::Horizontal, 5),
                   (Region::new(0, 6, 2, 4), Region::new(0, 6, 6, 9)));
    }

    #[test]
    fn parse_orientation() {
        assert_eq!("vertical".parse::<Orientation>().unwrap(), Orientation::Vertical);
        assert_eq!("H".parse::<Orientation>().unwrap(), Orientation::Horizontal);
        let err = "diagonal".parse::<Orientation>().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnknownOrientation(name) if name == "diagonal"));
    }
}
