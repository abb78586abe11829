use std::fmt;

use smallvec::SmallVec;

use crate::coordinates::{CompassPrimary, GridCoordinate};
use crate::errors::*;
use crate::grid_iterators::{CellIter, RowIter};
use crate::tiles::Tile;
use crate::units::{Height, Width};

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

/// A dense `width * height` field of tiles stored in row major order.
///
/// The only way to change a tile from outside this crate is to run a generator over a fresh grid,
/// a `Maze` hands out nothing but shared references to its grid.
#[derive(Clone, Eq, PartialEq)]
pub struct TileGrid {
    width: Width,
    height: Height,
    tiles: Vec<Tile>,
}

impl fmt::Debug for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "TileGrid :: width: {:?}, height: {:?}, walls: {:?}",
               self.width.0,
               self.height.0,
               self.count(Tile::Wall))
    }
}

impl TileGrid {
    /// An all `Empty` grid.
    ///
    /// Fails if either dimension is zero or the tile count does not fit in a `usize`.
    pub fn new(width: Width, height: Height) -> Result<TileGrid> {
        let (Width(w), Height(h)) = (width, height);
        let size = if w == 0 || h == 0 { None } else { w.checked_mul(h) };
        match size {
            Some(cells_count) => {
                Ok(TileGrid {
                    width,
                    height,
                    tiles: vec![Tile::Empty; cells_count],
                })
            }
            None => Err(ErrorKind::InvalidDimensions(w, h).into()),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width.0
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height.0
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    /// The tile at column `x`, row `y`.
    pub fn tile_at(&self, x: usize, y: usize) -> Result<Tile> {
        self.tile(GridCoordinate::new(x, y))
            .ok_or_else(|| ErrorKind::OutOfBounds(x, y, self.width(), self.height()).into())
    }

    /// The tile at `coord`, None if outside the grid.
    #[inline]
    pub fn tile(&self, coord: GridCoordinate) -> Option<Tile> {
        self.grid_coordinate_to_index(coord).map(|index| self.tiles[index])
    }

    /// Overwrite a tile. Callers only write coordinates taken from the grid's own bounds.
    pub(crate) fn set_tile(&mut self, coord: GridCoordinate, tile: Tile) {
        debug_assert!(self.is_valid_coordinate(coord),
                      "{} is outside the {}x{} grid",
                      coord,
                      self.width(),
                      self.height());
        if let Some(index) = self.grid_coordinate_to_index(coord) {
            self.tiles[index] = tile;
        }
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.x < self.width() && coord.y < self.height()
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y * self.width() + coord.x)
        } else {
            None
        }
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.width, self.height)
    }

    #[inline]
    pub fn iter_row(&self) -> RowIter {
        RowIter::new(self.width, self.height)
    }

    /// Every coordinate paired with its tile, row major.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (GridCoordinate, Tile)> + '_ {
        self.iter().zip(self.tiles.iter().cloned())
    }

    /// Coordinates holding `tile`, row major.
    pub fn positions_of(&self, tile: Tile) -> impl Iterator<Item = GridCoordinate> + '_ {
        self.iter_tiles()
            .filter(move |&(_, t)| t == tile)
            .map(|(coord, _)| coord)
    }

    #[inline]
    pub fn walls(&self) -> impl Iterator<Item = GridCoordinate> + '_ {
        self.positions_of(Tile::Wall)
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<GridCoordinate> {
        coord.offset(direction)
             .filter(|&neighbour_coord| self.is_valid_coordinate(neighbour_coord))
    }

    /// Tiles to the North, South, East or West of `coord` that are on the grid, whatever they hold.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|&dir| self.neighbour_at_direction(coord, dir))
            .collect()
    }

    /// Neighbours that a route could step onto.
    pub fn passable_neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|&dir| self.neighbour_at_direction(coord, dir))
            .filter(|&neighbour_coord| self.tile(neighbour_coord).map_or(false, Tile::is_passable))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn grid(w: usize, h: usize) -> TileGrid {
        TileGrid::new(Width(w), Height(h)).expect("valid grid dimensions")
    }

    #[test]
    fn new_grid_is_empty() {
        let g = grid(4, 3);
        assert_eq!(g.size(), 12);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert!(g.iter().all(|coord| g.tile(coord) == Some(Tile::Empty)));
    }

    #[test]
    fn zero_dimensions_rejected() {
        for &(w, h) in &[(0, 0), (0, 5), (5, 0)] {
            let err = TileGrid::new(Width(w), Height(h)).unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::InvalidDimensions(ew, eh) if *ew == w && *eh == h));
        }
    }

    #[test]
    fn overflowing_dimensions_rejected() {
        let err = TileGrid::new(Width(usize::MAX), Height(2)).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidDimensions(_, 2)));
    }

    #[test]
    fn out_of_bounds_queries_fail() {
        let g = grid(5, 4);
        let out_of_bounds = |x, y| {
            let err = g.tile_at(x, y).unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::OutOfBounds(ex, ey, 5, 4) if *ex == x && *ey == y));
        };
        out_of_bounds(5, 0);
        out_of_bounds(0, 4);
        out_of_bounds(5, 4);
        out_of_bounds(usize::MAX, usize::MAX);
        assert_eq!(g.tile_at(4, 3).unwrap(), Tile::Empty);
    }

    #[test]
    fn set_and_read_back() {
        let mut g = grid(3, 3);
        g.set_tile(GridCoordinate::new(1, 2), Tile::Wall);
        assert_eq!(g.tile_at(1, 2).unwrap(), Tile::Wall);
        assert_eq!(g.tile_at(2, 1).unwrap(), Tile::Empty);
        assert_eq!(g.walls().collect::<Vec<_>>(), vec![GridCoordinate::new(1, 2)]);
        assert_eq!(g.count(Tile::Wall), 1);
        assert_eq!(g.count(Tile::Empty), 8);
    }

    #[test]
    fn coordinate_as_index() {
        let g = grid(3, 3);
        let indices = g.iter()
                       .map(|coord| g.grid_coordinate_to_index(coord))
                       .collect::<Vec<_>>();
        let expected = (0..9).map(Some).collect::<Vec<_>>();
        assert_eq!(indices, expected);
        assert_eq!(g.grid_coordinate_to_index(GridCoordinate::new(2, 3)), None);
        assert_eq!(g.grid_coordinate_to_index(GridCoordinate::new(3, 2)), None);
    }

    #[test]
    fn neighbour_cells() {
        let g = grid(10, 10);
        let gc = |x, y| GridCoordinate::new(x, y);
        let check_expected_neighbours = |coord, expected: &[GridCoordinate]| {
            let found = g.neighbours(coord).iter().cloned().sorted().collect::<Vec<_>>();
            let expected = expected.iter().cloned().sorted().collect::<Vec<_>>();
            assert_eq!(found, expected);
        };

        // corners
        check_expected_neighbours(gc(0, 0), &[gc(1, 0), gc(0, 1)]);
        check_expected_neighbours(gc(9, 0), &[gc(8, 0), gc(9, 1)]);
        check_expected_neighbours(gc(0, 9), &[gc(0, 8), gc(1, 9)]);
        check_expected_neighbours(gc(9, 9), &[gc(9, 8), gc(8, 9)]);

        // sides
        check_expected_neighbours(gc(1, 0), &[gc(0, 0), gc(1, 1), gc(2, 0)]);
        check_expected_neighbours(gc(9, 8), &[gc(9, 7), gc(9, 9), gc(8, 8)]);

        check_expected_neighbours(gc(1, 1), &[gc(0, 1), gc(1, 0), gc(2, 1), gc(1, 2)]);
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 grid")]
    fn set_tile_off_the_grid_is_a_bug() {
        let mut g = grid(3, 3);
        g.set_tile(GridCoordinate::new(3, 0), Tile::Wall);
    }

    #[test]
    fn neighbour_at_edges() {
        let g = grid(2, 2);
        let gc = |x, y| GridCoordinate::new(x, y);
        assert_eq!(g.neighbour_at_direction(gc(0, 0), CompassPrimary::West), None);
        assert_eq!(g.neighbour_at_direction(gc(0, 0), CompassPrimary::East), Some(gc(1, 0)));
        assert_eq!(g.neighbour_at_direction(gc(1, 1), CompassPrimary::South), None);
        assert_eq!(g.neighbour_at_direction(gc(1, 1), CompassPrimary::East), None);
        assert_eq!(g.neighbour_at_direction(gc(1, 1), CompassPrimary::North), Some(gc(1, 0)));
    }

    #[test]
    fn walls_are_not_passable_neighbours() {
        let mut g = grid(3, 3);
        let gc = |x, y| GridCoordinate::new(x, y);
        g.set_tile(gc(1, 0), Tile::Wall);
        g.set_tile(gc(0, 1), Tile::End);
        let passable = g.passable_neighbours(gc(0, 0));
        assert_eq!(&*passable, &[gc(0, 1)]);
    }
}
