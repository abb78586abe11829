use std::fmt;

use log::debug;

use crate::coordinates::GridCoordinate;
use crate::errors::*;
use crate::generators::{self, Orientation, Partition};
use crate::grid::TileGrid;
use crate::random::RandomSource;
use crate::tiles::Tile;
use crate::units::{Height, Width};

/// A generated maze: a tile grid with `Start` in the top left corner, `End` in the bottom right
/// corner and walls placed by recursive division so that the two are always connected.
///
/// The grid is fully built by the constructors and cannot be changed afterwards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Maze {
    grid: TileGrid,
    partitions: Vec<Partition>,
}

impl Maze {
    /// Generate a maze using the thread local random number generator.
    pub fn new(width: Width, height: Height) -> Result<Maze> {
        Maze::with_rng(width, height, &mut rand::thread_rng())
    }

    /// Generate a maze drawing every random choice, including the first split orientation, from
    /// `rng`. The same seeded source gives the same maze.
    pub fn with_rng<S: RandomSource>(width: Width, height: Height, rng: &mut S) -> Result<Maze> {
        let first_split = Orientation::random(rng);
        Maze::with_first_split(width, height, first_split, rng)
    }

    /// Generate a maze whose first wall line runs in the `first_split` direction.
    pub fn with_first_split<S: RandomSource>(width: Width,
                                             height: Height,
                                             first_split: Orientation,
                                             rng: &mut S)
                                             -> Result<Maze> {
        let mut grid = TileGrid::new(width, height)?;

        // On a 1x1 grid the end overwrites the start.
        grid.set_tile(start_coordinate(), Tile::Start);
        grid.set_tile(end_coordinate(&grid), Tile::End);

        let partitions = generators::recursive_division(&mut grid, first_split, rng);

        debug!("generated {}x{} maze, first split {}, {} partitions, {} walls",
               grid.width(),
               grid.height(),
               first_split,
               partitions.len(),
               grid.count(Tile::Wall));

        Ok(Maze { grid, partitions })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The tile at column `x`, row `y`, or an `OutOfBounds` error.
    #[inline]
    pub fn tile_at(&self, x: usize, y: usize) -> Result<Tile> {
        self.grid.tile_at(x, y)
    }

    #[inline]
    pub fn start(&self) -> GridCoordinate {
        start_coordinate()
    }

    #[inline]
    pub fn end(&self) -> GridCoordinate {
        end_coordinate(&self.grid)
    }

    pub fn walls(&self) -> impl Iterator<Item = GridCoordinate> + '_ {
        self.grid.walls()
    }

    #[inline]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// The wall lines in the order they were drawn.
    #[inline]
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

#[inline]
fn start_coordinate() -> GridCoordinate {
    GridCoordinate::new(0, 0)
}

#[inline]
fn end_coordinate(grid: &TileGrid) -> GridCoordinate {
    GridCoordinate::new(grid.width() - 1, grid.height() - 1)
}
