//! **partition_maze** generates tile mazes by recursive division and offers the queries,
//! text rendering and route finding a consumer needs to draw and check them.

pub mod coordinates;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod grid_iterators;
pub mod maze;
pub mod passages;
pub mod pathing;
pub mod random;
pub mod tiles;
pub mod units;

pub use crate::maze::Maze;
pub use crate::tiles::Tile;
