use std::fmt::{Debug, Display};

use fnv::FnvHashMap;
use itertools::Itertools;
use num::traits::{Bounded, CheckedAdd, One, ToPrimitive, Unsigned, Zero};
use smallvec::SmallVec;

use crate::coordinates::GridCoordinate;
use crate::grid::TileGrid;
use crate::grid_displays::GridDisplay;
use crate::tiles::Tile;

// Shorthand for the bounds a distance counter needs.
pub trait MaxDistance: Unsigned + Bounded + CheckedAdd + ToPrimitive + Debug + Display + Copy + Ord {}
impl<T: Unsigned + Bounded + CheckedAdd + ToPrimitive + Debug + Display + Copy + Ord> MaxDistance for T {}

/// Step counts from a start tile to every tile reachable from it through passable tiles.
#[derive(Debug, Clone)]
pub struct Distances<MaxDistanceT = u32> {
    start_coordinate: GridCoordinate,
    distances: FnvHashMap<GridCoordinate, MaxDistanceT>,
    max_distance: MaxDistanceT,
}

impl<MaxDistanceT: MaxDistance> Distances<MaxDistanceT> {
    /// Breadth first flood fill from `start_coordinate`.
    ///
    /// None if the start is off the grid or is a wall. Tiles further away than `MaxDistanceT` can
    /// count are treated as unreachable.
    pub fn new(grid: &TileGrid, start_coordinate: GridCoordinate) -> Option<Distances<MaxDistanceT>> {
        if !grid.tile(start_coordinate).map_or(false, Tile::is_passable) {
            return None;
        }

        let mut max: MaxDistanceT = Zero::zero();
        let mut distances: FnvHashMap<GridCoordinate, MaxDistanceT> =
            FnvHashMap::with_capacity_and_hasher(grid.size(), Default::default());
        distances.insert(start_coordinate, Zero::zero());

        // Every step costs the same, so the first time a tile is reached is along a shortest route
        // and the map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {
            let mut new_frontier = vec![];
            for cell_coord in &frontier {
                let distance_to_cell: MaxDistanceT = distances[cell_coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                let neighbour_distance = match distance_to_cell.checked_add(&One::one()) {
                    Some(d) => d,
                    None => continue,
                };
                for neighbour_coord in grid.passable_neighbours(*cell_coord) {
                    if !distances.contains_key(&neighbour_coord) {
                        distances.insert(neighbour_coord, neighbour_distance);
                        new_frontier.push(neighbour_coord);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> GridCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> MaxDistanceT {
        self.max_distance
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: GridCoordinate) -> Option<MaxDistanceT> {
        self.distances.get(&coord).cloned()
    }

    #[inline]
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// Tiles at the maximum distance, row major.
    pub fn furthest_points_on_grid(&self) -> SmallVec<[GridCoordinate; 8]> {
        let furthest_distance = self.max();
        self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(coord, _)| *coord)
            .sorted_by_key(|coord| (coord.y, coord.x))
            .collect()
    }
}

impl<MaxDistanceT: MaxDistance> GridDisplay for Distances<MaxDistanceT> {
    /// Reachable open tiles show their distance as a base 36 digit, wrapping every 36 steps.
    fn render_tile(&self, coord: GridCoordinate, tile: Tile) -> char {
        if tile != Tile::Empty {
            return tile.glyph();
        }
        self.distances
            .get(&coord)
            .and_then(|d| d.to_u64())
            .and_then(|d| std::char::from_digit((d % 36) as u32, 36))
            .unwrap_or_else(|| tile.glyph())
    }
}

/// Walk back from `end_point` to the start of `distances_from_start`, always stepping to a
/// neighbour one closer to the start.
///
/// None if `end_point` cannot be reached from the start.
pub fn shortest_path<MaxDistanceT: MaxDistance>(grid: &TileGrid,
                                                distances_from_start: &Distances<MaxDistanceT>,
                                                end_point: GridCoordinate)
                                                -> Option<Vec<GridCoordinate>> {
    let mut current_distance = distances_from_start.distance_from_start_to(end_point)?;
    let start = distances_from_start.start();
    let mut current_coord = end_point;
    let mut path = vec![end_point];

    while current_coord != start {
        let closer = grid.passable_neighbours(current_coord)
            .iter()
            .cloned()
            .filter_map(|coord| distances_from_start.distance_from_start_to(coord).map(|d| (coord, d)))
            .min_by_key(|&(_, d)| d);

        match closer {
            Some((closer_coord, closer_distance)) if closer_distance < current_distance => {
                current_coord = closer_coord;
                current_distance = closer_distance;
                path.push(current_coord);
            }
            // The distances were not computed on this grid.
            _ => return None,
        }
    }

    path.reverse();
    Some(path)
}

/// The shortest route from the `Start` tile to the `End` tile, both ends included.
pub fn start_to_end_path(grid: &TileGrid) -> Option<Vec<GridCoordinate>> {
    let start = grid.positions_of(Tile::Start).next()?;
    let end = grid.positions_of(Tile::End).next()?;
    let distances = Distances::<u32>::new(grid, start)?;
    shortest_path(grid, &distances, end)
}

/// Can the `End` tile be reached from the `Start` tile?
///
/// A grid whose single tile is the end, as on a 1x1 maze, is trivially solvable.
pub fn is_solvable(grid: &TileGrid) -> bool {
    match grid.positions_of(Tile::Start).next() {
        Some(_) => start_to_end_path(grid).is_some(),
        None => grid.size() == 1 && grid.count(Tile::End) == 1,
    }
}
