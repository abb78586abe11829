use std::fmt;

use fnv::FnvHashSet;

use crate::coordinates::GridCoordinate;
use crate::grid::TileGrid;
use crate::tiles::{Tile, WALL_GLYPH};

pub trait GridDisplay {
    /// Render the contents of a grid tile as a single glyph.
    fn render_tile(&self, _: GridCoordinate, tile: Tile) -> char {
        tile.glyph()
    }
}

/// Each tile drawn as its own glyph.
#[derive(Debug, Copy, Clone, Default)]
pub struct PlainDisplay;
impl GridDisplay for PlainDisplay {}

/// Marks the open tiles of a route with a `.`; the start and end keep their letters.
#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<GridCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &[GridCoordinate]) -> Self {
        PathDisplay { on_path_coordinates: path.iter().cloned().collect() }
    }
}
impl GridDisplay for PathDisplay {
    fn render_tile(&self, coord: GridCoordinate, tile: Tile) -> char {
        if tile == Tile::Empty && self.on_path_coordinates.contains(&coord) {
            '.'
        } else {
            tile.glyph()
        }
    }
}

/// Render the grid as text, one line per row, framed by a solid border.
pub fn render(grid: &TileGrid, displayer: &dyn GridDisplay) -> String {
    let border_row: String = std::iter::repeat(WALL_GLYPH).take(grid.width() + 2).collect();

    // (width + 2 glyphs + newline) per row, with room for multi byte glyphs
    let mut output = String::with_capacity((grid.width() + 3) * (grid.height() + 2) * 3);
    output.push_str(&border_row);
    output.push('\n');

    for row in grid.iter_row() {
        output.push(WALL_GLYPH);
        for coord in row {
            // Row coordinates come from the grid itself, so the lookup cannot miss.
            let tile = grid.tile(coord).unwrap_or(Tile::Wall);
            output.push(displayer.render_tile(coord, tile));
        }
        output.push(WALL_GLYPH);
        output.push('\n');
    }

    output.push_str(&border_row);
    output
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render(self, &PlainDisplay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::Orientation;
    use crate::maze::Maze;
    use crate::random::RandomSource;
    use crate::units::{Height, Width};

    struct GapAtFarEnd;
    impl RandomSource for GapAtFarEnd {
        fn coin_flip(&mut self) -> bool {
            true
        }
        fn strictly_between(&mut self, low: usize, high: usize) -> usize {
            (low + high) / 2
        }
    }

    fn scripted_maze(w: usize, h: usize) -> Maze {
        Maze::with_first_split(Width(w), Height(h), Orientation::Vertical, &mut GapAtFarEnd)
            .expect("valid maze dimensions")
    }

    #[test]
    fn render_three_by_three() {
        let maze = scripted_maze(3, 3);
        let expected = ["█████",
                        "█S█ █",
                        "█ █ █",
                        "█  E█",
                        "█████"]
            .join("\n");
        assert_eq!(maze.to_string(), expected);
        assert_eq!(maze.grid().to_string(), expected);
    }

    #[test]
    fn render_open_two_by_two() {
        let maze = scripted_maze(2, 2);
        assert_eq!(maze.to_string(), "████\n█S █\n█ E█\n████");
    }

    #[test]
    fn render_path() {
        let maze = scripted_maze(3, 3);
        let path = [GridCoordinate::new(0, 0),
                    GridCoordinate::new(0, 1),
                    GridCoordinate::new(0, 2),
                    GridCoordinate::new(1, 2),
                    GridCoordinate::new(2, 2)];
        let rendered = render(maze.grid(), &PathDisplay::new(&path));
        let expected = ["█████",
                        "█S█ █",
                        "█.█ █",
                        "█..E█",
                        "█████"]
            .join("\n");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn render_dimensions() {
        let maze = scripted_maze(11, 6);
        let rendered = maze.to_string();
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 6 + 2);
        assert!(lines.iter().all(|line| line.chars().count() == 11 + 2));
        assert!(lines[0].chars().all(|c| c == WALL_GLYPH));
        assert!(lines[7].chars().all(|c| c == WALL_GLYPH));
        assert!(lines.iter().all(|line| line.starts_with(WALL_GLYPH) && line.ends_with(WALL_GLYPH)));
        assert_eq!(rendered.matches('S').count(), 1);
        assert_eq!(rendered.matches('E').count(), 1);
    }
}
