use std::fmt;

/// The glyph for walls and for the border drawn around a rendered grid.
pub const WALL_GLYPH: char = '█';

/// The contents of a single grid cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Tile {
    Empty,
    Wall,
    Start,
    End,
}

impl Default for Tile {
    fn default() -> Tile {
        Tile::Empty
    }
}

impl Tile {
    /// Can a route go through this tile?
    #[inline]
    pub fn is_passable(self) -> bool {
        match self {
            Tile::Wall => false,
            Tile::Empty | Tile::Start | Tile::End => true,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Wall => WALL_GLYPH,
            Tile::Start => 'S',
            Tile::End => 'E',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
