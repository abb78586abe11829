use std::fmt;

use crate::units::{ColumnIndex, RowIndex, Width};

/// A tile position on the grid. `x` is the column, `y` is the row, (0, 0) being the top left.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub x: usize,
    pub y: usize,
}

impl GridCoordinate {
    pub fn new(x: usize, y: usize) -> GridCoordinate {
        GridCoordinate { x, y }
    }

    #[inline]
    pub fn from_row_column_indices(col_index: ColumnIndex, row_index: RowIndex) -> GridCoordinate {
        GridCoordinate::new(col_index.0, row_index.0)
    }

    /// Inverse of the row major `y * width + x` tile buffer layout.
    #[inline]
    pub fn from_row_major_index(index: usize, width: Width) -> GridCoordinate {
        let Width(row_length) = width;
        GridCoordinate::new(index % row_length, index / row_length)
    }

    /// The coordinate one step away in `direction`, or None when that would go below zero.
    /// Going past the far edges is not checked here, the grid decides that.
    pub fn offset(&self, direction: CompassPrimary) -> Option<GridCoordinate> {
        let (x, y) = (self.x, self.y);
        match direction {
            CompassPrimary::North => {
                if y > 0 {
                    Some(GridCoordinate::new(x, y - 1))
                } else {
                    None
                }
            }
            CompassPrimary::South => y.checked_add(1).map(|south| GridCoordinate::new(x, south)),
            CompassPrimary::East => x.checked_add(1).map(|east| GridCoordinate::new(east, y)),
            CompassPrimary::West => {
                if x > 0 {
                    Some(GridCoordinate::new(x - 1, y))
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::South,
                                          CompassPrimary::East,
                                          CompassPrimary::West];
}
