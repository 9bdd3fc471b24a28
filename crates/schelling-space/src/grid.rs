//! 2D rectangular grid with 8-connected neighbourhood (cardinal + diagonal).

use crate::error::SpaceError;
use schelling_core::Cell;
use smallvec::SmallVec;

/// Neighbour list of a single cell. Never longer than 8.
pub type Neighbours = SmallVec<[Cell; 8]>;

/// All 8 relative offsets `(dx, dy)`, row above first, then the same row,
/// then the row below.
pub const OFFSETS_8: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A `width × height` grid of cells with 8-connected neighbourhood.
///
/// Each cell has coordinate `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`. Neighbours are the eight surrounding cells; any
/// offset landing outside the grid is dropped, so corner cells have 3
/// neighbours, edge cells 5 and interior cells 8.
///
/// The grid holds no occupancy state. It is `Copy` and cheap to pass
/// around by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    /// Maximum size of either dimension.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a new grid with `width * height` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`].
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Return `cell` unchanged if it lies inside the grid.
    pub fn check(&self, cell: Cell) -> Result<Cell, SpaceError> {
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(SpaceError::CellOutOfBounds {
                cell,
                bounds: format!("[0, {}) x [0, {})", self.width, self.height),
            })
        }
    }

    /// All cells in canonical order: `x` outer, `y` inner, i.e.
    /// `(0,0), (0,1), ..., (0,h-1), (1,0), ..., (w-1,h-1)`.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + 'static {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| Cell::new(x, y)))
    }

    /// The cell at `cell + (dx, dy)`, or `None` if that falls off the grid.
    pub fn offset(&self, cell: Cell, dx: i64, dy: i64) -> Option<Cell> {
        let x = i64::from(cell.x) + dx;
        let y = i64::from(cell.y) + dy;
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(Cell::new(x as u32, y as u32))
    }

    /// The in-bounds 8-connected neighbours of `cell`, in [`OFFSETS_8`] order.
    pub fn neighbours(&self, cell: Cell) -> Neighbours {
        OFFSETS_8
            .iter()
            .filter_map(|&(dx, dy)| self.offset(cell, dx, dy))
            .collect()
    }

    /// Largest neighbour count any cell of this grid has.
    pub fn max_neighbour_degree(&self) -> usize {
        let span = |n: u32| n.min(3) as usize;
        span(self.width) * span(self.height) - 1
    }
}
