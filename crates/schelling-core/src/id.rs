//! Strongly-typed identifiers: grid [`Cell`] coordinates and agent [`Category`].

use std::fmt;

/// Largest number of distinct agent categories a simulation may use.
pub const MAX_RACES: u8 = 4;

/// A grid cell, addressed by `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`.
///
/// The coordinate is the identity: two cells are the same cell iff their
/// coordinates are equal. Ordering is lexicographic on `(x, y)`, which
/// matches the canonical enumeration order of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column index.
    pub x: u32,
    /// Row index.
    pub y: u32,
}

impl Cell {
    /// Construct a cell from its coordinates.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Cell {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// The group an agent belongs to, in `1..=MAX_RACES`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(u8);

impl Category {
    /// Returns `None` unless `value` is in `1..=MAX_RACES`.
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= MAX_RACES {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Category for the zero-based group index produced by round-robin
    /// assignment (group `i` holds category `i + 1`).
    ///
    /// Returns `None` if `index >= MAX_RACES`.
    pub fn from_index(index: usize) -> Option<Self> {
        let value = u8::try_from(index.checked_add(1)?).ok()?;
        Self::new(value)
    }

    /// The raw category number.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based group index (`get() - 1`).
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Category {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_range_is_one_to_four() {
        assert!(Category::new(0).is_none());
        assert!(Category::new(5).is_none());
        for v in 1..=MAX_RACES {
            assert_eq!(Category::new(v).unwrap().get(), v);
        }
    }

    #[test]
    fn category_index_round_trips_through_from_index() {
        for i in 0..MAX_RACES as usize {
            let c = Category::from_index(i).unwrap();
            assert_eq!(c.index(), i);
        }
        assert!(Category::from_index(4).is_none());
        assert!(Category::from_index(usize::MAX).is_none());
    }

    #[test]
    fn try_from_reports_rejected_value() {
        assert_eq!(Category::try_from(9u8), Err(9));
        assert_eq!(Category::try_from(2u8).map(Category::get), Ok(2));
    }

    #[test]
    fn cell_orders_by_x_then_y() {
        assert!(Cell::new(0, 5) < Cell::new(1, 0));
        assert!(Cell::new(2, 1) < Cell::new(2, 3));
        assert_eq!(Cell::from((3, 4)), Cell::new(3, 4));
        assert_eq!(Cell::new(3, 4).to_string(), "(3, 4)");
    }
}
