//! Grid compliance test helpers.
//!
//! Invariants every [`Grid`] must satisfy regardless of shape. Reused by
//! the grid test module across square, strip and rectangular shapes.

use crate::grid::Grid;
use indexmap::IndexSet;

/// Assert that `cells()` yields exactly `cell_count()` distinct in-bounds cells.
pub fn assert_enumeration_complete(grid: &Grid) {
    let cells: IndexSet<_> = grid.cells().collect();
    assert_eq!(
        cells.len(),
        grid.cell_count(),
        "cells() produced duplicates or missed cells"
    );
    for cell in &cells {
        assert!(grid.contains(*cell), "{cell} enumerated but out of bounds");
    }
}

/// Assert that no cell lists itself or a duplicate among its neighbours.
pub fn assert_neighbours_distinct(grid: &Grid) {
    for cell in grid.cells() {
        let n = grid.neighbours(cell);
        let unique: IndexSet<_> = n.iter().copied().collect();
        assert_eq!(unique.len(), n.len(), "duplicate neighbour of {cell}");
        assert!(!unique.contains(&cell), "{cell} is its own neighbour");
    }
}

/// Assert the neighbour relation is symmetric over the whole grid.
pub fn assert_neighbours_symmetric(grid: &Grid) {
    for cell in grid.cells() {
        for nb in grid.neighbours(cell) {
            assert!(
                grid.neighbours(nb).contains(&cell),
                "{nb} in N({cell}) but {cell} not in N({nb})"
            );
        }
    }
}

/// Assert the neighbour count never exceeds the advertised maximum and
/// that the maximum is attained by some cell.
pub fn assert_max_degree_tight(grid: &Grid) {
    let max = grid
        .cells()
        .map(|cell| grid.neighbours(cell).len())
        .max()
        .unwrap_or(0);
    assert_eq!(max, grid.max_neighbour_degree());
}

/// Run every compliance check.
pub fn run_full_compliance(grid: &Grid) {
    assert_enumeration_complete(grid);
    assert_neighbours_distinct(grid);
    assert_neighbours_symmetric(grid);
    assert_max_degree_tight(grid);
}
