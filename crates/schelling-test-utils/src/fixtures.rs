//! Layout fixtures and seeded randomness.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use schelling_core::{Category, Cell};
use schelling_engine::{Population, SimulationConfig};
use schelling_space::Grid;

/// A `ChaCha8Rng` seeded from `seed`.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Build a population from text rows.
///
/// `rows[y]` describes grid row `y`; character `x` of it is `.` for an
/// empty cell or a digit `1`-`4` for an agent of that category. Agents
/// are inserted row by row, left to right, which fixes the sweep order.
///
/// # Panics
///
/// Panics on ragged rows, an empty layout, or any other character.
pub fn population_from_rows(rows: &[&str]) -> Population {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    let grid = Grid::new(width, height).expect("layout must be non-empty");

    let mut agents = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len() as u32, width, "row {y} is ragged");
        for (x, ch) in row.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            let digit = ch
                .to_digit(10)
                .unwrap_or_else(|| panic!("unexpected character {ch:?} in row {y}"));
            let category = Category::new(digit as u8)
                .unwrap_or_else(|| panic!("category {digit} out of range in row {y}"));
            agents.push((Cell::new(x as u32, y as u32), category));
        }
    }
    Population::from_agents(grid, agents).expect("fixture layout is consistent")
}

/// A configuration whose extents match `rows`, with the given threshold
/// and iteration budget. `empty_ratio` is derived from the layout.
pub fn config_for_rows(rows: &[&str], similarity_threshold: f64, n_iterations: u32) -> SimulationConfig {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    let cells = rows.iter().map(|r| r.len()).sum::<usize>().max(1);
    let empty = rows
        .iter()
        .flat_map(|r| r.chars())
        .filter(|&c| c == '.')
        .count();
    SimulationConfig {
        width,
        height,
        empty_ratio: empty as f64 / cells as f64,
        similarity_threshold,
        n_iterations,
        races: 4,
        seed: 0,
    }
}
