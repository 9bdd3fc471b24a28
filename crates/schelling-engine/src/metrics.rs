//! Per-iteration progress records and the aggregate segregation metric.

use crate::evaluate::evaluate;
use crate::population::Population;

/// Progress signal emitted after each sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IterationReport {
    /// One-based iteration index.
    pub iteration: u32,
    /// Number of agents relocated during this sweep.
    pub moves: usize,
}

/// Mean similar-neighbour fraction over every occupied cell.
///
/// Each agent contributes `similar / (similar + different)`. An agent with
/// no occupied neighbours contributes `1.0`: isolation counts as maximal
/// similarity. Returns `None` when no cell is occupied.
pub fn average_similarity(population: &Population) -> Option<f64> {
    if population.occupied_len() == 0 {
        return None;
    }
    let total: f64 = population
        .agents()
        .map(|(cell, _)| {
            evaluate(population, cell)
                .and_then(|e| e.similarity())
                .unwrap_or(1.0)
        })
        .sum();
    Some(total / population.occupied_len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schelling_core::{Category, Cell};
    use schelling_space::Grid;

    fn cat(v: u8) -> Category {
        Category::new(v).unwrap()
    }

    #[test]
    fn single_isolated_agent_scores_one() {
        let grid = Grid::new(3, 3).unwrap();
        let pop = Population::from_agents(grid, [(Cell::new(1, 1), cat(1))]).unwrap();
        assert_eq!(average_similarity(&pop), Some(1.0));
    }

    #[test]
    fn empty_population_has_no_metric() {
        let grid = Grid::new(2, 2).unwrap();
        let pop = Population::from_agents(grid, std::iter::empty()).unwrap();
        assert_eq!(average_similarity(&pop), None);
    }

    #[test]
    fn alternating_strip_scores_zero() {
        let grid = Grid::new(4, 1).unwrap();
        let agents = [(0, 1), (1, 2), (2, 1), (3, 2)]
            .map(|(x, c)| (Cell::new(x, 0), cat(c)));
        let pop = Population::from_agents(grid, agents).unwrap();
        assert_eq!(average_similarity(&pop), Some(0.0));
    }

    #[test]
    fn mixes_isolated_and_neighboured_agents() {
        // "11.2": the two 1s score 1.0 each, the isolated 2 scores 1.0.
        let grid = Grid::new(4, 1).unwrap();
        let pop = Population::from_agents(
            grid,
            [
                (Cell::new(0, 0), cat(1)),
                (Cell::new(1, 0), cat(1)),
                (Cell::new(3, 0), cat(2)),
            ],
        )
        .unwrap();
        assert_eq!(average_similarity(&pop), Some(1.0));

        // "121": ends score 0, middle scores 0.
        let grid = Grid::new(3, 1).unwrap();
        let pop = Population::from_agents(
            grid,
            [
                (Cell::new(0, 0), cat(1)),
                (Cell::new(1, 0), cat(2)),
                (Cell::new(2, 0), cat(1)),
            ],
        )
        .unwrap();
        assert_eq!(average_similarity(&pop), Some(0.0));
    }

    #[test]
    fn partial_similarity_averages() {
        // "112": (0)=1/1, (1)=1/2, (2)=0/1 → mean 0.5
        let grid = Grid::new(3, 1).unwrap();
        let pop = Population::from_agents(
            grid,
            [
                (Cell::new(0, 0), cat(1)),
                (Cell::new(1, 0), cat(1)),
                (Cell::new(2, 0), cat(2)),
            ],
        )
        .unwrap();
        let avg = average_similarity(&pop).unwrap();
        assert!((avg - 0.5).abs() < 1e-12, "got {avg}");
    }
}
