//! Neighbourhood evaluation and the satisfaction predicate.

use schelling_core::{Cell, Evaluation, Occupancy};
use schelling_space::Grid;

use crate::population::Population;

/// Count similar and different occupied neighbours of `cell` in `view`.
///
/// Examines the up-to-8 in-bounds neighbours from `grid`, skips empty
/// ones, and compares each occupant's category with the occupant of
/// `cell`. Returns `None` if `cell` itself is empty in `view`.
pub fn evaluate_in<V: Occupancy + ?Sized>(grid: &Grid, view: &V, cell: Cell) -> Option<Evaluation> {
    let category = view.occupant(cell)?;
    let mut evaluation = Evaluation::default();
    for neighbour in grid.neighbours(cell) {
        match view.occupant(neighbour) {
            Some(other) if other == category => evaluation.similar += 1,
            Some(_) => evaluation.different += 1,
            None => {}
        }
    }
    Some(evaluation)
}

/// [`evaluate_in`] against the live population.
pub fn evaluate(population: &Population, cell: Cell) -> Option<Evaluation> {
    evaluate_in(population.grid(), population, cell)
}

/// Whether an agent with `evaluation` accepts its neighbourhood.
///
/// An agent with no occupied neighbours is never satisfied. Otherwise it
/// is satisfied iff `similar / (similar + different) >= threshold`; it
/// relocates only when the fraction is strictly below the threshold.
pub fn is_satisfied(evaluation: &Evaluation, threshold: f64) -> bool {
    match evaluation.similarity() {
        None => false,
        Some(fraction) => fraction >= threshold,
    }
}
