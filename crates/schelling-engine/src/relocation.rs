//! The relocation rule: unsatisfied agents move to a random empty cell.

use rand::Rng;

use schelling_core::{Cell, InvariantViolation, Occupancy};

use crate::evaluate::{evaluate_in, is_satisfied};
use crate::population::Population;

/// Relocate the agent at `cell` if it is unsatisfied.
///
/// Satisfaction is judged against `view` (the sweep snapshot during a
/// run); the destination is a uniformly random empty cell of the live
/// `population`, which may happen to be adjacent to the origin. Returns
/// whether a move occurred. A cell that is empty in `view` never moves.
pub fn attempt_move<V, R>(
    population: &mut Population,
    view: &V,
    cell: Cell,
    threshold: f64,
    rng: &mut R,
) -> Result<bool, InvariantViolation>
where
    V: Occupancy + ?Sized,
    R: Rng + ?Sized,
{
    let Some(evaluation) = evaluate_in(population.grid(), view, cell) else {
        return Ok(false);
    };
    if is_satisfied(&evaluation, threshold) {
        return Ok(false);
    }
    let target = population.random_empty_cell(rng)?;
    population.relocate(cell, target)?;
    Ok(true)
}
