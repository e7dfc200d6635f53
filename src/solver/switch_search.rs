use crate::data::{Cost, Instance, Solution};
use crate::solver::{calculate_cost, neighborhood};
use log::trace;

// Steepest descent over single-facility flips: every round scans the whole
// neighborhood and applies the single best move, as long as it strictly
// improves the current cost.
pub fn improve_solution(inst: &Instance, initial_solution: &Solution) -> (Solution, Cost) {
  let mut current_solution = initial_solution.clone();
  let mut current_cost = calculate_cost(inst, &current_solution);

  trace!("Starting with {}", current_cost);
  loop {
    let maybe_move = neighborhood::best_flip(inst, &current_solution);
    let maybe_improvement = maybe_move.filter(|m| m.cost < current_cost);

    if let Some(next_move) = maybe_improvement {
      current_solution.flip(next_move.facility);
      current_cost = next_move.cost;
      trace!("Found improvement to {}", current_cost);
    } else {
      trace!("Did not find improvement, stopping at {}", current_cost);
      break;
    }
  }

  return (current_solution, current_cost);
}
