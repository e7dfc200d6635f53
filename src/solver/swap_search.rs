use crate::data::{Cost, Instance, Solution};
use crate::solver::{calculate_cost, neighborhood};
use log::trace;

// Steepest descent over simultaneous flips of two distinct facilities. The
// pair neighborhood subsumes every solution the single-flip search can
// settle in, at a quadratic number of candidates per round; candidates are
// evaluated in parallel and the best one is committed afterwards.
pub fn improve_solution(inst: &Instance, initial_solution: &Solution) -> (Solution, Cost) {
  let mut current_solution = initial_solution.clone();
  let mut current_cost = calculate_cost(inst, &current_solution);

  trace!("Starting with {}", current_cost);
  loop {
    let maybe_move = neighborhood::best_swap(inst, &current_solution);
    let maybe_improvement = maybe_move.filter(|m| m.cost < current_cost);

    if let Some(next_move) = maybe_improvement {
      current_solution.flip(next_move.pair.0);
      current_solution.flip(next_move.pair.1);
      current_cost = next_move.cost;
      trace!("Found improvement to {}", current_cost);
    } else {
      trace!("Did not find improvement, stopping at {}", current_cost);
      break;
    }
  }

  return (current_solution, current_cost);
}
