//! Tabu search over the single-flip neighborhood.
//!
//! The tabu list holds whole recently visited solutions, not move
//! attributes. Note that the search only ever moves to a neighbor that
//! beats the best cost found so far; when no admissible neighbor does, it
//! holds its position instead of taking the least bad move. This is weaker
//! than the textbook method (Glover, "Tabu Search - Part I", ORSA Journal
//! on Computing 1989), which accepts non-improving moves to escape local
//! optima, and it means the search can stall inside one basin until the
//! iteration limit is reached.

use crate::data::{Cost, FacilityId, Instance, Solution};
use crate::solver::{calculate_cost, neighborhood};
use log::{info, trace};
use std::error::Error;

pub struct Config {
  pub max_iterations: usize,
  pub tenure: usize,
}

// Fixed-capacity ring of recently visited solutions. Once full, the oldest
// entry is overwritten. Membership is exact structural equality, checked by
// a linear scan; at the usual tenure of about 5 a set is not worth it.
struct TabuList {
  entries: Vec<Solution>,
  tenure: usize,
  inserted: usize,
}

impl TabuList {
  fn new(tenure: usize) -> TabuList {
    return TabuList {
      entries: Vec::with_capacity(tenure),
      tenure: tenure,
      inserted: 0,
    };
  }

  fn contains(&self, solution: &Solution) -> bool {
    return self.entries.iter().any(|entry| entry == solution);
  }

  fn insert(&mut self, solution: Solution) {
    if self.entries.len() < self.tenure {
      self.entries.push(solution);
    } else {
      self.entries[self.inserted % self.tenure] = solution;
    }
    self.inserted += 1;
  }
}

pub fn find_solution(
  inst: &Instance,
  initial_solution: &Solution,
  config: &Config,
) -> Result<(Solution, Cost), Box<dyn Error>> {
  if config.max_iterations == 0 {
    Err("max_iterations must be positive")?;
  }
  if config.tenure == 0 {
    Err("tenure must be positive")?;
  }

  let mut current_solution = initial_solution.clone();
  let mut best_solution = current_solution.clone();
  let mut best_cost = calculate_cost(inst, &current_solution);
  let mut tabu_list = TabuList::new(config.tenure);

  trace!("Starting with {}", best_cost);
  for iteration in 0..config.max_iterations {
    let candidates: Vec<FacilityId> = (0..inst.n_facilities)
      .filter(|&facility| {
        !tabu_list.contains(&neighborhood::flipped(&current_solution, facility))
      })
      .collect();

    let mut moves = neighborhood::evaluate_flips(inst, &current_solution, &candidates);
    moves.sort_by(neighborhood::compare_flips);

    let maybe_improvement = moves.into_iter().find(|m| m.cost < best_cost);

    if let Some(next_move) = maybe_improvement {
      current_solution.flip(next_move.facility);
      best_solution = current_solution.clone();
      best_cost = next_move.cost;
      tabu_list.insert(current_solution.clone());
      trace!("Moved to {} ({})", best_cost, iteration);
      #[cfg(debug_assertions)]
      crate::solver::verify_solution(inst, &current_solution, best_cost)
        .expect("Verification failed");
    } else {
      trace!("No admissible neighbor beats {} ({})", best_cost, iteration);
    }
  }

  info!(
    "Stopping after {} iterations at {}",
    config.max_iterations, best_cost
  );

  return Ok((best_solution, best_cost));
}
