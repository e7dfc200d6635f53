//! Iterated search in the filter-and-fan style (Greistorfer and Rego):
//! perturb the current pair-flip optimum into a fan of candidates, polish
//! every candidate with the pair-flip search, and keep the best one as long
//! as it strictly improves. The first non-improving round ends the search.

use crate::data::{Cost, Instance, Solution};
use crate::solver::swap_search;
use log::{debug, info, trace};
use rand::{Rng, SeedableRng};
use rand_chacha;
use std::error::Error;

pub struct Config {
  pub max_iterations: usize,
  pub num_candidates: usize,
  pub seed: u64,
}

pub fn find_solution(
  inst: &Instance,
  initial_solution: &Solution,
  config: &Config,
) -> Result<(Solution, Cost), Box<dyn Error>> {
  if config.max_iterations == 0 {
    Err("max_iterations must be positive")?;
  }
  if config.num_candidates == 0 {
    Err("num_candidates must be positive")?;
  }

  let mut rng = rand_chacha::ChaChaRng::seed_from_u64(config.seed);

  let (mut current_solution, mut current_cost) =
    swap_search::improve_solution(inst, initial_solution);

  trace!("Starting with {}", current_cost);
  for iteration in 0..config.max_iterations {
    let mut best_candidate: Option<(Solution, Cost)> = None;

    for _ in 0..config.num_candidates {
      let perturbed = perturb(&current_solution, &mut rng);
      let (candidate_solution, candidate_cost) = swap_search::improve_solution(inst, &perturbed);

      let accept = match &best_candidate {
        Some((_, best_cost)) => candidate_cost < *best_cost,
        None => true,
      };
      if accept {
        best_candidate = Some((candidate_solution, candidate_cost));
      }
    }

    if let Some((candidate_solution, candidate_cost)) = best_candidate {
      if candidate_cost < current_cost {
        current_solution = candidate_solution;
        current_cost = candidate_cost;
        debug!("Improved to {} ({})", current_cost, iteration);
      } else {
        debug!(
          "No candidate beats {}, stopping ({})",
          current_cost, iteration
        );
        break;
      }
    }
  }

  info!("Stopping at {}", current_cost);

  return Ok((current_solution, current_cost));
}

// Flips about a fifth of the facility bits. Facilities are drawn
// independently, so a facility can be flipped twice and end up unchanged.
fn perturb<R: Rng>(solution: &Solution, rng: &mut R) -> Solution {
  let n_facilities = solution.n_facilities();
  let mut perturbed = solution.clone();

  for _ in 0..n_facilities / 5 {
    let facility = rng.gen_range(0, n_facilities);
    perturbed.flip(facility);
  }

  return perturbed;
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::solver::{greedy, testing};

  fn config(seed: u64) -> Config {
    return Config {
      max_iterations: 50,
      num_candidates: 5,
      seed: seed,
    };
  }

  #[test]
  fn never_worsens_the_polished_start() {
    let inst = testing::instance(
      vec![18.0, 1.0, 7.0, 9.0, 2.0],
      vec![
        vec![1.0, 10.0, 4.0, 6.0, 8.0],
        vec![1.0, 10.0, 6.0, 2.0, 9.0],
        vec![9.0, 2.0, 3.0, 5.0, 1.0],
        vec![4.0, 7.0, 2.0, 8.0, 3.0],
      ],
    );
    let (initial_solution, _) = greedy::find_solution(&inst);
    let (_, polished_cost) = swap_search::improve_solution(&inst, &initial_solution);

    let (_, cost) = find_solution(&inst, &initial_solution, &config(42)).unwrap();

    assert!(cost <= polished_cost);
  }

  #[test]
  fn is_reproducible_for_a_fixed_seed() {
    let inst = testing::instance(
      vec![18.0, 1.0, 7.0, 9.0, 2.0],
      vec![
        vec![1.0, 10.0, 4.0, 6.0, 8.0],
        vec![1.0, 10.0, 6.0, 2.0, 9.0],
        vec![9.0, 2.0, 3.0, 5.0, 1.0],
      ],
    );
    let (initial_solution, _) = greedy::find_solution(&inst);

    let first = find_solution(&inst, &initial_solution, &config(7)).unwrap();
    let second = find_solution(&inst, &initial_solution, &config(7)).unwrap();

    assert_eq!(first, second);
  }

  #[test]
  fn converges_on_a_single_facility() {
    // With one facility the perturbation size rounds down to zero flips,
    // so the first fan reproduces the current solution and the search
    // stops right away.
    let inst = testing::single_facility();
    let (initial_solution, _) = greedy::find_solution(&inst);

    let (solution, cost) = find_solution(&inst, &initial_solution, &config(3)).unwrap();

    assert_eq!(solution.open_facilities(), vec![0]);
    assert_eq!(cost, 11.0);
  }

  #[test]
  fn rejects_zero_parameters() {
    let inst = testing::single_facility();
    let (initial_solution, _) = greedy::find_solution(&inst);

    let no_iterations = Config {
      max_iterations: 0,
      num_candidates: 5,
      seed: 0,
    };
    assert!(find_solution(&inst, &initial_solution, &no_iterations).is_err());

    let no_candidates = Config {
      max_iterations: 50,
      num_candidates: 0,
      seed: 0,
    };
    assert!(find_solution(&inst, &initial_solution, &no_candidates).is_err());
  }
}
