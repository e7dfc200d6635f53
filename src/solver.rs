pub mod filter_and_fan;
pub mod greedy;
mod neighborhood;
pub mod random_baseline;
pub mod swap_search;
pub mod switch_search;
pub mod tabu_search;

use crate::data::{Cost, Instance, Solution};
use std::error::Error;

// Total cost of a solution: every client is served by its cheapest open
// facility, on top of the one-time opening costs. A solution without any
// open facility has no valid assignment and evaluates to infinity.
pub fn calculate_cost(inst: &Instance, solution: &Solution) -> Cost {
  let mut cost = 0.0;

  for client in 0..inst.n_clients {
    let mut min_cost = std::f64::INFINITY;
    for facility in 0..inst.n_facilities {
      if solution.is_open(facility) {
        let assignment = inst.assignment_cost(client, facility);
        if assignment < min_cost {
          min_cost = assignment;
        }
      }
    }
    cost += min_cost;
  }

  for facility in 0..inst.n_facilities {
    if solution.is_open(facility) {
      cost += inst.opening_costs[facility];
    }
  }

  return cost;
}

pub fn verify_solution(
  inst: &Instance,
  solution: &Solution,
  claimed_cost: Cost,
) -> Result<(), Box<dyn Error>> {
  // Check:
  // 1. The solution covers every facility of the instance
  // 2. At least one facility is open
  // 3. The claimed cost matches a recomputation

  if solution.n_facilities() != inst.n_facilities {
    Err(format!(
      "Solution covers {} facilities but the instance has {}",
      solution.n_facilities(),
      inst.n_facilities
    ))?;
  }

  if solution.open_count() == 0 {
    Err("No facility is open")?;
  }

  let cost = calculate_cost(inst, solution);
  let tolerance = 1e-6 * cost.abs().max(1.0);
  if (cost - claimed_cost).abs() > tolerance {
    Err(format!(
      "Claimed cost {} does not match recomputed cost {}",
      claimed_cost, cost
    ))?;
  }

  Ok(())
}

pub fn print_solution(solution: &Solution) {
  let open: Vec<String> = solution
    .open_facilities()
    .iter()
    .map(|facility| facility.to_string())
    .collect();
  println!("{}", open.join(" "));
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::solver::testing;

  #[test]
  fn cost_serves_each_client_from_its_cheapest_open_facility() {
    let inst = testing::split_clients();

    assert_eq!(calculate_cost(&inst, &testing::solution(&[true, true])), 22.0);
    // 10 to open, client 0 pays 1, client 1 is forced onto the expensive option
    assert_eq!(
      calculate_cost(&inst, &testing::solution(&[true, false])),
      111.0
    );
  }

  #[test]
  fn cost_without_open_facilities_is_infinite() {
    let inst = testing::split_clients();

    assert!(calculate_cost(&inst, &Solution::all_closed(2)).is_infinite());
  }

  #[test]
  fn verify_accepts_consistent_solution() {
    let inst = testing::single_facility();

    assert!(verify_solution(&inst, &testing::solution(&[true]), 11.0).is_ok());
  }

  #[test]
  fn verify_rejects_closed_solution() {
    let inst = testing::single_facility();

    assert!(verify_solution(&inst, &Solution::all_closed(1), 0.0).is_err());
  }

  #[test]
  fn verify_rejects_mismatched_cost() {
    let inst = testing::single_facility();

    assert!(verify_solution(&inst, &testing::solution(&[true]), 12.0).is_err());
  }

  #[test]
  fn verify_rejects_wrong_solution_size() {
    let inst = testing::single_facility();

    assert!(verify_solution(&inst, &testing::solution(&[true, false]), 11.0).is_err());
  }
}
