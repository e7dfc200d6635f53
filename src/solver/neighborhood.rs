use crate::data::{Cost, FacilityId, Instance, Solution};
use crate::solver::calculate_cost;
use itertools::Itertools;
use rayon::prelude::*;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct EvaluatedFlip {
  pub facility: FacilityId,
  pub cost: Cost,
}

#[derive(Debug, Clone)]
pub struct EvaluatedSwap {
  pub pair: (FacilityId, FacilityId),
  pub cost: Cost,
}

pub fn flipped(solution: &Solution, facility: FacilityId) -> Solution {
  let mut neighbor = solution.clone();
  neighbor.flip(facility);
  return neighbor;
}

pub fn pair_flipped(solution: &Solution, pair: (FacilityId, FacilityId)) -> Solution {
  let mut neighbor = solution.clone();
  neighbor.flip(pair.0);
  neighbor.flip(pair.1);
  return neighbor;
}

// Costs are finite or +inf, never NaN
fn compare_costs(a: Cost, b: Cost) -> Ordering {
  return a.partial_cmp(&b).unwrap_or(Ordering::Equal);
}

pub fn compare_flips(a: &EvaluatedFlip, b: &EvaluatedFlip) -> Ordering {
  return compare_costs(a.cost, b.cost).then(a.facility.cmp(&b.facility));
}

fn compare_swaps(a: &EvaluatedSwap, b: &EvaluatedSwap) -> Ordering {
  return compare_costs(a.cost, b.cost).then(a.pair.cmp(&b.pair));
}

// Evaluates the given single-facility flips in parallel. The result keeps
// the input order.
pub fn evaluate_flips(
  inst: &Instance,
  solution: &Solution,
  facilities: &[FacilityId],
) -> Vec<EvaluatedFlip> {
  return facilities
    .par_iter()
    .map(|&facility| EvaluatedFlip {
      facility: facility,
      cost: calculate_cost(inst, &flipped(solution, facility)),
    })
    .collect();
}

// Cheapest single-facility flip. The ordering key includes the facility
// index, so ties resolve to the lowest index no matter how the parallel
// reduction interleaves.
pub fn best_flip(inst: &Instance, solution: &Solution) -> Option<EvaluatedFlip> {
  return (0..inst.n_facilities)
    .into_par_iter()
    .map(|facility| EvaluatedFlip {
      facility: facility,
      cost: calculate_cost(inst, &flipped(solution, facility)),
    })
    .min_by(compare_flips);
}

// Cheapest simultaneous flip of two distinct facilities, over all unordered
// pairs. Ties resolve to the lexicographically smallest pair.
pub fn best_swap(inst: &Instance, solution: &Solution) -> Option<EvaluatedSwap> {
  let pairs: Vec<(FacilityId, FacilityId)> =
    (0..inst.n_facilities).tuple_combinations().collect();

  return pairs
    .into_par_iter()
    .map(|pair| EvaluatedSwap {
      pair: pair,
      cost: calculate_cost(inst, &pair_flipped(solution, pair)),
    })
    .min_by(compare_swaps);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::solver::testing;

  #[test]
  fn flip_ties_break_towards_the_lowest_facility() {
    // Both facilities are interchangeable, so closing either one saves the
    // same amount
    let inst = testing::instance(vec![10.0, 10.0], vec![vec![1.0, 1.0], vec![1.0, 1.0]]);
    let both_open = testing::solution(&[true, true]);

    let best = best_flip(&inst, &both_open).unwrap();

    assert_eq!(best.facility, 0);
    assert_eq!(best.cost, 12.0);
  }

  #[test]
  fn swap_neighborhood_of_a_single_facility_is_empty() {
    let inst = testing::single_facility();
    let open = testing::solution(&[true]);

    assert!(best_swap(&inst, &open).is_none());
  }

  #[test]
  fn best_swap_flips_both_facilities_of_the_pair() {
    let inst = testing::split_clients();
    let both_open = testing::solution(&[true, true]);

    let best = best_swap(&inst, &both_open).unwrap();

    // The only pair closes everything, which is infeasible
    assert_eq!(best.pair, (0, 1));
    assert!(best.cost.is_infinite());
  }

  #[test]
  fn evaluated_flips_keep_the_input_order() {
    let inst = testing::split_clients();
    let both_open = testing::solution(&[true, true]);

    let moves = evaluate_flips(&inst, &both_open, &[1, 0]);

    assert_eq!(moves.len(), 2);
    assert_eq!(moves[0].facility, 1);
    assert_eq!(moves[1].facility, 0);
    // Closing either facility forces one client onto the expensive option
    assert_eq!(moves[0].cost, 111.0);
    assert_eq!(moves[1].cost, 111.0);
  }
}
