use crate::data::{Cost, Instance, Solution};
use log::trace;

// Builds a solution one client at a time: each client is assigned to the
// facility that is cheapest to serve it right now, paying the opening cost
// on first use. Ties go to the lowest facility index. Deterministic.
pub fn find_solution(inst: &Instance) -> (Solution, Cost) {
  let mut solution = Solution::all_closed(inst.n_facilities);
  let mut total_cost = 0.0;

  for client in 0..inst.n_clients {
    let mut min_cost = std::f64::INFINITY;
    let mut best_facility = 0;

    for facility in 0..inst.n_facilities {
      let assignment = inst.assignment_cost(client, facility);
      let cost = if solution.is_open(facility) {
        assignment
      } else {
        assignment + inst.opening_costs[facility]
      };

      if cost < min_cost {
        min_cost = cost;
        best_facility = facility;
      }
    }

    if !solution.is_open(best_facility) {
      solution.open[best_facility] = true;
      total_cost += inst.opening_costs[best_facility];
      trace!("Opened facility {} for client {}", best_facility, client);
    }
    total_cost += inst.assignment_cost(client, best_facility);
  }

  return (solution, total_cost);
}
