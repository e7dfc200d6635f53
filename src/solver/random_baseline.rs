use crate::data::{Cost, Instance, Solution};
use rand::Rng;
use std::error::Error;

// Opens exactly `open_count` distinct facilities drawn uniformly at random.
// The returned total covers the opening costs only, without any assignment
// cost; the baseline is used to calibrate the opening-cost scale of an
// instance, not to produce serviceable solutions.
pub fn find_solution<R: Rng>(
  inst: &Instance,
  open_count: usize,
  rng: &mut R,
) -> Result<(Solution, Cost), Box<dyn Error>> {
  if open_count == 0 {
    Err("open_count must be positive")?;
  }
  if open_count > inst.n_facilities {
    Err(format!(
      "open_count {} exceeds the {} available facilities",
      open_count, inst.n_facilities
    ))?;
  }

  let mut solution = Solution::all_closed(inst.n_facilities);
  let mut total_cost = 0.0;

  let mut opened = 0;
  while opened < open_count {
    let facility = rng.gen_range(0, inst.n_facilities);
    if !solution.is_open(facility) {
      solution.open[facility] = true;
      total_cost += inst.opening_costs[facility];
      opened += 1;
    }
  }

  return Ok((solution, total_cost));
}
