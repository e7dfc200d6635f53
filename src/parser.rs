use crate::data::{Cost, Instance};
use ndarray::{Array1, Array2};
use std::error::Error;

// ORLIB cap format: a header with the facility and client counts, one line
// per facility with its capacity (ignored here) and opening cost, then for
// every client a demand value (ignored) followed by the assignment costs to
// all facilities, wrapped over an arbitrary number of lines.
pub fn parse_instance(instance: &str) -> Result<Instance, Box<dyn Error>> {
  let mut tokens = instance.split_whitespace();

  let n_facilities: usize = tokens.next().ok_or("Facility count missing")?.parse()?;
  let n_clients: usize = tokens.next().ok_or("Client count missing")?.parse()?;

  if n_facilities == 0 {
    Err("Instance declares zero facilities")?;
  }
  if n_clients == 0 {
    Err("Instance declares zero clients")?;
  }

  let mut opening_costs = Array1::<Cost>::from_elem(n_facilities, 0.0);
  for facility in 0..n_facilities {
    // Capacity is not used in the uncapacitated problem
    tokens
      .next()
      .ok_or_else(|| format!("Capacity missing for facility {}", facility))?;
    let cost: Cost = tokens
      .next()
      .ok_or_else(|| format!("Opening cost missing for facility {}", facility))?
      .parse()?;
    check_cost(cost, &format!("opening cost of facility {}", facility))?;
    opening_costs[facility] = cost;
  }

  let mut assignment_costs = Vec::with_capacity(n_clients * n_facilities);
  for client in 0..n_clients {
    // Demand is not used either
    tokens
      .next()
      .ok_or_else(|| format!("Demand missing for client {}", client))?;
    for facility in 0..n_facilities {
      let cost: Cost = tokens
        .next()
        .ok_or_else(|| {
          format!(
            "Assignment cost missing for client {} and facility {}",
            client, facility
          )
        })?
        .parse()?;
      check_cost(
        cost,
        &format!("assignment cost of client {} at facility {}", client, facility),
      )?;
      assignment_costs.push(cost);
    }
  }

  let assignment_costs = Array2::from_shape_vec((n_clients, n_facilities), assignment_costs)?;

  Ok(Instance {
    n_facilities: n_facilities,
    n_clients: n_clients,
    opening_costs: opening_costs,
    assignment_costs: assignment_costs,
  })
}

fn check_cost(cost: Cost, what: &str) -> Result<(), Box<dyn Error>> {
  if !cost.is_finite() || cost < 0.0 {
    Err(format!("Invalid {}: {}", what, cost))?;
  }

  Ok(())
}
