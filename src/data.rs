use ndarray::{Array1, Array2};

pub type FacilityId = usize;
pub type ClientId = usize;
pub type Cost = f64;

#[derive(Debug, Clone)]
pub struct Instance {
  pub n_facilities: usize,
  pub n_clients: usize,

  pub opening_costs: Array1<Cost>,
  // Shape: n_clients x n_facilities
  pub assignment_costs: Array2<Cost>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
  pub open: Array1<bool>,
}

impl Instance {
  pub fn assignment_cost(&self, client: ClientId, facility: FacilityId) -> Cost {
    return self.assignment_costs[[client, facility]];
  }

  pub fn shape(&self) -> (usize, usize) {
    return (self.n_clients, self.n_facilities);
  }
}

impl Solution {
  pub fn all_closed(n_facilities: usize) -> Solution {
    return Solution {
      open: Array1::from_elem(n_facilities, false),
    };
  }

  pub fn is_open(&self, facility: FacilityId) -> bool {
    return self.open[facility];
  }

  pub fn flip(&mut self, facility: FacilityId) {
    self.open[facility] = !self.open[facility];
  }

  pub fn open_facilities(&self) -> Vec<FacilityId> {
    return self
      .open
      .iter()
      .enumerate()
      .filter(|(_, &open)| open)
      .map(|(facility, _)| facility)
      .collect();
  }

  pub fn open_count(&self) -> usize {
    return self.open.iter().filter(|&&open| open).count();
  }

  pub fn n_facilities(&self) -> usize {
    return self.open.len();
  }
}
