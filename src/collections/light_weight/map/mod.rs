//! A module containing [`LightWeightMap`] and its iterators.

mod iter;
mod light_weight_map;
mod tests;

pub use iter::*;
pub use light_weight_map::*;
