//! A module containing [`TreeMap`], the [`Comparator`] trait and associated iterators.
//!
//! [`TreeMap`] is also re-exported under the parent module.

mod comparator;
mod iter;
mod node;
mod tests;
mod tree_map;

pub use comparator::*;
pub use iter::*;
pub(crate) use node::*;
pub use tree_map::*;
