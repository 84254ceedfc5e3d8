//! A module containing [`TreeSet`] and its iterators.
//!
//! [`TreeSet`] is also re-exported under the parent module.

mod iter;
mod tree_set;

pub use iter::*;
pub use tree_set::*;
