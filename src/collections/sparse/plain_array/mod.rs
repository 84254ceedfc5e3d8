//! A module containing [`PlainArray`] and its iterators.

mod iter;
mod plain_array;
mod tests;

pub use iter::*;
pub use plain_array::*;
