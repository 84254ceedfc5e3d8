//! A module containing [`Queue`] and its iterators, [`Iter`] and [`IntoIter`].

mod iter;
mod queue;
mod tests;

pub use iter::*;
pub use queue::*;
