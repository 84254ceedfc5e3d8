//! Ordered collections backed by a red-black tree, [`TreeMap`] and [`TreeSet`]. Ordering is
//! decided by a [`Comparator`], which defaults to the keys' own [`Ord`] implementation.

pub mod map;
pub mod set;

#[doc(inline)]
pub use map::{Comparator, NaturalOrder, TreeMap};
#[doc(inline)]
pub use set::TreeSet;
