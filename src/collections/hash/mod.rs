//! Hash-based collections, [`HashMap`] and [`HashSet`]. Both share the same open-addressing
//! dictionary core, with a HashSet being a HashMap with unit values.

pub mod map;
pub mod set;

#[doc(inline)]
pub use map::HashMap;
#[doc(inline)]
pub use set::HashSet;
