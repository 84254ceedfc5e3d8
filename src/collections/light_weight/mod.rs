//! Compact associative collections for small numbers of entries. Currently just
//! [`LightWeightMap`].

pub mod map;

#[doc(inline)]
pub use map::LightWeightMap;
