//! Traits shared by the collections in this crate and their [`std`] counterparts, so that generic
//! code can swap one backing container for another.

pub mod map;
pub mod set;
mod tests;

#[doc(inline)]
pub use map::Map;
#[doc(inline)]
pub use set::Set;
