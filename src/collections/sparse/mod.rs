//! Sparse collections, indexed by integer keys that don't have to be contiguous.

pub mod plain_array;

#[doc(inline)]
pub use plain_array::PlainArray;
