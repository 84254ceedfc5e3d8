//! General-purpose containers.
//!
//! # Method
//! Sequential containers implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! covers most of the read-only slice functionality without repeating it. Keyed containers share
//! the [`Map`](traits::Map) and [`Set`](traits::Set) traits so that callers can swap backends.
//!
//! Each module is gated behind a cargo feature of the same name, all enabled by default.

#[cfg(feature = "circ")]
pub mod circ;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "light-weight")]
pub mod light_weight;
#[cfg(feature = "sparse")]
pub mod sparse;
#[cfg(feature = "traits")]
pub mod traits;
#[cfg(feature = "tree")]
pub mod tree;

#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, ContainerError, IndexOutOfBounds, RangeOutOfBounds};
