//! A module containing [`Array`] and associtated types.
//!
//! Currently, the only other included type is [`IntoIter`] for owned iteration over an Array.
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used for
//! borrowed iteration.
//!
//! Array is the fixed-size backing buffer for [`ArrayList`](super::ArrayList),
//! [`Queue`](crate::collections::circ::Queue) and the buckets of
//! [`HashMap`](crate::collections::hash::HashMap).

mod array;
mod iter;

pub use array::*;
pub use iter::*;
