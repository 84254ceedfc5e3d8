//! A module containing [`ArrayList`] and associtated types.
//!
//! Currently, the only other included type is [`IntoIter`] for owned iteration over an ArrayList,
//! which is a re-export of [`array::IntoIter`](super::array::IntoIter). [`IterMut`](std::slice::IterMut)
//! and [`Iter`](std::slice::Iter) from [`std::slice`] are used for borrowed iteration.
//!
//! [`ArrayList`] is also re-exported under the parent module.

mod array_list;
mod iter;

pub use array_list::*;
pub use iter::*;
