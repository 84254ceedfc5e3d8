//! Contiguous collection types. Namely [`Array`] for fixed-size buffers and [`ArrayList`] for
//! contiguous collections that vary in size at runtime.

pub mod array;
pub mod array_list;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use array_list::ArrayList;
