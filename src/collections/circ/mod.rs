//! Circular buffer collections. Currently just [`Queue`], a FIFO queue which doubles its capacity
//! instead of rejecting elements once full.

pub mod queue;

#[doc(inline)]
pub use queue::Queue;
