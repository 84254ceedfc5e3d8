//! Error types shared by every collection. Each type is re-exported by the collection modules that
//! can produce it.
use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A single index fell outside of the valid bounds for an operation. For insertion, the valid
/// bounds include `len`, for everything else they stop just before it.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// A span of indices `from..to` fell outside of the valid bounds of a collection, or was empty.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("Range {from}..{to} out of bounds for collection with {len} elements!")]
pub struct RangeOutOfBounds {
    pub from: usize,
    pub to: usize,
    pub len: usize,
}

/// The requested capacity can't be represented by a memory layout of at most [`isize::MAX`]
/// bytes.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// Any error that a container operation can produce.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error, From, TryInto, IsVariant)]
pub enum ContainerError {
    IndexOutOfBounds(IndexOutOfBounds),
    RangeOutOfBounds(RangeOutOfBounds),
    CapacityOverflow(CapacityOverflow),
}

impl IndexOutOfBounds {
    /// Checks that `index` refers to an existing element of a collection with `len` elements.
    pub(crate) const fn check(index: usize, len: usize) -> Result<(), IndexOutOfBounds> {
        if index < len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len })
        }
    }

    /// Checks that `index` is a valid insertion point, which includes `len` itself.
    pub(crate) const fn check_insert(index: usize, len: usize) -> Result<(), IndexOutOfBounds> {
        if index <= len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len })
        }
    }
}

impl RangeOutOfBounds {
    /// Checks that `to <= len` and `from < min(len, to)`, so the span is non-empty and fully
    /// populated.
    pub(crate) fn check(from: usize, to: usize, len: usize) -> Result<(), RangeOutOfBounds> {
        if to > len || from >= usize::min(len, to) {
            Err(RangeOutOfBounds { from, to, len })
        } else {
            Ok(())
        }
    }
}
