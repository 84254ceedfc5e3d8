//! A library of application-level containers: growable lists, a circular queue, a sparse
//! integer-keyed array, hash-based and compact hashed maps, and ordered trees.
//!
//! # Error Handling
//! Fallible operations come in pairs. The `try_` variant returns a [`Result`] with a strongly typed
//! error (such as [`IndexOutOfBounds`](collections::contiguous::array_list::IndexOutOfBounds)),
//! while the plain variant panics with that error's message. Validation always happens before any
//! mutation, so a failed call leaves the container untouched.
//!
//! Capacity overflow is reported the same way, although in practice it is only reachable by asking
//! for an absurd capacity up front.
//!
//! # Dependencies
//! This crate uses `std` and depends only on some derive macros, because they remove the need for
//! some very repetitive programming. [`Vec`] isn't used anywhere, every container is built from
//! [`Array`](collections::contiguous::Array) or raw allocations.
//!
//! # Features
//! Each module under [`collections`] has a feature of the same name, see the crate manifest.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
