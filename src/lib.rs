//! This crate is my take on the two classic ways of building a hash table, written to understand
//! them properly rather than to compete with [`std::collections::HashMap`].
//!
//! # Purpose
//! A hash table is easy to describe and surprisingly fiddly to get right. The two strategies here
//! fail in different ways: chaining degrades gracefully as chains get longer, while open
//! addressing has to worry about clustering, probe sequences that loop back on themselves and
//! removals that would otherwise break lookups for other keys. Writing both side by side, behind
//! the same [`HashTable`](collections::hash::HashTable) trait, makes those differences obvious.
//!
//! The tables map `i32` keys to `i32` values and hash with a simple, deterministic
//! [`LinearHash`](collections::hash::LinearHash), so the layout of a table is predictable enough to
//! reason about in tests (and on paper).
//!
//! # Error Handling
//! Operations that can reasonably fail return strongly typed errors: a struct per failure, each
//! implementing [`Error`](std::error::Error), and enums uniting them where one method can fail in
//! several ways. Looking up or removing an absent key is a
//! [`KeyNotFound`](collections::hash::KeyNotFound) rather than an [`Option`], because callers of
//! `remove` in particular usually want to know that nothing happened. Insertion can't fail short
//! of running out of memory.
//!
//! # Persistence
//! Every table can be written to and read back from a small text or binary format, see
//! [`persist`]. Loading replays entries through `insert`, so a loaded table is always a valid
//! table, even when the file was produced by the other strategy.
//!
//! # Dependencies
//! This crate uses `derive_more` to cut down on the boilerplate of error types and the `log`
//! facade for diagnostics (resizes and loads are logged at debug level). No logger is installed by
//! the library itself.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
#[cfg(feature = "persist")]
pub mod persist;

pub(crate) mod util;
