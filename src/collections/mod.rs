//! Collection types.
//!
//! # Purpose
//! I wrote these types to learn about the data structures themselves: how each collision strategy
//! behaves as a table fills up, what removal costs, and what has to survive a trip to disk.

pub mod hash;
pub mod traits;
