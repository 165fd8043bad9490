//! A module containing [`ChainedHashTable`] and its borrowed iterator.
//!
//! Chain nodes aren't individually allocated. They live in a slab owned by the table and link to
//! each other by index.
//!
//! [`ChainedHashTable`] is also re-exported under the parent module.

mod chained_table;
mod iter;
mod node;
mod tests;

pub use chained_table::*;
pub use iter::*;
pub(crate) use node::*;
