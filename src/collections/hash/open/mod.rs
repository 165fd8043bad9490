//! A module containing [`OpenAddressHashTable`] and its borrowed iterator.
//!
//! [`OpenAddressHashTable`] is also re-exported under the parent module.

mod iter;
mod open_table;
mod slot;

pub use iter::*;
pub use open_table::*;
pub(crate) use slot::*;
