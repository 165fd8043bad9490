#![warn(missing_docs)]

pub mod error;
pub mod fmt;
pub mod logger;
