//! A collection of various utility helpers.

mod error;
pub use self::error::*;

mod types;
pub use self::types::*;
