//! A collection of models to represent deliveries and their assignment in the dispatch domain.

mod delivery;
pub use self::delivery::*;

mod assignment;
pub use self::assignment::*;
