//! Core crate contains the main building blocks of the delivery dispatch engine: priority
//! ordering, proximity clustering and capacity bounded driver assignment with its derived
//! reporting views.
//!

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod algorithms;
pub mod dispatch;
pub mod models;
pub mod prelude;
pub mod session;
pub mod utils;
