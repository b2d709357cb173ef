//! A collection of reusable algorithms without dependencies on the dispatch logic.

pub mod clustering;
pub mod geo;
