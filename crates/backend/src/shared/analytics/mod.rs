//! In-memory analytics over order items: filtering, grouped aggregation,
//! headline rollups and Pareto concentration.
//!
//! Everything here is a pure function of its inputs; callers pass borrowed
//! views (`&[&OrderItem]`) and get freshly built rows back.

pub mod aggregation;
pub mod filter;
pub mod pareto;
pub mod rollups;

pub use filter::SalesFilter;
pub use rollups::Rollups;
