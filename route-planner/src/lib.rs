//! Budget-constrained multimodal route planner.
//!
//! Finds the fastest route through a network of walk, bus, metro and taxi
//! edges without exceeding a spending budget.

pub mod domain;
pub mod graph;
pub mod network;
pub mod planner;
