//! Budget-constrained route planner.
//!
//! This module implements the core search that answers:
//! "What is the fastest way from here to there without spending more than K?"
//!
//! The search runs over `(location, mode)` states because fares depend on
//! the mode already held: riding on in the same metro, bus or taxi is cheaper
//! than boarding it fresh.

mod config;
mod cost;
mod route;
mod search;

pub use config::SearchConfig;
pub use cost::{
    BUS_FARE, METRO_FARE, TAXI_PICKUP_SURCHARGE, Transition, fare, transition, travel_time,
};
pub use route::{Route, RouteStep};
pub use search::{CancellationToken, Planner, RouteRequest, SearchError, find_best_route};
