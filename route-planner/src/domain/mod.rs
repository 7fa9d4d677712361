//! Domain types for the route planner.
//!
//! Value types shared by the graph abstraction and the planner. All types
//! enforce their invariants at construction time.

mod location;
mod mode;

pub use location::Location;
pub use mode::{InvalidMode, Mode};
