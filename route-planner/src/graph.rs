//! Graph abstraction consumed by the planner.
//!
//! The planner never owns or mutates the network. It only needs to list
//! the edges incident to a location and read a handful of attributes from
//! each edge, so any storage can be plugged in by implementing these two
//! traits.

use crate::domain::{InvalidMode, Location, Mode};

/// An edge of a transit network as seen by the planner.
pub trait TransitEdge {
    /// The endpoint opposite `from`.
    ///
    /// For a self-loop this is `from` itself.
    fn other_endpoint(&self, from: Location) -> Location;

    /// The mode of travel along this edge.
    ///
    /// Returns an error for edges whose mode tag is not recognised; the
    /// planner treats those as untraversable.
    fn mode(&self) -> Result<Mode, InvalidMode>;

    /// Physical length of the edge in metres. Never negative.
    fn distance(&self) -> f64;

    /// Fixed price of the edge. Only meaningful for taxi edges.
    fn fixed_price(&self) -> f64;
}

/// A read-only transit network.
///
/// This abstraction allows the planner to be tested with small hand-built
/// networks.
pub trait TransitGraph {
    type Edge: TransitEdge;

    /// Whether `location` is a vertex of this graph.
    fn contains(&self, location: Location) -> bool;

    /// All edges usable from `location`.
    ///
    /// The order is not significant but must not change while a search is
    /// running. Unknown locations have no edges.
    fn edges(&self, location: Location) -> &[Self::Edge];
}
