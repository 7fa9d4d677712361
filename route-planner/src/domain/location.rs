//! Location identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque identifier for a vertex of the transit network.
///
/// A `Location` carries no attributes beyond its identity. Equality,
/// ordering and hashing all follow the wrapped number.
///
/// # Examples
///
/// ```
/// use route_planner::domain::Location;
///
/// let a = Location(7);
/// assert_eq!(a.to_string(), "7");
/// assert_eq!(a, Location::from(7));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(pub u32);

impl From<u32> for Location {
    fn from(id: u32) -> Self {
        Location(id)
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({})", self.0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
