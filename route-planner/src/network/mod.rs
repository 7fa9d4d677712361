//! In-memory transit network.
//!
//! An adjacency-list implementation of [`TransitGraph`]. Each location owns
//! the list of edges that can be taken from it; an undirected edge is stored
//! once under each endpoint.

mod document;
mod error;

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::{InvalidMode, Location, Mode};
use crate::graph::{TransitEdge, TransitGraph};

pub use document::{EdgeRecord, NetworkDocument};
pub use error::NetworkError;

/// An edge stored in a [`Network`].
#[derive(Debug, Clone)]
pub struct NetworkEdge {
    /// Insertion index, shared by both halves of an undirected edge.
    id: usize,
    from: Location,
    to: Location,
    mode: Result<Mode, InvalidMode>,
    distance: f64,
    price: f64,
    directed: bool,
}

impl NetworkEdge {
    /// The raw mode tag, valid or not.
    pub fn tag(&self) -> &str {
        match &self.mode {
            Ok(mode) => mode.as_str(),
            Err(invalid) => &invalid.tag,
        }
    }
}

impl TransitEdge for NetworkEdge {
    fn other_endpoint(&self, from: Location) -> Location {
        if from == self.from { self.to } else { self.from }
    }

    fn mode(&self) -> Result<Mode, InvalidMode> {
        self.mode.clone()
    }

    fn distance(&self) -> f64 {
        self.distance
    }

    fn fixed_price(&self) -> f64 {
        self.price
    }
}

/// A multimodal transit network.
///
/// Parallel edges between the same pair of locations are kept; the planner
/// considers every one of them.
#[derive(Debug, Clone, Default)]
pub struct Network {
    adjacency: BTreeMap<Location, Vec<NetworkEdge>>,
    edge_count: usize,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location with no edges. Adding an existing location is a no-op.
    pub fn add_location(&mut self, location: Location) {
        self.adjacency.entry(location).or_default();
    }

    /// Add an undirected edge of a free or flat-fare mode.
    pub fn add_edge(
        &mut self,
        a: Location,
        b: Location,
        mode: Mode,
        distance: f64,
    ) -> Result<(), NetworkError> {
        self.insert(a, b, Ok(mode), distance, 0.0, false)
    }

    /// Add an edge that can only be taken from `from` to `to`.
    pub fn add_directed_edge(
        &mut self,
        from: Location,
        to: Location,
        mode: Mode,
        distance: f64,
    ) -> Result<(), NetworkError> {
        self.insert(from, to, Ok(mode), distance, 0.0, true)
    }

    /// Add an undirected taxi edge with its fixed price.
    pub fn add_taxi(
        &mut self,
        a: Location,
        b: Location,
        distance: f64,
        price: f64,
    ) -> Result<(), NetworkError> {
        self.insert(a, b, Ok(Mode::Taxi), distance, price, false)
    }

    /// Add an undirected edge from a raw mode tag.
    ///
    /// Unrecognised tags are accepted; such edges are kept in the network
    /// but are never traversed by the planner.
    pub fn add_edge_tagged(
        &mut self,
        a: Location,
        b: Location,
        tag: &str,
        distance: f64,
        price: f64,
    ) -> Result<(), NetworkError> {
        self.insert(a, b, Mode::parse(tag), distance, price, false)
    }

    fn insert(
        &mut self,
        from: Location,
        to: Location,
        mode: Result<Mode, InvalidMode>,
        distance: f64,
        price: f64,
        directed: bool,
    ) -> Result<(), NetworkError> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(NetworkError::InvalidDistance { from, to, distance });
        }
        if !price.is_finite() || price < 0.0 {
            return Err(NetworkError::InvalidPrice { from, to, price });
        }

        let edge = NetworkEdge {
            id: self.edge_count,
            from,
            to,
            mode,
            distance,
            price,
            directed,
        };
        self.edge_count += 1;

        self.add_location(to);
        // A self-loop is stored once.
        if !directed && from != to {
            self.adjacency.entry(to).or_default().push(edge.clone());
        }
        self.adjacency.entry(from).or_default().push(edge);

        Ok(())
    }

    /// Number of locations.
    pub fn location_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges, counting an undirected edge once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All locations in ascending order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.adjacency.keys().copied()
    }

    /// Each edge once, in insertion order.
    fn unique_edges(&self) -> Vec<&NetworkEdge> {
        let mut edges: Vec<&NetworkEdge> = self.adjacency.values().flatten().collect();
        edges.sort_by_key(|edge| edge.id);
        edges.dedup_by_key(|edge| edge.id);
        edges
    }

    /// Parse a network from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, NetworkError> {
        let document: NetworkDocument = serde_json::from_str(json)?;
        Self::from_document(&document)
    }

    /// Load a network from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Build a network from a parsed document.
    pub fn from_document(document: &NetworkDocument) -> Result<Self, NetworkError> {
        let mut network = Network::new();
        for location in &document.locations {
            network.add_location(*location);
        }
        for record in &document.edges {
            network.insert(
                record.from,
                record.to,
                Mode::parse(&record.mode),
                record.distance,
                record.price.unwrap_or(0.0),
                record.directed,
            )?;
        }
        Ok(network)
    }

    /// Describe this network as a document.
    pub fn to_document(&self) -> NetworkDocument {
        NetworkDocument {
            locations: self.locations().collect(),
            edges: self
                .unique_edges()
                .into_iter()
                .map(|edge| EdgeRecord {
                    from: edge.from,
                    to: edge.to,
                    mode: edge.tag().to_string(),
                    distance: edge.distance,
                    price: (edge.price != 0.0).then_some(edge.price),
                    directed: edge.directed,
                })
                .collect(),
        }
    }

    /// Serialize this network as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, NetworkError> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }
}

impl TransitGraph for Network {
    type Edge = NetworkEdge;

    fn contains(&self, location: Location) -> bool {
        self.adjacency.contains_key(&location)
    }

    fn edges(&self, location: Location) -> &[NetworkEdge] {
        self.adjacency
            .get(&location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
