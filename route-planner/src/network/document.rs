//! JSON document format for networks.

use serde::{Deserialize, Serialize};

use crate::domain::Location;

/// A network as stored on disk.
///
/// Locations referenced by edges are added implicitly, so `locations` only
/// needs to list isolated ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    #[serde(default)]
    pub locations: Vec<Location>,
    pub edges: Vec<EdgeRecord>,
}

/// One edge of a [`NetworkDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: Location,
    pub to: Location,
    /// Mode tag. Kept as a string so unknown modes survive loading.
    pub mode: String,
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub directed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default() {
        let record: EdgeRecord =
            serde_json::from_str(r#"{ "from": 1, "to": 2, "mode": "bus", "distance": 10.5 }"#)
                .unwrap();

        assert_eq!(record.price, None);
        assert!(!record.directed);
        assert_eq!(record.distance, 10.5);
    }

    #[test]
    fn locations_default_to_empty() {
        let document: NetworkDocument = serde_json::from_str(r#"{ "edges": [] }"#).unwrap();
        assert!(document.locations.is_empty());
    }

    #[test]
    fn omits_default_fields_when_writing() {
        let record = EdgeRecord {
            from: Location(1),
            to: Location(2),
            mode: "walk".to_string(),
            distance: 5.0,
            price: None,
            directed: false,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"from":1,"to":2,"mode":"walk","distance":5.0}"#);
    }
}
