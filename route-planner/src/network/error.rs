//! Network construction error types.

use crate::domain::Location;

/// Errors that can occur while building or loading a network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Reading the network file failed
    #[error("failed to read network: {0}")]
    Io(#[from] std::io::Error),

    /// The network document is not valid JSON or has the wrong shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Edge length is negative, NaN or infinite
    #[error("invalid distance {distance} on edge {from} -> {to}")]
    InvalidDistance {
        from: Location,
        to: Location,
        distance: f64,
    },

    /// Edge price is negative, NaN or infinite
    #[error("invalid price {price} on edge {from} -> {to}")]
    InvalidPrice {
        from: Location,
        to: Location,
        price: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NetworkError::InvalidDistance {
            from: Location(1),
            to: Location(2),
            distance: -5.0,
        };
        assert_eq!(err.to_string(), "invalid distance -5 on edge 1 -> 2");

        let err = NetworkError::InvalidPrice {
            from: Location(3),
            to: Location(4),
            price: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "invalid price inf on edge 3 -> 4");
    }
}
