//! Transport modes.

use std::fmt;
use std::str::FromStr;

/// Error returned when an edge carries an unrecognised mode tag.
///
/// The planner treats such edges as untraversable rather than failing
/// the whole search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transport mode: {tag:?}")]
pub struct InvalidMode {
    /// The tag that failed to parse.
    pub tag: String,
}

/// A way of travelling along an edge.
///
/// # Examples
///
/// ```
/// use route_planner::domain::Mode;
///
/// assert_eq!(Mode::parse("metro").unwrap(), Mode::Metro);
/// assert!(Mode::parse("ferry").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    Walk,
    Bus,
    Metro,
    Taxi,
}

impl Mode {
    /// All recognised modes.
    pub const ALL: [Mode; 4] = [Mode::Walk, Mode::Bus, Mode::Metro, Mode::Taxi];

    /// Parse a mode from its lowercase tag.
    pub fn parse(tag: &str) -> Result<Self, InvalidMode> {
        match tag {
            "walk" => Ok(Mode::Walk),
            "bus" => Ok(Mode::Bus),
            "metro" => Ok(Mode::Metro),
            "taxi" => Ok(Mode::Taxi),
            _ => Err(InvalidMode {
                tag: tag.to_string(),
            }),
        }
    }

    /// Returns the lowercase tag for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Walk => "walk",
            Mode::Bus => "bus",
            Mode::Metro => "metro",
            Mode::Taxi => "taxi",
        }
    }

    /// Travel speed in distance units per second.
    pub fn speed(self) -> f64 {
        match self {
            Mode::Metro => 20.0,
            Mode::Bus => 12.0,
            Mode::Taxi => 15.0,
            Mode::Walk => 1.5,
        }
    }

    /// Whether boarding this mode costs money.
    pub fn is_priced(self) -> bool {
        !matches!(self, Mode::Walk)
    }
}

impl FromStr for Mode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::parse(s)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_tags() {
        for mode in Mode::ALL {
            assert_eq!(Mode::parse(mode.as_str()).unwrap(), mode);
        }
    }

    #[test]
    fn reject_unknown_and_mixed_case() {
        assert!(Mode::parse("ferry").is_err());
        assert!(Mode::parse("Metro").is_err());
        assert!(Mode::parse("").is_err());
    }

    #[test]
    fn error_display() {
        let err = Mode::parse("tram").unwrap_err();
        assert_eq!(err.to_string(), "invalid transport mode: \"tram\"");
        assert_eq!(err.tag, "tram");
    }

    #[test]
    fn speeds() {
        assert_eq!(Mode::Metro.speed(), 20.0);
        assert_eq!(Mode::Bus.speed(), 12.0);
        assert_eq!(Mode::Taxi.speed(), 15.0);
        assert_eq!(Mode::Walk.speed(), 1.5);
    }

    #[test]
    fn only_walk_is_free() {
        assert!(!Mode::Walk.is_priced());
        assert!(Mode::Bus.is_priced());
        assert!(Mode::Metro.is_priced());
        assert!(Mode::Taxi.is_priced());
    }
}
