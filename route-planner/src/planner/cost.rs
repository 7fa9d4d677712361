//! Per-mode time and fare model.
//!
//! Time depends only on the edge and its mode. Money depends on the mode
//! the traveller is already in: staying on the same metro, bus or taxi is
//! free, switching into one pays a fresh boarding.

use crate::domain::{InvalidMode, Mode};
use crate::graph::TransitEdge;

/// Flat metro ticket.
pub const METRO_FARE: f64 = 4.40;

/// Flat bus ticket.
pub const BUS_FARE: f64 = 3.50;

/// Surcharge for hailing a taxi when not already in one.
pub const TAXI_PICKUP_SURCHARGE: f64 = 10.0;

/// Minutes needed to cover `distance` in `mode`.
pub fn travel_time(distance: f64, mode: Mode) -> f64 {
    distance / mode.speed() / 60.0
}

/// Ticket price for riding `edge` in `mode`, excluding any pickup surcharge.
pub fn fare<E: TransitEdge + ?Sized>(edge: &E, mode: Mode) -> f64 {
    match mode {
        Mode::Metro => METRO_FARE,
        Mode::Bus => BUS_FARE,
        Mode::Taxi => edge.fixed_price(),
        Mode::Walk => 0.0,
    }
}

/// The cost of taking one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Minutes spent on the edge.
    pub time: f64,
    /// Money paid to take the edge.
    pub cost: f64,
    /// Mode held after the edge.
    pub mode: Mode,
}

/// Cost of traversing `edge` while currently travelling in `current`.
///
/// Edges with an unrecognised mode are returned as errors; callers treat
/// them as unreachable.
pub fn transition<E: TransitEdge + ?Sized>(
    edge: &E,
    current: Mode,
) -> Result<Transition, InvalidMode> {
    let mode = edge.mode()?;
    let time = travel_time(edge.distance(), mode);

    let cost = match mode {
        Mode::Metro | Mode::Bus if current == mode => 0.0,
        Mode::Metro | Mode::Bus => fare(edge, mode),
        Mode::Taxi if current == Mode::Taxi => fare(edge, mode),
        Mode::Taxi => fare(edge, mode) + TAXI_PICKUP_SURCHARGE,
        Mode::Walk => 0.0,
    };

    Ok(Transition { time, cost, mode })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Location;

    struct TestEdge {
        mode: &'static str,
        distance: f64,
        price: f64,
    }

    impl TransitEdge for TestEdge {
        fn other_endpoint(&self, from: Location) -> Location {
            from
        }

        fn mode(&self) -> Result<Mode, InvalidMode> {
            Mode::parse(self.mode)
        }

        fn distance(&self) -> f64 {
            self.distance
        }

        fn fixed_price(&self) -> f64 {
            self.price
        }
    }

    fn edge(mode: &'static str, distance: f64) -> TestEdge {
        TestEdge {
            mode,
            distance,
            price: 0.0,
        }
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn travel_times() {
        assert_close(travel_time(1200.0, Mode::Metro), 1.0);
        assert_close(travel_time(720.0, Mode::Bus), 1.0);
        assert_close(travel_time(900.0, Mode::Taxi), 1.0);
        assert_close(travel_time(90.0, Mode::Walk), 1.0);
        assert_eq!(travel_time(0.0, Mode::Walk), 0.0);
    }

    #[test]
    fn flat_fares() {
        assert_eq!(fare(&edge("metro", 10.0), Mode::Metro), 4.40);
        assert_eq!(fare(&edge("bus", 10.0), Mode::Bus), 3.50);
        assert_eq!(fare(&edge("walk", 10.0), Mode::Walk), 0.0);

        let taxi = TestEdge {
            mode: "taxi",
            distance: 10.0,
            price: 8.0,
        };
        assert_eq!(fare(&taxi, Mode::Taxi), 8.0);
    }

    #[test]
    fn boarding_metro_pays_fare() {
        let t = transition(&edge("metro", 1200.0), Mode::Walk).unwrap();
        assert_eq!(t.cost, METRO_FARE);
        assert_eq!(t.mode, Mode::Metro);
        assert_close(t.time, 1.0);
    }

    #[test]
    fn staying_on_metro_is_free() {
        let t = transition(&edge("metro", 1200.0), Mode::Metro).unwrap();
        assert_eq!(t.cost, 0.0);
        assert_close(t.time, 1.0);
    }

    #[test]
    fn switching_metro_to_bus_pays_bus_fare() {
        let t = transition(&edge("bus", 720.0), Mode::Metro).unwrap();
        assert_eq!(t.cost, BUS_FARE);
        assert_eq!(t.mode, Mode::Bus);
    }

    #[test]
    fn taxi_pickup_surcharge_only_on_boarding() {
        let taxi = TestEdge {
            mode: "taxi",
            distance: 900.0,
            price: 8.0,
        };

        let boarding = transition(&taxi, Mode::Bus).unwrap();
        assert_eq!(boarding.cost, 18.0);
        assert_close(boarding.time, 1.0);

        let staying = transition(&taxi, Mode::Taxi).unwrap();
        assert_eq!(staying.cost, 8.0);
    }

    #[test]
    fn walking_is_always_free() {
        for current in Mode::ALL {
            let t = transition(&edge("walk", 90.0), current).unwrap();
            assert_eq!(t.cost, 0.0);
            assert_eq!(t.mode, Mode::Walk);
            assert_close(t.time, 1.0);
        }
    }

    #[test]
    fn unknown_mode_is_unreachable() {
        let result = transition(&edge("zeppelin", 10.0), Mode::Walk);
        assert_eq!(
            result,
            Err(InvalidMode {
                tag: "zeppelin".to_string()
            })
        );
    }
}
