//! The result of a successful search.

use std::fmt;

use crate::domain::{Location, Mode};

/// One stop along a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStep {
    pub location: Location,
    /// Mode used to arrive here. The origin is reached on foot.
    pub mode: Mode,
    /// Minutes elapsed since leaving the origin.
    pub elapsed_time: f64,
    /// Money spent since leaving the origin.
    pub spent: f64,
}

/// A budget-feasible route, fastest among those found.
///
/// Always has at least one step (the origin).
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    steps: Vec<RouteStep>,
}

impl Route {
    /// Build a route from its stops, origin first.
    ///
    /// Returns `None` when `steps` is empty.
    pub fn from_steps(steps: Vec<RouteStep>) -> Option<Self> {
        if steps.is_empty() {
            return None;
        }
        Some(Self { steps })
    }

    /// Build a route from its origin and the stops after it.
    pub(crate) fn new(origin: RouteStep, rest: Vec<RouteStep>) -> Self {
        let mut steps = Vec::with_capacity(rest.len() + 1);
        steps.push(origin);
        steps.extend(rest);
        Self { steps }
    }

    /// All stops, origin first.
    pub fn steps(&self) -> &[RouteStep] {
        &self.steps
    }

    /// The visited locations, origin first.
    pub fn path(&self) -> Vec<Location> {
        self.steps.iter().map(|step| step.location).collect()
    }

    pub fn origin(&self) -> Location {
        self.steps[0].location
    }

    pub fn destination(&self) -> Location {
        self.last().location
    }

    /// Total travel time in minutes.
    pub fn elapsed_time(&self) -> f64 {
        self.last().elapsed_time
    }

    /// Total money spent.
    pub fn spent(&self) -> f64 {
        self.last().spent
    }

    /// Number of edges taken.
    pub fn edge_count(&self) -> usize {
        self.steps.len() - 1
    }

    /// Modes used along the route, with consecutive repeats collapsed.
    pub fn modes_used(&self) -> Vec<Mode> {
        let mut modes: Vec<Mode> = self.steps[1..].iter().map(|step| step.mode).collect();
        modes.dedup();
        modes
    }

    /// Number of times a priced mode was boarded.
    pub fn boardings(&self) -> usize {
        self.steps
            .windows(2)
            .filter(|pair| pair[1].mode.is_priced() && pair[1].mode != pair[0].mode)
            .count()
    }

    fn last(&self) -> &RouteStep {
        &self.steps[self.steps.len() - 1]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, " -[{}]-> ", step.mode)?;
            }
            write!(f, "{}", step.location)?;
        }
        write!(
            f,
            " ({:.2} min, spent {:.2})",
            self.elapsed_time(),
            self.spent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: u32, mode: Mode, elapsed_time: f64, spent: f64) -> RouteStep {
        RouteStep {
            location: Location(id),
            mode,
            elapsed_time,
            spent,
        }
    }

    fn sample() -> Route {
        Route::from_steps(vec![
            step(1, Mode::Walk, 0.0, 0.0),
            step(2, Mode::Metro, 1.0, 4.4),
            step(3, Mode::Metro, 2.0, 4.4),
            step(4, Mode::Walk, 5.0, 4.4),
            step(5, Mode::Bus, 6.0, 7.9),
        ])
        .unwrap()
    }

    #[test]
    fn empty_steps_rejected() {
        assert!(Route::from_steps(vec![]).is_none());
    }

    #[test]
    fn accessors() {
        let route = sample();
        assert_eq!(route.origin(), Location(1));
        assert_eq!(route.destination(), Location(5));
        assert_eq!(route.elapsed_time(), 6.0);
        assert_eq!(route.spent(), 7.9);
        assert_eq!(route.edge_count(), 4);
        assert_eq!(
            route.path(),
            vec![Location(1), Location(2), Location(3), Location(4), Location(5)]
        );
    }

    #[test]
    fn modes_used_collapses_repeats() {
        assert_eq!(
            sample().modes_used(),
            vec![Mode::Metro, Mode::Walk, Mode::Bus]
        );
    }

    #[test]
    fn boardings_count_priced_switches() {
        assert_eq!(sample().boardings(), 2);
    }

    #[test]
    fn trivial_route() {
        let route = Route::from_steps(vec![step(1, Mode::Walk, 0.0, 0.0)]).unwrap();
        assert_eq!(route.edge_count(), 0);
        assert_eq!(route.elapsed_time(), 0.0);
        assert!(route.modes_used().is_empty());
        assert_eq!(route.boardings(), 0);
        assert_eq!(route.to_string(), "1 (0.00 min, spent 0.00)");
    }

    #[test]
    fn display() {
        let route = Route::from_steps(vec![
            step(1, Mode::Walk, 0.0, 0.0),
            step(2, Mode::Bus, 1.5, 3.5),
        ])
        .unwrap();
        assert_eq!(route.to_string(), "1 -[bus]-> 2 (1.50 min, spent 3.50)");
    }
}
