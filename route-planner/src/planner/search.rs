//! Budget-constrained route search.
//!
//! A label-setting best-first search over `(location, mode)` states. The
//! frontier is ordered by elapsed time, so the first time the destination is
//! popped its route is the fastest one that stays within the budget. Money is
//! never optimised, only checked against the budget and used for dominance
//! pruning.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{self, AtomicBool};

use tracing::{debug, trace};

use crate::domain::{Location, Mode};
use crate::graph::{TransitEdge, TransitGraph};

use super::config::SearchConfig;
use super::cost::transition;
use super::route::{Route, RouteStep};

/// Slack allowed when comparing accumulated spend against the budget.
/// Decimal fares such as 4.40 do not sum exactly in binary.
const BUDGET_TOLERANCE: f64 = 1e-9;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Every budget-feasible state was explored without reaching the destination
    #[error("no route from {start} to {destination} within budget {budget}")]
    NoFeasibleRoute {
        start: Location,
        destination: Location,
        budget: f64,
    },

    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),

    /// Start or destination is not part of the network
    #[error("location {0} is not in the network")]
    UnknownLocation(Location),

    /// The caller cancelled the search
    #[error("search cancelled")]
    Cancelled,

    /// The configured expansion cap was reached
    #[error("search gave up after {0} expansions")]
    ExpansionLimit(usize),
}

/// Request for route search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    pub start: Location,
    pub destination: Location,
    /// Maximum total spend. Zero still allows walking.
    pub budget: f64,
}

impl RouteRequest {
    /// Create a new route request.
    pub fn new(start: Location, destination: Location, budget: f64) -> Self {
        Self {
            start,
            destination,
            budget,
        }
    }

    /// Validate the request against the network it will run on.
    pub fn validate<G: TransitGraph>(&self, graph: &G) -> Result<(), SearchError> {
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(SearchError::InvalidRequest(format!(
                "budget must be a non-negative number, got {}",
                self.budget
            )));
        }

        for location in [self.start, self.destination] {
            if !graph.contains(location) {
                return Err(SearchError::UnknownLocation(location));
            }
        }

        Ok(())
    }
}

/// Handle for cancelling a running search from another thread.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every search holding this token to stop.
    pub fn cancel(&self) {
        self.0.store(true, atomic::Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(atomic::Ordering::Relaxed)
    }
}

/// A partial route. Never modified after it is pushed into the arena.
#[derive(Debug, Clone, Copy)]
struct SearchState {
    elapsed_time: f64,
    spent: f64,
    location: Location,
    /// Mode used to arrive at `location`.
    mode: Mode,
    /// Arena index of the state this one was reached from.
    parent: Option<usize>,
}

impl SearchState {
    fn initial(start: Location) -> Self {
        Self {
            elapsed_time: 0.0,
            spent: 0.0,
            location: start,
            mode: Mode::Walk,
            parent: None,
        }
    }

    fn step(&self) -> RouteStep {
        RouteStep {
            location: self.location,
            mode: self.mode,
            elapsed_time: self.elapsed_time,
            spent: self.spent,
        }
    }
}

/// Frontier entry. `BinaryHeap` is a max-heap, so the ordering is reversed:
/// the earliest state wins, and among equal times the one pushed first.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    elapsed_time: f64,
    /// Arena index, which doubles as insertion order.
    index: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .elapsed_time
            .total_cmp(&self.elapsed_time)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// `(time, spent)` pair already expanded for some `(location, mode)`.
#[derive(Debug, Clone, Copy)]
struct Label {
    elapsed_time: f64,
    spent: f64,
}

impl Label {
    fn dominates(&self, other: &Label) -> bool {
        self.elapsed_time <= other.elapsed_time && self.spent <= other.spent
    }
}

/// Expanded labels per `(location, mode)`.
///
/// Only mutually non-dominated labels are kept, so a stronger record is
/// never replaced by a weaker one.
#[derive(Debug, Default)]
struct VisitedRecords {
    labels: HashMap<(Location, Mode), Vec<Label>>,
}

impl VisitedRecords {
    /// Record `label` for `key` unless an existing label dominates it.
    ///
    /// Returns `false` when the label is dominated and should not be expanded.
    fn insert(&mut self, key: (Location, Mode), label: Label) -> bool {
        let labels = self.labels.entry(key).or_default();
        if labels.iter().any(|existing| existing.dominates(&label)) {
            return false;
        }
        labels.retain(|existing| !label.dominates(existing));
        labels.push(label);
        true
    }
}

/// Counters reported in logs.
#[derive(Debug, Default)]
struct SearchStats {
    expansions: usize,
    pruned: usize,
    pushed: usize,
}

/// Route planner over a borrowed network.
pub struct Planner<'a, G: TransitGraph> {
    graph: &'a G,
    config: &'a SearchConfig,
    cancellation: Option<CancellationToken>,
}

impl<'a, G: TransitGraph> Planner<'a, G> {
    /// Create a new planner.
    pub fn new(graph: &'a G, config: &'a SearchConfig) -> Self {
        Self {
            graph,
            config,
            cancellation: None,
        }
    }

    /// Check `token` before every expansion.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Find the fastest route from start to destination within budget.
    pub fn search(&self, request: &RouteRequest) -> Result<Route, SearchError> {
        request.validate(self.graph)?;

        debug!(
            start = %request.start,
            destination = %request.destination,
            budget = request.budget,
            "Starting route search"
        );

        let mut arena = vec![SearchState::initial(request.start)];
        let mut frontier = BinaryHeap::from([FrontierEntry {
            elapsed_time: 0.0,
            index: 0,
        }]);
        let mut visited = VisitedRecords::default();
        let mut stats = SearchStats::default();

        while let Some(entry) = frontier.pop() {
            if self
                .cancellation
                .as_ref()
                .is_some_and(CancellationToken::is_cancelled)
            {
                debug!(expansions = stats.expansions, "Route search cancelled");
                return Err(SearchError::Cancelled);
            }

            let state = arena[entry.index];

            if state.location == request.destination {
                debug!(
                    elapsed_time = state.elapsed_time,
                    spent = state.spent,
                    expansions = stats.expansions,
                    pruned = stats.pruned,
                    pushed = stats.pushed,
                    "Route found"
                );
                return Ok(reconstruct(&arena, entry.index));
            }

            let label = Label {
                elapsed_time: state.elapsed_time,
                spent: state.spent,
            };
            if !visited.insert((state.location, state.mode), label) {
                stats.pruned += 1;
                trace!(
                    location = %state.location,
                    mode = %state.mode,
                    elapsed_time = state.elapsed_time,
                    spent = state.spent,
                    "Pruned dominated state"
                );
                continue;
            }

            if self.config.expansion_limit_reached(stats.expansions) {
                debug!(expansions = stats.expansions, "Expansion limit reached");
                return Err(SearchError::ExpansionLimit(stats.expansions));
            }
            stats.expansions += 1;

            for edge in self.graph.edges(state.location) {
                let step = match transition(edge, state.mode) {
                    Ok(step) => step,
                    Err(e) => {
                        trace!(location = %state.location, error = %e, "Skipping edge");
                        continue;
                    }
                };

                let spent = state.spent + step.cost;
                if spent > request.budget + BUDGET_TOLERANCE {
                    continue;
                }

                let next = SearchState {
                    elapsed_time: state.elapsed_time + step.time,
                    spent,
                    location: edge.other_endpoint(state.location),
                    mode: step.mode,
                    parent: Some(entry.index),
                };
                frontier.push(FrontierEntry {
                    elapsed_time: next.elapsed_time,
                    index: arena.len(),
                });
                arena.push(next);
                stats.pushed += 1;
            }
        }

        debug!(
            expansions = stats.expansions,
            pruned = stats.pruned,
            pushed = stats.pushed,
            "Frontier exhausted"
        );

        Err(SearchError::NoFeasibleRoute {
            start: request.start,
            destination: request.destination,
            budget: request.budget,
        })
    }
}

/// Follow parent links from `terminal` back to the origin.
fn reconstruct(arena: &[SearchState], terminal: usize) -> Route {
    let mut steps = Vec::new();
    let mut cursor = terminal;
    while let Some(parent) = arena[cursor].parent {
        steps.push(arena[cursor].step());
        cursor = parent;
    }
    steps.reverse();
    Route::new(arena[cursor].step(), steps)
}

/// Find the fastest route within `budget` using the default configuration.
pub fn find_best_route<G: TransitGraph>(
    graph: &G,
    start: Location,
    destination: Location,
    budget: f64,
) -> Result<Route, SearchError> {
    let config = SearchConfig::default();
    Planner::new(graph, &config).search(&RouteRequest::new(start, destination, budget))
}
