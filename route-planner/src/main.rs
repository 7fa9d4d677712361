use std::process::ExitCode;

use route_planner::domain::Location;
use route_planner::network::Network;
use route_planner::planner::{Planner, RouteRequest, SearchConfig};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: plan-route <network.json> <start> <destination> <budget>";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [path, start, destination, budget] = args.as_slice() else {
        return Err(USAGE.to_string());
    };

    let start = parse_location(start)?;
    let destination = parse_location(destination)?;
    let budget: f64 = budget
        .parse()
        .map_err(|_| format!("invalid budget: {budget}"))?;

    let mut config = SearchConfig::default();
    if let Ok(value) = std::env::var("ROUTE_MAX_EXPANSIONS") {
        config.max_expansions = match value.parse::<usize>() {
            Ok(0) => None,
            Ok(max) => Some(max),
            Err(_) => return Err(format!("invalid ROUTE_MAX_EXPANSIONS: {value}")),
        };
    }

    let network = Network::from_path(path).map_err(|e| format!("{path}: {e}"))?;
    println!(
        "Loaded {} locations and {} edges",
        network.location_count(),
        network.edge_count()
    );

    let planner = Planner::new(&network, &config);
    let route = planner
        .search(&RouteRequest::new(start, destination, budget))
        .map_err(|e| e.to_string())?;

    println!("{route}");
    println!();
    println!("{:>10}  {:<6} {:>10} {:>10}", "location", "mode", "minutes", "spent");
    for step in route.steps() {
        println!(
            "{:>10}  {:<6} {:>10.2} {:>10.2}",
            step.location.to_string(),
            step.mode.as_str(),
            step.elapsed_time,
            step.spent
        );
    }

    Ok(())
}

fn parse_location(s: &str) -> Result<Location, String> {
    s.parse::<u32>()
        .map(Location)
        .map_err(|_| format!("invalid location: {s}"))
}
