//! route-cli — answer route queries against a road-data file.
//!
//! ```text
//! route-cli --map roads.csv route --from 53.5461,-113.4938 --to 53.5232,-113.5263
//! route-cli --map roads.csv tour 53.5461,-113.4938 53.5232,-113.5263 53.5444,-113.4909
//! route-cli --map roads.csv nearest 53.5461,-113.4938 --count 3
//! ```
//!
//! Results go to stdout; logs go to stderr and are filtered by `RUST_LOG`
//! (default `info`).

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use rr_core::{FixedCoord, VertexId};
use rr_engine::RoutingEngine;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest driving routes over a road-data file")]
struct Cli {
    /// Road-data file of `V` and `E` records.
    #[arg(long, env = "ROUTE_MAP")]
    map: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shortest route between two points, printed as a coordinate string.
    Route {
        /// Start point as `<lat>,<lon>` in decimal degrees.
        #[arg(long, value_parser = parse_coord, allow_hyphen_values = true)]
        from: FixedCoord,
        /// End point as `<lat>,<lon>` in decimal degrees.
        #[arg(long, value_parser = parse_coord, allow_hyphen_values = true)]
        to: FixedCoord,
        /// Also print the streets along the route.
        #[arg(long)]
        streets: bool,
    },
    /// Greedy tour from the first point through all the others.
    Tour {
        /// Waypoints as `<lat>,<lon>`; the first is the start.
        #[arg(required = true, value_parser = parse_coord, allow_hyphen_values = true)]
        waypoints: Vec<FixedCoord>,
    },
    /// Road vertices nearest to a point, closest first.
    Nearest {
        /// Query point as `<lat>,<lon>`.
        #[arg(value_parser = parse_coord, allow_hyphen_values = true)]
        point: FixedCoord,
        /// How many vertices to list.
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let engine = RoutingEngine::load(&cli.map)
        .with_context(|| format!("failed to load road map from {}", cli.map.display()))?;

    match cli.command {
        Command::Route { from, to, streets } => handle_route(&engine, from, to, streets),
        Command::Tour { waypoints } => handle_tour(&engine, &waypoints),
        Command::Nearest { point, count } => handle_nearest(&engine, point, count),
    }
}

fn handle_route(engine: &RoutingEngine, from: FixedCoord, to: FixedCoord, streets: bool) -> Result<()> {
    let path = engine.find_path(from, to);
    if path.is_empty() {
        warn!(%from, %to, "no route found");
    }
    println!("{}", engine.path_to_coordinate_string(&path)?);

    if streets {
        for name in engine.street_names(&path) {
            println!("via {name}");
        }
    }
    Ok(())
}

fn handle_tour(engine: &RoutingEngine, waypoints: &[FixedCoord]) -> Result<()> {
    let tour = engine
        .multi_stop_route(waypoints)
        .context("failed to plan multi-stop route")?;

    println!("order: {}", join_ids(&tour.order));
    println!("cost: {:.0}", tour.total_cost);
    println!("{}", engine.path_to_coordinate_string(&tour.path)?);
    Ok(())
}

fn handle_nearest(engine: &RoutingEngine, point: FixedCoord, count: usize) -> Result<()> {
    let map = engine.road_map();
    if map.is_empty() {
        bail!("road map has no vertices");
    }
    for id in map.k_nearest_vertices(point, count) {
        let pos = map
            .coord(id)
            .with_context(|| format!("vertex {id} has no coordinate"))?;
        println!("{id} {pos}");
    }
    Ok(())
}

fn parse_coord(s: &str) -> Result<FixedCoord, String> {
    FixedCoord::parse_pair(s).map_err(|e| e.to_string())
}

fn join_ids(ids: &[VertexId]) -> String {
    ids.iter().map(VertexId::to_string).collect::<Vec<_>>().join(" ")
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
