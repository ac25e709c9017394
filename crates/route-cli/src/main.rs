//! CLI binary for the route planner: driving directions between cities.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use route_core::config::{OutputFormat, RouteConfig};
use route_core::graph::{Graph, GraphDescription, Location};
use route_core::{Directions, RouteError};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "route-planner", about = "Driving directions between cities")]
struct Cli {
    /// Project root directory holding `.route/config.toml` (defaults to current directory)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    /// Map file (.toml or .json); overrides the configured map
    #[arg(short, long, global = true)]
    map: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print directions from one location to another
    Route {
        /// Starting location
        #[arg(long, visible_alias = "starting-city")]
        from: String,

        /// Destination location
        #[arg(long, visible_alias = "destination-city")]
        to: String,

        /// Output format: text, json (defaults to the configured format)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// List every location on the map
    Locations,

    /// Show map statistics
    Info,

    /// Report conflicting road declarations and isolated locations
    Validate,
}

fn get_project_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.project {
        Some(p) => Ok(p.clone()),
        None => std::env::current_dir().context("failed to get current directory"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let project_root = get_project_root(&cli)?;
    let config = RouteConfig::load(&project_root)?;

    let level = &config.logging.level;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let description = load_description(cli.map.as_deref(), &config)?;
    let graph = Graph::from_description(&description).context("failed to build map")?;

    match cli.command {
        Commands::Route { from, to, format } => {
            let format = match format {
                Some(f) => f.parse()?,
                None => config.output.format,
            };
            cmd_route(&graph, &from, &to, format)
        }
        Commands::Locations => {
            cmd_locations(&graph);
            Ok(())
        }
        Commands::Info => {
            cmd_info(&graph);
            Ok(())
        }
        Commands::Validate => cmd_validate(&graph),
    }
}

/// The `--map` flag, then the configured map, then the bundled one.
fn load_description(map: Option<&Path>, config: &RouteConfig) -> Result<GraphDescription> {
    match map.or(config.map.path.as_deref()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading map file");
            route_core::storage::load(path)
        }
        None => route_core::dataset::east_coast(),
    }
}

fn cmd_route(graph: &Graph, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let path = match route_core::find_path(graph, from, to) {
        Ok(path) => path,
        Err(RouteError::UnknownLocation { name }) => match graph.closest_name(&name) {
            Some(hint) => anyhow::bail!("Unknown location: {}. Did you mean '{}'?", name, hint),
            None => anyhow::bail!(
                "Unknown location: {}. Run `route-planner locations` to list them.",
                name
            ),
        },
        Err(e @ RouteError::NoPathFound { .. }) => anyhow::bail!("{}", e),
        Err(e) => return Err(e.into()),
    };

    let directions = Directions::from_path(&path);
    match format {
        OutputFormat::Text => println!("{}", directions),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&directions)?),
    }
    Ok(())
}

fn cmd_locations(graph: &Graph) {
    let mut names: Vec<&str> = graph.locations().map(Location::name).collect();
    names.sort_unstable();
    for name in names {
        println!("{}", name);
    }
}

fn cmd_info(graph: &Graph) {
    let components = route_core::search::components(graph);
    let total_miles: u64 = graph.edges().map(|(_, _, e)| u64::from(e.distance)).sum();

    println!("Locations:   {}", graph.location_count());
    println!("Roads:       {}", graph.edge_count());
    println!("Road miles:  {}", total_miles);
    println!("Components:  {}", components.len());
    println!("Isolated:    {}", graph.isolated().count());
    println!("Conflicts:   {}", graph.conflicts().len());

    if let Some(busiest) = graph.locations().max_by_key(|l| l.degree()) {
        println!(
            "Busiest:     {} ({} roads)",
            busiest.name(),
            busiest.degree()
        );
    }
}

fn cmd_validate(graph: &Graph) -> Result<()> {
    let conflicts = graph.conflicts();
    for conflict in conflicts {
        println!("conflict: {}", conflict);
    }

    let mut isolated = 0usize;
    for loc in graph.isolated() {
        println!("isolated: {}", loc.name());
        isolated += 1;
    }

    let components = route_core::search::components(graph);
    if components.len() > 1 {
        for (i, members) in components.iter().enumerate() {
            println!("component {}: {}", i + 1, members.join(", "));
        }
    }

    if !conflicts.is_empty() {
        anyhow::bail!("{} conflicting road declaration(s)", conflicts.len());
    }
    if isolated == 0 && components.len() <= 1 {
        eprintln!("Map is consistent.");
    } else {
        eprintln!("No conflicting road declarations.");
    }
    Ok(())
}
