//! Route planning over a small map of connected cities.
//!
//! Provides the location graph ([`graph::Graph`]), minimum-hop path finding
//! ([`search::find_path`]), driving directions ([`directions::Directions`]),
//! map file storage, configuration, and the bundled east coast map.

pub mod config;
pub mod dataset;
pub mod directions;
pub mod error;
pub mod graph;
pub mod search;
pub mod storage;

pub use directions::{Directions, Instruction};
pub use error::{Result, RouteError};
pub use graph::{Graph, GraphDescription};
pub use search::{Path, find_path};

/// Build `description`, find a route from `start` to `goal`, and render it.
pub fn plan_route(description: &GraphDescription, start: &str, goal: &str) -> Result<Directions> {
    let graph = Graph::from_description(description)?;
    let path = find_path(&graph, start, goal)?;
    Ok(Directions::from_path(&path))
}
