//! Minimum-hop path finding over a [`Graph`].
//!
//! Breadth-first search with a FIFO of location ids and a predecessor map.
//! Neighbors are scanned in edge insertion order and the goal is accepted the
//! moment it is first discovered, so among equally short routes the winner is
//! always the one completed first under that order.

use crate::error::{Result, RouteError};
use crate::graph::{Graph, Location, LocationId};
use std::collections::{HashMap, VecDeque};

/// An ordered walk from a start to a goal through adjacent locations.
///
/// Only produced by [`find_path`], so consecutive stops are always adjacent.
#[derive(Debug, Clone)]
pub struct Path<'g> {
    graph: &'g Graph,
    stops: Vec<LocationId>,
}

impl<'g> Path<'g> {
    pub(crate) fn new(graph: &'g Graph, stops: Vec<LocationId>) -> Self {
        Self { graph, stops }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn ids(&self) -> &[LocationId] {
        &self.stops
    }

    /// Number of locations on the path, endpoints included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    pub fn locations(&self) -> impl Iterator<Item = &'g Location> + '_ {
        self.stops.iter().map(|&id| self.graph.at(id))
    }

    pub fn names(&self) -> Vec<&'g str> {
        self.locations().map(Location::name).collect()
    }
}

impl PartialEq for Path<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.stops == other.stops
    }
}

impl Eq for Path<'_> {}

/// Find a minimum-hop path from `start` to `goal`.
///
/// Unknown names are reported before any traversal. A start equal to the goal
/// yields the single-stop path.
pub fn find_path<'g>(graph: &'g Graph, start: &str, goal: &str) -> Result<Path<'g>> {
    let start_id = resolve(graph, start)?;
    let goal_id = resolve(graph, goal)?;

    if start_id == goal_id {
        return Ok(Path::new(graph, vec![start_id]));
    }

    let mut parents: HashMap<LocationId, LocationId> = HashMap::new();
    let mut queue: VecDeque<LocationId> = VecDeque::from([start_id]);
    let mut expanded = 0usize;

    while let Some(current) = queue.pop_front() {
        expanded += 1;
        for neighbor in graph.at(current).neighbors() {
            let next = neighbor.id;
            if next == start_id || parents.contains_key(&next) {
                continue;
            }
            parents.insert(next, current);
            if next == goal_id {
                let stops = backtrack(&parents, start_id, goal_id);
                tracing::debug!(start, goal, hops = stops.len() - 1, expanded, "route found");
                return Ok(Path::new(graph, stops));
            }
            queue.push_back(next);
        }
    }

    tracing::debug!(start, goal, expanded, "frontier exhausted without a route");
    Err(RouteError::NoPathFound {
        from: start.to_string(),
        to: goal.to_string(),
    })
}

/// Names of every location reachable from `start`, in discovery order.
/// The start itself comes first.
pub fn reachable_from<'g>(graph: &'g Graph, start: &str) -> Result<Vec<&'g str>> {
    let start_id = resolve(graph, start)?;
    let mut seen = vec![false; graph.location_count()];
    Ok(flood(graph, start_id, &mut seen))
}

/// Partition the graph into connected components, each listed in discovery
/// order and the components themselves in creation order of their first member.
pub fn components(graph: &Graph) -> Vec<Vec<&str>> {
    let mut seen = vec![false; graph.location_count()];
    graph
        .ids()
        .filter_map(|id| (!seen[id.index()]).then(|| flood(graph, id, &mut seen)))
        .collect()
}

/// Breadth-first walk from `start`, marking every location it reaches in `seen`.
fn flood<'g>(graph: &'g Graph, start: LocationId, seen: &mut [bool]) -> Vec<&'g str> {
    let mut order = Vec::new();
    let mut queue = VecDeque::from([start]);
    seen[start.index()] = true;

    while let Some(current) = queue.pop_front() {
        order.push(graph.at(current).name());
        for neighbor in graph.at(current).neighbors() {
            if !seen[neighbor.id.index()] {
                seen[neighbor.id.index()] = true;
                queue.push_back(neighbor.id);
            }
        }
    }
    order
}

fn resolve(graph: &Graph, name: &str) -> Result<LocationId> {
    graph.id_of(name).ok_or_else(|| RouteError::UnknownLocation {
        name: name.to_string(),
    })
}

fn backtrack(
    parents: &HashMap<LocationId, LocationId>,
    start: LocationId,
    goal: LocationId,
) -> Vec<LocationId> {
    let mut stops = vec![goal];
    let mut cursor = goal;
    while cursor != start {
        match parents.get(&cursor) {
            Some(&prev) => {
                stops.push(prev);
                cursor = prev;
            }
            None => break,
        }
    }
    stops.reverse();
    stops
}
