//! Location graph: named cities joined by undirected, labeled road segments.

use crate::error::{Result, RouteError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Minimum normalized Levenshtein similarity for a name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.5;

/// Declarative map input: an ordered list of locations and their connections.
///
/// Order matters. It fixes the order in which locations are created and the
/// order in which each location's neighbors are visited during search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription {
    #[serde(default, rename = "location")]
    pub locations: Vec<LocationEntry>,
}

/// One keyed entry of a [`GraphDescription`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub name: String,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

/// A road segment declared from the owning entry's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub to: String,
    pub distance: u32,
    pub route: String,
}

impl GraphDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a location entry, builder style.
    ///
    /// ```
    /// use route_core::graph::GraphDescription;
    ///
    /// let desc = GraphDescription::new()
    ///     .with_location("A", [("B", 10, "I-1")])
    ///     .with_location("B", [("A", 10, "I-1"), ("C", 5, "I-2")]);
    /// assert_eq!(desc.locations.len(), 2);
    /// ```
    #[must_use]
    pub fn with_location<I, N, R>(mut self, name: impl Into<String>, connections: I) -> Self
    where
        I: IntoIterator<Item = (N, u32, R)>,
        N: Into<String>,
        R: Into<String>,
    {
        self.locations.push(LocationEntry {
            name: name.into(),
            connections: connections
                .into_iter()
                .map(|(to, distance, route)| Connection {
                    to: to.into(),
                    distance,
                    route: route.into(),
                })
                .collect(),
        });
        self
    }
}

/// Dense index of a location inside the [`Graph`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(usize);

impl LocationId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Metadata carried by an undirected edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeInfo {
    pub distance: u32,
    pub route: String,
}

/// Adjacency entry: the location on the other end and the shared edge data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    pub id: LocationId,
    pub edge: EdgeInfo,
}

/// A named node together with its adjacency list.
#[derive(Debug, Clone)]
pub struct Location {
    name: String,
    neighbors: Vec<Neighbor>,
}

impl Location {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            neighbors: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Neighbors in the order their edges were first established.
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Edge metadata towards `other`, if the two are adjacent.
    pub fn edge_to(&self, other: LocationId) -> Option<&EdgeInfo> {
        self.neighbors
            .iter()
            .find(|n| n.id == other)
            .map(|n| &n.edge)
    }
}

/// A re-declared edge whose metadata disagreed with the first declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeConflict {
    pub a: String,
    pub b: String,
    pub kept: EdgeInfo,
    pub ignored: EdgeInfo,
}

impl fmt::Display for EdgeConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { a, b, kept, ignored } = self;
        write!(
            f,
            "{a} - {b}: kept {} miles on {}, ignored {} miles on {}",
            kept.distance, kept.route, ignored.distance, ignored.route
        )
    }
}

/// Owner of every [`Location`]. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    locations: Vec<Location>,
    index: HashMap<String, LocationId>,
    conflicts: Vec<EdgeConflict>,
}

impl Graph {
    /// Build a graph from a description, creating every mentioned location and
    /// one symmetric edge per related pair.
    pub fn from_description(description: &GraphDescription) -> Result<Self> {
        let mut graph = Self::default();

        for entry in &description.locations {
            let from = graph.intern(&entry.name)?;
            for conn in &entry.connections {
                if conn.to == entry.name {
                    return Err(RouteError::invalid(format!(
                        "location '{}' is connected to itself",
                        entry.name
                    )));
                }
                if conn.distance == 0 {
                    return Err(RouteError::invalid(format!(
                        "edge {} - {} has zero distance",
                        entry.name, conn.to
                    )));
                }
                if conn.route.trim().is_empty() {
                    return Err(RouteError::invalid(format!(
                        "edge {} - {} has an empty route label",
                        entry.name, conn.to
                    )));
                }
                let to = graph.intern(&conn.to)?;
                graph.connect(
                    from,
                    to,
                    EdgeInfo {
                        distance: conn.distance,
                        route: conn.route.clone(),
                    },
                );
            }
        }

        tracing::debug!(
            locations = graph.location_count(),
            edges = graph.edge_count(),
            conflicts = graph.conflicts.len(),
            "built location graph"
        );
        Ok(graph)
    }

    /// Look up or create the location called `name`.
    fn intern(&mut self, name: &str) -> Result<LocationId> {
        if let Some(&id) = self.index.get(name) {
            return Ok(id);
        }
        if name.trim().is_empty() {
            return Err(RouteError::invalid("location name is empty"));
        }
        let id = LocationId(self.locations.len());
        self.locations.push(Location::new(name));
        self.index.insert(name.to_string(), id);
        Ok(id)
    }

    /// Insert the undirected edge `a - b` on both endpoints at once.
    /// An existing edge keeps its first metadata; a mismatch is recorded.
    fn connect(&mut self, a: LocationId, b: LocationId, edge: EdgeInfo) {
        if let Some(existing) = self.locations[a.0].edge_to(b) {
            if *existing != edge {
                let conflict = EdgeConflict {
                    a: self.locations[a.0].name.clone(),
                    b: self.locations[b.0].name.clone(),
                    kept: existing.clone(),
                    ignored: edge,
                };
                tracing::warn!(
                    a = %conflict.a,
                    b = %conflict.b,
                    kept_distance = conflict.kept.distance,
                    kept_route = %conflict.kept.route,
                    ignored_distance = conflict.ignored.distance,
                    ignored_route = %conflict.ignored.route,
                    "inconsistent edge data; keeping first declaration"
                );
                self.conflicts.push(conflict);
            }
            return;
        }
        self.locations[a.0].neighbors.push(Neighbor {
            id: b,
            edge: edge.clone(),
        });
        self.locations[b.0].neighbors.push(Neighbor { id: a, edge });
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.locations.iter().map(Location::degree).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn id_of(&self, name: &str) -> Option<LocationId> {
        self.index.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.id_of(name).map(|id| &self.locations[id.0])
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0)
    }

    /// Locations in creation order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = LocationId> {
        (0..self.locations.len()).map(LocationId)
    }

    /// Every undirected edge once, as `(a, b, info)` with `a` created before `b`.
    pub fn edges(&self) -> impl Iterator<Item = (&Location, &Location, &EdgeInfo)> {
        self.locations.iter().enumerate().flat_map(move |(i, loc)| {
            loc.neighbors
                .iter()
                .filter(move |n| n.id.0 > i)
                .map(move |n| (loc, &self.locations[n.id.0], &n.edge))
        })
    }

    /// Edge metadata between two named locations.
    pub fn edge_between(&self, a: &str, b: &str) -> Option<&EdgeInfo> {
        let b = self.id_of(b)?;
        self.get(a)?.edge_to(b)
    }

    /// Locations with no edges at all.
    pub fn isolated(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(|l| l.neighbors.is_empty())
    }

    /// Re-declarations whose metadata disagreed with the kept edge.
    pub fn conflicts(&self) -> &[EdgeConflict] {
        &self.conflicts
    }

    /// Closest known location name to `query`, for "did you mean" hints.
    pub fn closest_name(&self, query: &str) -> Option<&str> {
        let query = query.to_lowercase();
        self.locations
            .iter()
            .map(|l| {
                let sim = strsim::normalized_levenshtein(&query, &l.name.to_lowercase());
                (l.name.as_str(), sim)
            })
            .filter(|(_, sim)| *sim >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| name)
    }

    pub(crate) fn at(&self, id: LocationId) -> &Location {
        &self.locations[id.0]
    }
}
