//! Turn a [`Path`] into driving directions.

use crate::search::Path;
use serde::Serialize;
use std::fmt;

/// One step of driving guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Instruction {
    Start {
        location: String,
    },
    Drive {
        distance: u32,
        route: String,
        toward: String,
    },
    Arrive,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start { location } => write!(f, "Starting at {location}"),
            Self::Drive {
                distance,
                route,
                toward,
            } => write!(
                f,
                "Drive {distance} miles on {route} towards {toward}, then"
            ),
            Self::Arrive => write!(f, "You will arrive at your destination"),
        }
    }
}

/// The full instruction list for one route: a start, one drive per hop, and
/// a single arrival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directions {
    pub steps: Vec<Instruction>,
}

impl Directions {
    /// Render `path` using the edge metadata of the graph it was found in.
    ///
    /// # Panics
    ///
    /// If two consecutive stops are not adjacent, which [`crate::search::find_path`]
    /// never produces.
    pub fn from_path(path: &Path<'_>) -> Self {
        let graph = path.graph();
        let ids = path.ids();
        let mut steps = Vec::with_capacity(ids.len() + 1);

        if let Some(first) = path.locations().next() {
            steps.push(Instruction::Start {
                location: first.name().to_string(),
            });
        }

        for pair in ids.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            let (Some(from), Some(to)) = (graph.location(current), graph.location(next)) else {
                panic!("path refers to a location outside its graph");
            };
            let Some(edge) = from.edge_to(next) else {
                panic!(
                    "path stops {} and {} are not adjacent",
                    from.name(),
                    to.name()
                );
            };
            steps.push(Instruction::Drive {
                distance: edge.distance,
                route: edge.route.clone(),
                toward: to.name().to_string(),
            });
        }

        steps.push(Instruction::Arrive);
        Self { steps }
    }

    /// One display line per step.
    pub fn lines(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }

    /// Number of drive steps.
    pub fn hops(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, Instruction::Drive { .. }))
            .count()
    }

    /// Sum of all drive distances, in miles.
    pub fn total_distance(&self) -> u64 {
        self.steps
            .iter()
            .map(|s| match s {
                Instruction::Drive { distance, .. } => u64::from(*distance),
                _ => 0,
            })
            .sum()
    }
}

impl fmt::Display for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
