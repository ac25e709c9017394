//! The bundled eastern United States interstate map.

use crate::graph::GraphDescription;
use crate::storage::{self, MapFormat};
use anyhow::{Context, Result};

const EAST_COAST: &str = include_str!("../data/east_coast.toml");

/// Description of the bundled map, in file order.
pub fn east_coast() -> Result<GraphDescription> {
    storage::parse(EAST_COAST, MapFormat::Toml).context("bundled east coast map is invalid")
}
