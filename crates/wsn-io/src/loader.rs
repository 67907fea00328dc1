//! CSV node loader.
//!
//! # CSV format
//!
//! One row per node.  Exactly one row should carry the `base` role; that is
//! checked when a run starts, not here.
//!
//! ```csv
//! id,lat,lon,role
//! bs,-0.1000,34.7500,base
//! s1,-0.1020,34.7520,sensor
//! r1,-0.1010,34.7510,relay
//! ```
//!
//! `role` is case-insensitive and defaults to `sensor` when the cell is
//! empty.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use wsn_core::{Node, NodeRole, Position};

use crate::{DataError, DataResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct NodeRecord {
    id:   String,
    lat:  f64,
    lon:  f64,
    #[serde(default)]
    role: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a node list from a CSV file, preserving row order.
pub fn load_nodes_csv(path: &Path) -> DataResult<Vec<Node>> {
    let file = std::fs::File::open(path)?;
    load_nodes_reader(file)
}

/// Like [`load_nodes_csv`] but accepts any `Read` source.
pub fn load_nodes_reader<R: Read>(reader: R) -> DataResult<Vec<Node>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut nodes = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: NodeRecord = record.deserialize(Some(&headers))?;
        nodes.push(Node::new(row.id, Position::new(row.lat, row.lon), parse_role(&row.role, line)?));
    }
    Ok(nodes)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_role(s: &str, line: u64) -> DataResult<NodeRole> {
    if s.trim().is_empty() {
        return Ok(NodeRole::default());
    }
    s.parse::<NodeRole>().map_err(|_| DataError::UnknownRole { line, role: s.to_owned() })
}
