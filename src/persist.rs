//! JSON persistence for graphs and result tables.
//!
//! Graph files hold an adjacency list: a JSON object mapping each vertex id to the ids
//! of its neighbors, e.g. `{"(3, 0)": ["(1, 2)", "(4, 4)"]}`. Key order is significant:
//! it becomes the graph's vertex order, so saving and reloading a graph keeps every
//! tie-break of the searches. Neighbors that never appear as keys are appended after
//! the keys, in the order they are first referenced.

use crate::error::{Error, Result};
use crate::graph::{Adjacency, Graph, Vertex};
use crate::label::VertexLabel;
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

// ============================================================================
// Graph ids
// ============================================================================

/// Identifies a generated graph by vertex count and whole-percent edge density.
///
/// Printed as `"<vertices>_<densityPercent>"`; ordered numerically by vertex count, then
/// density. Serialized as its string form so it can key JSON objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct GraphId {
    /// Number of vertices.
    pub vertices: usize,
    /// Edge density in whole percent.
    pub density_percent: u32,
}

impl GraphId {
    /// Creates an id.
    pub const fn new(vertices: usize, density_percent: u32) -> Self {
        Self {
            vertices,
            density_percent,
        }
    }

    /// Edge density as a fraction (`25` → `0.25`).
    pub fn edge_density(self) -> f64 {
        f64::from(self.density_percent) / 100.0
    }

    /// File name of the graph: `graph_<id>.json`.
    pub fn file_name(self) -> String {
        format!("graph_{self}.json")
    }

    /// Extracts the id from a `graph_<id>.json` file name.
    pub fn from_file_name(name: &str) -> Option<Self> {
        name.strip_prefix("graph_")?
            .strip_suffix(".json")?
            .parse()
            .ok()
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.vertices, self.density_percent)
    }
}

impl FromStr for GraphId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidGraphId(s.to_owned());
        let (vertices, percent) = s.split_once('_').ok_or_else(invalid)?;
        Ok(Self {
            vertices: vertices.parse().map_err(|_| invalid())?,
            density_percent: percent.parse().map_err(|_| invalid())?,
        })
    }
}

impl From<GraphId> for String {
    fn from(id: GraphId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for GraphId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

// ============================================================================
// JSON helpers
// ============================================================================

/// Writes `value` as JSON with four-space indentation, creating parent directories.
///
/// # Errors
/// Returns an error if the file cannot be created or serialization fails.
pub fn write_json_pretty<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut serializer)
        .map_err(|e| Error::json(path, e))?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|e| Error::io(path, e))
}

/// Reads a JSON document from `path`.
///
/// # Errors
/// Returns an error if the file cannot be opened or does not deserialize into `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| Error::json(path, e))
}

// ============================================================================
// Graph files
// ============================================================================

/// Saves `graph` as an adjacency-list JSON object in vertex order.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn save_adjacency_json<V>(graph: &Graph<V>, path: &Path) -> Result<()>
where
    V: Vertex + fmt::Display,
{
    let mut adjacency = Map::with_capacity(graph.vertex_count());
    for v in graph.vertices() {
        let neighbors = graph
            .neighbors(v)?
            .iter()
            .map(|w| Value::String(w.to_string()))
            .collect();
        adjacency.insert(v.to_string(), Value::Array(neighbors));
    }
    write_json_pretty(&adjacency, path)
}

/// Loads an adjacency-list JSON file.
///
/// # Errors
/// Returns an error if the file is unreadable, is not an object of string lists, holds a
/// malformed vertex id or describes a self-loop.
pub fn load_adjacency_json(path: &Path) -> Result<Graph<VertexLabel>> {
    let raw: Map<String, Value> = read_json(path)?;
    adjacency_from_map(raw, path)
}

/// Parses adjacency-list JSON text; `origin` names the source in errors.
///
/// # Errors
/// Same as [`load_adjacency_json`], minus the I/O failures.
pub fn parse_adjacency_json(text: &str, origin: &Path) -> Result<Graph<VertexLabel>> {
    let raw: Map<String, Value> =
        serde_json::from_str(text).map_err(|e| Error::json(origin, e))?;
    adjacency_from_map(raw, origin)
}

fn adjacency_from_map(raw: Map<String, Value>, origin: &Path) -> Result<Graph<VertexLabel>> {
    let mut rows = Vec::with_capacity(raw.len());
    let mut graph = Graph::new();
    for (key, value) in raw {
        let vertex: VertexLabel = key.parse()?;
        graph.add_vertex(vertex.clone());
        rows.push((vertex, value));
    }
    for (vertex, value) in rows {
        let neighbors: Vec<String> =
            serde_json::from_value(value).map_err(|e| Error::json(origin, e))?;
        for neighbor in neighbors {
            graph.add_edge(vertex.clone(), neighbor.parse()?)?;
        }
    }
    Ok(graph)
}

/// Loads every `graph_<id>.json` file in `dir`, sorted by id.
///
/// Files whose names do not carry a valid id are skipped with a warning.
///
/// # Errors
/// Returns an error if the directory cannot be listed or a graph file fails to load.
pub fn load_graph_dir(dir: &Path) -> Result<Vec<(GraphId, Graph<VertexLabel>)>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    let mut graphs = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".json") {
            continue;
        }
        match GraphId::from_file_name(name) {
            Some(id) => graphs.push((id, load_adjacency_json(&path)?)),
            None => warn!("skipping {}: name is not graph_<vertices>_<density>.json", path.display()),
        }
    }
    graphs.sort_by_key(|(id, _)| *id);
    Ok(graphs)
}

// ============================================================================
// Tests
// ============================================================================
