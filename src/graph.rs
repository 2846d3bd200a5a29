//! Undirected, unweighted graphs and the capability set the searches rely on.
//!
//! Both searches are written against [`Adjacency`] rather than a concrete type: anything
//! that can list its vertices in a fixed order, report the neighbors of a vertex and
//! answer pairwise adjacency queries can be searched. [`Graph`] is the concrete
//! implementation used by the tooling.

use crate::error::{Error, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::hash::Hash;

// ============================================================================
// Capability trait
// ============================================================================

/// Requirements on vertex identifiers: opaque, hashable and printable for diagnostics.
pub trait Vertex: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Vertex for T {}

/// Read-only view of an undirected graph.
///
/// The order of [`Adjacency::vertices`] is the fixed vertex ordering used for every
/// tie-break in the searches, so implementations must return the same order on every
/// call. Queries about a vertex that is not in that list must fail with
/// [`Error::UnknownVertex`].
pub trait Adjacency {
    /// Vertex identifier type.
    type Vertex: Vertex;

    /// All vertices, in the graph's fixed order.
    fn vertices(&self) -> &[Self::Vertex];

    /// Neighbors of `v`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownVertex`] if `v` is not in the graph.
    fn neighbors(&self, v: &Self::Vertex) -> Result<&[Self::Vertex]>;

    /// Returns whether `u` and `v` are adjacent.
    ///
    /// # Errors
    /// Returns [`Error::UnknownVertex`] if either endpoint is not in the graph.
    fn has_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> Result<bool>;

    /// Number of neighbors of `v`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownVertex`] if `v` is not in the graph.
    fn degree(&self, v: &Self::Vertex) -> Result<usize> {
        Ok(self.neighbors(v)?.len())
    }

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }
}

// ============================================================================
// Graph
// ============================================================================

/// Adjacency-list graph with insertion-ordered vertices and neighbor lists.
///
/// Representation:
/// - `vertices[i]` is the vertex at position `i`; `index` is the inverse map.
/// - `neighbors[i]` lists the neighbors of `vertices[i]` in the order their edges were added.
/// - `edges` holds every edge once as a position pair `(lo, hi)` with `lo < hi`.
#[derive(Clone, Debug)]
pub struct Graph<V> {
    vertices: Vec<V>,
    index: FxHashMap<V, usize>,
    neighbors: Vec<Vec<V>>,
    edges: FxHashSet<(usize, usize)>,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

impl<V: Vertex> Graph<V> {
    /// Creates a graph with no vertices.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: FxHashMap::default(),
            neighbors: Vec::new(),
            edges: FxHashSet::default(),
        }
    }

    /// Creates an edgeless graph over `vertices` (duplicates are ignored).
    pub fn with_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut graph = Self::new();
        for v in vertices {
            graph.add_vertex(v);
        }
        graph
    }

    /// Builds a graph from a vertex list followed by an edge list.
    ///
    /// Vertices listed first keep their order; endpoints that only appear in `edges`
    /// are appended as they are encountered.
    ///
    /// # Errors
    /// Returns [`Error::SelfLoop`] if an edge joins a vertex to itself.
    pub fn from_edges<I, E>(vertices: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::with_vertices(vertices);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Adds `v` if absent and returns its position.
    pub fn add_vertex(&mut self, v: V) -> usize {
        if let Some(&i) = self.index.get(&v) {
            return i;
        }
        let i = self.vertices.len();
        self.index.insert(v.clone(), i);
        self.vertices.push(v);
        self.neighbors.push(Vec::new());
        i
    }

    /// Adds the undirected edge `{u, v}`, inserting missing endpoints (`u` first).
    ///
    /// Returns `false` if the edge was already present.
    ///
    /// # Errors
    /// Returns [`Error::SelfLoop`] if `u == v`.
    pub fn add_edge(&mut self, u: V, v: V) -> Result<bool> {
        if u == v {
            return Err(Error::SelfLoop(format!("{u:?}")));
        }
        let iu = self.add_vertex(u);
        let iv = self.add_vertex(v);
        Ok(self.connect_positions(iu, iv))
    }

    /// Adds the edge between the vertices at positions `a` and `b`.
    pub(crate) fn connect_positions(&mut self, a: usize, b: usize) -> bool {
        debug_assert!(a != b, "self-loop at position {a}");
        debug_assert!(a < self.vertices.len() && b < self.vertices.len());
        if !self.edges.insert(edge_key(a, b)) {
            return false;
        }
        let (va, vb) = (self.vertices[a].clone(), self.vertices[b].clone());
        self.neighbors[a].push(vb);
        self.neighbors[b].push(va);
        true
    }

    /// Position of `v` in the vertex order.
    #[inline]
    pub fn position(&self, v: &V) -> Option<usize> {
        self.index.get(v).copied()
    }

    /// Returns whether `v` is a vertex of the graph.
    #[inline]
    pub fn contains(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Ratio of present edges to the `n(n-1)/2` possible ones (`0.0` below two vertices).
    pub fn edge_density(&self) -> f64 {
        let n = self.vertices.len();
        if n < 2 {
            return 0.0;
        }
        self.edges.len() as f64 / (n * (n - 1) / 2) as f64
    }

    /// Iterates over every edge once, ordered by the position of its first endpoint.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.neighbors.iter().enumerate().flat_map(move |(i, nbrs)| {
            nbrs.iter()
                .filter(move |w| self.index[*w] > i)
                .map(move |w| (&self.vertices[i], w))
        })
    }

    fn require(&self, v: &V) -> Result<usize> {
        self.position(v)
            .ok_or_else(|| Error::UnknownVertex(format!("{v:?}")))
    }
}

impl<V: Vertex> Adjacency for Graph<V> {
    type Vertex = V;

    #[inline]
    fn vertices(&self) -> &[V] {
        &self.vertices
    }

    fn neighbors(&self, v: &V) -> Result<&[V]> {
        let i = self.require(v)?;
        Ok(&self.neighbors[i])
    }

    fn has_edge(&self, u: &V, v: &V) -> Result<bool> {
        let iu = self.require(u)?;
        let iv = self.require(v)?;
        Ok(self.edges.contains(&edge_key(iu, iv)))
    }
}

// ============================================================================
// Tests
// ============================================================================
