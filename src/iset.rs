//! Search results: independent sets, operation counters and independence checks.

use crate::error::Result;
use crate::graph::Adjacency;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// OperationCount
// ============================================================================

/// Count of primitive steps performed by a search.
///
/// Purely an instrumentation metric; the searches never branch on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationCount(u64);

impl OperationCount {
    /// A counter at zero.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw count.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Records one step.
    #[inline(always)]
    pub fn tick(&mut self) {
        self.0 += 1;
    }

    /// Records `steps` steps.
    #[inline(always)]
    pub fn add(&mut self, steps: usize) {
        self.0 += steps as u64;
    }

    /// Raw count.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OperationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// IndependentSet
// ============================================================================

/// A set of vertices, kept in the order the vertices appear in their graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IndependentSet<V> {
    members: Vec<V>,
}

impl<V> Default for IndependentSet<V> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
        }
    }
}

impl<V: Clone> IndependentSet<V> {
    /// Collects the vertices at `positions` (ascending) of `vertices`.
    pub(crate) fn from_positions(vertices: &[V], positions: &[usize]) -> Self {
        debug_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        Self {
            members: positions.iter().map(|&i| vertices[i].clone()).collect(),
        }
    }
}

impl<V> IndependentSet<V> {
    /// The empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in graph vertex order.
    #[inline]
    pub fn members(&self) -> &[V] {
        &self.members
    }

    /// Iterates over the members.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.members.iter()
    }

    /// Consumes the set, returning its members.
    pub fn into_vec(self) -> Vec<V> {
        self.members
    }
}

impl<V: PartialEq> IndependentSet<V> {
    /// Returns whether `v` is a member.
    pub fn contains(&self, v: &V) -> bool {
        self.members.contains(v)
    }
}

impl<'a, V> IntoIterator for &'a IndependentSet<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

// ============================================================================
// Verification
// ============================================================================

/// Returns the first adjacent pair among `members`, or `None` if they are independent.
///
/// # Errors
/// Propagates [`crate::Error::UnknownVertex`] for members not in `graph`.
pub fn find_conflict<G: Adjacency>(
    graph: &G,
    members: &[G::Vertex],
) -> Result<Option<(G::Vertex, G::Vertex)>> {
    for (i, u) in members.iter().enumerate() {
        for v in &members[i + 1..] {
            if graph.has_edge(u, v)? {
                return Ok(Some((u.clone(), v.clone())));
            }
        }
    }
    Ok(None)
}

/// Returns `true` iff no two of `members` are adjacent in `graph`.
///
/// # Errors
/// Propagates [`crate::Error::UnknownVertex`] for members not in `graph`.
pub fn is_independent<G: Adjacency>(graph: &G, members: &[G::Vertex]) -> Result<bool> {
    Ok(find_conflict(graph, members)?.is_none())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn counter_accumulates() {
        let mut ops = OperationCount::ZERO;
        ops.tick();
        ops.add(4);
        ops.tick();
        assert_eq!(ops.get(), 6);
        assert_eq!(ops.to_string(), "6");
        assert_eq!(serde_json::to_string(&ops).unwrap(), "6");
    }

    #[test]
    fn set_keeps_graph_order() {
        let vertices = ['a', 'b', 'c', 'd'];
        let set = IndependentSet::from_positions(&vertices, &[0, 2, 3]);
        assert_eq!(set.members(), &['a', 'c', 'd']);
        assert!(set.contains(&'c'));
        assert!(!set.contains(&'b'));
        assert_eq!(set.len(), 3);
        assert_eq!(serde_json::to_string(&set).unwrap(), "[\"a\",\"c\",\"d\"]");
    }

    #[test]
    fn conflicts_are_reported() {
        let g = Graph::from_edges([0u8, 1, 2, 3], [(0, 1), (2, 3)]).unwrap();
        assert!(is_independent(&g, &[0, 2]).unwrap());
        assert!(is_independent(&g, &[]).unwrap());
        assert_eq!(find_conflict(&g, &[1, 2, 3]).unwrap(), Some((2, 3)));
        assert!(find_conflict(&g, &[0, 9]).is_err());
    }
}
