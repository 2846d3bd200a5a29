//! Greedy minimum-degree independent set heuristic.
//!
//! Vertices are ordered by ascending degree with a stable bottom-up merge sort (ties
//! keep the graph's vertex order), then walked once: a vertex is taken unless one of
//! its neighbors was taken before it, and taking it excludes all of its neighbors.
//! The result is always independent but not necessarily maximum.
//!
//! Operation counting:
//! - sort: `+1` per degree comparison and `+1` per element moved into a merged run;
//!   a run without a partner in a pass is carried over uncounted;
//! - selection: `+1` per vertex visited, `+1` per vertex taken and `+1` per neighbor
//!   added to the skip set.

use crate::error::{Error, Result};
use crate::graph::Adjacency;
use crate::iset::{IndependentSet, OperationCount};
use log::debug;
use rustc_hash::FxHashMap;

// ============================================================================
// Degree ordering
// ============================================================================

/// Stable ascending sort of positions `0..keys.len()` by `keys`, merging runs bottom-up.
pub(crate) fn merge_sort_positions(keys: &[usize], ops: &mut OperationCount) -> Vec<usize> {
    let n = keys.len();
    let mut current: Vec<usize> = (0..n).collect();
    let mut next = Vec::with_capacity(n);

    let mut width = 1;
    while width < n {
        next.clear();
        for start in (0..n).step_by(2 * width) {
            let mid = (start + width).min(n);
            let end = (start + 2 * width).min(n);
            if mid == end {
                next.extend_from_slice(&current[start..mid]);
            } else {
                merge_runs(&current[start..mid], &current[mid..end], keys, &mut next, ops);
            }
        }
        std::mem::swap(&mut current, &mut next);
        width *= 2;
    }
    current
}

#[inline]
fn merge_runs(
    left: &[usize],
    right: &[usize],
    keys: &[usize],
    out: &mut Vec<usize>,
    ops: &mut OperationCount,
) {
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        ops.tick();
        // `<=` keeps the left element on ties, which makes the sort stable.
        if keys[left[i]] <= keys[right[j]] {
            out.push(left[i]);
            i += 1;
        } else {
            out.push(right[j]);
            j += 1;
        }
        ops.tick();
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    ops.add(left.len() - i + right.len() - j);
}

/// Vertex positions of `graph` ordered by ascending degree, ties in vertex order.
fn degree_order<G: Adjacency>(graph: &G, ops: &mut OperationCount) -> Result<Vec<usize>> {
    let degrees = graph
        .vertices()
        .iter()
        .map(|v| graph.degree(v))
        .collect::<Result<Vec<_>>>()?;
    Ok(merge_sort_positions(&degrees, ops))
}

// ============================================================================
// Search
// ============================================================================

/// Builds an independent set greedily, lowest degree first.
///
/// Returns the set together with the operations spent (sort plus selection). An empty
/// graph yields the empty set and zero operations.
///
/// # Errors
/// Returns [`Error::UnknownVertex`] if the graph reports a neighbor that is not one of
/// its vertices.
pub fn greedy_search<G: Adjacency>(
    graph: &G,
) -> Result<(IndependentSet<G::Vertex>, OperationCount)> {
    let vertices = graph.vertices();
    let mut ops = OperationCount::ZERO;

    let order = degree_order(graph, &mut ops)?;
    let sort_ops = ops;

    let position: FxHashMap<&G::Vertex, usize> =
        vertices.iter().enumerate().map(|(i, v)| (v, i)).collect();
    let mut skipped = vec![false; vertices.len()];
    let mut selected = Vec::new();

    for &v in &order {
        ops.tick();
        if skipped[v] {
            continue;
        }
        ops.tick();
        selected.push(v);

        let neighbors = graph.neighbors(&vertices[v])?;
        for w in neighbors {
            let &wi = position
                .get(w)
                .ok_or_else(|| Error::UnknownVertex(format!("{w:?}")))?;
            skipped[wi] = true;
        }
        ops.add(neighbors.len());
    }

    debug!(
        "greedy: selected {} of {} vertices ({sort_ops} sort + {} selection operations)",
        selected.len(),
        vertices.len(),
        ops.get() - sort_ops.get()
    );

    selected.sort_unstable();
    Ok((IndependentSet::from_positions(vertices, &selected), ops))
}

// ============================================================================
// Tests
// ============================================================================
