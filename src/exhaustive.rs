//! Exhaustive maximum independent set search.
//!
//! Subset sizes are tried from `|V|` down to `1`; within a size, combinations of vertex
//! positions are enumerated in lexicographic order over the graph's vertex order. The
//! first independent combination is returned, so the result is always maximum and,
//! among equally large sets, the lexicographically first one.
//!
//! Operation counting:
//! - `+1` per vertex pair examined, `+1` more when that pair is adjacent (rejection);
//! - `+1` when a candidate passes the independence test;
//! - `+1` when the satisfying candidate is returned.
//!
//! Running time is \(O(2^n \cdot n^2)\); callers bound it with a wall-clock budget
//! (see [`crate::search::run_with_budget`]).

use crate::error::Result;
use crate::graph::Adjacency;
use crate::iset::{IndependentSet, OperationCount};
use log::{debug, trace};

// ============================================================================
// Combination enumeration
// ============================================================================

/// Lexicographic `k`-combinations of `0..n`, yielded as ascending position slices.
#[derive(Clone, Debug)]
pub(crate) struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub(crate) fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }

    /// Advances to the next combination.
    pub(crate) fn next_combination(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }

        let k = self.indices.len();
        // Rightmost position that can still move right.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            self.done = true;
            return None;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(&self.indices)
    }
}

// ============================================================================
// Search
// ============================================================================

/// Finds a maximum independent set by trying every subset, largest first.
///
/// Returns the set together with the operations spent. An empty graph yields the empty
/// set and zero operations.
///
/// # Errors
/// Propagates [`crate::Error::UnknownVertex`] from a malformed [`Adjacency`] implementation.
pub fn exhaustive_search<G: Adjacency>(
    graph: &G,
) -> Result<(IndependentSet<G::Vertex>, OperationCount)> {
    let vertices = graph.vertices();
    let n = vertices.len();
    let mut ops = OperationCount::ZERO;

    for size in (1..=n).rev() {
        trace!("exhaustive: trying subsets of size {size}");
        let mut combinations = Combinations::new(n, size);
        while let Some(candidate) = combinations.next_combination() {
            if candidate_is_independent(graph, vertices, candidate, &mut ops)? {
                ops.tick();
                debug!("exhaustive: found independent set of size {size} after {ops} operations");
                return Ok((IndependentSet::from_positions(vertices, candidate), ops));
            }
        }
    }

    debug!("exhaustive: empty graph, returning the empty set");
    Ok((IndependentSet::empty(), ops))
}

/// Checks every pair of `candidate` for an edge, stopping at the first adjacent pair.
fn candidate_is_independent<G: Adjacency>(
    graph: &G,
    vertices: &[G::Vertex],
    candidate: &[usize],
    ops: &mut OperationCount,
) -> Result<bool> {
    for (pos, &a) in candidate.iter().enumerate() {
        for &b in &candidate[pos + 1..] {
            ops.tick();
            if graph.has_edge(&vertices[a], &vertices[b])? {
                ops.tick();
                return Ok(false);
            }
        }
    }
    ops.tick();
    Ok(true)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construction::{
        complete_bipartite_graph, complete_graph, empty_graph, path_graph, star_graph,
    };
    use crate::graph::Graph;
    use crate::iset::is_independent;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    fn collect(n: usize, k: usize) -> Vec<Vec<usize>> {
        let mut out = Vec::new();
        let mut c = Combinations::new(n, k);
        while let Some(combo) = c.next_combination() {
            out.push(combo.to_vec());
        }
        out
    }

    fn brute_alpha(graph: &Graph<usize>) -> usize {
        let n = graph.vertex_count();
        let mut adj = vec![0u32; n];
        for (u, v) in graph.edges() {
            adj[*u] |= 1 << v;
            adj[*v] |= 1 << u;
        }
        let mut best = 0;
        for subset in 0u32..(1 << n) {
            let size = subset.count_ones() as usize;
            if size <= best {
                continue;
            }
            let independent = (0..n).all(|v| subset & (1 << v) == 0 || adj[v] & subset == 0);
            if independent {
                best = size;
            }
        }
        best
    }

    #[test]
    fn combinations_are_lexicographic() {
        assert_eq!(
            collect(4, 2),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
        assert_eq!(collect(3, 3), vec![vec![0, 1, 2]]);
        assert_eq!(collect(3, 0), vec![Vec::<usize>::new()]);
        assert!(collect(2, 3).is_empty());
    }

    #[test]
    fn combination_counts_match_binomials() {
        assert_eq!(collect(10, 4).len(), 210);
        assert_eq!(collect(12, 6).len(), 924);
    }

    #[test]
    fn empty_graph_costs_nothing() {
        let (set, ops) = exhaustive_search(&Graph::<usize>::new()).unwrap();
        assert!(set.is_empty());
        assert_eq!(ops.get(), 0);
    }

    #[test]
    fn single_vertex_is_selected() {
        let g = Graph::with_vertices([42usize]);
        let (set, ops) = exhaustive_search(&g).unwrap();
        assert_eq!(set.members(), &[42]);
        // independence bookkeeping + return
        assert_eq!(ops.get(), 2);
    }

    #[test]
    fn complete_graph_yields_first_vertex() {
        for n in 1..=7usize {
            let (set, ops) = exhaustive_search(&complete_graph(n)).unwrap();
            assert_eq!(set.members(), &[0]);
            // every subset of size >= 2 fails on its first pair (2 ops each)
            let expected = (1u64 << (n + 1)) - 2 * n as u64;
            assert_eq!(ops.get(), expected, "K{n}");
        }
    }

    #[test]
    fn edgeless_graph_takes_everything_at_once() {
        let (set, ops) = exhaustive_search(&empty_graph(4)).unwrap();
        assert_eq!(set.members(), &[0, 1, 2, 3]);
        // six pairs, success bookkeeping, return
        assert_eq!(ops.get(), 8);
    }

    #[test]
    fn path_returns_alternating_vertices() {
        let (set, _) = exhaustive_search(&path_graph(5)).unwrap();
        assert_eq!(set.members(), &[0, 2, 4]);
    }

    #[test]
    fn star_returns_all_leaves() {
        let (set, _) = exhaustive_search(&star_graph(4)).unwrap();
        assert_eq!(set.members(), &[1, 2, 3, 4]);
    }

    #[test]
    fn complete_bipartite_returns_first_side() {
        let (set, _) = exhaustive_search(&complete_bipartite_graph(3, 3)).unwrap();
        assert_eq!(set.members(), &[0, 1, 2]);
    }

    #[test]
    fn matches_bruteforce_on_random_graphs() {
        let mut rng = XorShiftRng::seed_from_u64(0x5EED);
        for _case in 0..40 {
            let n = rng.random_range(1..=10usize);
            let p = rng.random_range(0.1..0.9);
            let mut g = Graph::with_vertices(0..n);
            for i in 0..n {
                for j in (i + 1)..n {
                    if rng.random_bool(p) {
                        g.add_edge(i, j).unwrap();
                    }
                }
            }

            let (set, _) = exhaustive_search(&g).unwrap();
            assert_eq!(set.len(), brute_alpha(&g), "n={n} p={p}");
            assert!(is_independent(&g, set.members()).unwrap());
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let g = path_graph(8);
        let first = exhaustive_search(&g).unwrap();
        let second = exhaustive_search(&g).unwrap();
        assert_eq!(first, second);
    }
}
