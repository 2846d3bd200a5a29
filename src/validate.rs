//! Fast deterministic validation of both searches on graphs with known independence
//! numbers.

use crate::construction::{
    complete_bipartite_graph, complete_graph, cycle_graph, empty_graph, path_graph, star_graph,
};
use crate::error::{Error, Result};
use crate::exhaustive::exhaustive_search;
use crate::graph::Adjacency;
use crate::greedy::greedy_search;
use crate::iset::{find_conflict, IndependentSet};
use crate::persist::parse_adjacency_json;
use log::debug;
use std::path::Path;

// ============================================================================
// Public API
// ============================================================================

/// Validates both searches on the canonical fixtures and the bundled graph files:
/// - edgeless graphs on 0, 1 and 4 vertices (alpha = n)
/// - `P5` (3), `C5` (2), `K5` (1), star with 4 leaves (4), `K(3,3)` (3)
/// - `fixtures/petersen.json` (4) and `fixtures/grid_3x3.json` (5)
///
/// # Errors
/// Returns [`Error::Validation`] naming the first fixture that fails.
pub fn validate_fixtures() -> Result<()> {
    validate_graph(&empty_graph(0), "empty", 0)?;
    validate_graph(&empty_graph(1), "single vertex", 1)?;
    validate_graph(&empty_graph(4), "edgeless 4", 4)?;
    validate_graph(&path_graph(5), "P5", 3)?;
    validate_graph(&cycle_graph(5), "C5", 2)?;
    validate_graph(&complete_graph(5), "K5", 1)?;
    validate_graph(&star_graph(4), "star 4", 4)?;
    validate_graph(&complete_bipartite_graph(3, 3), "K3,3", 3)?;
    validate_bundled(include_str!("../fixtures/petersen.json"), "petersen.json", 4)?;
    validate_bundled(include_str!("../fixtures/grid_3x3.json"), "grid_3x3.json", 5)?;
    Ok(())
}

/// Validates both searches on `graph`, whose independence number is `alpha`.
///
/// Checks that both results are independent, that the exhaustive one has size `alpha`,
/// that greedy does not exceed it and that a second run reproduces each result and
/// operation count.
///
/// # Errors
/// Returns [`Error::Validation`] describing the first violated property, or the
/// search's own error.
pub fn validate_graph<G: Adjacency>(graph: &G, name: &str, alpha: usize) -> Result<()> {
    let exact = exhaustive_search(graph)?;
    let heuristic = greedy_search(graph)?;

    check_independent(graph, name, "exhaustive", &exact.0)?;
    check_independent(graph, name, "greedy", &heuristic.0)?;

    if exact.0.len() != alpha {
        return Err(Error::Validation(format!(
            "{name}: exhaustive found size {}, expected {alpha}",
            exact.0.len()
        )));
    }
    if heuristic.0.len() > exact.0.len() {
        return Err(Error::Validation(format!(
            "{name}: greedy size {} exceeds the optimum {}",
            heuristic.0.len(),
            exact.0.len()
        )));
    }
    if exhaustive_search(graph)? != exact || greedy_search(graph)? != heuristic {
        return Err(Error::Validation(format!("{name}: repeated run differs")));
    }

    debug!(
        "{name}: alpha {alpha}, greedy {} ({} / {} operations)",
        heuristic.0.len(),
        exact.1,
        heuristic.1
    );
    Ok(())
}

// ============================================================================
// Internal
// ============================================================================

fn validate_bundled(text: &str, name: &str, alpha: usize) -> Result<()> {
    let graph = parse_adjacency_json(text, Path::new(name))?;
    validate_graph(&graph, name, alpha)
}

fn check_independent<G: Adjacency>(
    graph: &G,
    name: &str,
    search: &str,
    set: &IndependentSet<G::Vertex>,
) -> Result<()> {
    match find_conflict(graph, set.members())? {
        None => Ok(()),
        Some((u, v)) => Err(Error::Validation(format!(
            "{name}: {search} set contains adjacent vertices {u:?} and {v:?}"
        ))),
    }
}

// ============================================================================
// Tests
// ============================================================================
