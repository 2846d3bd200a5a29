//! Graph constructions: seeded G(n, p) random graphs and small canonical fixtures.
//!
//! Random graphs label their vertices with single integers (`0..n`) so they persist in
//! the same textual form as every other graph file.

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::label::VertexLabel;
use crate::persist::{save_adjacency_json, GraphId};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use std::path::PathBuf;

// ============================================================================
// Configuration
// ============================================================================

/// Default generator seed; every graph in a suite is drawn from a fresh generator
/// seeded with it.
pub const DEFAULT_SEED: u64 = 109_089;

/// Parameters for generating a graph suite.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Smallest vertex count (inclusive).
    pub min_vertices: usize,
    /// Largest vertex count (inclusive).
    pub max_vertices: usize,
    /// Edge probabilities to generate for every vertex count.
    pub densities: Vec<f64>,
    /// Seed for every graph's generator.
    pub seed: u64,
    /// Directory receiving `graph_<id>.json` files.
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_vertices: 4,
            max_vertices: 500,
            densities: vec![0.125, 0.25, 0.5, 0.75],
            seed: DEFAULT_SEED,
            output_dir: PathBuf::from("graphs"),
        }
    }
}

fn check_density(p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(Error::InvalidDensity(p))
    }
}

/// Whole-percent form of an edge probability, truncated (`0.125` → `12`).
pub fn density_percent(p: f64) -> u32 {
    (p * 100.0) as u32
}

// ============================================================================
// Random graphs
// ============================================================================

/// Draws a G(n, p) graph: each of the `n(n-1)/2` vertex pairs becomes an edge with
/// probability `p`, pairs visited in lexicographic order.
///
/// # Errors
/// Returns [`Error::InvalidDensity`] if `p` is not in `[0, 1]`.
pub fn gnp_random_graph(n: usize, p: f64, seed: u64) -> Result<Graph<VertexLabel>> {
    check_density(p)?;
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let mut graph = Graph::with_vertices((0..n).map(|v| VertexLabel::single(v as i64)));
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.random_bool(p) {
                graph.connect_positions(i, j);
            }
        }
    }
    Ok(graph)
}

/// Generates one graph per (vertex count, density) pair and writes it to
/// `config.output_dir`. Returns the written paths in generation order.
///
/// Densities are checked before anything is written.
///
/// # Errors
/// Returns [`Error::InvalidDensity`] for a density outside `[0, 1]`, or an I/O error if
/// the output directory or a graph file cannot be written.
pub fn generate_suite(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    for &p in &config.densities {
        check_density(p)?;
    }
    std::fs::create_dir_all(&config.output_dir)
        .map_err(|e| Error::io(&config.output_dir, e))?;

    let mut written = Vec::new();
    for n in config.min_vertices..=config.max_vertices {
        for &p in &config.densities {
            let graph = gnp_random_graph(n, p, config.seed)?;
            let id = GraphId::new(n, density_percent(p));
            let path = config.output_dir.join(id.file_name());
            save_adjacency_json(&graph, &path)?;
            debug!("wrote {} ({} edges)", path.display(), graph.edge_count());
            written.push(path);
        }
        info!("generated graphs with {n} vertices");
    }
    Ok(written)
}

// ============================================================================
// Fixtures
// ============================================================================

fn from_position_pairs(n: usize, pairs: impl IntoIterator<Item = (usize, usize)>) -> Graph<usize> {
    let mut graph = Graph::with_vertices(0..n);
    for (a, b) in pairs {
        graph.connect_positions(a, b);
    }
    graph
}

/// `n` isolated vertices `0..n`.
pub fn empty_graph(n: usize) -> Graph<usize> {
    Graph::with_vertices(0..n)
}

/// Path `0 - 1 - ... - (n-1)`.
pub fn path_graph(n: usize) -> Graph<usize> {
    from_position_pairs(n, (1..n).map(|v| (v - 1, v)))
}

/// Cycle `0 - 1 - ... - (n-1) - 0` (needs `n >= 3`; smaller `n` gives a path).
pub fn cycle_graph(n: usize) -> Graph<usize> {
    let closing = (n >= 3).then(|| (n - 1, 0));
    from_position_pairs(n, (1..n).map(|v| (v - 1, v)).chain(closing))
}

/// Complete graph on `0..n`.
pub fn complete_graph(n: usize) -> Graph<usize> {
    from_position_pairs(n, (0..n).flat_map(|i| ((i + 1)..n).map(move |j| (i, j))))
}

/// Star with center `0` and leaves `1..=leaves`.
pub fn star_graph(leaves: usize) -> Graph<usize> {
    from_position_pairs(leaves + 1, (1..=leaves).map(|leaf| (0, leaf)))
}

/// Complete bipartite graph with sides `0..a` and `a..a+b`.
pub fn complete_bipartite_graph(a: usize, b: usize) -> Graph<usize> {
    from_position_pairs(a + b, (0..a).flat_map(|i| (a..a + b).map(move |j| (i, j))))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Adjacency;

    #[test]
    fn fixtures_have_expected_shapes() {
        assert_eq!(empty_graph(5).edge_count(), 0);
        assert_eq!(path_graph(5).edge_count(), 4);
        assert_eq!(path_graph(1).edge_count(), 0);
        assert_eq!(cycle_graph(5).edge_count(), 5);
        assert_eq!(cycle_graph(2).edge_count(), 1);
        assert_eq!(complete_graph(6).edge_count(), 15);
        assert_eq!(complete_graph(0).vertex_count(), 0);

        let star = star_graph(4);
        assert_eq!(star.vertex_count(), 5);
        assert_eq!(star.degree(&0).unwrap(), 4);
        assert_eq!(star.degree(&3).unwrap(), 1);

        let k33 = complete_bipartite_graph(3, 3);
        assert_eq!(k33.edge_count(), 9);
        assert!(!k33.has_edge(&0, &1).unwrap());
        assert!(k33.has_edge(&0, &5).unwrap());
    }

    #[test]
    fn gnp_is_reproducible_for_a_seed() {
        let a = gnp_random_graph(30, 0.3, DEFAULT_SEED).unwrap();
        let b = gnp_random_graph(30, 0.3, DEFAULT_SEED).unwrap();
        let c = gnp_random_graph(30, 0.3, DEFAULT_SEED + 1).unwrap();
        let edges = |g: &Graph<VertexLabel>| -> Vec<(VertexLabel, VertexLabel)> {
            g.edges().map(|(u, v)| (u.clone(), v.clone())).collect()
        };
        assert_eq!(edges(&a), edges(&b));
        assert_ne!(edges(&a), edges(&c));
    }

    #[test]
    fn gnp_extremes() {
        assert_eq!(gnp_random_graph(10, 0.0, 1).unwrap().edge_count(), 0);
        assert_eq!(gnp_random_graph(10, 1.0, 1).unwrap().edge_count(), 45);
        assert_eq!(gnp_random_graph(0, 0.5, 1).unwrap().vertex_count(), 0);
    }

    #[test]
    fn gnp_density_is_roughly_p() {
        let g = gnp_random_graph(200, 0.25, DEFAULT_SEED).unwrap();
        let density = g.edge_density();
        assert!((density - 0.25).abs() < 0.03, "density {density}");
    }

    #[test]
    fn density_percent_truncates() {
        assert_eq!(density_percent(0.125), 12);
        assert_eq!(density_percent(0.25), 25);
        assert_eq!(density_percent(0.5), 50);
        assert_eq!(density_percent(0.75), 75);
    }

    #[test]
    fn suite_writes_one_file_per_pair() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            min_vertices: 4,
            max_vertices: 6,
            densities: vec![0.25, 0.5],
            output_dir: dir.path().join("graphs"),
            ..GeneratorConfig::default()
        };
        let written = generate_suite(&config).unwrap();
        assert_eq!(written.len(), 6);
        assert!(config.output_dir.join("graph_4_25.json").is_file());
        assert!(config.output_dir.join("graph_6_50.json").is_file());
    }

    #[test]
    fn out_of_range_density_is_an_error() {
        for p in [1.5, -0.1, f64::NAN] {
            assert!(matches!(gnp_random_graph(5, p, 1), Err(Error::InvalidDensity(_))), "{p}");
        }

        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            min_vertices: 4,
            max_vertices: 4,
            densities: vec![0.25, 1.5],
            output_dir: dir.path().join("graphs"),
            ..GeneratorConfig::default()
        };
        assert!(matches!(generate_suite(&config), Err(Error::InvalidDensity(p)) if p == 1.5));
        assert!(!config.output_dir.exists(), "nothing is written for a rejected suite");
    }
}
