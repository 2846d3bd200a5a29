//! Experiment driver: runs each algorithm over a graph suite under a wall-clock budget
//! and records per-graph metrics.
//!
//! Graphs are processed in ascending [`GraphId`] order. An algorithm's sequence stops
//! at the first graph that exceeds the budget or fails; results gathered up to that
//! point are kept.

use crate::error::Result;
use crate::graph::Adjacency;
use crate::persist::{load_graph_dir, write_json_pretty, GraphId};
use crate::search::{run_with_budget, Algorithm, SearchOutcome};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// Configuration
// ============================================================================

/// Default per-graph wall-clock budget.
pub const DEFAULT_BUDGET: Duration = Duration::from_secs(120);

/// File holding every algorithm's table, keyed by algorithm name.
pub const ALL_RESULTS_FILE: &str = "all_results.json";

/// Parameters for an experiment run.
#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    /// Directory of `graph_<id>.json` files.
    pub graphs_dir: PathBuf,
    /// Directory receiving the result tables.
    pub results_dir: PathBuf,
    /// Per-graph budget; the first overrun stops the algorithm's sequence.
    pub budget: Duration,
    /// Algorithms to run, in order.
    pub algorithms: Vec<Algorithm>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            graphs_dir: PathBuf::from("graphs"),
            results_dir: PathBuf::from("results"),
            budget: DEFAULT_BUDGET,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

/// Result table file name for `algorithm`, e.g. `greedy_results.json`.
pub fn results_file_name(algorithm: Algorithm) -> String {
    format!("{}_results.json", algorithm.name())
}

// ============================================================================
// Records
// ============================================================================

/// Metrics of one algorithm on one graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Vertex count, from the graph id.
    pub vertices: usize,
    /// Edge density as a fraction, from the graph id.
    pub edge_density: f64,
    /// Seconds spent in the search.
    pub execution_time: f64,
    /// Operations counted by the search.
    pub operation_count: u64,
    /// Size of the set found.
    pub set_size: usize,
    /// Subsets in the search space (`2^vertices`); exhaustive runs only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combinations: Option<f64>,
}

impl RunRecord {
    /// Builds the record for `outcome` on graph `id`.
    pub fn from_outcome<V>(id: GraphId, outcome: &SearchOutcome<V>) -> Self {
        let combinations = (outcome.algorithm == Algorithm::Exhaustive)
            .then(|| 2f64.powi(i32::try_from(id.vertices).unwrap_or(i32::MAX)));
        Self {
            vertices: id.vertices,
            edge_density: id.edge_density(),
            execution_time: outcome.elapsed.as_secs_f64(),
            operation_count: outcome.operations.get(),
            set_size: outcome.set_size(),
            combinations,
        }
    }
}

/// Records of one algorithm, keyed (and ordered) by graph id.
pub type ResultTable = BTreeMap<GraphId, RunRecord>;

/// Why an algorithm's sequence ended before the last graph.
#[derive(Clone, Debug, PartialEq)]
pub enum StopReason {
    /// The search on `graph` did not finish within `budget`.
    BudgetExceeded {
        /// Graph being searched.
        graph: GraphId,
        /// Budget that ran out.
        budget: Duration,
    },
    /// The search on `graph` failed.
    Failed {
        /// Graph being searched.
        graph: GraphId,
        /// Error message.
        message: String,
    },
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::BudgetExceeded { graph, budget } => {
                write!(f, "graph {graph} exceeded the {:.1}s budget", budget.as_secs_f64())
            }
            StopReason::Failed { graph, message } => write!(f, "graph {graph} failed: {message}"),
        }
    }
}

/// Outcome of running one algorithm over a suite.
#[derive(Clone, Debug)]
pub struct ExperimentSummary {
    /// Algorithm that was run.
    pub algorithm: Algorithm,
    /// Completed runs.
    pub results: ResultTable,
    /// Set when the sequence ended early.
    pub stopped: Option<StopReason>,
}

impl ExperimentSummary {
    /// Largest graph processed before any stop.
    pub fn largest_completed(&self) -> Option<GraphId> {
        self.results.keys().next_back().copied()
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Runs `algorithm` over `graphs` in ascending id order, stopping at the first budget
/// overrun or failure.
pub fn run_experiments<G>(
    graphs: &[(GraphId, Arc<G>)],
    algorithm: Algorithm,
    budget: Duration,
) -> ExperimentSummary
where
    G: Adjacency + Send + Sync + 'static,
    G::Vertex: Send + 'static,
{
    let mut ordered: Vec<&(GraphId, Arc<G>)> = graphs.iter().collect();
    ordered.sort_by_key(|(id, _)| *id);

    let mut results = ResultTable::new();
    let mut stopped = None;
    for (id, graph) in ordered {
        info!("testing graph {id} with {}", algorithm.label());
        match run_with_budget(algorithm, Arc::clone(graph), budget) {
            Ok(Some(outcome)) => {
                let record = RunRecord::from_outcome(*id, &outcome);
                info!(
                    "graph {id}: set size {} in {:.6}s, {} operations",
                    record.set_size, record.execution_time, record.operation_count
                );
                results.insert(*id, record);
            }
            Ok(None) => {
                stopped = Some(StopReason::BudgetExceeded { graph: *id, budget });
                break;
            }
            Err(e) => {
                stopped = Some(StopReason::Failed {
                    graph: *id,
                    message: e.to_string(),
                });
                break;
            }
        }
    }

    let summary = ExperimentSummary {
        algorithm,
        results,
        stopped,
    };
    if let Some(reason) = &summary.stopped {
        warn!("{} stopped: {reason}", algorithm.label());
    }
    match summary.largest_completed() {
        Some(id) => info!("{}: largest graph processed is {id}", algorithm.label()),
        None => info!("{}: no graph processed", algorithm.label()),
    }
    summary
}

/// Loads the graph suite, runs every configured algorithm and writes
/// `<algorithm>_results.json` per algorithm plus [`ALL_RESULTS_FILE`].
///
/// Algorithms with no completed run are left out of every file, and
/// [`ALL_RESULTS_FILE`] is only written when some algorithm has results.
///
/// Algorithms run one after another in the same process. A search abandoned at its
/// budget keeps a core busy until it ends (see [`run_with_budget`]), so timings taken
/// after an overrun may be contended.
///
/// # Errors
/// Returns an error if the graphs cannot be loaded or a result file cannot be written.
pub fn run_all(config: &ExperimentConfig) -> Result<Vec<ExperimentSummary>> {
    let graphs: Vec<(GraphId, Arc<_>)> = load_graph_dir(&config.graphs_dir)?
        .into_iter()
        .map(|(id, graph)| (id, Arc::new(graph)))
        .collect();
    info!("loaded {} graphs from {}", graphs.len(), config.graphs_dir.display());

    let mut summaries = Vec::with_capacity(config.algorithms.len());
    for &algorithm in &config.algorithms {
        info!("running experiments for {}", algorithm.label());
        let summary = run_experiments(&graphs, algorithm, config.budget);
        if !summary.results.is_empty() {
            write_table(&config.results_dir, algorithm, &summary.results)?;
        }
        summaries.push(summary);
    }

    let all = combined_tables(&summaries);
    if all.is_empty() {
        warn!("no algorithm completed a run, {ALL_RESULTS_FILE} not written");
    } else {
        write_json_pretty(&all, &config.results_dir.join(ALL_RESULTS_FILE))?;
        info!("results written to {}", config.results_dir.display());
    }
    Ok(summaries)
}

/// Non-empty result tables keyed by algorithm name.
fn combined_tables(summaries: &[ExperimentSummary]) -> BTreeMap<&'static str, &ResultTable> {
    summaries
        .iter()
        .filter(|s| !s.results.is_empty())
        .map(|s| (s.algorithm.name(), &s.results))
        .collect()
}

fn write_table(dir: &Path, algorithm: Algorithm, table: &ResultTable) -> Result<()> {
    let path = dir.join(results_file_name(algorithm));
    write_json_pretty(table, &path)?;
    info!("{} results saved to {}", algorithm.label(), path.display());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
