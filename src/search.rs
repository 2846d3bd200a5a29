//! Algorithm selection, timing and budgeted execution.

use crate::error::{Error, Result};
use crate::exhaustive::exhaustive_search;
use crate::graph::Adjacency;
use crate::greedy::greedy_search;
use crate::iset::{IndependentSet, OperationCount};
use crossbeam::channel::{self, RecvTimeoutError};
use log::{debug, warn};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

// ============================================================================
// Algorithm selector
// ============================================================================

/// The two independent set searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Exact search over all subsets, largest first.
    Exhaustive,
    /// Minimum-degree-first heuristic.
    Greedy,
}

impl Algorithm {
    /// Both algorithms, exhaustive first.
    pub const ALL: [Algorithm; 2] = [Algorithm::Exhaustive, Algorithm::Greedy];

    /// Short machine name, also used for result file names.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Exhaustive => "exhaustive",
            Algorithm::Greedy => "greedy",
        }
    }

    /// Human-readable name for logs.
    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::Exhaustive => "Exhaustive Search",
            Algorithm::Greedy => "Greedy Heuristic",
        }
    }

    /// Runs the algorithm on `graph`.
    ///
    /// # Errors
    /// Propagates the search's error for a malformed graph.
    pub fn run<G: Adjacency>(
        self,
        graph: &G,
    ) -> Result<(IndependentSet<G::Vertex>, OperationCount)> {
        match self {
            Algorithm::Exhaustive => exhaustive_search(graph),
            Algorithm::Greedy => greedy_search(graph),
        }
    }

    /// Runs the algorithm and measures its wall-clock time.
    ///
    /// # Errors
    /// Propagates the search's error for a malformed graph.
    pub fn timed<G: Adjacency>(self, graph: &G) -> Result<SearchOutcome<G::Vertex>> {
        let start = Instant::now();
        let (set, operations) = self.run(graph)?;
        Ok(SearchOutcome {
            algorithm: self,
            set,
            operations,
            elapsed: start.elapsed(),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exhaustive" => Ok(Algorithm::Exhaustive),
            "greedy" => Ok(Algorithm::Greedy),
            _ => Err(Error::UnknownAlgorithm(s.to_owned())),
        }
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of one timed search.
#[derive(Clone, Debug, Serialize)]
pub struct SearchOutcome<V> {
    /// Algorithm that produced the set.
    pub algorithm: Algorithm,
    /// The independent set found.
    pub set: IndependentSet<V>,
    /// Operations spent.
    #[serde(rename = "operation_count")]
    pub operations: OperationCount,
    /// Wall-clock time of the search call alone.
    #[serde(rename = "execution_time", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

impl<V> SearchOutcome<V> {
    /// Size of the set found.
    pub fn set_size(&self) -> usize {
        self.set.len()
    }
}

fn serialize_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

// ============================================================================
// Budgeted execution
// ============================================================================

static LIVE_WORKERS: AtomicUsize = AtomicUsize::new(0);

/// Number of budgeted search workers still running in this process, including ones
/// abandoned after their budget ran out.
pub fn live_workers() -> usize {
    LIVE_WORKERS.load(Ordering::Relaxed)
}

/// Holds one slot of a live-worker counter for as long as the worker runs, panics included.
struct LiveWorker(&'static AtomicUsize);

impl LiveWorker {
    fn enter(counter: &'static AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::Relaxed);
        LiveWorker(counter)
    }
}

impl Drop for LiveWorker {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Runs `algorithm` on a worker thread and waits at most `budget` for it.
///
/// Returns `Ok(None)` when the budget runs out. The searches cannot be interrupted, so a
/// timed-out worker is detached and keeps running until it finishes or the process
/// exits; its outcome is discarded. It keeps a core busy meanwhile, which can skew the
/// timings of later runs. [`live_workers`] reports how many are still going.
///
/// # Errors
/// Returns [`Error::Spawn`] if the worker cannot be started, [`Error::WorkerLost`] if it
/// dies without reporting (e.g. panics), or the search's own error.
pub fn run_with_budget<G>(
    algorithm: Algorithm,
    graph: Arc<G>,
    budget: Duration,
) -> Result<Option<SearchOutcome<G::Vertex>>>
where
    G: Adjacency + Send + Sync + 'static,
    G::Vertex: Send + 'static,
{
    let (tx, rx) = channel::bounded(1);
    let worker_name = format!("mis-{}", algorithm.name());

    let live = LiveWorker::enter(&LIVE_WORKERS);
    thread::Builder::new()
        .name(worker_name.clone())
        .spawn(move || {
            let _live = live;
            let outcome = algorithm.timed(graph.as_ref());
            // The receiver is gone once the caller has timed out.
            let _ = tx.send(outcome);
        })
        .map_err(Error::Spawn)?;

    match rx.recv_timeout(budget) {
        Ok(outcome) => {
            let outcome = outcome?;
            debug!(
                "{worker_name}: size {} in {:.6}s ({} operations)",
                outcome.set_size(),
                outcome.elapsed.as_secs_f64(),
                outcome.operations
            );
            Ok(Some(outcome))
        }
        Err(RecvTimeoutError::Timeout) => {
            warn!(
                "{worker_name}: no result within {:.1}s; the worker keeps running in the \
                 background ({} search workers live), later timings may be contended",
                budget.as_secs_f64(),
                live_workers()
            );
            Ok(None)
        }
        Err(RecvTimeoutError::Disconnected) => Err(Error::WorkerLost(worker_name)),
    }
}

// ============================================================================
// Tests
// ============================================================================
