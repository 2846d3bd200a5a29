//! # Maximum Independent Set Lab
//!
//! Exhaustive and greedy Maximum Independent Set (MIS) search on undirected graphs, with
//! operation counting for complexity measurements.
//!
//! This crate provides:
//! - An **exact** search that tries vertex subsets from largest to smallest and returns
//!   the first independent one (lexicographically first among the optima).
//! - A **greedy** heuristic that walks vertices by ascending degree (stable bottom-up
//!   merge sort) and takes every vertex not adjacent to one already taken.
//! - Tooling around them: seeded G(n, p) graph generation, adjacency-list JSON files,
//!   a budgeted experiment driver and a greedy-vs-exhaustive comparison.
//!
//! ## Quick Start
//!
//! ```
//! use mis_lab::construction::path_graph;
//! use mis_lab::{exhaustive_search, greedy_search};
//!
//! // 0 - 1 - 2 - 3 - 4
//! let graph = path_graph(5);
//!
//! let (exact, exact_ops) = exhaustive_search(&graph).unwrap();
//! let (greedy, greedy_ops) = greedy_search(&graph).unwrap();
//!
//! assert_eq!(exact.members(), &[0, 2, 4]);
//! assert_eq!(greedy.members(), &[0, 2, 4]);
//! println!("exhaustive: {exact_ops} operations, greedy: {greedy_ops} operations");
//! ```
//!
//! ## Bring Your Own Graph
//!
//! Both searches accept anything implementing [`graph::Adjacency`]:
//!
//! ```
//! use mis_lab::graph::Graph;
//! use mis_lab::greedy_search;
//!
//! let graph = Graph::from_edges(["a", "b", "c"], [("a", "b"), ("b", "c")]).unwrap();
//! let (set, _) = greedy_search(&graph).unwrap();
//! assert_eq!(set.members(), &["a", "c"]);
//! ```
//!
//! ## Budgeted Runs
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use mis_lab::construction::star_graph;
//! use mis_lab::search::{run_with_budget, Algorithm};
//!
//! let outcome = run_with_budget(Algorithm::Exhaustive, Arc::new(star_graph(4)), Duration::from_secs(10))
//!     .unwrap()
//!     .expect("finishes well within budget");
//! assert_eq!(outcome.set_size(), 4);
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: `Adjacency` capability trait and the `Graph` adjacency-list type.
//! - [`exhaustive`] / [`greedy`]: the two searches.
//! - [`iset`]: independent sets, operation counters and independence checks.
//! - [`search`]: algorithm selector and wall-clock budgeted execution.
//! - [`construction`]: G(n, p) generator and fixture graphs.
//! - [`label`] / [`persist`]: textual vertex ids and JSON files.
//! - [`experiment`] / [`compare`]: the experiment driver and its comparison report.
//! - [`validate`]: deterministic self-check on graphs with known independence numbers.
//!
//! ## Performance Notes
//!
//! - The exhaustive search is \(O(2^n \cdot n^2)\); beyond a few dozen vertices it only
//!   makes sense under a budget.
//! - Vertex lookups go through `rustc-hash` maps.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::inline_always)] // Counter ticks sit in the innermost loops
#![allow(clippy::doc_markdown)] // LaTeX-style notation in docs

pub mod compare;
pub mod construction;
pub mod error;
pub mod exhaustive;
pub mod experiment;
pub mod graph;
pub mod greedy;
pub mod iset;
pub mod label;
pub mod persist;
pub mod search;
pub mod validate;

pub use error::{Error, Result};
pub use exhaustive::exhaustive_search;
pub use greedy::greedy_search;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::exhaustive::exhaustive_search;
    pub use crate::graph::{Adjacency, Graph};
    pub use crate::greedy::greedy_search;
    pub use crate::iset::{IndependentSet, OperationCount};
    pub use crate::label::VertexLabel;
    pub use crate::search::{run_with_budget, Algorithm, SearchOutcome};
    pub use crate::validate::validate_fixtures;
}
