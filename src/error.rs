//! Crate-wide error type.

use std::io;
use std::path::PathBuf;

/// Errors produced by graph construction, the searches and the experiment tooling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A query referenced a vertex that is not part of the graph.
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    /// An edge from a vertex to itself was supplied.
    #[error("self-loop at vertex {0}")]
    SelfLoop(String),

    /// A textual vertex id could not be parsed.
    #[error("invalid vertex label {label:?}: {reason}")]
    InvalidLabel {
        /// The offending text.
        label: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An edge probability outside `[0, 1]` (or NaN) was supplied.
    #[error("invalid edge density {0}, expected a probability in [0, 1]")]
    InvalidDensity(f64),

    /// A graph id did not have the `<vertices>_<densityPercent>` shape.
    #[error("invalid graph id {0:?}, expected \"<vertices>_<densityPercent>\"")]
    InvalidGraphId(String),

    /// An algorithm name was not recognised.
    #[error("unknown algorithm {0:?}, expected \"exhaustive\" or \"greedy\"")]
    UnknownAlgorithm(String),

    /// Filesystem failure.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// Malformed or unserializable JSON.
    #[error("JSON error in {}: {source}", path.display())]
    Json {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// A budgeted search worker could not be started.
    #[error("failed to spawn search worker: {0}")]
    Spawn(#[source] io::Error),

    /// A budgeted search worker terminated without reporting an outcome.
    #[error("search worker for {0} terminated without a result")]
    WorkerLost(String),

    /// A self-check over the fixture graphs failed.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
