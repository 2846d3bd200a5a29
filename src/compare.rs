//! Greedy vs. exhaustive comparison over stored result tables.

use crate::error::Result;
use crate::experiment::ResultTable;
use crate::persist::{read_json, write_json_pretty};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// How often the greedy set size matched the exhaustive optimum.
///
/// `total_graphs` counts every exhaustive record; graphs without a greedy record are
/// neither matching nor different. Mismatches are tallied by vertex count and by edge
/// density in whole percent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Graphs with an exhaustive result.
    pub total_graphs: usize,
    /// Graphs where both sizes agree.
    pub matching_solutions: usize,
    /// Graphs where the greedy set is smaller.
    pub different_solutions: usize,
    /// Mismatches per vertex count.
    pub errors_by_vertices: BTreeMap<usize, usize>,
    /// Mismatches per edge density percent.
    pub errors_by_density_percent: BTreeMap<u32, usize>,
}

impl ComparisonReport {
    /// Fraction of compared graphs where greedy found the optimum (`None` if nothing
    /// was compared).
    pub fn match_rate(&self) -> Option<f64> {
        let compared = self.matching_solutions + self.different_solutions;
        (compared > 0).then(|| self.matching_solutions as f64 / compared as f64)
    }
}

/// Compares greedy set sizes against the exhaustive ones, graph by graph.
pub fn compare(exhaustive: &ResultTable, greedy: &ResultTable) -> ComparisonReport {
    let mut report = ComparisonReport {
        total_graphs: exhaustive.len(),
        ..ComparisonReport::default()
    };

    for (id, exact) in exhaustive {
        let Some(heuristic) = greedy.get(id) else {
            continue;
        };
        if heuristic.set_size == exact.set_size {
            report.matching_solutions += 1;
        } else {
            report.different_solutions += 1;
            *report.errors_by_vertices.entry(id.vertices).or_default() += 1;
            *report
                .errors_by_density_percent
                .entry(id.density_percent)
                .or_default() += 1;
        }
    }
    report
}

/// Loads a result table written by the experiment driver.
///
/// # Errors
/// Returns an error if the file is missing or malformed.
pub fn load_results(path: &Path) -> Result<ResultTable> {
    read_json(path)
}

/// Compares two result files and, if `out` is given, writes the report there.
///
/// # Errors
/// Returns an error if a table cannot be read or the report cannot be written.
pub fn compare_files(
    exhaustive: &Path,
    greedy: &Path,
    out: Option<&Path>,
) -> Result<ComparisonReport> {
    let report = compare(&load_results(exhaustive)?, &load_results(greedy)?);
    info!(
        "{} graphs: {} matching, {} different",
        report.total_graphs, report.matching_solutions, report.different_solutions
    );
    if let Some(path) = out {
        write_json_pretty(&report, path)?;
        info!("comparison saved to {}", path.display());
    }
    Ok(report)
}
