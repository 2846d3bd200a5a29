//! End-to-end scenarios through the public API.

use mis_lab::compare::compare_files;
use mis_lab::construction::{
    complete_bipartite_graph, complete_graph, generate_suite, star_graph, GeneratorConfig,
};
use mis_lab::experiment::{results_file_name, run_all, ExperimentConfig};
use mis_lab::iset::is_independent;
use mis_lab::persist::{load_adjacency_json, save_adjacency_json};
use mis_lab::prelude::*;
use std::time::Duration;

#[test]
fn path_of_five_vertices() {
    let graph = Graph::from_edges(0..5u32, (0..4).map(|i| (i, i + 1))).unwrap();
    for algorithm in Algorithm::ALL {
        let (set, _) = algorithm.run(&graph).unwrap();
        assert_eq!(set.members(), &[0, 2, 4], "{algorithm}");
    }
}

#[test]
fn star_with_four_leaves() {
    let graph = star_graph(4);
    let (exact, _) = exhaustive_search(&graph).unwrap();
    let (greedy, ops) = greedy_search(&graph).unwrap();
    assert_eq!(exact.members(), &[1, 2, 3, 4]);
    assert_eq!(greedy.members(), &[1, 2, 3, 4]);
    assert_eq!(ops, OperationCount::new(35));
}

#[test]
fn complete_and_bipartite_graphs() {
    let (set, ops) = exhaustive_search(&complete_graph(4)).unwrap();
    assert_eq!(set.members(), &[0]);
    assert_eq!(ops.get(), 32 - 8);

    let k33 = complete_bipartite_graph(3, 3);
    for algorithm in Algorithm::ALL {
        let (set, _) = algorithm.run(&k33).unwrap();
        assert_eq!(set.len(), 3);
        assert!(is_independent(&k33, set.members()).unwrap());
    }
}

#[test]
fn tuple_labelled_graph_survives_a_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph_6_50.json");

    let label = |r: i64, c: i64| VertexLabel::new(vec![r, c]).unwrap();
    let graph = Graph::from_edges(
        [label(0, 0), label(0, 1), label(1, 0), label(1, 1)],
        [
            (label(0, 0), label(0, 1)),
            (label(0, 1), label(1, 1)),
            (label(1, 1), label(1, 0)),
            (label(1, 0), label(0, 0)),
            (label(2, 2), label(0, 0)),
        ],
    )
    .unwrap();
    save_adjacency_json(&graph, &path).unwrap();

    let loaded = load_adjacency_json(&path).unwrap();
    assert_eq!(loaded.vertices(), graph.vertices());
    assert_eq!(exhaustive_search(&loaded).unwrap(), exhaustive_search(&graph).unwrap());
    assert_eq!(greedy_search(&loaded).unwrap(), greedy_search(&graph).unwrap());

    let (set, _) = exhaustive_search(&loaded).unwrap();
    assert_eq!(set.members(), &[label(0, 1), label(1, 0), label(2, 2)]);
}

#[test]
fn generate_run_and_compare() {
    let dir = tempfile::tempdir().unwrap();
    let generator = GeneratorConfig {
        min_vertices: 4,
        max_vertices: 9,
        densities: vec![0.125, 0.5],
        output_dir: dir.path().join("graphs"),
        ..GeneratorConfig::default()
    };
    assert_eq!(generate_suite(&generator).unwrap().len(), 12);

    let config = ExperimentConfig {
        graphs_dir: generator.output_dir.clone(),
        results_dir: dir.path().join("results"),
        budget: Duration::from_secs(60),
        ..ExperimentConfig::default()
    };
    let summaries = run_all(&config).unwrap();
    let [exhaustive, greedy] = summaries.as_slice() else {
        panic!("expected two summaries, got {}", summaries.len());
    };
    for (id, exact) in &exhaustive.results {
        let heuristic = &greedy.results[id];
        assert!(heuristic.set_size <= exact.set_size, "graph {id}");
        assert_eq!(exact.vertices, id.vertices);
    }

    let report = compare_files(
        &config.results_dir.join(results_file_name(Algorithm::Exhaustive)),
        &config.results_dir.join(results_file_name(Algorithm::Greedy)),
        None,
    )
    .unwrap();
    assert_eq!(report.total_graphs, 12);
    assert_eq!(report.matching_solutions + report.different_solutions, 12);
    assert_eq!(
        report.errors_by_vertices.values().sum::<usize>(),
        report.different_solutions
    );
}

#[test]
fn fixtures_validate() {
    validate_fixtures().unwrap();
}
