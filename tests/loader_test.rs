//! Loading the three datasets from files on disk.

use std::fs;
use std::path::PathBuf;

use lexnet::loader::{frequency_store_from_path, graph_from_path, lexicon_from_path};
use lexnet::prelude::*;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn engine_from_files_end_to_end() {
    let dir = TempDir::new().unwrap();
    let synsets = write(
        &dir,
        "synsets.txt",
        "0,vehicle,a conveyance\n1,wheeled_vehicle,a vehicle with wheels\n2,cart,a heavy open wagon\n",
    );
    let hyponyms = write(&dir, "hyponyms.txt", "0,1\n1,2\n");
    let words = write(&dir, "words.csv", "cart\t2000\t300\nvehicle\t2000\t100\n");
    let totals = write(&dir, "total_counts.csv", "2000,100000\n");

    let lexicon = lexicon_from_path(&synsets).unwrap();
    let (graph, report) = graph_from_path(&hyponyms).unwrap();
    let frequency = frequency_store_from_path(&words, &totals).unwrap();

    assert!(report.warnings.is_empty());
    assert_eq!(report.nodes_loaded, 3);
    assert_eq!(report.edges_loaded, 2);

    let engine = QueryEngine::new(graph, lexicon, frequency);
    let query = RelatedTermsQuery::new(["vehicle"]).with_window(2000, 2020);
    assert_eq!(engine.handle(&query), "[cart, vehicle, wheeled_vehicle]");
    assert_eq!(engine.handle(&query.with_top_k(1)), "[cart]");
}

#[test]
fn duplicate_edges_are_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    let hyponyms = write(&dir, "hyponyms.txt", "0,1\n0,1,2\n");

    let (graph, report) = graph_from_path(&hyponyms).unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(
        report.warnings,
        vec![LoadWarning::DuplicateEdge { parent: 0, child: 1 }]
    );
}

#[test]
fn malformed_synset_record_is_fatal() {
    let dir = TempDir::new().unwrap();
    let synsets = write(&dir, "synsets.txt", "0,vehicle\nnot_a_number,cart\n");

    let err = lexicon_from_path(&synsets).unwrap_err();
    assert!(matches!(err, LexnetError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = lexicon_from_path(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, LexnetError::Io(_)));
}
