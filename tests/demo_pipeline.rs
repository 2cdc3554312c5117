use std::path::PathBuf;

use waypoint::{
    fs::{SvgAnimation, save_outcome_json},
    search::{FrameCapture, GraphParams, PointGraph, SolveOptions, WiringMode},
};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("waypoint-{}-{name}", std::process::id()))
}

fn dense_params() -> GraphParams {
    GraphParams {
        num_nodes: 200,
        canvas_size: 200,
        neighbor_distance: 40.0,
        max_neighbors: 12,
        wiring: WiringMode::Radius,
        num_random_edges: 0,
    }
}

#[test]
fn generated_graph_search_renders_and_dumps() {
    let graph = PointGraph::generate(&dense_params(), 42).unwrap();
    let outcome = graph.solve(SolveOptions::default());

    assert_eq!(outcome.frames.len(), 1 + outcome.stats.get_extractions());
    if outcome.found {
        let last = outcome.frames.last().unwrap();
        assert_eq!(last.path[0], graph.goal());
        assert_eq!(*last.path.last().unwrap(), graph.start());
        let straight = graph.distance(graph.start(), graph.goal());
        assert!(graph.path_length(last) >= straight - 1e-9);
    }

    let svg_path = scratch_path("pipeline.svg");
    SvgAnimation::default()
        .save(&graph, &outcome.frames, &svg_path)
        .unwrap();
    let svg = std::fs::read_to_string(&svg_path).unwrap();
    assert_eq!(svg.matches("<g id=").count(), outcome.frames.len());
    assert_eq!(svg.matches("<circle").count(), graph.len());

    let json_path = scratch_path("pipeline.json");
    save_outcome_json(&outcome, &json_path).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value["found"], serde_json::json!(outcome.found));
    assert_eq!(
        value["frames"].as_array().unwrap().len(),
        outcome.frames.len()
    );

    let _ = std::fs::remove_file(svg_path);
    let _ = std::fs::remove_file(json_path);
}

#[test]
fn final_only_capture_matches_full_run() {
    let graph = PointGraph::generate(&dense_params(), 7).unwrap();
    let full = graph.solve(SolveOptions::default());
    let last_only = graph.solve(SolveOptions {
        capture: FrameCapture::FinalOnly,
    });

    assert_eq!(full.found, last_only.found);
    assert_eq!(last_only.frames.len(), 1);
    assert_eq!(last_only.frames.last(), full.frames.last());
    assert_eq!(full.stats, last_only.stats);
}

#[test]
fn sparse_random_wiring_may_fail_but_still_traces() {
    let params = GraphParams {
        num_nodes: 100,
        wiring: WiringMode::Random,
        num_random_edges: 5,
        ..GraphParams::default()
    };
    let graph = PointGraph::generate(&params, 1).unwrap();
    let outcome = graph.solve(SolveOptions::default());

    assert!(!outcome.frames.is_empty());
    assert_eq!(outcome.frames[0].path, vec![graph.start()]);
    if !outcome.found {
        let expanded = outcome.stats.get_extractions();
        assert_eq!(outcome.frames.len(), expanded + 1);
    }
}

#[test]
fn missing_output_directory_is_an_io_error() {
    let graph = PointGraph::generate(&dense_params(), 3).unwrap();
    let outcome = graph.solve(SolveOptions::default());
    let path = scratch_path("no-such-dir").join("graph.svg");

    let err = SvgAnimation::default()
        .save(&graph, &outcome.frames, &path)
        .unwrap_err();
    assert!(matches!(err, waypoint::WaypointError::Io(_)));
}
