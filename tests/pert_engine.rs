use std::error::Error;

use pertdag::config::sample_project;
use pertdag::engine::{
    expected_time, is_insertion_topological, round_slack, variance, PertEngine,
};
use pertdag::graph::{Estimates, TaskGraph};
use pertdag::types::PassOrder;
use pertdag_test_utils::builders::GraphBuilder;
use pertdag_test_utils::{assert_close, capture_logs, init_tracing};

type TestResult = Result<(), Box<dyn Error>>;

/// X(1,2,3) -> Y(2,4,6)
fn two_task_chain() -> TaskGraph {
    GraphBuilder::new()
        .task("X", 1.0, 2.0, 3.0)
        .task("Y", 2.0, 4.0, 6.0)
        .dep("X", "Y")
        .build()
}

fn assert_phase_properties(graph: &TaskGraph, project_duration: f64) {
    for t in graph {
        let est = &t.estimates;
        let s = &t.schedule;

        assert_close(s.expected, (est.optimistic + 4.0 * est.most_likely + est.pessimistic) / 6.0);
        assert_close(s.variance, ((est.pessimistic - est.optimistic) / 6.0).powi(2));
        if t.predecessors().is_empty() {
            assert_eq!(s.early_start, 0.0, "task {}", t.id);
        }
        assert_close(s.early_finish, s.early_start + s.expected);
        if t.successors().is_empty() {
            assert_close(s.late_finish, project_duration);
        }
        assert_close(s.late_start, s.late_finish - s.expected);
        assert_eq!(s.slack, round_slack(s.late_finish - s.early_finish));
        assert_eq!(s.critical, s.slack == 0.0);
    }
}

#[test]
fn two_task_chain_is_fully_critical() -> TestResult {
    init_tracing();
    let mut graph = two_task_chain();

    let analysis = PertEngine::default().analyze(&mut graph);

    let x = graph.get("X")?.schedule;
    let y = graph.get("Y")?.schedule;

    assert_close(x.expected, 2.0);
    assert_close(y.expected, 4.0);
    assert_close(x.early_start, 0.0);
    assert_close(x.early_finish, 2.0);
    assert_close(y.early_start, 2.0);
    assert_close(y.early_finish, 6.0);
    assert_close(analysis.project_duration, 6.0);
    assert_close(y.late_finish, 6.0);
    assert_close(y.late_start, 2.0);
    assert_close(x.late_finish, 2.0);
    assert_close(x.late_start, 0.0);
    assert_eq!(x.slack, 0.0);
    assert_eq!(y.slack, 0.0);
    assert!(x.critical && y.critical);
    assert_eq!(analysis.critical_path, vec!["X".to_string(), "Y".to_string()]);
    Ok(())
}

#[test]
fn independent_task_gets_slack_up_to_project_end() -> TestResult {
    let mut graph = GraphBuilder::new()
        .task("X", 1.0, 2.0, 3.0)
        .task("Y", 2.0, 4.0, 6.0)
        .task("Z", 1.0, 1.0, 1.0)
        .dep("X", "Y")
        .build();

    let analysis = PertEngine::default().analyze(&mut graph);
    let z = graph.get("Z")?.schedule;

    assert_close(z.expected, 1.0);
    assert_close(z.early_start, 0.0);
    assert_close(z.early_finish, 1.0);
    assert_close(z.late_finish, 6.0);
    assert_close(z.late_start, 5.0);
    assert_eq!(z.slack, 5.0);
    assert!(!z.critical);
    assert_eq!(analysis.critical_path, vec!["X".to_string(), "Y".to_string()]);
    Ok(())
}

#[test]
fn phases_can_be_run_one_by_one() -> TestResult {
    let mut graph = two_task_chain();
    let engine = PertEngine::new(PassOrder::Insertion);

    engine.compute_expected_times(&mut graph);
    assert_close(graph.get("Y")?.schedule.expected, 4.0);
    assert_eq!(graph.get("Y")?.schedule.early_start, 0.0);

    engine.forward_pass(&mut graph);
    assert_close(graph.get("Y")?.schedule.early_finish, 6.0);
    assert_close(PertEngine::project_duration(&graph), 6.0);

    let duration = engine.backward_pass(&mut graph);
    assert_close(duration, 6.0);
    assert!(!graph.get("X")?.schedule.critical);

    engine.compute_slack(&mut graph);
    assert!(graph.get("X")?.schedule.critical);
    Ok(())
}

#[test]
fn sample_project_matches_hand_computed_schedule() -> TestResult {
    let mut graph = sample_project()?.build_graph()?;
    let analysis = PertEngine::default().analyze(&mut graph);

    assert_close(analysis.project_duration, 27.0);
    assert_eq!(analysis.critical_path, vec!["A", "C", "E", "F", "G", "H"]);
    assert_phase_properties(&graph, analysis.project_duration);

    let expected = [
        // id, ES, EF, LS, LF, slack
        ("A", 0.0, 3.0, 0.0, 3.0, 0.0),
        ("B", 3.0, 7.0, 9.0, 13.0, 6.0),
        ("C", 3.0, 9.0, 3.0, 9.0, 0.0),
        ("D", 7.0, 10.0, 13.0, 16.0, 6.0),
        ("E", 9.0, 16.0, 9.0, 16.0, 0.0),
        ("F", 16.0, 24.0, 16.0, 24.0, 0.0),
        ("G", 24.0, 26.0, 24.0, 26.0, 0.0),
        ("H", 26.0, 27.0, 26.0, 27.0, 0.0),
    ];
    for (id, es, ef, ls, lf, slack) in expected {
        let s = graph.get(id)?.schedule;
        assert_close(s.early_start, es);
        assert_close(s.early_finish, ef);
        assert_close(s.late_start, ls);
        assert_close(s.late_finish, lf);
        assert_eq!(s.slack, slack, "slack of {id}");
    }
    Ok(())
}

#[test]
fn variance_uses_spread_of_estimates() {
    let est = Estimates::new(2.0, 3.0, 8.0);
    assert_close(expected_time(&est), (2.0 + 12.0 + 8.0) / 6.0);
    assert_close(variance(&est), 1.0);
    assert_close(variance(&Estimates::new(5.0, 5.0, 5.0)), 0.0);
}

#[test]
fn slack_rounding_absorbs_float_noise() {
    assert_eq!(round_slack(1e-9), 0.0);
    assert_eq!(round_slack(-1e-9), 0.0);
    assert_eq!(round_slack(0.123456), 0.12346);
    assert_eq!(round_slack(2.0), 2.0);
}

#[test]
fn fractional_estimates_still_yield_critical_chain() {
    // Te values with no exact binary representation.
    let mut graph = GraphBuilder::new()
        .task("A", 0.1, 0.2, 0.7)
        .task("B", 0.3, 0.35, 0.9)
        .task("C", 0.2, 0.25, 0.3)
        .dep("A", "B")
        .dep("B", "C")
        .build();

    let analysis = PertEngine::default().analyze(&mut graph);
    assert_eq!(analysis.critical_path, vec!["A", "B", "C"]);
}

#[test]
fn duplicate_edges_do_not_change_results() {
    let mut single = GraphBuilder::new()
        .task("A", 1.0, 2.0, 3.0)
        .task("B", 1.0, 3.0, 5.0)
        .task("C", 2.0, 2.0, 2.0)
        .dep("A", "B")
        .dep("A", "C")
        .build();
    let mut doubled = GraphBuilder::new()
        .task("A", 1.0, 2.0, 3.0)
        .task("B", 1.0, 3.0, 5.0)
        .task("C", 2.0, 2.0, 2.0)
        .dep("A", "B")
        .dep("A", "B")
        .dep("A", "C")
        .dep("A", "C")
        .build();

    let engine = PertEngine::default();
    assert_eq!(engine.analyze(&mut single), engine.analyze(&mut doubled));
    for (a, b) in single.iter().zip(doubled.iter()) {
        assert_eq!(a.schedule, b.schedule);
    }
}

#[test]
fn empty_graph_has_zero_duration() {
    let mut graph = TaskGraph::new();
    let analysis = PertEngine::default().analyze(&mut graph);
    assert_eq!(analysis.project_duration, 0.0);
    assert!(analysis.critical_path.is_empty());
}

#[test]
fn results_go_stale_after_mutation_until_recomputed() -> TestResult {
    let mut graph = two_task_chain();
    let engine = PertEngine::default();
    engine.analyze(&mut graph);

    graph.update_task("X", "longer", Estimates::new(4.0, 4.0, 4.0))?;
    assert_close(graph.get("Y")?.schedule.early_start, 2.0);

    let analysis = engine.analyze(&mut graph);
    assert_close(graph.get("Y")?.schedule.early_start, 4.0);
    assert_close(analysis.project_duration, 8.0);
    Ok(())
}

/// Successor inserted before its predecessor: Y first, then X, edge X -> Y.
fn out_of_order_chain() -> TaskGraph {
    GraphBuilder::new()
        .task("Y", 2.0, 4.0, 6.0)
        .task("X", 1.0, 2.0, 3.0)
        .dep("X", "Y")
        .build()
}

#[test]
fn topological_order_is_independent_of_insertion_order() -> TestResult {
    init_tracing();
    let mut graph = out_of_order_chain();

    let analysis = PertEngine::new(PassOrder::Topological).analyze(&mut graph);

    assert_close(graph.get("Y")?.schedule.early_start, 2.0);
    assert_close(analysis.project_duration, 6.0);
    // Critical path is still reported in stored order.
    assert_eq!(analysis.critical_path, vec!["Y", "X"]);
    Ok(())
}

#[test]
fn insertion_order_reproduces_understated_early_start() -> TestResult {
    let mut graph = out_of_order_chain();

    let analysis = PertEngine::new(PassOrder::Insertion).analyze(&mut graph);

    // Y is visited while X still has its default EF of 0.
    assert_close(graph.get("Y")?.schedule.early_start, 0.0);
    assert_close(graph.get("Y")?.schedule.early_finish, 4.0);
    assert_close(analysis.project_duration, 4.0);
    Ok(())
}

#[test]
fn both_orders_agree_when_insertion_is_topological() {
    let mut a = sample_project().expect("sample").build_graph().expect("graph");
    let mut b = a.clone();

    let topo = PertEngine::new(PassOrder::Topological).analyze(&mut a);
    let legacy = PertEngine::new(PassOrder::Insertion).analyze(&mut b);

    assert_eq!(topo, legacy);
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.schedule, y.schedule, "task {}", x.id);
    }
}

#[test]
fn cyclic_graph_falls_back_to_stored_order_without_panicking() {
    let mut graph = GraphBuilder::new()
        .task("A", 1.0, 1.0, 1.0)
        .task("B", 1.0, 1.0, 1.0)
        .dep("A", "B")
        .dep("B", "A")
        .build();

    let analysis = PertEngine::new(PassOrder::Topological).analyze(&mut graph);
    assert!(analysis.project_duration.is_finite());
}

#[test]
fn cycle_fallback_is_reported_once_per_run() {
    let mut graph = GraphBuilder::new()
        .task("A", 1.0, 1.0, 1.0)
        .task("B", 1.0, 1.0, 1.0)
        .dep("A", "B")
        .dep("B", "A")
        .build();

    let logs = capture_logs(|| {
        PertEngine::new(PassOrder::Topological).analyze(&mut graph);
    });

    assert_eq!(logs.matches("falling back to stored order").count(), 1, "{logs}");
}

#[test]
fn detects_whether_stored_order_is_topological() -> TestResult {
    assert!(is_insertion_topological(&two_task_chain()));
    assert!(is_insertion_topological(&sample_project()?.build_graph()?));
    assert!(is_insertion_topological(&TaskGraph::new()));
    assert!(!is_insertion_topological(&out_of_order_chain()));
    Ok(())
}

#[test]
fn engine_reports_its_pass_order() {
    assert_eq!(PertEngine::default().order(), PassOrder::Topological);
    assert_eq!(PertEngine::new(PassOrder::Insertion).order(), PassOrder::Insertion);
}
