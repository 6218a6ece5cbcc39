//! Scenario tests for the message-to-graph pipeline.

use argo_flow_core::data::{DEMO_USER_PROMPT, SIMULATED_AI_RESPONSE};
use argo_flow_core::{build_graph, ChartKind, MessageStore, NodeKind};

#[test]
fn test_demo_graph_carries_demo_strings() {
    let graph = build_graph(&[]);
    let user = graph.node("1").expect("demo user node");
    assert_eq!(user.kind.content(), Some(DEMO_USER_PROMPT));
    assert!(matches!(user.kind, NodeKind::UserMessage { .. }));
}

#[test]
fn test_full_session_graph_shape() {
    let mut store = MessageStore::new();
    store.push_user("Tell me about ARGO floats");
    store.push_assistant(SIMULATED_AI_RESPONSE);
    store.push_user("and the monsoon?");
    store.push_assistant("The monsoon deepens the mixed layer.");

    let graph = build_graph(store.messages());

    // 4 anchors + 4 leaves from the one ARGO reply.
    assert_eq!(graph.node_count(), 8);
    // 3 backbone + 4 leaf edges.
    assert_eq!(graph.edge_count(), 7);

    // Backbone follows anchor order 1 -> 2 -> 7 -> 8.
    for (from, to) in [("1", "2"), ("2", "7"), ("7", "8")] {
        assert!(
            graph.edges.iter().any(|e| e.source == from && e.target == to),
            "missing backbone edge {from}->{to}"
        );
    }

    // The second assistant reply spawned nothing.
    let charts = graph
        .nodes
        .iter()
        .filter(|n| matches!(n.kind, NodeKind::Chart(_)))
        .count();
    assert_eq!(charts, 3);
}

#[test]
fn test_leaf_order_is_fixed() {
    let mut store = MessageStore::new();
    store.push_assistant("argo");
    let graph = build_graph(store.messages());

    let kinds: Vec<&NodeKind> = graph.nodes[1..].iter().map(|n| &n.kind).collect();
    assert!(matches!(kinds[0], NodeKind::Chart(ChartKind::Temperature)));
    assert!(matches!(kinds[1], NodeKind::Chart(ChartKind::Salinity)));
    assert!(matches!(kinds[2], NodeKind::Chart(ChartKind::WorldMap)));
    assert!(matches!(kinds[3], NodeKind::KeyFindings));
}

#[test]
fn test_graph_snapshot_serializes() {
    let graph = build_graph(&[]);
    let json = serde_json::to_string(&graph).expect("serialize");
    assert!(json.contains("\"e1-2\""));
}
