//! Pure graph construction from an ordered message sequence.
//!
//! `build_graph` is the only entry point; it maps a message-store snapshot
//! to a fresh `FlowGraph` with no retained state. Positions are left at the
//! origin for the layout engine to fill in.

use crate::data::{DEMO_AI_RESPONSE, DEMO_USER_PROMPT};
use crate::graph::{ChartKind, FlowEdge, FlowGraph, FlowNode, NodeKind};
use crate::message::Message;

/// The four derived leaves hung off an ARGO-mentioning assistant node,
/// always emitted in this order.
const ARGO_LEAVES: [NodeKind; 4] = [
    NodeKind::Chart(ChartKind::Temperature),
    NodeKind::Chart(ChartKind::Salinity),
    NodeKind::Chart(ChartKind::WorldMap),
    NodeKind::KeyFindings,
];

/// Build the flow graph for one snapshot of the message store.
///
/// An empty snapshot yields the fixed demonstration graph. Otherwise node
/// ids come from a counter starting at 1: each message gets one anchor
/// node, assistant messages mentioning "argo" (case-insensitive) spawn
/// four leaf nodes wired from the anchor, and consecutive anchors are
/// joined by backbone edges in message order. O(n) in messages.
pub fn build_graph(messages: &[Message]) -> FlowGraph {
    if messages.is_empty() {
        return demo_graph();
    }

    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut node_id: u64 = 1;
    let mut anchors: Vec<String> = Vec::with_capacity(messages.len());

    for message in messages {
        let anchor = node_id.to_string();
        anchors.push(anchor.clone());

        if message.is_user {
            nodes.push(FlowNode::new(
                anchor,
                NodeKind::UserMessage {
                    content: message.content.clone(),
                },
            ));
        } else {
            nodes.push(FlowNode::new(
                anchor.clone(),
                NodeKind::AiResponse {
                    content: message.content.clone(),
                },
            ));

            if message.content.to_lowercase().contains("argo") {
                for kind in ARGO_LEAVES {
                    node_id += 1;
                    let leaf = node_id.to_string();
                    nodes.push(FlowNode::new(leaf.clone(), kind));
                    edges.push(FlowEdge::between(&anchor, &leaf));
                }
            }
        }

        node_id += 1;
    }

    // Conversation backbone: consecutive anchors in message order.
    for pair in anchors.windows(2) {
        edges.push(FlowEdge::between(&pair[0], &pair[1]));
    }

    FlowGraph { nodes, edges }
}

/// The fixed six-node demonstration graph shown before any message exists.
///
/// This is default/empty-state content, not a product of the general
/// algorithm: one user node, one assistant node, three charts and a
/// findings node, pre-wired with five edges.
pub fn demo_graph() -> FlowGraph {
    let nodes = vec![
        FlowNode::new(
            "1",
            NodeKind::UserMessage {
                content: DEMO_USER_PROMPT.to_string(),
            },
        ),
        FlowNode::new(
            "2",
            NodeKind::AiResponse {
                content: DEMO_AI_RESPONSE.to_string(),
            },
        ),
        FlowNode::new("3", NodeKind::Chart(ChartKind::Temperature)),
        FlowNode::new("4", NodeKind::Chart(ChartKind::Salinity)),
        FlowNode::new("5", NodeKind::Chart(ChartKind::WorldMap)),
        FlowNode::new("6", NodeKind::KeyFindings),
    ];

    let edges = vec![
        FlowEdge::between("1", "2"),
        FlowEdge::between("2", "3"),
        FlowEdge::between("2", "4"),
        FlowEdge::between("2", "5"),
        FlowEdge::between("2", "6"),
    ];

    FlowGraph { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageStore;

    fn conversation(entries: &[(&str, bool)]) -> Vec<Message> {
        let mut store = MessageStore::new();
        for (content, is_user) in entries {
            if *is_user {
                store.push_user(*content);
            } else {
                store.push_assistant(*content);
            }
        }
        store.messages().to_vec()
    }

    #[test]
    fn test_empty_input_yields_demo_graph() {
        let graph = build_graph(&[]);
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 5);
        assert_eq!(graph, demo_graph());
    }

    #[test]
    fn test_single_user_message() {
        let graph = build_graph(&conversation(&[("hello", true)]));
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert!(matches!(
            graph.nodes[0].kind,
            NodeKind::UserMessage { .. }
        ));
        assert_eq!(graph.nodes[0].id, "1");
    }

    #[test]
    fn test_argo_reply_spawns_four_leaves() {
        let graph = build_graph(&conversation(&[
            ("Tell me about ARGO", true),
            ("Based on ARGO float data...", false),
        ]));

        // user, AI, temperature, salinity, worldmap, key findings
        assert_eq!(graph.node_count(), 6);
        // 1 backbone + 4 leaf edges
        assert_eq!(graph.edge_count(), 5);

        let leaf_kinds: Vec<_> = graph.nodes[2..].iter().map(|n| n.kind.clone()).collect();
        assert_eq!(leaf_kinds, ARGO_LEAVES.to_vec());

        // All four leaf edges source from the AI anchor.
        let from_ai = graph.edges.iter().filter(|e| e.source == "2").count();
        assert_eq!(from_ai, 4);
    }

    #[test]
    fn test_argo_match_is_case_insensitive() {
        let graph = build_graph(&conversation(&[("argo says hi", false)]));
        assert_eq!(graph.node_count(), 5);

        let graph = build_graph(&conversation(&[("nothing relevant", false)]));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_argo_in_user_message_spawns_nothing() {
        let graph = build_graph(&conversation(&[("ARGO ARGO ARGO", true)]));
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_backbone_edge_count() {
        for n in 0..5usize {
            let entries: Vec<(&str, bool)> = (0..n).map(|i| ("plain", i % 2 == 0)).collect();
            let graph = build_graph(&conversation(&entries));
            assert_eq!(graph.edge_count(), n.saturating_sub(1));
        }
    }

    #[test]
    fn test_leaves_skip_ids_for_next_anchor() {
        let graph = build_graph(&conversation(&[
            ("Tell me about ARGO", true),
            ("ARGO data follows", false),
            ("thanks", true),
        ]));

        // Anchors are 1, 2, 7; leaves are 3..=6.
        let anchor_ids: Vec<_> = graph
            .nodes
            .iter()
            .filter(|n| n.kind.content().is_some())
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(anchor_ids, vec!["1", "2", "7"]);
        assert!(graph.edges.iter().any(|e| e.id == "e2-7"));
    }

    #[test]
    fn test_edge_ids_unique_within_build() {
        let graph = build_graph(&conversation(&[
            ("Tell me about ARGO", true),
            ("ARGO one", false),
            ("more ARGO please", true),
            ("ARGO two", false),
        ]));

        let mut ids: Vec<_> = graph.edges.iter().map(|e| e.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), graph.edge_count());

        for edge in &graph.edges {
            assert_eq!(edge.id, format!("e{}-{}", edge.source, edge.target));
        }
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let messages = conversation(&[
            ("Tell me about ARGO", true),
            ("ARGO response", false),
        ]);
        assert_eq!(build_graph(&messages), build_graph(&messages));
    }

    #[test]
    fn test_blank_message_still_emitted() {
        let graph = build_graph(&conversation(&[("", true), ("", false)]));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }
}
