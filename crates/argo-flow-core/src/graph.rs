//! Flow graph types: nodes, edges, and the derived graph snapshot.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use serde::{Deserialize, Serialize};

/// Which canned chart a [`NodeKind::Chart`] node displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    /// Temperature profile by depth.
    Temperature,
    /// Salinity profile by depth.
    Salinity,
    /// Float positions on a world map.
    WorldMap,
}

impl ChartKind {
    /// Display label for the chart header.
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Temperature => "Temperature Profiles by Depth",
            ChartKind::Salinity => "Salinity Profiles by Depth",
            ChartKind::WorldMap => "Float Locations",
        }
    }
}

/// Node kind with kind-dependent payload.
///
/// Modeled as a sum type: the two message kinds carry their text, chart
/// nodes carry only the chart subkind, and findings nodes carry nothing
/// (their content is the canned findings table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// A message submitted by the user.
    UserMessage { content: String },
    /// A simulated assistant reply.
    AiResponse { content: String },
    /// A derived chart visualization.
    Chart(ChartKind),
    /// The canned key-findings summary.
    KeyFindings,
}

impl NodeKind {
    /// Short label shown in the node header.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::UserMessage { .. } => "USER",
            NodeKind::AiResponse { .. } => "AI",
            NodeKind::Chart(chart) => chart.label(),
            NodeKind::KeyFindings => "Key Findings",
        }
    }

    /// The message text, for the kinds that carry one.
    pub fn content(&self) -> Option<&str> {
        match self {
            NodeKind::UserMessage { content } | NodeKind::AiResponse { content } => Some(content),
            _ => None,
        }
    }
}

/// Side of a node's bounding box a connector attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectorSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// A node in the flow canvas.
///
/// `position` is the top-left corner of the node's bounding box; the
/// layout engine computes centers and converts before writing it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    /// Unique within one graph build.
    pub id: String,
    pub kind: NodeKind,
    /// Top-left corner in canvas coordinates.
    pub position: (f32, f32),
    /// Side where inbound edges attach.
    pub target_side: ConnectorSide,
    /// Side where outbound edges leave.
    pub source_side: ConnectorSide,
}

impl FlowNode {
    /// Create a node at the origin with vertical connector sides.
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            position: (0.0, 0.0),
            target_side: ConnectorSide::Top,
            source_side: ConnectorSide::Bottom,
        }
    }
}

/// A directed edge between two nodes, rendered animated with an arrowhead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    /// Derived identifier, always `e<source>-<target>`.
    pub id: String,
    pub source: String,
    pub target: String,
    /// Animated flow styling along the edge.
    pub animated: bool,
}

impl FlowEdge {
    /// Build an edge between two node ids with the derived identifier.
    pub fn between(source: &str, target: &str) -> Self {
        Self {
            id: format!("e{source}-{target}"),
            source: source.to_string(),
            target: target.to_string(),
            animated: true,
        }
    }
}

/// The derived (nodes, edges) pair for one message-store snapshot.
///
/// Rebuilt wholesale on every store change; never incrementally patched.
/// Edges referencing a missing node id are legal and simply inert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowGraph {
    /// Number of nodes in this build.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in this build.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up a node by id, mutably.
    pub fn node_mut(&mut self, id: &str) -> Option<&mut FlowNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Mirror this graph into a petgraph `StableDiGraph` for analysis.
    ///
    /// Node weights are indices into `self.nodes`, preserving input order.
    /// Edges whose endpoints are missing from the node set are skipped.
    pub fn to_petgraph(&self) -> (StableDiGraph<usize, ()>, HashMap<String, NodeIndex>) {
        let mut mirror = StableDiGraph::new();
        let mut id_to_index = HashMap::new();

        for (slot, node) in self.nodes.iter().enumerate() {
            let idx = mirror.add_node(slot);
            id_to_index.insert(node.id.clone(), idx);
        }

        for edge in &self.edges {
            if let (Some(&from), Some(&to)) =
                (id_to_index.get(&edge.source), id_to_index.get(&edge.target))
            {
                mirror.add_edge(from, to, ());
            }
        }

        (mirror, id_to_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_id_format() {
        let edge = FlowEdge::between("2", "5");
        assert_eq!(edge.id, "e2-5");
        assert!(edge.animated);
    }

    #[test]
    fn test_to_petgraph_skips_dangling_edges() {
        let graph = FlowGraph {
            nodes: vec![
                FlowNode::new("1", NodeKind::KeyFindings),
                FlowNode::new("2", NodeKind::KeyFindings),
            ],
            edges: vec![
                FlowEdge::between("1", "2"),
                FlowEdge::between("2", "missing"),
            ],
        };

        let (mirror, indices) = graph.to_petgraph();
        assert_eq!(mirror.node_count(), 2);
        assert_eq!(mirror.edge_count(), 1);
        assert!(indices.contains_key("1"));
        assert!(!indices.contains_key("missing"));
    }

    #[test]
    fn test_node_kind_payload_access() {
        let user = NodeKind::UserMessage {
            content: "hello".into(),
        };
        assert_eq!(user.content(), Some("hello"));
        assert_eq!(NodeKind::KeyFindings.content(), None);
        assert_eq!(NodeKind::Chart(ChartKind::Salinity).content(), None);
    }
}
