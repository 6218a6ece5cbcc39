//! Flow-canvas controller: graph ownership, selection, viewport, and the
//! interaction loop.

use argo_flow_core::{build_graph, FlowEdge, FlowGraph, MessageStore};
use argo_flow_layout::{layout_with, Direction, LayoutConfig};
use egui::{Pos2, Rect, Vec2};

use crate::render;
use crate::settings::{SettingsNavigation, SettingsStyle};

/// What the pointer is currently doing on the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Drag {
    #[default]
    None,
    /// Panning the viewport.
    Pan,
    /// Moving one node; the override is lost on the next rebuild.
    Node(String),
    /// Dragging a new connection out of a node's source connector.
    Connect { from: String },
}

/// Interaction results the app layer reacts to.
#[derive(Debug, Clone, Default)]
pub struct CanvasEvents {
    /// A click landed on empty canvas.
    pub background_clicked: bool,
    /// A click landed on this node.
    pub node_clicked: Option<String>,
}

/// Owner of the derived graph and all canvas-local state.
///
/// The graph is rebuilt wholesale whenever the message store's revision
/// moves; selection survives a rebuild only if the selected id still
/// exists in the new graph.
#[derive(Debug, Clone)]
pub struct CanvasState {
    graph: FlowGraph,
    direction: Direction,
    config: LayoutConfig,
    selected: Option<String>,
    seen_revision: Option<u64>,
    pan: Vec2,
    zoom: f32,
    drag: Drag,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            graph: FlowGraph::default(),
            direction: Direction::default(),
            config: LayoutConfig::default(),
            selected: None,
            seen_revision: None,
            pan: Vec2::ZERO,
            zoom: 0.6,
            drag: Drag::None,
        }
    }
}

impl CanvasState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Rebuild the graph from the store if its revision moved since the
    /// last sync. Manual edges and dragged positions do not survive; the
    /// build is a pure function of the messages.
    pub fn sync(&mut self, store: &MessageStore) {
        if self.seen_revision == Some(store.revision()) {
            return;
        }
        self.seen_revision = Some(store.revision());

        let mut graph = build_graph(store.messages());
        layout_with(&mut graph, self.direction, &self.config);
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            revision = store.revision(),
            "rebuilt flow graph"
        );

        if let Some(id) = &self.selected {
            if graph.node(id).is_none() {
                self.selected = None;
            }
        }
        self.graph = graph;
    }

    /// Select the clicked node.
    pub fn on_node_click(&mut self, id: &str) {
        if self.graph.node(id).is_some() {
            self.selected = Some(id.to_owned());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Append a user-drawn edge. No validation: duplicates and cycles are
    /// accepted, matching the permissive connect behavior of the canvas.
    pub fn on_connect(&mut self, source: &str, target: &str) {
        self.graph.edges.push(FlowEdge::between(source, target));
        tracing::debug!(source, target, "manual edge added");
    }

    /// Re-run the layout over the current node/edge arrays (manual edges
    /// included) in the given direction.
    pub fn on_layout(&mut self, direction: Direction) {
        self.direction = direction;
        layout_with(&mut self.graph, direction, &self.config);
        tracing::debug!(?direction, "layout recomputed");
    }

    fn node_screen_rect(&self, position: (f32, f32), canvas: Rect) -> Rect {
        let top_left =
            canvas.center() + (egui::vec2(position.0, position.1) + self.pan) * self.zoom;
        Rect::from_min_size(
            top_left,
            egui::vec2(self.config.node_width, self.config.node_height) * self.zoom,
        )
    }

    /// Topmost node under the pointer. Nodes draw in array order, so the
    /// last hit wins.
    fn hit_node(&self, pointer: Pos2, canvas: Rect) -> Option<&str> {
        self.graph
            .nodes
            .iter()
            .rev()
            .find(|node| self.node_screen_rect(node.position, canvas).contains(pointer))
            .map(|node| node.id.as_str())
    }

    /// Node whose source connector is within grab range of the pointer.
    fn hit_source_connector(&self, pointer: Pos2, canvas: Rect) -> Option<&str> {
        self.graph
            .nodes
            .iter()
            .rev()
            .find(|node| {
                let rect = self.node_screen_rect(node.position, canvas);
                let dot = render::connector_point(rect, node.source_side);
                dot.distance(pointer) <= 10.0
            })
            .map(|node| node.id.as_str())
    }

    /// Paint the canvas and process one frame of interaction.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        style: &SettingsStyle,
        nav: &SettingsNavigation,
    ) -> CanvasEvents {
        let (canvas, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        let painter = ui.painter_at(canvas);
        let time = ui.input(|i| i.time);
        let mut events = CanvasEvents::default();

        if nav.zoom_and_pan_enabled && response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                self.zoom =
                    (self.zoom * (1.0 + scroll * nav.zoom_speed)).clamp(nav.min_zoom, nav.max_zoom);
            }
        }

        if response.drag_started() {
            if let Some(pointer) = response.interact_pointer_pos() {
                self.drag = if let Some(id) = self.hit_source_connector(pointer, canvas) {
                    Drag::Connect { from: id.to_owned() }
                } else if let Some(id) = self.hit_node(pointer, canvas) {
                    Drag::Node(id.to_owned())
                } else {
                    Drag::Pan
                };
            }
        }
        if response.dragged() {
            let delta = response.drag_delta() / self.zoom;
            match &self.drag {
                Drag::Pan => self.pan += delta,
                Drag::Node(id) => {
                    let id = id.clone();
                    if let Some(node) = self.graph.node_mut(&id) {
                        node.position.0 += delta.x;
                        node.position.1 += delta.y;
                    }
                }
                Drag::None | Drag::Connect { .. } => {}
            }
        }
        if response.drag_stopped() {
            if let Drag::Connect { from } = std::mem::take(&mut self.drag) {
                if let Some(pointer) = response.interact_pointer_pos() {
                    if let Some(target) = self.hit_node(pointer, canvas).map(str::to_owned) {
                        if target != from {
                            self.on_connect(&from, &target);
                        }
                    }
                }
            }
            self.drag = Drag::None;
        }
        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                match self.hit_node(pointer, canvas).map(str::to_owned) {
                    Some(id) => {
                        self.on_node_click(&id);
                        events.node_clicked = Some(id);
                    }
                    None => {
                        self.clear_selection();
                        events.background_clicked = true;
                    }
                }
            }
        }

        if style.show_grid {
            render::draw_grid(&painter, canvas, self.pan, self.zoom);
        }

        for (i, edge) in self.graph.edges.iter().enumerate() {
            let (Some(source), Some(target)) =
                (self.graph.node(&edge.source), self.graph.node(&edge.target))
            else {
                continue;
            };
            let from_rect = self.node_screen_rect(source.position, canvas);
            let to_rect = self.node_screen_rect(target.position, canvas);
            let flow_t = (style.animated_edges && edge.animated).then(|| {
                ((time * style.edge_flow_speed as f64 + i as f64 * 0.17) % 1.0) as f32
            });
            render::draw_edge(
                &painter,
                render::connector_point(from_rect, source.source_side),
                source.source_side,
                render::connector_point(to_rect, target.target_side),
                target.target_side,
                self.zoom,
                flow_t,
            );
        }

        if let Drag::Connect { from } = &self.drag {
            if let (Some(node), Some(pointer)) =
                (self.graph.node(from), response.interact_pointer_pos())
            {
                let rect = self.node_screen_rect(node.position, canvas);
                let origin = render::connector_point(rect, node.source_side);
                render::draw_connect_preview(&painter, origin, pointer);
            }
        }

        for node in &self.graph.nodes {
            let rect = self.node_screen_rect(node.position, canvas);
            if !canvas.intersects(rect) {
                continue;
            }
            let selected = style.selection_emphasis
                && self.selected.as_deref() == Some(node.id.as_str());
            render::draw_node(&painter, rect, node, selected, self.zoom);
        }

        if style.animated_edges && !self.graph.edges.is_empty() {
            ui.ctx().request_repaint();
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argo_flow_core::data::SIMULATED_AI_RESPONSE;

    #[test]
    fn test_sync_builds_demo_graph_for_empty_store() {
        let mut canvas = CanvasState::new();
        canvas.sync(&MessageStore::new());
        assert_eq!(canvas.graph().node_count(), 6);
        assert_eq!(canvas.graph().edge_count(), 5);
    }

    #[test]
    fn test_sync_is_idempotent_per_revision() {
        let mut store = MessageStore::new();
        store.push_user("hello");

        let mut canvas = CanvasState::new();
        canvas.sync(&store);
        // A manual edge survives until the revision moves.
        canvas.on_connect("1", "1");
        let edges = canvas.graph().edge_count();
        canvas.sync(&store);
        assert_eq!(canvas.graph().edge_count(), edges);

        store.push_assistant(SIMULATED_AI_RESPONSE);
        canvas.sync(&store);
        // Rebuilt from messages alone: 1 backbone + 4 leaf edges.
        assert_eq!(canvas.graph().edge_count(), 5);
    }

    #[test]
    fn test_connect_is_unvalidated() {
        let mut canvas = CanvasState::new();
        canvas.sync(&MessageStore::new());

        let before = canvas.graph().edge_count();
        canvas.on_connect("3", "4");
        canvas.on_connect("3", "4");
        canvas.on_connect("4", "3");
        assert_eq!(canvas.graph().edge_count(), before + 3);
        assert_eq!(canvas.graph().edges[before].id, "e3-4");
    }

    #[test]
    fn test_relayout_covers_manual_edges() {
        let mut canvas = CanvasState::new();
        canvas.sync(&MessageStore::new());
        canvas.on_connect("6", "1");

        canvas.on_layout(Direction::LeftToRight);
        assert_eq!(canvas.direction(), Direction::LeftToRight);
        for node in &canvas.graph().nodes {
            assert!(node.position.0.is_finite());
            assert_eq!(node.target_side, argo_flow_core::ConnectorSide::Left);
        }
    }

    #[test]
    fn test_selection_follows_rebuild() {
        let mut store = MessageStore::new();
        let mut canvas = CanvasState::new();
        canvas.sync(&store);

        canvas.on_node_click("6");
        assert_eq!(canvas.selected(), Some("6"));

        // One user message produces a single-node graph; id "6" is gone.
        store.push_user("hello");
        canvas.sync(&store);
        assert_eq!(canvas.selected(), None);

        canvas.on_node_click("missing");
        assert_eq!(canvas.selected(), None);
        canvas.on_node_click("1");
        assert_eq!(canvas.selected(), Some("1"));
        canvas.clear_selection();
        assert_eq!(canvas.selected(), None);
    }
}
