//! Settings structures for the dashboard UI.

/// Visual style toggles for the flow canvas.
#[derive(Debug, Clone)]
pub struct SettingsStyle {
    /// Draw the dotted background grid.
    pub show_grid: bool,
    /// Animate markers travelling along edges.
    pub animated_edges: bool,
    /// Edge marker speed in traversals per second.
    pub edge_flow_speed: f32,
    /// Emphasize the selected node with a highlight ring.
    pub selection_emphasis: bool,
}

impl Default for SettingsStyle {
    fn default() -> Self {
        Self {
            show_grid: true,
            animated_edges: true,
            edge_flow_speed: 0.4,
            selection_emphasis: true,
        }
    }
}

/// Navigation & viewport parameters for the flow canvas.
#[derive(Debug, Clone)]
pub struct SettingsNavigation {
    pub zoom_and_pan_enabled: bool,
    pub zoom_speed: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for SettingsNavigation {
    fn default() -> Self {
        Self {
            zoom_and_pan_enabled: true,
            zoom_speed: 0.002,
            min_zoom: 0.15,
            max_zoom: 3.0,
        }
    }
}
