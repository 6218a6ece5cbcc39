//! Contextual "Node Analysis" side panel.

use argo_flow_core::data::{NODE_ANALYSIS_INSIGHTS, NODE_ANALYSIS_RECOMMENDATION};
use egui::{Color32, RichText};

/// Latched state for the detail panel.
///
/// The panel opens once per selection: typing with a node selected latches
/// it open with the first query text, and it stays open (ignoring further
/// typing) until explicitly closed.
#[derive(Debug, Clone, Default)]
pub struct DetailPanelState {
    open: bool,
    query: String,
}

/// Whether a keystroke should latch the panel open.
pub(crate) fn should_open(node_selected: bool, input: &str, already_open: bool) -> bool {
    node_selected && !input.trim().is_empty() && !already_open
}

impl DetailPanelState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Latch the panel open with the query that triggered it. A panel that
    /// is already open keeps its original query.
    pub fn open_for(&mut self, query: impl Into<String>) {
        if self.open {
            return;
        }
        self.open = true;
        self.query = query.into();
        tracing::debug!(query = %self.query, "detail panel opened");
    }

    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
    }

    /// Record keystrokes into the latched query while the panel is open.
    pub fn track_input(&mut self, input: &str) {
        if self.open {
            self.query = input.to_owned();
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        let mut close_requested = false;
        egui::SidePanel::right("node_analysis")
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Node Analysis");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("✕").clicked() {
                            close_requested = true;
                        }
                    });
                });
                ui.separator();

                ui.label(RichText::new("Your query:").small().weak());
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(self.query.as_str());
                });
                ui.add_space(8.0);

                ui.label(RichText::new("AI Insights").strong());
                for insight in NODE_ANALYSIS_INSIGHTS {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new("•").color(Color32::from_rgb(59, 130, 246)));
                        ui.label(insight);
                    });
                }
                ui.add_space(8.0);

                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new("Recommendation").strong());
                    ui.label(NODE_ANALYSIS_RECOMMENDATION);
                });
            });

        if close_requested {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_opens_on_typing_with_selection() {
        assert!(should_open(true, "why is", false));
        assert!(!should_open(false, "why is", false));
        assert!(!should_open(true, "   ", false));
        assert!(!should_open(true, "why is", true));
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut panel = DetailPanelState::default();
        panel.open_for("first");
        panel.open_for("second");
        assert!(panel.is_open());
        assert_eq!(panel.query, "first");
    }

    #[test]
    fn test_close_clears_query() {
        let mut panel = DetailPanelState::default();
        panel.open_for("q");
        panel.close();
        assert!(!panel.is_open());
        assert!(panel.query.is_empty());
    }

    #[test]
    fn test_track_input_updates_open_panel_only() {
        let mut panel = DetailPanelState::default();
        panel.track_input("ignored");
        assert!(panel.query.is_empty());

        panel.open_for("w");
        panel.track_input("why");
        assert_eq!(panel.query, "why");
    }
}
