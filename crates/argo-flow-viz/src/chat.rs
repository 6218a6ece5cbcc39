//! Chat-style feed over the message store.
//!
//! ARGO-related assistant replies get the same derived visual cards the
//! flow canvas spawns as leaf nodes, rendered inline under the reply.

use argo_flow_core::data::{KEY_FINDINGS, SALINITY_PROFILE, TEMPERATURE_PROFILE};
use argo_flow_core::{Message, MessageStore};
use egui::{Color32, RichText};

use crate::render;

/// True when an assistant reply should carry the derived data cards.
fn mentions_argo(message: &Message) -> bool {
    !message.is_user && message.content.to_lowercase().contains("argo")
}

pub fn show(ui: &mut egui::Ui, store: &MessageStore) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if store.is_empty() {
                ui.add_space(ui.available_height() * 0.4);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Start a conversation by typing a message below...")
                            .weak(),
                    );
                });
                return;
            }

            for message in store.messages() {
                show_message(ui, message);
                ui.add_space(8.0);
            }
        });
}

fn show_message(ui: &mut egui::Ui, message: &Message) {
    if message.is_user {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
            egui::Frame::new()
                .fill(Color32::from_rgb(37, 99, 235))
                .corner_radius(8.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.set_max_width(ui.available_width() * 0.7);
                    ui.label(RichText::new(&message.content).color(Color32::WHITE));
                });
        });
        return;
    }

    egui::Frame::new()
        .fill(Color32::from_rgb(31, 41, 55))
        .corner_radius(8.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_max_width(ui.available_width() * 0.85);
            ui.label(&message.content);
        });

    if mentions_argo(message) {
        ui.add_space(6.0);
        render::profile_card(
            ui,
            "Temperature Profiles by Depth",
            &TEMPERATURE_PROFILE,
            Color32::from_rgb(239, 68, 68),
        );
        render::profile_card(
            ui,
            "Salinity Profiles by Depth",
            &SALINITY_PROFILE,
            Color32::from_rgb(34, 211, 238),
        );
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Key Findings").strong());
            for finding in KEY_FINDINGS {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new("•").color(Color32::from_rgb(139, 92, 246)));
                    ui.label(RichText::new(finding.title).strong());
                    ui.label(RichText::new(finding.detail).weak());
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argo_flow_core::data::SIMULATED_AI_RESPONSE;

    fn assistant(content: &str) -> Message {
        let mut store = MessageStore::new();
        store.push_assistant(content).clone()
    }

    #[test]
    fn test_cards_attach_to_argo_replies_only() {
        assert!(mentions_argo(&assistant(SIMULATED_AI_RESPONSE)));
        assert!(mentions_argo(&assistant("the ArGo network")));
        assert!(!mentions_argo(&assistant("hello")));

        let mut store = MessageStore::new();
        let user = store.push_user("tell me about argo").clone();
        assert!(!mentions_argo(&user));
    }
}
