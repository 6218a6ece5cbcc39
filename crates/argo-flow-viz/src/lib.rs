//! egui dashboard for Argo-Flow.
//!
//! Three interchangeable view modes over one append-only message store:
//! a chat-style feed, a node/graph flow canvas with layered auto-layout,
//! and a float map. Runs natively (via eframe) and in the browser (via
//! WASM).

mod app;
mod canvas;
mod chat;
mod map_view;
mod panel;
mod render;
mod settings;

pub use app::{ArgoFlowApp, ViewMode};
pub use canvas::CanvasState;
pub use panel::DetailPanelState;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Start the dashboard in a WASM context.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        eframe::WebRunner::new()
            .start(
                "argo-flow-canvas",
                web_options,
                Box::new(|cc| Ok(Box::new(ArgoFlowApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
