//! Native desktop runner for argo-flow-viz development.
//!
//! Run with: cargo run --example native --features native

use argo_flow_viz::ArgoFlowApp;
use eframe::{run_native, NativeOptions};

fn main() -> eframe::Result<()> {
    // Initialize tracing for native development
    #[cfg(debug_assertions)]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(
                EnvFilter::from_default_env()
                    .add_directive("argo_flow_viz=debug".parse().unwrap())
                    .add_directive("argo_flow_core=debug".parse().unwrap()),
            )
            .init();
    }

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Argo Flow - Development"),
        ..Default::default()
    };

    run_native(
        "Argo Flow",
        options,
        Box::new(|cc| Ok(Box::new(ArgoFlowApp::new(cc)))),
    )
}
