//! Application shell: view-mode switching, the shared chat input, and the
//! simulated assistant reply timer.

use argo_flow_core::data::SIMULATED_AI_RESPONSE;
use argo_flow_core::MessageStore;
use argo_flow_layout::Direction;
use egui::RichText;

use crate::canvas::CanvasState;
use crate::panel::{self, DetailPanelState};
use crate::settings::{SettingsNavigation, SettingsStyle};
use crate::{chat, map_view};

/// Delay before the canned assistant reply lands, in seconds.
const REPLY_DELAY: f64 = 1.0;

/// The three interchangeable projections of the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    Chat,
    #[default]
    Flow,
    Map,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Chat, ViewMode::Flow, ViewMode::Map];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Chat => "Chat",
            ViewMode::Flow => "Flow",
            ViewMode::Map => "Map",
        }
    }
}

/// Top-level eframe application.
pub struct ArgoFlowApp {
    store: MessageStore,
    mode: ViewMode,
    canvas: CanvasState,
    detail: DetailPanelState,
    input: String,
    /// Absolute deadlines (ui-clock seconds) for pending simulated replies.
    pending_replies: Vec<f64>,
    style: SettingsStyle,
    nav: SettingsNavigation,
}

impl ArgoFlowApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self {
            store: MessageStore::new(),
            mode: ViewMode::default(),
            canvas: CanvasState::new(),
            detail: DetailPanelState::default(),
            input: String::new(),
            pending_replies: Vec::new(),
            style: SettingsStyle::default(),
            nav: SettingsNavigation::default(),
        }
    }

    /// Append every simulated reply whose deadline has passed.
    fn drain_due_replies(&mut self, now: f64) {
        let due = self.pending_replies.iter().filter(|&&t| t <= now).count();
        self.pending_replies.retain(|&t| t > now);
        for _ in 0..due {
            self.store.push_assistant(SIMULATED_AI_RESPONSE);
            tracing::info!("simulated assistant reply appended");
        }
    }

    fn submit_input(&mut self, now: f64) {
        let text = self.input.trim().to_owned();
        if text.is_empty() {
            return;
        }
        tracing::info!(len = text.len(), "user message submitted");
        self.store.push_user(text);
        self.pending_replies.push(now + REPLY_DELAY);
        self.input.clear();
        self.canvas.clear_selection();
        self.detail.close();
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Argo Flow").strong().size(16.0));
                ui.separator();
                for mode in ViewMode::ALL {
                    if ui
                        .selectable_label(self.mode == mode, mode.label())
                        .clicked()
                    {
                        self.mode = mode;
                    }
                }

                if self.mode == ViewMode::Flow {
                    ui.separator();
                    if ui.button("Vertical Layout").clicked() {
                        self.canvas.on_layout(Direction::TopToBottom);
                    }
                    if ui.button("Horizontal Layout").clicked() {
                        self.canvas.on_layout(Direction::LeftToRight);
                    }
                    ui.separator();
                    ui.checkbox(&mut self.style.animated_edges, "Animate edges");
                    ui.checkbox(&mut self.style.show_grid, "Grid");
                }
            });
        });
    }

    fn show_input_bar(&mut self, ctx: &egui::Context, now: f64) {
        egui::TopBottomPanel::bottom("chat_input").show(ctx, |ui| {
            ui.add_space(4.0);
            let mut submit = false;
            ui.horizontal(|ui| {
                let edit = egui::TextEdit::singleline(&mut self.input)
                    .hint_text("Ask about ARGO floats, ocean data...")
                    .desired_width(ui.available_width() - 70.0);
                let response = ui.add(edit);

                if response.changed() {
                    if panel::should_open(
                        self.canvas.selected().is_some(),
                        &self.input,
                        self.detail.is_open(),
                    ) {
                        self.detail.open_for(self.input.clone());
                    }
                    self.detail.track_input(&self.input);
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                if ui.button("Send").clicked() {
                    submit = true;
                }
            });
            ui.add_space(4.0);
            if submit {
                self.submit_input(now);
            }
        });
    }
}

impl eframe::App for ArgoFlowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        self.drain_due_replies(now);
        if !self.pending_replies.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        self.canvas.sync(&self.store);

        self.show_top_bar(ctx);
        self.show_input_bar(ctx, now);
        self.detail.show(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.mode {
            ViewMode::Chat => chat::show(ui, &self.store),
            ViewMode::Flow => {
                let events = self.canvas.show(ui, &self.style, &self.nav);
                if events.background_clicked {
                    self.detail.close();
                }
            }
            ViewMode::Map => map_view::show(ui),
        });
    }
}
