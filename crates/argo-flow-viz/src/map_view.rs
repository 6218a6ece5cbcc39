//! Full-screen float map with a status legend and per-float details.

use argo_flow_core::data::{FloatStatus, FLOATS};
use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke};

use crate::render;

pub fn show(ui: &mut egui::Ui) {
    egui::SidePanel::right("float_list")
        .resizable(false)
        .default_width(220.0)
        .show_inside(ui, |ui| {
            ui.heading("Float Network");
            ui.separator();
            for float in &FLOATS {
                ui.horizontal(|ui| {
                    let (dot, _) =
                        ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                    ui.painter().circle_filled(
                        dot.center(),
                        4.0,
                        render::float_status_color(float.status),
                    );
                    ui.label(format!("Float #{}", float.id));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(float.status.label()).small().weak());
                    });
                });
                ui.label(
                    egui::RichText::new(format!("{:.1}°N, {:.1}°E", float.lat, float.lng))
                        .small()
                        .weak(),
                );
                ui.add_space(4.0);
            }
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        let (map, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        let painter = ui.painter_at(map);

        painter.rect_filled(map, 6.0, Color32::from_rgb(12, 30, 48));
        draw_graticule(&painter, map);

        for float in &FLOATS {
            let pos = render::project_float(float, map.shrink(20.0));
            painter.circle_filled(pos, 6.0, render::float_status_color(float.status));
            painter.circle_stroke(pos, 9.0, Stroke::new(1.0, Color32::from_rgb(55, 75, 95)));
            painter.text(
                pos + egui::vec2(0.0, -14.0),
                Align2::CENTER_BOTTOM,
                format!("#{}", float.id),
                FontId::proportional(11.0),
                Color32::from_rgb(203, 213, 225),
            );
        }

        if let Some(pointer) = response.hover_pos() {
            let hovered = FLOATS.iter().min_by(|a, b| {
                let da = render::project_float(a, map.shrink(20.0)).distance(pointer);
                let db = render::project_float(b, map.shrink(20.0)).distance(pointer);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            });
            if let Some(float) = hovered {
                let pos = render::project_float(float, map.shrink(20.0));
                if pos.distance(pointer) <= 12.0 {
                    draw_float_tooltip(&painter, pointer, float.id, float.status);
                }
            }
        }

        draw_legend(&painter, map);
    });
}

fn draw_graticule(painter: &egui::Painter, map: Rect) {
    let stroke = Stroke::new(0.5, Color32::from_rgb(26, 48, 68));
    let steps = 8;
    for i in 1..steps {
        let t = i as f32 / steps as f32;
        let x = map.left() + map.width() * t;
        let y = map.top() + map.height() * t;
        painter.line_segment([Pos2::new(x, map.top()), Pos2::new(x, map.bottom())], stroke);
        painter.line_segment([Pos2::new(map.left(), y), Pos2::new(map.right(), y)], stroke);
    }
}

fn draw_float_tooltip(painter: &egui::Painter, at: Pos2, id: u32, status: FloatStatus) {
    let text = format!("Float #{id} — {}", status.label());
    let galley = painter.layout_no_wrap(
        text,
        FontId::proportional(12.0),
        Color32::from_rgb(229, 231, 235),
    );
    let pad = egui::vec2(6.0, 4.0);
    let rect = Rect::from_min_size(at + egui::vec2(12.0, -8.0), galley.size() + pad * 2.0);
    painter.rect_filled(rect, 4.0, Color32::from_rgb(31, 41, 55));
    painter.galley(rect.min + pad, galley, Color32::from_rgb(229, 231, 235));
}

fn draw_legend(painter: &egui::Painter, map: Rect) {
    let entries = [
        FloatStatus::Active,
        FloatStatus::Maintenance,
        FloatStatus::Inactive,
    ];
    let origin = map.right_top() + egui::vec2(-150.0, 12.0);
    for (i, status) in entries.iter().enumerate() {
        let y = origin.y + i as f32 * 18.0;
        painter.circle_filled(
            Pos2::new(origin.x, y),
            4.0,
            render::float_status_color(*status),
        );
        painter.text(
            Pos2::new(origin.x + 10.0, y),
            Align2::LEFT_CENTER,
            status.label(),
            FontId::proportional(11.0),
            Color32::from_rgb(203, 213, 225),
        );
    }
}
