//! Painter-level drawing for the flow canvas and inline chart cards.

use argo_flow_core::data::{
    ArgoFloat, FloatStatus, Finding, ProfilePoint, FLOATS, KEY_FINDINGS, SALINITY_PROFILE,
    TEMPERATURE_PROFILE,
};
use argo_flow_core::{ChartKind, ConnectorSide, FlowNode, NodeKind};
use egui::epaint::CubicBezierShape;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

/// Resolved fill/stroke for one node box.
#[derive(Debug, Clone, Copy)]
pub struct NodeVisuals {
    pub fill: Color32,
    pub stroke: Stroke,
    pub accent: Color32,
}

pub fn resolve_node_visuals(kind: &NodeKind, selected: bool) -> NodeVisuals {
    let accent = node_accent_color(kind);
    let fill = match kind {
        NodeKind::UserMessage { .. } => Color32::from_rgb(31, 41, 55),
        NodeKind::AiResponse { .. } => Color32::from_rgb(17, 24, 39),
        NodeKind::Chart(_) | NodeKind::KeyFindings => Color32::from_rgb(24, 32, 46),
    };
    let stroke = if selected {
        Stroke::new(2.5, selection_color())
    } else {
        Stroke::new(1.0, Color32::from_rgb(75, 85, 99))
    };
    NodeVisuals {
        fill,
        stroke,
        accent,
    }
}

pub fn node_accent_color(kind: &NodeKind) -> Color32 {
    match kind {
        NodeKind::UserMessage { .. } => Color32::from_rgb(156, 163, 175),
        NodeKind::AiResponse { .. } => Color32::from_rgb(59, 130, 246),
        NodeKind::Chart(ChartKind::Temperature) => Color32::from_rgb(239, 68, 68),
        NodeKind::Chart(ChartKind::Salinity) => Color32::from_rgb(34, 211, 238),
        NodeKind::Chart(ChartKind::WorldMap) => Color32::from_rgb(16, 185, 129),
        NodeKind::KeyFindings => Color32::from_rgb(139, 92, 246),
    }
}

pub fn selection_color() -> Color32 {
    Color32::from_rgb(59, 130, 246)
}

pub fn float_status_color(status: FloatStatus) -> Color32 {
    match status {
        FloatStatus::Active => Color32::from_rgb(34, 197, 94),
        FloatStatus::Inactive => Color32::from_rgb(107, 114, 128),
        FloatStatus::Maintenance => Color32::from_rgb(245, 158, 11),
    }
}

/// Dotted background grid, offset by the current pan so it scrolls with
/// the canvas.
pub fn draw_grid(painter: &Painter, rect: Rect, pan: Vec2, zoom: f32) {
    let gap = 20.0 * zoom;
    if gap < 4.0 {
        return;
    }
    let dot = Color32::from_rgb(55, 65, 81);
    let offset = egui::vec2(
        (pan.x * zoom).rem_euclid(gap),
        (pan.y * zoom).rem_euclid(gap),
    );
    let mut y = rect.top() + offset.y;
    while y < rect.bottom() {
        let mut x = rect.left() + offset.x;
        while x < rect.right() {
            painter.circle_filled(Pos2::new(x, y), 1.0, dot);
            x += gap;
        }
        y += gap;
    }
}

/// Midpoint of the given side of a node rect, in screen coordinates.
pub fn connector_point(rect: Rect, side: ConnectorSide) -> Pos2 {
    match side {
        ConnectorSide::Top => rect.center_top(),
        ConnectorSide::Bottom => rect.center_bottom(),
        ConnectorSide::Left => rect.left_center(),
        ConnectorSide::Right => rect.right_center(),
    }
}

/// Outward normal of a connector side, used to shape edge curves.
fn side_normal(side: ConnectorSide) -> Vec2 {
    match side {
        ConnectorSide::Top => egui::vec2(0.0, -1.0),
        ConnectorSide::Bottom => egui::vec2(0.0, 1.0),
        ConnectorSide::Left => egui::vec2(-1.0, 0.0),
        ConnectorSide::Right => egui::vec2(1.0, 0.0),
    }
}

fn cubic_point(points: [Pos2; 4], t: f32) -> Pos2 {
    let u = 1.0 - t;
    let w0 = u * u * u;
    let w1 = 3.0 * u * u * t;
    let w2 = 3.0 * u * t * t;
    let w3 = t * t * t;
    Pos2::new(
        w0 * points[0].x + w1 * points[1].x + w2 * points[2].x + w3 * points[3].x,
        w0 * points[0].y + w1 * points[1].y + w2 * points[2].y + w3 * points[3].y,
    )
}

/// Draw one edge as a smooth curve with an arrowhead at the target, plus
/// an optional travelling marker when the edge is animated.
pub fn draw_edge(
    painter: &Painter,
    from: Pos2,
    from_side: ConnectorSide,
    to: Pos2,
    to_side: ConnectorSide,
    zoom: f32,
    flow_t: Option<f32>,
) {
    let reach = (to - from).length().clamp(40.0 * zoom, 160.0 * zoom) * 0.5;
    let points = [
        from,
        from + side_normal(from_side) * reach,
        to + side_normal(to_side) * reach,
        to,
    ];
    let stroke = Stroke::new(1.5, Color32::from_rgb(107, 114, 128));
    painter.add(CubicBezierShape::from_points_stroke(
        points,
        false,
        Color32::TRANSPARENT,
        stroke,
    ));

    // Arrowhead aligned with the curve's approach direction.
    let approach = to - cubic_point(points, 0.92);
    if approach.length() > 0.1 {
        let dir = approach.normalized();
        let ortho = egui::vec2(-dir.y, dir.x);
        let size = 6.0 * zoom.max(0.5);
        painter.add(egui::Shape::convex_polygon(
            vec![to, to - dir * size + ortho * size * 0.5, to - dir * size - ortho * size * 0.5],
            Color32::from_rgb(107, 114, 128),
            Stroke::NONE,
        ));
    }

    if let Some(t) = flow_t {
        let marker = cubic_point(points, t.clamp(0.0, 1.0));
        painter.circle_filled(marker, 2.5 * zoom.max(0.5), selection_color());
    }
}

/// Dashed preview line while the user is dragging out a new connection.
pub fn draw_connect_preview(painter: &Painter, from: Pos2, to: Pos2) {
    painter.extend(egui::Shape::dashed_line(
        &[from, to],
        Stroke::new(1.5, selection_color()),
        6.0,
        4.0,
    ));
}

/// Draw one node box with its kind-specific content and connector dots.
pub fn draw_node(painter: &Painter, rect: Rect, node: &FlowNode, selected: bool, zoom: f32) {
    let visuals = resolve_node_visuals(&node.kind, selected);
    let rounding = 8.0 * zoom;
    painter.rect_filled(rect, rounding, visuals.fill);
    painter.rect_stroke(rect, rounding, visuals.stroke, egui::StrokeKind::Outside);

    let pad = 10.0 * zoom;
    let header_font = FontId::proportional(11.0 * zoom);
    painter.text(
        rect.left_top() + egui::vec2(pad, pad),
        Align2::LEFT_TOP,
        node.kind.label(),
        header_font,
        visuals.accent,
    );

    let content = Rect::from_min_max(
        rect.left_top() + egui::vec2(pad, pad + 18.0 * zoom),
        rect.right_bottom() - egui::vec2(pad, pad),
    );
    match &node.kind {
        NodeKind::UserMessage { .. } | NodeKind::AiResponse { .. } => {
            if let Some(text) = node.kind.content() {
                let galley = painter.layout(
                    text.to_owned(),
                    FontId::proportional(12.0 * zoom),
                    Color32::from_rgb(229, 231, 235),
                    content.width(),
                );
                painter.galley(content.left_top(), galley, Color32::from_rgb(229, 231, 235));
            }
        }
        NodeKind::Chart(ChartKind::Temperature) => {
            draw_profile_line(painter, content, &TEMPERATURE_PROFILE, visuals.accent);
        }
        NodeKind::Chart(ChartKind::Salinity) => {
            draw_profile_line(painter, content, &SALINITY_PROFILE, visuals.accent);
        }
        NodeKind::Chart(ChartKind::WorldMap) => {
            draw_float_positions(painter, content, &FLOATS, zoom);
        }
        NodeKind::KeyFindings => {
            draw_findings_list(painter, content, &KEY_FINDINGS, zoom);
        }
    }

    // Connector dots on the layout-assigned sides.
    let dot = Color32::from_rgb(156, 163, 175);
    painter.circle_filled(connector_point(rect, node.target_side), 3.0 * zoom.max(0.5), dot);
    painter.circle_filled(connector_point(rect, node.source_side), 3.0 * zoom.max(0.5), dot);
}

/// Polyline of a depth profile scaled into `rect`, with min/max padding.
pub fn draw_profile_line(
    painter: &Painter,
    rect: Rect,
    profile: &[ProfilePoint],
    color: Color32,
) {
    if profile.len() < 2 || rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }
    let min = profile.iter().map(|p| p.value).fold(f32::INFINITY, f32::min);
    let max = profile
        .iter()
        .map(|p| p.value)
        .fold(f32::NEG_INFINITY, f32::max);
    let span = (max - min).max(f32::EPSILON);

    let points: Vec<Pos2> = profile
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = rect.left() + rect.width() * i as f32 / (profile.len() - 1) as f32;
            let y = rect.bottom() - rect.height() * (p.value - min) / span;
            Pos2::new(x, y)
        })
        .collect();

    painter.add(egui::Shape::line(points.clone(), Stroke::new(2.0, color)));
    for point in points {
        painter.circle_filled(point, 2.0, color);
    }
}

/// Float positions scattered over a simple lat/lng box.
pub fn draw_float_positions(painter: &Painter, rect: Rect, floats: &[ArgoFloat], zoom: f32) {
    painter.rect_filled(rect, 4.0, Color32::from_rgb(15, 35, 55));
    for float in floats {
        let pos = project_float(float, rect);
        painter.circle_filled(pos, 3.0 * zoom.max(0.5), float_status_color(float.status));
    }
}

/// Map a float's lat/lng into `rect` over the Indian-coast bounding box.
pub fn project_float(float: &ArgoFloat, rect: Rect) -> Pos2 {
    const LAT_MIN: f32 = 5.0;
    const LAT_MAX: f32 = 25.0;
    const LNG_MIN: f32 = 65.0;
    const LNG_MAX: f32 = 95.0;
    let tx = ((float.lng - LNG_MIN) / (LNG_MAX - LNG_MIN)).clamp(0.0, 1.0);
    let ty = ((float.lat - LAT_MIN) / (LAT_MAX - LAT_MIN)).clamp(0.0, 1.0);
    Pos2::new(
        rect.left() + rect.width() * tx,
        // Latitude grows upward.
        rect.bottom() - rect.height() * ty,
    )
}

fn draw_findings_list(painter: &Painter, rect: Rect, findings: &[Finding], zoom: f32) {
    let font = FontId::proportional(10.5 * zoom);
    let line = 14.0 * zoom;
    for (i, finding) in findings.iter().enumerate() {
        let y = rect.top() + i as f32 * line * 1.6;
        if y + line > rect.bottom() {
            break;
        }
        painter.text(
            Pos2::new(rect.left(), y),
            Align2::LEFT_TOP,
            finding.title,
            font.clone(),
            Color32::from_rgb(229, 231, 235),
        );
        painter.text(
            Pos2::new(rect.left() + 8.0 * zoom, y + line * 0.8),
            Align2::LEFT_TOP,
            finding.detail,
            FontId::proportional(9.0 * zoom),
            Color32::from_rgb(156, 163, 175),
        );
    }
}

/// Inline chart card used by the chat feed.
pub fn profile_card(ui: &mut egui::Ui, title: &str, profile: &[ProfilePoint], color: Color32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(title).strong());
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 80.0),
            egui::Sense::hover(),
        );
        draw_profile_line(ui.painter(), rect.shrink(4.0), profile, color);
        ui.horizontal(|ui| {
            for point in profile {
                ui.label(
                    egui::RichText::new(format!("{}m", point.depth_m))
                        .small()
                        .weak(),
                );
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_float_stays_in_rect() {
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(100.0, 50.0));
        for float in &FLOATS {
            let pos = project_float(float, rect);
            assert!(rect.contains(pos), "float {} projected outside", float.id);
        }
    }

    #[test]
    fn test_cubic_endpoints() {
        let pts = [
            Pos2::new(0.0, 0.0),
            Pos2::new(10.0, 0.0),
            Pos2::new(10.0, 10.0),
            Pos2::new(20.0, 10.0),
        ];
        assert_eq!(cubic_point(pts, 0.0), pts[0]);
        assert_eq!(cubic_point(pts, 1.0), pts[3]);
    }

    #[test]
    fn test_accent_colors_distinguish_kinds() {
        let kinds = [
            NodeKind::AiResponse { content: String::new() },
            NodeKind::Chart(ChartKind::Temperature),
            NodeKind::Chart(ChartKind::Salinity),
            NodeKind::Chart(ChartKind::WorldMap),
            NodeKind::KeyFindings,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in kinds.iter().skip(i + 1) {
                assert_ne!(node_accent_color(a), node_accent_color(b));
            }
        }
    }
}
