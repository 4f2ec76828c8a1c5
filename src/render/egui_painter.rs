use super::to_color32;
use crate::core::{Rect, Rgba};
use crate::ui::Painter;
use glam::Vec2;

/// Implementiert `ui::Painter` über einen `egui::Painter`.
pub struct EguiPainter {
    painter: egui::Painter,
}

impl EguiPainter {
    pub fn new(painter: egui::Painter) -> Self {
        Self { painter }
    }
}

fn pos2(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

fn egui_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(rect.x, rect.y),
        egui::vec2(rect.width, rect.height),
    )
}

impl Painter for EguiPainter {
    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.painter
            .circle_filled(pos2(center), radius, to_color32(color));
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        self.thick_line(from, to, 1.0, color);
    }

    fn thick_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgba) {
        self.painter.line_segment(
            [pos2(from), pos2(to)],
            egui::Stroke::new(thickness, to_color32(color)),
        );
    }

    fn rect_filled(&mut self, rect: Rect, color: Rgba) {
        self.painter
            .rect_filled(egui_rect(rect), 0.0, to_color32(color));
    }

    fn rect_lines(&mut self, rect: Rect, thickness: f32, color: Rgba) {
        self.painter.rect_stroke(
            egui_rect(rect),
            0.0,
            egui::Stroke::new(thickness, to_color32(color)),
            egui::StrokeKind::Inside,
        );
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Rgba) {
        self.painter.text(
            pos2(pos),
            egui::Align2::LEFT_TOP,
            text,
            egui::FontId::proportional(size),
            to_color32(color),
        );
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        self.painter
            .layout_no_wrap(
                text.to_string(),
                egui::FontId::proportional(size),
                egui::Color32::BLACK,
            )
            .size()
            .x
    }
}
