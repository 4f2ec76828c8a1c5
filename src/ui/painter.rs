//! Opaker Immediate-Renderer: Zeichenprimitive in Screen-Koordinaten.
//!
//! Die Anwendung zeichnet jedes Frame komplett neu; es gibt keinen Szenengraphen.
//! `DrawList` zeichnet Aufrufe nur auf (Tests, Benchmarks).

use crate::core::{Rect, Rgba};
use glam::Vec2;

/// Zeichenprimitive, die ein Backend bereitstellen muss.
pub trait Painter {
    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba);
    fn thick_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgba);
    fn rect_filled(&mut self, rect: Rect, color: Rgba);
    fn rect_lines(&mut self, rect: Rect, thickness: f32, color: Rgba);
    /// Text mit linker oberer Ecke bei `pos`.
    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Rgba);
    /// Geschätzte Textbreite in Pixeln (für Zentrierung).
    fn measure_text(&self, text: &str, size: f32) -> f32;
}

/// Aufgezeichneter Zeichenaufruf.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        thickness: f32,
        color: Rgba,
    },
    RectFilled {
        rect: Rect,
        color: Rgba,
    },
    RectLines {
        rect: Rect,
        thickness: f32,
        color: Rgba,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Rgba,
    },
}

/// Painter, der alle Aufrufe in einer Liste sammelt.
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Alle gezeichneten Texte in Reihenfolge.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Füllfarbe des ersten gefüllten Rechtecks an exakt dieser Position.
    pub fn fill_of(&self, rect: Rect) -> Option<Rgba> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::RectFilled { rect: r, color } if *r == rect => Some(*color),
            _ => None,
        })
    }

    /// Anzahl der Kreise mit der Farbe `color`.
    pub fn circles_with_color(&self, color: Rgba) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { color: col, .. } if *col == color))
            .count()
    }
}

impl Painter for DrawList {
    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        self.thick_line(from, to, 1.0, color);
    }

    fn thick_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            thickness,
            color,
        });
    }

    fn rect_filled(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::RectFilled { rect, color });
    }

    fn rect_lines(&mut self, rect: Rect, thickness: f32, color: Rgba) {
        self.commands.push(DrawCommand::RectLines {
            rect,
            thickness,
            color,
        });
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        // Grobe Schätzung ohne Font-Metriken
        text.chars().count() as f32 * size * 0.55
    }
}
