//! Vektor-Hilfen und Hit-Tests auf Basis von `glam::Vec2`.

use glam::Vec2;
use thiserror::Error;

/// Fehler beim Normalisieren eines Vektors ohne Länge.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Vektor ({x}, {y}) hat keine Länge und kann nicht normalisiert werden")]
pub struct DegenerateVectorError {
    pub x: f32,
    pub y: f32,
}

/// Normalisiert `v` oder liefert `DegenerateVectorError` bei Null-Länge.
pub fn try_normalize(v: Vec2) -> Result<Vec2, DegenerateVectorError> {
    v.try_normalize()
        .ok_or(DegenerateVectorError { x: v.x, y: v.y })
}

/// Prüft, ob `point` innerhalb des Kreises um `center` liegt (Rand inklusive).
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance_squared(center) <= radius * radius
}

/// Achsenparalleles Rechteck in Screen-Koordinaten (`x`, `y` = linke obere Ecke).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Erstellt ein Rechteck aus Position und Ausdehnung.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Punkt-in-Rechteck-Test (linke/obere Kante inklusive, rechte/untere exklusive).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Verschiebt das Rechteck um `dy` nach unten.
    pub fn offset_y(&self, dy: f32) -> Self {
        Self::new(self.x, self.y + dy, self.width, self.height)
    }
}
