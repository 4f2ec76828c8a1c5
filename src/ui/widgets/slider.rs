use super::WidgetError;
use crate::core::color::{DARK_PURPLE, LIGHT_GRAY};
use crate::core::Rect;
use crate::ui::{Painter, PointerState};

/// Breite des Schiebereglers in Pixeln.
const HANDLE_WIDTH: f32 = 20.0;

/// Horizontaler Slider für Werte in `[0, 1]`.
///
/// Drag beginnt mit einer Druck-Flanke innerhalb der Spur. Während des Drags
/// folgt der Wert pegelgetriggert der Zeiger-X-Position; die Loslass-Flanke
/// beendet den Drag unabhängig von der Zeigerposition.
#[derive(Debug, Clone)]
pub struct Slider {
    rect: Rect,
    dragging: bool,
}

impl Slider {
    /// Erstellt einen Slider. Spuren ohne Fläche sind ein Konfigurationsfehler.
    pub fn new(rect: Rect) -> Result<Self, WidgetError> {
        if !(rect.width > 0.0 && rect.height > 0.0 && rect.width.is_finite()) {
            return Err(WidgetError::DegenerateTrack {
                width: rect.width,
                height: rect.height,
            });
        }
        Ok(Self {
            rect,
            dragging: false,
        })
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Verschiebt die Spur, die Größe bleibt.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.rect.x = x;
        self.rect.y = y;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Wertet die Interaktion aus, zeichnet den Slider und liefert den neuen Wert.
    pub fn show(&mut self, value: f32, pointer: &PointerState, painter: &mut dyn Painter) -> f32 {
        if pointer.pressed && self.rect.contains(pointer.position) {
            self.dragging = true;
        }

        let mut value = value;
        if self.dragging {
            value = self.value_at(pointer.position.x);
        }

        if pointer.released {
            self.dragging = false;
        }

        painter.rect_filled(self.rect, LIGHT_GRAY);
        let handle = Rect::new(
            self.rect.x + (value * self.rect.width).floor() - HANDLE_WIDTH / 2.0,
            self.rect.y,
            HANDLE_WIDTH,
            self.rect.height,
        );
        painter.rect_filled(handle, DARK_PURPLE);

        value
    }

    /// Wert an Screen-X, auf `[0, 1]` geklemmt.
    fn value_at(&self, x: f32) -> f32 {
        ((x - self.rect.x) / self.rect.width).clamp(0.0, 1.0)
    }
}
