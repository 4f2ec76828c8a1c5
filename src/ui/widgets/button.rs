use super::WIDGET_FONT_SIZE;
use crate::core::color::{BLACK, DARK_BROWN, DARK_GRAY, GRAY, LIGHT_GRAY};
use crate::core::Rect;
use crate::ui::{Painter, PointerState};
use glam::Vec2;

/// Zustandsloser Button.
///
/// Aktiviert genau im Frame der Druck-Flanke, wenn der Zeiger über den Bounds liegt.
/// Hover wird nur visuell dargestellt, es gibt kein Einrasten.
#[derive(Debug, Clone, Copy)]
pub struct Button<'a> {
    label: &'a str,
    rect: Rect,
    clickable: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, rect: Rect) -> Self {
        Self {
            label,
            rect,
            clickable: true,
        }
    }

    /// Deaktivierte Buttons werden abgedunkelt gezeichnet und aktivieren nie.
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    /// Zeichnet den Button und liefert `true`, wenn er in diesem Frame aktiviert wurde.
    pub fn show(&self, pointer: &PointerState, painter: &mut dyn Painter) -> bool {
        let hovered = self.rect.contains(pointer.position);

        let (rect_color, text_color) = match (self.clickable, hovered) {
            (false, _) => (GRAY, LIGHT_GRAY),
            (true, true) => (DARK_BROWN, BLACK),
            (true, false) => (LIGHT_GRAY, DARK_GRAY),
        };

        painter.rect_filled(self.rect, rect_color);
        let text_width = painter.measure_text(self.label, WIDGET_FONT_SIZE);
        let text_pos = Vec2::new(
            self.rect.x + (self.rect.width - text_width) / 2.0,
            self.rect.y + (self.rect.height - WIDGET_FONT_SIZE) / 2.0,
        );
        painter.text(self.label, text_pos, WIDGET_FONT_SIZE, text_color);

        self.clickable && hovered && pointer.pressed
    }
}
