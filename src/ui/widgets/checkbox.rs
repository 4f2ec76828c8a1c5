use super::WIDGET_FONT_SIZE;
use crate::core::color::{BLACK, DARK_BLUE};
use crate::core::Rect;
use crate::ui::{Painter, PointerState};
use glam::Vec2;

/// Checkbox über einem vom Aufrufer gehaltenen `bool`.
///
/// Schaltet im selben Frame um (kein Entprellen). Überlappende Widgets können
/// auf dieselbe Flanke reagieren.
#[derive(Debug, Clone, Copy)]
pub struct Checkbox<'a> {
    label: &'a str,
    rect: Rect,
}

impl<'a> Checkbox<'a> {
    pub fn new(label: &'a str, rect: Rect) -> Self {
        Self { label, rect }
    }

    /// Zeichnet die Checkbox, schaltet `checked` bei Hover + Druck-Flanke um
    /// und liefert `true`, wenn umgeschaltet wurde.
    pub fn show(
        &self,
        checked: &mut bool,
        pointer: &PointerState,
        painter: &mut dyn Painter,
    ) -> bool {
        let toggled = self.rect.contains(pointer.position) && pointer.pressed;
        if toggled {
            *checked = !*checked;
        }

        if *checked {
            painter.rect_filled(self.rect, DARK_BLUE);
        }
        painter.rect_lines(self.rect, 4.0, BLACK);
        painter.text(
            self.label,
            Vec2::new(
                self.rect.x + self.rect.width + 8.0,
                self.rect.y + (self.rect.height - WIDGET_FONT_SIZE) / 2.0,
            ),
            WIDGET_FONT_SIZE + 1.0,
            BLACK,
        );

        toggled
    }
}
