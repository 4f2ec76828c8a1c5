use super::{Button, ItemLabel};
use crate::core::Rect;
use crate::ui::{Painter, PointerState};

/// Aufklappbare Auswahl über einer festen Liste von Varianten.
///
/// Der Kopf schaltet `expanded` um; im aufgeklappten Zustand werden die Einträge
/// als Buttons unter dem Kopf gezeichnet.
///
/// Auflösung innerhalb eines Frames: ein Klick auf einen Eintrag wird zuerst
/// ausgewertet. Er setzt die Auswahl, klappt zu und verbraucht die Flanke, der
/// Kopf-Toggle wird in diesem Frame dann nicht mehr ausgewertet.
#[derive(Debug, Clone)]
pub struct Dropdown<T> {
    header: Rect,
    options: Vec<T>,
    expanded: bool,
    selected_index: usize,
}

impl<T: ItemLabel + Copy> Dropdown<T> {
    /// Erstellt ein zugeklapptes Dropdown. `selected_index` wird auf gültige Indizes geklemmt.
    pub fn new(header: Rect, options: Vec<T>, selected_index: usize) -> Self {
        let selected_index = selected_index.min(options.len().saturating_sub(1));
        Self {
            header,
            options,
            expanded: false,
            selected_index,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Verschiebt den Kopf (und damit alle Einträge), die Größe bleibt.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.header.x = x;
        self.header.y = y;
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected(&self) -> Option<T> {
        self.options.get(self.selected_index).copied()
    }

    /// Bounds des Eintrags `index` (direkt untereinander unter dem Kopf).
    pub fn item_rect(&self, index: usize) -> Rect {
        self.header.offset_y(self.header.height * (index as f32 + 1.0))
    }

    /// Wertet das Dropdown aus und zeichnet es.
    ///
    /// Liefert die in diesem Frame neu gewählte Variante.
    pub fn show(&mut self, pointer: &PointerState, painter: &mut dyn Painter) -> Option<T> {
        let header_label = match self.selected() {
            Some(item) => format!("{} v", item.item_label()),
            None => "- v".to_string(),
        };
        let header_clicked = Button::new(&header_label, self.header).show(pointer, painter);

        let mut item_clicked = None;
        if self.expanded {
            for (index, item) in self.options.iter().enumerate() {
                let rect = self.item_rect(index);
                if Button::new(item.item_label(), rect).show(pointer, painter) {
                    item_clicked = Some(index);
                }
            }
        }

        if let Some(index) = item_clicked {
            self.selected_index = index;
            self.expanded = false;
            return self.options.get(index).copied();
        }

        if header_clicked {
            self.expanded = !self.expanded;
        }
        None
    }
}
