use super::Button;
use crate::core::Rect;
use crate::ui::{Painter, PointerState};

/// Eintrag eines Top-Level-Menüs.
#[derive(Debug, Clone, Copy)]
pub struct MenuItem<A> {
    pub label: &'static str,
    pub action: A,
}

/// Top-Level-Menü mit eigenem `expanded`-Flag.
#[derive(Debug, Clone)]
pub struct Menu<A> {
    pub title: &'static str,
    pub items: Vec<MenuItem<A>>,
    expanded: bool,
}

impl<A> Menu<A> {
    pub fn new(title: &'static str, items: Vec<MenuItem<A>>) -> Self {
        Self {
            title,
            items,
            expanded: false,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

/// Menüleiste aus unabhängigen Top-Level-Menüs.
///
/// Jedes Menü folgt demselben Toggle-Protokoll wie `Dropdown`. Mehrere Menüs
/// dürfen gleichzeitig offen sein; es gibt keinen gemeinsamen "nur eins offen"-Zustand.
#[derive(Debug, Clone)]
pub struct MenuBar<A> {
    origin: glam::Vec2,
    header_size: glam::Vec2,
    item_width: f32,
    menus: Vec<Menu<A>>,
}

impl<A: Copy> MenuBar<A> {
    pub fn new(origin: glam::Vec2, header_size: glam::Vec2, item_width: f32) -> Self {
        Self {
            origin,
            header_size,
            item_width,
            menus: Vec::new(),
        }
    }

    pub fn with_menu(mut self, menu: Menu<A>) -> Self {
        self.menus.push(menu);
        self
    }

    pub fn menus(&self) -> &[Menu<A>] {
        &self.menus
    }

    /// Bounds des Kopfes von Menü `menu_index`.
    pub fn header_rect(&self, menu_index: usize) -> Rect {
        Rect::new(
            self.origin.x + self.header_size.x * menu_index as f32,
            self.origin.y,
            self.header_size.x,
            self.header_size.y,
        )
    }

    /// Bounds von Eintrag `item_index` in Menü `menu_index`.
    pub fn item_rect(&self, menu_index: usize, item_index: usize) -> Rect {
        let header = self.header_rect(menu_index);
        Rect::new(
            header.x,
            header.y + self.header_size.y * (item_index as f32 + 1.0),
            self.item_width,
            self.header_size.y,
        )
    }

    /// Oberster offener Eintrag unter dem Zeiger bei einer Druck-Flanke.
    ///
    /// Spätere Menüs werden über früheren gezeichnet, daher wird rückwärts gesucht.
    fn topmost_item_hit(&self, pointer: &PointerState) -> Option<(usize, usize)> {
        if !pointer.pressed {
            return None;
        }
        (0..self.menus.len()).rev().find_map(|menu_index| {
            let menu = &self.menus[menu_index];
            if !menu.expanded {
                return None;
            }
            (0..menu.items.len())
                .find(|&item_index| {
                    self.item_rect(menu_index, item_index)
                        .contains(pointer.position)
                })
                .map(|item_index| (menu_index, item_index))
        })
    }

    /// Wertet alle Menüs aus und zeichnet sie.
    ///
    /// `checked` liefert für umschaltbare Aktionen den aktuellen Zustand
    /// (`Some(true/false)`), für einfache Aktionen `None`.
    /// Rückgabe: die in diesem Frame gewählte Aktion. Überlappen sich die Einträge
    /// zweier offener Menüs, gewinnt der oben gezeichnete (das spätere Menü).
    pub fn show(
        &mut self,
        pointer: &PointerState,
        painter: &mut dyn Painter,
        checked: impl Fn(A) -> Option<bool>,
    ) -> Option<A> {
        let hit = self.topmost_item_hit(pointer);
        let mut chosen = None;

        for menu_index in 0..self.menus.len() {
            let header = self.header_rect(menu_index);
            let header_clicked =
                Button::new(self.menus[menu_index].title, header).show(pointer, painter);

            if self.menus[menu_index].expanded {
                for (item_index, item) in self.menus[menu_index].items.iter().enumerate() {
                    let label = match checked(item.action) {
                        Some(true) => format!("[x] {}", item.label),
                        Some(false) => format!("[ ] {}", item.label),
                        None => item.label.to_string(),
                    };
                    let rect = self.item_rect(menu_index, item_index);
                    Button::new(&label, rect).show(pointer, painter);
                }
            }

            let menu = &mut self.menus[menu_index];
            match hit {
                Some((hit_menu, hit_item)) if hit_menu == menu_index => {
                    // Eintrag verbraucht die Flanke: Menü schließt, Kopf-Toggle entfällt
                    menu.expanded = false;
                    chosen = Some(menu.items[hit_item].action);
                }
                _ if header_clicked => menu.expanded = !menu.expanded,
                _ => {}
            }
        }

        chosen
    }
}
