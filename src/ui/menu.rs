//! Top-Menü (File, Mode, View) als eigene Immediate-Mode-Menüleiste.

use super::widgets::{Menu, MenuBar, MenuItem};
use crate::app::{AppIntent, DemoMode, ViewState, WindowMode};
use glam::Vec2;

/// Breite × Höhe eines Menükopfs.
const HEADER_SIZE: Vec2 = Vec2::new(60.0, 24.0);
/// Breite der aufgeklappten Einträge.
const ITEM_WIDTH: f32 = 110.0;

/// Aktion hinter einem Menüeintrag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Export,
    Exit,
    Mode(DemoMode),
    View(WindowMode),
}

impl MenuAction {
    /// Übersetzt die Aktion in einen App-Intent.
    pub fn to_intent(self) -> AppIntent {
        match self {
            MenuAction::Export => AppIntent::ExportRequested,
            MenuAction::Exit => AppIntent::ExitRequested,
            MenuAction::Mode(mode) => AppIntent::DemoModeSelected { mode },
            MenuAction::View(mode) => AppIntent::WindowModeSelected { mode },
        }
    }

    /// Häkchen-Zustand für Auswahl-Einträge, `None` für einfache Aktionen.
    pub fn checked(self, view: &ViewState) -> Option<bool> {
        match self {
            MenuAction::Export | MenuAction::Exit => None,
            MenuAction::Mode(mode) => Some(view.demo_mode == mode),
            MenuAction::View(mode) => Some(view.window_mode == mode),
        }
    }
}

/// Baut die Menüleiste oben links.
pub fn build_menu_bar() -> MenuBar<MenuAction> {
    let file = Menu::new(
        "File",
        vec![
            MenuItem {
                label: "Export",
                action: MenuAction::Export,
            },
            MenuItem {
                label: "Exit",
                action: MenuAction::Exit,
            },
        ],
    );
    let mode = Menu::new(
        "Mode",
        DemoMode::ALL
            .iter()
            .map(|&mode| MenuItem {
                label: mode.label(),
                action: MenuAction::Mode(mode),
            })
            .collect(),
    );
    let view = Menu::new(
        "View",
        [WindowMode::Windowed, WindowMode::Fullscreen]
            .iter()
            .map(|&mode| MenuItem {
                label: mode.label(),
                action: MenuAction::View(mode),
            })
            .collect(),
    );

    MenuBar::new(Vec2::ZERO, HEADER_SIZE, ITEM_WIDTH)
        .with_menu(file)
        .with_menu(mode)
        .with_menu(view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_layout_file_mode_view() {
        let bar = build_menu_bar();
        let titles: Vec<_> = bar.menus().iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["File", "Mode", "View"]);
        assert_eq!(bar.menus()[1].items.len(), DemoMode::ALL.len());
    }

    #[test]
    fn test_view_items_are_mutually_exclusive() {
        let view = ViewState::default();
        assert_eq!(
            MenuAction::View(WindowMode::Windowed).checked(&view),
            Some(true)
        );
        assert_eq!(
            MenuAction::View(WindowMode::Fullscreen).checked(&view),
            Some(false)
        );
        assert_eq!(MenuAction::Exit.checked(&view), None);
    }

    #[test]
    fn test_actions_map_to_intents() {
        assert_eq!(MenuAction::Exit.to_intent(), AppIntent::ExitRequested);
        assert_eq!(
            MenuAction::Mode(DemoMode::Line).to_intent(),
            AppIntent::DemoModeSelected {
                mode: DemoMode::Line
            }
        );
    }
}
