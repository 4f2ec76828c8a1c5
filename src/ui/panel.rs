//! Seiten-Panel: Buttons, Checkboxen, Slider, Dropdowns und Menüleiste.

use super::menu::{build_menu_bar, MenuAction};
use super::widgets::{Button, Checkbox, Dropdown, ItemLabel, MenuBar, Slider, WidgetError};
use super::{FrameInput, Painter};
use crate::app::{AppIntent, AppState, BlinkMode, DemoMode};
use crate::core::{color, Rect, Shape2D, Solid3D};
use glam::Vec2;

const BUTTON_SIZE: Vec2 = Vec2::new(100.0, 32.0);
const CHECKBOX_SIZE: f32 = 32.0;
/// Vertikaler Abstand zwischen Buttons bzw. Checkboxen.
const ROW_SPACING: f32 = 40.0;
const DROPDOWN_SIZE: Vec2 = Vec2::new(100.0, 24.0);

impl ItemLabel for BlinkMode {
    fn item_label(&self) -> &'static str {
        self.label()
    }
}

impl ItemLabel for Shape2D {
    fn item_label(&self) -> &'static str {
        self.label()
    }
}

impl ItemLabel for Solid3D {
    fn item_label(&self) -> &'static str {
        self.label()
    }
}

/// Widgets mit Zustand über Frames hinweg, Layout relativ zur Fenstergröße.
#[derive(Debug, Clone)]
pub struct PanelWidgets {
    window_size: Vec2,
    pub manual_slider: Slider,
    pub blink_mode: Dropdown<BlinkMode>,
    pub shape_2d: Dropdown<Shape2D>,
    pub solid_3d: Dropdown<Solid3D>,
    pub menu_bar: MenuBar<MenuAction>,
}

impl PanelWidgets {
    /// Baut das Panel-Layout für die gegebene Fenstergröße.
    pub fn new(window_size: Vec2) -> Result<Self, WidgetError> {
        let dropdown = Rect::new(0.0, 0.0, DROPDOWN_SIZE.x, DROPDOWN_SIZE.y);
        let mut widgets = Self {
            window_size,
            manual_slider: Slider::new(Rect::new(0.0, 0.0, 150.0, 30.0))?,
            blink_mode: Dropdown::new(dropdown, BlinkMode::ALL.to_vec(), 0),
            shape_2d: Dropdown::new(dropdown, Shape2D::ALL.to_vec(), 0),
            solid_3d: Dropdown::new(dropdown, Solid3D::ALL.to_vec(), 0),
            menu_bar: build_menu_bar(),
        };
        widgets.apply_layout();
        Ok(widgets)
    }

    /// Richtet das Layout an der aktuellen Fenstergröße aus (z.B. nach Fullscreen).
    ///
    /// Aufklapp- und Drag-Zustände bleiben erhalten. Leere Flächen (minimiertes
    /// Fenster) behalten das letzte Layout.
    pub fn sync_layout(&mut self, window_size: Vec2) {
        let usable = window_size.is_finite() && window_size.x > 0.0 && window_size.y > 0.0;
        if usable && window_size != self.window_size {
            log::debug!(
                "Panel-Layout: {}x{} -> {}x{}",
                self.window_size.x,
                self.window_size.y,
                window_size.x,
                window_size.y
            );
            self.window_size = window_size;
            self.apply_layout();
        }
    }

    fn right_column_x(&self) -> f32 {
        self.window_size.x - 120.0
    }

    fn apply_layout(&mut self) {
        let right_x = self.right_column_x();
        self.manual_slider
            .move_to(50.0, self.window_size.y / 2.0 - 10.0);
        self.blink_mode.move_to(right_x, 200.0);
        self.shape_2d.move_to(right_x, 280.0);
        self.solid_3d.move_to(right_x, 280.0);
    }

    /// Bounds des `index`-ten Buttons in der rechten Spalte.
    pub fn button_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.right_column_x(),
            80.0 + ROW_SPACING * index as f32,
            BUTTON_SIZE.x,
            BUTTON_SIZE.y,
        )
    }

    /// Bounds der `index`-ten Checkbox in der linken Spalte.
    pub fn checkbox_rect(&self, index: usize) -> Rect {
        Rect::new(
            10.0,
            90.0 + ROW_SPACING * index as f32,
            CHECKBOX_SIZE,
            CHECKBOX_SIZE,
        )
    }
}

/// Zeichnet das Panel und sammelt die Intents dieses Frames.
///
/// Checkboxen schalten ihre Flags direkt; alles andere wird als Intent
/// an den Controller zurückgegeben. Die Menüleiste wird zuletzt gezeichnet,
/// damit aufgeklappte Einträge über dem Panel liegen.
pub fn render_panel(
    state: &mut AppState,
    input: &FrameInput,
    painter: &mut dyn Painter,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let pointer = &input.pointer;
    state.ui.widgets.sync_layout(input.screen_size);

    // ── Buttons ────────────────────────────────────────────────
    let widgets = &state.ui.widgets;
    let buttons = [
        ("Generate Colors", AppIntent::GenerateColorsRequested),
        ("Reset Points", AppIntent::ResetPointsRequested),
        ("Reset Ball", AppIntent::ResetMarkerRequested),
    ];
    for (index, (label, intent)) in buttons.into_iter().enumerate() {
        if Button::new(label, widgets.button_rect(index)).show(pointer, painter) {
            events.push(intent);
        }
    }

    // ── Checkboxen ─────────────────────────────────────────────
    let rects: Vec<Rect> = (0..5).map(|i| widgets.checkbox_rect(i)).collect();
    Checkbox::new("Manual Mode", rects[0]).show(state.clock.manual_mode_mut(), pointer, painter);
    Checkbox::new("Draw abcde", rects[1]).show(&mut state.view.draw_skeleton, pointer, painter);
    Checkbox::new("Draw abcde line", rects[2]).show(
        &mut state.view.draw_skeleton_lines,
        pointer,
        painter,
    );
    Checkbox::new("Pause", rects[3]).show(state.clock.paused_mut(), pointer, painter);
    Checkbox::new("Blink", rects[4]).show(&mut state.ui.blink_enabled, pointer, painter);

    // ── Slider ─────────────────────────────────────────────────
    let slider_rect = state.ui.widgets.manual_slider.rect();
    painter.text(
        "MT Slider:",
        Vec2::new(slider_rect.x, slider_rect.y - 16.0),
        18.0,
        color::BLACK,
    );
    state.ui.manual_t = state
        .ui
        .widgets
        .manual_slider
        .show(state.ui.manual_t, pointer, painter);

    // ── Dropdowns ──────────────────────────────────────────────
    let widgets = &mut state.ui.widgets;
    if let Some(mode) = widgets.blink_mode.show(pointer, painter) {
        events.push(AppIntent::BlinkModeSelected { mode });
    }
    match state.view.demo_mode {
        DemoMode::Shape2D => {
            if let Some(shape) = widgets.shape_2d.show(pointer, painter) {
                events.push(AppIntent::Shape2DSelected { shape });
            }
        }
        DemoMode::Shape3D => {
            if let Some(solid) = widgets.solid_3d.show(pointer, painter) {
                events.push(AppIntent::Solid3DSelected { solid });
            }
        }
        DemoMode::Line | DemoMode::Bezier => {}
    }

    // ── Menüleiste ─────────────────────────────────────────────
    let view = &state.view;
    if let Some(action) = widgets
        .menu_bar
        .show(pointer, painter, |action| action.checked(view))
    {
        events.push(action.to_intent());
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_layout_moves_right_column_and_slider() {
        let mut widgets = PanelWidgets::new(Vec2::new(1080.0, 720.0)).expect("Layout");
        assert_eq!(widgets.button_rect(0).x, 960.0);

        widgets.sync_layout(Vec2::new(1920.0, 1080.0));

        assert_eq!(widgets.button_rect(0).x, 1800.0);
        assert_eq!(widgets.blink_mode.item_rect(0).x, 1800.0);
        assert_eq!(widgets.shape_2d.item_rect(0).x, 1800.0);
        assert_eq!(widgets.solid_3d.item_rect(0).x, 1800.0);
        assert_eq!(widgets.manual_slider.rect().y, 530.0);
        assert_eq!(widgets.manual_slider.rect().width, 150.0);
    }

    #[test]
    fn test_sync_layout_ignores_empty_surface() {
        let mut widgets = PanelWidgets::new(Vec2::new(1080.0, 720.0)).expect("Layout");
        widgets.sync_layout(Vec2::ZERO);
        assert_eq!(widgets.button_rect(0).x, 960.0);
        assert_eq!(widgets.manual_slider.rect().y, 350.0);
    }
}
