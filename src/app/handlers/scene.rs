//! Handler für Kontrollpunkte, Marker, Animation und Farben.

use crate::app::{AppState, BlinkMode};
use crate::core::{ColorAssignment, ColorRole, Shape2D, Solid3D};

/// Setzt P0..P3 auf ihre Standardpositionen zurück.
///
/// Drag-Lock und Widget-Flags bleiben unverändert.
pub fn reset_points(state: &mut AppState) {
    state.control_points.reset();
    state.refresh_geometry();
    log::info!("Kontrollpunkte zurückgesetzt");
}

/// Setzt den Marker auf `t = 0` zurück (Richtung vorwärts).
pub fn reset_marker(state: &mut AppState) {
    state.clock.reset();
    state.ui.manual_t = 0.0;
    state.refresh_geometry();
    log::info!("Marker zurückgesetzt");
}

/// Schaltet die Pause um.
pub fn toggle_pause(state: &mut AppState) {
    state.clock.toggle_pause();
    log::info!("Pause: {}", state.clock.is_paused());
}

/// Merkt eine einmalige Farbneuvergabe für den nächsten Frame vor.
pub fn request_colors(state: &mut AppState) {
    state.ui.generate_colors_pending = true;
}

/// Überträgt eine neue Farbzuordnung auf Marker und Kontrollpunkte.
pub fn apply_colors(state: &mut AppState, assignment: ColorAssignment) {
    state
        .control_points
        .set_color(assignment.rgba(ColorRole::ControlPoints));
    state.marker.color = assignment.rgba(ColorRole::Marker);
}

pub fn set_blink_mode(state: &mut AppState, mode: BlinkMode) {
    state.ui.blink_mode = mode;
    log::info!("Blink-Modus: {}", mode.label());
}

pub fn set_shape_2d(state: &mut AppState, shape: Shape2D) {
    state.view.shape_2d = shape;
}

pub fn set_solid_3d(state: &mut AppState, solid: Solid3D) {
    state.view.solid_3d = solid;
}
