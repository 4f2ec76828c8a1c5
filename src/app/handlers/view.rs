//! Handler für Kamera, Demo-Modus und Fenster-Modus.

use crate::app::{AppState, DemoMode, WindowMode};

/// Verarbeitet das Mausrad-Delta eines Frames (Zoom in festen Stufen).
pub fn apply_wheel(state: &mut AppState, wheel: f32) {
    if wheel == 0.0 {
        return;
    }
    let options = &state.options;
    state.view.camera.apply_wheel(
        wheel,
        options.camera_zoom_step,
        options.camera_zoom_min,
        options.camera_zoom_max,
    );
}

/// Wechselt die aktive Demo.
pub fn set_demo_mode(state: &mut AppState, mode: DemoMode) {
    if state.view.demo_mode != mode {
        log::info!("Demo-Modus: {}", mode.label());
    }
    state.view.demo_mode = mode;
    state.refresh_geometry();
}

/// Setzt den Fenster-Modus. Rückgabe: true, wenn sich der Modus geändert hat.
pub fn set_window_mode(state: &mut AppState, mode: WindowMode) -> bool {
    if state.view.window_mode == mode {
        return false;
    }
    state.view.window_mode = mode;
    log::info!("Fenster-Modus: {}", mode.label());
    true
}
