use crate::ui::{FrameInput, PointerState};
use glam::Vec2;

/// Obergrenze für die Frame-Zeit (z.B. nach Fenster-Verschiebung).
const MAX_FRAME_DT: f32 = 0.1;

/// Liest den Eingabe-Schnappschuss eines Frames aus egui.
///
/// `screen_size` ist die Größe der Zeichenfläche, nicht des Fensters.
pub fn collect_frame_input(ctx: &egui::Context, screen_size: Vec2) -> FrameInput {
    ctx.input(|i| {
        let position = i
            .pointer
            .latest_pos()
            .map(|p| Vec2::new(p.x, p.y))
            .unwrap_or(Vec2::splat(-1.0));

        FrameInput {
            pointer: PointerState {
                position,
                pressed: i.pointer.primary_pressed(),
                released: i.pointer.primary_released(),
            },
            wheel: i.raw_scroll_delta.y,
            pause_key_pressed: i.key_pressed(egui::Key::P),
            dt: i.stable_dt.clamp(0.0, MAX_FRAME_DT),
            screen_size,
        }
    })
}
