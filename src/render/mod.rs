//! egui-Backend: Painter-Adapter, Eingabe-Erfassung und Host-Effekte.
//!
//! Einzige Stelle, die egui-Typen kennt. Der Rest der Anwendung arbeitet mit
//! `ui::Painter` und `ui::FrameInput`.

mod egui_painter;
mod frame_input;
mod screenshot;

pub use egui_painter::EguiPainter;
pub use frame_input::collect_frame_input;
pub use screenshot::{save_color_image, take_screenshot_event};

/// Wandelt eine RGBA-Farbe in eine egui-Farbe.
pub fn to_color32(color: crate::core::Rgba) -> egui::Color32 {
    let [r, g, b, a] = color;
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
