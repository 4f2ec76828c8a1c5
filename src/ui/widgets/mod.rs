//! Immediate-Mode-Widgets.
//!
//! Gemeinsames Protokoll: jedes Widget wertet pro Frame Zeigerposition und
//! Tasten-Flanken neu aus. Persistenter Zustand existiert nur dort, wo er
//! für die Interaktion nötig ist (`Slider::dragging`, `Dropdown::expanded`,
//! `Menu::expanded`). Layout wird nicht gespeichert.

mod button;
mod checkbox;
mod dropdown;
mod menu_bar;
mod slider;

pub use button::Button;
pub use checkbox::Checkbox;
pub use dropdown::Dropdown;
pub use menu_bar::{Menu, MenuBar, MenuItem};
pub use slider::Slider;

use thiserror::Error;

/// Konfigurationsfehler beim Aufbau eines Widgets.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WidgetError {
    #[error("Slider-Spur braucht positive Ausdehnung, erhalten: {width} x {height}")]
    DegenerateTrack { width: f32, height: f32 },
}

/// Anzeigetext für Einträge in Dropdowns.
pub trait ItemLabel {
    fn item_label(&self) -> &'static str;
}

/// Schriftgröße aller Widget-Beschriftungen.
pub(crate) const WIDGET_FONT_SIZE: f32 = 11.0;
