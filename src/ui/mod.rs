//! UI-Layer: Painter-Abstraktion, Eingabe-Schnappschuss, Widgets und Panel.
//!
//! Widgets zeichnen über den opaken `Painter`; das egui-Backend liegt in `render`.

pub mod input;
pub mod menu;
pub mod painter;
pub mod panel;
pub mod widgets;

pub use input::{FrameInput, PointerState};
pub use menu::{build_menu_bar, MenuAction};
pub use painter::{DrawCommand, DrawList, Painter};
pub use panel::{render_panel, PanelWidgets};
pub use widgets::{
    Button, Checkbox, Dropdown, ItemLabel, Menu, MenuBar, MenuItem, Slider, WidgetError,
};
