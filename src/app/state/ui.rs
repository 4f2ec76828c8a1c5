use crate::app::BlinkMode;
use crate::ui::PanelWidgets;

/// UI-bezogener Zustand: Widget-Flags und persistenter Widget-Zustand.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Wert des manuellen Slider ("MT"); folgt im Automatikbetrieb `t`
    pub manual_t: f32,
    /// Kontinuierliches Blinken aktiv
    pub blink_enabled: bool,
    pub blink_mode: BlinkMode,
    /// Einmaliger Farbwechsel, wird im nächsten Frame verbraucht
    pub generate_colors_pending: bool,
    /// Widgets mit Zustand über Frames hinweg
    pub widgets: PanelWidgets,
}

impl UiState {
    pub fn new(widgets: PanelWidgets) -> Self {
        Self {
            manual_t: 0.0,
            blink_enabled: false,
            blink_mode: BlinkMode::default(),
            generate_colors_pending: false,
            widgets,
        }
    }
}
