use crate::app::{BlinkMode, DemoMode, WindowMode};
use crate::core::{Shape2D, Solid3D};

/// App-Intents: Eingaben aus Widgets und Tastatur ohne eigene Mutationslogik.
///
/// Werden am Ende des Frames vom `AppController` verarbeitet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppIntent {
    /// Farben einmalig neu vergeben (wirkt im nächsten Frame)
    GenerateColorsRequested,
    /// Kontrollpunkte auf Standardpositionen zurücksetzen
    ResetPointsRequested,
    /// Marker auf `t = 0` zurücksetzen
    ResetMarkerRequested,
    /// Pause umschalten (Taste P)
    TogglePauseRequested,
    /// Demo-Modus über das Mode-Menü wählen
    DemoModeSelected { mode: DemoMode },
    /// Fenster-Modus über das View-Menü wählen
    WindowModeSelected { mode: WindowMode },
    /// Blink-Strategie im Dropdown gewählt
    BlinkModeSelected { mode: BlinkMode },
    /// 2D-Form im Dropdown gewählt
    Shape2DSelected { shape: Shape2D },
    /// 3D-Körper im Dropdown gewählt
    Solid3DSelected { solid: Solid3D },
    /// Screenshot speichern (File → Export)
    ExportRequested,
    /// Anwendung beenden (File → Exit)
    ExitRequested,
}

/// Einmalige Seiteneffekte, die der Host (Fenster-Backend) ausführt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Fenster schließen
    Close,
    /// Aktuellen Frame als Bild speichern
    SaveScreenshot { path: String },
    /// Vollbild ein-/ausschalten
    SetWindowMode { mode: WindowMode },
}
