//! Eingabe-Schnappschuss eines Frames.
//!
//! Wird vom Backend einmal pro Frame befüllt; Widgets und Orchestrator lesen nur.

use glam::Vec2;

/// Zustand der primären Zeigertaste.
///
/// `pressed`/`released` sind flankengetriggert (nur im Frame des Wechsels true).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Zeigerposition in Screen-Koordinaten
    pub position: Vec2,
    pub pressed: bool,
    pub released: bool,
}

impl PointerState {
    /// Zeiger an `position` ohne Tastenaktivität.
    pub fn hover(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Zeiger an `position` mit Druck-Flanke in diesem Frame.
    pub fn press(position: Vec2) -> Self {
        Self {
            position,
            pressed: true,
            released: false,
        }
    }

    /// Zeiger an `position` mit gehaltener Taste (keine Flanke).
    pub fn held(position: Vec2) -> Self {
        Self {
            position,
            pressed: false,
            released: false,
        }
    }

    /// Zeiger an `position` mit Loslass-Flanke in diesem Frame.
    pub fn release(position: Vec2) -> Self {
        Self {
            position,
            pressed: false,
            released: true,
        }
    }
}

/// Alle Eingaben eines Frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    pub pointer: PointerState,
    /// Mausrad-Delta (positiv = hoch)
    pub wheel: f32,
    /// Flanke der Pause-Taste (P)
    pub pause_key_pressed: bool,
    /// Vergangene Zeit seit dem letzten Frame in Sekunden
    pub dt: f32,
    /// Größe der Zeichenfläche in Pixeln
    pub screen_size: Vec2,
}

impl FrameInput {
    /// Leerer Frame mit gegebener Frame-Zeit.
    pub fn idle(dt: f32, screen_size: Vec2) -> Self {
        Self {
            pointer: PointerState::default(),
            wheel: 0.0,
            pause_key_pressed: false,
            dt,
            screen_size,
        }
    }

    pub fn with_pointer(mut self, pointer: PointerState) -> Self {
        self.pointer = pointer;
        self
    }
}
