//! Zentrale Konfiguration für den Bézier-Simulator.
//!
//! `SimulatorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Fenster ─────────────────────────────────────────────────────────

/// Standard-Fensterbreite in Pixeln.
pub const WINDOW_WIDTH: f32 = 1080.0;
/// Standard-Fensterhöhe in Pixeln.
pub const WINDOW_HEIGHT: f32 = 720.0;

// ── Animation ───────────────────────────────────────────────────────

/// Faktor `k` für den Animationsschritt (`step = k · dt`).
pub const ANIMATION_SPEED: f32 = 0.3;
/// Schwelle des zeitbasierten Blinkens in Sekunden.
pub const BLINK_INTERVAL_SECS: f32 = 0.084;
/// Skalierung der Frame-Zeit im Blink-Akkumulator.
pub const BLINK_ACCUMULATOR_SCALE: f32 = 0.5;

// ── Kurve & Punkte ──────────────────────────────────────────────────

/// Abtast-Schrittweite in `t` für die gezeichnete Kurve.
pub const CURVE_SAMPLE_STEP: f32 = 0.01;
/// Radius der Kontrollpunkte in Welteinheiten.
pub const CONTROL_POINT_RADIUS: f32 = 20.0;
/// Radius des Markers in Welteinheiten.
pub const MARKER_RADIUS: f32 = 12.0;
/// Radius der Konstruktionspunkte A..E.
pub const SKELETON_POINT_RADIUS: f32 = 7.0;
/// Vergrößerung des Hit-Radius während eines aktiven Drags.
pub const DRAG_HIT_SCALE: f32 = 3.0;

// ── Kamera ──────────────────────────────────────────────────────────

/// Screen-Offset der Kamera.
pub const CAMERA_OFFSET: [f32; 2] = [200.0, 200.0];
/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.5;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 1.5;
/// Zoom-Schritt pro Mausrad-Frame.
pub const CAMERA_ZOOM_STEP: f32 = 0.1;

// ── Export ──────────────────────────────────────────────────────────

/// Dateiname für File → Export.
pub const SCREENSHOT_FILE: &str = "bezier_curve.png";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Simulator-Optionen.
/// Wird als `bezier_simulator.toml` neben der Binary gesucht.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorOptions {
    // ── Fenster ─────────────────────────────────────────────────
    pub window_width: f32,
    pub window_height: f32,

    // ── Animation ───────────────────────────────────────────────
    /// Faktor `k`: Parameter-Fortschritt pro Sekunde
    pub animation_speed: f32,
    /// Schwelle des zeitbasierten Blinkens (Sekunden Akkumulator)
    pub blink_interval_secs: f32,
    /// Skalierung der Frame-Zeit im Blink-Akkumulator
    pub blink_accumulator_scale: f32,

    // ── Kurve & Punkte ──────────────────────────────────────────
    /// Abtast-Schrittweite der Kurve (kleiner = glatter, teurer)
    pub curve_sample_step: f32,
    pub control_point_radius: f32,
    pub marker_radius: f32,
    pub skeleton_point_radius: f32,
    /// Hit-Radius-Faktor während eines Drags
    pub drag_hit_scale: f32,

    // ── Kamera ──────────────────────────────────────────────────
    pub camera_offset: [f32; 2],
    pub camera_zoom_min: f32,
    pub camera_zoom_max: f32,
    pub camera_zoom_step: f32,

    // ── Export ──────────────────────────────────────────────────
    /// Zieldatei für File → Export
    pub screenshot_file: String,
}

impl Default for SimulatorOptions {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,

            animation_speed: ANIMATION_SPEED,
            blink_interval_secs: BLINK_INTERVAL_SECS,
            blink_accumulator_scale: BLINK_ACCUMULATOR_SCALE,

            curve_sample_step: CURVE_SAMPLE_STEP,
            control_point_radius: CONTROL_POINT_RADIUS,
            marker_radius: MARKER_RADIUS,
            skeleton_point_radius: SKELETON_POINT_RADIUS,
            drag_hit_scale: DRAG_HIT_SCALE,

            camera_offset: CAMERA_OFFSET,
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,

            screenshot_file: SCREENSHOT_FILE.to_string(),
        }
    }
}

impl SimulatorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text; fehlende Felder erhalten Standardwerte.
    /// Ungültige Wertebereiche (siehe [`Self::validate`]) sind ein Fehler.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Prüft die Wertebereiche, die Kamera und Kurvenabtastung voraussetzen.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.camera_zoom_min.is_finite() && self.camera_zoom_min > 0.0,
            "camera_zoom_min muss positiv sein (ist {})",
            self.camera_zoom_min
        );
        anyhow::ensure!(
            self.camera_zoom_max.is_finite() && self.camera_zoom_max >= self.camera_zoom_min,
            "camera_zoom_max ({}) kleiner als camera_zoom_min ({})",
            self.camera_zoom_max,
            self.camera_zoom_min
        );
        anyhow::ensure!(
            self.camera_zoom_step.is_finite() && self.camera_zoom_step > 0.0,
            "camera_zoom_step muss positiv sein (ist {})",
            self.camera_zoom_step
        );
        anyhow::ensure!(
            self.curve_sample_step.is_finite() && self.curve_sample_step > 0.0,
            "curve_sample_step muss positiv sein (ist {})",
            self.curve_sample_step
        );
        anyhow::ensure!(
            self.window_width > 0.0 && self.window_height > 0.0,
            "Fenstergröße muss positiv sein ({} x {})",
            self.window_width,
            self.window_height
        );
        Ok(())
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_simulator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_simulator.toml")
    }

    /// Kamera-Offset als `Vec2`.
    pub fn camera_offset(&self) -> glam::Vec2 {
        glam::Vec2::from_array(self.camera_offset)
    }
}
