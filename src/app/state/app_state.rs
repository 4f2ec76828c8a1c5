use super::{UiState, ViewState};
use crate::app::{AnimationClock, ColorCycler, DragLockController};
use crate::core::{evaluate, skeleton, Camera2D, ColorRole, ControlPointSet, Point, Skeleton};
use crate::shared::SimulatorOptions;
use crate::ui::{PanelWidgets, WidgetError};
use glam::Vec2;

/// Hauptzustand der Anwendung
#[derive(Debug, Clone)]
pub struct AppState {
    /// Laufzeit-Optionen
    pub options: SimulatorOptions,
    /// Kontrollpunkte P0..P3
    pub control_points: ControlPointSet,
    /// Animierter Marker ("Ball")
    pub marker: Point,
    /// Konstruktionsgerüst des aktuellen Frames
    pub skeleton: Skeleton,
    pub clock: AnimationClock,
    pub drag_lock: DragLockController,
    pub colors: ColorCycler,
    pub view: ViewState,
    pub ui: UiState,
    /// Zuletzt gemessene Frame-Rate
    pub fps: f32,
}

impl AppState {
    /// Erstellt den Startzustand.
    ///
    /// Schlägt fehl, wenn das Widget-Layout aus den Optionen ungültig ist.
    pub fn new(options: SimulatorOptions) -> Result<Self, WidgetError> {
        let window_size = Vec2::new(options.window_width, options.window_height);
        let widgets = PanelWidgets::new(window_size)?;

        let control_points = ControlPointSet::new(options.control_point_radius);
        let colors = ColorCycler::new(options.blink_interval_secs, options.blink_accumulator_scale);
        let [p0, p1, p2, p3] = control_points.positions();
        let marker = Point::new(
            4,
            evaluate(p0, p1, p2, p3, 0.0),
            options.marker_radius,
            colors.assignment().rgba(ColorRole::Marker),
            "Ball",
        );

        Ok(Self {
            skeleton: skeleton(p0, p1, p2, p3, 0.0),
            marker,
            control_points,
            clock: AnimationClock::new(options.animation_speed),
            drag_lock: DragLockController::new(),
            colors,
            view: ViewState::new(Camera2D::new(options.camera_offset())),
            ui: UiState::new(widgets),
            fps: 0.0,
            options,
        })
    }

    /// Aktueller Kurvenparameter.
    pub fn t(&self) -> f32 {
        self.clock.t()
    }

    /// Berechnet Marker und Gerüst aus `t` und den aktuellen Kontrollpunkten neu.
    pub fn refresh_geometry(&mut self) {
        let t = self.clock.t();
        let [p0, p1, p2, p3] = self.control_points.positions();
        self.skeleton = skeleton(p0, p1, p2, p3, t);
        self.marker.position = match self.view.demo_mode {
            super::DemoMode::Line => p0.lerp(p3, t),
            _ => self.skeleton.curve_point(t),
        };
    }
}
