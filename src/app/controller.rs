//! Application Controller: Frame-Orchestrierung und zentrale Intent-Verarbeitung.

use super::color_cycler::RandomSource;
use super::{render_scene, AppIntent, AppState, HostCommand};
use crate::ui::{self, FrameInput, Painter};

/// Ergebnis eines Frames: einmalige Effekte, die der Host ausführen muss.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    pub commands: Vec<HostCommand>,
}

impl FrameOutcome {
    pub fn push(&mut self, command: HostCommand) {
        self.commands.push(command);
    }

    /// Wurde in diesem Frame das Schließen angefordert (File → Exit)?
    pub fn close_requested(&self) -> bool {
        self.commands.contains(&HostCommand::Close)
    }
}

/// Orchestriert Eingabe, Simulation, Zeichnen und Intents auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Führt genau einen Frame aus.
    ///
    /// Reihenfolge: Tastatur/Zoom → Uhr → Marker/Gerüst → Drag → Farben →
    /// Szene, HUD, Panel → Intents.
    pub fn run_frame(
        &mut self,
        state: &mut AppState,
        input: &FrameInput,
        painter: &mut dyn Painter,
        rng: &mut dyn RandomSource,
    ) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();

        // 1. Tastatur und Mausrad
        if input.pause_key_pressed {
            self.dispatch(state, AppIntent::TogglePauseRequested, &mut outcome);
        }
        super::handlers::view::apply_wheel(state, input.wheel);

        // 2. Uhr; im Automatikbetrieb folgt der Slider dem Parameter
        let t = state.clock.advance(input.dt, state.ui.manual_t);
        if !state.clock.is_manual() {
            state.ui.manual_t = t;
        }

        // 3. Marker und Gerüst
        state.refresh_geometry();

        // 4. Drag-Lock
        let pointer_world = state.view.camera.screen_to_world(input.pointer.position);
        let moved = state.drag_lock.resolve(
            &mut state.control_points,
            pointer_world,
            input.pointer.pressed,
            input.pointer.released,
            state.options.drag_hit_scale,
        );
        if moved.is_some() {
            state.refresh_geometry();
        }

        // 5. Farben
        let trigger_now = std::mem::take(&mut state.ui.generate_colors_pending);
        let blink = state.ui.blink_enabled.then_some(state.ui.blink_mode);
        if let Some(assignment) = state
            .colors
            .maybe_refresh(trigger_now, blink, t, input.dt, rng)
        {
            super::handlers::scene::apply_colors(state, assignment);
        }
        state.fps = if input.dt > 0.0 { 1.0 / input.dt } else { 0.0 };

        // 6. Zeichnen
        render_scene::draw_world(state, painter);
        render_scene::draw_hud(state, input.screen_size, painter);
        let intents = ui::render_panel(state, input, painter);

        // 7. Intents
        for intent in intents {
            self.dispatch(state, intent, &mut outcome);
        }

        outcome
    }

    fn dispatch(&mut self, state: &mut AppState, intent: AppIntent, outcome: &mut FrameOutcome) {
        if let Err(e) = self.handle_intent(state, intent, outcome) {
            log::error!("Intent {:?} fehlgeschlagen: {:#}", intent, e);
        }
    }

    /// Verarbeitet einen Intent; Host-Effekte landen in `outcome`.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        intent: AppIntent,
        outcome: &mut FrameOutcome,
    ) -> anyhow::Result<()> {
        use super::handlers::{scene, view};

        match intent {
            AppIntent::GenerateColorsRequested => scene::request_colors(state),
            AppIntent::ResetPointsRequested => scene::reset_points(state),
            AppIntent::ResetMarkerRequested => scene::reset_marker(state),
            AppIntent::TogglePauseRequested => scene::toggle_pause(state),
            AppIntent::BlinkModeSelected { mode } => scene::set_blink_mode(state, mode),
            AppIntent::Shape2DSelected { shape } => scene::set_shape_2d(state, shape),
            AppIntent::Solid3DSelected { solid } => scene::set_solid_3d(state, solid),
            AppIntent::DemoModeSelected { mode } => view::set_demo_mode(state, mode),
            AppIntent::WindowModeSelected { mode } => {
                if view::set_window_mode(state, mode) {
                    outcome.push(HostCommand::SetWindowMode { mode });
                }
            }
            AppIntent::ExportRequested => {
                let path = state.options.screenshot_file.trim();
                anyhow::ensure!(!path.is_empty(), "Kein Dateiname für den Export konfiguriert");
                outcome.push(HostCommand::SaveScreenshot {
                    path: path.to_string(),
                });
            }
            AppIntent::ExitRequested => {
                log::info!("Beenden angefordert");
                outcome.push(HostCommand::Close);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::WindowMode;
    use crate::shared::SimulatorOptions;

    fn state() -> AppState {
        AppState::new(SimulatorOptions::default()).expect("Standard-Layout ist gültig")
    }

    #[test]
    fn test_exit_intent_returns_close_command() {
        let mut state = state();
        let mut outcome = FrameOutcome::default();
        AppController::new()
            .handle_intent(&mut state, AppIntent::ExitRequested, &mut outcome)
            .expect("Exit schlägt nicht fehl");
        assert!(outcome.close_requested());
    }

    #[test]
    fn test_window_mode_command_only_on_change() {
        let mut state = state();
        let mut controller = AppController::new();
        let mut outcome = FrameOutcome::default();

        let windowed = AppIntent::WindowModeSelected {
            mode: WindowMode::Windowed,
        };
        controller
            .handle_intent(&mut state, windowed, &mut outcome)
            .expect("Intent");
        assert!(outcome.commands.is_empty());

        let fullscreen = AppIntent::WindowModeSelected {
            mode: WindowMode::Fullscreen,
        };
        controller
            .handle_intent(&mut state, fullscreen, &mut outcome)
            .expect("Intent");
        assert_eq!(
            outcome.commands,
            vec![HostCommand::SetWindowMode {
                mode: WindowMode::Fullscreen
            }]
        );
    }

    #[test]
    fn test_export_without_file_name_fails() {
        let mut state = state();
        state.options.screenshot_file = "  ".to_string();
        let mut outcome = FrameOutcome::default();
        let result =
            AppController::new().handle_intent(&mut state, AppIntent::ExportRequested, &mut outcome);
        assert!(result.is_err());
        assert!(outcome.commands.is_empty());
    }

    #[test]
    fn test_export_pushes_screenshot_command() {
        let mut state = state();
        let mut outcome = FrameOutcome::default();
        AppController::new()
            .handle_intent(&mut state, AppIntent::ExportRequested, &mut outcome)
            .expect("Export");
        assert_eq!(
            outcome.commands,
            vec![HostCommand::SaveScreenshot {
                path: "bezier_curve.png".to_string()
            }]
        );
    }
}
