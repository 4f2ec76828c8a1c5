//! Bézier-Simulator.
//!
//! Interaktive Darstellung einer kubischen Bézier-Kurve mit de-Casteljau-Gerüst,
//! animiertem Marker und eigenem Immediate-Mode-Panel. Fenster über eframe.

use bezier_simulator::{
    render, AppController, AppState, FrameOutcome, HostCommand, SimulatorOptions, WindowMode,
};
use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Bézier-Simulator v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SimulatorOptions::config_path();
        let simulator_options = SimulatorOptions::load_from_file(&config_path);
        let window_size = [simulator_options.window_width, simulator_options.window_height];

        // Ungültiges Widget-Layout ist ein fataler Konfigurationsfehler
        let state = AppState::new(simulator_options)?;

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(window_size)
                .with_title("Bézier curve"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bézier curve",
            options,
            Box::new(|_cc| Ok(Box::new(SimulatorApp::new(state)))),
        )
        .map_err(|e| anyhow::anyhow!("Fenster konnte nicht betrieben werden: {e}"))
    }
}

/// Haupt-Anwendungsstruktur
struct SimulatorApp {
    state: AppState,
    controller: AppController,
    rng: StdRng,
    /// Zielpfad eines angeforderten, noch nicht eingetroffenen Screenshots
    pending_screenshot: Option<PathBuf>,
}

impl SimulatorApp {
    fn new(state: AppState) -> Self {
        Self {
            state,
            controller: AppController::new(),
            rng: StdRng::from_entropy(),
            pending_screenshot: None,
        }
    }

    fn run_frame(&mut self, ctx: &egui::Context) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let screen_size = glam::Vec2::new(rect.width(), rect.height());
                let input = render::collect_frame_input(ctx, screen_size);

                let mut painter = render::EguiPainter::new(ui.painter().clone());
                ui.painter().rect_filled(
                    rect,
                    0.0,
                    render::to_color32(bezier_simulator::core::color::BACKGROUND),
                );

                outcome = self.controller.run_frame(
                    &mut self.state,
                    &input,
                    &mut painter,
                    &mut self.rng,
                );
            });

        outcome
    }

    fn apply_host_commands(&mut self, ctx: &egui::Context, outcome: FrameOutcome) {
        for command in outcome.commands {
            match command {
                HostCommand::Close => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
                HostCommand::SaveScreenshot { path } => {
                    self.pending_screenshot = Some(PathBuf::from(path));
                    ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(
                        egui::UserData::default(),
                    ));
                }
                HostCommand::SetWindowMode { mode } => {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(
                        mode == WindowMode::Fullscreen,
                    ));
                }
            }
        }
    }

    fn sync_screenshot(&mut self, ctx: &egui::Context) {
        if self.pending_screenshot.is_none() {
            return;
        }
        let Some(image) = render::take_screenshot_event(ctx) else {
            return;
        };
        if let Some(path) = self.pending_screenshot.take() {
            if let Err(e) = render::save_color_image(&image, &path) {
                log::error!("Export fehlgeschlagen: {:#}", e);
            }
        }
    }
}

impl eframe::App for SimulatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_screenshot(ctx);

        let outcome = self.run_frame(ctx);
        self.apply_host_commands(ctx, outcome);

        // Animation läuft kontinuierlich
        ctx.request_repaint();
    }
}
