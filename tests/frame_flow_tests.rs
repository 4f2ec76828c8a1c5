use approx::assert_relative_eq;
use bezier_simulator::core::DEFAULT_CONTROL_POSITIONS;
use bezier_simulator::{
    evaluate, AppController, AppState, BlinkMode, ColorRole, DemoMode, DrawList, FrameInput,
    FrameOutcome, HostCommand, PaletteColor, PointerState, RandomSource, SimulatorOptions,
    WindowMode,
};
use glam::Vec2;

const SCREEN: Vec2 = Vec2::new(1080.0, 720.0);
const DT: f32 = 1.0 / 60.0;

/// Liefert immer denselben Index und zählt die Aufrufe.
struct FixedSource {
    index: usize,
    calls: usize,
}

impl RandomSource for FixedSource {
    fn next_index(&mut self, len: usize) -> usize {
        self.calls += 1;
        self.index % len
    }
}

struct Harness {
    state: AppState,
    controller: AppController,
    painter: DrawList,
    rng: FixedSource,
}

impl Harness {
    fn new() -> Self {
        Self::with_options(SimulatorOptions::default())
    }

    fn with_options(options: SimulatorOptions) -> Self {
        Self {
            state: AppState::new(options).expect("Standard-Layout"),
            controller: AppController::new(),
            painter: DrawList::new(),
            rng: FixedSource { index: 0, calls: 0 },
        }
    }

    fn frame(&mut self, input: FrameInput) -> FrameOutcome {
        self.painter.clear();
        self.controller
            .run_frame(&mut self.state, &input, &mut self.painter, &mut self.rng)
    }

    fn idle(&mut self) -> FrameOutcome {
        self.frame(FrameInput::idle(DT, SCREEN))
    }

    fn pointer(&mut self, pointer: PointerState) -> FrameOutcome {
        self.frame(FrameInput::idle(DT, SCREEN).with_pointer(pointer))
    }

    /// Druck- und Loslass-Flanke an derselben Screen-Position.
    fn click(&mut self, x: f32, y: f32) -> FrameOutcome {
        let outcome = self.pointer(PointerState::press(Vec2::new(x, y)));
        self.pointer(PointerState::release(Vec2::new(x, y)));
        outcome
    }
}

#[test]
fn test_drag_moves_only_locked_point_through_camera() {
    let mut h = Harness::new();

    // P0 (100, 200) liegt mit Kamera-Offset (200, 200) bei Screen (300, 400)
    h.pointer(PointerState::press(Vec2::new(300.0, 400.0)));
    assert!(h.state.drag_lock.is_locked_by(0));

    h.pointer(PointerState::held(Vec2::new(350.0, 450.0)));
    h.pointer(PointerState::release(Vec2::new(350.0, 450.0)));

    let positions = h.state.control_points.positions();
    assert_eq!(positions[0], Vec2::new(150.0, 250.0));
    assert_eq!(&positions[1..], &DEFAULT_CONTROL_POSITIONS[1..]);
    assert!(!h.state.drag_lock.is_locked());
}

#[test]
fn test_marker_follows_dragged_point_in_same_frame() {
    let mut h = Harness::new();
    h.pointer(PointerState::press(Vec2::new(300.0, 400.0)));
    h.pointer(PointerState::held(Vec2::new(320.0, 420.0)));

    let [p0, p1, p2, p3] = h.state.control_points.positions();
    let expected = evaluate(p0, p1, p2, p3, h.state.t());
    assert_relative_eq!(h.state.marker.position.x, expected.x, epsilon = 1e-4);
    assert_relative_eq!(h.state.marker.position.y, expected.y, epsilon = 1e-4);
}

#[test]
fn test_reset_buttons_restore_geometry_and_keep_flags() {
    let mut h = Harness::new();
    h.state.view.draw_skeleton_lines = false;
    h.state.ui.blink_enabled = true;

    h.pointer(PointerState::press(Vec2::new(300.0, 400.0)));
    h.pointer(PointerState::held(Vec2::new(500.0, 500.0)));
    h.pointer(PointerState::release(Vec2::new(500.0, 500.0)));
    for _ in 0..30 {
        h.idle();
    }
    assert!(h.state.t() > 0.0);

    // "Reset Points" (zweiter Button) und "Reset Ball" (dritter Button)
    h.click(1000.0, 130.0);
    h.pointer(PointerState::press(Vec2::new(1000.0, 170.0)));

    assert_eq!(h.state.control_points.positions(), DEFAULT_CONTROL_POSITIONS);
    assert_eq!(h.state.t(), 0.0);
    assert!(!h.state.view.draw_skeleton_lines);
    assert!(h.state.ui.blink_enabled);
    assert!(!h.state.drag_lock.is_locked());
}

#[test]
fn test_exit_via_file_menu_returns_close_request() {
    let mut h = Harness::new();

    // Kopf "File" aufklappen, dann Eintrag "Exit" (zweiter Eintrag)
    let outcome = h.click(30.0, 12.0);
    assert!(!outcome.close_requested());

    let outcome = h.pointer(PointerState::press(Vec2::new(50.0, 60.0)));
    assert!(outcome.close_requested());
    assert!(!h.state.ui.widgets.menu_bar.menus()[0].is_expanded());
}

#[test]
fn test_mode_menu_switches_to_line_demo() {
    let mut h = Harness::new();
    h.click(90.0, 12.0);
    h.click(100.0, 36.0);
    assert_eq!(h.state.view.demo_mode, DemoMode::Line);

    h.idle();
    let [p0, _, _, p3] = h.state.control_points.positions();
    let expected = p0.lerp(p3, h.state.t());
    assert_relative_eq!(h.state.marker.position.x, expected.x, epsilon = 1e-4);
    assert_relative_eq!(h.state.marker.position.y, expected.y, epsilon = 1e-4);
}

#[test]
fn test_pause_key_freezes_parameter_and_shows_banner() {
    let mut h = Harness::new();
    h.idle();
    h.idle();

    let mut input = FrameInput::idle(DT, SCREEN);
    input.pause_key_pressed = true;
    h.frame(input);
    let frozen = h.state.t();
    assert!(h.state.clock.is_paused());
    assert!(h.painter.texts().contains(&"Paused"));

    for _ in 0..10 {
        h.idle();
    }
    assert_eq!(h.state.t(), frozen);
}

#[test]
fn test_manual_mode_takes_value_from_slider() {
    let mut h = Harness::new();

    // Checkbox "Manual Mode"
    h.click(20.0, 100.0);
    assert!(h.state.clock.is_manual());

    // Slider-Spur (50, 350, 150, 30): Mitte entspricht 0.5
    h.click(125.0, 365.0);
    assert_relative_eq!(h.state.ui.manual_t, 0.5);

    h.idle();
    assert_relative_eq!(h.state.t(), 0.5);
    let [p0, p1, p2, p3] = h.state.control_points.positions();
    let expected = evaluate(p0, p1, p2, p3, 0.5);
    assert_relative_eq!(h.state.marker.position.x, expected.x, epsilon = 1e-4);
}

#[test]
fn test_generate_colors_applies_on_next_frame() {
    let mut h = Harness::new();

    // "Generate Colors" (erster Button)
    h.pointer(PointerState::press(Vec2::new(1000.0, 90.0)));
    assert!(h.state.ui.generate_colors_pending);
    assert_eq!(h.rng.calls, 0);

    h.idle();
    assert!(!h.state.ui.generate_colors_pending);
    assert_eq!(h.rng.calls, 5);
    let assignment = h.state.colors.assignment();
    assert_eq!(assignment.get(ColorRole::Marker), PaletteColor::Red);
    assert_eq!(h.state.marker.color, PaletteColor::Red.rgba());
    assert!(h
        .state
        .control_points
        .points()
        .iter()
        .all(|p| p.color == PaletteColor::Red.rgba()));
}

#[test]
fn test_boundary_blink_fires_twice_per_cycle() {
    let mut h = Harness::new();
    h.state.ui.blink_enabled = true;
    h.state.ui.blink_mode = BlinkMode::BoundaryBased;

    // Schritt 0.1 pro Frame: 0 → 1 → 0 dauert rund 20 Frames
    let dt = 0.1 / h.state.options.animation_speed;
    for _ in 0..25 {
        h.frame(FrameInput::idle(dt, SCREEN));
    }

    assert_eq!(h.rng.calls, 2 * 5);
}

#[test]
fn test_wheel_zoom_stays_within_bounds() {
    let mut h = Harness::new();
    for _ in 0..20 {
        let mut input = FrameInput::idle(DT, SCREEN);
        input.wheel = 1.0;
        h.frame(input);
    }
    assert_relative_eq!(h.state.view.camera.zoom, h.state.options.camera_zoom_max);
}

#[test]
fn test_wheel_with_inverted_zoom_bounds_keeps_running() {
    let mut options = SimulatorOptions::default();
    options.camera_zoom_min = 1.5;
    options.camera_zoom_max = 0.5;
    let mut h = Harness::with_options(options);

    let mut input = FrameInput::idle(DT, SCREEN);
    input.wheel = 1.0;
    h.frame(input);
    assert!(h.state.view.camera.zoom.is_finite());
}

#[test]
fn test_overlapping_menus_choose_topmost_item() {
    let mut h = Harness::new();
    // Mode (x 60..120) und View (x 120..180) öffnen; Einträge sind 110 breit
    h.click(90.0, 12.0);
    h.click(150.0, 12.0);

    // (140, 60): Mode "Bezier" und View "Fullscreen" liegen übereinander
    let outcome = h.pointer(PointerState::press(Vec2::new(140.0, 60.0)));

    assert_eq!(h.state.view.window_mode, WindowMode::Fullscreen);
    assert_eq!(
        outcome.commands,
        vec![HostCommand::SetWindowMode {
            mode: WindowMode::Fullscreen
        }]
    );
    let menus = h.state.ui.widgets.menu_bar.menus();
    assert!(menus[1].is_expanded());
    assert!(!menus[2].is_expanded());
    assert_eq!(h.state.view.demo_mode, DemoMode::Bezier);
}

#[test]
fn test_panel_follows_resized_surface() {
    let mut h = Harness::new();
    let large = Vec2::new(1920.0, 1080.0);

    // "Generate Colors" rückt mit der rechten Spalte nach x = 1800
    let press = PointerState::press(Vec2::new(1850.0, 90.0));
    h.frame(FrameInput::idle(DT, large).with_pointer(press));
    assert!(h.state.ui.generate_colors_pending);

    // an der alten Position liegt kein Button mehr
    let mut h = Harness::new();
    let press = PointerState::press(Vec2::new(1000.0, 90.0));
    h.frame(FrameInput::idle(DT, large).with_pointer(press));
    assert!(!h.state.ui.generate_colors_pending);
}
