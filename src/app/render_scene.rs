//! Zeichnet Welt-Szene und HUD aus dem AppState.
//!
//! Welt-Koordinaten laufen über die Kamera; HUD und Panel liegen im Screen-Raum.

use super::{AppState, DemoMode};
use crate::core::{color, sample_curve, Camera2D, ColorRole, Point, Rgba};
use crate::ui::Painter;
use glam::Vec2;

/// Seitenlänge bzw. Durchmesser der Demo-Formen in Welteinheiten.
const SHAPE_SIZE: f32 = 40.0;
const POINT_LABEL_SIZE: f32 = 15.0;
const COORDINATE_TEXT_SIZE: f32 = 12.0;
const SKELETON_LABEL_SIZE: f32 = 14.0;

/// Painter-Adapter, der Welt-Koordinaten über die Kamera in den Screen-Raum abbildet.
struct WorldPainter<'a> {
    camera: &'a Camera2D,
    painter: &'a mut dyn Painter,
}

impl WorldPainter<'_> {
    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.painter.circle(
            self.camera.world_to_screen(center),
            self.camera.world_len_to_screen(radius),
            color,
        );
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        self.painter.line(
            self.camera.world_to_screen(from),
            self.camera.world_to_screen(to),
            color,
        );
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Rgba) {
        self.painter.text(
            text,
            self.camera.world_to_screen(pos),
            self.camera.world_len_to_screen(size),
            color,
        );
    }

    fn polyline(&mut self, points: &[Vec2], closed: bool, color: Rgba) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], color);
        }
        if closed && points.len() > 2 {
            if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
                self.line(last, first, color);
            }
        }
    }

    /// Punkt mit Beschriftung und Koordinatenanzeige.
    fn point(&mut self, point: &Point) {
        self.circle(point.position, point.radius, point.color);
        self.text(
            &point.label,
            point.position - Vec2::splat(5.0),
            POINT_LABEL_SIZE,
            color::BLACK,
        );
        self.text(
            &point.coordinate_text(),
            point.position + Vec2::new(25.0, 10.0),
            COORDINATE_TEXT_SIZE,
            color::BLACK,
        );
    }
}

/// Zeichnet die Welt-Szene des aktiven Demo-Modus.
pub fn draw_world(state: &AppState, painter: &mut dyn Painter) {
    let colors = state.colors.assignment();
    let mut world = WorldPainter {
        camera: &state.view.camera,
        painter,
    };
    let positions = state.control_points.positions();

    // Kontrollpolygon P0 → P1 → P2 → P3 → P0
    world.polyline(&positions, true, colors.rgba(ColorRole::PointLines));
    for point in state.control_points.points() {
        world.point(point);
    }

    match state.view.demo_mode {
        DemoMode::Line => {
            world.line(positions[0], positions[3], color::BLACK);
            world.point(&state.marker);
        }
        DemoMode::Bezier => {
            draw_curve(&mut world, state);
            world.point(&state.marker);
            draw_skeleton(&mut world, state);
        }
        DemoMode::Shape2D => {
            draw_curve(&mut world, state);
            let outline = state
                .view
                .shape_2d
                .outline(state.marker.position, SHAPE_SIZE);
            world.polyline(&outline, true, state.marker.color);
        }
        DemoMode::Shape3D => {
            draw_curve(&mut world, state);
            let angle = state.t() * std::f32::consts::TAU;
            let edges = state
                .view
                .solid_3d
                .projected_edges(state.marker.position, SHAPE_SIZE, angle);
            for (from, to) in edges {
                world.line(from, to, state.marker.color);
            }
        }
    }
}

fn draw_curve(world: &mut WorldPainter<'_>, state: &AppState) {
    let samples = sample_curve(
        state.control_points.positions(),
        state.options.curve_sample_step,
    );
    world.polyline(&samples, false, color::BLACK);
}

fn draw_skeleton(world: &mut WorldPainter<'_>, state: &AppState) {
    if !state.view.draw_skeleton {
        return;
    }
    let colors = state.colors.assignment();
    let radius = state.options.skeleton_point_radius;
    for (label, pos) in state.skeleton.labeled() {
        world.circle(pos, radius, colors.rgba(ColorRole::ConstructionPoints));
        world.text(label, pos, SKELETON_LABEL_SIZE, color::BLACK);
    }

    if state.view.draw_skeleton_lines {
        let s = &state.skeleton;
        let line_color = colors.rgba(ColorRole::SkeletonLines);
        world.line(s.a, s.b, line_color);
        world.line(s.b, s.c, line_color);
        world.line(s.d, s.e, line_color);
    }
}

/// Zeichnet Titel, Autor, Pause-Banner und FPS.
pub fn draw_hud(state: &AppState, screen_size: Vec2, painter: &mut dyn Painter) {
    if state.clock.is_paused() {
        painter.text(
            "Paused",
            Vec2::new(screen_size.x / 2.0 - 100.0, 50.0),
            44.0,
            color::RED,
        );
    }
    painter.text("Bézier curve", Vec2::new(20.0, 30.0), 24.0, color::BLACK);
    painter.text(
        "by Wildan R Wijanarko",
        Vec2::new(45.0, 58.0),
        12.0,
        color::BLACK,
    );
    painter.text(
        &format!("{:.0} FPS", state.fps),
        Vec2::new(screen_size.x - 80.0, 10.0),
        20.0,
        color::DARK_GREEN,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PaletteColor;
    use crate::shared::SimulatorOptions;
    use crate::ui::{DrawCommand, DrawList};

    fn state() -> AppState {
        AppState::new(SimulatorOptions::default()).expect("Standard-Layout ist gültig")
    }

    #[test]
    fn test_bezier_scene_draws_points_and_labels() {
        let state = state();
        let mut list = DrawList::new();
        draw_world(&state, &mut list);

        let texts = list.texts();
        for label in ["P0", "P1", "P2", "P3", "Ball", "A", "B", "C", "D", "E"] {
            assert!(texts.contains(&label), "Label {label} fehlt");
        }
        assert!(texts.contains(&"x: 100.00 y: 200.00"));

        // Standardfarben: Kontrollpunkte Lime, Marker Blau, Gerüst Pink
        assert_eq!(list.circles_with_color(PaletteColor::Lime.rgba()), 4);
        assert_eq!(list.circles_with_color(PaletteColor::Blue.rgba()), 1);
        assert_eq!(list.circles_with_color(PaletteColor::Pink.rgba()), 5);
    }

    #[test]
    fn test_skeleton_hidden_when_unchecked() {
        let mut state = state();
        state.view.draw_skeleton = false;
        let mut list = DrawList::new();
        draw_world(&state, &mut list);
        assert!(!list.texts().contains(&"A"));
    }

    #[test]
    fn test_world_coordinates_pass_through_camera() {
        let mut state = state();
        state.view.camera.zoom = 1.0;
        let mut list = DrawList::new();
        draw_world(&state, &mut list);

        // P0 (100, 200) mit Offset (200, 200) und Target (0, 0)
        let p0_circle = list.commands.iter().find_map(|c| match c {
            DrawCommand::Circle { center, radius, .. } if *radius == 20.0 => Some(*center),
            _ => None,
        });
        assert_eq!(p0_circle, Some(Vec2::new(300.0, 400.0)));
    }

    #[test]
    fn test_line_mode_skips_skeleton() {
        let mut state = state();
        state.view.demo_mode = DemoMode::Line;
        let mut list = DrawList::new();
        draw_world(&state, &mut list);
        assert!(!list.texts().contains(&"D"));
        assert!(list.texts().contains(&"Ball"));
    }

    #[test]
    fn test_paused_banner() {
        let mut state = state();
        let mut list = DrawList::new();
        draw_hud(&state, Vec2::new(1080.0, 720.0), &mut list);
        assert!(!list.texts().contains(&"Paused"));

        state.clock.toggle_pause();
        list.clear();
        draw_hud(&state, Vec2::new(1080.0, 720.0), &mut list);
        assert!(list.texts().contains(&"Paused"));
    }
}
