//! 2D-Kamera mit Offset, Ziel und Zoom (Welt ↔ Screen).

use glam::Vec2;

/// 2D-Kamera
///
/// Screen = (Welt − `target`) · `zoom` + `offset`.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Screen-Position, auf die `target` abgebildet wird
    pub offset: Vec2,
    /// Welt-Punkt im Fokus der Kamera
    pub target: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Standard-Offset des Startlayouts.
    pub const DEFAULT_OFFSET: Vec2 = Vec2::new(200.0, 200.0);

    /// Erstellt eine neue Kamera
    pub fn new(offset: Vec2) -> Self {
        Self {
            offset,
            target: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Konvertiert Screen-Koordinaten zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        // Zoom 0 würde durch 0 teilen; die Bounds verhindern das, hier nur absichern
        let zoom = self.zoom.max(f32::EPSILON);
        (screen_pos - self.offset) / zoom + self.target
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten.
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        (world_pos - self.target) * self.zoom + self.offset
    }

    /// Skaliert eine Welt-Länge (z.B. Radius) in Screen-Pixel.
    pub fn world_len_to_screen(&self, len: f32) -> f32 {
        len * self.zoom
    }

    /// Wendet eine Mausrad-Bewegung an: ein Zoom-Schritt pro Frame in Scroll-Richtung.
    ///
    /// Der Schritt wird nur ausgeführt, solange die jeweilige Grenze noch nicht
    /// erreicht ist; das Ergebnis bleibt in `[zoom_min, zoom_max]`.
    pub fn apply_wheel(&mut self, wheel: f32, step: f32, zoom_min: f32, zoom_max: f32) {
        if wheel > 0.0 && self.zoom < zoom_max {
            self.zoom += step;
        } else if wheel < 0.0 && self.zoom > zoom_min {
            self.zoom -= step;
        }
        // max/min statt clamp: vertauschte Grenzen dürfen nicht paniken
        self.zoom = self.zoom.max(zoom_min).min(zoom_max);
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_screen_to_world_identity_zoom() {
        let camera = Camera2D::default();
        let world = camera.screen_to_world(Vec2::new(300.0, 400.0));
        assert_relative_eq!(world.x, 100.0);
        assert_relative_eq!(world.y, 200.0);
    }

    #[test]
    fn test_world_screen_roundtrip_with_zoom() {
        let mut camera = Camera2D::default();
        camera.zoom = 1.5;
        camera.target = Vec2::new(10.0, -20.0);
        let world = Vec2::new(123.0, 45.0);
        let back = camera.screen_to_world(camera.world_to_screen(world));
        assert_relative_eq!(back.x, world.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, world.y, epsilon = 1e-3);
    }

    #[test]
    fn test_apply_wheel_respects_bounds() {
        let mut camera = Camera2D::default();
        for _ in 0..20 {
            camera.apply_wheel(1.0, 0.1, 0.5, 1.5);
        }
        assert_relative_eq!(camera.zoom, 1.5);

        for _ in 0..30 {
            camera.apply_wheel(-1.0, 0.1, 0.5, 1.5);
        }
        assert_relative_eq!(camera.zoom, 0.5);
    }

    #[test]
    fn test_apply_wheel_no_scroll_keeps_zoom() {
        let mut camera = Camera2D::default();
        camera.apply_wheel(0.0, 0.1, 0.5, 1.5);
        assert_relative_eq!(camera.zoom, 1.0);
    }

    #[test]
    fn test_apply_wheel_with_inverted_bounds_does_not_panic() {
        let mut camera = Camera2D::default();
        camera.apply_wheel(1.0, 0.1, 1.5, 0.5);
        assert!(camera.zoom.is_finite());
        assert_relative_eq!(camera.zoom, 0.5);
    }
}
