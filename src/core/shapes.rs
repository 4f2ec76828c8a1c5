//! Formen für die 2D- und 3D-Demo-Modi.
//!
//! Geschlossene Enums statt String-Vergleich: jede Variante liefert ihre eigene Geometrie.

use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

/// 2D-Formen für den `Shape2D`-Modus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape2D {
    #[default]
    Circle,
    Square,
    Triangle,
}

impl Shape2D {
    pub const ALL: [Shape2D; 3] = [Shape2D::Circle, Shape2D::Square, Shape2D::Triangle];

    pub fn label(self) -> &'static str {
        match self {
            Shape2D::Circle => "Circle",
            Shape2D::Square => "Square",
            Shape2D::Triangle => "Triangle",
        }
    }

    /// Umriss als geschlossenes Polygon um `center` (letzter Punkt ≠ erster Punkt).
    ///
    /// Kreise werden mit 32 Segmenten approximiert.
    pub fn outline(self, center: Vec2, size: f32) -> Vec<Vec2> {
        let corners = match self {
            Shape2D::Circle => 32,
            Shape2D::Square => 4,
            Shape2D::Triangle => 3,
        };
        // Quadrat um 45° gedreht, damit die Kanten achsenparallel liegen
        let phase = match self {
            Shape2D::Square => TAU / 8.0,
            Shape2D::Triangle => -TAU / 4.0,
            Shape2D::Circle => 0.0,
        };
        (0..corners)
            .map(|i| {
                let angle = phase + TAU * i as f32 / corners as f32;
                center + Vec2::from_angle(angle) * size
            })
            .collect()
    }
}

/// 3D-Drahtgitterkörper für den `Shape3D`-Modus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Solid3D {
    #[default]
    Cube,
    Pyramid,
}

impl Solid3D {
    pub const ALL: [Solid3D; 2] = [Solid3D::Cube, Solid3D::Pyramid];

    pub fn label(self) -> &'static str {
        match self {
            Solid3D::Cube => "Cube",
            Solid3D::Pyramid => "Pyramid",
        }
    }

    fn vertices(self) -> Vec<Vec3> {
        match self {
            Solid3D::Cube => (0..8)
                .map(|i| {
                    Vec3::new(
                        if i & 1 == 0 { -1.0 } else { 1.0 },
                        if i & 2 == 0 { -1.0 } else { 1.0 },
                        if i & 4 == 0 { -1.0 } else { 1.0 },
                    )
                })
                .collect(),
            Solid3D::Pyramid => vec![
                Vec3::new(-1.0, 1.0, -1.0),
                Vec3::new(1.0, 1.0, -1.0),
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(-1.0, 1.0, 1.0),
                Vec3::new(0.0, -1.0, 0.0),
            ],
        }
    }

    fn edges(self) -> &'static [(usize, usize)] {
        match self {
            Solid3D::Cube => &[
                (0, 1),
                (2, 3),
                (4, 5),
                (6, 7),
                (0, 2),
                (1, 3),
                (4, 6),
                (5, 7),
                (0, 4),
                (1, 5),
                (2, 6),
                (3, 7),
            ],
            Solid3D::Pyramid => &[
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 0),
                (0, 4),
                (1, 4),
                (2, 4),
                (3, 4),
            ],
        }
    }

    /// Kanten des um die Y-Achse (`angle`) und leicht um X gekippten Körpers,
    /// orthographisch auf die Ebene projiziert und um `center` platziert.
    pub fn projected_edges(self, center: Vec2, size: f32, angle: f32) -> Vec<(Vec2, Vec2)> {
        let rotation = glam::Mat3::from_rotation_x(0.5) * glam::Mat3::from_rotation_y(angle);
        let projected: Vec<Vec2> = self
            .vertices()
            .into_iter()
            .map(|v| {
                let r = rotation * v;
                center + Vec2::new(r.x, r.y) * size
            })
            .collect();

        self.edges()
            .iter()
            .map(|&(a, b)| (projected[a], projected[b]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_outline_corner_count() {
        assert_eq!(Shape2D::Triangle.outline(Vec2::ZERO, 10.0).len(), 3);
        assert_eq!(Shape2D::Square.outline(Vec2::ZERO, 10.0).len(), 4);
        assert_eq!(Shape2D::Circle.outline(Vec2::ZERO, 10.0).len(), 32);
    }

    #[test]
    fn test_outline_points_on_radius() {
        let center = Vec2::new(50.0, -20.0);
        for p in Shape2D::Circle.outline(center, 12.0) {
            assert_relative_eq!(p.distance(center), 12.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_projected_edge_counts() {
        assert_eq!(Solid3D::Cube.projected_edges(Vec2::ZERO, 1.0, 0.3).len(), 12);
        assert_eq!(Solid3D::Pyramid.projected_edges(Vec2::ZERO, 1.0, 0.3).len(), 8);
    }

    #[test]
    fn test_projection_stays_within_bounding_radius() {
        // Würfel-Ecken haben Abstand √3 vom Zentrum; Rotation + Projektion vergrößert nicht
        let center = Vec2::new(10.0, 10.0);
        for (a, b) in Solid3D::Cube.projected_edges(center, 5.0, 1.2) {
            assert!(a.distance(center) <= 5.0 * 3f32.sqrt() + 1e-3);
            assert!(b.distance(center) <= 5.0 * 3f32.sqrt() + 1e-3);
        }
    }
}
