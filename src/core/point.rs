//! Punkte und das Kontrollpunkt-Set (P0..P3) einer Kurve.

use super::color::{PaletteColor, Rgba};
use glam::Vec2;

/// Stabile Punkt-ID innerhalb eines Punkt-Sets.
pub type PointId = u32;

/// Ein darstellbarer, ggf. verschiebbarer Punkt.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Einmalig beim Aufbau des Sets vergeben, nie wiederverwendet
    pub id: PointId,
    /// Position in Welt-Koordinaten
    pub position: Vec2,
    pub radius: f32,
    pub color: Rgba,
    pub label: String,
}

impl Point {
    pub fn new(id: PointId, position: Vec2, radius: f32, color: Rgba, label: &str) -> Self {
        Self {
            id,
            position,
            radius,
            color,
            label: label.to_string(),
        }
    }

    /// Koordinatenanzeige neben dem Punkt, auf zwei Nachkommastellen gerundet.
    pub fn coordinate_text(&self) -> String {
        format!("x: {:.2} y: {:.2}", self.position.x, self.position.y)
    }
}

/// Standardpositionen der Kontrollpunkte P0..P3 (Welt-Koordinaten).
pub const DEFAULT_CONTROL_POSITIONS: [Vec2; 4] = [
    Vec2::new(100.0, 200.0),
    Vec2::new(80.0, 100.0),
    Vec2::new(320.0, 100.0),
    Vec2::new(300.0, 200.0),
];

/// Genau vier Kontrollpunkte mit IDs `0..3`.
///
/// Nur die Positionen sind während der Laufzeit veränderlich; Identitäten
/// bleiben auch über `reset` hinweg erhalten.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPointSet {
    points: [Point; 4],
}

impl ControlPointSet {
    /// Erstellt das Set an den Standardpositionen.
    pub fn new(radius: f32) -> Self {
        let color = PaletteColor::Lime.rgba();
        let points = std::array::from_fn(|i| {
            Point::new(
                i as PointId,
                DEFAULT_CONTROL_POSITIONS[i],
                radius,
                color,
                &format!("P{i}"),
            )
        });
        Self { points }
    }

    /// Punkte in stabiler Reihenfolge P0..P3.
    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    /// Positionen als Array für die Kurvenauswertung.
    pub fn positions(&self) -> [Vec2; 4] {
        std::array::from_fn(|i| self.points[i].position)
    }

    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Setzt die Position eines Punkts. Unbekannte IDs werden ignoriert.
    pub fn set_position(&mut self, id: PointId, position: Vec2) {
        if let Some(point) = self.points.iter_mut().find(|p| p.id == id) {
            point.position = position;
        }
    }

    /// Färbt alle Kontrollpunkte ein.
    pub fn set_color(&mut self, color: Rgba) {
        for point in &mut self.points {
            point.color = color;
        }
    }

    /// Stellt die Standardpositionen wieder her (IDs bleiben unverändert).
    pub fn reset(&mut self) {
        for (point, default) in self.points.iter_mut().zip(DEFAULT_CONTROL_POSITIONS) {
            point.position = default;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct_and_ordered() {
        let set = ControlPointSet::new(20.0);
        let ids: Vec<_> = set.points().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        let labels: Vec<_> = set.points().iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["P0", "P1", "P2", "P3"]);
    }

    #[test]
    fn test_reset_restores_defaults_keeps_ids() {
        let mut set = ControlPointSet::new(20.0);
        set.set_position(0, Vec2::new(-5.0, 7.0));
        set.set_position(3, Vec2::new(999.0, 1.0));
        set.reset();
        assert_eq!(set.positions(), DEFAULT_CONTROL_POSITIONS);
        assert_eq!(set.get(3).map(|p| p.id), Some(3));
    }

    #[test]
    fn test_set_position_unknown_id_ignored() {
        let mut set = ControlPointSet::new(20.0);
        set.set_position(42, Vec2::ZERO);
        assert_eq!(set.positions(), DEFAULT_CONTROL_POSITIONS);
    }

    #[test]
    fn test_coordinate_text() {
        let point = Point::new(0, Vec2::new(100.0, 33.333), 20.0, [0; 4], "P0");
        assert_eq!(point.coordinate_text(), "x: 100.00 y: 33.33");
    }
}
