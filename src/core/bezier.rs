//! Kubische Bézier-Auswertung nach de Casteljau.
//!
//! Alle Funktionen sind rein: keine Seiteneffekte, deterministisch, O(1) pro Auswertung.
//! `t` wird nicht geklemmt; Aufrufer liefern Werte in `[0, 1]`.

use glam::Vec2;

/// Die fünf Zwischenpunkte der de-Casteljau-Konstruktion.
///
/// `a`, `b`, `c` liegen auf dem Kontrollpolygon, `d` und `e` auf den Strecken A-B bzw. B-C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skeleton {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
    pub d: Vec2,
    pub e: Vec2,
}

impl Skeleton {
    /// Punkt auf der Kurve: letzte Interpolation zwischen `d` und `e`.
    pub fn curve_point(&self, t: f32) -> Vec2 {
        self.d.lerp(self.e, t)
    }

    /// Punkte in Reihenfolge A..E mit Beschriftung.
    pub fn labeled(&self) -> [(&'static str, Vec2); 5] {
        [
            ("A", self.a),
            ("B", self.b),
            ("C", self.c),
            ("D", self.d),
            ("E", self.e),
        ]
    }
}

/// Berechnet das Konstruktionsgerüst für Parameter `t`.
pub fn skeleton(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Skeleton {
    let a = p0.lerp(p1, t);
    let b = p1.lerp(p2, t);
    let c = p2.lerp(p3, t);
    let d = a.lerp(b, t);
    let e = b.lerp(c, t);
    Skeleton { a, b, c, d, e }
}

/// Punkt auf der kubischen Bézier-Kurve bei Parameter `t`.
pub fn evaluate(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    skeleton(p0, p1, p2, p3, t).curve_point(t)
}

/// Tastet die Kurve in festen `t`-Schritten ab (inklusive beider Endpunkte).
///
/// Aufeinanderfolgende Samples werden als Liniensegmente gezeichnet.
/// `step` muss > 0 sein, sonst wird nur der Startpunkt geliefert.
pub fn sample_curve(points: [Vec2; 4], step: f32) -> Vec<Vec2> {
    let [p0, p1, p2, p3] = points;
    if step <= 0.0 || !step.is_finite() {
        return vec![p0];
    }

    let count = (1.0 / step).ceil() as usize;
    let mut samples = Vec::with_capacity(count + 1);
    for i in 0..count {
        let t = i as f32 * step;
        samples.push(evaluate(p0, p1, p2, p3, t));
    }
    // Endpunkt exakt übernehmen, unabhängig von Rundungsfehlern der Schrittweite
    samples.push(evaluate(p0, p1, p2, p3, 1.0));
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn control_points() -> [Vec2; 4] {
        [
            Vec2::new(100.0, 200.0),
            Vec2::new(80.0, 100.0),
            Vec2::new(320.0, 100.0),
            Vec2::new(300.0, 200.0),
        ]
    }

    #[test]
    fn test_evaluate_endpoints_exact() {
        let [p0, p1, p2, p3] = control_points();
        assert_eq!(evaluate(p0, p1, p2, p3, 0.0), p0);
        assert_eq!(evaluate(p0, p1, p2, p3, 1.0), p3);
    }

    #[test]
    fn test_evaluate_matches_bernstein_form() {
        let [p0, p1, p2, p3] = control_points();
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let inv = 1.0 - t;
            let expected = inv * inv * inv * p0
                + 3.0 * inv * inv * t * p1
                + 3.0 * inv * t * t * p2
                + t * t * t * p3;
            let actual = evaluate(p0, p1, p2, p3, t);
            assert_relative_eq!(actual.x, expected.x, epsilon = 1e-3);
            assert_relative_eq!(actual.y, expected.y, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_evaluate_translation_invariant() {
        let [p0, p1, p2, p3] = control_points();
        let offset = Vec2::new(-37.5, 12.25);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let moved = evaluate(p0 + offset, p1 + offset, p2 + offset, p3 + offset, t);
            let expected = evaluate(p0, p1, p2, p3, t) + offset;
            assert_relative_eq!(moved.x, expected.x, epsilon = 1e-3);
            assert_relative_eq!(moved.y, expected.y, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_skeleton_midpoint() {
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(0.0, 10.0);
        let p2 = Vec2::new(10.0, 10.0);
        let p3 = Vec2::new(10.0, 0.0);
        let s = skeleton(p0, p1, p2, p3, 0.5);

        assert_eq!(s.a, Vec2::new(0.0, 5.0));
        assert_eq!(s.b, Vec2::new(5.0, 10.0));
        assert_eq!(s.c, Vec2::new(10.0, 5.0));
        assert_eq!(s.d, Vec2::new(2.5, 7.5));
        assert_eq!(s.e, Vec2::new(7.5, 7.5));
        assert_eq!(s.curve_point(0.5), Vec2::new(5.0, 7.5));
    }

    #[test]
    fn test_sample_curve_includes_endpoints() {
        let points = control_points();
        let samples = sample_curve(points, 0.01);
        assert_eq!(samples.len(), 101);
        assert_eq!(samples[0], points[0]);
        assert_eq!(*samples.last().unwrap(), points[3]);
    }

    #[test]
    fn test_sample_curve_invalid_step() {
        let points = control_points();
        assert_eq!(sample_curve(points, 0.0), vec![points[0]]);
    }
}
