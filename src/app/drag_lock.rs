//! Exklusiver Drag-Lock: höchstens ein Kontrollpunkt folgt dem Zeiger.

use crate::core::{point_in_circle, ControlPointSet, PointId};
use glam::Vec2;

/// Hält die ID des aktuell gezogenen Punkts (oder keine).
///
/// Der Lock wird nur auf einer Druck-Flanke erworben, wenn kein Lock besteht und
/// der Hit-Test trifft. Die Loslass-Flanke gibt ihn bedingungslos frei.
#[derive(Debug, Clone, Default)]
pub struct DragLockController {
    locked_id: Option<PointId>,
}

impl DragLockController {
    pub fn new() -> Self {
        Self { locked_id: None }
    }

    pub fn is_locked(&self) -> bool {
        self.locked_id.is_some()
    }

    pub fn is_locked_by(&self, point_id: PointId) -> bool {
        self.locked_id == Some(point_id)
    }

    /// Hit-Radius eines Punkts: während eines aktiven Drags um `drag_scale` vergrößert.
    pub fn hit_radius(&self, base_radius: f32, drag_scale: f32) -> f32 {
        if self.is_locked() {
            base_radius * drag_scale
        } else {
            base_radius
        }
    }

    /// Versucht den Lock für `point_id` zu erwerben.
    pub fn try_acquire(&mut self, point_id: PointId, hit: bool, press_edge: bool) -> bool {
        if self.locked_id.is_some() || !hit || !press_edge {
            return false;
        }
        self.locked_id = Some(point_id);
        log::debug!("Drag-Lock erworben: P{}", point_id);
        true
    }

    /// Gibt den Lock bedingungslos frei (Loslass-Flanke).
    pub fn release_on_button_up(&mut self) {
        if let Some(id) = self.locked_id.take() {
            log::debug!("Drag-Lock freigegeben: P{}", id);
        }
    }

    /// Löst die Zeiger-Interaktion eines Frames über dem Punkt-Set auf.
    ///
    /// Punkte werden in stabiler Reihenfolge P0..P3 geprüft; bei überlappenden
    /// Hit-Bereichen gewinnt der zuerst geprüfte Punkt. Der gesperrte Punkt
    /// übernimmt die Welt-Zeigerposition. Rückgabe: ID des bewegten Punkts.
    pub fn resolve(
        &mut self,
        points: &mut ControlPointSet,
        pointer_world: Vec2,
        pressed: bool,
        released: bool,
        drag_scale: f32,
    ) -> Option<PointId> {
        let hits: Vec<(PointId, bool)> = points
            .points()
            .iter()
            .map(|p| {
                let radius = self.hit_radius(p.radius, drag_scale);
                (p.id, point_in_circle(pointer_world, p.position, radius))
            })
            .collect();

        for (id, hit) in hits {
            if self.try_acquire(id, hit, pressed) {
                break;
            }
        }

        let moved = self.locked_id;
        if let Some(id) = moved {
            points.set_position(id, pointer_world);
        }

        if released {
            self.release_on_button_up();
        }

        moved
    }
}
