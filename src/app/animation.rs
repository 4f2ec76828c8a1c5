//! Animations-Uhr: treibt den Kurvenparameter `t` hin und her (Ping-Pong).

/// Laufrichtung des Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// Ping-Pong-Treiber für `t ∈ [0, 1]` mit Pause und manuellem Modus.
///
/// - Automatisch: `t += ±k·dt`; an den Grenzen wird exakt auf 0.0 bzw. 1.0
///   gepinnt und die Richtung gewechselt. Überschuss wird verworfen.
/// - Manuell: `t` folgt einem extern gelieferten Wert (Slider). Der automatische
///   Wert bleibt intern erhalten, damit das Zurückschalten dort weitermacht.
/// - Pausiert: `t` bleibt eingefroren, unabhängig vom Modus.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    t: f32,
    auto_t: f32,
    direction: Direction,
    paused: bool,
    manual_mode: bool,
    speed: f32,
}

impl AnimationClock {
    /// Erstellt eine Uhr bei `t = 0`, vorwärts, mit Geschwindigkeitsfaktor `k`.
    pub fn new(speed: f32) -> Self {
        Self {
            t: 0.0,
            auto_t: 0.0,
            direction: Direction::Forward,
            paused: false,
            manual_mode: false,
            speed,
        }
    }

    pub fn t(&self) -> f32 {
        self.t
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_manual(&self) -> bool {
        self.manual_mode
    }

    /// Mutabler Zugriff für die Pause-Checkbox.
    pub fn paused_mut(&mut self) -> &mut bool {
        &mut self.paused
    }

    /// Mutabler Zugriff für die Manual-Mode-Checkbox.
    pub fn manual_mode_mut(&mut self) -> &mut bool {
        &mut self.manual_mode
    }

    /// Flankengetriggertes Umschalten der Pause (Taste P).
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn set_manual_mode(&mut self, manual: bool) {
        self.manual_mode = manual;
    }

    /// Setzt `t` auf 0 und die Richtung auf vorwärts. Pause/Modus bleiben unverändert.
    pub fn reset(&mut self) {
        self.t = 0.0;
        self.auto_t = 0.0;
        self.direction = Direction::Forward;
    }

    /// Schreitet um `speed · dt` fort bzw. übernimmt `manual_value` im manuellen Modus.
    pub fn advance(&mut self, dt: f32, manual_value: f32) -> f32 {
        self.advance_by(self.speed * dt, manual_value)
    }

    /// Schreitet um einen festen Parameterschritt fort.
    pub fn advance_by(&mut self, step: f32, manual_value: f32) -> f32 {
        if self.paused {
            return self.t;
        }

        if self.manual_mode {
            self.t = manual_value.clamp(0.0, 1.0);
            return self.t;
        }

        let next = self.auto_t + self.direction.sign() * step;
        if next >= 1.0 {
            self.auto_t = 1.0;
            self.direction = Direction::Backward;
        } else if next <= 0.0 {
            self.auto_t = 0.0;
            self.direction = Direction::Forward;
        } else {
            self.auto_t = next;
        }

        self.t = self.auto_t;
        self.t
    }
}
