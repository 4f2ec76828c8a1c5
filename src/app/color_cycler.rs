//! Farbwechsel ("Blinken") der fünf Farbrollen.

use crate::core::{ColorAssignment, PaletteColor};

/// Auslöse-Strategie für kontinuierliches Blinken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlinkMode {
    /// Akkumulator gegen festes Intervall
    #[default]
    TimeBased,
    /// Nur wenn `t` exakt eine Grenze (0.0 oder 1.0) erreicht
    BoundaryBased,
}

impl BlinkMode {
    pub const ALL: [BlinkMode; 2] = [BlinkMode::TimeBased, BlinkMode::BoundaryBased];

    pub fn label(self) -> &'static str {
        match self {
            BlinkMode::TimeBased => "Time",
            BlinkMode::BoundaryBased => "Boundary",
        }
    }
}

/// Injizierbare Zufallsquelle.
pub trait RandomSource {
    /// Gleichverteilter Index in `0..len` (`len > 0`).
    fn next_index(&mut self, len: usize) -> usize;
}

impl RandomSource for rand::rngs::StdRng {
    fn next_index(&mut self, len: usize) -> usize {
        rand::Rng::gen_range(self, 0..len)
    }
}

/// Zustandsmaschine für die Neuvergabe der Farbzuordnung.
#[derive(Debug, Clone)]
pub struct ColorCycler {
    assignment: ColorAssignment,
    accumulator: f32,
    interval: f32,
    accumulator_scale: f32,
    /// `t` des letzten Aufrufs, um an einer eingefrorenen Grenze nicht jedes Frame zu feuern
    last_t: Option<f32>,
}

impl ColorCycler {
    pub fn new(interval: f32, accumulator_scale: f32) -> Self {
        Self {
            assignment: ColorAssignment::default(),
            accumulator: 0.0,
            interval,
            accumulator_scale,
            last_t: None,
        }
    }

    pub fn assignment(&self) -> ColorAssignment {
        self.assignment
    }

    /// Vergibt alle fünf Rollen neu, jeweils unabhängig und gleichverteilt.
    pub fn regenerate(&mut self, rng: &mut dyn RandomSource) -> ColorAssignment {
        let palette = PaletteColor::ALL;
        self.assignment = ColorAssignment::from_roles(std::array::from_fn(|_| {
            palette[rng.next_index(palette.len()).min(palette.len() - 1)]
        }));
        log::debug!("Farben neu vergeben: {:?}", self.assignment);
        self.assignment
    }

    /// Prüft die Auslöser eines Frames.
    ///
    /// - `trigger_now` (Button "Generate Colors") vergibt sofort neu.
    /// - Sonst, falls `blink` gesetzt ist, entscheidet der Modus:
    ///   zeitbasiert über den Akkumulator, grenzbasiert bei `t == 0.0` oder `t == 1.0`.
    ///
    /// Liefert die neue Zuordnung oder `None`, wenn unverändert.
    pub fn maybe_refresh(
        &mut self,
        trigger_now: bool,
        blink: Option<BlinkMode>,
        t: f32,
        dt: f32,
        rng: &mut dyn RandomSource,
    ) -> Option<ColorAssignment> {
        let previous_t = self.last_t.replace(t);

        if trigger_now {
            return Some(self.regenerate(rng));
        }

        match blink? {
            BlinkMode::TimeBased => {
                self.accumulator += dt * self.accumulator_scale;
                if self.accumulator >= self.interval {
                    self.accumulator = 0.0;
                    return Some(self.regenerate(rng));
                }
                None
            }
            BlinkMode::BoundaryBased => {
                let at_boundary = t == 0.0 || t == 1.0;
                if at_boundary && previous_t != Some(t) {
                    return Some(self.regenerate(rng));
                }
                None
            }
        }
    }
}
