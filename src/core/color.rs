//! Farben: feste Palette für den Farbwechsel und Rollen-Zuordnung.

/// RGBA-Farbe mit 8 Bit pro Kanal.
pub type Rgba = [u8; 4];

// ── Feste UI-Farben ─────────────────────────────────────────────────

pub const BLACK: Rgba = [0, 0, 0, 255];
/// Hintergrund der Zeichenfläche.
pub const BACKGROUND: Rgba = [245, 245, 245, 255];
pub const LIGHT_GRAY: Rgba = [200, 200, 200, 255];
pub const GRAY: Rgba = [130, 130, 130, 255];
pub const DARK_GRAY: Rgba = [80, 80, 80, 255];
pub const DARK_BROWN: Rgba = [76, 63, 47, 255];
pub const DARK_BLUE: Rgba = [0, 82, 172, 255];
pub const DARK_PURPLE: Rgba = [112, 31, 126, 255];
pub const RED: Rgba = [230, 41, 55, 255];
pub const DARK_GREEN: Rgba = [0, 117, 44, 255];

/// Einträge der Farbpalette für den Farbwechsel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Red,
    Green,
    Blue,
    Yellow,
    Brown,
    Lime,
    Pink,
    Purple,
    Gold,
    DarkBlue,
    DarkPurple,
    DarkGray,
}

impl PaletteColor {
    /// Alle Paletteneinträge in fester Reihenfolge (Index = Zufallsindex).
    pub const ALL: [PaletteColor; 12] = [
        PaletteColor::Red,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Yellow,
        PaletteColor::Brown,
        PaletteColor::Lime,
        PaletteColor::Pink,
        PaletteColor::Purple,
        PaletteColor::Gold,
        PaletteColor::DarkBlue,
        PaletteColor::DarkPurple,
        PaletteColor::DarkGray,
    ];

    pub fn rgba(self) -> Rgba {
        match self {
            PaletteColor::Red => RED,
            PaletteColor::Green => [0, 228, 48, 255],
            PaletteColor::Blue => [0, 121, 241, 255],
            PaletteColor::Yellow => [253, 249, 0, 255],
            PaletteColor::Brown => [127, 106, 79, 255],
            PaletteColor::Lime => [0, 158, 47, 255],
            PaletteColor::Pink => [255, 109, 194, 255],
            PaletteColor::Purple => [200, 122, 255, 255],
            PaletteColor::Gold => [255, 203, 0, 255],
            PaletteColor::DarkBlue => DARK_BLUE,
            PaletteColor::DarkPurple => DARK_PURPLE,
            PaletteColor::DarkGray => DARK_GRAY,
        }
    }
}

/// Logische Rollen, denen je eine Palettenfarbe zugeordnet ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Animierter Marker ("Ball")
    Marker,
    /// Die vier Kontrollpunkte
    ControlPoints,
    /// Konstruktionspunkte A..E
    ConstructionPoints,
    /// Verbindungslinien des Kontrollpolygons
    PointLines,
    /// Linien des de-Casteljau-Gerüsts
    SkeletonLines,
}

impl ColorRole {
    pub const ALL: [ColorRole; 5] = [
        ColorRole::Marker,
        ColorRole::ControlPoints,
        ColorRole::ConstructionPoints,
        ColorRole::PointLines,
        ColorRole::SkeletonLines,
    ];
}

/// Zuordnung Rolle → Palettenfarbe. Wird immer als Ganzes ersetzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorAssignment {
    pub marker: PaletteColor,
    pub control_points: PaletteColor,
    pub construction_points: PaletteColor,
    pub point_lines: PaletteColor,
    pub skeleton_lines: PaletteColor,
}

impl ColorAssignment {
    /// Baut eine Zuordnung aus fünf Farben in Reihenfolge von `ColorRole::ALL`.
    pub fn from_roles(colors: [PaletteColor; 5]) -> Self {
        let [marker, control_points, construction_points, point_lines, skeleton_lines] = colors;
        Self {
            marker,
            control_points,
            construction_points,
            point_lines,
            skeleton_lines,
        }
    }

    pub fn get(&self, role: ColorRole) -> PaletteColor {
        match role {
            ColorRole::Marker => self.marker,
            ColorRole::ControlPoints => self.control_points,
            ColorRole::ConstructionPoints => self.construction_points,
            ColorRole::PointLines => self.point_lines,
            ColorRole::SkeletonLines => self.skeleton_lines,
        }
    }

    /// RGBA-Wert der Rolle.
    pub fn rgba(&self, role: ColorRole) -> Rgba {
        self.get(role).rgba()
    }
}

impl Default for ColorAssignment {
    fn default() -> Self {
        Self {
            marker: PaletteColor::Blue,
            control_points: PaletteColor::Lime,
            construction_points: PaletteColor::Pink,
            point_lines: PaletteColor::Gold,
            skeleton_lines: PaletteColor::Purple,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_roles_keeps_role_order() {
        let assignment = ColorAssignment::from_roles([
            PaletteColor::Red,
            PaletteColor::Green,
            PaletteColor::Blue,
            PaletteColor::Yellow,
            PaletteColor::Brown,
        ]);
        let colors: Vec<_> = ColorRole::ALL.iter().map(|r| assignment.get(*r)).collect();
        assert_eq!(
            colors,
            vec![
                PaletteColor::Red,
                PaletteColor::Green,
                PaletteColor::Blue,
                PaletteColor::Yellow,
                PaletteColor::Brown,
            ]
        );
    }

    #[test]
    fn test_palette_entries_distinct() {
        let mut seen = std::collections::HashSet::new();
        for color in PaletteColor::ALL {
            assert!(seen.insert(color.rgba()), "{:?} doppelt", color);
        }
    }
}
