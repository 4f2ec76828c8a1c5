use crate::core::{Camera2D, Shape2D, Solid3D};

/// Aktive Demo (über das Mode-Menü gewählt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoMode {
    /// Lineare Interpolation P0 → P3
    Line,
    /// Kubische Bézier-Kurve mit de-Casteljau-Gerüst
    #[default]
    Bezier,
    /// 2D-Form am Marker
    Shape2D,
    /// Rotierender 3D-Drahtgitterkörper am Marker
    Shape3D,
}

impl DemoMode {
    pub const ALL: [DemoMode; 4] = [
        DemoMode::Line,
        DemoMode::Bezier,
        DemoMode::Shape2D,
        DemoMode::Shape3D,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DemoMode::Line => "Line",
            DemoMode::Bezier => "Bezier",
            DemoMode::Shape2D => "2D Shape",
            DemoMode::Shape3D => "3D Shape",
        }
    }
}

/// Fenster-Modus (View-Menü); die beiden Einträge schließen sich gegenseitig aus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    #[default]
    Windowed,
    Fullscreen,
}

impl WindowMode {
    pub fn label(self) -> &'static str {
        match self {
            WindowMode::Windowed => "Windowed",
            WindowMode::Fullscreen => "Fullscreen",
        }
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// 2D-Kamera für die Welt-Ansicht
    pub camera: Camera2D,
    pub demo_mode: DemoMode,
    pub window_mode: WindowMode,
    /// Konstruktionspunkte A..E zeichnen
    pub draw_skeleton: bool,
    /// Gerüstlinien A-B, B-C, D-E zeichnen (nur zusammen mit `draw_skeleton`)
    pub draw_skeleton_lines: bool,
    pub shape_2d: Shape2D,
    pub solid_3d: Solid3D,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new(camera: Camera2D) -> Self {
        Self {
            camera,
            demo_mode: DemoMode::Bezier,
            window_mode: WindowMode::Windowed,
            draw_skeleton: true,
            draw_skeleton_lines: true,
            shape_2d: Shape2D::default(),
            solid_3d: Solid3D::default(),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Camera2D::default())
    }
}
