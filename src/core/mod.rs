//! Core-Domänentypen: Geometrie, Bézier-Auswertung, Punkte, Farben, Kamera, Formen.

pub mod bezier;
pub mod camera;
pub mod color;
pub mod geometry;
pub mod point;
pub mod shapes;

pub use bezier::{evaluate, sample_curve, skeleton, Skeleton};
pub use camera::Camera2D;
pub use color::{ColorAssignment, ColorRole, PaletteColor, Rgba};
pub use geometry::{point_in_circle, try_normalize, DegenerateVectorError, Rect};
pub use point::{ControlPointSet, Point, PointId, DEFAULT_CONTROL_POSITIONS};
pub use shapes::{Shape2D, Solid3D};
