//! Bézier-Simulator Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AnimationClock, AppController, AppIntent, AppState, BlinkMode, ColorCycler, DemoMode,
    Direction, DragLockController, FrameOutcome, HostCommand, RandomSource, UiState, ViewState,
    WindowMode,
};
pub use core::{
    evaluate, sample_curve, skeleton, Camera2D, ColorAssignment, ColorRole, ControlPointSet,
    PaletteColor, Point, PointId, Rect, Shape2D, Skeleton, Solid3D,
};
pub use shared::SimulatorOptions;
pub use ui::{DrawList, FrameInput, Painter, PointerState};
