//! Application-Layer: State, Intents, Controller und Simulation.

pub mod animation;
pub mod color_cycler;
pub mod controller;
pub mod drag_lock;
pub mod events;
pub mod handlers;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Punkte, Uhr, View, Widgets).
pub mod state;

pub use crate::core::Camera2D;
pub use animation::{AnimationClock, Direction};
pub use color_cycler::{BlinkMode, ColorCycler, RandomSource};
pub use controller::{AppController, FrameOutcome};
pub use drag_lock::DragLockController;
pub use events::{AppIntent, HostCommand};
pub use state::{AppState, DemoMode, UiState, ViewState, WindowMode};
