//! Application State: zentrale Datenhaltung.
//!
//! Alle Entitäten werden einmal beim Start erzeugt und leben bis zum Prozessende.
//! Der Zustand gehört ausschließlich der Frame-Schleife.

mod app_state;
mod ui;
mod view;

pub use app_state::AppState;
pub use ui::UiState;
pub use view::{DemoMode, ViewState, WindowMode};
