//! Feature-Handler für die Intent-Verarbeitung.
//!
//! Jeder Handler gruppiert die Zustandsänderungen eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod scene;
pub mod view;
