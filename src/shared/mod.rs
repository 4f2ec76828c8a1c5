//! Geteilte Typen für layer-übergreifende Verträge (Laufzeit-Optionen).

pub mod options;

pub use options::SimulatorOptions;
