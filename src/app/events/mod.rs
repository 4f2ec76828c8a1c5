//! AppIntent- und HostCommand-Enums für den Datenfluss UI → Controller → Host.

mod intent;

pub use intent::{AppIntent, HostCommand};
