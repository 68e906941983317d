//! The engine: owns storage, capabilities and configuration, and exposes
//! `load`/`start`.

mod config;
mod core;
mod entry;

pub use config::{Flow, RuntimeConfig};
pub use self::core::Runtime;
