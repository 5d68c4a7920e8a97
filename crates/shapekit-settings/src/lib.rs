//! ShapeKit Settings Crate
//!
//! Handles editor configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{EditingSettings, EditorConfig, SerializationSettings, MAX_PRECISION};
pub use error::{SettingsError, SettingsResult};
