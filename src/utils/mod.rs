//! Persisted configuration.

pub mod settings;

pub use settings::{GameSettings, SettingsError, load_settings, save_settings};
