//! # Dashboard Configuration
//!
//! Loads the strongly-typed settings for the dashboard client: where the
//! platform API lives, where the session file is kept, and where CSV exports
//! are written.

use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{ApiSettings, ExportSettings, SessionSettings, Settings};

/// Loads the application configuration from `dashboard.toml`.
///
/// Any key can be overridden with a `DASHBOARD_`-prefixed environment
/// variable (e.g. `DASHBOARD_API__BASE_URL`), which keeps secrets and
/// per-machine paths out of the checked-in file.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    Ok(settings)
}
