//! Configuration management.
//!
//! Sources are layered: built-in defaults, then an optional `paster.toml`
//! (or an explicit file), then `PASTER__`-prefixed environment variables
//! such as `PASTER__SERVER__PORT=8080` or `PASTER__WORKSPACE__ROOT=/src`.
//!
//! # Example
//!
//! ```no_run
//! use paster_kernel::infrastructure::config::Settings;
//!
//! let settings = Settings::new()?;
//! # Ok::<(), config::ConfigError>(())
//! ```

pub mod server;
pub mod telemetry;
pub mod workspace;

pub use server::ServerSettings;
pub use telemetry::TelemetrySettings;
pub use workspace::WorkspaceSettings;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Default name of the optional settings file in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "paster";

/// Top-level configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// HTTP bridge settings.
    pub server: ServerSettings,
    /// Logging settings.
    pub telemetry: TelemetrySettings,
    /// Workspace settings.
    #[serde(default)]
    pub workspace: WorkspaceSettings,
}

impl Settings {
    /// Loads settings from defaults, `paster.toml` if present, and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Like [`Settings::new`], but reads `file` (which must exist) instead of
    /// the optional default file.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let s = Config::builder()
            // Start with default values
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 9090)?
            .set_default("telemetry.log_level", "info")?
            .set_default("telemetry.json", false)?
            .set_default("workspace.confine_to_root", true)?
            .add_source(file_source)
            // Merge in Environment variables
            .add_source(Environment::with_prefix("PASTER").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file_overrides_defaults() -> anyhow::Result<()> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(
            file,
            "[server]\nport = 7000\n\n[workspace]\nroot = \"/tmp/project\"\nconfine_to_root = false"
        )?;

        let settings = Settings::load(Some(file.path()))?;
        assert_eq!(settings.server.port, 7000);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(
            settings.workspace.root.as_deref(),
            Some(Path::new("/tmp/project"))
        );
        assert!(!settings.workspace.confine_to_root);
        assert_eq!(settings.telemetry.log_level, "info");
        Ok(())
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Settings::load(Some(Path::new("/nonexistent/paster-settings.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_workspace_defaults() {
        let workspace = WorkspaceSettings::default();
        assert!(workspace.root.is_none());
        assert!(workspace.confine_to_root);
    }
}
