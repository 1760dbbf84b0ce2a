use anyhow::{Context, Result};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use super::config::TelemetrySettings;

/// Builder for setting up logging.
///
/// Output always goes to stderr so that command output on stdout can be
/// piped. `RUST_LOG` takes precedence over the configured level.
pub struct TelemetryBuilder {
    service_name: String,
    log_level: String,
    json: bool,
    span_events: bool,
}

impl TelemetryBuilder {
    /// Plain-text output at `info` level for `service_name`.
    #[must_use]
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: "info".to_string(),
            json: false,
            span_events: false,
        }
    }

    /// Starts from the `telemetry` section of the settings.
    #[must_use]
    pub fn from_settings(service_name: impl Into<String>, settings: &TelemetrySettings) -> Self {
        Self::new(service_name)
            .with_log_level(settings.log_level.clone())
            .with_json(settings.json)
    }

    /// Filter directive used when `RUST_LOG` is unset, e.g. `debug` or
    /// `paster_kernel=trace`.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Emit JSON lines instead of human readable output.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Also log span close events with their timings.
    #[must_use]
    pub fn with_span_events(mut self, enabled: bool) -> Self {
        self.span_events = enabled;
        self
    }

    /// Installs the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter directive is invalid or a global
    /// subscriber is already installed.
    pub fn init(self) -> Result<()> {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&self.log_level)
                .with_context(|| format!("Invalid log level '{}'", self.log_level))?,
        };

        let span_events = if self.span_events {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let fmt_layer = if self.json {
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_span_events(span_events)
                .boxed()
        } else {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_span_events(span_events)
                .boxed()
        };

        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("Failed to init subscriber")?;

        tracing::debug!(service = %self.service_name, "Logging initialised");
        Ok(())
    }
}
