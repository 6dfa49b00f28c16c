//! Tracing subscriber setup.
//!
//! Log output always goes to standard error so it never mixes with probe
//! results on standard output. The filter defaults to `warn`, which keeps the
//! console quiet unless the tool itself misbehaves.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Variable holding filter directives (e.g. `probe_aws=debug`).
pub const LOG_FILTER_VAR: &str = "BEDROCK_PROBE_LOG";

/// Variable selecting the output format.
pub const LOG_FORMAT_VAR: &str = "BEDROCK_PROBE_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingFormat {
    /// Multi-line human-readable output.
    Pretty,
    /// Compact single-line output (default).
    #[default]
    Compact,
    /// JSON structured output for log aggregation.
    Json,
}

impl TracingFormat {
    /// Parses a format name, case-insensitively.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Tracing configuration for the binary.
#[derive(Debug, Clone)]
pub struct Tracing {
    /// Maximum log level when no filter is given.
    level: Level,
    /// Output format.
    format: TracingFormat,
    /// Filter directives (e.g. "probe_core=debug,aws_smithy_runtime=warn").
    env_filter: Option<String>,
}

impl Default for Tracing {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            format: TracingFormat::default(),
            env_filter: None,
        }
    }
}

impl Tracing {
    /// Reads [`LOG_FILTER_VAR`] (falling back to `RUST_LOG`) and
    /// [`LOG_FORMAT_VAR`].
    #[must_use]
    pub fn from_env() -> Self {
        let mut tracing = Self::default();

        if let Some(filter) = std::env::var(LOG_FILTER_VAR)
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
            .filter(|filter| !filter.is_empty())
        {
            tracing = tracing.with_env_filter(filter);
        }

        if let Some(format) = std::env::var(LOG_FORMAT_VAR)
            .ok()
            .and_then(|name| TracingFormat::parse(&name))
        {
            tracing = tracing.with_format(format);
        }

        tracing
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: TracingFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets filter directives.
    ///
    /// Format: `target=level,target=level,...`
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    fn filter(&self) -> EnvFilter {
        match &self.env_filter {
            Some(filter) => {
                EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(self.level.as_str()))
            }
            None => EnvFilter::new(self.level.as_str()),
        }
    }

    /// Installs the global subscriber.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init(&self) {
        let env_filter = self.filter();
        let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

        // try_init().ok() ignores errors if already initialized
        match self.format {
            TracingFormat::Pretty => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(layer.pretty())
                    .try_init()
                    .ok();
            }
            TracingFormat::Compact => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(layer.compact())
                    .try_init()
                    .ok();
            }
            TracingFormat::Json => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(layer.json())
                    .try_init()
                    .ok();
            }
        }

        tracing::debug!(level = %self.level, format = ?self.format, "tracing initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_is_compact() {
        assert_eq!(TracingFormat::default(), TracingFormat::Compact);
    }

    #[test]
    fn default_level_is_warn() {
        assert_eq!(Tracing::default().level, Level::WARN);
    }

    #[test]
    fn parses_format_names() {
        assert_eq!(TracingFormat::parse("JSON"), Some(TracingFormat::Json));
        assert_eq!(TracingFormat::parse(" pretty "), Some(TracingFormat::Pretty));
        assert_eq!(TracingFormat::parse("compact"), Some(TracingFormat::Compact));
        assert_eq!(TracingFormat::parse("xml"), None);
    }

    #[test]
    fn builder_methods() {
        let tracing = Tracing::default()
            .with_format(TracingFormat::Json)
            .with_env_filter("probe_core=debug");

        assert_eq!(tracing.format, TracingFormat::Json);
        assert_eq!(tracing.env_filter.as_deref(), Some("probe_core=debug"));
    }

    #[test]
    fn invalid_filter_falls_back_to_level() {
        let tracing = Tracing::default().with_env_filter("probe_core=notalevel");
        assert_eq!(tracing.filter().to_string(), "warn");
    }

    #[test]
    fn init_twice_is_harmless() {
        Tracing::default().init();
        Tracing::default().init();
    }
}
